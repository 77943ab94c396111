use crate::{CoreError, CoreErrorResult, ExperienceDraft, format_display_date};

use serde::{Deserialize, Serialize};

/// End date marker for an ongoing position
pub const PRESENT: &str = "Present";
pub const DEFAULT_LOCATION: &str = "Not specified";
pub const DEFAULT_DESCRIPTION: &str = "No description provided.";

/// A committed work-experience record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: u64,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub description: String,
}

impl Experience {
    /// Build a record from a draft, trimming every field and filling the
    /// location, end date and description defaults.
    ///
    /// The draft is expected to have passed [`ExperienceDraft::validate`].
    pub fn from_draft(id: u64, draft: &ExperienceDraft) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            company: draft.company.trim().to_string(),
            location: or_default(&draft.location, DEFAULT_LOCATION),
            from: draft.from.trim().to_string(),
            to: or_default(&draft.to, PRESENT),
            description: or_default(&draft.description, DEFAULT_DESCRIPTION),
        }
    }

    /// Next id for a new record: one past the larger of the current maximum
    /// and `high_water`, the largest id ever handed out. Starts at 1.
    pub fn next_id(experiences: &[Experience], high_water: u64) -> CoreErrorResult<u64> {
        let last = Self::max_id(experiences).max(high_water);
        last.checked_add(1).ok_or_else(|| CoreError::id_exhausted(last))
    }

    /// Largest id in `experiences`, 0 when empty
    pub fn max_id(experiences: &[Experience]) -> u64 {
        experiences.iter().map(|e| e.id).max().unwrap_or(0)
    }

    pub fn is_current(&self) -> bool {
        self.to == PRESENT
    }

    /// "Mar 2021 - Present" style range for display
    pub fn display_range(&self) -> String {
        format!(
            "{} - {}",
            format_display_date(&self.from),
            format_display_date(&self.to)
        )
    }
}

fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
