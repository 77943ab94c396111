use crate::Experience;

use serde::{Deserialize, Serialize};

/// File name used when exporting the experience list
pub const EXPORT_FILE_NAME: &str = "experiences.json";

/// `{ "experiences": [...] }` document shared by the seed source and export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceDocument {
    /// Missing in the source document means no experiences
    #[serde(default)]
    pub experiences: Vec<Experience>,
}

impl ExperienceDocument {
    pub fn new(experiences: Vec<Experience>) -> Self {
        Self { experiences }
    }

    /// Pretty-printed JSON, two-space indented
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
