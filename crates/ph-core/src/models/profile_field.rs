use crate::{CoreError, CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Editable fields of the profile record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    FullName,
    Email,
    Phone,
    LinkedinUrl,
    GithubUrl,
    PortfolioUrl,
    CoverLetter,
}

impl ProfileField {
    /// All fields in display order
    pub const ALL: [ProfileField; 7] = [
        ProfileField::FullName,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::LinkedinUrl,
        ProfileField::GithubUrl,
        ProfileField::PortfolioUrl,
        ProfileField::CoverLetter,
    ];

    /// Wire name used by the record store
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::LinkedinUrl => "linkedinUrl",
            Self::GithubUrl => "githubUrl",
            Self::PortfolioUrl => "portfolioUrl",
            Self::CoverLetter => "coverLetter",
        }
    }

    /// Human-facing label used in copy notices
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone No",
            Self::LinkedinUrl => "LinkedIn URL",
            Self::GithubUrl => "GitHub URL",
            Self::PortfolioUrl => "Portfolio URL",
            Self::CoverLetter => "Cover Letter",
        }
    }
}

impl FromStr for ProfileField {
    type Err = CoreError;

    /// Accepts the wire name as well as snake_case and kebab-case spellings.
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "fullname" | "name" => Ok(Self::FullName),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "linkedinurl" | "linkedin" => Ok(Self::LinkedinUrl),
            "githuburl" | "github" => Ok(Self::GithubUrl),
            "portfoliourl" | "portfolio" => Ok(Self::PortfolioUrl),
            "coverletter" | "cover" => Ok(Self::CoverLetter),
            _ => Err(CoreError::UnknownProfileField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
