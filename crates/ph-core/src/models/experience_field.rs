use crate::{CoreError, CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Fields of an experience record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Title,
    Company,
    Location,
    From,
    To,
    Description,
}

impl ExperienceField {
    /// Fields that must be non-empty, in the order they are checked
    pub const REQUIRED: [ExperienceField; 3] = [
        ExperienceField::Title,
        ExperienceField::Company,
        ExperienceField::From,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Company => "company",
            Self::Location => "location",
            Self::From => "from",
            Self::To => "to",
            Self::Description => "description",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    /// Message shown when a required field is missing
    pub fn validation_message(&self) -> &'static str {
        match self {
            Self::Title => "Please enter a job title.",
            Self::Company => "Please enter a company name.",
            Self::From => "Please select a start date.",
            Self::Location => "Location is invalid.",
            Self::To => "End date is invalid.",
            Self::Description => "Description is invalid.",
        }
    }
}

impl FromStr for ExperienceField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "company" => Ok(Self::Company),
            "location" => Ok(Self::Location),
            "from" => Ok(Self::From),
            "to" => Ok(Self::To),
            "description" => Ok(Self::Description),
            _ => Err(CoreError::UnknownExperienceField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ExperienceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
