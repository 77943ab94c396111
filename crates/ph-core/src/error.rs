use crate::ExperienceField;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        field: ExperienceField,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown profile field: {value} {location}")]
    UnknownProfileField {
        value: String,
        location: ErrorLocation,
    },

    #[error("Experience id space exhausted after {last} {location}")]
    IdExhausted { last: u64, location: ErrorLocation },

    #[error("Unknown experience field: {value} {location}")]
    UnknownExperienceField {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a missing required field
    #[track_caller]
    pub fn validation(field: ExperienceField) -> Self {
        CoreError::Validation {
            field,
            message: field.validation_message().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn id_exhausted(last: u64) -> Self {
        CoreError::IdExhausted {
            last,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The experience field that failed validation, if any
    pub fn invalid_field(&self) -> Option<ExperienceField> {
        match self {
            CoreError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
