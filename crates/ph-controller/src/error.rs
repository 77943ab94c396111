use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use ph_cache::CacheError;
use ph_client::{ClientError, StoreOperation};
use ph_core::{CoreError, ExperienceField};
use thiserror::Error;

/// Failures surfaced by controller operations.
///
/// Every failure also leaves an error notice on the controller's board, so
/// callers that only render notices can ignore the value.
#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("Record store request failed: {source} {location}")]
    Store {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Seed document could not be fetched: {source} {location}")]
    SeedFetch {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Local cache write failed: {source} {location}")]
    CacheWrite {
        #[source]
        source: CacheError,
        location: ErrorLocation,
    },

    #[error("Local cache read failed: {source} {location}")]
    CacheRead {
        #[source]
        source: CacheError,
        location: ErrorLocation,
    },

    #[error("Validation failed for {field}: {message} {location}")]
    Validation {
        field: ExperienceField,
        message: String,
        location: ErrorLocation,
    },

    #[error("No experience with id {id} {location}")]
    NotFound { id: u64, location: ErrorLocation },

    #[error("Invalid state: {message} {location}")]
    InvalidState {
        message: String,
        location: ErrorLocation,
    },

    #[error("Clipboard write failed: {message} {location}")]
    Clipboard {
        message: String,
        location: ErrorLocation,
    },
}

impl ControllerError {
    #[track_caller]
    pub fn store(source: ClientError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn seed_fetch(source: ClientError) -> Self {
        Self::SeedFetch {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a cache failure as a read or a write depending on where it arose.
    #[track_caller]
    pub fn cache(source: CacheError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if source.is_write_error() {
            Self::CacheWrite { source, location }
        } else {
            Self::CacheRead { source, location }
        }
    }

    #[track_caller]
    pub fn not_found(id: u64) -> Self {
        Self::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The store operation behind a store or seed failure
    pub fn operation(&self) -> Option<StoreOperation> {
        match self {
            Self::Store { source, .. } | Self::SeedFetch { source, .. } => source.operation(),
            _ => None,
        }
    }

    /// What the user can do about a cache failure
    pub fn cache_recovery_hint(&self) -> Option<&'static str> {
        match self {
            Self::CacheWrite { source, .. } | Self::CacheRead { source, .. } => {
                Some(source.recovery_hint())
            }
            _ => None,
        }
    }

    /// The experience field that failed validation, if any
    pub fn invalid_field(&self) -> Option<ExperienceField> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<CoreError> for ControllerError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { field, message, .. } => Self::Validation {
                field,
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other => Self::InvalidState {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = StdResult<T, ControllerError>;
