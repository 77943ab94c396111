use crate::StoreOperation;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while talking to the record store or seed source
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error during {operation}: {message} {location}")]
    Http {
        operation: StoreOperation,
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error during {operation}: {message} (status: {status}) {location}")]
    Api {
        operation: StoreOperation,
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error during {operation}: {message} {location}")]
    Json {
        operation: StoreOperation,
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error during {operation} reading {path}: {source} {location}")]
    Io {
        operation: StoreOperation,
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP client setup error: {message} {location}")]
    Setup {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn http(operation: StoreOperation, err: reqwest::Error) -> Self {
        ClientError::Http {
            operation,
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error for a non-success response
    #[track_caller]
    pub fn api(operation: StoreOperation, status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            operation,
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn json(operation: StoreOperation, err: serde_json::Error) -> Self {
        ClientError::Json {
            operation,
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn io(operation: StoreOperation, path: PathBuf, err: std::io::Error) -> Self {
        ClientError::Io {
            operation,
            path,
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn setup(err: reqwest::Error) -> Self {
        ClientError::Setup {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// The operation that was attempted, if the error came from one
    pub fn operation(&self) -> Option<StoreOperation> {
        match self {
            Self::Http { operation, .. }
            | Self::Api { operation, .. }
            | Self::Json { operation, .. }
            | Self::Io { operation, .. } => Some(*operation),
            Self::Setup { .. } => None,
        }
    }

    /// HTTP status for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
