use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ph_config::ConfigError),

    #[error("Client error: {0}")]
    Client(#[from] ph_client::ClientError),

    #[error("{0}")]
    Controller(#[from] ph_controller::ControllerError),

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to read confirmation: {source} {location}")]
    Prompt {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Invalid input: {message}")]
    Input { message: String },
}

impl CliError {
    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn prompt(source: std::io::Error) -> Self {
        Self::Prompt {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
