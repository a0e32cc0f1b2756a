//! Error types and handling for the photo privacy analyzer
//! Created: 2025-06-03 11:31:05 UTC
//! Author: kartik4905

use std::{error::Error as StdError, io, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for photo-pii operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for photo-pii operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The byte stream could not be decoded as a supported image container.
    #[error("Failed to extract metadata: {message}")]
    MetadataExtraction {
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    #[error("Resource limit exceeded: {0}")]
    ResourceLimit(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Helper for creating a `MetadataExtraction` error with a boxed source
    pub fn extraction<E>(source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Error::MetadataExtraction {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Extraction failure without an underlying cause
    pub fn extraction_msg(message: impl Into<String>) -> Self {
        Error::MetadataExtraction {
            message: message.into(),
            source: None,
        }
    }

    /// True when the error stems from the input bytes rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::MetadataExtraction { .. } | Error::ResourceLimit(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}
