//! Unified error handling for the trend-scout crate
//!
//! The analytics engine itself is infallible: malformed item content is
//! excluded from counting rather than reported. Errors only arise at the
//! boundaries (reading input, parsing payloads, configuration), and those
//! domains keep their own error types which this module consolidates into a
//! single [`Error`] enum.

use std::io;
use thiserror::Error;

pub use crate::ingest::IngestError;

/// Unified error type for the trend-scout crate
#[derive(Error, Debug)]
pub enum Error {
    /// Ingestion and input-validation errors
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }

    /// Create a generic error with context and source
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Other {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error stems from caller-supplied input rather than the
    /// local environment
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Ingest(_) | Self::Json(_))
    }
}

// Conversion from anyhow::Error
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            context: err.to_string(),
            source: None,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = Error::config("invalid log level");
        assert!(matches!(err, Error::Config(_)));
        assert!(!err.is_input());
    }

    #[test]
    fn test_ingest_error_is_input() {
        let err = Error::from(IngestError::NotAnArray { found: "object" });
        assert!(err.is_input());
    }

    #[test]
    fn test_other_error_display() {
        let err = Error::other("something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }
}
