//! Error types and handling for the Travel Genie library

use thiserror::Error;

/// Main error type for Travel Genie
///
/// "No match" and "no trend data" are ordinary results, not errors. The only
/// fatal condition for a session is [`TravelGenieError::SourceUnavailable`].
#[derive(Error, Debug)]
pub enum TravelGenieError {
    /// The destination catalog could not be read or is structurally malformed
    #[error("Catalog source unavailable ({source_name}): {message}")]
    SourceUnavailable {
        source_name: String,
        message: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TravelGenieError {
    /// Create a new source-unavailable error
    pub fn source_unavailable<N: Into<String>, S: Into<String>>(source_name: N, message: S) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelGenieError::SourceUnavailable { source_name, .. } => {
                format!("Could not load the destination catalog from {source_name}. Please check the file and try again.")
            }
            TravelGenieError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TravelGenieError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TravelGenieError::Io { .. } => {
                "Terminal I/O failed. Please try again.".to_string()
            }
        }
    }
}
