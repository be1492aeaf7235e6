//! Error types and handling for the `Travel Buddy` application

use thiserror::Error;

/// Main error type for the `Travel Buddy` application
///
/// External-source failures (places API, text model) are deliberately not
/// represented here: fetchers convert them into [`crate::Fetched::Unavailable`]
/// and the resolver degrades to the next strategy instead of erroring.
#[derive(Error, Debug)]
pub enum TravelBuddyError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl TravelBuddyError {
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
            TravelBuddyError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            TravelBuddyError::Validation { message } => {
                format!("Invalid input: {message}")
            }
        }
    }
}
