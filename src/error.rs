//! Error types and handling for the `TourHub` application

use thiserror::Error;

/// Main error type for the `TourHub` application
#[derive(Error, Debug)]
pub enum TourHubError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Transport failures: network unreachable, non-success HTTP status
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Malformed or unexpected response shapes
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Errors reported by the tour service envelope itself
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// The consuming view was torn down before the pipeline finished
    #[error("Load cycle cancelled")]
    Cancelled,

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TourHubError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    ///
    /// Transport, parse and unknown failures each collapse to one fixed
    /// string; the rendering layer never sees more than a single message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TourHubError::Config { .. } => {
                "Configuration error. Please check your config file and service key.".to_string()
            }
            TourHubError::Transport { .. } => {
                "Unable to reach the tour service. Please check your internet connection."
                    .to_string()
            }
            TourHubError::Parse { .. } => {
                "Received an unreadable response from the tour service.".to_string()
            }
            TourHubError::Api { .. } => "The tour service rejected the request.".to_string(),
            TourHubError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TourHubError::Cancelled => {
                "The load cycle was cancelled before it finished.".to_string()
            }
            TourHubError::General { message } => message.clone(),
        }
    }
}
