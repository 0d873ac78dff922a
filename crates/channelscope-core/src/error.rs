//! Error types for the channelscope dashboard

use std::{error::Error as StdError, fmt};

/// Main error type for the channelscope dashboard
#[derive(Debug)]
pub enum Error {
    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation error
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Transport-level HTTP failure (connect, TLS, timeout while sending)
    Http(String),

    /// The analytics API answered with a non-success status
    Api {
        /// HTTP status code
        status: u16,
        /// Endpoint or message describing the failed call
        message: String,
    },

    /// Response body could not be decoded
    Decode(String),

    /// Timeout error
    Timeout {
        /// Timeout duration in milliseconds
        duration_ms: u64,
    },

    /// Not found error
    NotFound {
        /// Resource that was not found
        resource: String,
    },

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Validation { field, message } => {
                write!(f, "Validation error: {field} - {message}")
            }
            Self::Http(msg) => write!(f, "HTTP error: {msg}"),
            Self::Api { status, message } => write!(f, "API returned {status}: {message}"),
            Self::Decode(msg) => write!(f, "Failed to decode response: {msg}"),
            Self::Timeout { duration_ms } => {
                write!(f, "Operation timed out after {duration_ms}ms")
            }
            Self::NotFound { resource } => write!(f, "Resource not found: {resource}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {}

impl Error {
    /// Whether this error means the requested resource does not exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Api { status: 404, .. })
    }
}

// From implementations for automatic conversions
impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let Some((field, errs)) = fields.into_iter().next() else {
            return Self::Validation {
                field: String::new(),
                message: errors.to_string(),
            };
        };

        let message = errs
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map_or_else(|| e.code.to_string(), ToString::to_string)
            })
            .collect::<Vec<_>>()
            .join(", ");

        Self::Validation {
            field: field.to_string(),
            message,
        }
    }
}
