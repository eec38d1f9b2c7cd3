//! Unified error type for the service desk.

use thiserror::Error;

/// Every failure the crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// The storage layer rejected an operation
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem or socket failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A submitted form did not pass the presence/whitelist checks.
    /// Handlers swallow this one and redirect as if nothing happened.
    #[error("Rejected input: {message}")]
    Validation {
        /// Which check failed
        message: String,
    },
}

impl Error {
    /// Shorthand for building a [`Error::Validation`].
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
