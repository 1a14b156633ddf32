//! Unified error type for Fatoor
//!
//! Three recoverable classes plus a catch-all:
//! - [`AppError::Validation`] — caller supplied invalid input; rejected
//!   before any write is attempted.
//! - [`AppError::NotFound`] — a referenced document vanished underneath us.
//!   Most read-then-write races are handled as silent no-ops instead; this
//!   variant is for the places a caller genuinely needs to know.
//! - [`AppError::Transport`] — the document store rejected or could not be
//!   reached. Never retried automatically.

use thiserror::Error;

/// Application error
#[derive(Debug, Error)]
pub enum AppError {
    /// Validation error
    #[error("{message}")]
    Validation { message: String },

    /// Resource not found
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Document store transport failure
    #[error("transport error: {message}")]
    Transport { message: String },

    /// Internal error
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the user can fix this by correcting their input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;
