//! Error types for availability status operations.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::StatusState;

/// Local, synchronous rejection of user-supplied dates.
///
/// Validation errors never reach the network and leave the state machine
/// untouched so the user can correct the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input could not be read as a date-time
    #[error("Invalid Date: '{input}' is not a valid {field}")]
    InvalidDate { field: String, input: String },
    /// The end of the window is not strictly after its start
    #[error("Invalid Date Range: end {end} must be after start {start}")]
    InvalidRange { start: String, end: String },
}

/// Failure of the single remote status update.
///
/// The state machine treats every variant the same way: it rolls back to
/// the state it was in before the call.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Network failure, timeout, or an unreadable response
    #[error("Status update transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server rejected the credential
    #[error("Status update was not authorized")]
    Unauthorized,
    /// Any other non-success status code
    #[error("Status update rejected with HTTP {status}")]
    Rejected { status: u16 },
    /// The task carrying the update panicked or was shut down
    #[error("Status update task did not finish: {0}")]
    Interrupted(#[from] tokio::task::JoinError),
}

/// Comprehensive error type for all status operations.
#[derive(Error, Debug)]
pub enum StatusError {
    /// The user supplied an unusable date or range
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The remote update did not succeed
    #[error(transparent)]
    Sync(#[from] SyncError),
    /// Another status update is still in flight
    #[error("A status update is already in progress")]
    Busy,
    /// The operation is not offered from the current state
    #[error("Cannot {operation} while {state}")]
    InvalidTransition {
        state: StatusState,
        operation: &'static str,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating invalid transition errors.
pub struct InvalidTransitionBuilder {
    operation: &'static str,
}

impl InvalidTransitionBuilder {
    /// Create a new builder for the named operation.
    pub fn new(operation: &'static str) -> Self {
        Self { operation }
    }

    /// Build the error for the state the operation was attempted in.
    pub fn in_state(self, state: StatusState) -> StatusError {
        StatusError::InvalidTransition {
            state,
            operation: self.operation,
        }
    }
}

impl StatusError {
    /// Creates a builder for invalid transition errors.
    pub fn invalid_transition(operation: &'static str) -> InvalidTransitionBuilder {
        InvalidTransitionBuilder::new(operation)
    }

    /// Returns true when the error came from local input validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, StatusError::Validation(_))
    }

    /// Returns true when the error came from the remote update.
    pub fn is_sync(&self) -> bool {
        matches!(self, StatusError::Sync(_))
    }
}

/// Specialized extension trait for configuration-related Results.
pub trait ConfigResultExt<T> {
    /// Map any error into a configuration error with a message.
    fn config_context(self, message: &str) -> Result<T>;
}

impl<T, E> ConfigResultExt<T> for std::result::Result<T, E>
where
    E: fmt::Display,
{
    fn config_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StatusError::Configuration {
            message: format!("{}: {}", message, e),
        })
    }
}

/// Result type alias for status operations
pub type Result<T> = std::result::Result<T, StatusError>;
