//! User-visible alerts for failed operations.

use std::fmt;

use crate::error::{StatusError, ValidationError};

/// Title and message shown to the user when an operation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&ValidationError> for Alert {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::InvalidDate { .. } => {
                Alert::new("Invalid Date", "Please enter valid date and time values.")
            }
            ValidationError::InvalidRange { .. } => {
                Alert::new("Invalid Date Range", "End date must be after start date.")
            }
        }
    }
}

impl From<&StatusError> for Alert {
    fn from(err: &StatusError) -> Self {
        match err {
            StatusError::Validation(e) => Alert::from(e),
            StatusError::Sync(_) => Alert::new(
                "Error",
                "Failed to update your status. Please try again later.",
            ),
            StatusError::Busy => {
                Alert::new("Please wait", "A status update is already in progress.")
            }
            other => Alert::new("Error", other.to_string()),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**{}**: {}", self.title, self.message)
    }
}
