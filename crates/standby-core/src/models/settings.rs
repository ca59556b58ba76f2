//! Persisted offline window.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::DurationType;
use crate::error::ValidationError;

/// The last offline window the server accepted.
///
/// Dates are calendar dates in the time zone the window was chosen in and
/// serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "RawOfflineSettings")]
pub struct OfflineSettings {
    start_date: Date,
    end_date: Date,
    duration_type: DurationType,
}

impl OfflineSettings {
    /// Creates settings, rejecting an end date before the start date.
    pub fn new(
        start_date: Date,
        end_date: Date,
        duration_type: DurationType,
    ) -> Result<Self, ValidationError> {
        if end_date < start_date {
            return Err(ValidationError::InvalidRange {
                start: start_date.to_string(),
                end: end_date.to_string(),
            });
        }
        Ok(Self {
            start_date,
            end_date,
            duration_type,
        })
    }

    /// Settings for a window covering only `date`.
    pub fn single_day(date: Date, duration_type: DurationType) -> Self {
        Self {
            start_date: date,
            end_date: date,
            duration_type,
        }
    }

    pub fn start_date(&self) -> Date {
        self.start_date
    }

    pub fn end_date(&self) -> Date {
        self.end_date
    }

    pub fn duration_type(&self) -> DurationType {
        self.duration_type
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOfflineSettings {
    start_date: Date,
    end_date: Date,
    duration_type: DurationType,
}

impl TryFrom<RawOfflineSettings> for OfflineSettings {
    type Error = ValidationError;

    fn try_from(raw: RawOfflineSettings) -> Result<Self, Self::Error> {
        OfflineSettings::new(raw.start_date, raw.end_date, raw.duration_type)
    }
}
