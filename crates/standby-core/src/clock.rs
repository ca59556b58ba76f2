//! Time source for the state machine.
//!
//! Every "now" the state machine needs goes through [`Clock`], which also
//! fixes the time zone calendar days are computed in.

use std::sync::Mutex;

use jiff::{tz::TimeZone, SignedDuration, Timestamp, Zoned};

use crate::error::ValidationError;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// The current instant in the clock's time zone.
    fn now(&self) -> Zoned;
}

/// Wall clock in a fixed time zone.
#[derive(Debug, Clone)]
pub struct SystemClock {
    tz: TimeZone,
}

impl SystemClock {
    pub fn new(tz: TimeZone) -> Self {
        Self { tz }
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(TimeZone::system())
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Timestamp::now().to_zoned(self.tz.clone())
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<Zoned>,
}

impl FixedClock {
    pub fn new(now: Zoned) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: Zoned) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Zoned {
        self.now.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// Last millisecond of the calendar day containing `now` (23:59:59.999).
pub fn end_of_day(now: &Zoned) -> Result<Zoned, ValidationError> {
    now.date()
        .at(23, 59, 59, 999_000_000)
        .to_zoned(now.time_zone().clone())
        .map_err(|_| ValidationError::InvalidDate {
            field: "end of day".to_string(),
            input: now.to_string(),
        })
}

/// The instant one hour after `instant`.
pub fn one_hour_after(instant: &Zoned) -> Result<Zoned, ValidationError> {
    instant
        .checked_add(SignedDuration::from_hours(1))
        .map_err(|_| ValidationError::InvalidDate {
            field: "end".to_string(),
            input: instant.to_string(),
        })
}
