//! Unsaved custom offline window.

use jiff::Zoned;

use crate::{
    clock::one_hour_after,
    error::ValidationError,
    validator::{self, short_form},
};

/// Start and end of a custom offline window while it is being edited.
///
/// The end is kept after the start: moving the start past the end drags the
/// end along to one hour after the new start, and moving the end before the
/// start is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeDraft {
    start: Zoned,
    end: Zoned,
}

impl DateRangeDraft {
    /// A one-hour window starting at `now`.
    pub fn seeded(now: Zoned) -> Result<Self, ValidationError> {
        let end = one_hour_after(&now)?;
        Ok(Self { start: now, end })
    }

    pub fn start(&self) -> &Zoned {
        &self.start
    }

    pub fn end(&self) -> &Zoned {
        &self.end
    }

    /// Moves the start, advancing the end to `start + 1h` when the end
    /// would otherwise fall before the new start.
    pub fn set_start(&mut self, start: Zoned) -> Result<(), ValidationError> {
        if self.end < start {
            self.end = one_hour_after(&start)?;
        }
        self.start = start;
        Ok(())
    }

    /// Moves the end; an end before the current start is refused and leaves
    /// the draft unchanged.
    pub fn set_end(&mut self, end: Zoned) -> Result<(), ValidationError> {
        if end < self.start {
            return Err(ValidationError::InvalidRange {
                start: short_form(&self.start),
                end: short_form(&end),
            });
        }
        self.end = end;
        Ok(())
    }

    /// Strict check applied before saving.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validator::validate(&self.start, &self.end)
    }
}
