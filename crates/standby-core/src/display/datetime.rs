//! DateTime display utilities.
//!
//! Wrapper types that format zoned instants through the `Display` trait, in
//! the time zone the instant carries.

use std::fmt;

use jiff::Zoned;

/// Full form used for window endpoints: `YYYY-MM-DD HH:MM TZ`.
pub struct LocalDateTime<'a>(pub &'a Zoned);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d %H:%M %Z"))
    }
}

/// Short US form used in offline durations, e.g. `Oct 16, 03:45 PM`.
///
/// Month abbreviation, day without padding, then a zero-padded 12-hour
/// clock with AM/PM.
pub struct ShortDateTime<'a>(pub &'a Zoned);

impl fmt::Display for ShortDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%b %-d, %I:%M %p"))
    }
}
