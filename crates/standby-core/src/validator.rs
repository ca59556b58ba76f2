//! Date range validation for custom offline windows.
//!
//! [`validate`] checks a pair of instants the user picked; [`validate_input`]
//! first reads both endpoints from text and then applies the same check, so
//! a malformed endpoint is reported before an inverted range.
//!
//! There is deliberately no maximum duration and no blackout period: any
//! window whose end lies strictly after its start is accepted.

use jiff::{
    civil::{Date, DateTime, Time},
    tz::TimeZone,
    Timestamp, Zoned,
};

use crate::error::ValidationError;

/// Short display form used inside validation messages.
pub(crate) fn short_form(zoned: &Zoned) -> String {
    zoned.strftime("%Y-%m-%d %H:%M").to_string()
}

/// Checks that `end` lies strictly after `start`.
///
/// Equal endpoints are rejected: a zero-length window is not a window.
///
/// # Examples
///
/// ```rust
/// use jiff::{civil::date, tz::TimeZone};
/// use standby_core::validator::validate;
///
/// let start = date(2024, 6, 14).at(9, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();
/// let end = date(2024, 6, 14).at(17, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();
///
/// assert!(validate(&start, &end).is_ok());
/// assert!(validate(&end, &start).is_err());
/// assert!(validate(&start, &start).is_err());
/// ```
pub fn validate(start: &Zoned, end: &Zoned) -> Result<(), ValidationError> {
    if end <= start {
        return Err(ValidationError::InvalidRange {
            start: short_form(start),
            end: short_form(end),
        });
    }
    Ok(())
}

/// Reads both endpoints from text and validates the resulting range.
///
/// Both values are parsed before the ordering is checked, so a malformed
/// value always yields [`ValidationError::InvalidDate`].
pub fn validate_input(
    start: &str,
    end: &str,
    tz: &TimeZone,
) -> Result<(Zoned, Zoned), ValidationError> {
    let start = parse_instant("start", start, tz)?;
    let end = parse_instant("end", end, tz)?;
    validate(&start, &end)?;
    Ok((start, end))
}

/// Parses a user-supplied instant.
///
/// Accepted forms, tried in order:
/// - a zoned datetime, e.g. `2024-06-14T17:30-04:00[America/New_York]`
/// - an RFC 3339 timestamp, e.g. `2024-06-14T21:30:00Z`
/// - a civil datetime interpreted in `tz`, e.g. `2024-06-14 17:30`
pub fn parse_instant(field: &str, input: &str, tz: &TimeZone) -> Result<Zoned, ValidationError> {
    let trimmed = input.trim();
    let invalid = || ValidationError::InvalidDate {
        field: field.to_string(),
        input: input.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid());
    }
    if let Ok(zoned) = trimmed.parse::<Zoned>() {
        return Ok(zoned);
    }
    if let Ok(timestamp) = trimmed.parse::<Timestamp>() {
        return Ok(timestamp.to_zoned(tz.clone()));
    }
    trimmed
        .parse::<DateTime>()
        .ok()
        .and_then(|dt| dt.to_zoned(tz.clone()).ok())
        .ok_or_else(invalid)
}

/// Combines separate date (`YYYY-MM-DD`) and time (`HH:MM`) fields.
///
/// Either field being empty or unreadable makes the whole instant invalid.
pub fn parse_date_and_time(
    field: &str,
    date: &str,
    time: &str,
    tz: &TimeZone,
) -> Result<Zoned, ValidationError> {
    let invalid = || ValidationError::InvalidDate {
        field: field.to_string(),
        input: format!("{date} {time}"),
    };

    let date: Date = date.trim().parse().map_err(|_| invalid())?;
    let time: Time = time.trim().parse().map_err(|_| invalid())?;
    date.to_datetime(time)
        .to_zoned(tz.clone())
        .map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn utc(hour: i8, minute: i8) -> Zoned {
        date(2024, 6, 14)
            .at(hour, minute, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
    }

    #[test]
    fn test_validate_accepts_forward_range() {
        assert!(validate(&utc(9, 0), &utc(9, 1)).is_ok());
        assert!(validate(&utc(0, 0), &utc(23, 59)).is_ok());
    }

    #[test]
    fn test_validate_rejects_equal_endpoints() {
        let err = validate(&utc(9, 0), &utc(9, 0)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidRange { .. }));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let err = validate(&utc(10, 0), &utc(9, 0)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidRange {
                start: "2024-06-14 10:00".to_string(),
                end: "2024-06-14 09:00".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_allows_very_long_windows() {
        let start = utc(9, 0);
        let end = date(2031, 1, 1)
            .at(0, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap();
        assert!(validate(&start, &end).is_ok());
    }

    #[test]
    fn test_parse_instant_forms() {
        let tz = TimeZone::UTC;
        assert_eq!(parse_instant("start", "2024-06-14 09:30", &tz).unwrap(), utc(9, 30));
        assert_eq!(parse_instant("start", "2024-06-14T09:30", &tz).unwrap(), utc(9, 30));
        assert_eq!(
            parse_instant("start", "2024-06-14T11:30:00+02:00", &tz).unwrap(),
            utc(9, 30)
        );
        assert_eq!(
            parse_instant("start", "2024-06-14T09:30:00Z", &tz).unwrap(),
            utc(9, 30)
        );
    }

    #[test]
    fn test_parse_instant_uses_time_zone_for_civil_input() {
        let tz = TimeZone::get("America/New_York").unwrap();
        let parsed = parse_instant("start", "2024-06-14 05:30", &tz).unwrap();
        assert_eq!(parsed, utc(9, 30));
        assert_eq!(parsed.time_zone(), &tz);
    }

    #[test]
    fn test_parse_instant_rejects_garbage() {
        let tz = TimeZone::UTC;
        for input in ["", "   ", "tomorrow", "2024-13-40 10:00", "10:00"] {
            let err = parse_instant("end", input, &tz).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidDate { ref field, .. } if field == "end"),
                "expected invalid date for {input:?}"
            );
        }
    }

    #[test]
    fn test_validate_input_reports_malformed_before_order() {
        let tz = TimeZone::UTC;
        // end is both malformed and (if it were read) earlier than start
        let err = validate_input("2024-06-14 10:00", "yesterday", &tz).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDate { .. }));

        let err = validate_input("2024-06-14 10:00", "2024-06-14 09:00", &tz).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidRange { .. }));

        let (start, end) = validate_input("2024-06-14 09:00", "2024-06-14 10:00", &tz).unwrap();
        assert_eq!(start, utc(9, 0));
        assert_eq!(end, utc(10, 0));
    }

    #[test]
    fn test_parse_date_and_time() {
        let tz = TimeZone::UTC;
        assert_eq!(
            parse_date_and_time("start", "2024-06-14", "09:30", &tz).unwrap(),
            utc(9, 30)
        );
        assert!(parse_date_and_time("start", "", "09:30", &tz).is_err());
        assert!(parse_date_and_time("start", "2024-06-14", "", &tz).is_err());
        assert!(parse_date_and_time("start", "2024-06-14", "25:00", &tz).is_err());
    }
}
