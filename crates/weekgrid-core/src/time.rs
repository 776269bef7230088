//! Conversions between decimal hours and clock strings.
//!
//! Events store their times as hours since midnight (`9.5` is 9:30). Forms
//! and event files use `HH:MM` strings, and detail pages use a 12-hour clock.

use thiserror::Error;

/// Errors produced when parsing a clock string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("expected a time in HH:MM format, found `{0}`")]
    Format(String),

    #[error("hour {0} is out of range (0-24)")]
    HourOutOfRange(u32),

    #[error("minute {0} is out of range (0-59)")]
    MinuteOutOfRange(u32),
}

/// Parses an `HH:MM` string into decimal hours.
///
/// `24:00` is accepted as the end of the day; any other time past it is not.
///
/// # Errors
///
/// Returns [`TimeError`] if the string is not two colon-separated numbers or
/// either component is out of range.
///
/// # Examples
///
/// ```
/// use weekgrid_core::time::parse_clock;
///
/// assert_eq!(parse_clock("09:30").unwrap(), 9.5);
/// assert_eq!(parse_clock("24:00").unwrap(), 24.0);
/// assert!(parse_clock("9h30").is_err());
/// ```
pub fn parse_clock(value: &str) -> Result<f32, TimeError> {
    let format_error = || TimeError::Format(value.to_string());

    let (hours, minutes) = value.trim().split_once(':').ok_or_else(format_error)?;
    let hours: u32 = hours.parse().map_err(|_| format_error())?;
    let minutes: u32 = minutes.parse().map_err(|_| format_error())?;

    if minutes >= 60 {
        return Err(TimeError::MinuteOutOfRange(minutes));
    }
    if hours > 24 || (hours == 24 && minutes > 0) {
        return Err(TimeError::HourOutOfRange(hours));
    }

    Ok(hours as f32 + minutes as f32 / 60.0)
}

/// Splits decimal hours into whole hours and rounded minutes.
///
/// A value that rounds up to 60 minutes carries into the next hour.
fn split_hours(hour: f32) -> (u32, u32) {
    let whole = hour.floor();
    let mut minutes = ((hour - whole) * 60.0).round() as u32;
    let mut hours = whole as u32;
    if minutes == 60 {
        hours += 1;
        minutes = 0;
    }
    (hours, minutes)
}

/// Formats decimal hours as a zero-padded 24-hour `HH:MM` string.
///
/// Non-finite or negative values render as `--:--`.
///
/// # Examples
///
/// ```
/// use weekgrid_core::time::format_clock;
///
/// assert_eq!(format_clock(9.5), "09:30");
/// assert_eq!(format_clock(17.0), "17:00");
/// ```
pub fn format_clock(hour: f32) -> String {
    if !hour.is_finite() || hour < 0.0 {
        return "--:--".to_string();
    }
    let (hours, minutes) = split_hours(hour);
    format!("{hours:02}:{minutes:02}")
}

/// Formats decimal hours on a 12-hour clock, e.g. `1:15 PM`.
///
/// Midnight and noon display as `12`. Non-finite or negative values render
/// as `--:--`.
pub fn format_meridiem(hour: f32) -> String {
    if !hour.is_finite() || hour < 0.0 {
        return "--:--".to_string();
    }
    let (hours, minutes) = split_hours(hour);
    let hours = hours % 24;
    let suffix = if hours >= 12 { "PM" } else { "AM" };
    let display_hour = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minutes:02} {suffix}")
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_parse_clock() {
        assert_approx_eq!(f32, parse_clock("00:00").unwrap(), 0.0);
        assert_approx_eq!(f32, parse_clock("09:15").unwrap(), 9.25);
        assert_approx_eq!(f32, parse_clock(" 13:45 ").unwrap(), 13.75);
        assert_approx_eq!(f32, parse_clock("7:05").unwrap(), 7.0 + 5.0 / 60.0);
    }

    #[test]
    fn test_parse_clock_rejects_garbage() {
        assert_eq!(
            parse_clock("noon"),
            Err(TimeError::Format("noon".to_string()))
        );
        assert!(matches!(parse_clock("12:"), Err(TimeError::Format(_))));
        assert!(matches!(parse_clock("-1:00"), Err(TimeError::Format(_))));
    }

    #[test]
    fn test_parse_clock_range_checks() {
        assert_eq!(parse_clock("10:60"), Err(TimeError::MinuteOutOfRange(60)));
        assert_eq!(parse_clock("25:00"), Err(TimeError::HourOutOfRange(25)));
        assert_eq!(parse_clock("24:30"), Err(TimeError::HourOutOfRange(24)));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(9.5), "09:30");
        assert_eq!(format_clock(23.75), "23:45");
        assert_eq!(format_clock(24.0), "24:00");
    }

    #[test]
    fn test_format_clock_carries_rounded_minutes() {
        // 10:59:59 rounds up to the next hour
        assert_eq!(format_clock(10.0 + 3599.0 / 3600.0), "11:00");
    }

    #[test]
    fn test_format_clock_invalid() {
        assert_eq!(format_clock(f32::NAN), "--:--");
        assert_eq!(format_clock(-2.0), "--:--");
    }

    #[test]
    fn test_format_meridiem() {
        assert_eq!(format_meridiem(0.0), "12:00 AM");
        assert_eq!(format_meridiem(9.5), "9:30 AM");
        assert_eq!(format_meridiem(12.0), "12:00 PM");
        assert_eq!(format_meridiem(13.25), "1:15 PM");
        assert_eq!(format_meridiem(24.0), "12:00 AM");
    }

    #[test]
    fn test_clock_roundtrip_on_quarter_hours() {
        for quarter in 0..96 {
            let hour = quarter as f32 * 0.25;
            assert_approx_eq!(f32, parse_clock(&format_clock(hour)).unwrap(), hour);
        }
    }
}
