//! Clock-time parsing and formatting.
//!
//! Schedules publish times either as 24-hour "HH:MM" or as 12-hour
//! "H:MM AM" strings; itineraries are shown to riders on a 12-hour clock.

use chrono::{NaiveDateTime, NaiveTime};

/// Error returned when parsing an invalid clock time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time {input:?}: {reason}")]
pub struct ClockError {
    input: String,
    reason: &'static str,
}

impl ClockError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Format a timestamp as a 12-hour clock time without a leading zero.
///
/// # Examples
///
/// ```
/// use shuttle_server::domain::format_clock;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
/// assert_eq!(format_clock(day.and_hms_opt(9, 5, 0).unwrap()), "9:05 AM");
/// assert_eq!(format_clock(day.and_hms_opt(0, 30, 0).unwrap()), "12:30 AM");
/// assert_eq!(format_clock(day.and_hms_opt(14, 42, 0).unwrap()), "2:42 PM");
/// ```
pub fn format_clock(when: NaiveDateTime) -> String {
    when.format("%-I:%M %p").to_string()
}

/// Parse a clock time in either "H:MM AM/PM" or 24-hour "HH:MM" form.
///
/// The AM/PM marker is case-insensitive and may be separated by spaces.
///
/// # Examples
///
/// ```
/// use shuttle_server::domain::parse_clock;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock("7:30 AM").unwrap(), NaiveTime::from_hms_opt(7, 30, 0).unwrap());
/// assert_eq!(parse_clock("12:00 am").unwrap(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
/// assert_eq!(parse_clock("23:30").unwrap(), NaiveTime::from_hms_opt(23, 30, 0).unwrap());
/// assert!(parse_clock("25:00").is_err());
/// ```
pub fn parse_clock(s: &str) -> Result<NaiveTime, ClockError> {
    let trimmed = s.trim();
    let upper = trimmed.to_ascii_uppercase();

    let (digits, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim_end(), Some(false))
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim_end(), Some(true))
    } else {
        (upper.as_str(), None)
    };

    let (h, m) = digits
        .split_once(':')
        .ok_or_else(|| ClockError::new(s, "expected H:MM"))?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return Err(ClockError::new(s, "expected H:MM"));
    }
    let hour: u32 = h
        .parse()
        .map_err(|_| ClockError::new(s, "invalid hour digits"))?;
    let minute: u32 = m
        .parse()
        .map_err(|_| ClockError::new(s, "invalid minute digits"))?;

    let hour = match meridiem {
        Some(pm) => {
            if !(1..=12).contains(&hour) {
                return Err(ClockError::new(s, "hour must be 1-12 with AM/PM"));
            }
            match (pm, hour) {
                (false, 12) => 0,
                (true, 12) => 12,
                (true, h) => h + 12,
                (false, h) => h,
            }
        }
        None => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| ClockError::new(s, "out of range"))
}

/// Human-readable duration, e.g. "25 mins" or "1 hour 30 mins".
pub fn format_duration_mins(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} mins");
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    let plural = if hours > 1 { "s" } else { "" };
    if rest == 0 {
        format!("{hours} hour{plural}")
    } else {
        format!("{hours} hour{plural} {rest} mins")
    }
}
