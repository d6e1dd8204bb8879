//! Shift duration from recorded start and end times.
//!
//! Times are time-of-day only. There is no notion of a shift crossing
//! midnight: an end time earlier than the start time is treated as bad data
//! and yields zero hours with a warning.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::models::{PayrollWarning, WarningCode};

const MINUTES_PER_HOUR: i64 = 60;

/// The outcome of measuring a shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftHours {
    /// Elapsed hours, zero when the times are unusable.
    pub hours: Decimal,
    /// Why the shift measured zero, if the input was at fault.
    pub warning: Option<PayrollWarning>,
}

impl ShiftHours {
    fn rejected(code: WarningCode, message: String) -> Self {
        Self {
            hours: Decimal::ZERO,
            warning: Some(PayrollWarning::new(code, message)),
        }
    }
}

/// Parses a time of day in `HH:MM:SS` or `HH:MM` form.
///
/// Surrounding whitespace is ignored.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time_of_day("07:30"), NaiveTime::from_hms_opt(7, 30, 0));
/// assert_eq!(parse_time_of_day(" 17:45:10 "), NaiveTime::from_hms_opt(17, 45, 10));
/// assert_eq!(parse_time_of_day("noon"), None);
/// ```
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

/// Minutes since midnight, ignoring seconds.
pub(crate) fn minutes_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * MINUTES_PER_HOUR + i64::from(time.minute())
}

/// Converts whole minutes to decimal hours.
pub(crate) fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR)
}

/// Computes the hours between a start and end time of day.
///
/// Returns `(end_minutes - start_minutes) / 60`. Seconds are ignored. When
/// either time is missing, blank or unparseable, or the end precedes the
/// start, the result is zero hours and a warning explains why.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_shift_hours;
/// use payroll_engine::models::WarningCode;
/// use rust_decimal::Decimal;
///
/// let shift = compute_shift_hours(Some("08:00"), Some("16:30"));
/// assert_eq!(shift.hours, Decimal::new(85, 1));
/// assert!(shift.warning.is_none());
///
/// let reversed = compute_shift_hours(Some("09:00"), Some("08:00"));
/// assert_eq!(reversed.hours, Decimal::ZERO);
/// assert_eq!(reversed.warning.unwrap().code, WarningCode::EndBeforeStart);
/// ```
pub fn compute_shift_hours(start_time: Option<&str>, end_time: Option<&str>) -> ShiftHours {
    let (start_raw, end_raw) = match (non_blank(start_time), non_blank(end_time)) {
        (Some(start), Some(end)) => (start, end),
        (start, end) => {
            let missing = match (start, end) {
                (None, None) => "start and end time",
                (None, Some(_)) => "start time",
                _ => "end time",
            };
            return ShiftHours::rejected(
                WarningCode::MissingTime,
                format!("Shift has no {}; counted as zero hours", missing),
            );
        }
    };

    let Some(start) = parse_time_of_day(start_raw) else {
        return ShiftHours::rejected(
            WarningCode::InvalidTime,
            format!("Start time '{}' is not a valid time of day; counted as zero hours", start_raw),
        );
    };
    let Some(end) = parse_time_of_day(end_raw) else {
        return ShiftHours::rejected(
            WarningCode::InvalidTime,
            format!("End time '{}' is not a valid time of day; counted as zero hours", end_raw),
        );
    };

    let elapsed = minutes_of_day(end) - minutes_of_day(start);
    if elapsed < 0 {
        return ShiftHours::rejected(
            WarningCode::EndBeforeStart,
            format!(
                "End time {} is before start time {}; \
                 overnight shifts are not supported, counted as zero hours",
                end_raw.trim(),
                start_raw.trim()
            ),
        );
    }

    ShiftHours {
        hours: minutes_to_hours(elapsed),
        warning: None,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
