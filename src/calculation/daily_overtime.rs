//! Daily overtime detection.
//!
//! Splits payable hours into regular and overtime portions at a daily
//! threshold. Overtime is always the remainder after regular hours, so the
//! two parts add back to the input exactly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Regular and overtime portions of a block of payable hours.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::DailyOvertimeDetection;
/// use rust_decimal::Decimal;
///
/// let detection = DailyOvertimeDetection {
///     regular_hours: Decimal::new(8, 0),
///     overtime_hours: Decimal::new(2, 0),
/// };
/// assert_eq!(detection.regular_hours + detection.overtime_hours, Decimal::new(10, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOvertimeDetection {
    /// Hours up to the threshold.
    pub regular_hours: Decimal,
    /// Hours beyond the threshold.
    pub overtime_hours: Decimal,
}

/// Default daily overtime threshold in hours.
pub const DEFAULT_DAILY_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Splits worked hours at the daily threshold.
///
/// A negative threshold is treated as zero, making every hour overtime.
///
/// # Examples
///
/// ## Under the threshold
///
/// ```
/// use payroll_engine::calculation::{detect_daily_overtime, DEFAULT_DAILY_THRESHOLD};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = detect_daily_overtime(Decimal::from_str("7.5").unwrap(), DEFAULT_DAILY_THRESHOLD);
/// assert_eq!(result.regular_hours, Decimal::from_str("7.5").unwrap());
/// assert_eq!(result.overtime_hours, Decimal::ZERO);
/// ```
///
/// ## Over the threshold
///
/// ```
/// use payroll_engine::calculation::{detect_daily_overtime, DEFAULT_DAILY_THRESHOLD};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = detect_daily_overtime(Decimal::from_str("12").unwrap(), DEFAULT_DAILY_THRESHOLD);
/// assert_eq!(result.regular_hours, Decimal::from_str("8").unwrap());
/// assert_eq!(result.overtime_hours, Decimal::from_str("4").unwrap());
/// ```
pub fn detect_daily_overtime(worked_hours: Decimal, threshold: Decimal) -> DailyOvertimeDetection {
    let threshold = threshold.max(Decimal::ZERO);
    let regular_hours = worked_hours.min(threshold);

    DailyOvertimeDetection {
        regular_hours,
        overtime_hours: worked_hours - regular_hours,
    }
}
