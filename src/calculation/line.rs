//! Per-entry payroll line computation.

use rust_decimal::Decimal;

use crate::models::{AttendanceEntry, EmployeeRate, PayrollLine, PayrollWarning, WarningCode};

use super::daily_overtime::detect_daily_overtime;
use super::shift_hours::{compute_shift_hours, minutes_to_hours};

/// Computes the payroll line for a single attendance entry.
///
/// 1. Measures the shift from its start and end times.
/// 2. Subtracts the minute deduction, flooring the result at zero.
/// 3. Splits the payable hours at `daily_threshold`.
/// 4. Prices each portion at the employee's regular and overtime rates.
///
/// The function is total: malformed times produce a zero-hour line carrying
/// a warning rather than an error. Pay that would exceed the decimal range
/// saturates at `Decimal::MAX` with a `pay_overflow` warning. It reads its
/// inputs only, so repeated calls with the same inputs give identical lines.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{compute_line, DEFAULT_DAILY_THRESHOLD};
/// use payroll_engine::models::{AttendanceEntry, EmployeeRate};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = AttendanceEntry::new(
///     "emp_001",
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     "07:00",
///     "19:00",
/// );
/// let rate = EmployeeRate::new("emp_001", Decimal::new(20, 0), Decimal::new(30, 0));
///
/// let line = compute_line(&entry, &rate, DEFAULT_DAILY_THRESHOLD);
/// assert_eq!(line.regular_hours, Decimal::new(8, 0));
/// assert_eq!(line.overtime_hours, Decimal::new(4, 0));
/// assert_eq!(line.total_pay, Decimal::new(280, 0));
/// ```
pub fn compute_line(
    entry: &AttendanceEntry,
    rate: &EmployeeRate,
    daily_threshold: Decimal,
) -> PayrollLine {
    let shift = compute_shift_hours(entry.start_time.as_deref(), entry.end_time.as_deref());
    let deducted_hours = minutes_to_hours(i64::from(entry.minute_deduction));
    let total_hours = (shift.hours - deducted_hours).max(Decimal::ZERO);

    let mut warnings = Vec::new();
    match shift.warning {
        Some(warning) => warnings.push(warning),
        None if deducted_hours > shift.hours => warnings.push(PayrollWarning::new(
            WarningCode::DeductionExceedsShift,
            format!(
                "Deduction of {} minutes exceeds the {} hour shift; payable hours floored at zero",
                entry.minute_deduction,
                shift.hours.normalize()
            ),
        )),
        None => {}
    }

    let split = detect_daily_overtime(total_hours, daily_threshold);
    let regular_pay = split.regular_hours.checked_mul(rate.regular_rate);
    let overtime_pay = split.overtime_hours.checked_mul(rate.overtime_rate);
    let total_pay = regular_pay.zip(overtime_pay).and_then(|(r, o)| r.checked_add(o));
    if total_pay.is_none() {
        warnings.push(PayrollWarning::new(
            WarningCode::PayOverflow,
            format!(
                "Pay for {} hours at rates {}/{} is out of range; capped at the maximum",
                total_hours.normalize(),
                rate.regular_rate,
                rate.overtime_rate
            ),
        ));
    }

    PayrollLine {
        employee_id: entry.employee_id.clone(),
        jobsite_id: entry.jobsite_id.clone(),
        date: entry.date,
        shift_hours: shift.hours,
        deducted_hours,
        total_hours,
        regular_hours: split.regular_hours,
        overtime_hours: split.overtime_hours,
        regular_pay: regular_pay.unwrap_or(Decimal::MAX),
        overtime_pay: overtime_pay.unwrap_or(Decimal::MAX),
        total_pay: total_pay.unwrap_or(Decimal::MAX),
        warnings,
    }
}
