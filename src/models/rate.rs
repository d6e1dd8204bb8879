//! Employee rate model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// Highest hourly rate accepted; larger rates are capped to it.
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// An employee's hourly rates, effective at lookup time.
///
/// There is no rate history: the current rate applies to every entry in a
/// calculation regardless of the entry's date.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmployeeRate;
/// use rust_decimal::Decimal;
///
/// let rate: EmployeeRate = serde_json::from_str(
///     r#"{"employee_id": "emp_001", "regular_rate": "20", "overtime_rate": 30}"#,
/// )
/// .unwrap();
/// assert_eq!(rate.regular_rate, Decimal::new(20, 0));
/// assert_eq!(rate.overtime_rate, Decimal::new(30, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRate {
    /// The employee these rates belong to.
    #[serde(deserialize_with = "lenient::opaque_id")]
    pub employee_id: String,
    /// Pay per regular hour.
    #[serde(default, deserialize_with = "lenient::hourly_rate")]
    pub regular_rate: Decimal,
    /// Pay per overtime hour.
    #[serde(default, deserialize_with = "lenient::hourly_rate")]
    pub overtime_rate: Decimal,
}

impl EmployeeRate {
    /// Creates a rate for an employee, clamping both rates to
    /// `0..=MAX_HOURLY_RATE`.
    pub fn new(
        employee_id: impl Into<String>,
        regular_rate: Decimal,
        overtime_rate: Decimal,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            regular_rate: clamp_rate(regular_rate),
            overtime_rate: clamp_rate(overtime_rate),
        }
    }

    /// A zero rate, used when an employee has no rate card entry.
    pub fn zero(employee_id: impl Into<String>) -> Self {
        Self::new(employee_id, Decimal::ZERO, Decimal::ZERO)
    }
}

pub(crate) fn clamp_rate(rate: Decimal) -> Decimal {
    rate.clamp(Decimal::ZERO, MAX_HOURLY_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_rate() {
        let json =
            r#"{"employee_id": "emp_001", "regular_rate": "27.50", "overtime_rate": "41.25"}"#;
        let rate: EmployeeRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.regular_rate, dec("27.50"));
        assert_eq!(rate.overtime_rate, dec("41.25"));
    }

    #[test]
    fn test_missing_rates_default_to_zero() {
        let rate: EmployeeRate = serde_json::from_str(r#"{"employee_id": 3}"#).unwrap();
        assert_eq!(rate.employee_id, "3");
        assert_eq!(rate.regular_rate, Decimal::ZERO);
        assert_eq!(rate.overtime_rate, Decimal::ZERO);
    }

    #[test]
    fn test_non_numeric_rate_defaults_to_zero() {
        let json = r#"{"employee_id": "emp_001", "regular_rate": "TBD", "overtime_rate": null}"#;
        let rate: EmployeeRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate, EmployeeRate::zero("emp_001"));
    }

    #[test]
    fn test_huge_rates_are_capped() {
        let json = r#"{
            "employee_id": "emp_001",
            "regular_rate": "79228162514264337593543950335",
            "overtime_rate": 5000000.25
        }"#;
        let rate: EmployeeRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.regular_rate, MAX_HOURLY_RATE);
        assert_eq!(rate.overtime_rate, MAX_HOURLY_RATE);

        let built = EmployeeRate::new("emp_002", Decimal::MAX, dec("-5"));
        assert_eq!(built.regular_rate, MAX_HOURLY_RATE);
        assert_eq!(built.overtime_rate, Decimal::ZERO);
    }

    #[test]
    fn test_rate_serializes_as_strings() {
        let rate = EmployeeRate::new("emp_001", dec("20"), dec("30"));
        let json = serde_json::to_string(&rate).unwrap();
        assert!(json.contains("\"regular_rate\":\"20\""));
        assert!(json.contains("\"overtime_rate\":\"30\""));
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = "employee_id: emp_002\nregular_rate: 22.75\novertime_rate: 34.125\n";
        let rate: EmployeeRate = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rate.regular_rate, dec("22.75"));
        assert_eq!(rate.overtime_rate, dec("34.125"));
    }
}
