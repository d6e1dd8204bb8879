//! Attendance entry model.
//!
//! An [`AttendanceEntry`] is one row of the `attendance` table: an employee's
//! shift on a given date at a given job site.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::lenient;

/// A single recorded shift for one employee on one date.
///
/// Times are kept as the raw text the data source supplied (`HH:MM` or
/// `HH:MM:SS`). Parsing happens in the engine so that a malformed time
/// produces a zero-hour line with a warning instead of failing the batch.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceEntry;
///
/// let json = r#"{
///     "employee_id": 17,
///     "jobsite_id": "site_north",
///     "date": "2026-03-02",
///     "start_time": "07:00",
///     "end_time": "15:30",
///     "minute_deduction": "30"
/// }"#;
///
/// let entry: AttendanceEntry = serde_json::from_str(json).unwrap();
/// assert_eq!(entry.employee_id, "17");
/// assert_eq!(entry.minute_deduction, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The employee who worked the shift.
    #[serde(deserialize_with = "lenient::opaque_id")]
    pub employee_id: String,
    /// The job site the shift was worked at. Not used in pay math.
    #[serde(default, deserialize_with = "lenient::optional_id")]
    pub jobsite_id: Option<String>,
    /// The calendar date of the shift (naive, no time zone).
    pub date: NaiveDate,
    /// Recorded start time-of-day.
    #[serde(default, deserialize_with = "lenient::time_text")]
    pub start_time: Option<String>,
    /// Recorded end time-of-day.
    #[serde(default, deserialize_with = "lenient::time_text")]
    pub end_time: Option<String>,
    /// Unpaid minutes subtracted from the shift (e.g. breaks).
    #[serde(default, deserialize_with = "lenient::minutes")]
    pub minute_deduction: u32,
}

impl AttendanceEntry {
    /// Creates an entry with no job site and no deduction.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::AttendanceEntry;
    /// use chrono::NaiveDate;
    ///
    /// let entry = AttendanceEntry::new(
    ///     "emp_001",
    ///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
    ///     "08:00",
    ///     "16:00",
    /// )
    /// .with_deduction(30);
    /// assert_eq!(entry.minute_deduction, 30);
    /// ```
    pub fn new(
        employee_id: impl Into<String>,
        date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            jobsite_id: None,
            date,
            start_time: Some(start_time.into()),
            end_time: Some(end_time.into()),
            minute_deduction: 0,
        }
    }

    /// Sets the unpaid minute deduction.
    pub fn with_deduction(mut self, minutes: u32) -> Self {
        self.minute_deduction = minutes;
        self
    }

    /// Sets the job site.
    pub fn with_jobsite(mut self, jobsite_id: impl Into<String>) -> Self {
        self.jobsite_id = Some(jobsite_id.into());
        self
    }
}
