//! Task time log model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::hours_between;

/// Time an employee spent on a task.
///
/// An entry without `end_time` is still open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeLogEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The task the time was spent on.
    pub task_id: String,
    /// The employee who logged the time.
    pub employee_id: String,
    /// When the work started.
    pub start_time: DateTime<Utc>,
    /// When the work ended, if it has.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    /// Whether the interval was a break.
    #[serde(default)]
    pub is_break: bool,
    /// Free-form description of the work done.
    #[serde(default)]
    pub description: String,
}

impl TimeLogEntry {
    /// Returns true while the entry has no end time.
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Returns the logged duration in hours, or zero for an open entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_metrics::models::TimeLogEntry;
    /// use chrono::{TimeZone, Utc};
    /// use rust_decimal::Decimal;
    ///
    /// let entry = TimeLogEntry {
    ///     id: "tl_001".to_string(),
    ///     task_id: "task_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     start_time: Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap(),
    ///     end_time: Some(Utc.with_ymd_and_hms(2026, 1, 15, 11, 30, 0).unwrap()),
    ///     is_break: false,
    ///     description: String::new(),
    /// };
    /// assert_eq!(entry.duration_hours(), Decimal::new(25, 1));
    /// ```
    pub fn duration_hours(&self) -> Decimal {
        match self.end_time {
            Some(end) => hours_between(self.start_time, end),
            None => Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(end: Option<DateTime<Utc>>) -> TimeLogEntry {
        TimeLogEntry {
            id: "tl_001".to_string(),
            task_id: "task_001".to_string(),
            employee_id: "emp_001".to_string(),
            start_time: Utc.with_ymd_and_hms(2026, 1, 15, 22, 0, 0).unwrap(),
            end_time: end,
            is_break: false,
            description: String::new(),
        }
    }

    #[test]
    fn test_open_entry_has_zero_duration() {
        let e = entry(None);
        assert!(e.is_open());
        assert_eq!(e.duration_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_duration_across_midnight() {
        let e = entry(Some(Utc.with_ymd_and_hms(2026, 1, 16, 1, 15, 0).unwrap()));
        assert!(!e.is_open());
        assert_eq!(e.duration_hours(), Decimal::new(325, 2));
    }

    #[test]
    fn test_deserialization_defaults() {
        let json = r#"{
            "id": "tl_002",
            "task_id": "task_001",
            "employee_id": "emp_001",
            "start_time": "2026-01-15T09:00:00Z"
        }"#;
        let e: TimeLogEntry = serde_json::from_str(json).unwrap();
        assert!(e.is_open());
        assert!(!e.is_break);
    }
}
