//! Weekly work schedule model.
//!
//! A [`WorkScheduleEntry`] describes one employee's shift on one day of the
//! week, with an optional break window.

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::elapsed_hours;
use crate::error::{EngineError, EngineResult};

/// One day of an employee's weekly schedule.
///
/// `day_of_week` counts from Monday (0) to Sunday (6). When `end_time` is
/// earlier than `start_time` the shift runs past midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkScheduleEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The employee this entry belongs to.
    pub employee_id: String,
    /// Day of the week, 0 = Monday through 6 = Sunday.
    pub day_of_week: u8,
    /// Scheduled start time.
    pub start_time: NaiveTime,
    /// Scheduled end time.
    pub end_time: NaiveTime,
    /// Start of the break window, if any.
    #[serde(default)]
    pub break_start: Option<NaiveTime>,
    /// End of the break window, if any.
    #[serde(default)]
    pub break_end: Option<NaiveTime>,
}

impl WorkScheduleEntry {
    /// Returns the weekday of this entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_metrics::models::WorkScheduleEntry;
    /// use chrono::{NaiveTime, Weekday};
    ///
    /// let entry = WorkScheduleEntry {
    ///     id: "ws_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     day_of_week: 4,
    ///     start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    ///     break_start: None,
    ///     break_end: None,
    /// };
    /// assert_eq!(entry.weekday().unwrap(), Weekday::Fri);
    /// ```
    pub fn weekday(&self) -> EngineResult<Weekday> {
        match self.day_of_week {
            0 => Ok(Weekday::Mon),
            1 => Ok(Weekday::Tue),
            2 => Ok(Weekday::Wed),
            3 => Ok(Weekday::Thu),
            4 => Ok(Weekday::Fri),
            5 => Ok(Weekday::Sat),
            6 => Ok(Weekday::Sun),
            other => Err(self.invalid(format!("day_of_week {} is outside 0..=6", other))),
        }
    }

    /// Returns the break window when both ends are set.
    pub fn break_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        self.break_start.zip(self.break_end)
    }

    /// Returns the length of the break window in hours, or zero without one.
    pub fn break_hours(&self) -> Decimal {
        self.break_window()
            .map(|(start, end)| elapsed_hours(start, end))
            .unwrap_or(Decimal::ZERO)
    }

    /// Checks the entry's invariants.
    ///
    /// The day must be in range and a break window, when present, must be
    /// fully specified, lie within the shift and end after it starts. Break
    /// times are placed on the shift's own timeline, so overnight shifts may
    /// carry a break after midnight.
    pub fn validate(&self) -> EngineResult<()> {
        self.weekday()?;

        match (self.break_start, self.break_end) {
            (None, None) => Ok(()),
            (Some(_), None) | (None, Some(_)) => Err(self.invalid(
                "break window must have both a start and an end".to_string(),
            )),
            (Some(break_start), Some(break_end)) => {
                let span = elapsed_hours(self.start_time, self.end_time);
                let break_start_offset = elapsed_hours(self.start_time, break_start);
                let break_end_offset = elapsed_hours(self.start_time, break_end);

                if break_start_offset > span {
                    return Err(self.invalid(format!(
                        "break start {} is outside the shift {}-{}",
                        break_start, self.start_time, self.end_time
                    )));
                }
                if break_end_offset > span {
                    return Err(self.invalid(format!(
                        "break end {} is outside the shift {}-{}",
                        break_end, self.start_time, self.end_time
                    )));
                }
                if break_end_offset <= break_start_offset {
                    return Err(self.invalid(format!(
                        "break end {} must be after break start {}",
                        break_end, break_start
                    )));
                }
                Ok(())
            }
        }
    }

    fn invalid(&self, message: String) -> EngineError {
        EngineError::InvalidScheduleEntry {
            entry_id: self.id.clone(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn entry(start: &str, end: &str, window: Option<(&str, &str)>) -> WorkScheduleEntry {
        WorkScheduleEntry {
            id: "ws_001".to_string(),
            employee_id: "emp_001".to_string(),
            day_of_week: 0,
            start_time: time(start),
            end_time: time(end),
            break_start: window.map(|(s, _)| time(s)),
            break_end: window.map(|(_, e)| time(e)),
        }
    }

    #[test]
    fn test_weekday_mapping_starts_on_monday() {
        let mut e = entry("08:00", "17:00", None);
        assert_eq!(e.weekday().unwrap(), Weekday::Mon);
        e.day_of_week = 6;
        assert_eq!(e.weekday().unwrap(), Weekday::Sun);
    }

    #[test]
    fn test_day_out_of_range_is_rejected() {
        let mut e = entry("08:00", "17:00", None);
        e.day_of_week = 7;
        assert!(matches!(
            e.validate(),
            Err(EngineError::InvalidScheduleEntry { .. })
        ));
    }

    #[test]
    fn test_valid_break_window() {
        let e = entry("08:00", "17:00", Some(("12:00", "13:00")));
        assert!(e.validate().is_ok());
        assert_eq!(e.break_hours(), Decimal::ONE);
    }

    #[test]
    fn test_break_touching_shift_bounds_is_valid() {
        let e = entry("08:00", "17:00", Some(("08:00", "17:00")));
        assert!(e.validate().is_ok());
    }

    #[test]
    fn test_break_before_shift_start_is_rejected() {
        let e = entry("08:00", "17:00", Some(("07:30", "08:30")));
        assert!(e.validate().is_err());
    }

    #[test]
    fn test_break_after_shift_end_is_rejected() {
        let e = entry("08:00", "17:00", Some(("16:30", "17:30")));
        assert!(e.validate().is_err());
    }

    #[test]
    fn test_inverted_break_is_rejected() {
        let e = entry("08:00", "17:00", Some(("13:00", "12:00")));
        let err = e.validate().unwrap_err();
        assert!(err.to_string().contains("must be after break start"));
    }

    #[test]
    fn test_zero_length_break_is_rejected() {
        let e = entry("08:00", "17:00", Some(("12:00", "12:00")));
        assert!(e.validate().is_err());
    }

    #[test]
    fn test_half_specified_break_is_rejected() {
        let mut e = entry("08:00", "17:00", None);
        e.break_start = Some(time("12:00"));
        let err = e.validate().unwrap_err();
        assert!(err.to_string().contains("both a start and an end"));
    }

    #[test]
    fn test_overnight_shift_with_break_after_midnight() {
        let e = entry("22:00", "06:00", Some(("01:00", "01:30")));
        assert!(e.validate().is_ok());
        assert_eq!(e.break_hours(), Decimal::new(5, 1));
    }

    #[test]
    fn test_schedule_deserialization_without_break() {
        let json = r#"{
            "id": "ws_002",
            "employee_id": "emp_002",
            "day_of_week": 5,
            "start_time": "06:00:00",
            "end_time": "14:00:00"
        }"#;

        let e: WorkScheduleEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.weekday().unwrap(), Weekday::Sat);
        assert!(e.break_window().is_none());
        assert_eq!(e.break_hours(), Decimal::ZERO);
    }
}
