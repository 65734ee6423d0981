//! Employee model.
//!
//! Only the fields the rule layer reads are modelled; contact details and
//! account data stay with the persistence layer.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Represents an employee on the logistics floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Company-issued employee code (e.g. "LOG-0042").
    pub employee_code: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// Position title, if assigned.
    #[serde(default)]
    pub position: Option<String>,
    /// Department of the position, if assigned.
    #[serde(default)]
    pub department: Option<String>,
    /// Skills recorded for the employee.
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Employee {
    /// Returns completed years of service as of `today`.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_metrics::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     employee_code: "LOG-0001".to_string(),
    ///     hire_date: NaiveDate::from_ymd_opt(2020, 6, 15).unwrap(),
    ///     position: None,
    ///     department: None,
    ///     skills: vec![],
    /// };
    /// let today = NaiveDate::from_ymd_opt(2026, 6, 14).unwrap();
    /// assert_eq!(employee.years_of_service(today), 5);
    /// ```
    pub fn years_of_service(&self, today: NaiveDate) -> i32 {
        let years = today.year() - self.hire_date.year();
        if (today.month(), today.day()) < (self.hire_date.month(), self.hire_date.day()) {
            years - 1
        } else {
            years
        }
    }
}
