//! Request types for the workforce metrics API.
//!
//! Most bodies wrap a domain record as the persistence layer would hand it
//! over. Performance observations are posted per employee and expanded into
//! [`PerformanceObservation`]s.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    DailyWorkLog, PerformanceObservation, ReportPeriod, Task, TaskStatus, TimeLogEntry,
    WorkScheduleEntry,
};

/// Request body for `POST /schedules/hours`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleHoursRequest {
    /// The weekly schedule entry to total.
    pub entry: WorkScheduleEntry,
}

/// Request body for `POST /tasks/evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEvaluationRequest {
    /// The task as it is about to be saved.
    pub task: Task,
    /// The stored status before this save, absent for a new task.
    #[serde(default)]
    pub previous_status: Option<TaskStatus>,
    /// Evaluation instant. Defaults to the server clock.
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

/// Request body for `POST /time-logs/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeLogValidationRequest {
    /// The time log about to be saved.
    pub entry: TimeLogEntry,
}

/// Request body for `POST /performance/score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceScoreRequest {
    /// The employee observed.
    pub employee_id: String,
    /// The observations to score, one per metric and date.
    pub observations: Vec<ObservationRequest>,
}

/// One observed value in a [`PerformanceScoreRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationRequest {
    /// Catalog id of the metric.
    pub metric_id: String,
    /// Observation date.
    pub date: NaiveDate,
    /// Observed value.
    pub actual_value: Decimal,
}

impl PerformanceScoreRequest {
    /// Expands the request into domain observations.
    pub fn into_observations(self) -> Vec<PerformanceObservation> {
        let employee_id = self.employee_id;
        self.observations
            .into_iter()
            .map(|obs| PerformanceObservation {
                employee_id: employee_id.clone(),
                metric_id: obs.metric_id,
                date: obs.date,
                actual_value: obs.actual_value,
            })
            .collect()
    }
}

/// Request body for `POST /daily-logs/evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLogRequest {
    /// The daily work log to evaluate.
    pub log: DailyWorkLog,
}

/// Request body for `POST /reports/productivity-summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductivitySummaryRequest {
    /// The employee to summarize.
    pub employee_id: String,
    /// The inclusive period covered.
    pub period: ReportPeriod,
    /// Candidate logs. Entries outside the period or of other employees are ignored.
    #[serde(default)]
    pub logs: Vec<DailyWorkLog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_request_expands_observations() {
        let json = r#"{
            "employee_id": "emp_002",
            "observations": [
                {"metric_id": "packages_per_hour", "date": "2026-01-15", "actual_value": "45"},
                {"metric_id": "order_accuracy", "date": "2026-01-15", "actual_value": "99.5"}
            ]
        }"#;
        let request: PerformanceScoreRequest = serde_json::from_str(json).unwrap();
        let observations = request.into_observations();

        assert_eq!(observations.len(), 2);
        assert!(observations.iter().all(|o| o.employee_id == "emp_002"));
        assert_eq!(observations[1].actual_value, Decimal::new(995, 1));
    }

    #[test]
    fn test_task_request_defaults() {
        let json = r#"{
            "task": {
                "id": "task_001",
                "assigned_to": "emp_001",
                "status": "pending",
                "priority": "low",
                "due_date": "2026-01-20T17:00:00Z"
            }
        }"#;
        let request: TaskEvaluationRequest = serde_json::from_str(json).unwrap();
        assert!(request.previous_status.is_none());
        assert!(request.now.is_none());
    }
}
