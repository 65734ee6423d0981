//! Task status and timing rules.
//!
//! Status transitions are unconstrained: any status may follow any other.
//! Side effects hang off the target status only. Entering `in_progress`
//! stamps the start date and entering `completed` stamps the completion date,
//! each only when the date is still unset. The persistence layer calls
//! [`apply_status_change`] before writing a task and applies the returned
//! [`TimestampUpdate`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{AuditStep, Task, TaskStatus};

/// A status change about to be persisted.
///
/// `from` is `None` when the task is being created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatusChange {
    /// Status before the write.
    pub from: Option<TaskStatus>,
    /// Status being written.
    pub to: TaskStatus,
}

impl TaskStatusChange {
    /// Returns true when the write moves the task into a different status.
    pub fn is_transition(&self) -> bool {
        self.from != Some(self.to)
    }
}

/// Timestamps to set on a task before it is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampUpdate {
    /// New start date, if one must be stamped.
    pub start_date: Option<DateTime<Utc>>,
    /// New completion date, if one must be stamped.
    pub completion_date: Option<DateTime<Utc>>,
}

impl TimestampUpdate {
    /// Returns true when no field needs to change.
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.completion_date.is_none()
    }

    /// Writes the stamped fields into `task`.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(start) = self.start_date {
            task.start_date = Some(start);
        }
        if let Some(completion) = self.completion_date {
            task.completion_date = Some(completion);
        }
    }
}

/// The result of running the pre-persist rules for a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChangeResult {
    /// Fields to apply.
    pub update: TimestampUpdate,
    /// The audit step recording the decision.
    pub audit_step: AuditStep,
}

/// Computes the timestamps a status write must stamp.
///
/// `task` is the state about to be written, so its `status` is expected to
/// equal `change.to`. The guards look at the task's current dates, which
/// makes re-saving an `in_progress` or `completed` task idempotent.
///
/// # Examples
///
/// ```
/// use workforce_metrics::calculation::{apply_status_change, TaskStatusChange};
/// use workforce_metrics::models::{Task, TaskPriority, TaskStatus};
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
/// let task = Task {
///     id: "task_001".to_string(),
///     title: "Cycle count aisle 4".to_string(),
///     assigned_to: "emp_001".to_string(),
///     status: TaskStatus::InProgress,
///     priority: TaskPriority::Medium,
///     due_date: Utc.with_ymd_and_hms(2026, 1, 16, 17, 0, 0).unwrap(),
///     estimated_hours: None,
///     actual_hours: None,
///     start_date: None,
///     completion_date: None,
/// };
/// let change = TaskStatusChange { from: Some(TaskStatus::Pending), to: TaskStatus::InProgress };
///
/// let result = apply_status_change(&change, &task, now, 1);
/// assert_eq!(result.update.start_date, Some(now));
/// assert_eq!(result.update.completion_date, None);
/// ```
pub fn apply_status_change(
    change: &TaskStatusChange,
    task: &Task,
    now: DateTime<Utc>,
    step_number: u32,
) -> StatusChangeResult {
    let mut update = TimestampUpdate::default();

    let reasoning = match change.to {
        TaskStatus::InProgress if task.start_date.is_none() => {
            update.start_date = Some(now);
            "Entering in_progress without a start date, start date stamped".to_string()
        }
        TaskStatus::InProgress => {
            "In progress with a start date already recorded, left unchanged".to_string()
        }
        TaskStatus::Completed if task.completion_date.is_none() => {
            update.completion_date = Some(now);
            "Entering completed without a completion date, completion date stamped".to_string()
        }
        TaskStatus::Completed => {
            "Completed with a completion date already recorded, left unchanged".to_string()
        }
        other => format!("Status {} has no timestamp side effect", other),
    };

    debug!(
        task_id = %task.id,
        from = ?change.from,
        to = %change.to,
        stamped = !update.is_empty(),
        "Applied task status rules"
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "task_status_timestamps".to_string(),
        rule_name: "Task Status Timestamps".to_string(),
        input: serde_json::json!({
            "task_id": task.id,
            "from": change.from.map(|s| s.to_string()),
            "to": change.to.to_string(),
            "start_date": task.start_date,
            "completion_date": task.completion_date
        }),
        output: serde_json::json!({
            "start_date": update.start_date,
            "completion_date": update.completion_date
        }),
        reasoning,
    };

    StatusChangeResult { update, audit_step }
}

/// Returns `task` with the pre-persist rules applied.
///
/// Convenience for callers that hold the previous status and the task about
/// to be written.
pub fn prepare_task_for_save(
    previous_status: Option<TaskStatus>,
    mut task: Task,
    now: DateTime<Utc>,
) -> Task {
    let change = TaskStatusChange {
        from: previous_status,
        to: task.status,
    };
    let result = apply_status_change(&change, &task, now, 1);
    result.update.apply_to(&mut task);
    task
}

/// Returns true when the task is past due and not in a terminal status.
///
/// # Examples
///
/// ```
/// use workforce_metrics::calculation::is_overdue;
/// use workforce_metrics::models::{Task, TaskPriority, TaskStatus};
/// use chrono::{TimeZone, Utc};
///
/// let mut task = Task {
///     id: "task_001".to_string(),
///     title: String::new(),
///     assigned_to: "emp_001".to_string(),
///     status: TaskStatus::Pending,
///     priority: TaskPriority::High,
///     due_date: Utc.with_ymd_and_hms(2026, 1, 10, 17, 0, 0).unwrap(),
///     estimated_hours: None,
///     actual_hours: None,
///     start_date: None,
///     completion_date: None,
/// };
/// let now = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
/// assert!(is_overdue(&task, now));
///
/// task.status = TaskStatus::Cancelled;
/// assert!(!is_overdue(&task, now));
/// ```
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    task.due_date < now && !task.status.is_terminal()
}

/// Returns actual hours as a percentage of estimated hours, capped at 100.
///
/// Zero when either value is missing or the estimate is not positive. A
/// ratio too large to represent saturates at the cap.
pub fn progress_percentage(task: &Task) -> Decimal {
    match (task.estimated_hours, task.actual_hours) {
        (Some(estimated), Some(actual)) if estimated > Decimal::ZERO => {
            if actual <= Decimal::ZERO {
                return Decimal::ZERO;
            }
            actual
                .checked_div(estimated)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .map_or(Decimal::ONE_HUNDRED, |percentage| {
                    percentage.min(Decimal::ONE_HUNDRED)
                })
        }
        _ => Decimal::ZERO,
    }
}
