//! Task model and its status/priority enumerations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a task.
///
/// Any status may follow any other; timestamp side effects are attached to
/// the target status only (see [`crate::calculation::apply_status_change`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started yet.
    #[default]
    Pending,
    /// Work has begun.
    InProgress,
    /// Work is finished.
    Completed,
    /// The task was abandoned.
    Cancelled,
    /// Work is paused.
    OnHold,
}

impl TaskStatus {
    /// Returns true for statuses that end the task's lifecycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_metrics::models::TaskStatus;
    ///
    /// assert!(TaskStatus::Completed.is_terminal());
    /// assert!(TaskStatus::Cancelled.is_terminal());
    /// assert!(!TaskStatus::OnHold.is_terminal());
    /// ```
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Cancelled)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Completed => write!(f, "completed"),
            TaskStatus::Cancelled => write!(f, "cancelled"),
            TaskStatus::OnHold => write!(f, "on_hold"),
        }
    }
}

/// Priority of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Low priority.
    Low,
    /// Medium priority.
    #[default]
    Medium,
    /// High priority.
    High,
    /// Urgent.
    Urgent,
}

/// A task assigned to an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for the task.
    pub id: String,
    /// Short title.
    #[serde(default)]
    pub title: String,
    /// The employee the task is assigned to.
    pub assigned_to: String,
    /// Current status.
    #[serde(default)]
    pub status: TaskStatus,
    /// Priority.
    #[serde(default)]
    pub priority: TaskPriority,
    /// When the task is due.
    pub due_date: DateTime<Utc>,
    /// Estimated effort in hours.
    #[serde(default)]
    pub estimated_hours: Option<Decimal>,
    /// Effort spent so far in hours.
    #[serde(default)]
    pub actual_hours: Option<Decimal>,
    /// When the task first entered `in_progress`.
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    /// When the task first entered `completed`.
    #[serde(default)]
    pub completion_date: Option<DateTime<Utc>>,
}
