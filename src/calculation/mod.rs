//! Derived-metric rules for the workforce engine.
//!
//! Interval arithmetic, schedule totals, task status and timing rules,
//! time-log validation, performance scoring, and daily productivity with its
//! period summary. Every function is pure: "now" and configuration are passed
//! in by the caller.

mod daily_productivity;
mod performance_scoring;
mod productivity_summary;
mod schedule_hours;
mod task_rules;
mod time_interval;
mod time_log_validation;

pub use daily_productivity::{
    DailyProductivityResult, efficiency_percentage, evaluate_daily_log, productivity_score,
    total_work_time,
};
pub use performance_scoring::{
    PerformanceScoreResult, is_above_target, performance_score, require_performance_score,
    score_observation, weighted_overall_score,
};
pub use productivity_summary::{ProductivitySummary, summarize_productivity};
pub use schedule_hours::{ScheduledHoursResult, total_scheduled_hours};
pub use task_rules::{
    StatusChangeResult, TaskStatusChange, TimestampUpdate, apply_status_change, is_overdue,
    prepare_task_for_save, progress_percentage,
};
pub use time_interval::{elapsed_hours, hours_between, minutes_to_hours};
pub use time_log_validation::{validate_time_log, validate_time_log_entry};
