//! Core data models for the workforce metrics engine.
//!
//! These are transient, already-loaded values handed over by the persistence
//! layer. The engine reads them and returns derived values; it never stores
//! them.

mod audit;
mod daily_log;
mod employee;
mod performance;
mod report;
mod schedule;
mod task;
mod time_log;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use daily_log::DailyWorkLog;
pub use employee::Employee;
pub use performance::{
    EvaluationType, MetricType, PerformanceEvaluation, PerformanceMetric, PerformanceObservation,
};
pub use report::{GeneratedReport, ReportPeriod, ReportStatus};
pub use schedule::WorkScheduleEntry;
pub use task::{Task, TaskPriority, TaskStatus};
pub use time_log::TimeLogEntry;
