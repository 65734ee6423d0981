//! Error types for the workforce metrics engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the rule layer rejects. All of them are local and
//! recoverable: a failure means malformed input, never a transient fault.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// The main error type for the workforce metrics engine.
///
/// # Example
///
/// ```
/// use workforce_metrics::error::EngineError;
///
/// let error = EngineError::MetricNotFound {
///     id: "packages_per_hour".to_string(),
/// };
/// assert_eq!(error.to_string(), "Performance metric not found: packages_per_hour");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A closed time interval ends at or before its start.
    #[error("Invalid interval: end {end} must be after start {start}")]
    InvalidInterval {
        /// The start of the interval.
        start: DateTime<Utc>,
        /// The offending end of the interval.
        end: DateTime<Utc>,
    },

    /// A numeric score was required but the metric has no target to score against.
    #[error("Missing reference data for metric '{metric}': {message}")]
    MissingReferenceData {
        /// The metric identifier.
        metric: String,
        /// What was missing.
        message: String,
    },

    /// The metric band (min/target) cannot produce a proportional score.
    #[error("Inconsistent band for metric '{metric}': {message}")]
    InconsistentMetricBand {
        /// The metric identifier.
        metric: String,
        /// A description of the inconsistency.
        message: String,
    },

    /// A weekly schedule entry violates its invariants.
    #[error("Invalid schedule entry '{entry_id}': {message}")]
    InvalidScheduleEntry {
        /// The ID of the schedule entry.
        entry_id: String,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A daily work log contains out-of-range values.
    #[error("Invalid work log for '{employee_id}': {message}")]
    InvalidWorkLog {
        /// The employee the log belongs to.
        employee_id: String,
        /// A description of what made the log invalid.
        message: String,
    },

    /// No metric definition exists for the given id.
    #[error("Performance metric not found: {id}")]
    MetricNotFound {
        /// The metric id that was not found.
        id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
