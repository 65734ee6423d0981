//! Time-log interval validation.
//!
//! A closed time log must end strictly after it starts. Open logs (no end
//! yet) are always accepted.

use chrono::{DateTime, Utc};

use crate::error::{EngineError, EngineResult};
use crate::models::TimeLogEntry;

/// Validates a logged interval before it is created or updated.
///
/// # Examples
///
/// ```
/// use workforce_metrics::calculation::validate_time_log;
/// use workforce_metrics::error::EngineError;
/// use chrono::{TimeZone, Utc};
///
/// let nine = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
/// let eight = Utc.with_ymd_and_hms(2026, 1, 15, 8, 0, 0).unwrap();
///
/// assert!(validate_time_log(nine, None).is_ok());
/// assert!(matches!(
///     validate_time_log(nine, Some(eight)),
///     Err(EngineError::InvalidInterval { .. })
/// ));
/// ```
pub fn validate_time_log(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> EngineResult<()> {
    match end {
        Some(end) if end <= start => Err(EngineError::InvalidInterval { start, end }),
        _ => Ok(()),
    }
}

/// Validates a whole time log entry.
pub fn validate_time_log_entry(entry: &TimeLogEntry) -> EngineResult<()> {
    validate_time_log(entry.start_time, entry.end_time)
}
