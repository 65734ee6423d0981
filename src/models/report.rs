//! Report period and generated report metadata.
//!
//! Rendering and delivery of report files happen elsewhere; these types carry
//! only the window a report covers and the bookkeeping of a finished run.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// An inclusive date range a report covers.
///
/// # Example
///
/// ```
/// use workforce_metrics::models::ReportPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()));
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 18).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 19).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl ReportPeriod {
    /// Checks if a given date falls within this period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Outcome of a report generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Still running.
    Generating,
    /// Finished.
    Completed,
    /// Finished with an error.
    Failed,
}

/// Metadata of a report produced by the report generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedReport {
    /// Report name.
    pub name: String,
    /// Run status.
    pub status: ReportStatus,
    /// Where the rendered file was stored.
    #[serde(default)]
    pub file_path: String,
    /// Size of the rendered file in bytes.
    #[serde(default)]
    pub file_size: Option<u64>,
    /// Error text for failed runs.
    #[serde(default)]
    pub error_message: String,
}

impl GeneratedReport {
    /// Returns the file size in megabytes rounded to two places, or zero.
    pub fn file_size_mb(&self) -> Decimal {
        match self.file_size {
            Some(bytes) if bytes > 0 => (Decimal::from(bytes) / Decimal::from(1024 * 1024))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven),
            _ => Decimal::ZERO,
        }
    }

    /// Returns true for a completed run that produced a file.
    pub fn is_successful(&self) -> bool {
        self.status == ReportStatus::Completed && !self.file_path.is_empty()
    }
}
