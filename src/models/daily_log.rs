//! Daily work log model.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One employee's recorded work day on the warehouse floor.
///
/// `end_time` earlier than `start_time` means the shift ended after midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWorkLog {
    /// The employee the log belongs to.
    pub employee_id: String,
    /// The work date.
    pub date: NaiveDate,
    /// Shift start.
    pub start_time: NaiveTime,
    /// Shift end.
    pub end_time: NaiveTime,
    /// Total break time taken, in minutes.
    #[serde(default)]
    pub total_break_minutes: u32,
    /// Packages processed.
    #[serde(default)]
    pub packages_processed: u32,
    /// Trucks received.
    #[serde(default)]
    pub trucks_received: u32,
    /// Trucks dispatched.
    #[serde(default)]
    pub trucks_dispatched: u32,
    /// Quality score in [0, 1], if assessed.
    #[serde(default)]
    pub quality_score: Option<Decimal>,
    /// Safety incidents recorded.
    #[serde(default)]
    pub safety_incidents: u32,
}

impl DailyWorkLog {
    /// Rejects a quality score outside [0, 1].
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(quality) = self.quality_score {
            if quality < Decimal::ZERO || quality > Decimal::ONE {
                return Err(EngineError::InvalidWorkLog {
                    employee_id: self.employee_id.clone(),
                    message: format!("quality score {} is outside 0..=1", quality),
                });
            }
        }
        Ok(())
    }
}
