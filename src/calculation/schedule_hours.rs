//! Scheduled hours of a weekly schedule entry.
//!
//! The scheduled total is the full shift span. The break window is reported
//! alongside but only subtracted when [`SchedulingRules::deduct_break_from_schedule`]
//! is enabled, unlike the daily work log where breaks are always deducted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SchedulingRules;
use crate::models::{AuditStep, WorkScheduleEntry};

use super::time_interval::elapsed_hours;

/// The result of evaluating a schedule entry's hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledHoursResult {
    /// Scheduled hours after the configured break handling.
    pub total_hours: Decimal,
    /// Length of the shift from start to end.
    pub shift_span_hours: Decimal,
    /// Length of the break window.
    pub break_hours: Decimal,
    /// Whether the break was deducted from `total_hours`.
    pub break_deducted: bool,
    /// The audit step recording this evaluation.
    pub audit_step: AuditStep,
}

/// Computes the scheduled hours of a weekly schedule entry.
///
/// The entry is assumed to have passed [`WorkScheduleEntry::validate`].
///
/// # Examples
///
/// ```
/// use workforce_metrics::calculation::total_scheduled_hours;
/// use workforce_metrics::config::SchedulingRules;
/// use workforce_metrics::models::WorkScheduleEntry;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let entry = WorkScheduleEntry {
///     id: "ws_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     day_of_week: 0,
///     start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     break_start: NaiveTime::from_hms_opt(12, 0, 0),
///     break_end: NaiveTime::from_hms_opt(13, 0, 0),
/// };
///
/// let result = total_scheduled_hours(&entry, SchedulingRules::default(), 1);
/// assert_eq!(result.total_hours, Decimal::from(9));
/// assert_eq!(result.break_hours, Decimal::ONE);
/// ```
pub fn total_scheduled_hours(
    entry: &WorkScheduleEntry,
    rules: SchedulingRules,
    step_number: u32,
) -> ScheduledHoursResult {
    let shift_span_hours = elapsed_hours(entry.start_time, entry.end_time);
    let break_hours = entry.break_hours();
    let break_deducted = rules.deduct_break_from_schedule && break_hours > Decimal::ZERO;

    let total_hours = if break_deducted {
        shift_span_hours - break_hours
    } else {
        shift_span_hours
    };

    let crosses_midnight = entry.end_time < entry.start_time;
    let mut reasoning = format!(
        "Shift {}-{} spans {} hours",
        entry.start_time.format("%H:%M"),
        entry.end_time.format("%H:%M"),
        shift_span_hours.normalize()
    );
    if crosses_midnight {
        reasoning.push_str(" (crosses midnight)");
    }
    if break_deducted {
        reasoning.push_str(&format!(
            "; {} hour break deducted",
            break_hours.normalize()
        ));
    } else if break_hours > Decimal::ZERO {
        reasoning.push_str(&format!(
            "; {} hour break not deducted",
            break_hours.normalize()
        ));
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "scheduled_hours".to_string(),
        rule_name: "Scheduled Hours".to_string(),
        input: serde_json::json!({
            "entry_id": entry.id,
            "day_of_week": entry.day_of_week,
            "start_time": entry.start_time.format("%H:%M:%S").to_string(),
            "end_time": entry.end_time.format("%H:%M:%S").to_string(),
            "break_hours": break_hours.normalize().to_string(),
            "deduct_break": rules.deduct_break_from_schedule
        }),
        output: serde_json::json!({
            "total_hours": total_hours.normalize().to_string()
        }),
        reasoning,
    };

    ScheduledHoursResult {
        total_hours,
        shift_span_hours,
        break_hours,
        break_deducted,
        audit_step,
    }
}
