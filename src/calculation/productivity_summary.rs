//! Productivity totals over a report period.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ProductivityRules;
use crate::error::EngineResult;
use crate::models::{DailyWorkLog, ReportPeriod};

use super::daily_productivity::evaluate_daily_log;

/// An employee's productivity over a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductivitySummary {
    /// The employee summarized.
    pub employee_id: String,
    /// The period covered.
    pub period: ReportPeriod,
    /// Number of logs inside the period.
    pub days_logged: u32,
    /// Sum of net work hours.
    pub total_work_hours: Decimal,
    /// Sum of packages processed.
    pub total_packages_processed: u64,
    /// Sum of trucks received.
    pub total_trucks_received: u64,
    /// Sum of trucks dispatched.
    pub total_trucks_dispatched: u64,
    /// Sum of safety incidents.
    pub total_safety_incidents: u64,
    /// Mean productivity score, 0 with no logs.
    pub average_productivity_score: Decimal,
    /// Mean efficiency percentage, 0 with no logs.
    pub average_efficiency_percentage: Decimal,
    /// Mean quality score over the logs that carry one.
    pub average_quality_score: Option<Decimal>,
}

fn mean(total: Decimal, count: u32) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    (total / Decimal::from(count)).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Summarizes `employee_id`'s logs that fall inside `period`.
///
/// Logs of other employees or outside the period are ignored. Every log that
/// is counted must pass validation.
pub fn summarize_productivity(
    employee_id: &str,
    period: &ReportPeriod,
    logs: &[DailyWorkLog],
    rules: &ProductivityRules,
) -> EngineResult<ProductivitySummary> {
    let mut summary = ProductivitySummary {
        employee_id: employee_id.to_string(),
        period: period.clone(),
        days_logged: 0,
        total_work_hours: Decimal::ZERO,
        total_packages_processed: 0,
        total_trucks_received: 0,
        total_trucks_dispatched: 0,
        total_safety_incidents: 0,
        average_productivity_score: Decimal::ZERO,
        average_efficiency_percentage: Decimal::ZERO,
        average_quality_score: None,
    };

    let mut score_total = Decimal::ZERO;
    let mut efficiency_total = Decimal::ZERO;
    let mut quality_total = Decimal::ZERO;
    let mut quality_count = 0u32;

    for log in logs
        .iter()
        .filter(|log| log.employee_id == employee_id && period.contains_date(log.date))
    {
        let day = evaluate_daily_log(log, rules, 1)?;

        summary.days_logged += 1;
        summary.total_work_hours += day.total_work_hours;
        summary.total_packages_processed += u64::from(log.packages_processed);
        summary.total_trucks_received += u64::from(log.trucks_received);
        summary.total_trucks_dispatched += u64::from(log.trucks_dispatched);
        summary.total_safety_incidents += u64::from(log.safety_incidents);
        score_total += Decimal::from(day.productivity_score);
        efficiency_total += day.efficiency_percentage;

        if let Some(quality) = log.quality_score {
            quality_total += quality;
            quality_count += 1;
        }
    }

    summary.average_productivity_score = mean(score_total, summary.days_logged);
    summary.average_efficiency_percentage = mean(efficiency_total, summary.days_logged);
    if quality_count > 0 {
        summary.average_quality_score = Some(mean(quality_total, quality_count));
    }

    info!(
        employee_id,
        start_date = %period.start_date,
        end_date = %period.end_date,
        days_logged = summary.days_logged,
        "Summarized productivity"
    );

    Ok(summary)
}
