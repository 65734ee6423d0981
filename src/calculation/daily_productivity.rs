//! Daily productivity aggregation.
//!
//! Derives net work time, a capped productivity score and an efficiency
//! percentage from a [`DailyWorkLog`]. Unlike scheduled hours, the break is
//! deducted from work time by default.

use std::time::Instant;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{CounterRule, EfficiencyFormula, ProductivityRules};
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditTrace, AuditWarning, DailyWorkLog};

use super::time_interval::{elapsed_hours, minutes_to_hours};

/// Derived values of one daily work log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyProductivityResult {
    /// The employee the log belongs to.
    pub employee_id: String,
    /// The work date.
    pub date: NaiveDate,
    /// Hours from shift start to shift end.
    pub shift_span_hours: Decimal,
    /// Break time in hours.
    pub break_hours: Decimal,
    /// Work hours, net of the break unless deduction is disabled. Negative
    /// when a deducted break exceeds the shift.
    pub total_work_hours: Decimal,
    /// Productivity score out of the sum of the configured caps.
    pub productivity_score: u32,
    /// Efficiency percentage in `[0, 100]`. Rounded half away from zero to
    /// two places for reporting; `efficiency_percentage` itself is exact.
    pub efficiency_percentage: Decimal,
    /// The steps and warnings behind these values.
    pub audit_trace: AuditTrace,
}

/// Net work hours of a shift: elapsed time minus the break.
///
/// # Examples
///
/// ```
/// use workforce_metrics::calculation::total_work_time;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
/// assert_eq!(total_work_time(start, end, 60), Decimal::from(8));
/// ```
pub fn total_work_time(start: NaiveTime, end: NaiveTime, break_minutes: u32) -> Decimal {
    elapsed_hours(start, end) - minutes_to_hours(break_minutes)
}

fn counter_points(count: u32, rule: CounterRule) -> u32 {
    count.saturating_mul(rule.points_per_unit).min(rule.cap)
}

/// Capped productivity score from the day's counters.
///
/// With the default rules packages earn 2 points each up to 40, and trucks
/// received and dispatched earn 3 points each up to 30 per direction.
///
/// # Examples
///
/// ```
/// use workforce_metrics::calculation::productivity_score;
/// use workforce_metrics::config::ProductivityRules;
///
/// assert_eq!(productivity_score(25, 12, 8, &ProductivityRules::default()), 94);
/// ```
pub fn productivity_score(
    packages: u32,
    trucks_received: u32,
    trucks_dispatched: u32,
    rules: &ProductivityRules,
) -> u32 {
    counter_points(packages, rules.packages)
        + counter_points(trucks_received, rules.trucks_received)
        + counter_points(trucks_dispatched, rules.trucks_dispatched)
}

/// Efficiency percentage of a shift under the chosen formula.
///
/// Zero when the denominator is not positive. Never negative.
pub fn efficiency_percentage(
    shift_span_hours: Decimal,
    break_hours: Decimal,
    formula: EfficiencyFormula,
) -> Decimal {
    let (numerator, denominator) = match formula {
        EfficiencyFormula::WorkOverSpan => (shift_span_hours - break_hours, shift_span_hours),
        EfficiencyFormula::DoubleDeduction => (
            shift_span_hours - break_hours - break_hours,
            shift_span_hours - break_hours,
        ),
    };
    if denominator <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    numerator.max(Decimal::ZERO) / denominator * Decimal::ONE_HUNDRED
}

/// Evaluates a daily work log.
///
/// The log is validated first. Steps are numbered from `step_number`.
pub fn evaluate_daily_log(
    log: &DailyWorkLog,
    rules: &ProductivityRules,
    step_number: u32,
) -> EngineResult<DailyProductivityResult> {
    let started = Instant::now();
    log.validate()?;

    let mut trace = AuditTrace::default();

    let shift_span_hours = elapsed_hours(log.start_time, log.end_time);
    let break_hours = minutes_to_hours(log.total_break_minutes);
    let total_work_hours = if rules.deduct_break_from_work_time {
        total_work_time(log.start_time, log.end_time, log.total_break_minutes)
    } else {
        shift_span_hours
    };

    if break_hours > shift_span_hours {
        trace.warnings.push(AuditWarning::new(
            "BREAK_EXCEEDS_SHIFT",
            format!(
                "Break of {} minutes is longer than the {} hour shift",
                log.total_break_minutes,
                shift_span_hours.normalize()
            ),
            "high",
        ));
    }

    trace.steps.push(AuditStep {
        step_number,
        rule_id: "total_work_time".to_string(),
        rule_name: "Total Work Time".to_string(),
        input: serde_json::json!({
            "start_time": log.start_time.format("%H:%M:%S").to_string(),
            "end_time": log.end_time.format("%H:%M:%S").to_string(),
            "total_break_minutes": log.total_break_minutes
        }),
        output: serde_json::json!({
            "shift_span_hours": shift_span_hours.normalize().to_string(),
            "total_work_hours": total_work_hours.normalize().to_string()
        }),
        reasoning: if rules.deduct_break_from_work_time {
            format!(
                "{} hour shift less {} hour break = {} hours",
                shift_span_hours.normalize(),
                break_hours.normalize(),
                total_work_hours.normalize()
            )
        } else {
            format!(
                "{} hour shift, break deduction disabled",
                shift_span_hours.normalize()
            )
        },
    });

    let package_points = counter_points(log.packages_processed, rules.packages);
    let received_points = counter_points(log.trucks_received, rules.trucks_received);
    let dispatched_points = counter_points(log.trucks_dispatched, rules.trucks_dispatched);
    let score = productivity_score(
        log.packages_processed,
        log.trucks_received,
        log.trucks_dispatched,
        rules,
    );

    trace.steps.push(AuditStep {
        step_number: step_number + 1,
        rule_id: "productivity_score".to_string(),
        rule_name: "Productivity Score".to_string(),
        input: serde_json::json!({
            "packages_processed": log.packages_processed,
            "trucks_received": log.trucks_received,
            "trucks_dispatched": log.trucks_dispatched
        }),
        output: serde_json::json!({
            "package_points": package_points,
            "trucks_received_points": received_points,
            "trucks_dispatched_points": dispatched_points,
            "score": score
        }),
        reasoning: format!(
            "Packages {} + received {} + dispatched {} = {}",
            package_points, received_points, dispatched_points, score
        ),
    });

    let efficiency = efficiency_percentage(shift_span_hours, break_hours, rules.efficiency_formula)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    trace.steps.push(AuditStep {
        step_number: step_number + 2,
        rule_id: "efficiency_percentage".to_string(),
        rule_name: "Efficiency Percentage".to_string(),
        input: serde_json::json!({
            "shift_span_hours": shift_span_hours.normalize().to_string(),
            "break_hours": break_hours.normalize().to_string(),
            "formula": rules.efficiency_formula
        }),
        output: serde_json::json!({
            "efficiency_percentage": efficiency.normalize().to_string()
        }),
        reasoning: match rules.efficiency_formula {
            EfficiencyFormula::WorkOverSpan if shift_span_hours <= Decimal::ZERO => {
                "Zero shift span, efficiency set to 0".to_string()
            }
            EfficiencyFormula::DoubleDeduction if break_hours >= shift_span_hours => {
                "Break covers the shift span, efficiency set to 0".to_string()
            }
            _ if efficiency.is_zero() && break_hours > Decimal::ZERO => {
                "Break leaves no work time, efficiency set to 0".to_string()
            }
            EfficiencyFormula::WorkOverSpan => {
                "Work time as a share of the shift span".to_string()
            }
            EfficiencyFormula::DoubleDeduction => {
                "Shift less twice the break over shift less the break".to_string()
            }
        },
    });

    trace.duration_us = started.elapsed().as_micros() as u64;

    debug!(
        employee_id = %log.employee_id,
        date = %log.date,
        score,
        efficiency = %efficiency,
        "Evaluated daily work log"
    );

    Ok(DailyProductivityResult {
        employee_id: log.employee_id.clone(),
        date: log.date,
        shift_span_hours,
        break_hours,
        total_work_hours,
        productivity_score: score,
        efficiency_percentage: efficiency,
        audit_trace: trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn log(start: &str, end: &str, break_minutes: u32) -> DailyWorkLog {
        DailyWorkLog {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            start_time: time(start),
            end_time: time(end),
            total_break_minutes: break_minutes,
            packages_processed: 25,
            trucks_received: 12,
            trucks_dispatched: 8,
            quality_score: Some(dec("0.97")),
            safety_incidents: 0,
        }
    }

    // ==========================================================================
    // DP-001: work time deducts the break
    // ==========================================================================
    #[test]
    fn test_dp_001_work_time_deducts_break() {
        assert_eq!(total_work_time(time("08:00"), time("17:00"), 60), dec("8"));
        assert_eq!(total_work_time(time("22:00"), time("06:00"), 30), dec("7.5"));
    }

    // ==========================================================================
    // DP-002: break longer than the shift goes negative
    // ==========================================================================
    #[test]
    fn test_dp_002_break_longer_than_shift() {
        assert_eq!(total_work_time(time("09:00"), time("10:00"), 90), dec("-0.5"));
    }

    // ==========================================================================
    // DP-003: productivity score example
    // ==========================================================================
    #[test]
    fn test_dp_003_productivity_score_example() {
        assert_eq!(productivity_score(25, 12, 8, &ProductivityRules::default()), 94);
    }

    #[test]
    fn test_productivity_score_caps() {
        let rules = ProductivityRules::default();
        assert_eq!(productivity_score(0, 0, 0, &rules), 0);
        assert_eq!(productivity_score(19, 9, 9, &rules), 38 + 27 + 27);
        assert_eq!(productivity_score(20, 10, 10, &rules), 100);
        assert_eq!(productivity_score(u32::MAX, u32::MAX, u32::MAX, &rules), 100);
    }

    #[test]
    fn test_productivity_score_custom_rules() {
        let rules = ProductivityRules {
            packages: CounterRule {
                points_per_unit: 1,
                cap: 50,
            },
            ..ProductivityRules::default()
        };
        assert_eq!(productivity_score(45, 0, 0, &rules), 45);
    }

    // ==========================================================================
    // DP-004: efficiency formulas
    // ==========================================================================
    #[test]
    fn test_dp_004_work_over_span() {
        let efficiency = efficiency_percentage(dec("10"), dec("1"), EfficiencyFormula::WorkOverSpan);
        assert_eq!(efficiency, dec("90"));
    }

    #[test]
    fn test_dp_004_double_deduction() {
        let efficiency =
            efficiency_percentage(dec("10"), dec("2"), EfficiencyFormula::DoubleDeduction);
        assert_eq!(efficiency, dec("75"));
    }

    #[test]
    fn test_formulas_agree_without_break() {
        for formula in [EfficiencyFormula::WorkOverSpan, EfficiencyFormula::DoubleDeduction] {
            assert_eq!(efficiency_percentage(dec("8"), Decimal::ZERO, formula), dec("100"));
        }
    }

    #[test]
    fn test_zero_denominator_yields_zero() {
        assert_eq!(
            efficiency_percentage(Decimal::ZERO, Decimal::ZERO, EfficiencyFormula::WorkOverSpan),
            Decimal::ZERO
        );
        assert_eq!(
            efficiency_percentage(dec("2"), dec("2"), EfficiencyFormula::DoubleDeduction),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_break_longer_than_span_yields_zero() {
        for formula in [EfficiencyFormula::WorkOverSpan, EfficiencyFormula::DoubleDeduction] {
            assert_eq!(efficiency_percentage(dec("1"), dec("1.5"), formula), Decimal::ZERO);
        }
        // Half the span or more leaves nothing once the break is taken twice
        assert_eq!(
            efficiency_percentage(dec("1"), dec("0.6"), EfficiencyFormula::DoubleDeduction),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_evaluate_daily_log() {
        let result = evaluate_daily_log(&log("08:00", "17:00", 60), &ProductivityRules::default(), 1)
            .unwrap();

        assert_eq!(result.shift_span_hours, dec("9"));
        assert_eq!(result.total_work_hours, dec("8"));
        assert_eq!(result.productivity_score, 94);
        // (9 - 2) / (9 - 1)
        assert_eq!(result.efficiency_percentage, dec("87.5"));
        assert!(result.audit_trace.warnings.is_empty());

        let rule_ids: Vec<&str> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec!["total_work_time", "productivity_score", "efficiency_percentage"]
        );
        assert_eq!(result.audit_trace.steps[2].step_number, 3);
    }

    #[test]
    fn test_evaluate_with_work_over_span() {
        let rules = ProductivityRules {
            efficiency_formula: EfficiencyFormula::WorkOverSpan,
            ..ProductivityRules::default()
        };
        let result = evaluate_daily_log(&log("08:00", "17:00", 60), &rules, 1).unwrap();
        assert_eq!(result.efficiency_percentage, dec("88.89"));
    }

    #[test]
    fn test_evaluate_without_break_deduction() {
        let rules = ProductivityRules {
            deduct_break_from_work_time: false,
            ..ProductivityRules::default()
        };
        let result = evaluate_daily_log(&log("08:00", "17:00", 60), &rules, 1).unwrap();
        assert_eq!(result.total_work_hours, dec("9"));
        assert_eq!(result.break_hours, dec("1"));
        assert!(result.audit_trace.steps[0].reasoning.contains("disabled"));
    }

    #[test]
    fn test_evaluate_warns_when_break_exceeds_shift() {
        let result = evaluate_daily_log(&log("09:00", "10:00", 90), &ProductivityRules::default(), 1)
            .unwrap();

        assert_eq!(result.total_work_hours, dec("-0.5"));
        assert_eq!(result.efficiency_percentage, Decimal::ZERO);
        assert!(result.audit_trace.steps[2].reasoning.contains("set to 0"));
        assert_eq!(result.audit_trace.warnings.len(), 1);
        assert_eq!(result.audit_trace.warnings[0].code, "BREAK_EXCEEDS_SHIFT");
    }

    #[test]
    fn test_zero_denominator_recorded_in_reasoning() {
        let result = evaluate_daily_log(&log("09:00", "10:00", 60), &ProductivityRules::default(), 1)
            .unwrap();
        assert_eq!(result.efficiency_percentage, Decimal::ZERO);
        assert!(result.audit_trace.steps[2].reasoning.contains("set to 0"));
    }

    #[test]
    fn test_evaluate_rejects_invalid_quality() {
        let mut bad = log("08:00", "17:00", 60);
        bad.quality_score = Some(dec("1.2"));
        assert!(matches!(
            evaluate_daily_log(&bad, &ProductivityRules::default(), 1),
            Err(EngineError::InvalidWorkLog { .. })
        ));
    }
}
