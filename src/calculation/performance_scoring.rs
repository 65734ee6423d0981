//! Performance scoring against a metric band.
//!
//! An observed value is scaled linearly between the metric's minimum (score
//! 0) and target (score 100). Values at or above the target score 100, values
//! below the minimum score 0. A metric without a target cannot be scored, and
//! this is reported as `None` rather than a zero score.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{MissingMinimumPolicy, ScoringRules};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, PerformanceMetric, PerformanceObservation};

/// The result of scoring one observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceScoreResult {
    /// The scored metric.
    pub metric_id: String,
    /// The observed value.
    pub actual_value: Decimal,
    /// Score in [0, 100], or `None` when the metric has no target.
    pub score: Option<Decimal>,
    /// Whether the observation met the target.
    pub is_above_target: bool,
    /// The audit step recording the scoring.
    pub audit_step: AuditStep,
}

/// Scores `actual` against the metric band.
///
/// When the value falls inside the band and the metric has no minimum, the
/// configured [`MissingMinimumPolicy`] decides: `ZeroBaseline` scores from
/// zero, `Reject` fails with [`EngineError::InconsistentMetricBand`]. A band
/// of zero or negative width scores 0.
///
/// # Examples
///
/// ```
/// use workforce_metrics::calculation::performance_score;
/// use workforce_metrics::config::ScoringRules;
/// use workforce_metrics::models::{MetricType, PerformanceMetric};
/// use rust_decimal::Decimal;
///
/// let metric = PerformanceMetric {
///     id: "packages_per_hour".to_string(),
///     name: "Packages per hour".to_string(),
///     metric_type: MetricType::Productivity,
///     unit: "packages/hour".to_string(),
///     target_value: Some(Decimal::from(60)),
///     min_value: Some(Decimal::from(30)),
///     max_value: None,
///     weight: Decimal::ONE,
/// };
///
/// let score = performance_score(Decimal::from(45), &metric, ScoringRules::default()).unwrap();
/// assert_eq!(score, Some(Decimal::from(50)));
/// ```
pub fn performance_score(
    actual: Decimal,
    metric: &PerformanceMetric,
    rules: ScoringRules,
) -> EngineResult<Option<Decimal>> {
    let Some(target) = metric.target_value else {
        return Ok(None);
    };

    if actual >= target {
        return Ok(Some(Decimal::ONE_HUNDRED));
    }

    let min = match (metric.min_value, rules.missing_minimum) {
        (Some(min), _) if actual < min => return Ok(Some(Decimal::ZERO)),
        (Some(min), _) => min,
        (None, MissingMinimumPolicy::ZeroBaseline) => Decimal::ZERO,
        (None, MissingMinimumPolicy::Reject) => {
            return Err(EngineError::InconsistentMetricBand {
                metric: metric.id.clone(),
                message: format!(
                    "value {} is below target {} but no minimum value is set",
                    actual, target
                ),
            });
        }
    };

    let band = target - min;
    if band <= Decimal::ZERO {
        return Ok(Some(Decimal::ZERO));
    }

    let score = (actual - min) / band * Decimal::ONE_HUNDRED;
    Ok(Some(score.max(Decimal::ZERO)))
}

/// Like [`performance_score`] but fails when the metric cannot be scored.
pub fn require_performance_score(
    actual: Decimal,
    metric: &PerformanceMetric,
    rules: ScoringRules,
) -> EngineResult<Decimal> {
    performance_score(actual, metric, rules)?.ok_or_else(|| EngineError::MissingReferenceData {
        metric: metric.id.clone(),
        message: "no target value to score against".to_string(),
    })
}

/// Returns true when the metric has a target and `actual` reaches it.
pub fn is_above_target(actual: Decimal, metric: &PerformanceMetric) -> bool {
    metric.target_value.is_some_and(|target| actual >= target)
}

/// Scores an observation and records the decision.
pub fn score_observation(
    observation: &PerformanceObservation,
    metric: &PerformanceMetric,
    rules: ScoringRules,
    step_number: u32,
) -> EngineResult<PerformanceScoreResult> {
    let actual = observation.actual_value;
    let score = performance_score(actual, metric, rules)?;
    let above = is_above_target(actual, metric);

    let reasoning = match (score, metric.target_value) {
        (None, _) | (_, None) => format!("Metric '{}' has no target, observation is unscored", metric.id),
        (Some(_), Some(target)) if above => format!(
            "{} meets target {}, full score",
            actual.normalize(),
            target.normalize()
        ),
        (Some(s), Some(target)) => format!(
            "{} is below target {}, scored {} within band",
            actual.normalize(),
            target.normalize(),
            s.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "performance_score".to_string(),
        rule_name: "Performance Score".to_string(),
        input: serde_json::json!({
            "employee_id": observation.employee_id,
            "metric_id": metric.id,
            "date": observation.date,
            "actual_value": actual.normalize().to_string(),
            "target_value": metric.target_value.map(|v| v.normalize().to_string()),
            "min_value": metric.min_value.map(|v| v.normalize().to_string())
        }),
        output: serde_json::json!({
            "score": score.map(|s| s.normalize().to_string()),
            "is_above_target": above
        }),
        reasoning,
    };

    Ok(PerformanceScoreResult {
        metric_id: metric.id.clone(),
        actual_value: actual,
        score,
        is_above_target: above,
        audit_step,
    })
}

/// Combines `(score, weight)` pairs into a weighted mean.
///
/// Returns `None` when the total weight is zero.
///
/// # Examples
///
/// ```
/// use workforce_metrics::calculation::weighted_overall_score;
/// use rust_decimal::Decimal;
///
/// let scores = [
///     (Decimal::from(100), Decimal::new(5, 1)),
///     (Decimal::from(50), Decimal::new(5, 1)),
/// ];
/// assert_eq!(weighted_overall_score(&scores), Some(Decimal::from(75)));
/// assert_eq!(weighted_overall_score(&[]), None);
/// ```
pub fn weighted_overall_score(scores: &[(Decimal, Decimal)]) -> Option<Decimal> {
    let total_weight: Decimal = scores.iter().map(|(_, weight)| *weight).sum();
    if total_weight <= Decimal::ZERO {
        return None;
    }
    let weighted: Decimal = scores.iter().map(|(score, weight)| score * weight).sum();
    Some(weighted / total_weight)
}
