//! Performance metric definitions, observations and evaluations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category of a performance metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    /// Output volume.
    Productivity,
    /// Output quality.
    Quality,
    /// Time efficiency.
    Efficiency,
    /// Attendance.
    Attendance,
    /// Safety record.
    Safety,
}

fn default_weight() -> Decimal {
    Decimal::ONE
}

/// Definition of a metric employees are measured against.
///
/// The `(min_value, target_value)` pair forms the metric band used to scale
/// an observed value into a 0-100 score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetric {
    /// Unique identifier for the metric.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Metric category.
    pub metric_type: MetricType,
    /// Unit of measure (e.g. "packages/hour").
    pub unit: String,
    /// Value at which the score reaches 100.
    #[serde(default)]
    pub target_value: Option<Decimal>,
    /// Value below which the score is 0.
    #[serde(default)]
    pub min_value: Option<Decimal>,
    /// Upper bound of plausible values.
    #[serde(default)]
    pub max_value: Option<Decimal>,
    /// Weight in [0, 1] used when combining scores.
    #[serde(default = "default_weight")]
    pub weight: Decimal,
}

impl PerformanceMetric {
    /// Whether the weight lies in `[0, 1]`.
    pub fn has_valid_weight(&self) -> bool {
        (Decimal::ZERO..=Decimal::ONE).contains(&self.weight)
    }
}

/// One measured value of a metric for an employee on a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceObservation {
    /// The measured employee.
    pub employee_id: String,
    /// The metric measured.
    pub metric_id: String,
    /// The date of the measurement.
    pub date: NaiveDate,
    /// The measured value.
    pub actual_value: Decimal,
}

/// Cadence of a performance evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationType {
    /// One day.
    Daily,
    /// One week.
    Weekly,
    /// One month.
    Monthly,
    /// One quarter.
    Quarterly,
    /// One year.
    Annual,
}

/// A periodic evaluation summarising an employee's performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEvaluation {
    /// The evaluated employee.
    pub employee_id: String,
    /// Evaluation cadence.
    pub evaluation_type: EvaluationType,
    /// First day covered (inclusive).
    pub start_date: NaiveDate,
    /// Last day covered (inclusive).
    pub end_date: NaiveDate,
    /// Combined score, usually from [`crate::calculation::weighted_overall_score`].
    #[serde(default)]
    pub overall_score: Option<Decimal>,
}

impl PerformanceEvaluation {
    /// Returns the number of days covered, counting both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_metrics::models::{EvaluationType, PerformanceEvaluation};
    /// use chrono::NaiveDate;
    ///
    /// let evaluation = PerformanceEvaluation {
    ///     employee_id: "emp_001".to_string(),
    ///     evaluation_type: EvaluationType::Weekly,
    ///     start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
    ///     overall_score: None,
    /// };
    /// assert_eq!(evaluation.duration_days(), 7);
    /// ```
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
