//! Audit trail models.
//!
//! Every rule evaluation records an [`AuditStep`] describing its inputs,
//! outputs and reasoning, so a derived value shown in the admin interface can
//! be traced back to the rule that produced it.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a rule decision.
///
/// # Example
///
/// ```
/// use workforce_metrics::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "productivity_score".to_string(),
///     rule_name: "Productivity Score".to_string(),
///     input: serde_json::json!({"packages_processed": 25}),
///     output: serde_json::json!({"score": 40}),
///     reasoning: "50 package points capped at 40".to_string(),
/// };
/// assert_eq!(step.rule_id, "productivity_score");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during evaluation.
///
/// Warnings flag values that were computed but look suspicious, such as a
/// break longer than the shift it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a new warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for an evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of rule steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during evaluation.
    pub warnings: Vec<AuditWarning>,
    /// The total evaluation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns the number the next appended step should carry.
    pub fn next_step_number(&self) -> u32 {
        self.steps.len() as u32 + 1
    }
}
