//! Configuration types for the workforce metrics engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every rule section has a
//! `Default` matching the behaviour of the HR system the rules come from, so
//! a partial `engine.yaml` only needs to name what it changes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::PerformanceMetric;

/// Static values of the administration site.
///
/// Set once when the configuration is loaded and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Header shown on every admin page.
    pub header: String,
    /// Browser title of the admin pages.
    pub title: String,
    /// Title of the admin index page.
    pub index_title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header: "Logistica HR Administration".to_string(),
            title: "Logistica HR Admin".to_string(),
            index_title: "Logistica HR Control Panel".to_string(),
        }
    }
}

/// Rules for weekly schedule totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SchedulingRules {
    /// Whether the break window is subtracted from scheduled hours.
    ///
    /// Off by default: scheduled hours are the full shift span.
    pub deduct_break_from_schedule: bool,
}

/// Formula used for a daily log's efficiency percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyFormula {
    /// `(span - break) / span * 100`, equivalently `work / (work + break) * 100`.
    WorkOverSpan,
    /// `(span - 2 * break) / (span - break) * 100`, deducting the break twice.
    ///
    /// The HR system's observed formula, kept as the default until the
    /// metric owner picks one.
    #[default]
    DoubleDeduction,
}

/// Points awarded per counted unit and the cap of each term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CounterRule {
    /// Points per unit.
    pub points_per_unit: u32,
    /// Maximum points for the term.
    pub cap: u32,
}

/// Rules for the daily productivity aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProductivityRules {
    /// Scoring of packages processed.
    pub packages: CounterRule,
    /// Scoring of trucks received.
    pub trucks_received: CounterRule,
    /// Scoring of trucks dispatched.
    pub trucks_dispatched: CounterRule,
    /// Whether the break is subtracted from the day's work hours.
    pub deduct_break_from_work_time: bool,
    /// Efficiency formula.
    pub efficiency_formula: EfficiencyFormula,
}

impl Default for ProductivityRules {
    fn default() -> Self {
        Self {
            packages: CounterRule {
                points_per_unit: 2,
                cap: 40,
            },
            trucks_received: CounterRule {
                points_per_unit: 3,
                cap: 30,
            },
            trucks_dispatched: CounterRule {
                points_per_unit: 3,
                cap: 30,
            },
            deduct_break_from_work_time: true,
            efficiency_formula: EfficiencyFormula::default(),
        }
    }
}

/// What to do when a metric has a target but no minimum and the observed
/// value falls below the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingMinimumPolicy {
    /// Score against a minimum of zero.
    #[default]
    ZeroBaseline,
    /// Refuse to score.
    Reject,
}

/// Rules for performance scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Handling of metrics without a minimum.
    pub missing_minimum: MissingMinimumPolicy,
}

/// Contents of `engine.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Admin site values.
    pub site: SiteConfig,
    /// Schedule rules.
    pub scheduling: SchedulingRules,
    /// Daily productivity rules.
    pub productivity: ProductivityRules,
    /// Performance scoring rules.
    pub scoring: ScoringRules,
}

/// Contents of `metrics.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsCatalog {
    /// Metric definitions.
    pub metrics: Vec<PerformanceMetric>,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    settings: EngineSettings,
    metrics: HashMap<String, PerformanceMetric>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(settings: EngineSettings, metrics: Vec<PerformanceMetric>) -> Self {
        let metrics = metrics.into_iter().map(|m| (m.id.clone(), m)).collect();
        Self { settings, metrics }
    }

    /// Returns the admin site values.
    pub fn site(&self) -> &SiteConfig {
        &self.settings.site
    }

    /// Returns the schedule rules.
    pub fn scheduling(&self) -> SchedulingRules {
        self.settings.scheduling
    }

    /// Returns the daily productivity rules.
    pub fn productivity(&self) -> ProductivityRules {
        self.settings.productivity
    }

    /// Returns the performance scoring rules.
    pub fn scoring(&self) -> ScoringRules {
        self.settings.scoring
    }

    /// Returns all metric definitions keyed by id.
    pub fn metrics(&self) -> &HashMap<String, PerformanceMetric> {
        &self.metrics
    }
}
