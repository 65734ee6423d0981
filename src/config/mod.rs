//! Configuration loading and management for the workforce metrics engine.
//!
//! Configuration is read once at start-up from a YAML directory and is
//! immutable afterwards: the admin site values, the rule switches and the
//! performance metric catalog.
//!
//! # Example
//!
//! ```no_run
//! use workforce_metrics::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/logistica").unwrap();
//! println!("Loaded site: {}", config.site().title);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CounterRule, EfficiencyFormula, EngineConfig, EngineSettings, MetricsCatalog,
    MissingMinimumPolicy, ProductivityRules, ScoringRules, SchedulingRules, SiteConfig,
};
