//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::PerformanceMetric;

use super::types::{EngineConfig, EngineSettings, MetricsCatalog, SiteConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/logistica/
/// ├── engine.yaml   # Site values and rule switches
/// └── metrics.yaml  # Performance metric definitions
/// ```
///
/// # Example
///
/// ```no_run
/// use workforce_metrics::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/logistica").unwrap();
/// println!("Site: {}", loader.site().header);
/// let metric = loader.get_metric("packages_per_hour").unwrap();
/// println!("Metric: {}", metric.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or contains invalid YAML,
    /// or if a metric weight falls outside `[0, 1]`.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("engine.yaml"))?;
        let metrics_path = path.join("metrics.yaml");
        let catalog = Self::load_yaml::<MetricsCatalog>(&metrics_path)?;

        if let Some(metric) = catalog.metrics.iter().find(|m| !m.has_valid_weight()) {
            return Err(EngineError::ConfigParseError {
                path: metrics_path.display().to_string(),
                message: format!(
                    "metric '{}' has weight {} outside [0, 1]",
                    metric.id, metric.weight
                ),
            });
        }

        debug!(
            path = %path.display(),
            metrics = catalog.metrics.len(),
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(settings, catalog.metrics),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the admin site values.
    pub fn site(&self) -> &SiteConfig {
        self.config.site()
    }

    /// Gets a metric definition by its id.
    ///
    /// Returns `MetricNotFound` when the catalog has no such metric.
    pub fn get_metric(&self, id: &str) -> EngineResult<&PerformanceMetric> {
        self.config
            .metrics()
            .get(id)
            .ok_or_else(|| EngineError::MetricNotFound { id: id.to_string() })
    }
}
