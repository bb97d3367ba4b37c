//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FLOOD_SENTINEL` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use flood_sentinel::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod fusion;
mod governance;
mod risk;
mod storage;
mod telemetry;

pub use error::{ConfigError, ValidationError};
pub use fusion::FusionConfig;
pub use governance::GovernanceConfig;
pub use risk::RiskConfig;
pub use storage::StorageConfig;
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

use crate::domain::decision::DecisionOptionEngine;
use crate::domain::fusion::DataFusionEngine;
use crate::domain::governance::GovernanceGate;
use crate::domain::pipeline::DecisionPipeline;
use crate::domain::risk::RiskAssessmentEngine;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Source trust weights
    #[serde(default)]
    pub fusion: FusionConfig,

    /// Risk model thresholds
    #[serde(default)]
    pub risk: RiskConfig,

    /// Governance policy thresholds
    #[serde(default)]
    pub governance: GovernanceConfig,

    /// Snapshot persistence
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FLOOD_SENTINEL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `FLOOD_SENTINEL__RISK__CONFIDENCE_THRESHOLD=0.7` -> `risk.confidence_threshold = 0.7`
    /// - `FLOOD_SENTINEL__STORAGE__SNAPSHOT_DIR=./data` -> `storage.snapshot_dir = ./data`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FLOOD_SENTINEL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first out-of-range value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.fusion.validate()?;
        self.risk.validate()?;
        self.governance.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }

    /// Builds the decision pipeline these settings describe.
    pub fn pipeline(&self) -> DecisionPipeline {
        DecisionPipeline::new(
            DataFusionEngine::new(self.fusion.source_weights()),
            RiskAssessmentEngine::new(self.risk.thresholds()),
            DecisionOptionEngine::new(),
            GovernanceGate::new(self.governance.policy()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "FLOOD_SENTINEL__RISK__CONFIDENCE_THRESHOLD",
        "FLOOD_SENTINEL__GOVERNANCE__ESCALATION_FLAG_COUNT",
        "FLOOD_SENTINEL__FUSION__SATELLITE_WEIGHT",
        "FLOOD_SENTINEL__STORAGE__SNAPSHOT_DIR",
        "FLOOD_SENTINEL__TELEMETRY__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.risk.confidence_threshold, 0.6);
        assert_eq!(config.governance.escalation_flag_count, 2);
        assert!(!config.storage.is_persistent());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FLOOD_SENTINEL__RISK__CONFIDENCE_THRESHOLD", "0.7");
        env::set_var("FLOOD_SENTINEL__GOVERNANCE__ESCALATION_FLAG_COUNT", "3");
        env::set_var("FLOOD_SENTINEL__FUSION__SATELLITE_WEIGHT", "0.5");
        env::set_var("FLOOD_SENTINEL__STORAGE__SNAPSHOT_DIR", "/tmp/flood-snapshots");
        env::set_var("FLOOD_SENTINEL__TELEMETRY__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.risk.confidence_threshold, 0.7);
        assert_eq!(config.governance.escalation_flag_count, 3);
        assert_eq!(config.fusion.satellite_weight, 0.5);
        assert_eq!(
            config.storage.snapshot_dir.as_deref(),
            Some(std::path::Path::new("/tmp/flood-snapshots"))
        );
        assert!(config.telemetry.json);
    }

    #[test]
    fn test_validate_rejects_out_of_range_threshold() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FLOOD_SENTINEL__RISK__CONFIDENCE_THRESHOLD", "1.5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::OutOfUnitRange {
                field: "risk.confidence_threshold",
                ..
            })
        ));
    }

    #[test]
    fn test_pipeline_uses_configured_policy() {
        let mut config = AppConfig::default();
        config.governance.escalation_flag_count = 3;

        let pipeline = config.pipeline();
        assert_eq!(pipeline.governance().policy().escalation_flag_count, 3);
    }
}
