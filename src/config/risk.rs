//! Risk model configuration

use serde::Deserialize;

use super::error::{unit_interval, ValidationError};
use crate::domain::risk::RiskThresholds;

/// Thresholds of the risk assessment engine
#[derive(Debug, Clone, Deserialize)]
pub struct RiskConfig {
    /// Confidence below which CRITICAL/HIGH are moderated to MEDIUM
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,

    /// Rainfall in mm above which the excess-rainfall tier applies
    #[serde(default = "default_historical_rainfall_mm")]
    pub historical_rainfall_mm: f64,
}

impl RiskConfig {
    pub fn thresholds(&self) -> RiskThresholds {
        RiskThresholds {
            confidence_threshold: self.confidence_threshold,
            historical_rainfall_mm: self.historical_rainfall_mm,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        unit_interval("risk.confidence_threshold", self.confidence_threshold)?;
        if self.historical_rainfall_mm.is_nan() || self.historical_rainfall_mm <= 0.0 {
            return Err(ValidationError::InvalidRainfallThreshold(
                self.historical_rainfall_mm,
            ));
        }
        Ok(())
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            historical_rainfall_mm: default_historical_rainfall_mm(),
        }
    }
}

fn default_confidence_threshold() -> f64 {
    0.6
}

fn default_historical_rainfall_mm() -> f64 {
    180.0
}
