//! Governance gate configuration

use serde::Deserialize;

use super::error::{unit_interval, ValidationError};
use crate::domain::governance::GovernancePolicy;

/// Thresholds of the governance policy rules
#[derive(Debug, Clone, Deserialize)]
pub struct GovernanceConfig {
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,

    #[serde(default = "default_min_data_completeness")]
    pub min_data_completeness: f64,

    /// Uncertainty flags needed to escalate
    #[serde(default = "default_escalation_flag_count")]
    pub escalation_flag_count: usize,
}

impl GovernanceConfig {
    pub fn policy(&self) -> GovernancePolicy {
        GovernancePolicy {
            min_confidence: self.min_confidence,
            min_data_completeness: self.min_data_completeness,
            escalation_flag_count: self.escalation_flag_count,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        unit_interval("governance.min_confidence", self.min_confidence)?;
        unit_interval("governance.min_data_completeness", self.min_data_completeness)?;
        if self.escalation_flag_count == 0 {
            return Err(ValidationError::InvalidFlagCount);
        }
        Ok(())
    }
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            min_confidence: default_min_confidence(),
            min_data_completeness: default_min_data_completeness(),
            escalation_flag_count: default_escalation_flag_count(),
        }
    }
}

fn default_min_confidence() -> f64 {
    0.65
}

fn default_min_data_completeness() -> f64 {
    0.60
}

fn default_escalation_flag_count() -> usize {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_policy() {
        assert_eq!(GovernanceConfig::default().policy(), GovernancePolicy::default());
    }

    #[test]
    fn zero_flag_count_is_rejected() {
        let config = GovernanceConfig {
            escalation_flag_count: 0,
            ..GovernanceConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidFlagCount));
    }
}
