//! Risk assessment value types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::RegionName;

/// Discrete risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Classifies a composite score.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.75 {
            RiskLevel::Critical
        } else if score >= 0.55 {
            RiskLevel::High
        } else if score >= 0.35 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// CRITICAL and HIGH share one response playbook and one governance rule.
    pub fn is_severe(&self) -> bool {
        matches!(self, RiskLevel::Critical | RiskLevel::High)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explainable risk verdict for one region.
///
/// `risk_score` is the product of the three factors capped at 1. A
/// low-confidence downgrade rewrites `risk_level` only, never the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub region: RegionName,
    pub risk_level: RiskLevel,
    pub risk_score: f64,
    pub confidence: f64,
    pub reasoning_graph: Vec<String>,
    pub hazard_severity: f64,
    pub exposure: f64,
    pub vulnerability: f64,
    /// Uncertainty flags carried over from fusion.
    pub uncertainty_warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundaries_are_inclusive() {
        assert_eq!(RiskLevel::from_score(0.75), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(0.7499), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(0.55), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(0.35), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(0.3499), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
    }

    #[test]
    fn serializes_in_upper_case() {
        let json = serde_json::to_string(&RiskLevel::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
    }
}
