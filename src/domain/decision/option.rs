//! Decision option value types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-step rating used for irreversibility and ethical sensitivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Low => "LOW",
            ImpactLevel::Medium => "MEDIUM",
            ImpactLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate response with its trade-off analysis.
///
/// Options are recommendations only; nothing here is ever executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub id: String,
    pub title: String,
    pub description: String,
    pub benefit: String,
    pub tradeoffs: Vec<String>,
    pub irreversibility: ImpactLevel,
    pub ethical_sensitivity: ImpactLevel,
    pub confidence: f64,
}

impl DecisionOption {
    pub fn is_highly_irreversible(&self) -> bool {
        self.irreversibility == ImpactLevel::High
    }

    pub fn is_ethically_sensitive(&self) -> bool {
        self.ethical_sensitivity == ImpactLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_level_uses_upper_case_tags() {
        assert_eq!(serde_json::to_string(&ImpactLevel::Medium).unwrap(), "\"MEDIUM\"");
        let parsed: ImpactLevel = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(parsed, ImpactLevel::High);
    }
}
