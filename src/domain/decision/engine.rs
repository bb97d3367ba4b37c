//! Decision Option Engine - maps a risk assessment onto a playbook.

use super::catalog::{
    OptionTemplate, LOW_RISK_PLAYBOOK, MEDIUM_RISK_PLAYBOOK, SEVERE_RISK_PLAYBOOK,
};
use super::option::DecisionOption;
use crate::domain::risk::{RiskAssessment, RiskLevel};

/// Selects and instantiates response options for an assessment.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionOptionEngine;

impl DecisionOptionEngine {
    pub fn new() -> Self {
        Self
    }

    /// The playbook consulted for a given level.
    pub fn playbook(level: RiskLevel) -> &'static [OptionTemplate] {
        match level {
            RiskLevel::Critical | RiskLevel::High => SEVERE_RISK_PLAYBOOK,
            RiskLevel::Medium => MEDIUM_RISK_PLAYBOOK,
            RiskLevel::Low => LOW_RISK_PLAYBOOK,
        }
    }

    /// Ordered options for the assessment's level, each scaled by its confidence.
    pub fn synthesize(&self, assessment: &RiskAssessment) -> Vec<DecisionOption> {
        Self::playbook(assessment.risk_level)
            .iter()
            .map(|template| template.instantiate(assessment.confidence))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RegionName;

    fn assessment(level: RiskLevel, confidence: f64) -> RiskAssessment {
        RiskAssessment {
            region: RegionName::new("Coastal Zone A").unwrap(),
            risk_level: level,
            risk_score: 0.5,
            confidence,
            reasoning_graph: Vec::new(),
            hazard_severity: 0.5,
            exposure: 0.5,
            vulnerability: 0.5,
            uncertainty_warnings: Vec::new(),
        }
    }

    fn ids(options: &[DecisionOption]) -> Vec<&str> {
        options.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn critical_and_high_share_the_severe_playbook() {
        let engine = DecisionOptionEngine::new();
        let critical = engine.synthesize(&assessment(RiskLevel::Critical, 0.8));
        let high = engine.synthesize(&assessment(RiskLevel::High, 0.8));

        assert_eq!(
            ids(&critical),
            vec![
                "full_evacuation",
                "targeted_evacuation",
                "shelter_in_place",
                "relief_preposition",
                "enhanced_monitoring_alert",
            ]
        );
        assert_eq!(critical, high);
    }

    #[test]
    fn medium_playbook_order() {
        let options = DecisionOptionEngine::new().synthesize(&assessment(RiskLevel::Medium, 0.5));
        assert_eq!(
            ids(&options),
            vec![
                "public_advisory",
                "voluntary_evacuation",
                "relief_staging",
                "infrastructure_inspection",
            ]
        );
    }

    #[test]
    fn low_playbook_order() {
        let options = DecisionOptionEngine::new().synthesize(&assessment(RiskLevel::Low, 0.5));
        assert_eq!(
            ids(&options),
            vec!["routine_monitoring", "information_bulletin", "community_preparedness"]
        );
    }

    #[test]
    fn confidences_follow_the_scaling_table() {
        let options = DecisionOptionEngine::new().synthesize(&assessment(RiskLevel::High, 1.0));
        let confidences: Vec<f64> = options.iter().map(|o| o.confidence).collect();
        assert_eq!(confidences, vec![0.95, 0.88, 0.75, 0.9, 0.82]);

        let options = DecisionOptionEngine::new().synthesize(&assessment(RiskLevel::Medium, 1.0));
        let confidences: Vec<f64> = options.iter().map(|o| o.confidence).collect();
        assert_eq!(confidences, vec![0.92, 0.85, 0.88, 0.9]);

        let options = DecisionOptionEngine::new().synthesize(&assessment(RiskLevel::Low, 1.0));
        let confidences: Vec<f64> = options.iter().map(|o| o.confidence).collect();
        assert_eq!(confidences, vec![0.95, 0.93, 0.88]);
    }

    #[test]
    fn option_confidence_is_rounded() {
        let options = DecisionOptionEngine::new().synthesize(&assessment(RiskLevel::Low, 0.37));
        // 0.37 * 0.93 = 0.3441
        assert_eq!(options[1].confidence, 0.34);
    }

    #[test]
    fn option_confidence_rounds_the_stored_product() {
        let options = DecisionOptionEngine::new().synthesize(&assessment(RiskLevel::Critical, 0.5));
        // 0.5 * 0.95 is stored just below 0.475
        assert_eq!(options[0].id, "full_evacuation");
        assert_eq!(options[0].confidence, 0.47);
    }
}
