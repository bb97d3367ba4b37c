//! Risk Assessment Engine - hazard × exposure × vulnerability with reasoning.

use super::{RiskAssessment, RiskLevel};
use crate::domain::foundation::score::{clamp, mean, round_to};
use crate::domain::fusion::FusedRegionState;
use crate::domain::signals::DataType;

/// Confidence never drops below this floor.
pub const CONFIDENCE_FLOOR: f64 = 0.1;

/// Confidence lost per uncertainty flag.
pub const FLAG_PENALTY: f64 = 0.05;

/// Tunable thresholds of the risk model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    /// Below this confidence, CRITICAL and HIGH are moderated to MEDIUM.
    pub confidence_threshold: f64,
    /// Rainfall (mm) above which the excess-rainfall tier applies.
    pub historical_rainfall_mm: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.6,
            historical_rainfall_mm: 180.0,
        }
    }
}

/// One multiplicative factor and the reasons that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    pub score: f64,
    pub reasons: Vec<String>,
}

impl FactorScore {
    fn capped(score: f64, reasons: Vec<String>) -> Self {
        Self {
            score: clamp(score, 0.0, 1.0),
            reasons,
        }
    }
}

/// Computes explainable, uncertainty-aware risk from a fused region state.
#[derive(Debug, Clone, Default)]
pub struct RiskAssessmentEngine {
    thresholds: RiskThresholds,
}

impl RiskAssessmentEngine {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Assesses a fused state. Deterministic for identical input.
    pub fn assess(&self, state: &FusedRegionState) -> RiskAssessment {
        let hazard = self.hazard(state);
        let exposure = Self::exposure(state);
        let vulnerability = Self::vulnerability(state);

        let mut reasoning = Vec::new();
        reasoning.extend(hazard.reasons.iter().cloned());
        reasoning.extend(exposure.reasons.iter().cloned());
        reasoning.extend(vulnerability.reasons.iter().cloned());

        let risk_score = (hazard.score * exposure.score * vulnerability.score).min(1.0);

        let confidence = Self::confidence(state);
        if !state.uncertainty_flags.is_empty() {
            reasoning.push(format!(
                "Confidence reduced: {}",
                state.uncertainty_flags.join(", ")
            ));
        }

        let mut risk_level = RiskLevel::from_score(risk_score);
        if confidence < self.thresholds.confidence_threshold && risk_level.is_severe() {
            reasoning.push(format!(
                "Risk level moderated due to low confidence ({:.2})",
                confidence
            ));
            risk_level = RiskLevel::Medium;
        }

        RiskAssessment {
            region: state.region.clone(),
            risk_level,
            risk_score: round_to(risk_score, 3),
            confidence: round_to(confidence, 2),
            reasoning_graph: reasoning,
            hazard_severity: round_to(hazard.score, 2),
            exposure: round_to(exposure.score, 2),
            vulnerability: round_to(vulnerability.score, 2),
            uncertainty_warnings: state.uncertainty_flags.clone(),
        }
    }

    /// Physical severity from rainfall, flood extent and water level.
    pub fn hazard(&self, state: &FusedRegionState) -> FactorScore {
        let mut score = 0.0;
        let mut reasons = Vec::new();
        let threshold = self.thresholds.historical_rainfall_mm;

        let rainfall = state.number(DataType::Rainfall);
        if rainfall > threshold {
            score += 0.3 + ((rainfall - threshold) / 200.0).min(0.3);
            reasons.push(format!(
                "Rainfall ({} mm) exceeds historical threshold ({} mm)",
                rainfall, threshold
            ));
        } else if rainfall > 100.0 {
            score += 0.3;
            reasons.push(format!("Moderate rainfall detected ({} mm)", rainfall));
        } else if rainfall > 0.0 {
            score += 0.1;
            reasons.push(format!("Light precipitation ({} mm)", rainfall));
        }

        let flood_extent = state.number(DataType::FloodExtent);
        if flood_extent > 60.0 {
            score += 0.4;
            reasons.push(format!(
                "Severe flood extent: {}% of region submerged",
                flood_extent
            ));
        } else if flood_extent > 30.0 {
            score += 0.25;
            reasons.push(format!("Moderate flooding: {}% area affected", flood_extent));
        } else if flood_extent > 0.0 {
            score += 0.1;
        }

        let water_level = state.number(DataType::WaterLevel);
        if water_level > 8.0 {
            score += 0.3;
            reasons.push(format!(
                "Critical water level: {}m (danger threshold exceeded)",
                water_level
            ));
        } else if water_level > 5.0 {
            score += 0.15;
            reasons.push(format!("Elevated water level: {}m", water_level));
        }

        FactorScore::capped(score, reasons)
    }

    /// Population and asset exposure.
    pub fn exposure(state: &FusedRegionState) -> FactorScore {
        let mut reasons = Vec::new();

        let density = state.number(DataType::PopulationDensity);
        let mut score = if density > 5000.0 {
            reasons.push(format!(
                "High population density: {}/km² in hazard zone",
                density.trunc()
            ));
            0.9
        } else if density > 2000.0 {
            reasons.push(format!(
                "Moderate population exposure: {}/km²",
                density.trunc()
            ));
            0.6
        } else if density > 500.0 {
            reasons.push(format!("Low-density settlement: {}/km²", density.trunc()));
            0.3
        } else {
            0.1
        };

        let facilities = state.number(DataType::InfrastructureCount);
        if facilities > 0.0 {
            score += 0.1;
            reasons.push(format!(
                "Critical infrastructure present ({} facilities)",
                facilities.trunc()
            ));
        }

        FactorScore::capped(score, reasons)
    }

    /// Susceptibility to harm, from a 0.5 baseline.
    pub fn vulnerability(state: &FusedRegionState) -> FactorScore {
        let mut score = 0.5;
        let mut reasons = Vec::new();

        let elderly = state.number(DataType::ElderlyPercentage);
        if elderly > 15.0 {
            score += 0.3;
            reasons.push(format!(
                "Vulnerable demographics: {}% elderly population",
                elderly
            ));
        }

        match state.category(DataType::InfrastructureQuality) {
            Some("poor") => {
                score += 0.3;
                reasons.push("Infrastructure quality: POOR, limited resilience".to_string());
            }
            Some("degraded") => score += 0.15,
            _ => {}
        }

        let frequency = state.number(DataType::HistoricalFloodFrequency);
        if frequency > 3.0 {
            score += 0.2;
            reasons.push(format!(
                "Historically flood-prone: {} events in past 5 years",
                frequency
            ));
        }

        FactorScore::capped(score, reasons)
    }

    /// Completeness × mean source confidence, less a penalty per flag, floored.
    ///
    /// An empty source map averages to zero rather than dividing by zero.
    pub fn confidence(state: &FusedRegionState) -> f64 {
        let avg_source = mean(state.source_confidence.values().copied());
        let raw = state.data_completeness * avg_source
            - FLAG_PENALTY * state.uncertainty_flags.len() as f64;
        clamp(raw, CONFIDENCE_FLOOR, 1.0)
    }
}
