//! Risk Assessment - hazard × exposure × vulnerability, uncertainty-aware.

mod assessment;
mod engine;

pub use assessment::{RiskAssessment, RiskLevel};
pub use engine::{
    FactorScore, RiskAssessmentEngine, RiskThresholds, CONFIDENCE_FLOOR, FLAG_PENALTY,
};
