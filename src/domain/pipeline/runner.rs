//! Stateless orchestration of the four engines.

use crate::domain::decision::{DecisionOption, DecisionOptionEngine};
use crate::domain::foundation::RegionName;
use crate::domain::fusion::{DataFusionEngine, FusedRegionState};
use crate::domain::governance::GovernanceGate;
use crate::domain::risk::{RiskAssessment, RiskAssessmentEngine};
use crate::domain::signals::SignalRecord;

use super::DecisionPackage;

/// Intermediate and final products of one pipeline pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub fused: FusedRegionState,
    pub package: DecisionPackage,
}

/// Holds the four immutable engines. Built once and shared behind an `Arc`;
/// every call is independent and leaves no trace in the pipeline.
#[derive(Debug, Clone, Default)]
pub struct DecisionPipeline {
    fusion: DataFusionEngine,
    risk: RiskAssessmentEngine,
    options: DecisionOptionEngine,
    governance: GovernanceGate,
}

impl DecisionPipeline {
    pub fn new(
        fusion: DataFusionEngine,
        risk: RiskAssessmentEngine,
        options: DecisionOptionEngine,
        governance: GovernanceGate,
    ) -> Self {
        Self {
            fusion,
            risk,
            options,
            governance,
        }
    }

    pub fn fusion(&self) -> &DataFusionEngine {
        &self.fusion
    }

    pub fn governance(&self) -> &GovernanceGate {
        &self.governance
    }

    /// Fusion and risk only.
    pub fn assess(
        &self,
        region: &RegionName,
        records: &[SignalRecord],
    ) -> (FusedRegionState, RiskAssessment) {
        let fused = self.fusion.fuse(region, records);
        let assessment = self.risk.assess(&fused);
        (fused, assessment)
    }

    /// Fusion, risk and option synthesis, without governance.
    pub fn options_for(
        &self,
        region: &RegionName,
        records: &[SignalRecord],
    ) -> (RiskAssessment, Vec<DecisionOption>) {
        let (_, assessment) = self.assess(region, records);
        let options = self.options.synthesize(&assessment);
        (assessment, options)
    }

    /// Full pass producing a decision package.
    pub fn run(&self, region: &RegionName, records: &[SignalRecord]) -> PipelineOutput {
        let (fused, assessment) = self.assess(region, records);
        let options = self.options.synthesize(&assessment);
        let governance = self.governance.evaluate(
            &assessment,
            &options,
            fused.data_completeness,
            &fused.uncertainty_flags,
        );

        PipelineOutput {
            package: DecisionPackage {
                region: region.clone(),
                risk_assessment: assessment,
                options,
                governance,
            },
            fused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::governance::GovernanceStatus;
    use crate::domain::risk::RiskLevel;

    #[test]
    fn empty_region_requests_more_data() {
        let region = RegionName::new("Empty Region").unwrap();
        let output = DecisionPipeline::default().run(&region, &[]);
        let package = output.package;

        assert_eq!(package.risk_assessment.risk_level, RiskLevel::Low);
        assert_eq!(package.risk_assessment.confidence, 0.1);
        assert_eq!(package.risk_assessment.hazard_severity, 0.0);
        assert_eq!(package.risk_assessment.exposure, 0.1);
        assert_eq!(package.risk_assessment.vulnerability, 0.5);
        assert_eq!(package.options.len(), 3);
        assert_eq!(package.governance.status, GovernanceStatus::RequestMoreData);
        assert!(package.governance.requires_human_approval);
        assert_eq!(output.fused.uncertainty_flags.len(), 3);
    }

    #[test]
    fn package_option_lookup() {
        let region = RegionName::new("Empty Region").unwrap();
        let package = DecisionPipeline::default().run(&region, &[]).package;

        assert!(package.option("routine_monitoring").is_some());
        assert!(package.option("full_evacuation").is_none());
    }
}
