//! GovernanceStatusHandler - Query handler for the per-region gate verdicts.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::BuildDecisionPackagesHandler;
use crate::domain::foundation::{CommandMetadata, DomainError, RegionName};
use crate::domain::governance::GovernanceStatus;
use crate::domain::pipeline::DecisionPackage;
use crate::domain::risk::RiskLevel;

/// Compact governance view of one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionGovernanceStatus {
    pub region: RegionName,
    pub status: GovernanceStatus,
    pub requires_approval: bool,
    pub reason: String,
    pub risk_level: RiskLevel,
    pub confidence: f64,
}

impl From<&DecisionPackage> for RegionGovernanceStatus {
    fn from(package: &DecisionPackage) -> Self {
        Self {
            region: package.region.clone(),
            status: package.governance.status,
            requires_approval: package.governance.requires_human_approval,
            reason: package.governance.reason.clone(),
            risk_level: package.risk_assessment.risk_level,
            confidence: package.risk_assessment.confidence,
        }
    }
}

/// Handler summarising governance across regions.
pub struct GovernanceStatusHandler {
    packages: Arc<BuildDecisionPackagesHandler>,
}

impl GovernanceStatusHandler {
    pub fn new(packages: Arc<BuildDecisionPackagesHandler>) -> Self {
        Self { packages }
    }

    pub async fn handle(&self, metadata: CommandMetadata) -> Result<Vec<RegionGovernanceStatus>, DomainError> {
        let packages = self.packages.handle(metadata).await?;
        Ok(packages.iter().map(RegionGovernanceStatus::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryAuditLog, InMemoryRecordStore, InMemorySignalStore};
    use crate::domain::pipeline::DecisionPipeline;
    use crate::domain::signals::{DataType, SignalRecord, SourceType};

    #[tokio::test]
    async fn every_region_requires_approval() {
        let signals = Arc::new(InMemorySignalStore::with_records(vec![
            SignalRecord::numeric(
                RegionName::new("Riverside").unwrap(),
                SourceType::Weather,
                DataType::Rainfall,
                20.0,
                0.9,
            )
            .unwrap(),
            SignalRecord::numeric(
                RegionName::new("Hillside").unwrap(),
                SourceType::Population,
                DataType::PopulationDensity,
                800.0,
                0.9,
            )
            .unwrap(),
        ]));
        let packages = Arc::new(BuildDecisionPackagesHandler::new(
            Arc::new(DecisionPipeline::default()),
            signals,
            Arc::new(InMemoryRecordStore::new()),
            Arc::new(InMemoryAuditLog::new()),
        ));
        let handler = GovernanceStatusHandler::new(packages);

        let statuses = handler.handle(CommandMetadata::new()).await.unwrap();

        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].region.as_str(), "Hillside");
        for status in &statuses {
            assert!(status.requires_approval);
            assert_eq!(status.risk_level, RiskLevel::Low);
            assert_eq!(status.status, GovernanceStatus::RequestMoreData);
        }
    }
}
