//! In-Memory Decision Record Store
//!
//! Keeps snapshots in memory. Used by the CLI when no snapshot
//! directory is configured, and by tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::approval::ApprovalRecord;
use crate::domain::foundation::RegionName;
use crate::domain::governance::GovernanceResult;
use crate::domain::risk::RiskAssessment;
use crate::ports::{DecisionRecordStore, StoreError};

/// In-memory storage for decision snapshots
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    assessments: Arc<RwLock<HashMap<RegionName, Vec<RiskAssessment>>>>,
    governance: Arc<RwLock<HashMap<RegionName, Vec<GovernanceResult>>>>,
    approvals: Arc<RwLock<HashMap<RegionName, Vec<ApprovalRecord>>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Risk snapshots of a region, oldest first
    pub async fn assessments(&self, region: &RegionName) -> Vec<RiskAssessment> {
        self.assessments
            .read()
            .await
            .get(region)
            .cloned()
            .unwrap_or_default()
    }

    /// Governance snapshots of a region, oldest first
    pub async fn governance_results(&self, region: &RegionName) -> Vec<GovernanceResult> {
        self.governance
            .read()
            .await
            .get(region)
            .cloned()
            .unwrap_or_default()
    }

    /// Total number of stored approvals across regions
    pub async fn approval_count(&self) -> usize {
        self.approvals.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl DecisionRecordStore for InMemoryRecordStore {
    async fn save_risk_assessment(&self, assessment: &RiskAssessment) -> Result<(), StoreError> {
        self.assessments
            .write()
            .await
            .entry(assessment.region.clone())
            .or_default()
            .push(assessment.clone());
        Ok(())
    }

    async fn save_governance(
        &self,
        region: &RegionName,
        result: &GovernanceResult,
    ) -> Result<(), StoreError> {
        self.governance
            .write()
            .await
            .entry(region.clone())
            .or_default()
            .push(result.clone());
        Ok(())
    }

    async fn save_approval(&self, approval: &ApprovalRecord) -> Result<(), StoreError> {
        self.approvals
            .write()
            .await
            .entry(approval.region.clone())
            .or_default()
            .push(approval.clone());
        Ok(())
    }

    async fn list_approvals(&self, region: &RegionName) -> Result<Vec<ApprovalRecord>, StoreError> {
        Ok(self
            .approvals
            .read()
            .await
            .get(region)
            .cloned()
            .unwrap_or_default())
    }
}
