//! DecisionRecordStore port - snapshot persistence for assessments,
//! governance verdicts and approvals.

use async_trait::async_trait;

use crate::domain::approval::ApprovalRecord;
use crate::domain::foundation::{DomainError, ErrorCode, RegionName};
use crate::domain::governance::GovernanceResult;
use crate::domain::risk::RiskAssessment;

/// Errors that can occur while persisting decision records.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize record: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for persisting decision snapshots keyed by region and creation time.
#[async_trait]
pub trait DecisionRecordStore: Send + Sync {
    async fn save_risk_assessment(&self, assessment: &RiskAssessment) -> Result<(), StoreError>;

    async fn save_governance(
        &self,
        region: &RegionName,
        result: &GovernanceResult,
    ) -> Result<(), StoreError>;

    async fn save_approval(&self, approval: &ApprovalRecord) -> Result<(), StoreError>;

    /// Approvals of a region, oldest first.
    async fn list_approvals(&self, region: &RegionName) -> Result<Vec<ApprovalRecord>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn DecisionRecordStore) {}

    #[test]
    fn store_errors_map_to_storage_code() {
        let err: DomainError = StoreError::IoError("disk full".into()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.contains("disk full"));
    }
}
