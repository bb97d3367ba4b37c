//! In-memory audit log.
//!
//! Append-only trail of every envelope handed to the `AuditSink` port,
//! with the query helpers used for audit review and test assertions.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::audit::{AuditEventType, AuditSummary};
use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::AuditSink;

/// In-memory audit trail.
///
/// # Example
///
/// ```ignore
/// let log = Arc::new(InMemoryAuditLog::new());
/// log.record(envelope).await?;
///
/// assert_eq!(log.event_count().await, 1);
/// assert!(log.has_event(AuditEventType::RiskAssessment).await);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditLog {
    events: Arc<RwLock<Vec<EventEnvelope>>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent `limit` events, newest first.
    pub async fn trail(&self, limit: usize) -> Vec<EventEnvelope> {
        self.events
            .read()
            .await
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect()
    }

    /// Every event in recording order.
    pub async fn all_events(&self) -> Vec<EventEnvelope> {
        self.events.read().await.clone()
    }

    pub async fn events_of_type(&self, event_type: AuditEventType) -> Vec<EventEnvelope> {
        self.events
            .read()
            .await
            .iter()
            .filter(|e| e.event_type == event_type.as_str())
            .cloned()
            .collect()
    }

    pub async fn events_for_region(&self, region: &str) -> Vec<EventEnvelope> {
        self.events
            .read()
            .await
            .iter()
            .filter(|e| e.region() == Some(region))
            .cloned()
            .collect()
    }

    pub async fn has_event(&self, event_type: AuditEventType) -> bool {
        self.events
            .read()
            .await
            .iter()
            .any(|e| e.event_type == event_type.as_str())
    }

    pub async fn event_count(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn summary(&self) -> AuditSummary {
        AuditSummary::from_events(self.events.read().await.iter())
    }

    pub async fn clear(&self) {
        self.events.write().await.clear();
    }
}

#[async_trait]
impl AuditSink for InMemoryAuditLog {
    async fn record(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.events.write().await.push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(event_type: AuditEventType, region: &str) -> EventEnvelope {
        EventEnvelope::new(event_type.as_str(), region, "Region", json!({}))
    }

    #[tokio::test]
    async fn trail_is_newest_first_and_limited() {
        let log = InMemoryAuditLog::new();
        log.record(envelope(AuditEventType::DataIngestion, "A")).await.unwrap();
        log.record(envelope(AuditEventType::RiskAssessment, "A")).await.unwrap();
        log.record(envelope(AuditEventType::GovernanceCheck, "B")).await.unwrap();

        let trail = log.trail(2).await;
        assert_eq!(trail.len(), 2);
        assert_eq!(trail[0].event_type, "GOVERNANCE_CHECK");
        assert_eq!(trail[1].event_type, "RISK_ASSESSMENT");
    }

    #[tokio::test]
    async fn filters_by_type_and_region() {
        let log = InMemoryAuditLog::new();
        log.record(envelope(AuditEventType::DataIngestion, "A")).await.unwrap();
        log.record(envelope(AuditEventType::DataIngestion, "B")).await.unwrap();
        log.record(envelope(AuditEventType::HumanApproval, "A")).await.unwrap();

        assert_eq!(log.events_of_type(AuditEventType::DataIngestion).await.len(), 2);
        assert_eq!(log.events_for_region("A").await.len(), 2);
        assert!(log.has_event(AuditEventType::HumanApproval).await);
        assert!(!log.has_event(AuditEventType::DecisionSynthesis).await);
    }

    #[tokio::test]
    async fn summary_counts_approvals_and_no_autonomous_actions() {
        let log = InMemoryAuditLog::new();
        log.record(envelope(AuditEventType::RiskAssessment, "A")).await.unwrap();
        log.record(envelope(AuditEventType::HumanApproval, "A")).await.unwrap();

        let summary = log.summary().await;
        assert_eq!(summary.total_events, 2);
        assert_eq!(summary.human_approvals, 1);
        assert_eq!(summary.autonomous_actions, 0);

        log.clear().await;
        assert_eq!(log.event_count().await, 0);
    }
}
