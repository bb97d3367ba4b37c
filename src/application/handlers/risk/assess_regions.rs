//! AssessRegionsHandler - Query handler for per-region risk assessments.

use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::application::handlers::audit_dispatch::dispatch;
use crate::domain::audit::RiskAssessed;
use crate::domain::foundation::{CommandMetadata, DomainError, RegionName, SerializableDomainEvent};
use crate::domain::pipeline::DecisionPipeline;
use crate::domain::risk::RiskAssessment;
use crate::ports::{AuditSink, DecisionRecordStore, SignalStore};

/// Handler computing fusion and risk for every known region.
pub struct AssessRegionsHandler {
    pipeline: Arc<DecisionPipeline>,
    signals: Arc<dyn SignalStore>,
    records: Arc<dyn DecisionRecordStore>,
    audit: Arc<dyn AuditSink>,
}

impl AssessRegionsHandler {
    pub fn new(
        pipeline: Arc<DecisionPipeline>,
        signals: Arc<dyn SignalStore>,
        records: Arc<dyn DecisionRecordStore>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            pipeline,
            signals,
            records,
            audit,
        }
    }

    /// Assessments for all regions, in region order.
    pub async fn handle(&self, metadata: CommandMetadata) -> Result<Vec<RiskAssessment>, DomainError> {
        let regions = self.signals.list_regions().await?;
        let assessments = join_all(regions.iter().map(|region| self.assess(region, &metadata))).await;
        assessments.into_iter().collect()
    }

    /// Assessment for a single region. Unknown regions assess as empty.
    pub async fn assess(
        &self,
        region: &RegionName,
        metadata: &CommandMetadata,
    ) -> Result<RiskAssessment, DomainError> {
        let records = self.signals.region_signals(region).await?;
        let (fused, assessment) = self.pipeline.assess(region, &records);

        debug!(
            region = %region,
            records = records.len(),
            completeness = fused.data_completeness,
            risk_level = %assessment.risk_level,
            risk_score = assessment.risk_score,
            "Region assessed"
        );

        if let Err(err) = self.records.save_risk_assessment(&assessment).await {
            warn!(region = %region, error = %err, "Failed to save risk snapshot");
        }

        let event = RiskAssessed::from_assessment(&assessment);
        dispatch(self.audit.as_ref(), metadata, event.to_envelope()).await;

        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryAuditLog, InMemoryRecordStore, InMemorySignalStore};
    use crate::application::handlers::audit_dispatch::testing::FailingAuditSink;
    use crate::domain::audit::AuditEventType;
    use crate::domain::risk::RiskLevel;
    use crate::domain::signals::{DataType, SignalRecord, SourceType};

    fn record(region: &str, source: SourceType, dt: DataType, value: f64, conf: f64) -> SignalRecord {
        SignalRecord::numeric(RegionName::new(region).unwrap(), source, dt, value, conf).unwrap()
    }

    fn seeded_store() -> Arc<InMemorySignalStore> {
        Arc::new(InMemorySignalStore::with_records(vec![
            record("Riverside", SourceType::Weather, DataType::Rainfall, 40.0, 0.9),
            record("Coastal Zone A", SourceType::Weather, DataType::Rainfall, 245.0, 0.92),
            record("Coastal Zone A", SourceType::Satellite, DataType::FloodExtent, 78.0, 0.85),
        ]))
    }

    #[tokio::test]
    async fn assesses_every_region_in_order_and_audits_each() {
        let audit = Arc::new(InMemoryAuditLog::new());
        let records = Arc::new(InMemoryRecordStore::new());
        let handler = AssessRegionsHandler::new(
            Arc::new(DecisionPipeline::default()),
            seeded_store(),
            records.clone(),
            audit.clone(),
        );

        let assessments = handler.handle(CommandMetadata::new()).await.unwrap();

        let regions: Vec<&str> = assessments.iter().map(|a| a.region.as_str()).collect();
        assert_eq!(regions, vec!["Coastal Zone A", "Riverside"]);
        assert_eq!(audit.events_of_type(AuditEventType::RiskAssessment).await.len(), 2);
        assert_eq!(
            records.assessments(&RegionName::new("Riverside").unwrap()).await.len(),
            1
        );
    }

    #[tokio::test]
    async fn unknown_region_assesses_as_low() {
        let handler = AssessRegionsHandler::new(
            Arc::new(DecisionPipeline::default()),
            Arc::new(InMemorySignalStore::new()),
            Arc::new(InMemoryRecordStore::new()),
            Arc::new(InMemoryAuditLog::new()),
        );

        let assessment = handler
            .assess(&RegionName::new("Nowhere").unwrap(), &CommandMetadata::new())
            .await
            .unwrap();

        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert_eq!(assessment.confidence, 0.1);
    }

    #[tokio::test]
    async fn audit_outage_does_not_fail_assessment() {
        let handler = AssessRegionsHandler::new(
            Arc::new(DecisionPipeline::default()),
            seeded_store(),
            Arc::new(InMemoryRecordStore::new()),
            Arc::new(FailingAuditSink),
        );

        let assessments = handler.handle(CommandMetadata::new()).await.unwrap();
        assert_eq!(assessments.len(), 2);
    }

    #[tokio::test]
    async fn correlation_id_is_stamped_on_events() {
        let audit = Arc::new(InMemoryAuditLog::new());
        let handler = AssessRegionsHandler::new(
            Arc::new(DecisionPipeline::default()),
            seeded_store(),
            Arc::new(InMemoryRecordStore::new()),
            audit.clone(),
        );

        handler
            .handle(CommandMetadata::new().with_correlation_id("req-42"))
            .await
            .unwrap();

        for event in audit.all_events().await {
            assert_eq!(event.metadata.correlation_id.as_deref(), Some("req-42"));
        }
    }
}
