//! IngestSignalHandler - Command handler for accepting raw signal records.

use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::application::handlers::audit_dispatch::dispatch;
use crate::domain::audit::SignalIngested;
use crate::domain::foundation::{CommandMetadata, RegionName, SerializableDomainEvent, Timestamp};
use crate::domain::signals::{DataType, IngestionError, SignalRecord, SignalValue, SourceType};
use crate::ports::{AuditSink, SignalStore};

fn default_confidence() -> f64 {
    1.0
}

/// Command to ingest one observation.
///
/// Deserializes from the same JSON shape the signal feeds produce.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestSignalCommand {
    pub region: String,
    pub source_type: SourceType,
    pub data_type: DataType,
    pub value: SignalValue,
    #[serde(default = "default_confidence")]
    pub source_confidence: f64,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}

/// Result of a successful ingestion.
#[derive(Debug, Clone)]
pub struct IngestSignalResult {
    pub record: SignalRecord,
    pub event: SignalIngested,
}

/// Handler for ingesting signal records.
pub struct IngestSignalHandler {
    store: Arc<dyn SignalStore>,
    audit: Arc<dyn AuditSink>,
}

impl IngestSignalHandler {
    pub fn new(store: Arc<dyn SignalStore>, audit: Arc<dyn AuditSink>) -> Self {
        Self { store, audit }
    }

    pub async fn handle(
        &self,
        cmd: IngestSignalCommand,
        metadata: CommandMetadata,
    ) -> Result<IngestSignalResult, IngestionError> {
        // 1. Validate against the source's allow-list
        if !cmd.source_type.accepts(cmd.data_type) {
            return Err(IngestionError::UnsupportedDataType {
                source_type: cmd.source_type,
                data_type: cmd.data_type,
            });
        }

        // 2. Build the immutable record
        let region = RegionName::new(cmd.region)?;
        let mut record = SignalRecord::new(
            region,
            cmd.source_type,
            cmd.data_type,
            cmd.value,
            cmd.source_confidence,
        )?;
        if let Some(timestamp) = cmd.timestamp {
            record = record.at(timestamp);
        }

        // 3. Persist
        self.store.append(record.clone()).await?;

        info!(
            region = %record.region,
            source_type = %record.source_type,
            data_type = %record.data_type,
            "Signal ingested"
        );

        // 4. Audit
        let event = SignalIngested::from_record(&record);
        dispatch(self.audit.as_ref(), &metadata, event.to_envelope()).await;

        Ok(IngestSignalResult { record, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryAuditLog, InMemorySignalStore};
    use crate::application::handlers::audit_dispatch::testing::FailingAuditSink;
    use crate::domain::audit::AuditEventType;
    use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
    use async_trait::async_trait;

    struct FailingSignalStore;

    #[async_trait]
    impl SignalStore for FailingSignalStore {
        async fn region_signals(&self, _region: &RegionName) -> Result<Vec<SignalRecord>, DomainError> {
            Ok(vec![])
        }

        async fn list_regions(&self) -> Result<Vec<RegionName>, DomainError> {
            Ok(vec![])
        }

        async fn append(&self, _record: SignalRecord) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "Simulated append failure"))
        }
    }

    fn rainfall(region: &str, confidence: f64) -> IngestSignalCommand {
        IngestSignalCommand {
            region: region.to_string(),
            source_type: SourceType::Weather,
            data_type: DataType::Rainfall,
            value: SignalValue::Numeric(245.0),
            source_confidence: confidence,
            timestamp: None,
        }
    }

    fn handler() -> (IngestSignalHandler, Arc<InMemorySignalStore>, Arc<InMemoryAuditLog>) {
        let store = Arc::new(InMemorySignalStore::new());
        let audit = Arc::new(InMemoryAuditLog::new());
        (
            IngestSignalHandler::new(store.clone(), audit.clone()),
            store,
            audit,
        )
    }

    #[tokio::test]
    async fn stores_record_and_emits_ingestion_event() {
        let (handler, store, audit) = handler();

        let result = handler
            .handle(rainfall("Coastal Zone A", 0.92), CommandMetadata::new())
            .await
            .unwrap();

        assert_eq!(result.record.region.as_str(), "Coastal Zone A");
        assert_eq!(store.record_count().await, 1);
        assert_eq!(audit.events_of_type(AuditEventType::DataIngestion).await.len(), 1);
    }

    #[tokio::test]
    async fn rejects_data_type_outside_source_allow_list() {
        let (handler, store, audit) = handler();
        let mut cmd = rainfall("Coastal Zone A", 0.9);
        cmd.source_type = SourceType::Satellite;

        let result = handler.handle(cmd, CommandMetadata::new()).await;

        assert!(matches!(result, Err(IngestionError::UnsupportedDataType { .. })));
        assert_eq!(store.record_count().await, 0);
        assert_eq!(audit.event_count().await, 0);
    }

    #[tokio::test]
    async fn field_reports_may_carry_any_data_type() {
        let (handler, _, _) = handler();
        let mut cmd = rainfall("Riverside", 0.5);
        cmd.source_type = SourceType::FieldReport;

        assert!(handler.handle(cmd, CommandMetadata::new()).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_confidence_out_of_range() {
        let (handler, _, _) = handler();

        let result = handler
            .handle(rainfall("Coastal Zone A", 1.2), CommandMetadata::new())
            .await;

        assert!(matches!(
            result,
            Err(IngestionError::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[tokio::test]
    async fn rejects_blank_region() {
        let (handler, _, _) = handler();

        let result = handler.handle(rainfall("   ", 0.9), CommandMetadata::new()).await;

        assert!(matches!(
            result,
            Err(IngestionError::Validation(ValidationError::EmptyField { .. }))
        ));
    }

    #[tokio::test]
    async fn confidence_defaults_to_one_when_omitted() {
        let cmd: IngestSignalCommand = serde_json::from_str(
            r#"{"region":"Riverside","source_type":"weather","data_type":"rainfall","value":12.5}"#,
        )
        .unwrap();
        assert_eq!(cmd.source_confidence, 1.0);
        assert!(cmd.timestamp.is_none());
    }

    #[tokio::test]
    async fn store_failure_is_propagated() {
        let handler = IngestSignalHandler::new(
            Arc::new(FailingSignalStore),
            Arc::new(InMemoryAuditLog::new()),
        );

        let result = handler
            .handle(rainfall("Coastal Zone A", 0.9), CommandMetadata::new())
            .await;

        assert!(matches!(result, Err(IngestionError::Infrastructure(_))));
    }

    #[tokio::test]
    async fn audit_failure_does_not_fail_ingestion() {
        let store = Arc::new(InMemorySignalStore::new());
        let handler = IngestSignalHandler::new(store.clone(), Arc::new(FailingAuditSink));

        let result = handler
            .handle(rainfall("Coastal Zone A", 0.9), CommandMetadata::new())
            .await;

        assert!(result.is_ok());
        assert_eq!(store.record_count().await, 1);
    }
}
