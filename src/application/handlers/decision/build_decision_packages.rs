//! BuildDecisionPackagesHandler - Query handler running the full pipeline
//! for every region.

use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::application::handlers::audit_dispatch::dispatch;
use crate::domain::audit::{DecisionsSynthesized, GovernanceChecked};
use crate::domain::foundation::{CommandMetadata, DomainError, RegionName, SerializableDomainEvent};
use crate::domain::pipeline::{DecisionPackage, DecisionPipeline};
use crate::ports::{AuditSink, DecisionRecordStore, SignalStore};

/// Handler producing decision packages.
pub struct BuildDecisionPackagesHandler {
    pipeline: Arc<DecisionPipeline>,
    signals: Arc<dyn SignalStore>,
    records: Arc<dyn DecisionRecordStore>,
    audit: Arc<dyn AuditSink>,
}

impl BuildDecisionPackagesHandler {
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

    /// Packages for all regions, in region order. Regions are evaluated
    /// concurrently and independently.
    pub async fn handle(&self, metadata: CommandMetadata) -> Result<Vec<DecisionPackage>, DomainError> {
        let regions = self.signals.list_regions().await?;
        let packages = join_all(regions.iter().map(|region| self.build(region, &metadata))).await;
        packages.into_iter().collect()
    }

    /// Package for one region.
    pub async fn build(
        &self,
        region: &RegionName,
        metadata: &CommandMetadata,
    ) -> Result<DecisionPackage, DomainError> {
        let records = self.signals.region_signals(region).await?;
        let package = self.pipeline.run(region, &records).package;

        debug!(
            region = %region,
            risk_level = %package.risk_assessment.risk_level,
            options = package.options.len(),
            governance = %package.governance.status,
            "Decision package built"
        );

        let synthesized = DecisionsSynthesized::new(
            region,
            package.risk_assessment.risk_level,
            &package.options,
        );
        dispatch(self.audit.as_ref(), metadata, synthesized.to_envelope()).await;

        let checked = GovernanceChecked::new(region, &package.governance);
        dispatch(self.audit.as_ref(), metadata, checked.to_envelope()).await;

        if let Err(err) = self.records.save_governance(region, &package.governance).await {
            warn!(region = %region, error = %err, "Failed to save governance snapshot");
        }

        Ok(package)
    }
}
