//! ApproveOptionHandler - Command handler recording a human approval.
//!
//! This is the only path by which an option becomes "approved". The option
//! set is recomputed from the current signals, so an approval always refers
//! to an option that is valid right now.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::audit_dispatch::dispatch;
use crate::domain::approval::{ApprovalError, ApprovalRecord};
use crate::domain::foundation::{CommandMetadata, RegionName, SerializableDomainEvent};
use crate::domain::pipeline::DecisionPipeline;
use crate::ports::{AuditSink, DecisionRecordStore, SignalStore};

/// Command to approve one option for a region.
#[derive(Debug, Clone)]
pub struct ApproveOptionCommand {
    pub region: String,
    pub option_id: String,
    pub approved_by: String,
}

/// Handler for human approvals.
pub struct ApproveOptionHandler {
    pipeline: Arc<DecisionPipeline>,
    signals: Arc<dyn SignalStore>,
    records: Arc<dyn DecisionRecordStore>,
    audit: Arc<dyn AuditSink>,
}

impl ApproveOptionHandler {
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

    pub async fn handle(
        &self,
        cmd: ApproveOptionCommand,
        metadata: CommandMetadata,
    ) -> Result<ApprovalRecord, ApprovalError> {
        // 1. Region must be known
        let region = RegionName::new(cmd.region.as_str())
            .map_err(|_| ApprovalError::RegionNotFound(cmd.region.clone()))?;
        let known = self.signals.list_regions().await?;
        if !known.contains(&region) {
            return Err(ApprovalError::RegionNotFound(cmd.region));
        }

        // 2. Option must be in the freshly computed set
        let records = self.signals.region_signals(&region).await?;
        let (_, options) = self.pipeline.options_for(&region, &records);
        let option = options
            .iter()
            .find(|o| o.id == cmd.option_id)
            .ok_or_else(|| ApprovalError::InvalidOption {
                region: region.to_string(),
                option_id: cmd.option_id.clone(),
            })?;

        // 3. Persist
        let approval = ApprovalRecord::new(
            region.clone(),
            option.id.clone(),
            option.title.clone(),
            cmd.approved_by,
        )?;
        self.records
            .save_approval(&approval)
            .await
            .map_err(|e| ApprovalError::Infrastructure(e.into()))?;

        info!(
            region = %region,
            option_id = %approval.option_id,
            approved_by = %approval.approved_by,
            "Option approved"
        );

        // 4. Audit
        let metadata = metadata.with_operator(approval.approved_by.clone());
        dispatch(self.audit.as_ref(), &metadata, approval.to_envelope()).await;

        Ok(approval)
    }
}
