use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::AuditEventType;
use crate::domain::foundation::EventEnvelope;

/// Aggregate view over an audit trail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub total_events: usize,
    pub events_by_type: BTreeMap<String, usize>,
    pub human_approvals: usize,
    /// Always zero: nothing is executed without a human.
    pub autonomous_actions: usize,
}

impl AuditSummary {
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a EventEnvelope>,
    {
        let mut summary = AuditSummary::default();
        for envelope in events {
            summary.total_events += 1;
            *summary
                .events_by_type
                .entry(envelope.event_type.clone())
                .or_default() += 1;
            if envelope.event_type == AuditEventType::HumanApproval.as_str() {
                summary.human_approvals += 1;
            }
        }
        summary
    }
}
