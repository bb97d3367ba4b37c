//! Audit trail vocabulary: one event per pipeline stage plus approvals.

mod events;
mod summary;

pub use events::{
    AuditEventType, DecisionsSynthesized, GovernanceChecked, RiskAssessed, SignalIngested,
};
pub use summary::AuditSummary;
