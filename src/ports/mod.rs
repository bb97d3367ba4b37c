//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SignalStore` - Raw signal records per region
//! - `AuditSink` - Append-only audit trail
//! - `DecisionRecordStore` - Assessment, governance and approval snapshots

mod audit_sink;
mod decision_record_store;
mod signal_store;

pub use audit_sink::AuditSink;
pub use decision_record_store::{DecisionRecordStore, StoreError};
pub use signal_store::SignalStore;
