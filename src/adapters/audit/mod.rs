//! Audit sink adapters.

mod in_memory_audit_log;

pub use in_memory_audit_log::InMemoryAuditLog;
