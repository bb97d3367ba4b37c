//! AuditSink port - append-only destination for audit events.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for recording audit events.
///
/// Callers treat delivery as fire-and-forget: an `Err` is logged and the
/// operation that produced the event still succeeds.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn record(&self, event: EventEnvelope) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn AuditSink) {}
}
