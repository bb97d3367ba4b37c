//! Fire-and-forget delivery of audit events.

use tracing::warn;

use crate::domain::foundation::{CommandMetadata, EventEnvelope};
use crate::ports::AuditSink;

/// Records `envelope` stamped with the request context. A failing sink is
/// logged and otherwise ignored.
pub(crate) async fn dispatch(sink: &dyn AuditSink, metadata: &CommandMetadata, envelope: EventEnvelope) {
    let event_type = envelope.event_type.clone();
    let region = envelope.aggregate_id.clone();

    if let Err(err) = sink.record(metadata.stamp(envelope)).await {
        warn!(
            region = %region,
            event_type = %event_type,
            error = %err,
            "Audit event delivery failed"
        );
    }
}
