//! Audit event plumbing.
//!
//! Each pipeline stage describes what it computed as a domain event. Events
//! reach the audit sink wrapped in an [`EventEnvelope`], which carries the
//! routing fields and who or what triggered the work.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::Timestamp;

/// Identity and routing data every audit event exposes.
///
/// Implement with the `domain_event!` macro.
pub trait DomainEvent: Send + Sync {
    /// Audit category, e.g. `"RISK_ASSESSMENT"`.
    fn event_type(&self) -> &'static str;

    fn schema_version(&self) -> u32;

    /// Region (or other subject) the event is about.
    fn aggregate_id(&self) -> String;

    fn aggregate_type(&self) -> &'static str;

    fn occurred_at(&self) -> Timestamp;

    fn event_id(&self) -> EventId;
}

/// Provides `to_envelope()` for every serializable domain event.
pub trait SerializableDomainEvent: DomainEvent + Serialize {
    fn to_envelope(&self) -> EventEnvelope {
        EventEnvelope::from_event(self)
    }
}

impl<T: DomainEvent + Serialize> SerializableDomainEvent for T {}

/// Implements [`DomainEvent`] by naming the fields that hold each value.
///
/// ```ignore
/// domain_event!(
///     RiskAssessed,
///     event_type = "RISK_ASSESSMENT",
///     schema_version = 1,
///     aggregate_id = region,
///     aggregate_type = "Region",
///     occurred_at = assessed_at,
///     event_id = event_id
/// );
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $event_name:ident,
        event_type = $event_type:expr,
        schema_version = $schema_version:expr,
        aggregate_id = $agg_id_field:ident,
        aggregate_type = $agg_type:expr,
        occurred_at = $occurred_field:ident,
        event_id = $event_id_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event_name {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn schema_version(&self) -> u32 {
                $schema_version
            }

            fn aggregate_id(&self) -> String {
                self.$agg_id_field.to_string()
            }

            fn aggregate_type(&self) -> &'static str {
                $agg_type
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$occurred_field
            }

            fn event_id(&self) -> $crate::domain::foundation::EventId {
                self.$event_id_field.clone()
            }
        }
    };
}

pub use crate::domain_event;

/// Unique id of one audit event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Context attached to an event on its way to the audit sink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Shared by all events of one request or CLI run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,

    /// Human who triggered the action; always set for approvals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    /// Entry point the request came through (e.g. `"cli"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// One entry of the audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event_id: EventId,
    pub event_type: String,
    pub schema_version: u32,
    pub aggregate_id: String,
    pub aggregate_type: String,
    pub occurred_at: Timestamp,
    /// The serialized event.
    pub payload: JsonValue,
    pub metadata: EventMetadata,
}

impl EventEnvelope {
    pub fn new(
        event_type: impl Into<String>,
        aggregate_id: impl Into<String>,
        aggregate_type: impl Into<String>,
        payload: JsonValue,
    ) -> Self {
        Self {
            event_id: EventId::new(),
            event_type: event_type.into(),
            schema_version: 1,
            aggregate_id: aggregate_id.into(),
            aggregate_type: aggregate_type.into(),
            occurred_at: Timestamp::now(),
            payload,
            metadata: EventMetadata::default(),
        }
    }

    /// Wraps a domain event, serializing it into the payload.
    pub fn from_event<T>(event: &T) -> Self
    where
        T: DomainEvent + Serialize + ?Sized,
    {
        Self {
            event_id: event.event_id(),
            event_type: event.event_type().to_string(),
            schema_version: event.schema_version(),
            aggregate_id: event.aggregate_id(),
            aggregate_type: event.aggregate_type().to_string(),
            occurred_at: event.occurred_at(),
            payload: serde_json::to_value(event)
                .expect("Event serialization should never fail for well-formed events"),
            metadata: EventMetadata::default(),
        }
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.metadata.correlation_id = Some(id.into());
        self
    }

    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.metadata.operator = Some(operator.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.metadata.source = Some(source.into());
        self
    }

    /// Decodes the payload back into a concrete event.
    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }

    /// Region the event is about, when the aggregate is a region.
    pub fn region(&self) -> Option<&str> {
        (self.aggregate_type == "Region").then_some(self.aggregate_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct LevelChanged {
        event_id: EventId,
        region: String,
        level: String,
        changed_at: Timestamp,
    }

    domain_event!(
        LevelChanged,
        event_type = "LEVEL_CHANGED",
        schema_version = 2,
        aggregate_id = region,
        aggregate_type = "Region",
        occurred_at = changed_at,
        event_id = event_id
    );

    fn level_changed(region: &str) -> LevelChanged {
        LevelChanged {
            event_id: EventId::from_string("evt-1"),
            region: region.to_string(),
            level: "MEDIUM".to_string(),
            changed_at: Timestamp::now(),
        }
    }

    #[test]
    fn envelope_takes_identity_from_the_event() {
        let event = level_changed("Hillside Region");
        let envelope = event.to_envelope();

        assert_eq!(envelope.event_id.as_str(), "evt-1");
        assert_eq!(envelope.event_type, "LEVEL_CHANGED");
        assert_eq!(envelope.schema_version, 2);
        assert_eq!(envelope.region(), Some("Hillside Region"));
        assert_eq!(envelope.occurred_at, event.changed_at);
        assert_eq!(envelope.payload_as::<LevelChanged>().unwrap(), event);
    }

    #[test]
    fn empty_metadata_fields_are_omitted() {
        let envelope = EventEnvelope::new("HUMAN_APPROVAL", "Riverside", "Region", json!({}))
            .with_operator("duty-officer");

        let json = serde_json::to_value(&envelope.metadata).unwrap();
        assert_eq!(json, json!({"operator": "duty-officer"}));
    }

    #[test]
    fn non_region_aggregates_have_no_region() {
        let envelope = EventEnvelope::new("DATA_INGESTION", "batch-7", "Batch", json!({}));
        assert_eq!(envelope.region(), None);
    }
}
