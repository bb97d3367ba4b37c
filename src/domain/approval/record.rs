use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, ApprovalId, EventId, RegionName, Timestamp, ValidationError,
};

/// Durable proof that a named human approved one option.
///
/// Only the approval handler creates these; recording one never triggers
/// execution of the option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalRecord {
    pub approval_id: ApprovalId,
    pub region: RegionName,
    pub option_id: String,
    pub option_title: String,
    pub approved_by: String,
    pub approved_at: Timestamp,
    #[serde(default)]
    pub event_id: EventId,
}

impl ApprovalRecord {
    pub fn new(
        region: RegionName,
        option_id: impl Into<String>,
        option_title: impl Into<String>,
        approved_by: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let approved_by = approved_by.into().trim().to_string();
        if approved_by.is_empty() {
            return Err(ValidationError::empty_field("approved_by"));
        }

        Ok(Self {
            approval_id: ApprovalId::new(),
            region,
            option_id: option_id.into(),
            option_title: option_title.into(),
            approved_by,
            approved_at: Timestamp::now(),
            event_id: EventId::new(),
        })
    }
}

domain_event!(
    ApprovalRecord,
    event_type = "HUMAN_APPROVAL",
    schema_version = 1,
    aggregate_id = region,
    aggregate_type = "Region",
    occurred_at = approved_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SerializableDomainEvent;

    #[test]
    fn rejects_anonymous_approver() {
        let region = RegionName::new("Coastal Zone A").unwrap();
        let err = ApprovalRecord::new(region, "full_evacuation", "Full Evacuation Order", "  ")
            .unwrap_err();
        assert_eq!(err, ValidationError::empty_field("approved_by"));
    }

    #[test]
    fn approval_is_a_human_approval_event() {
        let region = RegionName::new("Coastal Zone A").unwrap();
        let record =
            ApprovalRecord::new(region, "full_evacuation", "Full Evacuation Order", "Mayor Ortiz")
                .unwrap();

        let envelope = record.to_envelope();
        assert_eq!(envelope.event_type, "HUMAN_APPROVAL");
        assert_eq!(envelope.aggregate_id, "Coastal Zone A");
        assert_eq!(envelope.payload["approved_by"], "Mayor Ortiz");
    }
}
