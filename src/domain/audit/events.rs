//! Audit events emitted by the pipeline stages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::decision::DecisionOption;
use crate::domain::foundation::{domain_event, EventId, RegionName, Timestamp};
use crate::domain::governance::{GovernanceResult, GovernanceStatus};
use crate::domain::risk::{RiskAssessment, RiskLevel};
use crate::domain::signals::{DataType, SignalRecord, SignalValue, SourceType};

/// Closed set of audit event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEventType {
    DataIngestion,
    RiskAssessment,
    DecisionSynthesis,
    GovernanceCheck,
    HumanApproval,
}

impl AuditEventType {
    pub const ALL: [AuditEventType; 5] = [
        AuditEventType::DataIngestion,
        AuditEventType::RiskAssessment,
        AuditEventType::DecisionSynthesis,
        AuditEventType::GovernanceCheck,
        AuditEventType::HumanApproval,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuditEventType::DataIngestion => "DATA_INGESTION",
            AuditEventType::RiskAssessment => "RISK_ASSESSMENT",
            AuditEventType::DecisionSynthesis => "DECISION_SYNTHESIS",
            AuditEventType::GovernanceCheck => "GOVERNANCE_CHECK",
            AuditEventType::HumanApproval => "HUMAN_APPROVAL",
        }
    }
}

impl fmt::Display for AuditEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditEventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown audit event type: {}", s))
    }
}

/// A raw record was accepted into the signal store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalIngested {
    pub event_id: EventId,
    pub region: RegionName,
    pub source_type: SourceType,
    pub data_type: DataType,
    pub value: SignalValue,
    pub source_confidence: f64,
    pub ingested_at: Timestamp,
}

impl SignalIngested {
    pub fn from_record(record: &SignalRecord) -> Self {
        Self {
            event_id: EventId::new(),
            region: record.region.clone(),
            source_type: record.source_type,
            data_type: record.data_type,
            value: record.value.clone(),
            source_confidence: record.source_confidence,
            ingested_at: Timestamp::now(),
        }
    }
}

domain_event!(
    SignalIngested,
    event_type = "DATA_INGESTION",
    schema_version = 1,
    aggregate_id = region,
    aggregate_type = "Region",
    occurred_at = ingested_at,
    event_id = event_id
);

/// A region's risk was (re)computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessed {
    pub event_id: EventId,
    pub region: RegionName,
    pub risk_level: RiskLevel,
    pub risk_score: f64,
    pub confidence: f64,
    pub assessed_at: Timestamp,
}

impl RiskAssessed {
    pub fn from_assessment(assessment: &RiskAssessment) -> Self {
        Self {
            event_id: EventId::new(),
            region: assessment.region.clone(),
            risk_level: assessment.risk_level,
            risk_score: assessment.risk_score,
            confidence: assessment.confidence,
            assessed_at: Timestamp::now(),
        }
    }
}

domain_event!(
    RiskAssessed,
    event_type = "RISK_ASSESSMENT",
    schema_version = 1,
    aggregate_id = region,
    aggregate_type = "Region",
    occurred_at = assessed_at,
    event_id = event_id
);

/// Response options were generated for a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionsSynthesized {
    pub event_id: EventId,
    pub region: RegionName,
    pub risk_level: RiskLevel,
    pub option_ids: Vec<String>,
    pub synthesized_at: Timestamp,
}

impl DecisionsSynthesized {
    pub fn new(region: &RegionName, risk_level: RiskLevel, options: &[DecisionOption]) -> Self {
        Self {
            event_id: EventId::new(),
            region: region.clone(),
            risk_level,
            option_ids: options.iter().map(|o| o.id.clone()).collect(),
            synthesized_at: Timestamp::now(),
        }
    }
}

domain_event!(
    DecisionsSynthesized,
    event_type = "DECISION_SYNTHESIS",
    schema_version = 1,
    aggregate_id = region,
    aggregate_type = "Region",
    occurred_at = synthesized_at,
    event_id = event_id
);

/// The governance gate returned a verdict for a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernanceChecked {
    pub event_id: EventId,
    pub region: RegionName,
    pub status: GovernanceStatus,
    pub requires_human_approval: bool,
    pub reason: String,
    pub checked_at: Timestamp,
}

impl GovernanceChecked {
    pub fn new(region: &RegionName, result: &GovernanceResult) -> Self {
        Self {
            event_id: EventId::new(),
            region: region.clone(),
            status: result.status,
            requires_human_approval: result.requires_human_approval,
            reason: result.reason.clone(),
            checked_at: Timestamp::now(),
        }
    }
}

domain_event!(
    GovernanceChecked,
    event_type = "GOVERNANCE_CHECK",
    schema_version = 1,
    aggregate_id = region,
    aggregate_type = "Region",
    occurred_at = checked_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, SerializableDomainEvent};

    #[test]
    fn event_type_strings_parse_back() {
        for t in AuditEventType::ALL {
            assert_eq!(t.as_str().parse::<AuditEventType>().unwrap(), t);
        }
        assert!("AUTONOMOUS_ACTION".parse::<AuditEventType>().is_err());
    }

    #[test]
    fn ingestion_event_matches_its_type_tag() {
        let record = SignalRecord::numeric(
            RegionName::new("Coastal Zone A").unwrap(),
            SourceType::Weather,
            DataType::Rainfall,
            245.0,
            0.92,
        )
        .unwrap();
        let event = SignalIngested::from_record(&record);

        assert_eq!(event.event_type(), AuditEventType::DataIngestion.as_str());
        let envelope = event.to_envelope();
        assert_eq!(envelope.payload["data_type"], "rainfall");
        assert_eq!(envelope.payload["value"], 245.0);
    }
}
