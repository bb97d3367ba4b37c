//! Raw signal records and their resolved values.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DataType, SourceType};
use crate::domain::foundation::{RegionName, Timestamp, ValidationError};

/// A measurement value: either a number or a category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalValue {
    Numeric(f64),
    Categorical(String),
}

impl SignalValue {
    /// Returns the numeric value, if this is a numeric signal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SignalValue::Numeric(v) => Some(*v),
            SignalValue::Categorical(_) => None,
        }
    }

    /// Returns the category label, if this is a categorical signal.
    pub fn as_category(&self) -> Option<&str> {
        match self {
            SignalValue::Numeric(_) => None,
            SignalValue::Categorical(s) => Some(s),
        }
    }
}

impl fmt::Display for SignalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalValue::Numeric(v) => write!(f, "{}", v),
            SignalValue::Categorical(s) => f.write_str(s),
        }
    }
}

fn default_confidence() -> f64 {
    1.0
}

/// One ingested observation for a region. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRecord {
    pub region: RegionName,
    pub source_type: SourceType,
    pub data_type: DataType,
    pub value: SignalValue,
    #[serde(default = "default_confidence")]
    pub source_confidence: f64,
    #[serde(default)]
    pub timestamp: Timestamp,
}

impl SignalRecord {
    /// Creates a record stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if `source_confidence` is not in `[0, 1]`.
    pub fn new(
        region: RegionName,
        source_type: SourceType,
        data_type: DataType,
        value: SignalValue,
        source_confidence: f64,
    ) -> Result<Self, ValidationError> {
        let record = Self {
            region,
            source_type,
            data_type,
            value,
            source_confidence,
            timestamp: Timestamp::now(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Checks the invariants a deserialized record may have skipped.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.source_confidence) {
            return Err(ValidationError::out_of_range(
                "source_confidence",
                0.0,
                1.0,
                self.source_confidence,
            ));
        }
        if let SignalValue::Numeric(v) = self.value {
            if !v.is_finite() {
                return Err(ValidationError::invalid_format("value", "must be finite"));
            }
        }
        Ok(())
    }

    /// Convenience constructor for numeric measurements.
    pub fn numeric(
        region: RegionName,
        source_type: SourceType,
        data_type: DataType,
        value: f64,
        source_confidence: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(
            region,
            source_type,
            data_type,
            SignalValue::Numeric(value),
            source_confidence,
        )
    }

    /// Convenience constructor for categorical observations.
    pub fn categorical(
        region: RegionName,
        source_type: SourceType,
        data_type: DataType,
        value: impl Into<String>,
        source_confidence: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(
            region,
            source_type,
            data_type,
            SignalValue::Categorical(value.into()),
            source_confidence,
        )
    }

    /// Overrides the record timestamp.
    pub fn at(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> RegionName {
        RegionName::new("Coastal Zone A").unwrap()
    }

    #[test]
    fn rejects_confidence_above_one() {
        let result = SignalRecord::numeric(
            region(),
            SourceType::Weather,
            DataType::Rainfall,
            245.0,
            1.2,
        );
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn rejects_nan_confidence() {
        let result = SignalRecord::numeric(
            region(),
            SourceType::Weather,
            DataType::Rainfall,
            245.0,
            f64::NAN,
        );
        assert!(result.is_err());
    }

    #[test]
    fn value_deserializes_untagged() {
        let n: SignalValue = serde_json::from_str("9.8").unwrap();
        assert_eq!(n.as_number(), Some(9.8));

        let c: SignalValue = serde_json::from_str("\"degraded\"").unwrap();
        assert_eq!(c.as_category(), Some("degraded"));
    }

    #[test]
    fn record_defaults_confidence_when_missing() {
        let json = r#"{
            "region": "Hillside Region",
            "source_type": "weather",
            "data_type": "rainfall",
            "value": 68
        }"#;
        let record: SignalRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.source_confidence, 1.0);
        assert_eq!(record.value, SignalValue::Numeric(68.0));
    }
}
