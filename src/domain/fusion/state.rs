//! The fused, per-region view of all ingested signals.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::RegionName;
use crate::domain::signals::{DataType, SignalValue, SourceType};

/// Raised when fewer than 70% of the reference signals are present.
pub const FLAG_INSUFFICIENT_COVERAGE: &str = "Insufficient data coverage";
/// Raised when no satellite-sourced record exists for the region.
pub const FLAG_NO_SATELLITE: &str = "No satellite imagery available";
/// Raised when no field report exists for the region.
pub const FLAG_NO_GROUND_TRUTH: &str = "No ground-truth validation";

/// Single consistent state of a region after reconciling every source.
///
/// Holds at most one resolved value per data type. Maps are ordered so
/// that two fusions of the same records serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedRegionState {
    pub region: RegionName,
    pub signals: BTreeMap<DataType, SignalValue>,
    /// Trust-weighted mean confidence per contributing source type.
    pub source_confidence: BTreeMap<SourceType, f64>,
    /// Fraction of the completeness reference set that is present.
    pub data_completeness: f64,
    pub uncertainty_flags: Vec<String>,
}

impl FusedRegionState {
    /// State for a region nothing is known about.
    pub fn empty(region: RegionName) -> Self {
        Self {
            region,
            signals: BTreeMap::new(),
            source_confidence: BTreeMap::new(),
            data_completeness: 0.0,
            uncertainty_flags: Vec::new(),
        }
    }

    /// Resolved signal, if any.
    pub fn signal(&self, data_type: DataType) -> Option<&SignalValue> {
        self.signals.get(&data_type)
    }

    /// Numeric reading of a signal; absent or categorical values read as `0.0`.
    pub fn number(&self, data_type: DataType) -> f64 {
        self.signal(data_type)
            .and_then(SignalValue::as_number)
            .unwrap_or(0.0)
    }

    /// Category label of a signal, if it resolved to one.
    pub fn category(&self, data_type: DataType) -> Option<&str> {
        self.signal(data_type).and_then(SignalValue::as_category)
    }

    pub fn has_source(&self, source: SourceType) -> bool {
        self.source_confidence.contains_key(&source)
    }
}
