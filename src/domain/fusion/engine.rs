//! Data Fusion Engine - merges raw records into a `FusedRegionState`.

use std::collections::BTreeMap;

use super::state::{
    FusedRegionState, FLAG_INSUFFICIENT_COVERAGE, FLAG_NO_GROUND_TRUTH, FLAG_NO_SATELLITE,
};
use crate::domain::foundation::score::{mean, round_to};
use crate::domain::foundation::RegionName;
use crate::domain::signals::{DataType, SignalRecord, SignalValue, SourceType};

/// Completeness below which the coverage flag is raised.
pub const COVERAGE_FLAG_THRESHOLD: f64 = 0.7;

/// Fixed trust placed in each kind of source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceWeights {
    pub weather: f64,
    pub satellite: f64,
    pub population: f64,
    pub field_report: f64,
}

impl SourceWeights {
    pub fn weight(&self, source: SourceType) -> f64 {
        match source {
            SourceType::Weather => self.weather,
            SourceType::Satellite => self.satellite,
            SourceType::Population => self.population,
            SourceType::FieldReport => self.field_report,
        }
    }
}

impl Default for SourceWeights {
    fn default() -> Self {
        Self {
            weather: 0.9,
            satellite: 0.7,
            population: 0.95,
            field_report: 0.6,
        }
    }
}

/// Fuses heterogeneous records into one consistent region state.
///
/// Stateless apart from its immutable weights; absence of data degrades
/// confidence and raises flags instead of failing.
#[derive(Debug, Clone, Default)]
pub struct DataFusionEngine {
    weights: SourceWeights,
}

impl DataFusionEngine {
    pub fn new(weights: SourceWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &SourceWeights {
        &self.weights
    }

    /// Fuses `records` (in stored order) for `region`.
    ///
    /// For each data type the value of the most confident record wins; a
    /// later record must be strictly more confident to replace an earlier one.
    pub fn fuse(&self, region: &RegionName, records: &[SignalRecord]) -> FusedRegionState {
        let mut resolved: BTreeMap<DataType, (SignalValue, f64)> = BTreeMap::new();
        let mut confidences_by_source: BTreeMap<SourceType, Vec<f64>> = BTreeMap::new();

        for record in records {
            let replace = match resolved.get(&record.data_type) {
                None => true,
                Some((_, kept)) => record.source_confidence > *kept,
            };
            if replace {
                resolved.insert(
                    record.data_type,
                    (record.value.clone(), record.source_confidence),
                );
            }

            confidences_by_source
                .entry(record.source_type)
                .or_default()
                .push(record.source_confidence);
        }

        let signals: BTreeMap<DataType, SignalValue> = resolved
            .into_iter()
            .map(|(data_type, (value, _))| (data_type, value))
            .collect();

        let source_confidence = confidences_by_source
            .into_iter()
            .map(|(source, values)| {
                let weighted = mean(values) * self.weights.weight(source);
                (source, round_to(weighted, 2))
            })
            .collect::<BTreeMap<_, _>>();

        let present = DataType::COMPLETENESS_REFERENCE
            .iter()
            .filter(|dt| signals.contains_key(dt))
            .count();
        let completeness = present as f64 / DataType::COMPLETENESS_REFERENCE.len() as f64;

        let mut uncertainty_flags = Vec::new();
        if completeness < COVERAGE_FLAG_THRESHOLD {
            uncertainty_flags.push(FLAG_INSUFFICIENT_COVERAGE.to_string());
        }
        if !source_confidence.contains_key(&SourceType::Satellite) {
            uncertainty_flags.push(FLAG_NO_SATELLITE.to_string());
        }
        if !source_confidence.contains_key(&SourceType::FieldReport) {
            uncertainty_flags.push(FLAG_NO_GROUND_TRUTH.to_string());
        }

        FusedRegionState {
            region: region.clone(),
            signals,
            source_confidence,
            data_completeness: round_to(completeness, 2),
            uncertainty_flags,
        }
    }
}
