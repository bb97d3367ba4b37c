//! Signal catalog - the closed set of sources and data types the pipeline understands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin of a raw signal record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Weather,
    Satellite,
    Population,
    FieldReport,
}

impl SourceType {
    /// All source types, in reporting order.
    pub const ALL: [SourceType; 4] = [
        SourceType::Weather,
        SourceType::Satellite,
        SourceType::Population,
        SourceType::FieldReport,
    ];

    /// Wire name of the source type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Weather => "weather",
            SourceType::Satellite => "satellite",
            SourceType::Population => "population",
            SourceType::FieldReport => "field_report",
        }
    }

    /// Data types this source is allowed to report.
    ///
    /// Field reports come from ground teams and may describe anything.
    pub fn allowed_data_types(&self) -> &'static [DataType] {
        match self {
            SourceType::Weather => &[
                DataType::Rainfall,
                DataType::Temperature,
                DataType::WindSpeed,
                DataType::Humidity,
            ],
            SourceType::Satellite => &[
                DataType::FloodExtent,
                DataType::LandChange,
                DataType::WaterLevel,
            ],
            SourceType::Population => &[
                DataType::PopulationDensity,
                DataType::ElderlyPercentage,
                DataType::InfrastructureCount,
                DataType::InfrastructureQuality,
            ],
            SourceType::FieldReport => &DataType::ALL,
        }
    }

    /// Returns true if this source may report the given data type.
    pub fn accepts(&self, data_type: DataType) -> bool {
        self.allowed_data_types().contains(&data_type)
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of measurement a signal record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// Accumulated rainfall in millimetres.
    Rainfall,
    Temperature,
    WindSpeed,
    Humidity,
    /// Percentage of the region under water.
    FloodExtent,
    LandChange,
    /// River or sea level in metres.
    WaterLevel,
    /// Residents per km².
    PopulationDensity,
    ElderlyPercentage,
    /// Number of critical facilities (hospitals, power, water).
    InfrastructureCount,
    /// Categorical: "good", "degraded", "poor".
    InfrastructureQuality,
    /// Flood events in the past five years.
    HistoricalFloodFrequency,
}

impl DataType {
    pub const ALL: [DataType; 12] = [
        DataType::Rainfall,
        DataType::Temperature,
        DataType::WindSpeed,
        DataType::Humidity,
        DataType::FloodExtent,
        DataType::LandChange,
        DataType::WaterLevel,
        DataType::PopulationDensity,
        DataType::ElderlyPercentage,
        DataType::InfrastructureCount,
        DataType::InfrastructureQuality,
        DataType::HistoricalFloodFrequency,
    ];

    /// Signals that must be present for a region's picture to count as complete.
    pub const COMPLETENESS_REFERENCE: [DataType; 3] = [
        DataType::Rainfall,
        DataType::FloodExtent,
        DataType::PopulationDensity,
    ];

    /// Wire name of the data type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Rainfall => "rainfall",
            DataType::Temperature => "temperature",
            DataType::WindSpeed => "wind_speed",
            DataType::Humidity => "humidity",
            DataType::FloodExtent => "flood_extent",
            DataType::LandChange => "land_change",
            DataType::WaterLevel => "water_level",
            DataType::PopulationDensity => "population_density",
            DataType::ElderlyPercentage => "elderly_percentage",
            DataType::InfrastructureCount => "infrastructure_count",
            DataType::InfrastructureQuality => "infrastructure_quality",
            DataType::HistoricalFloodFrequency => "historical_flood_frequency",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
