//! Data fusion configuration

use serde::Deserialize;

use super::error::{unit_interval, ValidationError};
use crate::domain::fusion::SourceWeights;

/// Trust weight applied to each source type's mean confidence
#[derive(Debug, Clone, Deserialize)]
pub struct FusionConfig {
    #[serde(default = "default_weather_weight")]
    pub weather_weight: f64,

    #[serde(default = "default_satellite_weight")]
    pub satellite_weight: f64,

    #[serde(default = "default_population_weight")]
    pub population_weight: f64,

    #[serde(default = "default_field_report_weight")]
    pub field_report_weight: f64,
}

impl FusionConfig {
    pub fn source_weights(&self) -> SourceWeights {
        SourceWeights {
            weather: self.weather_weight,
            satellite: self.satellite_weight,
            population: self.population_weight,
            field_report: self.field_report_weight,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        unit_interval("fusion.weather_weight", self.weather_weight)?;
        unit_interval("fusion.satellite_weight", self.satellite_weight)?;
        unit_interval("fusion.population_weight", self.population_weight)?;
        unit_interval("fusion.field_report_weight", self.field_report_weight)?;
        Ok(())
    }
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            weather_weight: default_weather_weight(),
            satellite_weight: default_satellite_weight(),
            population_weight: default_population_weight(),
            field_report_weight: default_field_report_weight(),
        }
    }
}

fn default_weather_weight() -> f64 {
    SourceWeights::default().weather
}

fn default_satellite_weight() -> f64 {
    SourceWeights::default().satellite
}

fn default_population_weight() -> f64 {
    SourceWeights::default().population
}

fn default_field_report_weight() -> f64 {
    SourceWeights::default().field_report
}
