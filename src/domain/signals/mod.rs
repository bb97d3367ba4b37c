//! Signals - raw multi-source observations about a region.
//!
//! - `SourceType` / `DataType` - the closed signal catalog
//! - `SignalValue` - numeric or categorical measurement
//! - `SignalRecord` - one immutable ingested observation
//! - `IngestionError` - why a record was refused

mod catalog;
mod errors;
mod record;

pub use catalog::{DataType, SourceType};
pub use errors::IngestionError;
pub use record::{SignalRecord, SignalValue};
