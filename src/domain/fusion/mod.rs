//! Data Fusion - per-region reconciliation of raw signal records.
//!
//! Pure and stateless: the engine only holds its source trust weights.

mod engine;
mod state;

pub use engine::{DataFusionEngine, SourceWeights, COVERAGE_FLAG_THRESHOLD};
pub use state::{
    FusedRegionState, FLAG_INSUFFICIENT_COVERAGE, FLAG_NO_GROUND_TRUTH, FLAG_NO_SATELLITE,
};
