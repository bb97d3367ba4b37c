//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (ingestion, approval) change state; query handlers
//! (assessments, packages, governance status) only read signals and
//! record snapshots.

pub mod handlers;

pub use handlers::{
    ApproveOptionCommand, ApproveOptionHandler, AssessRegionsHandler,
    BuildDecisionPackagesHandler, GovernanceStatusHandler, IngestSignalCommand,
    IngestSignalHandler, IngestSignalResult, RegionGovernanceStatus,
};
