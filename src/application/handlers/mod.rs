//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

mod audit_dispatch;

pub mod approval;
pub mod decision;
pub mod risk;
pub mod signals;

pub use approval::{ApproveOptionCommand, ApproveOptionHandler};
pub use decision::{BuildDecisionPackagesHandler, GovernanceStatusHandler, RegionGovernanceStatus};
pub use risk::AssessRegionsHandler;
pub use signals::{IngestSignalCommand, IngestSignalHandler, IngestSignalResult};
