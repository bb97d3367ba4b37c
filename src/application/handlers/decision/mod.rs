//! Decision package and governance query handlers.

mod build_decision_packages;
mod governance_status;

pub use build_decision_packages::BuildDecisionPackagesHandler;
pub use governance_status::{GovernanceStatusHandler, RegionGovernanceStatus};
