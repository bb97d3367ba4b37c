//! Governance Gate - ordered policy rules producing a human-approval verdict.

mod gate;
mod result;
mod rules;

pub use gate::{GovernanceGate, MANDATORY_REVIEW_REASON, STANDARD_GOVERNANCE_REASON};
pub use result::{GovernanceResult, GovernanceStatus};
pub use rules::{GovernancePolicy, PolicyRule, RuleContext, RuleOutcome};
