//! Governance verdict types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome category of the governance gate.
///
/// None of these statuses authorises execution; even `Proceed` only means
/// no rule objected, and approval is still required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GovernanceStatus {
    Proceed,
    ApprovalRequired,
    Escalate,
    RequestMoreData,
}

impl GovernanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GovernanceStatus::Proceed => "PROCEED",
            GovernanceStatus::ApprovalRequired => "APPROVAL_REQUIRED",
            GovernanceStatus::Escalate => "ESCALATE",
            GovernanceStatus::RequestMoreData => "REQUEST_MORE_DATA",
        }
    }
}

impl fmt::Display for GovernanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating the policy rules for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernanceResult {
    pub status: GovernanceStatus,
    /// Always `true`.
    pub requires_human_approval: bool,
    /// Explanations of every rule that fired, joined by `"; "`.
    pub reason: String,
    pub confidence_threshold_met: bool,
    pub data_sufficiency: bool,
}

impl GovernanceResult {
    /// Individual rule explanations.
    pub fn reasons(&self) -> impl Iterator<Item = &str> {
        self.reason.split("; ").filter(|r| !r.is_empty())
    }
}
