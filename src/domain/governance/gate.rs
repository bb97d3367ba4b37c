//! Governance Gate - enforces human-in-the-loop decision making.

use super::rules::{GovernancePolicy, PolicyRule, RuleContext};
use super::{GovernanceResult, GovernanceStatus};
use crate::domain::decision::DecisionOption;
use crate::domain::risk::RiskAssessment;

pub const STANDARD_GOVERNANCE_REASON: &str =
    "Standard governance: All decisions require human confirmation";

pub const MANDATORY_REVIEW_REASON: &str =
    "CRITICAL: Insufficient confidence AND data, human review MANDATORY";

/// Decides how a decision package must be handled by humans.
///
/// The gate never lets anything through on its own: every result carries
/// `requires_human_approval = true`.
#[derive(Debug, Clone, Default)]
pub struct GovernanceGate {
    policy: GovernancePolicy,
}

impl GovernanceGate {
    pub fn new(policy: GovernancePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &GovernancePolicy {
        &self.policy
    }

    pub fn evaluate(
        &self,
        assessment: &RiskAssessment,
        options: &[DecisionOption],
        data_completeness: f64,
        uncertainty_flags: &[String],
    ) -> GovernanceResult {
        let ctx = RuleContext {
            assessment,
            options,
            data_completeness,
            uncertainty_flags,
            policy: &self.policy,
        };

        let mut status = GovernanceStatus::Proceed;
        let mut reasons: Vec<String> = Vec::new();

        for rule in PolicyRule::ORDERED {
            if let Some(outcome) = rule.evaluate(&ctx) {
                status = outcome.status;
                reasons.push(outcome.reason);
            }
        }

        if reasons.is_empty() && !assessment.risk_level.is_severe() {
            status = GovernanceStatus::ApprovalRequired;
            reasons.push(STANDARD_GOVERNANCE_REASON.to_string());
        }

        let confidence_met = ctx.confidence_met();
        let data_sufficient = ctx.data_sufficient();

        if !confidence_met && !data_sufficient {
            status = GovernanceStatus::RequestMoreData;
            reasons.insert(0, MANDATORY_REVIEW_REASON.to_string());
        }

        GovernanceResult {
            status,
            requires_human_approval: true,
            reason: reasons.join("; "),
            confidence_threshold_met: confidence_met,
            data_sufficiency: data_sufficient,
        }
    }

    /// Autonomous execution is never permitted.
    pub fn can_proceed_without_approval(&self) -> bool {
        false
    }
}
