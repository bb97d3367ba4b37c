//! Ordered governance policy rules.

use super::GovernanceStatus;
use crate::domain::decision::DecisionOption;
use crate::domain::risk::RiskAssessment;

/// Thresholds the rules compare against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GovernancePolicy {
    pub min_confidence: f64,
    pub min_data_completeness: f64,
    /// Number of uncertainty flags at which a case escalates.
    pub escalation_flag_count: usize,
}

impl Default for GovernancePolicy {
    fn default() -> Self {
        Self {
            min_confidence: 0.65,
            min_data_completeness: 0.60,
            escalation_flag_count: 2,
        }
    }
}

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub assessment: &'a RiskAssessment,
    pub options: &'a [DecisionOption],
    pub data_completeness: f64,
    pub uncertainty_flags: &'a [String],
    pub policy: &'a GovernancePolicy,
}

impl RuleContext<'_> {
    pub fn confidence_met(&self) -> bool {
        self.assessment.confidence >= self.policy.min_confidence
    }

    pub fn data_sufficient(&self) -> bool {
        self.data_completeness >= self.policy.min_data_completeness
    }
}

/// What a firing rule contributes to the verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub status: GovernanceStatus,
    pub reason: String,
}

impl RuleOutcome {
    fn new(status: GovernanceStatus, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }
}

/// A single policy rule. Rules are applied in `PolicyRule::ORDERED` order;
/// the last one to fire decides the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyRule {
    SevereRiskLevel,
    LowConfidence,
    InsufficientData,
    IrreversibleOption,
    EthicallySensitiveOption,
    MultipleUncertainties,
}

impl PolicyRule {
    pub const ORDERED: [PolicyRule; 6] = [
        PolicyRule::SevereRiskLevel,
        PolicyRule::LowConfidence,
        PolicyRule::InsufficientData,
        PolicyRule::IrreversibleOption,
        PolicyRule::EthicallySensitiveOption,
        PolicyRule::MultipleUncertainties,
    ];

    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        use GovernanceStatus::*;

        match self {
            PolicyRule::SevereRiskLevel => ctx.assessment.risk_level.is_severe().then(|| {
                RuleOutcome::new(
                    ApprovalRequired,
                    format!(
                        "Risk level {} requires human approval",
                        ctx.assessment.risk_level
                    ),
                )
            }),
            PolicyRule::LowConfidence => (!ctx.confidence_met()).then(|| {
                RuleOutcome::new(
                    ApprovalRequired,
                    format!(
                        "Confidence ({:.2}) below threshold ({})",
                        ctx.assessment.confidence, ctx.policy.min_confidence
                    ),
                )
            }),
            PolicyRule::InsufficientData => (!ctx.data_sufficient()).then(|| {
                RuleOutcome::new(
                    RequestMoreData,
                    format!(
                        "Data completeness ({:.0}%) insufficient for autonomous decision",
                        ctx.data_completeness * 100.0
                    ),
                )
            }),
            PolicyRule::IrreversibleOption => ctx
                .options
                .iter()
                .any(DecisionOption::is_highly_irreversible)
                .then(|| {
                    RuleOutcome::new(
                        ApprovalRequired,
                        "High-irreversibility options present (e.g., evacuation)",
                    )
                }),
            PolicyRule::EthicallySensitiveOption => ctx
                .options
                .iter()
                .any(DecisionOption::is_ethically_sensitive)
                .then(|| {
                    RuleOutcome::new(
                        ApprovalRequired,
                        "Ethically sensitive actions require human oversight",
                    )
                }),
            PolicyRule::MultipleUncertainties => {
                let flags = ctx.uncertainty_flags;
                (flags.len() >= ctx.policy.escalation_flag_count).then(|| {
                    RuleOutcome::new(
                        Escalate,
                        format!("Multiple uncertainty flags: {}", flags[..2.min(flags.len())].join(", ")),
                    )
                })
            }
        }
    }
}
