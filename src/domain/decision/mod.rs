//! Decision Options - ranked, explainable response recommendations.

mod catalog;
mod engine;
mod option;

pub use catalog::{OptionTemplate, LOW_RISK_PLAYBOOK, MEDIUM_RISK_PLAYBOOK, SEVERE_RISK_PLAYBOOK};
pub use engine::DecisionOptionEngine;
pub use option::{DecisionOption, ImpactLevel};
