use serde::{Deserialize, Serialize};

use crate::domain::decision::DecisionOption;
use crate::domain::foundation::RegionName;
use crate::domain::governance::GovernanceResult;
use crate::domain::risk::RiskAssessment;

/// Everything a human decision maker needs for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionPackage {
    pub region: RegionName,
    pub risk_assessment: RiskAssessment,
    pub options: Vec<DecisionOption>,
    pub governance: GovernanceResult,
}

impl DecisionPackage {
    /// Looks up an option of this package by id.
    pub fn option(&self, option_id: &str) -> Option<&DecisionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}
