//! Static response playbooks, one per risk bucket.

use super::option::ImpactLevel::{self, High, Low, Medium};
use super::option::DecisionOption;
use crate::domain::foundation::score::round_to;

/// Immutable catalog entry. The confidence factor scales the assessment
/// confidence into the option's own confidence.
#[derive(Debug, Clone, Copy)]
pub struct OptionTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub benefit: &'static str,
    pub tradeoffs: &'static [&'static str],
    pub irreversibility: ImpactLevel,
    pub ethical_sensitivity: ImpactLevel,
    pub confidence_factor: f64,
}

impl OptionTemplate {
    /// Builds a concrete option for an assessment of confidence `base`.
    pub fn instantiate(&self, base: f64) -> DecisionOption {
        DecisionOption {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            benefit: self.benefit.to_string(),
            tradeoffs: self.tradeoffs.iter().map(|t| t.to_string()).collect(),
            irreversibility: self.irreversibility,
            ethical_sensitivity: self.ethical_sensitivity,
            confidence: round_to(base * self.confidence_factor, 2),
        }
    }
}

/// CRITICAL and HIGH risk.
pub const SEVERE_RISK_PLAYBOOK: &[OptionTemplate] = &[
    OptionTemplate {
        id: "full_evacuation",
        title: "Full Evacuation Order",
        description: "Immediately evacuate all residents from high-risk zones to designated shelters.",
        benefit: "Maximizes life safety; removes population from immediate danger",
        tradeoffs: &[
            "Major logistical operation requiring transportation, shelters and security",
            "Economic disruption and potential panic",
            "False alarm consequences if risk assessment incorrect",
        ],
        irreversibility: High,
        ethical_sensitivity: High,
        confidence_factor: 0.95,
    },
    OptionTemplate {
        id: "targeted_evacuation",
        title: "Targeted Evacuation (Vulnerable Zones Only)",
        description: "Evacuate high-exposure zones (elderly, low-lying areas, critical facilities).",
        benefit: "Protects most vulnerable while reducing logistical burden",
        tradeoffs: &[
            "Partial coverage; some at-risk populations remain",
            "Potential inequity perceptions",
        ],
        irreversibility: Medium,
        ethical_sensitivity: Medium,
        confidence_factor: 0.88,
    },
    OptionTemplate {
        id: "shelter_in_place",
        title: "Shelter-in-Place with Emergency Response Staging",
        description: "Instruct residents to shelter on upper floors; deploy rapid response teams.",
        benefit: "Avoids mass movement; maintains community cohesion",
        tradeoffs: &[
            "Residents remain in hazard zone",
            "Requires accessible vertical evacuation structures",
            "Risk of entrapment if situation worsens",
        ],
        irreversibility: Low,
        ethical_sensitivity: Medium,
        confidence_factor: 0.75,
    },
    OptionTemplate {
        id: "relief_preposition",
        title: "Pre-Position Relief Supplies & Medical Teams",
        description: "Stage emergency supplies, medical personnel, and rescue equipment at zone perimeter.",
        benefit: "Enables rapid post-impact response; minimizes time-to-aid",
        tradeoffs: &[
            "Does not prevent immediate impact",
            "Resource allocation without guaranteed need",
        ],
        irreversibility: Low,
        ethical_sensitivity: Low,
        confidence_factor: 0.90,
    },
    OptionTemplate {
        id: "enhanced_monitoring_alert",
        title: "Enhanced Monitoring + Public Alert",
        description: "Increase sensor frequency, deploy field teams, issue urgent public warning.",
        benefit: "Maintains situational awareness without committing to large-scale action",
        tradeoffs: &[
            "Delayed protective action if situation escalates rapidly",
            "Public may not take warnings seriously without official action",
        ],
        irreversibility: Low,
        ethical_sensitivity: Low,
        confidence_factor: 0.82,
    },
];

/// MEDIUM risk.
pub const MEDIUM_RISK_PLAYBOOK: &[OptionTemplate] = &[
    OptionTemplate {
        id: "public_advisory",
        title: "Issue Public Flood Advisory",
        description: "Broadcast advisory via emergency alert system; recommend self-preparation.",
        benefit: "Raises public awareness without triggering panic",
        tradeoffs: &[
            "Relies on individual compliance",
            "May cause unnecessary alarm if risk downgrades",
        ],
        irreversibility: Low,
        ethical_sensitivity: Low,
        confidence_factor: 0.92,
    },
    OptionTemplate {
        id: "voluntary_evacuation",
        title: "Voluntary Evacuation (Vulnerable Groups)",
        description: "Offer voluntary evacuation for elderly, disabled, and families with young children.",
        benefit: "Protects most vulnerable without mandatory orders",
        tradeoffs: &[
            "Incomplete compliance",
            "Logistical complexity of partial evacuation",
        ],
        irreversibility: Low,
        ethical_sensitivity: Medium,
        confidence_factor: 0.85,
    },
    OptionTemplate {
        id: "relief_staging",
        title: "Stage Relief Supplies (Precautionary)",
        description: "Position food, water, medical kits near affected zones.",
        benefit: "Preparedness without drastic action",
        tradeoffs: &["Resource cost if threat doesn't materialize"],
        irreversibility: Low,
        ethical_sensitivity: Low,
        confidence_factor: 0.88,
    },
    OptionTemplate {
        id: "infrastructure_inspection",
        title: "Infrastructure Inspection & Reinforcement",
        description: "Deploy engineering teams to inspect levees, drainage, and critical facilities.",
        benefit: "Identifies vulnerabilities; enables preventive fixes",
        tradeoffs: &[
            "Time-intensive",
            "May reveal problems without immediate solutions",
        ],
        irreversibility: Low,
        ethical_sensitivity: Low,
        confidence_factor: 0.90,
    },
];

/// LOW risk.
pub const LOW_RISK_PLAYBOOK: &[OptionTemplate] = &[
    OptionTemplate {
        id: "routine_monitoring",
        title: "Continue Routine Monitoring",
        description: "Maintain standard sensor polling and situation assessment protocols.",
        benefit: "Business as usual; no resource diversion",
        tradeoffs: &["May miss rapid escalation"],
        irreversibility: Low,
        ethical_sensitivity: Low,
        confidence_factor: 0.95,
    },
    OptionTemplate {
        id: "information_bulletin",
        title: "Issue Information Bulletin",
        description: "Share current weather/water conditions with local officials and media.",
        benefit: "Transparency; maintains public trust",
        tradeoffs: &["None significant"],
        irreversibility: Low,
        ethical_sensitivity: Low,
        confidence_factor: 0.93,
    },
    OptionTemplate {
        id: "community_preparedness",
        title: "Community Preparedness Outreach",
        description: "Conduct educational sessions on flood preparedness and emergency kits.",
        benefit: "Long-term resilience building",
        tradeoffs: &["No immediate protective effect"],
        irreversibility: Low,
        ethical_sensitivity: Low,
        confidence_factor: 0.88,
    },
];
