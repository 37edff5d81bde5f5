//! Narrative text per tier, band, and SWOT group.

use serde::{Deserialize, Serialize};

use crate::domain::competitive::CompetitiveProfile;
use crate::domain::foundation::{ScorCategory, Tier};
use crate::domain::scoring::{IotReadiness, Scorecard, SwotGroup, SwotGroups};

/// Advice for one category, selected by its tier.
pub fn category_narrative(tier: Tier) -> &'static str {
    match tier {
        Tier::Weak => "Low readiness. Start with robotic process automation, automated demand forecasting, and process simplification.",
        Tier::Moderate => "Moderate readiness. Extend ERP integration, enable smart dashboards, and analyse supplier data with machine learning.",
        Tier::Strong => "High readiness. Activate machine learning and predictive use cases such as predictive maintenance and shipment routing optimisation.",
    }
}

/// Advice for the IoT block, selected by its band.
pub fn iot_narrative(band: Tier) -> &'static str {
    match band {
        Tier::Weak => "IoT readiness is low. Install sensors, connect them to digital systems, and start collecting data.",
        Tier::Moderate => "IoT readiness is moderate. Improve connectivity and analyse data with edge AI.",
        Tier::Strong => "IoT readiness is excellent. Move towards digital twins and simulation models.",
    }
}

/// Advice for one compared entity, selected by its competitive band.
pub fn competitive_narrative(band: Tier) -> &'static str {
    match band {
        Tier::Weak => "Weak performance. Rebuild core processes and integrate RPA and AutoML.",
        Tier::Moderate => "Relatively good performance. Improve operational readiness and real-time analysis.",
        Tier::Strong => "Strong performance. Keep going and expand intelligent integration.",
    }
}

/// Action attached to a non-empty SWOT group.
pub fn swot_advice(group: SwotGroup) -> &'static str {
    match group {
        SwotGroup::Weakness => "Automate manual processing, build a decision support system, and train staff.",
        SwotGroup::Opportunity => "Develop AI-backed services to build a competitive advantage.",
        SwotGroup::Strength => "Use existing resources to extend digital transformation and AI adoption.",
        SwotGroup::Threat => "Monitor external risks and prepare mitigation plans.",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecommendation {
    pub category: ScorCategory,
    pub tier: Tier,
    pub text: String,
}

/// Strategic advice for one SWOT group that has members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwotAdvice {
    pub group: SwotGroup,
    pub members: Vec<String>,
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitiveRecommendation {
    pub name: String,
    pub score: f64,
    pub band: Tier,
    pub text: String,
}

/// Full set of recommendations for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub categories: Vec<CategoryRecommendation>,
    /// Categories per tier, weak to strong.
    pub tier_distribution: Vec<(Tier, usize)>,
    pub iot: Option<String>,
    pub swot: Vec<SwotAdvice>,
    pub competitive: Vec<CompetitiveRecommendation>,
    /// Whether the assessed company leads the comparison.
    pub leader_message: Option<String>,
}

impl Recommendations {
    /// Selects every applicable narrative.
    ///
    /// IoT and competitive sections are omitted when their inputs are absent.
    pub fn build(
        scorecard: &Scorecard,
        swot: &SwotGroups,
        iot: Option<&IotReadiness>,
        competitive: Option<(&CompetitiveProfile, &str)>,
    ) -> Self {
        let categories = scorecard
            .iter()
            .map(|score| {
                let tier = score.tier();
                CategoryRecommendation {
                    category: score.category,
                    tier,
                    text: category_narrative(tier).to_string(),
                }
            })
            .collect();

        let (competitive, leader_message) = match competitive {
            Some((profile, company)) => (
                Self::competitive_section(profile),
                Some(Self::leader_message(profile, company)),
            ),
            None => (Vec::new(), None),
        };

        Self {
            categories,
            tier_distribution: scorecard.tier_distribution(),
            iot: iot.map(|i| iot_narrative(i.band()).to_string()),
            swot: Self::swot_section(swot),
            competitive,
            leader_message,
        }
    }

    fn swot_section(swot: &SwotGroups) -> Vec<SwotAdvice> {
        let names = |cats: &[ScorCategory]| -> Vec<String> {
            cats.iter().map(|c| c.display_name().to_string()).collect()
        };
        [
            (SwotGroup::Weakness, names(&swot.weaknesses)),
            (SwotGroup::Opportunity, names(&swot.opportunities)),
            (SwotGroup::Strength, names(&swot.strengths)),
            (SwotGroup::Threat, swot.threats.clone()),
        ]
        .into_iter()
        .filter(|(_, members)| !members.is_empty())
        .map(|(group, members)| SwotAdvice {
            group,
            members,
            advice: swot_advice(group).to_string(),
        })
        .collect()
    }

    fn competitive_section(profile: &CompetitiveProfile) -> Vec<CompetitiveRecommendation> {
        profile
            .entries
            .iter()
            .map(|entry| {
                let band = entry.band();
                CompetitiveRecommendation {
                    name: entry.name.clone(),
                    score: entry.display_score(),
                    band,
                    text: competitive_narrative(band).to_string(),
                }
            })
            .collect()
    }

    fn leader_message(profile: &CompetitiveProfile, company: &str) -> String {
        match (profile.rank_of(company), profile.leader()) {
            (Some(1), _) => format!("{} leads the comparison.", company),
            (Some(rank), Some(leader)) => format!(
                "{} ranks #{}; {} leads with {:.2}.",
                company,
                rank,
                leader.name,
                leader.display_score()
            ),
            _ => format!("{} was not part of the comparison.", company),
        }
    }
}
