//! Deterministic substitutes used when generation fails.

use std::collections::BTreeMap;

use super::cost_benefit::CostBenefitAnalysis;
use super::option::{DecisionOption, ExpectedOutcome, ResourceRequirement};
use super::recommendation::Recommendation;
use super::risk::RiskAssessment;
use super::scoring::ImpactScorer;
use crate::domain::foundation::{
    ConfidenceLevel, OptionId, OutcomeImpact, OutcomeTimeframe, RiskLevel, UnitInterval,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn fixed_option_id(id: &str) -> OptionId {
    OptionId::new(id).unwrap_or_else(|_| OptionId::generate())
}

/// Conservative and moderate options offered when none could be generated.
pub fn default_options() -> Vec<DecisionOption> {
    let mut conservative = DecisionOption::new(
        fixed_option_id("option-1"),
        "Conservative Approach",
        "Maintain current course with minimal changes",
    );
    conservative.pros = strings(&["Low risk", "Stable implementation", "Minimal resource requirements"]);
    conservative.cons = strings(&["Limited impact", "May not address core issues", "Missed opportunities"]);
    conservative.risks = strings(&["Status quo may deteriorate", "Competitor advantage"]);
    conservative.opportunities = strings(&["Stability", "Resource conservation"]);
    conservative.expected_outcomes = vec![ExpectedOutcome {
        description: "Maintained stability with gradual improvement".to_string(),
        probability: UnitInterval::new(0.8),
        impact: OutcomeImpact::Low,
        timeframe: OutcomeTimeframe::ShortTerm,
        metrics: strings(&["stability_index"]),
    }];
    conservative.resource_requirements = vec![ResourceRequirement {
        resource_type: "financial".to_string(),
        description: "Minimal additional funding".to_string(),
        quantity: 100_000.0,
        unit: "credits".to_string(),
        availability: UnitInterval::new(0.9),
        criticality: RiskLevel::Low,
    }];
    conservative.success_probability = UnitInterval::new(0.8);
    conservative.risk_level = UnitInterval::new(0.2);
    conservative.cost_estimate = 100_000.0;
    conservative.time_to_implement_days = 7.0;

    let mut moderate = DecisionOption::new(
        fixed_option_id("option-2"),
        "Moderate Reform",
        "Implement measured changes to address key issues",
    );
    moderate.pros = strings(&["Balanced approach", "Manageable risk", "Stakeholder buy-in"]);
    moderate.cons = strings(&["Moderate impact", "Longer timeline", "Compromise solutions"]);
    moderate.risks = strings(&["Implementation challenges", "Partial effectiveness"]);
    moderate.opportunities = strings(&["Sustainable improvement", "Stakeholder alignment"]);
    moderate.expected_outcomes = vec![ExpectedOutcome {
        description: "Significant improvement with manageable transition".to_string(),
        probability: UnitInterval::new(0.7),
        impact: OutcomeImpact::Medium,
        timeframe: OutcomeTimeframe::MediumTerm,
        metrics: strings(&["improvement_index", "stakeholder_satisfaction"]),
    }];
    moderate.resource_requirements = vec![ResourceRequirement {
        resource_type: "financial".to_string(),
        description: "Moderate funding for reforms".to_string(),
        quantity: 1_000_000.0,
        unit: "credits".to_string(),
        availability: UnitInterval::new(0.7),
        criticality: RiskLevel::Medium,
    }];
    moderate.success_probability = UnitInterval::new(0.7);
    moderate.risk_level = UnitInterval::new(0.3);
    moderate.cost_estimate = 1_000_000.0;
    moderate.time_to_implement_days = 30.0;

    vec![conservative, moderate]
}

pub fn default_risk_assessment() -> RiskAssessment {
    RiskAssessment {
        overall_risk: RiskLevel::Medium,
        risks: Vec::new(),
        implementation: UnitInterval::new(0.3),
        financial: UnitInterval::new(0.3),
        political: UnitInterval::new(0.3),
        operational: UnitInterval::new(0.3),
        strategic: UnitInterval::new(0.3),
        mitigation_strategies: strings(&["Regular monitoring", "Stakeholder engagement"]),
        contingency_plans: strings(&["Fallback options", "Risk mitigation protocols"]),
        risk_indicators: strings(&["Performance metrics", "Stakeholder feedback"]),
        review_frequency: "monthly".to_string(),
    }
}

pub fn default_cost_benefit() -> CostBenefitAnalysis {
    CostBenefitAnalysis {
        net_benefit: 500_000.0,
        roi: 0.5,
        payback_period: 12.0,
        costs: Vec::new(),
        benefits: Vec::new(),
        break_even_point: 12.0,
        sensitivity_analysis: BTreeMap::new(),
        assumptions: strings(&["Normal operating conditions"]),
        confidence: ConfidenceLevel::Medium,
        uncertainty_factors: strings(&["Market conditions", "Implementation challenges"]),
    }
}

/// Recommends the highest-scored option with medium confidence.
///
/// With no options at all the recommendation names `option-1`, matching
/// the first default option.
pub fn default_recommendation(options: &[DecisionOption]) -> Recommendation {
    let option_id = ImpactScorer::best_option(options)
        .map(|index| options[index].id.clone())
        .unwrap_or_else(|| fixed_option_id("option-1"));

    Recommendation {
        option_id,
        confidence: ConfidenceLevel::Medium,
        reasoning: "Recommendation analysis was unavailable; the highest-scored option was selected. Manual review recommended.".to_string(),
        alternative_considerations: strings(&["Consider all available options carefully"]),
        success_factors: strings(&["Careful implementation", "Stakeholder engagement"]),
        pitfalls: strings(&["Insufficient planning", "Inadequate resources"]),
    }
}

pub fn default_background(title: &str) -> String {
    format!(
        "Background analysis for {}. This decision requires leadership attention due to current circumstances and strategic implications.",
        title
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_scored_and_ordered() {
        let options = default_options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].id.as_str(), "option-1");
        assert_eq!(options[1].title, "Moderate Reform");
        assert!(options.iter().all(|o| o.ai_score().value() > 0.9));
    }

    #[test]
    fn default_recommendation_picks_best_option() {
        let mut options = default_options();
        options[0].success_probability = UnitInterval::new(0.0);
        options[0].risk_level = UnitInterval::new(1.0);
        options[0].time_to_implement_days = 300.0;

        let recommendation = default_recommendation(&options);
        assert_eq!(recommendation.option_id.as_str(), "option-2");
        assert_eq!(recommendation.confidence, ConfidenceLevel::Medium);
    }

    #[test]
    fn default_recommendation_without_options() {
        assert_eq!(default_recommendation(&[]).option_id.as_str(), "option-1");
    }

    #[test]
    fn default_risk_and_cost_benefit_values() {
        let risk = default_risk_assessment();
        assert_eq!(risk.overall_risk, RiskLevel::Medium);
        assert_eq!(risk.political.value(), 0.3);

        let cb = default_cost_benefit();
        assert_eq!(cb.net_benefit, 500_000.0);
        assert_eq!(cb.payback_period, 12.0);
    }

    #[test]
    fn background_mentions_title() {
        assert!(default_background("Water rights").starts_with("Background analysis for Water rights."));
    }
}
