//! Decision options and the outcomes and resources they involve.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use super::scoring::ImpactScorer;
use crate::domain::foundation::{OptionId, OutcomeImpact, OutcomeTimeframe, RiskLevel, UnitInterval};

/// An outcome an option is expected to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedOutcome {
    pub description: String,
    pub probability: UnitInterval,
    pub impact: OutcomeImpact,
    pub timeframe: OutcomeTimeframe,
    pub metrics: Vec<String>,
}

impl ExpectedOutcome {
    /// Probability weighted by qualitative impact.
    pub fn weighted_benefit(&self) -> f64 {
        self.probability.value() * self.impact.weight()
    }
}

/// A resource an option needs in order to be carried out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequirement {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub description: String,
    pub quantity: f64,
    pub unit: String,
    pub availability: UnitInterval,
    pub criticality: RiskLevel,
}

/// One course of action for a pending decision.
///
/// # Invariants
///
/// - `success_probability` and `risk_level` lie in `[0, 1]`
/// - `cost_estimate` and `time_to_implement_days` are non-negative
/// - `ai_score` is computed from the other fields on every read and on
///   serialization; an `aiScore` in deserialized input is ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOption {
    pub id: OptionId,
    pub title: String,
    pub description: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub risks: Vec<String>,
    pub opportunities: Vec<String>,
    pub expected_outcomes: Vec<ExpectedOutcome>,
    pub resource_requirements: Vec<ResourceRequirement>,
    pub success_probability: UnitInterval,
    pub risk_level: UnitInterval,
    pub cost_estimate: f64,
    #[serde(rename = "timeToImplement")]
    pub time_to_implement_days: f64,
    pub support_level: BTreeMap<String, UnitInterval>,
    pub opposition: Vec<String>,
    pub ai_reasoning: String,
}

impl DecisionOption {
    /// Creates an option with neutral defaults.
    pub fn new(id: OptionId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            pros: Vec::new(),
            cons: Vec::new(),
            risks: Vec::new(),
            opportunities: Vec::new(),
            expected_outcomes: Vec::new(),
            resource_requirements: Vec::new(),
            success_probability: UnitInterval::new(0.5),
            risk_level: UnitInterval::new(0.3),
            cost_estimate: 0.0,
            time_to_implement_days: 30.0,
            support_level: BTreeMap::new(),
            opposition: Vec::new(),
            ai_reasoning: "Option analysis completed".to_string(),
        }
    }

    /// Floors negative cost and time estimates at zero.
    pub fn normalized(mut self) -> Self {
        self.cost_estimate = self.cost_estimate.max(0.0);
        self.time_to_implement_days = self.time_to_implement_days.max(0.0);
        self
    }

    pub fn ai_score(&self) -> UnitInterval {
        ImpactScorer::option_score(self)
    }

    /// Sum of probability × impact weight over all expected outcomes.
    pub fn total_weighted_benefit(&self) -> f64 {
        self.expected_outcomes.iter().map(ExpectedOutcome::weighted_benefit).sum()
    }
}

impl Serialize for DecisionOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DecisionOption", 17)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("pros", &self.pros)?;
        state.serialize_field("cons", &self.cons)?;
        state.serialize_field("risks", &self.risks)?;
        state.serialize_field("opportunities", &self.opportunities)?;
        state.serialize_field("expectedOutcomes", &self.expected_outcomes)?;
        state.serialize_field("resourceRequirements", &self.resource_requirements)?;
        state.serialize_field("successProbability", &self.success_probability)?;
        state.serialize_field("riskLevel", &self.risk_level)?;
        state.serialize_field("costEstimate", &self.cost_estimate)?;
        state.serialize_field("timeToImplement", &self.time_to_implement_days)?;
        state.serialize_field("supportLevel", &self.support_level)?;
        state.serialize_field("opposition", &self.opposition)?;
        state.serialize_field("aiScore", &self.ai_score())?;
        state.serialize_field("aiReasoning", &self.ai_reasoning)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option() -> DecisionOption {
        DecisionOption::new(OptionId::new("opt-a").unwrap(), "Build dams", "Flood control")
    }

    #[test]
    fn new_option_is_scored() {
        let opt = option();
        // 0.5 + 0.15 + 0.14 + 0 + (1 - 30/365) * 0.2
        let expected: f64 = 0.5 + 0.15 + 0.14 + (1.0 - 30.0 / 365.0) * 0.2;
        assert!((opt.ai_score().value() - expected.min(1.0)).abs() < 1e-9);
    }

    #[test]
    fn score_tracks_field_changes() {
        let mut opt = option();
        opt.success_probability = UnitInterval::new(0.0);
        opt.risk_level = UnitInterval::new(1.0);
        opt.time_to_implement_days = 365.0;
        assert!((opt.ai_score().value() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn normalized_floors_negative_inputs() {
        let mut opt = option();
        opt.cost_estimate = -50.0;
        opt.time_to_implement_days = -3.0;
        let opt = opt.normalized();
        assert_eq!(opt.cost_estimate, 0.0);
        assert_eq!(opt.time_to_implement_days, 0.0);
    }

    #[test]
    fn deserialized_score_is_recomputed() {
        let mut json = serde_json::to_value(option()).unwrap();
        json["successProbability"] = serde_json::json!(1.0);
        json["riskLevel"] = serde_json::json!(0.0);
        json["timeToImplement"] = serde_json::json!(0.0);
        json["aiScore"] = serde_json::json!(0.01);

        let opt: DecisionOption = serde_json::from_value(json).unwrap();
        assert_eq!(opt.ai_score().value(), 1.0);
        assert_eq!(serde_json::to_value(&opt).unwrap()["aiScore"], 1.0);
    }

    #[test]
    fn weighted_benefit_sums_outcomes() {
        let mut opt = option();
        opt.expected_outcomes = vec![
            ExpectedOutcome {
                description: "a".to_string(),
                probability: UnitInterval::new(0.8),
                impact: OutcomeImpact::High,
                timeframe: OutcomeTimeframe::ShortTerm,
                metrics: vec![],
            },
            ExpectedOutcome {
                description: "b".to_string(),
                probability: UnitInterval::new(0.5),
                impact: OutcomeImpact::Low,
                timeframe: OutcomeTimeframe::LongTerm,
                metrics: vec![],
            },
        ];
        assert!((opt.total_weighted_benefit() - 0.9).abs() < 1e-9);
    }

    #[test]
    fn serializes_time_to_implement_in_days() {
        let opt = option();
        let json = serde_json::to_value(&opt).unwrap();
        assert_eq!(json["timeToImplement"], 30.0);
        assert_eq!(json["aiScore"], opt.ai_score().value());
        assert_eq!(json["expectedOutcomes"], serde_json::json!([]));
    }
}
