//! Risk items and the risk assessment of a decision.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::scoring::ImpactScorer;
use crate::domain::foundation::{RiskId, RiskLevel, UnitInterval};

/// A single identified risk.
///
/// The risk score is always `probability × impact`; a `riskScore` in
/// deserialized input is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskItem {
    pub id: RiskId,
    pub description: String,
    pub category: String,
    pub probability: UnitInterval,
    pub impact: UnitInterval,
    pub mitigation: Vec<String>,
    pub contingency: Vec<String>,
    pub status: String,
}

impl RiskItem {
    pub fn new(
        id: RiskId,
        description: impl Into<String>,
        category: impl Into<String>,
        probability: UnitInterval,
        impact: UnitInterval,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            category: category.into(),
            probability,
            impact,
            mitigation: Vec::new(),
            contingency: Vec::new(),
            status: "identified".to_string(),
        }
    }

    pub fn risk_score(&self) -> UnitInterval {
        ImpactScorer::risk_score(self.probability, self.impact)
    }
}

impl Serialize for RiskItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RiskItem", 9)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("probability", &self.probability)?;
        state.serialize_field("impact", &self.impact)?;
        state.serialize_field("riskScore", &self.risk_score())?;
        state.serialize_field("mitigation", &self.mitigation)?;
        state.serialize_field("contingency", &self.contingency)?;
        state.serialize_field("status", &self.status)?;
        state.end()
    }
}

/// Aggregate risk picture across all options of a decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub overall_risk: RiskLevel,
    pub risks: Vec<RiskItem>,
    pub implementation: UnitInterval,
    pub financial: UnitInterval,
    pub political: UnitInterval,
    pub operational: UnitInterval,
    pub strategic: UnitInterval,
    pub mitigation_strategies: Vec<String>,
    pub contingency_plans: Vec<String>,
    pub risk_indicators: Vec<String>,
    pub review_frequency: String,
}

impl RiskAssessment {
    /// The highest-scoring risk item, if any.
    pub fn top_risk(&self) -> Option<&RiskItem> {
        self.risks
            .iter()
            .max_by(|a, b| a.risk_score().value().total_cmp(&b.risk_score().value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, p: f64, i: f64) -> RiskItem {
        RiskItem::new(RiskId::new(id).unwrap(), "risk", "operational", p.into(), i.into())
    }

    #[test]
    fn score_is_product_of_probability_and_impact() {
        let risk = item("r1", 0.4, 0.5);
        assert!((risk.risk_score().value() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn score_tracks_field_changes() {
        let mut risk = item("r1", 0.4, 0.5);
        risk.probability = UnitInterval::new(1.0);
        assert_eq!(risk.risk_score().value(), 0.5);
    }

    #[test]
    fn supplied_score_is_ignored_on_deserialize() {
        let risk: RiskItem = serde_json::from_value(serde_json::json!({
            "id": "r7",
            "description": "Drought",
            "category": "environmental",
            "probability": 0.4,
            "impact": 0.5,
            "riskScore": 0.99,
            "mitigation": [],
            "contingency": [],
            "status": "identified"
        }))
        .unwrap();

        assert!((risk.risk_score().value() - 0.2).abs() < 1e-12);
        let json = serde_json::to_value(&risk).unwrap();
        assert!((json["riskScore"].as_f64().unwrap() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn top_risk_picks_highest_score() {
        let assessment = RiskAssessment {
            overall_risk: RiskLevel::High,
            risks: vec![item("r1", 0.2, 0.2), item("r2", 0.9, 0.8), item("r3", 0.5, 0.5)],
            implementation: UnitInterval::new(0.3),
            financial: UnitInterval::new(0.3),
            political: UnitInterval::new(0.3),
            operational: UnitInterval::new(0.3),
            strategic: UnitInterval::new(0.3),
            mitigation_strategies: vec![],
            contingency_plans: vec![],
            risk_indicators: vec![],
            review_frequency: "monthly".to_string(),
        };
        assert_eq!(assessment.top_risk().unwrap().id.as_str(), "r2");
    }
}
