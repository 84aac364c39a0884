//! Cost-benefit analysis of the preferred option.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{ConfidenceLevel, UnitInterval};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostItem {
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub timeframe: String,
    pub certainty: UnitInterval,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitItem {
    pub category: String,
    pub description: String,
    pub value: f64,
    pub timeframe: String,
    pub certainty: UnitInterval,
    pub quantifiable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBenefitAnalysis {
    pub net_benefit: f64,
    pub roi: f64,
    /// Months until the investment is recovered.
    pub payback_period: f64,
    pub costs: Vec<CostItem>,
    pub benefits: Vec<BenefitItem>,
    /// Months until cumulative benefit matches cumulative cost.
    pub break_even_point: f64,
    pub sensitivity_analysis: BTreeMap<String, serde_json::Value>,
    pub assumptions: Vec<String>,
    pub confidence: ConfidenceLevel,
    pub uncertainty_factors: Vec<String>,
}

impl CostBenefitAnalysis {
    pub fn total_cost(&self) -> f64 {
        self.costs.iter().map(|c| c.amount).sum()
    }

    /// Sum of benefit values discounted by their certainty.
    pub fn expected_benefit(&self) -> f64 {
        self.benefits.iter().map(|b| b.value * b.certainty.value()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_over_line_items() {
        let analysis = CostBenefitAnalysis {
            net_benefit: 0.0,
            roi: 0.0,
            payback_period: 12.0,
            costs: vec![
                CostItem {
                    category: "Implementation".to_string(),
                    description: String::new(),
                    amount: 300.0,
                    timeframe: "12 months".to_string(),
                    certainty: UnitInterval::new(0.8),
                },
                CostItem {
                    category: "Staffing".to_string(),
                    description: String::new(),
                    amount: 200.0,
                    timeframe: "12 months".to_string(),
                    certainty: UnitInterval::new(0.8),
                },
            ],
            benefits: vec![BenefitItem {
                category: "Operational".to_string(),
                description: String::new(),
                value: 1000.0,
                timeframe: "12 months".to_string(),
                certainty: UnitInterval::new(0.5),
                quantifiable: true,
            }],
            break_even_point: 12.0,
            sensitivity_analysis: BTreeMap::new(),
            assumptions: vec![],
            confidence: ConfidenceLevel::Medium,
            uncertainty_factors: vec![],
        };
        assert_eq!(analysis.total_cost(), 500.0);
        assert_eq!(analysis.expected_benefit(), 500.0);
    }
}
