//! Impact scoring - pure numeric formulas for options, risks and priority.
//!
//! Every function here is side-effect free and safe to evaluate
//! concurrently across independent options within one request.

use serde::{Deserialize, Serialize};

use super::option::DecisionOption;
use crate::domain::foundation::{
    clamp_or, DecisionCategory, RiskLevel, UnitInterval, UrgencyLevel,
};

/// Upper bound of decision priority.
pub const MAX_PRIORITY: u8 = 10;

/// Base priority before urgency, risk and category weights are added.
pub const BASE_PRIORITY: u8 = 3;

/// Cap on the cost-efficiency contribution to an option score.
const COST_EFFICIENCY_CAP: f64 = 0.3;

/// Overall threat level reported by a briefing's threat assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThreatLevel {
    Low,
    #[default]
    Moderate,
    High,
    Critical,
}

/// Stateless scorer.
pub struct ImpactScorer;

impl ImpactScorer {
    /// Score an option from its probability, risk, cost efficiency and
    /// implementation speed.
    ///
    /// ```text
    /// clamp01(0.5 + p×0.3 + (1−risk)×0.2 + costEfficiency + speed)
    /// costEfficiency = min(0.3, Σ(p_o × w_o) / max(1, cost/1e6) × 0.1)
    /// speed          = (1 − days/365) × 0.2
    /// ```
    pub fn option_score(option: &DecisionOption) -> UnitInterval {
        let score = 0.5
            + option.success_probability.value() * 0.3
            + option.risk_level.complement() * 0.2
            + Self::cost_efficiency(option)
            + Self::implementation_speed(option.time_to_implement_days);
        UnitInterval::new(clamp_or(score, 0.0, 1.0, 0.0))
    }

    fn cost_efficiency(option: &DecisionOption) -> f64 {
        let cost_millions = (option.cost_estimate / 1e6).max(1.0);
        (option.total_weighted_benefit() / cost_millions * 0.1).min(COST_EFFICIENCY_CAP)
    }

    fn implementation_speed(days: f64) -> f64 {
        (1.0 - days.max(0.0) / 365.0) * 0.2
    }

    /// Decision priority in `BASE_PRIORITY..=MAX_PRIORITY`.
    pub fn decision_priority(
        urgency: UrgencyLevel,
        overall_risk: RiskLevel,
        category: DecisionCategory,
    ) -> u8 {
        let raw = BASE_PRIORITY
            + urgency.priority_weight()
            + overall_risk.priority_weight()
            + category.priority_weight();
        raw.min(MAX_PRIORITY)
    }

    /// `probability × impact` of already-normalized inputs.
    pub fn risk_score(probability: UnitInterval, impact: UnitInterval) -> UnitInterval {
        UnitInterval::new(probability.value() * impact.value())
    }

    /// Priority of a briefing from its urgent matters and threat level.
    pub fn briefing_priority(matters: &[UrgencyLevel], threat: ThreatLevel) -> UrgencyLevel {
        let any = |level: UrgencyLevel| matters.iter().any(|m| *m == level);

        if any(UrgencyLevel::Emergency) {
            UrgencyLevel::Emergency
        } else if any(UrgencyLevel::Critical) || threat == ThreatLevel::Critical {
            UrgencyLevel::Critical
        } else if any(UrgencyLevel::Urgent) || threat == ThreatLevel::High {
            UrgencyLevel::Urgent
        } else if !matters.is_empty() {
            UrgencyLevel::Important
        } else {
            UrgencyLevel::Routine
        }
    }

    /// Index of the best-scoring option; the first wins ties.
    pub fn best_option(options: &[DecisionOption]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, option) in options.iter().enumerate() {
            let score = option.ai_score().value();
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((index, score)),
            }
        }
        best.map(|(index, _)| index)
    }
}
