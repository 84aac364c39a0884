//! Conversion of an implemented option's outcomes into simulation effects.

use std::collections::HashSet;

use super::option::DecisionOption;
use super::pending_decision::PendingDecision;
use crate::domain::foundation::{DecisionCategory, EffectId, Timestamp};
use crate::domain::impact::{EffectOp, EffectSource, EffectThresholds, SimulationEffect, TargetSystem};

/// Simulation system a decision of the given category acts on.
pub fn target_system_for(category: DecisionCategory) -> TargetSystem {
    match category {
        DecisionCategory::Economic => TargetSystem::Economy,
        DecisionCategory::Military => TargetSystem::Military,
        DecisionCategory::Diplomatic => TargetSystem::Diplomacy,
        DecisionCategory::Social => TargetSystem::Social,
        DecisionCategory::Technological => TargetSystem::Technology,
        DecisionCategory::Environmental => TargetSystem::Environment,
        DecisionCategory::Legal => TargetSystem::Legal,
        DecisionCategory::Security => TargetSystem::Security,
        DecisionCategory::Infrastructure => TargetSystem::Infrastructure,
        DecisionCategory::Cultural => TargetSystem::Culture,
    }
}

/// One effect per expected outcome of `option`.
///
/// The parameter is the outcome's first metric, or `outcome_{n}` when it
/// has none or the metric was already used by an earlier outcome, so every
/// effect has its own ledger key.
pub fn implementation_effects(
    decision: &PendingDecision,
    option: &DecisionOption,
    thresholds: &EffectThresholds,
    now: Timestamp,
) -> Vec<SimulationEffect> {
    let system = target_system_for(decision.category);
    let mut used = HashSet::new();

    option
        .expected_outcomes
        .iter()
        .enumerate()
        .map(|(index, outcome)| {
            let parameter = outcome
                .metrics
                .first()
                .filter(|metric| !used.contains(*metric))
                .cloned()
                .unwrap_or_else(|| format!("outcome_{}", index + 1));
            used.insert(parameter.clone());

            let value = outcome.weighted_benefit();
            SimulationEffect {
                id: EffectId::new(),
                system,
                parameter,
                op: EffectOp::Increase,
                value,
                duration_ticks: outcome.timeframe.effect_ticks(),
                magnitude: thresholds.classify(value),
                description: outcome.description.clone(),
                source: EffectSource::Decision,
                source_id: decision.id.to_string(),
                applied_at: now,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::option::ExpectedOutcome;
    use crate::domain::decision::pending_decision::tests::sample_decision;
    use crate::domain::foundation::{OutcomeImpact, OutcomeTimeframe, UnitInterval};
    use crate::domain::impact::Magnitude;

    #[test]
    fn one_effect_per_outcome() {
        let decision = sample_decision();
        let option = &decision.options[1];
        let effects = implementation_effects(&decision, option, &EffectThresholds::default(), Timestamp::now());

        assert_eq!(effects.len(), 1);
        let effect = &effects[0];
        assert_eq!(effect.system, TargetSystem::Economy);
        assert_eq!(effect.parameter, "improvement_index");
        assert!((effect.value - 0.35).abs() < 1e-12);
        assert_eq!(effect.magnitude, Magnitude::Major);
        assert_eq!(effect.duration_ticks, Some(15));
        assert_eq!(effect.source, EffectSource::Decision);
        assert_eq!(effect.source_id, decision.id.to_string());
    }

    #[test]
    fn parameters_stay_unique() {
        let decision = sample_decision();
        let mut option = decision.options[0].clone();
        let repeat = ExpectedOutcome {
            description: "Again".to_string(),
            probability: UnitInterval::new(1.0),
            impact: OutcomeImpact::High,
            timeframe: OutcomeTimeframe::Immediate,
            metrics: vec!["stability_index".to_string()],
        };
        option.expected_outcomes.push(repeat);
        option.expected_outcomes.push(ExpectedOutcome { metrics: vec![], ..option.expected_outcomes[0].clone() });

        let effects = implementation_effects(&decision, &option, &EffectThresholds::default(), Timestamp::now());
        let params: Vec<&str> = effects.iter().map(|e| e.parameter.as_str()).collect();
        assert_eq!(params, vec!["stability_index", "outcome_2", "outcome_3"]);
        assert_eq!(effects[1].duration_ticks, None);
    }
}
