//! Effect synthesizer - turns an ImpactVector into SimulationEffects.
//!
//! Each dimension above the noise floor maps to exactly one
//! `(system, parameter)` pair. Diplomatic standing has no target and is
//! never emitted.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::effect::{
    EffectOp, EffectSource, EffectThresholds, SimulationEffect, TargetSystem,
};
use super::impact_vector::{ImpactDimension, ImpactVector};
use super::modulator::ModulationContext;
use crate::domain::foundation::{EffectId, Timestamp};

/// Duration modifier family for an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationCategory {
    Morale,
    Approval,
    Economic,
    Military,
    Social,
    Policy,
}

impl DurationCategory {
    pub fn modifier(&self) -> f64 {
        match self {
            DurationCategory::Morale => 1.5,
            DurationCategory::Approval => 2.0,
            DurationCategory::Economic => 1.2,
            DurationCategory::Military => 0.8,
            DurationCategory::Social => 1.8,
            DurationCategory::Policy => 3.0,
        }
    }

    /// Ticks an effect of the given raw magnitude lasts.
    pub fn ticks_for(&self, raw: f64) -> u32 {
        let ticks = raw.abs() * 10.0 * self.modifier();
        // Absorb float noise so that e.g. 0.2 * 10 * 2.0 stays at 4.
        (ticks - 1e-9).ceil().max(0.0) as u32
    }
}

struct DimensionTarget {
    system: TargetSystem,
    parameter: &'static str,
    duration: DurationCategory,
    phrase: &'static str,
}

fn target_for(dimension: ImpactDimension) -> Option<DimensionTarget> {
    let target = match dimension {
        ImpactDimension::Morale => DimensionTarget {
            system: TargetSystem::Population,
            parameter: "morale",
            duration: DurationCategory::Morale,
            phrase: "public morale",
        },
        ImpactDimension::Approval => DimensionTarget {
            system: TargetSystem::Politics,
            parameter: "leader_approval",
            duration: DurationCategory::Approval,
            phrase: "approval ratings",
        },
        ImpactDimension::EconomicConfidence => DimensionTarget {
            system: TargetSystem::Economy,
            parameter: "confidence",
            duration: DurationCategory::Economic,
            phrase: "economic confidence",
        },
        ImpactDimension::MilitaryReadiness => DimensionTarget {
            system: TargetSystem::Military,
            parameter: "readiness",
            duration: DurationCategory::Military,
            phrase: "military readiness",
        },
        ImpactDimension::SocialCohesion => DimensionTarget {
            system: TargetSystem::Social,
            parameter: "cohesion",
            duration: DurationCategory::Social,
            phrase: "social cohesion",
        },
        ImpactDimension::DiplomaticStanding => return None,
    };
    Some(target)
}

/// Result of a synthesis pass.
#[derive(Debug, Clone, Default)]
pub struct SynthesisOutput {
    pub effects: Vec<SimulationEffect>,
    /// Parameters whose impact was at or below the noise floor.
    pub suppressed: Vec<String>,
}

/// Converts impact vectors into discrete, targeted effects.
#[derive(Debug, Clone, Default)]
pub struct EffectSynthesizer {
    thresholds: EffectThresholds,
}

impl EffectSynthesizer {
    pub fn new(thresholds: EffectThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &EffectThresholds {
        &self.thresholds
    }

    /// True when a raw impact value clears the noise floor.
    pub fn emits(&self, raw: f64) -> bool {
        raw.abs() > self.thresholds.noise_floor
    }

    /// Synthesizes effects for one artifact.
    ///
    /// Pure: the same inputs always yield the same effects apart from the
    /// generated effect identifiers.
    pub fn synthesize(
        &self,
        impact: &ImpactVector,
        context: &ModulationContext,
        source: EffectSource,
        source_id: &str,
        now: Timestamp,
    ) -> SynthesisOutput {
        let mut output = SynthesisOutput::default();

        for dimension in ImpactDimension::all() {
            let raw = impact.get(*dimension).value();
            let Some(target) = target_for(*dimension) else {
                continue;
            };
            if !self.emits(raw) {
                output.suppressed.push(target.parameter.to_string());
                continue;
            }
            let verb = if raw > 0.0 { "raised" } else { "lowered" };
            output.effects.push(SimulationEffect {
                id: EffectId::new(),
                system: target.system,
                parameter: target.parameter.to_string(),
                op: EffectOp::from_sign(raw),
                value: context.modulate(*dimension, raw),
                duration_ticks: Some(target.duration.ticks_for(raw)),
                magnitude: self.thresholds.classify(raw),
                description: format!(
                    "Leader {} {} {} ({} delivery)",
                    source.as_str(),
                    verb,
                    target.phrase,
                    context.delivery_mode
                ),
                source,
                source_id: source_id.to_string(),
                applied_at: now,
            });
        }

        for (policy, support) in &impact.policy_support {
            let raw = support.value();
            let parameter = format!("{}_support", policy);
            if !self.emits(raw) {
                output.suppressed.push(parameter);
                continue;
            }
            output.effects.push(SimulationEffect {
                id: EffectId::new(),
                system: TargetSystem::Policy,
                parameter,
                op: EffectOp::from_sign(raw),
                value: raw.abs(),
                duration_ticks: Some(DurationCategory::Policy.ticks_for(raw)),
                magnitude: self.thresholds.classify(raw),
                description: format!("Leader {} affected support for {}", source.as_str(), policy),
                source,
                source_id: source_id.to_string(),
                applied_at: now,
            });
        }

        debug!(
            source = source.as_str(),
            source_id = %source_id,
            emitted = output.effects.len(),
            suppressed = output.suppressed.len(),
            "Synthesized effects"
        );
        output
    }
}
