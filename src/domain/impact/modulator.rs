//! Delivery/context modulation applied before effect synthesis.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::impact_vector::ImpactDimension;
use super::knobs::{CompositeFactors, KnobSet};
use crate::domain::foundation::DeliveryMode;

/// Scaling applied to morale and approval effects for a delivery mode.
///
/// Strictly increasing with authenticity of delivery.
pub fn delivery_multiplier(mode: DeliveryMode) -> f64 {
    match mode {
        DeliveryMode::Avatar => 1.0,
        DeliveryMode::Teleprompter => 1.2,
        DeliveryMode::OffTheCuff => 1.5,
    }
}

/// Whether a dimension is scaled by the delivery multiplier.
///
/// Only morale and approval are; the remaining dimensions pass through
/// unscaled.
pub fn is_delivery_scaled(dimension: ImpactDimension) -> bool {
    matches!(dimension, ImpactDimension::Morale | ImpactDimension::Approval)
}

/// Inputs the synthesizer needs beyond the impact vector itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModulationContext {
    pub delivery_mode: DeliveryMode,
    pub delivery_multiplier: f64,
    /// Mean knob value per group. Available for scaling but never gates
    /// emission.
    pub knob_factors: CompositeFactors,
}

impl ModulationContext {
    /// Context with no knob information.
    pub fn for_delivery(mode: DeliveryMode) -> Self {
        Self {
            delivery_mode: mode,
            delivery_multiplier: delivery_multiplier(mode),
            knob_factors: CompositeFactors::default(),
        }
    }

    /// Modulated effect value for a raw dimension value.
    pub fn modulate(&self, dimension: ImpactDimension, raw: f64) -> f64 {
        if is_delivery_scaled(dimension) {
            raw.abs() * self.delivery_multiplier
        } else {
            raw.abs()
        }
    }
}

/// Builds modulation contexts from a delivery mode and the current knobs.
#[derive(Debug, Clone, Default)]
pub struct DeliveryModulator {
    knobs: KnobSet,
}

impl DeliveryModulator {
    pub fn new(knobs: KnobSet) -> Self {
        Self { knobs }
    }

    pub fn knobs(&self) -> &KnobSet {
        &self.knobs
    }

    pub fn context(&self, mode: DeliveryMode) -> ModulationContext {
        let knob_factors = self.knobs.composites();
        for (group, factor) in knob_factors.iter() {
            debug!(group = ?group, factor = %factor, "Composite knob factor");
        }
        ModulationContext {
            delivery_mode: mode,
            delivery_multiplier: delivery_multiplier(mode),
            knob_factors,
        }
    }
}
