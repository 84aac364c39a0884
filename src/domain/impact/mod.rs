//! Impact module - from impact vectors to simulation effects.
//!
//! The pipeline runs modulator then synthesizer:
//!
//! ```text
//! ImpactVector ──▶ DeliveryModulator ──▶ EffectSynthesizer ──▶ SimulationEffect*
//!                  (mode, knobs)         (noise floor, magnitude, duration)
//! ```

mod effect;
mod impact_vector;
mod knobs;
mod modulator;
mod speech_defaults;
mod synthesizer;

pub use effect::{
    EffectOp, EffectSource, EffectStatus, EffectThresholds, LedgerKey, Magnitude, SimulationEffect,
    TargetSystem,
};
pub use impact_vector::{ImpactDimension, ImpactVector};
pub use knobs::{CompositeFactors, Knob, KnobGroup, KnobSet, DEFAULT_KNOBS};
pub use modulator::{delivery_multiplier, is_delivery_scaled, DeliveryModulator, ModulationContext};
pub use speech_defaults::{default_speech_impact, speech_priority};
pub use synthesizer::{DurationCategory, EffectSynthesizer, SynthesisOutput};
