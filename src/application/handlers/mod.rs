//! Command and query handlers for the impact engine.

mod effect_dispatcher;
mod generate_decision;
mod get_decision;
mod implement_decision;
pub mod prompts;
mod provider_gateway;
mod synthesize_speech_effects;
mod update_decision_status;

#[cfg(test)]
pub(crate) mod test_support;

pub use effect_dispatcher::{BatchReport, DroppedEffect, EffectDispatcher};
pub use generate_decision::{
    FallbackNotice, GenerateDecisionCommand, GenerateDecisionHandler, GenerateDecisionResult,
};
pub use get_decision::{GetDecisionHandler, GetDecisionQuery};
pub use implement_decision::{ImplementDecisionCommand, ImplementDecisionHandler, ImplementDecisionResult};
pub use provider_gateway::{NormalizedOutcome, ProviderGateway};
pub use synthesize_speech_effects::{
    SynthesizeSpeechEffectsCommand, SynthesizeSpeechEffectsHandler, SynthesizeSpeechEffectsResult,
};
pub use update_decision_status::{
    UpdateDecisionStatusCommand, UpdateDecisionStatusHandler, UpdateDecisionStatusResult,
};
