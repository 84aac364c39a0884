//! Application layer - Commands, Queries, and Handlers.
//!
//! Handlers orchestrate the pure domain pipeline and the ports. Command
//! handlers (generate, synthesize, update status, implement) write; the
//! query handler reads.

pub mod handlers;

pub use handlers::{
    BatchReport, DroppedEffect, EffectDispatcher, FallbackNotice, GenerateDecisionCommand,
    GenerateDecisionHandler, GenerateDecisionResult, GetDecisionHandler, GetDecisionQuery,
    ImplementDecisionCommand, ImplementDecisionHandler, ImplementDecisionResult,
    NormalizedOutcome, ProviderGateway, SynthesizeSpeechEffectsCommand,
    SynthesizeSpeechEffectsHandler, SynthesizeSpeechEffectsResult, UpdateDecisionStatusCommand,
    UpdateDecisionStatusHandler, UpdateDecisionStatusResult,
};
