//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the engine and the outside world. Adapters implement these ports.
//!
//! - `ContentProvider` - generative-content provider
//! - `EffectLedger` - idempotent effect store read by the simulation tick
//! - `DecisionRepository` - pending decision persistence

mod content_provider;
mod decision_repository;
mod effect_ledger;

pub use content_provider::{
    ContentProvider, GeneratedContent, GenerationPrompt, GenerationPurpose, ProviderError,
    ProviderOutcome,
};
pub use decision_repository::DecisionRepository;
pub use effect_ledger::{EffectLedger, LedgerEntry, LedgerError, SubmitOutcome};
