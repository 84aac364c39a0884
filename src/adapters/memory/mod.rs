//! In-memory adapters for tests, development and the CLI.

mod content_provider;
mod decision_repository;
mod effect_ledger;

pub use content_provider::{MockContentProvider, MockResponse};
pub use decision_repository::InMemoryDecisionRepository;
pub use effect_ledger::InMemoryEffectLedger;
