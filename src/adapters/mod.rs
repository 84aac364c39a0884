//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - in-memory ledger and repository, scripted content provider

pub mod memory;

pub use memory::{InMemoryDecisionRepository, InMemoryEffectLedger, MockContentProvider, MockResponse};
