//! Effect ledger port - the boundary the simulation tick consumer reads.
//!
//! # Contract
//!
//! - `submit` is an upsert keyed by `(source, source_id, parameter)`;
//!   resubmitting replaces a pending or active entry instead of adding a
//!   second one. A completed or cancelled entry is left untouched.
//! - `record_application` is idempotent per tick: applying the same tick
//!   twice, or touching a completed/cancelled entry, changes nothing.
//! - Implementations must tolerate concurrent submissions without lost
//!   updates.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::impact::{EffectSource, EffectStatus, LedgerKey, SimulationEffect};

/// A ledger row: the effect plus its application state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub effect: SimulationEffect,
    pub status: EffectStatus,
    /// Ticks left before the entry completes; `None` for instantaneous effects.
    pub remaining_ticks: Option<u32>,
    pub last_applied_tick: Option<u64>,
    /// Incremented on every upsert.
    pub revision: u32,
}

impl LedgerEntry {
    pub fn new(effect: SimulationEffect) -> Self {
        Self {
            remaining_ticks: effect.duration_ticks,
            effect,
            status: EffectStatus::Pending,
            last_applied_tick: None,
            revision: 1,
        }
    }

    pub fn key(&self) -> LedgerKey {
        self.effect.ledger_key()
    }
}

/// What a submit did to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    Inserted,
    Updated,
    /// The key already reached `completed` or `cancelled`; nothing changed.
    Ignored,
}

/// Ledger failures. A failed write drops that single effect only.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger write failed for {key}: {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

impl LedgerError {
    pub fn write_failed(key: &LedgerKey, reason: impl Into<String>) -> Self {
        Self::WriteFailed { key: key.to_string(), reason: reason.into() }
    }
}

/// Port for the effect ledger.
#[async_trait]
pub trait EffectLedger: Send + Sync {
    /// Upserts an effect by its ledger key.
    async fn submit(&self, effect: SimulationEffect) -> Result<SubmitOutcome, LedgerError>;

    /// Entries a tick should apply: pending ones plus active ones not yet
    /// applied at `tick`.
    async fn query_pending(&self, tick: u64) -> Result<Vec<LedgerEntry>, LedgerError>;

    /// Records that `tick` applied the entry.
    ///
    /// Returns the updated entry, or `None` if the key is unknown.
    async fn record_application(&self, key: &LedgerKey, tick: u64) -> Result<Option<LedgerEntry>, LedgerError>;

    /// Cancels one non-terminal entry.
    ///
    /// Returns `false` if the key is unknown or already terminal.
    async fn cancel(&self, key: &LedgerKey) -> Result<bool, LedgerError>;

    /// Cancels every non-terminal entry produced by one source record.
    ///
    /// Returns the number of entries cancelled.
    async fn cancel_source(&self, source: EffectSource, source_id: &str) -> Result<usize, LedgerError>;

    /// Looks up one entry. Returns `None` if not found.
    async fn get(&self, key: &LedgerKey) -> Result<Option<LedgerEntry>, LedgerError>;
}
