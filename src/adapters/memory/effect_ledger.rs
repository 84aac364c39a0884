//! In-memory effect ledger.
//!
//! Entries live in a `HashMap` keyed by [`LedgerKey`] behind a tokio
//! `RwLock`; every upsert takes the write lock, so concurrent submissions
//! for the same key serialize and none is lost.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::foundation::StateMachine;
use crate::domain::impact::{EffectSource, EffectStatus, LedgerKey, SimulationEffect};
use crate::ports::{EffectLedger, LedgerEntry, LedgerError, SubmitOutcome};

#[derive(Debug, Clone, Default)]
pub struct InMemoryEffectLedger {
    entries: Arc<RwLock<HashMap<LedgerKey, LedgerEntry>>>,
    /// Parameters whose writes are rejected, for failure-path tests.
    failing_parameters: Arc<HashSet<String>>,
}

impl InMemoryEffectLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects every write for `parameter` with [`LedgerError::WriteFailed`].
    pub fn with_failing_parameter(mut self, parameter: impl Into<String>) -> Self {
        let mut failing = (*self.failing_parameters).clone();
        failing.insert(parameter.into());
        self.failing_parameters = Arc::new(failing);
        self
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// All entries, ordered by key.
    pub async fn snapshot(&self) -> Vec<LedgerEntry> {
        let entries = self.entries.read().await;
        let mut all: Vec<LedgerEntry> = entries.values().cloned().collect();
        all.sort_by(|a, b| a.key().cmp(&b.key()));
        all
    }
}

fn advance(entry: &mut LedgerEntry, target: EffectStatus) -> Result<(), LedgerError> {
    entry.status = entry
        .status
        .transition_to(target)
        .map_err(|e| LedgerError::write_failed(&entry.key(), e.to_string()))?;
    Ok(())
}

#[async_trait]
impl EffectLedger for InMemoryEffectLedger {
    async fn submit(&self, effect: SimulationEffect) -> Result<SubmitOutcome, LedgerError> {
        let key = effect.ledger_key();
        if self.failing_parameters.contains(&key.parameter) {
            return Err(LedgerError::write_failed(&key, "write rejected"));
        }

        let mut entries = self.entries.write().await;
        match entries.get_mut(&key) {
            Some(existing) if existing.status.is_terminal() => {
                debug!(key = %key, status = ?existing.status, "Ledger entry already finished, submit ignored");
                Ok(SubmitOutcome::Ignored)
            }
            Some(existing) => {
                let revision = existing.revision + 1;
                *existing = LedgerEntry { revision, ..LedgerEntry::new(effect) };
                debug!(key = %key, revision, "Ledger entry replaced");
                Ok(SubmitOutcome::Updated)
            }
            None => {
                entries.insert(key.clone(), LedgerEntry::new(effect));
                debug!(key = %key, "Ledger entry inserted");
                Ok(SubmitOutcome::Inserted)
            }
        }
    }

    async fn query_pending(&self, tick: u64) -> Result<Vec<LedgerEntry>, LedgerError> {
        let entries = self.entries.read().await;
        let mut due: Vec<LedgerEntry> = entries
            .values()
            .filter(|entry| match entry.status {
                EffectStatus::Pending => true,
                EffectStatus::Active => entry.last_applied_tick.map_or(true, |last| last < tick),
                EffectStatus::Completed | EffectStatus::Cancelled => false,
            })
            .cloned()
            .collect();
        due.sort_by(|a, b| a.key().cmp(&b.key()));
        Ok(due)
    }

    async fn record_application(&self, key: &LedgerKey, tick: u64) -> Result<Option<LedgerEntry>, LedgerError> {
        let mut entries = self.entries.write().await;
        let Some(entry) = entries.get_mut(key) else {
            return Ok(None);
        };

        let already_applied = entry.last_applied_tick.is_some_and(|last| last >= tick);
        if entry.status.is_terminal() || already_applied {
            return Ok(Some(entry.clone()));
        }

        if entry.status == EffectStatus::Pending {
            advance(entry, EffectStatus::Active)?;
        }
        entry.last_applied_tick = Some(tick);
        entry.remaining_ticks = entry.remaining_ticks.map(|n| n.saturating_sub(1));
        if entry.remaining_ticks.map_or(true, |n| n == 0) {
            advance(entry, EffectStatus::Completed)?;
        }

        debug!(key = %key, tick, status = ?entry.status, remaining = ?entry.remaining_ticks, "Effect applied");
        Ok(Some(entry.clone()))
    }

    async fn cancel(&self, key: &LedgerKey) -> Result<bool, LedgerError> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(key) {
            Some(entry) if !entry.status.is_terminal() => {
                advance(entry, EffectStatus::Cancelled)?;
                debug!(key = %key, "Ledger entry cancelled");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn cancel_source(&self, source: EffectSource, source_id: &str) -> Result<usize, LedgerError> {
        let mut entries = self.entries.write().await;
        let mut cancelled = 0;
        for entry in entries
            .values_mut()
            .filter(|e| e.effect.source == source && e.effect.source_id == source_id)
            .filter(|e| !e.status.is_terminal())
        {
            advance(entry, EffectStatus::Cancelled)?;
            cancelled += 1;
        }
        debug!(source = %source.as_str(), source_id, cancelled, "Source effects cancelled");
        Ok(cancelled)
    }

    async fn get(&self, key: &LedgerKey) -> Result<Option<LedgerEntry>, LedgerError> {
        Ok(self.entries.read().await.get(key).cloned())
    }
}
