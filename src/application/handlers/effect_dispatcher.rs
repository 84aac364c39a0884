//! Partial-failure tolerant submission of effect batches to the ledger.

use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::impact::{LedgerKey, SimulationEffect};
use crate::ports::{EffectLedger, SubmitOutcome};

/// An effect the ledger refused; the rest of its batch still went through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppedEffect {
    pub key: LedgerKey,
    pub reason: String,
}

/// Per-effect results of one batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub submitted: Vec<(LedgerKey, SubmitOutcome)>,
    pub dropped: Vec<DroppedEffect>,
}

impl BatchReport {
    pub fn inserted(&self) -> usize {
        self.count(SubmitOutcome::Inserted)
    }

    pub fn updated(&self) -> usize {
        self.count(SubmitOutcome::Updated)
    }

    /// Effects whose ledger entry had already completed or been cancelled.
    pub fn ignored(&self) -> usize {
        self.count(SubmitOutcome::Ignored)
    }

    /// True when no effect was dropped.
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }

    fn count(&self, outcome: SubmitOutcome) -> usize {
        self.submitted.iter().filter(|(_, o)| *o == outcome).count()
    }
}

/// Submits effects concurrently; a failed write drops only that effect.
#[derive(Clone)]
pub struct EffectDispatcher {
    ledger: Arc<dyn EffectLedger>,
}

impl EffectDispatcher {
    pub fn new(ledger: Arc<dyn EffectLedger>) -> Self {
        Self { ledger }
    }

    pub async fn dispatch(&self, effects: &[SimulationEffect]) -> BatchReport {
        let submissions = effects.iter().cloned().map(|effect| {
            let ledger = Arc::clone(&self.ledger);
            async move {
                let key = effect.ledger_key();
                (key, ledger.submit(effect).await)
            }
        });

        let mut report = BatchReport::default();
        for (key, result) in join_all(submissions).await {
            match result {
                Ok(outcome) => report.submitted.push((key, outcome)),
                Err(e) => {
                    error!(key = %key, error = %e, "Ledger write failed, effect dropped");
                    report.dropped.push(DroppedEffect { key, reason: e.to_string() });
                }
            }
        }

        info!(
            inserted = report.inserted(),
            updated = report.updated(),
            ignored = report.ignored(),
            dropped = report.dropped.len(),
            "Effect batch dispatched"
        );
        report
    }

    /// Cancels the live entries under `keys`, returning how many were
    /// cancelled. Unknown or finished keys are skipped; a failed cancel is
    /// logged and leaves that entry as it was.
    pub async fn withdraw(&self, keys: &[LedgerKey]) -> usize {
        let cancels = keys.iter().map(|key| {
            let ledger = Arc::clone(&self.ledger);
            async move { (key, ledger.cancel(key).await) }
        });

        let mut withdrawn = 0;
        for (key, result) in join_all(cancels).await {
            match result {
                Ok(true) => withdrawn += 1,
                Ok(false) => {}
                Err(e) => warn!(key = %key, error = %e, "Failed to withdraw ledger entry"),
            }
        }
        withdrawn
    }
}
