//! Decision repository port.
//!
//! Persists `PendingDecision` aggregates. Storage technology is up to the
//! adapter.

use async_trait::async_trait;

use crate::domain::decision::PendingDecision;
use crate::domain::foundation::{DecisionId, DomainError};

/// Repository port for pending decision persistence.
#[async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Save a new decision.
    ///
    /// # Errors
    ///
    /// - `PersistenceFailure` on storage failure
    async fn save(&self, decision: &PendingDecision) -> Result<(), DomainError>;

    /// Update an existing decision.
    ///
    /// # Errors
    ///
    /// - `DecisionNotFound` if the decision doesn't exist
    /// - `PersistenceFailure` on storage failure
    async fn update(&self, decision: &PendingDecision) -> Result<(), DomainError>;

    /// Find a decision by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<PendingDecision>, DomainError>;
}
