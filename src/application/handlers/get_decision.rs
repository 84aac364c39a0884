//! GetDecisionHandler - Query handler for retrieving a pending decision.

use std::sync::Arc;

use crate::domain::decision::PendingDecision;
use crate::domain::foundation::{DecisionId, DomainError};
use crate::ports::DecisionRepository;

/// Query to get a decision by ID.
#[derive(Debug, Clone)]
pub struct GetDecisionQuery {
    pub decision_id: DecisionId,
}

/// Handler for retrieving decisions. A missing decision is `Ok(None)`.
pub struct GetDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl GetDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetDecisionQuery) -> Result<Option<PendingDecision>, DomainError> {
        self.repository.find_by_id(&query.decision_id).await
    }
}
