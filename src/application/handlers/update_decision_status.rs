//! UpdateDecisionStatusHandler - Command handler for explicit lifecycle
//! transitions of a pending decision.

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::decision::{DecisionStatus, PendingDecision};
use crate::domain::foundation::{DecisionId, DomainError, ErrorCode};
use crate::ports::DecisionRepository;

/// Command to move a decision to a new status.
#[derive(Debug, Clone)]
pub struct UpdateDecisionStatusCommand {
    pub decision_id: DecisionId,
    pub status: DecisionStatus,
}

/// The updated decision, or `None` when no decision has that id.
pub type UpdateDecisionStatusResult = Option<PendingDecision>;

/// Handler for decision status updates.
///
/// `Implemented` is rejected here; it needs a selected option and goes
/// through `ImplementDecisionHandler`.
pub struct UpdateDecisionStatusHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl UpdateDecisionStatusHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateDecisionStatusCommand) -> Result<UpdateDecisionStatusResult, DomainError> {
        if cmd.status == DecisionStatus::Implemented {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Decisions are implemented with a selected option; use implement",
            )
            .with_detail("decision_id", cmd.decision_id.to_string()));
        }

        // 1. Load decision
        let Some(mut decision) = self.repository.find_by_id(&cmd.decision_id).await? else {
            debug!(decision_id = %cmd.decision_id, "Decision not found for status update");
            return Ok(None);
        };

        // 2. Transition
        let from = decision.status();
        decision.transition_to(cmd.status)?;

        // 3. Persist
        self.repository.update(&decision).await?;

        info!(
            decision_id = %decision.id,
            from = %from,
            to = %decision.status(),
            "Decision status updated"
        );
        Ok(Some(decision))
    }
}
