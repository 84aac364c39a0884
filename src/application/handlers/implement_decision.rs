//! ImplementDecisionHandler - Command handler that implements a decided
//! decision and schedules the chosen option's effects.

use std::sync::Arc;
use tracing::{debug, info};

use super::effect_dispatcher::{BatchReport, EffectDispatcher};
use crate::domain::decision::{implementation_effects, PendingDecision};
use crate::domain::foundation::{DecisionId, DomainError, OptionId, Timestamp};
use crate::domain::impact::{EffectThresholds, SimulationEffect};
use crate::ports::{DecisionRepository, EffectLedger};

/// Command to implement a decision with one of its options.
#[derive(Debug, Clone)]
pub struct ImplementDecisionCommand {
    pub decision_id: DecisionId,
    pub option_id: OptionId,
}

/// Result of a successful implementation.
#[derive(Debug, Clone)]
pub struct ImplementDecisionResult {
    pub decision: PendingDecision,
    pub effects: Vec<SimulationEffect>,
    pub report: BatchReport,
}

/// Handler for implementing decisions.
///
/// The decision is persisted as implemented before its effects are
/// dispatched; a dropped effect is reported but does not undo the
/// implementation.
pub struct ImplementDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
    dispatcher: EffectDispatcher,
    thresholds: EffectThresholds,
}

impl ImplementDecisionHandler {
    pub fn new(
        repository: Arc<dyn DecisionRepository>,
        ledger: Arc<dyn EffectLedger>,
        thresholds: EffectThresholds,
    ) -> Self {
        Self {
            repository,
            dispatcher: EffectDispatcher::new(ledger),
            thresholds,
        }
    }

    /// Returns `Ok(None)` when no decision has the given id.
    ///
    /// # Errors
    ///
    /// - `OptionNotFound` if the option is not one of the decision's options
    /// - `InvalidStateTransition` unless the decision is `Decided`
    pub async fn handle(&self, cmd: ImplementDecisionCommand) -> Result<Option<ImplementDecisionResult>, DomainError> {
        // 1. Load decision
        let Some(mut decision) = self.repository.find_by_id(&cmd.decision_id).await? else {
            debug!(decision_id = %cmd.decision_id, "Decision not found for implementation");
            return Ok(None);
        };

        // 2. Implement and convert outcomes
        let option = decision.implement(&cmd.option_id)?.clone();
        let effects = implementation_effects(&decision, &option, &self.thresholds, Timestamp::now());

        // 3. Persist
        self.repository.update(&decision).await?;

        // 4. Schedule effects
        let report = self.dispatcher.dispatch(&effects).await;

        info!(
            decision_id = %decision.id,
            option_id = %option.id,
            effects = effects.len(),
            dropped = report.dropped.len(),
            "Decision implemented"
        );

        Ok(Some(ImplementDecisionResult { decision, effects, report }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryDecisionRepository, InMemoryEffectLedger};
    use crate::application::handlers::test_support::stored_decision;
    use crate::domain::decision::DecisionStatus;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::impact::{EffectSource, TargetSystem};

    async fn decided(repo: &InMemoryDecisionRepository) -> PendingDecision {
        let mut decision = stored_decision(repo).await;
        decision.transition_to(DecisionStatus::UnderReview).unwrap();
        decision.transition_to(DecisionStatus::Decided).unwrap();
        repo.update(&decision).await.unwrap();
        decision
    }

    fn handler(repo: &InMemoryDecisionRepository, ledger: &InMemoryEffectLedger) -> ImplementDecisionHandler {
        ImplementDecisionHandler::new(
            Arc::new(repo.clone()),
            Arc::new(ledger.clone()),
            EffectThresholds::default(),
        )
    }

    #[tokio::test]
    async fn implementing_schedules_outcome_effects() {
        let repo = InMemoryDecisionRepository::new();
        let ledger = InMemoryEffectLedger::new();
        let decision = decided(&repo).await;
        let option_id = decision.options[0].id.clone();

        let result = handler(&repo, &ledger)
            .handle(ImplementDecisionCommand { decision_id: decision.id, option_id: option_id.clone() })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.decision.status(), DecisionStatus::Implemented);
        assert_eq!(result.decision.selected_option(), Some(&option_id));
        assert_eq!(result.effects.len(), 1);
        let effect = &result.effects[0];
        assert_eq!(effect.source, EffectSource::Decision);
        assert_eq!(effect.system, TargetSystem::Economy);
        assert_eq!(effect.parameter, "stability_index");
        assert_eq!(effect.duration_ticks, Some(5));
        assert!(result.report.is_complete());
        assert_eq!(ledger.len().await, 1);

        let stored = repo.find_by_id(&decision.id).await.unwrap().unwrap();
        assert_eq!(stored.status(), DecisionStatus::Implemented);
    }

    #[tokio::test]
    async fn unknown_option_is_a_visible_failure() {
        let repo = InMemoryDecisionRepository::new();
        let ledger = InMemoryEffectLedger::new();
        let decision = decided(&repo).await;

        let err = handler(&repo, &ledger)
            .handle(ImplementDecisionCommand {
                decision_id: decision.id,
                option_id: OptionId::new("option-9").unwrap(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::OptionNotFound);
        assert!(ledger.is_empty().await);
        let stored = repo.find_by_id(&decision.id).await.unwrap().unwrap();
        assert_eq!(stored.status(), DecisionStatus::Decided);
    }

    #[tokio::test]
    async fn undecided_decision_cannot_be_implemented() {
        let repo = InMemoryDecisionRepository::new();
        let ledger = InMemoryEffectLedger::new();
        let decision = stored_decision(&repo).await;

        let err = handler(&repo, &ledger)
            .handle(ImplementDecisionCommand {
                decision_id: decision.id,
                option_id: decision.options[0].id.clone(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[tokio::test]
    async fn unknown_decision_is_none() {
        let repo = InMemoryDecisionRepository::new();
        let result = handler(&repo, &InMemoryEffectLedger::new())
            .handle(ImplementDecisionCommand {
                decision_id: DecisionId::new(),
                option_id: OptionId::new("option-1").unwrap(),
            })
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
