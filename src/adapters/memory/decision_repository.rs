//! In-memory decision repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::decision::PendingDecision;
use crate::domain::foundation::{DecisionId, DomainError, ErrorCode};
use crate::ports::DecisionRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryDecisionRepository {
    decisions: Arc<RwLock<HashMap<DecisionId, PendingDecision>>>,
    fail_writes: bool,
}

impl InMemoryDecisionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose writes always fail.
    pub fn failing() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }

    pub async fn len(&self) -> usize {
        self.decisions.read().await.len()
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::new(ErrorCode::PersistenceFailure, "Decision store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl DecisionRepository for InMemoryDecisionRepository {
    async fn save(&self, decision: &PendingDecision) -> Result<(), DomainError> {
        self.check_writable()?;
        self.decisions.write().await.insert(decision.id, decision.clone());
        Ok(())
    }

    async fn update(&self, decision: &PendingDecision) -> Result<(), DomainError> {
        self.check_writable()?;
        let mut decisions = self.decisions.write().await;
        match decisions.get_mut(&decision.id) {
            Some(stored) => {
                *stored = decision.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::DecisionNotFound, "Decision not found")
                .with_detail("decision_id", decision.id.to_string())),
        }
    }

    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<PendingDecision>, DomainError> {
        Ok(self.decisions.read().await.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::DecisionStatus;
    use crate::domain::foundation::Timestamp;
    use crate::domain::decision::{fallbacks, DecisionAnalysis, GenerationRequest};
    use crate::domain::foundation::{DecisionCategory, UrgencyLevel};

    fn decision() -> PendingDecision {
        let request = GenerationRequest::new("Grain reserve", DecisionCategory::Economic, UrgencyLevel::Important);
        let options = fallbacks::default_options();
        let analysis = DecisionAnalysis {
            background: fallbacks::default_background("Grain reserve"),
            recommendation: fallbacks::default_recommendation(&options),
            options,
            risk_assessment: fallbacks::default_risk_assessment(),
            cost_benefit_analysis: fallbacks::default_cost_benefit(),
        };
        PendingDecision::assemble(DecisionId::new(), &request, analysis, Timestamp::now()).unwrap()
    }

    #[tokio::test]
    async fn save_then_find() {
        let repo = InMemoryDecisionRepository::new();
        let d = decision();
        repo.save(&d).await.unwrap();
        let found = repo.find_by_id(&d.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Grain reserve");
        assert!(repo.find_by_id(&DecisionId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_requires_existing() {
        let repo = InMemoryDecisionRepository::new();
        let mut d = decision();
        let err = repo.update(&d).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DecisionNotFound);

        repo.save(&d).await.unwrap();
        d.transition_to(DecisionStatus::UnderReview).unwrap();
        repo.update(&d).await.unwrap();
        assert_eq!(repo.find_by_id(&d.id).await.unwrap().unwrap().status(), DecisionStatus::UnderReview);
    }

    #[tokio::test]
    async fn failing_repository_reports_persistence_failure() {
        let repo = InMemoryDecisionRepository::failing();
        let err = repo.save(&decision()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PersistenceFailure);
        assert_eq!(repo.len().await, 0);
    }
}
