//! Fixtures shared by the handler tests.

use crate::adapters::InMemoryDecisionRepository;
use crate::domain::decision::{fallbacks, DecisionAnalysis, GenerationRequest, PendingDecision};
use crate::domain::foundation::{DecisionCategory, DecisionId, Timestamp, UrgencyLevel};
use crate::ports::DecisionRepository;

/// An economic decision assembled entirely from the deterministic fallbacks.
pub(crate) fn fallback_decision() -> PendingDecision {
    let request = GenerationRequest::new("Grain reserves", DecisionCategory::Economic, UrgencyLevel::Urgent);
    let options = fallbacks::default_options();
    let analysis = DecisionAnalysis {
        background: fallbacks::default_background(&request.title),
        recommendation: fallbacks::default_recommendation(&options),
        options,
        risk_assessment: fallbacks::default_risk_assessment(),
        cost_benefit_analysis: fallbacks::default_cost_benefit(),
    };
    PendingDecision::assemble(DecisionId::new(), &request, analysis, Timestamp::now()).unwrap()
}

pub(crate) async fn stored_decision(repo: &InMemoryDecisionRepository) -> PendingDecision {
    let decision = fallback_decision();
    repo.save(&decision).await.unwrap();
    decision
}
