//! PendingDecision aggregate and its lifecycle.
//!
//! A pending decision bundles the generated options with the risk and
//! cost-benefit analyses. Its status changes only through
//! [`PendingDecision::transition_to`] and the operations built on it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cost_benefit::CostBenefitAnalysis;
use super::option::DecisionOption;
use super::recommendation::Recommendation;
use super::request::GenerationRequest;
use super::risk::RiskAssessment;
use super::scoring::ImpactScorer;
use super::stakeholders::{identify_constraints, stakeholders_for};
use super::timeline::TimelineScheduler;
use crate::domain::foundation::{
    DecisionCategory, DecisionId, DomainError, ErrorCode, OptionId, StateMachine, Timestamp,
    UrgencyLevel,
};

/// Lifecycle status of a pending decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    #[default]
    Pending,
    UnderReview,
    Decided,
    Implemented,
    Cancelled,
}

impl StateMachine for DecisionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Valid transitions:
    /// - Pending -> UnderReview | Cancelled
    /// - UnderReview -> Decided | Cancelled
    /// - Decided -> Implemented | Cancelled
    fn valid_transitions(&self) -> Vec<Self> {
        use DecisionStatus::*;
        match self {
            Pending => vec![UnderReview, Cancelled],
            UnderReview => vec![Decided, Cancelled],
            Decided => vec![Implemented, Cancelled],
            Implemented | Cancelled => vec![],
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecisionStatus::Pending => "pending",
            DecisionStatus::UnderReview => "under_review",
            DecisionStatus::Decided => "decided",
            DecisionStatus::Implemented => "implemented",
            DecisionStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}

/// Generated analysis that a pending decision is assembled from.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionAnalysis {
    pub background: String,
    pub options: Vec<DecisionOption>,
    pub risk_assessment: RiskAssessment,
    pub cost_benefit_analysis: CostBenefitAnalysis,
    pub recommendation: Recommendation,
}

/// A leadership decision awaiting resolution.
///
/// # Invariants
///
/// - `options` is non-empty and every option id is unique
/// - `recommendation.option_id` names one of `options`
/// - `selected_option`, when set, names one of `options`
/// - `priority` lies in `3..=10`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingDecision {
    pub id: DecisionId,
    pub title: String,
    pub description: String,
    pub category: DecisionCategory,
    pub urgency: UrgencyLevel,
    pub background: String,
    pub stakeholders: Vec<String>,
    pub constraints: Vec<String>,
    pub options: Vec<DecisionOption>,
    pub risk_assessment: RiskAssessment,
    pub cost_benefit_analysis: CostBenefitAnalysis,
    pub recommendation: Recommendation,
    pub deadline: Timestamp,
    pub escalation_date: Option<Timestamp>,
    pub priority: u8,
    status: DecisionStatus,
    selected_option: Option<OptionId>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl PendingDecision {
    /// Assembles a new pending decision from a request and its analysis.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the analysis has no options
    /// - `OptionNotFound` if the recommendation names an unknown option
    pub fn assemble(
        id: DecisionId,
        request: &GenerationRequest,
        analysis: DecisionAnalysis,
        now: Timestamp,
    ) -> Result<Self, DomainError> {
        if analysis.options.is_empty() {
            return Err(DomainError::validation("options", "A decision needs at least one option"));
        }
        if !analysis.options.iter().any(|o| o.id == analysis.recommendation.option_id) {
            return Err(DomainError::new(
                ErrorCode::OptionNotFound,
                format!("Recommended option not found: {}", analysis.recommendation.option_id),
            ));
        }

        let timeline = TimelineScheduler::schedule(request.urgency, request.category, now);
        let priority = ImpactScorer::decision_priority(
            request.urgency,
            analysis.risk_assessment.overall_risk,
            request.category,
        );

        Ok(Self {
            id,
            title: request.title.clone(),
            description: request.description.clone(),
            category: request.category,
            urgency: request.urgency,
            background: analysis.background,
            stakeholders: stakeholders_for(request.category).iter().map(|s| s.to_string()).collect(),
            constraints: identify_constraints(request),
            options: analysis.options,
            risk_assessment: analysis.risk_assessment,
            cost_benefit_analysis: analysis.cost_benefit_analysis,
            recommendation: analysis.recommendation,
            deadline: timeline.deadline,
            escalation_date: timeline.escalation_date,
            priority,
            status: DecisionStatus::Pending,
            selected_option: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn status(&self) -> DecisionStatus {
        self.status
    }

    pub fn selected_option(&self) -> Option<&OptionId> {
        self.selected_option.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn option(&self, option_id: &OptionId) -> Option<&DecisionOption> {
        self.options.iter().find(|o| &o.id == option_id)
    }

    /// Moves the decision to `target`.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the lifecycle does not allow it
    pub fn transition_to(&mut self, target: DecisionStatus) -> Result<(), DomainError> {
        let next = self.status.transition_to(target).map_err(|e| {
            DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
                .with_detail("decision_id", self.id.to_string())
        })?;
        self.status = next;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Marks the decision implemented with the chosen option.
    ///
    /// # Errors
    ///
    /// - `OptionNotFound` if `option_id` is not one of this decision's options
    /// - `InvalidStateTransition` unless the decision is `Decided`
    pub fn implement(&mut self, option_id: &OptionId) -> Result<&DecisionOption, DomainError> {
        if self.option(option_id).is_none() {
            return Err(DomainError::new(
                ErrorCode::OptionNotFound,
                format!("Option not found: {}", option_id),
            )
            .with_detail("decision_id", self.id.to_string()));
        }
        self.transition_to(DecisionStatus::Implemented)?;
        self.selected_option = Some(option_id.clone());

        self.option(option_id).ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Selected option vanished")
        })
    }
}
