//! Decision module - decision support analysis and lifecycle.
//!
//! Options, risks and cost-benefit analyses come out of the normalizer
//! fully typed; this module scores them, schedules the decision and
//! tracks it from `pending` to `implemented` or `cancelled`.

mod briefing;
mod cost_benefit;
pub mod fallbacks;
mod implementation;
mod option;
mod pending_decision;
mod recommendation;
mod request;
mod risk;
mod scoring;
mod stakeholders;
mod timeline;

pub use briefing::{BriefingAssessment, BriefingSection};
pub use cost_benefit::{BenefitItem, CostBenefitAnalysis, CostItem};
pub use implementation::{implementation_effects, target_system_for};
pub use option::{DecisionOption, ExpectedOutcome, ResourceRequirement};
pub use pending_decision::{DecisionAnalysis, DecisionStatus, PendingDecision};
pub use recommendation::Recommendation;
pub use request::{GenerationRequest, DEFAULT_MAX_OPTIONS};
pub use risk::{RiskAssessment, RiskItem};
pub use scoring::{ImpactScorer, ThreatLevel, BASE_PRIORITY, MAX_PRIORITY};
pub use stakeholders::{category_constraints, identify_constraints, stakeholders_for, LIMITED_BUDGET_THRESHOLD, LOW_APPROVAL_THRESHOLD};
pub use timeline::{Timeline, TimelineScheduler, UrgentMatter, ESCALATION_FRACTION};
