//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, closed enumerations, the state
//! machine trait and error types that form the vocabulary of the engine.

mod assessment_levels;
mod decision_category;
mod errors;
mod ids;
mod speech_labels;
mod state_machine;
mod timestamp;
mod unit_interval;
mod urgency_level;

pub use assessment_levels::{ConfidenceLevel, OutcomeImpact, OutcomeTimeframe, RiskLevel};
pub use decision_category::DecisionCategory;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{DecisionId, EffectId, OptionId, RiskId};
pub use speech_labels::{DeliveryMode, SpeechType};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use unit_interval::{clamp_or, SignedUnit, UnitInterval};
pub use urgency_level::UrgencyLevel;
