//! State machine trait for lifecycle status enums.
//!
//! Both `DecisionStatus` and `EffectStatus` change only through
//! `transition_to`, so every status write is checked against the table
//! the implementor declares.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// ```ignore
/// let next = DecisionStatus::Pending.transition_to(DecisionStatus::UnderReview)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(self, target))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Signal {
        Queued,
        Sent,
        Acknowledged,
        Dropped,
    }

    impl StateMachine for Signal {
        fn can_transition_to(&self, target: &Self) -> bool {
            self.valid_transitions().contains(target)
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Signal::*;
            match self {
                Queued => vec![Sent, Dropped],
                Sent => vec![Acknowledged, Dropped],
                Acknowledged | Dropped => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_declared_edge() {
        assert_eq!(Signal::Queued.transition_to(Signal::Sent), Ok(Signal::Sent));
    }

    #[test]
    fn transition_to_rejects_undeclared_edge() {
        let err = Signal::Queued.transition_to(Signal::Acknowledged).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidTransition {
                from: "Queued".to_string(),
                to: "Acknowledged".to_string(),
            }
        );
    }

    #[test]
    fn terminal_states_have_no_exits() {
        assert!(Signal::Acknowledged.is_terminal());
        assert!(Signal::Dropped.is_terminal());
        assert!(!Signal::Sent.is_terminal());
    }
}
