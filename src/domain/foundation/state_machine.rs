//! State machine trait for stage enums.
//!
//! Gives stage enums one way to validate transitions, so callers can ask
//! "may this model be computed yet?" without re-encoding the rules.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors define the allowed edges and get a validated
/// `transition_to` for free.
///
/// # Example
///
/// ```ignore
/// let stage = model.stage();
/// let next = stage.transition_to(AnalysisStage::Computed)?;
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
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
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
    enum Light {
        Red,
        Green,
        Amber,
        Off,
    }

    impl StateMachine for Light {
        fn can_transition_to(&self, target: &Self) -> bool {
            self.valid_transitions().contains(target)
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Light::*;
            match self {
                Red => vec![Green, Off],
                Green => vec![Amber, Off],
                Amber => vec![Red, Off],
                Off => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_edge() {
        assert_eq!(Light::Red.transition_to(Light::Green), Ok(Light::Green));
    }

    #[test]
    fn transition_to_reports_both_states_on_invalid_edge() {
        match Light::Red.transition_to(Light::Amber) {
            Err(ValidationError::InvalidFormat { field, reason }) => {
                assert_eq!(field, "state_transition");
                assert!(reason.contains("Red"));
                assert!(reason.contains("Amber"));
            }
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn is_terminal_only_for_states_without_edges() {
        assert!(Light::Off.is_terminal());
        assert!(!Light::Amber.is_terminal());
    }
}
