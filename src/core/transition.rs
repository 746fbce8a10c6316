//! The atomic transition record.

use crate::core::state::{Action, MachineState, Output};
use crate::error::TransitionError;
use serde::{Deserialize, Serialize};

/// An immutable fact: `(action, from_state)` maps to `(to_state, output)`.
///
/// Transitions have value semantics and are copied freely. A transition
/// is only usable inside a machine once [`validate`](Self::validate)
/// has passed, which the table builder guarantees.
///
/// # Example
///
/// ```rust
/// use mealy::Transition;
///
/// let transition = Transition::new("coin", "locked", "unlocked", "unlock");
/// assert!(transition.validate().is_ok());
/// assert!(transition.can_step(&"coin".into(), &"locked".into()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The input symbol that triggers this transition.
    pub action: Action,
    /// The state this transition leaves.
    pub from_state: MachineState,
    /// The state this transition enters.
    pub to_state: MachineState,
    /// The token emitted when this transition commits.
    pub output: Output,
}

impl Transition {
    /// Assemble a transition from its four parts.
    pub fn new(
        action: impl Into<Action>,
        from_state: impl Into<MachineState>,
        to_state: impl Into<MachineState>,
        output: impl Into<Output>,
    ) -> Self {
        Self {
            action: action.into(),
            from_state: from_state.into(),
            to_state: to_state.into(),
            output: output.into(),
        }
    }

    /// Check that every field is non-empty.
    ///
    /// Fields are checked in order (action, from-state, to-state,
    /// output); the first empty field is reported.
    pub fn validate(&self) -> Result<(), TransitionError> {
        if self.action.is_empty() {
            return Err(TransitionError::EmptyAction);
        }
        if self.from_state.is_empty() {
            return Err(TransitionError::EmptyFromState);
        }
        if self.to_state.is_empty() {
            return Err(TransitionError::EmptyToState);
        }
        if self.output.is_empty() {
            return Err(TransitionError::EmptyOutput);
        }
        Ok(())
    }

    /// Pure predicate: does this transition fire for `(action, from_state)`?
    pub fn can_step(&self, action: &Action, from_state: &MachineState) -> bool {
        self.action == *action && self.from_state == *from_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Transition {
        Transition::new("action", "state1", "state2", "output")
    }

    #[test]
    fn validate_accepts_complete_transition() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn validate_reports_empty_action() {
        let transition = Transition::new("", "state1", "state2", "output");
        let err = transition.validate().unwrap_err();
        assert_eq!(err, TransitionError::EmptyAction);
        assert_eq!(err.to_string(), "action cannot be empty");
    }

    #[test]
    fn validate_reports_empty_from_state() {
        let transition = Transition::new("action", "", "state2", "output");
        let err = transition.validate().unwrap_err();
        assert_eq!(err, TransitionError::EmptyFromState);
        assert_eq!(err.to_string(), "from state cannot be empty");
    }

    #[test]
    fn validate_reports_empty_to_state() {
        let transition = Transition::new("action", "state1", "", "output");
        let err = transition.validate().unwrap_err();
        assert_eq!(err, TransitionError::EmptyToState);
        assert_eq!(err.to_string(), "to state cannot be empty");
    }

    #[test]
    fn validate_reports_empty_output() {
        let transition = Transition::new("action", "state1", "state2", "");
        let err = transition.validate().unwrap_err();
        assert_eq!(err, TransitionError::EmptyOutput);
        assert_eq!(err.to_string(), "output cannot be empty");
    }

    #[test]
    fn validate_reports_first_empty_field() {
        // Action is checked before output, so it wins when both are empty.
        let transition = Transition::new("", "state1", "state2", "");
        assert_eq!(
            transition.validate().unwrap_err(),
            TransitionError::EmptyAction
        );
    }

    #[test]
    fn can_step_requires_both_fields_to_match() {
        let transition = complete();

        assert!(transition.can_step(&"action".into(), &"state1".into()));
        assert!(!transition.can_step(&"other".into(), &"state1".into()));
        assert!(!transition.can_step(&"action".into(), &"state3".into()));
        assert!(!transition.can_step(&"other".into(), &"state3".into()));
    }

    #[test]
    fn transition_roundtrips_through_json() {
        let transition = complete();
        let json = serde_json::to_string(&transition).unwrap();
        let back: Transition = serde_json::from_str(&json).unwrap();
        assert_eq!(transition, back);
    }
}
