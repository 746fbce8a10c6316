//! The validated transition lookup table.

use crate::core::state::{Action, MachineState};
use crate::core::transition::Transition;
use crate::error::BuildError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// A deterministic mapping from `(state, action)` to a transition.
///
/// Built once from an ordered transition sequence and immutable
/// afterwards; only the owning machine's pointer into the table moves.
/// Duplicate `(from_state, action)` pairs are a hard construction error
/// rather than a silent overwrite, which makes the build outcome
/// independent of any input re-ordering that does not change the set of
/// pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Behavior {
    table: HashMap<MachineState, HashMap<Action, Transition>>,
}

impl Behavior {
    /// Validate and index a transition sequence.
    ///
    /// Transitions are processed in input order. The first invalid
    /// transition aborts the build with
    /// [`BuildError::InvalidTransition`]; the first repeated
    /// `(from_state, action)` pair aborts with
    /// [`BuildError::DuplicateTransition`]. No partial table escapes on
    /// failure.
    pub fn from_transitions(transitions: &[Transition]) -> Result<Self, BuildError> {
        let mut table: HashMap<MachineState, HashMap<Action, Transition>> = HashMap::new();
        for transition in transitions {
            transition.validate()?;
            let row = table.entry(transition.from_state.clone()).or_default();
            match row.entry(transition.action.clone()) {
                Entry::Occupied(_) => {
                    return Err(BuildError::DuplicateTransition {
                        action: transition.action.clone(),
                        from_state: transition.from_state.clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(transition.clone());
                }
            }
        }
        Ok(Self { table })
    }

    /// O(1) lookup of the transition for `(state, action)`.
    pub fn lookup(&self, state: &MachineState, action: &Action) -> Option<&Transition> {
        self.table.get(state).and_then(|row| row.get(action))
    }

    /// True when at least one transition leaves `state`.
    pub fn contains_state(&self, state: &MachineState) -> bool {
        self.table.contains_key(state)
    }

    /// Iterate over the states transitions leave from, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &MachineState> {
        self.table.keys()
    }

    /// Iterate over every stored transition, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.table.values().flat_map(|row| row.values())
    }

    /// Number of distinct from-states.
    pub fn state_count(&self) -> usize {
        self.table.len()
    }

    /// Total number of stored transitions.
    pub fn transition_count(&self) -> usize {
        self.table.values().map(HashMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_transitions_indexes_by_state_and_action() {
        let behavior = Behavior::from_transitions(&[
            Transition::new("action1", "state1", "state2", "output1"),
            Transition::new("action2", "state1", "state3", "output2"),
            Transition::new("action3", "state2", "state1", "output3"),
        ])
        .unwrap();

        assert_eq!(behavior.state_count(), 2);
        assert_eq!(behavior.transition_count(), 3);

        let hit = behavior
            .lookup(&"state1".into(), &"action1".into())
            .unwrap();
        assert_eq!(hit.to_state, "state2".into());

        let hit = behavior
            .lookup(&"state1".into(), &"action2".into())
            .unwrap();
        assert_eq!(hit.to_state, "state3".into());

        let hit = behavior
            .lookup(&"state2".into(), &"action3".into())
            .unwrap();
        assert_eq!(hit.to_state, "state1".into());
    }

    #[test]
    fn lookup_misses_unknown_pairs() {
        let behavior =
            Behavior::from_transitions(&[Transition::new("go", "a", "b", "out")]).unwrap();

        assert!(behavior.lookup(&"a".into(), &"stop".into()).is_none());
        assert!(behavior.lookup(&"b".into(), &"go".into()).is_none());
        assert!(behavior.contains_state(&"a".into()));
        assert!(!behavior.contains_state(&"b".into()));
    }

    #[test]
    fn duplicate_pair_aborts_the_build() {
        let result = Behavior::from_transitions(&[
            Transition::new("action1", "state1", "state2", "output1"),
            Transition::new("action1", "state1", "state3", "output2"),
        ]);

        let err = result.unwrap_err();
        assert!(matches!(err, BuildError::DuplicateTransition { .. }));
        assert_eq!(
            err.to_string(),
            "duplicate transition for action action1 from state state1"
        );
    }

    #[test]
    fn invalid_transition_aborts_the_build() {
        let result = Behavior::from_transitions(&[
            Transition::new("action1", "state1", "state2", "output1"),
            Transition::new("", "state1", "state3", "output2"),
        ]);

        let err = result.unwrap_err();
        assert!(matches!(err, BuildError::InvalidTransition(_)));
        assert_eq!(err.to_string(), "invalid transition: action cannot be empty");
    }

    #[test]
    fn validation_runs_before_duplicate_detection() {
        // The invalid entry precedes the duplicate, so it is reported.
        let result = Behavior::from_transitions(&[
            Transition::new("action1", "state1", "state2", "output1"),
            Transition::new("action2", "", "state3", "output2"),
            Transition::new("action1", "state1", "state3", "output3"),
        ]);

        assert!(matches!(result, Err(BuildError::InvalidTransition(_))));
    }

    #[test]
    fn self_transitions_are_stored_like_any_other() {
        let behavior =
            Behavior::from_transitions(&[Transition::new("loop", "a", "a", "out")]).unwrap();

        let hit = behavior.lookup(&"a".into(), &"loop".into()).unwrap();
        assert_eq!(hit.from_state, hit.to_state);
    }
}
