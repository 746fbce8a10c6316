//! The value delivered to observers for each committed transition.

use crate::core::state::{Action, MachineState, Output};
use crate::core::transition::Transition;
use serde::{Deserialize, Serialize};

/// A record of exactly one committed transition.
///
/// Produced once per successful step, never for a failed step and never
/// for a reset. Carries the post-transition state, so an observer never
/// needs to query the machine to know where it landed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineTransitionEvent {
    /// The action that was stepped.
    pub action: Action,
    /// The state the machine left.
    pub from_state: MachineState,
    /// The state the machine entered.
    pub to_state: MachineState,
    /// The token the transition emitted.
    pub output: Output,
}

impl From<&Transition> for MachineTransitionEvent {
    fn from(transition: &Transition) -> Self {
        Self {
            action: transition.action.clone(),
            from_state: transition.from_state.clone(),
            to_state: transition.to_state.clone(),
            output: transition.output.clone(),
        }
    }
}
