//! Error types for machine construction and stepping.
//!
//! Two disjoint families: construction errors carry diagnostic text and
//! are fixed by correcting the configuration; the single run-time fault
//! is a sentinel value callers can branch on without string matching.

use crate::core::{Action, MachineState};
use thiserror::Error;

/// Field-level validation failures for a single transition.
///
/// Fields are checked in declaration order: action, from-state,
/// to-state, output. The first empty field wins.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("action cannot be empty")]
    EmptyAction,

    #[error("from state cannot be empty")]
    EmptyFromState,

    #[error("to state cannot be empty")]
    EmptyToState,

    #[error("output cannot be empty")]
    EmptyOutput,
}

/// Errors raised while assembling a behavior table or a machine.
///
/// These are never retried automatically; the caller must fix the
/// input and reconstruct.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("machine name cannot be empty")]
    EmptyName,

    #[error("initial state cannot be empty")]
    EmptyInitialState,

    #[error("transitions cannot be empty")]
    NoTransitions,

    #[error("invalid transition: {0}")]
    InvalidTransition(#[from] TransitionError),

    #[error("duplicate transition for action {action} from state {from_state}")]
    DuplicateTransition {
        action: Action,
        from_state: MachineState,
    },

    #[error("initial state {0} not found in behavior")]
    InitialStateNotFound(MachineState),
}

/// Run-time stepping fault.
///
/// `NoTransition` is the only variant: the current (state, action) pair
/// has no entry in the behavior table. Recoverable through
/// [`Machine::step`](crate::machine::Machine::step), fatal through
/// [`Machine::step_unsafe`](crate::machine::Machine::step_unsafe).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("no valid transition found")]
    NoTransition,
}

/// Failures from the diagram file-writer collaborator.
#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("failed to write diagram file: {0}")]
    Io(#[from] std::io::Error),
}
