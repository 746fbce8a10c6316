//! Fluent builder for machines.

use crate::core::{MachineObserver, MachineState, Transition};
use crate::error::BuildError;
use crate::machine::Machine;
use std::sync::Arc;

/// Accumulates a machine's parts with a fluent API.
///
/// The builder performs no validation of its own; `build` forwards to
/// [`Machine::with_observer`] / [`Machine::new`] and inherits their
/// error semantics unchanged. A builder can therefore never be in an
/// "invalid" state; invalidity only surfaces at build time.
///
/// # Example
///
/// ```rust
/// use mealy::{MachineBuilder, Transition};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let machine = MachineBuilder::new("ones-tracker")
///     .initial_state("even")
///     .transition(Transition::new("1", "even", "odd", "odd-count"))
///     .transition(Transition::new("1", "odd", "even", "even-count"))
///     .build()?;
///
/// assert_eq!(machine.current_state().as_str(), "even");
/// # Ok(())
/// # }
/// ```
pub struct MachineBuilder {
    name: String,
    initial_state: MachineState,
    transitions: Vec<Transition>,
    observer: Option<Arc<dyn MachineObserver>>,
}

impl MachineBuilder {
    /// Start building a machine with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial_state: MachineState::default(),
            transitions: Vec::new(),
            observer: None,
        }
    }

    /// Set the initial state.
    pub fn initial_state(mut self, state: impl Into<MachineState>) -> Self {
        self.initial_state = state.into();
        self
    }

    /// Append one transition.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Append several transitions, preserving order.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Attach an observer.
    pub fn observer(mut self, observer: Arc<dyn MachineObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Construct the machine, inheriting all construction validation.
    pub fn build(self) -> Result<Machine, BuildError> {
        match self.observer {
            Some(observer) => {
                Machine::with_observer(self.name, self.initial_state, self.transitions, observer)
            }
            None => Machine::new(self.name, self.initial_state, self.transitions),
        }
    }
}
