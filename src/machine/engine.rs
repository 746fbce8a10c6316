//! The lock-guarded stepping engine.

use crate::core::{
    Action, Behavior, MachineObserver, MachineState, MachineTransitionEvent, NoopObserver, Output,
    Transition,
};
use crate::error::{BuildError, StepError};
use crate::machine::continuation::Continuation;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// A deterministic Mealy machine.
///
/// Holds a validated, immutable [`Behavior`] table and a single piece
/// of mutable state: the current state pointer. Stepping looks up the
/// `(current_state, action)` pair, emits the transition's output,
/// advances the pointer, and notifies the observer.
///
/// All accessors and mutators hold an exclusive lock for their whole
/// critical section, so concurrent callers observe linearized
/// transitions. Observer notification happens inside that critical
/// section; observers must work from the event they receive and must
/// not call back into the machine's locked accessors.
///
/// # Example
///
/// ```rust
/// use mealy::{Machine, Transition};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let machine = Machine::new(
///     "turnstile",
///     "locked",
///     vec![
///         Transition::new("coin", "locked", "unlocked", "unlock"),
///         Transition::new("push", "unlocked", "locked", "lock"),
///     ],
/// )?;
///
/// let (output, next) = machine.step(&"coin".into())?;
/// assert_eq!(output.as_str(), "unlock");
/// assert_eq!(next.current_state().as_str(), "unlocked");
/// # Ok(())
/// # }
/// ```
pub struct Machine {
    name: String,
    initial_state: MachineState,
    current: Mutex<MachineState>,
    behavior: Behavior,
    observer: Arc<dyn MachineObserver>,
}

impl Machine {
    /// Construct a machine with the default no-op observer.
    ///
    /// See [`with_observer`](Self::with_observer) for the validation
    /// performed.
    pub fn new(
        name: impl Into<String>,
        initial_state: impl Into<MachineState>,
        transitions: Vec<Transition>,
    ) -> Result<Self, BuildError> {
        Self::with_observer(name, initial_state, transitions, Arc::new(NoopObserver))
    }

    /// Construct a machine with an attached observer.
    ///
    /// Validation is atomic and fail-fast, checked in this order:
    /// non-empty name, non-empty initial state, non-empty transition
    /// list, the behavior table builds (every transition valid, no
    /// duplicate `(from_state, action)` pair), and the initial state is
    /// keyed in the table. No partially-constructed machine is ever
    /// returned.
    pub fn with_observer(
        name: impl Into<String>,
        initial_state: impl Into<MachineState>,
        transitions: Vec<Transition>,
        observer: Arc<dyn MachineObserver>,
    ) -> Result<Self, BuildError> {
        let name = name.into();
        let initial_state = initial_state.into();

        if name.is_empty() {
            return Err(BuildError::EmptyName);
        }
        if initial_state.is_empty() {
            return Err(BuildError::EmptyInitialState);
        }
        if transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }
        let behavior = Behavior::from_transitions(&transitions)?;
        if !behavior.contains_state(&initial_state) {
            return Err(BuildError::InitialStateNotFound(initial_state));
        }

        debug!(
            machine = %name,
            states = behavior.state_count(),
            transitions = behavior.transition_count(),
            "machine constructed"
        );

        Ok(Self {
            current: Mutex::new(initial_state.clone()),
            name,
            initial_state,
            behavior,
            observer,
        })
    }

    /// The machine's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The state the machine started in and resets to.
    pub fn initial_state(&self) -> &MachineState {
        &self.initial_state
    }

    /// The immutable transition table.
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// The live current state.
    pub fn current_state(&self) -> MachineState {
        self.current.lock().clone()
    }

    /// True iff a transition exists for `(current_state, action)`.
    /// Read-only; does not mutate.
    pub fn can_step(&self, action: &Action) -> bool {
        let current = self.current.lock();
        self.behavior.lookup(&current, action).is_some()
    }

    /// Step the machine with `action`.
    ///
    /// On a hit the current state advances to the transition's
    /// to-state, the observer receives the full event (after the
    /// mutation, before this call returns), and the transition's output
    /// is returned with a fresh [`Continuation`]. On a miss the call
    /// returns [`StepError::NoTransition`] with no state change and no
    /// notification.
    pub fn step(&self, action: &Action) -> Result<(Output, Continuation<'_>), StepError> {
        let mut current = self.current.lock();
        let Some(transition) = self.behavior.lookup(&current, action) else {
            trace!(
                machine = %self.name,
                action = %action,
                state = %current.as_str(),
                "no transition"
            );
            return Err(StepError::NoTransition);
        };

        let event = MachineTransitionEvent::from(transition);
        let output = transition.output.clone();
        *current = transition.to_state.clone();

        trace!(
            machine = %self.name,
            action = %event.action,
            from = %event.from_state,
            to = %event.to_state,
            output = %event.output,
            "transition committed"
        );

        // The state write above must be visible to the observer and no
        // other thread may interleave before it runs, so the
        // notification stays inside the critical section.
        self.observer.on_transition(event);
        drop(current);

        Ok((output, Continuation::new(self)))
    }

    /// Step the machine with `action`, panicking on a miss.
    ///
    /// Hit semantics are identical to [`step`](Self::step). Callers are
    /// expected to prove reachability with [`can_step`](Self::can_step)
    /// first, or accept the unwind.
    ///
    /// # Panics
    ///
    /// Panics with the message of [`StepError::NoTransition`] when no
    /// transition exists for `(current_state, action)`.
    pub fn step_unsafe(&self, action: &Action) -> (Output, Continuation<'_>) {
        match self.step(action) {
            Ok(stepped) => stepped,
            Err(err) => panic!("{err}"),
        }
    }

    /// Restore the current state to the initial state.
    ///
    /// A reset is not a transition: the observer is not notified.
    pub fn reset(&self) {
        let mut current = self.current.lock();
        *current = self.initial_state.clone();
        debug!(machine = %self.name, state = %self.initial_state, "machine reset");
    }
}

impl fmt::Debug for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("name", &self.name)
            .field("initial_state", &self.initial_state)
            .field("current_state", &*self.current.lock())
            .field("behavior", &self.behavior)
            .finish_non_exhaustive()
    }
}
