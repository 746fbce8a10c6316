//! Read-only view of a stepped machine.

use crate::core::MachineState;
use crate::machine::engine::Machine;

/// A live, read-only handle pairing a machine reference with its
/// current state.
///
/// Continuations never cache state: every read is delegated to the
/// referenced machine at the time of the query, so a continuation held
/// across further steps always reflects current truth. They are cheap
/// to copy and meant to be consumed at the call site, not stored.
///
/// # Example
///
/// ```rust
/// use mealy::{Continuation, Machine, Transition};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let machine = Machine::new(
///     "doors",
///     "closed",
///     vec![
///         Transition::new("open", "closed", "open", "creak"),
///         Transition::new("close", "open", "closed", "slam"),
///     ],
/// )?;
///
/// let view = Continuation::new(&machine);
/// assert_eq!(view.current_state().as_str(), "closed");
///
/// // The view tracks the machine, not a snapshot.
/// machine.step(&"open".into())?;
/// assert_eq!(view.current_state().as_str(), "open");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Continuation<'m> {
    machine: &'m Machine,
}

impl<'m> Continuation<'m> {
    /// View the given machine.
    pub fn new(machine: &'m Machine) -> Self {
        Self { machine }
    }

    /// The referenced machine's live current state.
    pub fn current_state(&self) -> MachineState {
        self.machine.current_state()
    }

    /// The referenced machine, for chaining further steps.
    pub fn machine(&self) -> &'m Machine {
        self.machine
    }
}
