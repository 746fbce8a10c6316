//! Declarative, serializable machine definitions.

use crate::core::{MachineObserver, MachineState, Transition};
use crate::error::BuildError;
use crate::machine::Machine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A machine described as plain data.
///
/// Definitions can live in configuration files and round-trip through
/// serde. Like the fluent builder, a definition performs no validation
/// of its own; building forwards to machine construction.
///
/// # Example
///
/// ```rust
/// use mealy::MachineDefinition;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let definition = MachineDefinition::from_json(
///     r#"{
///         "name": "turnstile",
///         "initial_state": "locked",
///         "transitions": [
///             {"action": "coin", "from_state": "locked",
///              "to_state": "unlocked", "output": "unlock"}
///         ]
///     }"#,
/// )?;
///
/// let machine = definition.build()?;
/// assert_eq!(machine.name(), "turnstile");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineDefinition {
    /// The machine's name.
    pub name: String,
    /// The state the machine starts in.
    pub initial_state: MachineState,
    /// The transition list, in declaration order.
    pub transitions: Vec<Transition>,
}

impl MachineDefinition {
    /// Parse a definition from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Render the definition as JSON text.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Construct the described machine with the default observer.
    pub fn build(self) -> Result<Machine, BuildError> {
        Machine::new(self.name, self.initial_state, self.transitions)
    }

    /// Construct the described machine with an attached observer.
    pub fn build_with_observer(
        self,
        observer: Arc<dyn MachineObserver>,
    ) -> Result<Machine, BuildError> {
        Machine::with_observer(self.name, self.initial_state, self.transitions, observer)
    }
}
