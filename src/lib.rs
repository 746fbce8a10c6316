//! Mealy: a deterministic finite-state transducer library.
//!
//! A Mealy machine produces output as a function of both its current
//! state and the input action, unlike a Moore machine whose output
//! depends on state alone. This crate provides the transducer core:
//! a validated, immutable transition table, a lock-guarded stepping
//! engine, a synchronous observer hook, and Mermaid diagram rendering.
//!
//! # Core Concepts
//!
//! - **Transition**: an immutable fact `(action, from_state)` maps to
//!   `(to_state, output)`
//! - **Behavior**: the deterministic lookup table built once from a
//!   transition list, rejecting duplicates at construction time
//! - **Machine**: the stepping engine; the current state is the only
//!   mutable datum and every access is linearized
//! - **Continuation**: a live read-only view for chaining step results
//! - **Observer**: a sink notified exactly once per committed transition
//!
//! # Example
//!
//! ```rust
//! use mealy::{Machine, Transition};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let machine = Machine::new(
//!     "turnstile",
//!     "locked",
//!     vec![
//!         Transition::new("coin", "locked", "unlocked", "unlock"),
//!         Transition::new("push", "unlocked", "locked", "lock"),
//!     ],
//! )?;
//!
//! let (output, next) = machine.step(&"coin".into())?;
//! assert_eq!(output.as_str(), "unlock");
//! assert_eq!(next.current_state().as_str(), "unlocked");
//!
//! machine.reset();
//! assert_eq!(machine.current_state().as_str(), "locked");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod diagram;
pub mod error;
pub mod machine;

// Re-export the commonly used surface.
pub use crate::builder::{MachineBuilder, MachineDefinition};
pub use crate::core::{
    Action, Behavior, LoggedTransition, MachineObserver, MachineState, MachineTransitionEvent,
    NoopObserver, Output, Transition, TransitionLog,
};
pub use crate::error::{BuildError, DiagramError, StepError, TransitionError};
pub use crate::machine::{Continuation, Machine};
