//! Identifier types for states, actions, and outputs.
//!
//! All three are opaque, string-like newtypes compared by exact value
//! equality. No normalization is applied; `"Idle"` and `"idle"` are
//! different identifiers. Non-emptiness is not enforced here but at
//! table construction time.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! identifier {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier value.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True when the identifier holds no characters.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

identifier! {
    /// A named position in a machine's state space.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mealy::MachineState;
    ///
    /// let state = MachineState::new("locked");
    /// assert_eq!(state.as_str(), "locked");
    /// assert_eq!(state, MachineState::from("locked"));
    /// assert_ne!(state, MachineState::from("Locked"));
    /// ```
    MachineState
}

identifier! {
    /// An input symbol that may trigger a transition.
    Action
}

identifier! {
    /// The token emitted by a committed transition.
    Output
}
