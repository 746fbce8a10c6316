//! Observer hook for committed transitions.
//!
//! Observers are invoked synchronously, exactly once per successful
//! step, after the state mutation and before the stepping call returns.
//! The notification runs inside the machine's critical section, so an
//! observer must work from the event it receives rather than calling
//! back into the machine's locked accessors, and it must stay fast.

use crate::core::event::MachineTransitionEvent;
use crate::core::state::MachineState;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Notification sink for committed transitions.
///
/// Failures are not sandboxed: a panicking observer unwinds through the
/// stepping caller.
pub trait MachineObserver: Send + Sync {
    /// Receive the event for one committed transition.
    fn on_transition(&self, event: MachineTransitionEvent);
}

/// The default observer; discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl MachineObserver for NoopObserver {
    fn on_transition(&self, _event: MachineTransitionEvent) {}
}

/// One recorded entry of a [`TransitionLog`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedTransition {
    /// The observed event.
    pub event: MachineTransitionEvent,
    /// When the transition was observed.
    pub timestamp: DateTime<Utc>,
}

/// A thread-safe observer that records every event it receives.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use mealy::{Machine, Transition, TransitionLog};
///
/// let log = Arc::new(TransitionLog::new());
/// let machine = Machine::with_observer(
///     "recorder",
///     "a",
///     vec![Transition::new("go", "a", "b", "done")],
///     log.clone(),
/// )
/// .unwrap();
///
/// machine.step(&"go".into()).unwrap();
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.events()[0].output.as_str(), "done");
/// ```
#[derive(Debug, Default)]
pub struct TransitionLog {
    entries: Mutex<Vec<LoggedTransition>>,
}

impl TransitionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded entries, in observation order.
    pub fn entries(&self) -> Vec<LoggedTransition> {
        self.entries.lock().clone()
    }

    /// Snapshot of the recorded events, in observation order.
    pub fn events(&self) -> Vec<MachineTransitionEvent> {
        self.entries
            .lock()
            .iter()
            .map(|entry| entry.event.clone())
            .collect()
    }

    /// The state path traversed: the first from-state, then each
    /// to-state in order. Empty when nothing has been recorded.
    pub fn path(&self) -> Vec<MachineState> {
        let entries = self.entries.lock();
        let mut path = Vec::with_capacity(entries.len() + 1);
        if let Some(first) = entries.first() {
            path.push(first.event.from_state.clone());
        }
        for entry in entries.iter() {
            path.push(entry.event.to_state.clone());
        }
        path
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Discard all recorded entries.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl MachineObserver for TransitionLog {
    fn on_transition(&self, event: MachineTransitionEvent) {
        self.entries.lock().push(LoggedTransition {
            event,
            timestamp: Utc::now(),
        });
    }
}
