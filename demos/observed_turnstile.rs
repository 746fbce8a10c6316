//! Observed Turnstile
//!
//! This demo attaches a recording observer to the classic turnstile
//! machine: a coin unlocks it, a push locks it again. Every committed
//! transition is logged with a timestamp, and the traversed state path
//! is recovered from the log afterwards.
//!
//! Key concepts:
//! - Attaching an observer at construction time
//! - Safe stepping with recoverable misses
//! - Reset restores the initial state without emitting events
//!
//! Run with: cargo run --example observed_turnstile

use std::sync::Arc;

use mealy::{Machine, Transition, TransitionLog};

fn main() {
    let log = Arc::new(TransitionLog::new());
    let machine = Machine::with_observer(
        "turnstile",
        "locked",
        vec![
            Transition::new("coin", "locked", "unlocked", "unlock"),
            Transition::new("push", "unlocked", "locked", "lock"),
        ],
        log.clone(),
    )
    .unwrap();

    println!("Initial state: {}", machine.current_state());

    for action in ["coin", "push", "coin"] {
        match machine.step(&action.into()) {
            Ok((output, continuation)) => {
                println!(
                    "  Action: {action} -> State: {}, Output: {output}",
                    continuation.current_state()
                );
            }
            Err(err) => println!("  Action: {action} -> {err}"),
        }
    }

    // A second coin while already unlocked has no transition.
    let miss = machine.step(&"coin".into());
    println!("Stepping coin again: {:?}", miss.map(|(output, _)| output));

    println!("\nObserved {} transitions:", log.len());
    for entry in log.entries() {
        println!(
            "  [{}] {}: {} -> {} ({})",
            entry.timestamp,
            entry.event.action,
            entry.event.from_state,
            entry.event.to_state,
            entry.event.output
        );
    }

    let path: Vec<String> = log.path().iter().map(ToString::to_string).collect();
    println!("Path: {}", path.join(" -> "));

    machine.reset();
    println!("After reset: {}", machine.current_state());
    println!("Events after reset: {} (reset emits none)", log.len());
}
