//! Ones Tracker
//!
//! This demo tracks the parity of '1' inputs seen so far: the machine
//! alternates between an `even` and an `odd` state, emitting the parity
//! as its output on every step.
//!
//! Key concepts:
//! - Self-transitions ('0' inputs keep the current state)
//! - Guarding with `can_step` before `step_unsafe`
//! - Chaining steps through continuations
//! - Exporting the machine as a Mermaid diagram
//!
//! Run with: cargo run --example ones_tracker

use mealy::diagram::write_markdown_file;
use mealy::{Action, MachineBuilder, transitions};

fn main() {
    let machine = MachineBuilder::new("Ones tracker")
        .initial_state("even")
        .transitions(transitions![
            ("0", "even" => "even", "even"),
            ("0", "odd" => "odd", "odd"),
            ("1", "even" => "odd", "odd"),
            ("1", "odd" => "even", "even"),
        ])
        .build()
        .unwrap();

    write_markdown_file(&machine, "mealy_diagram.md").unwrap();
    println!("Initial state: {}", machine.current_state());

    // Simulate a sequence of inputs.
    let inputs = ["1", "0", "1", "1", "0", "1"].map(Action::from);

    println!("Processing inputs: {inputs:?}");
    for input in &inputs {
        if machine.can_step(input) {
            let (output, continuation) = machine.step_unsafe(input);
            println!(
                "  Input: {input} -> New State: {}, Output: {output}",
                continuation.current_state()
            );
        } else {
            panic!("Cannot step with input {input}");
        }
    }

    println!("\nFinal state: {}", machine.current_state());
    println!("Diagram written to mealy_diagram.md");
}
