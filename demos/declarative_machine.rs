//! Declarative Machine
//!
//! This demo builds a machine from a JSON definition instead of code,
//! the shape a definition takes when it lives in a configuration file.
//!
//! Key concepts:
//! - Parsing a `MachineDefinition` from JSON
//! - All construction validation applies to parsed definitions too
//! - Rendering the Mermaid diagram source directly
//!
//! Run with: cargo run --example declarative_machine

use mealy::MachineDefinition;

const DEFINITION: &str = r#"{
    "name": "traffic-light",
    "initial_state": "red",
    "transitions": [
        {"action": "next", "from_state": "red", "to_state": "green", "output": "go"},
        {"action": "next", "from_state": "green", "to_state": "yellow", "output": "slow"},
        {"action": "next", "from_state": "yellow", "to_state": "red", "output": "stop"}
    ]
}"#;

fn main() {
    let definition = MachineDefinition::from_json(DEFINITION).unwrap();
    println!("Parsed definition for {:?}", definition.name);

    let machine = definition.build().unwrap();

    let next = "next".into();
    for _ in 0..4 {
        let (output, continuation) = machine.step(&next).unwrap();
        println!(
            "  next -> State: {}, Output: {output}",
            continuation.current_state()
        );
    }

    println!("\n{}", machine.to_mermaid());
}
