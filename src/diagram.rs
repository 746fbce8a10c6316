//! Mermaid state-diagram rendering.
//!
//! Renders a machine's behavior table as `stateDiagram-v2` text and
//! offers a small file-writer that wraps the rendering in a fenced
//! markdown block. Output is canonicalized (lexicographic by
//! from-state, then to-state, then action) so repeated renderings of
//! the same machine are byte-identical.

use crate::core::{Action, MachineState, Output};
use crate::error::DiagramError;
use crate::machine::Machine;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::debug;

impl Machine {
    /// Render the machine as a Mermaid `stateDiagram-v2` source string.
    ///
    /// The diagram has a title header naming the machine, an entry line
    /// for the initial state, and one edge line per distinct
    /// `(from_state, to_state)` pair. Every action between the same
    /// pair is combined onto that pair's single edge label, rendered as
    /// `action -> output` and comma-joined. Self-transitions render
    /// like any other edge.
    pub fn to_mermaid(&self) -> String {
        let mut edges: BTreeMap<(MachineState, MachineState), Vec<(Action, Output)>> =
            BTreeMap::new();
        for transition in self.behavior().transitions() {
            edges
                .entry((transition.from_state.clone(), transition.to_state.clone()))
                .or_default()
                .push((transition.action.clone(), transition.output.clone()));
        }

        let mut diagram = String::new();
        diagram.push_str("---\n");
        let _ = writeln!(diagram, "title: {}", self.name());
        diagram.push_str("---\n");
        diagram.push_str(" stateDiagram-v2\n");
        let _ = writeln!(diagram, "    [*] --> {}", self.initial_state());

        for ((from, to), mut labels) in edges {
            labels.sort();
            let label = labels
                .iter()
                .map(|(action, output)| format!("{action} -> {output}"))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(diagram, "    {from} --> {to} : {label}");
        }

        diagram
    }
}

/// Write a machine's diagram to `path` as a markdown file.
///
/// The diagram source is wrapped in a ` ```mermaid ` fence so the file
/// renders directly in markdown viewers.
pub fn write_markdown_file(machine: &Machine, path: impl AsRef<Path>) -> Result<(), DiagramError> {
    let path = path.as_ref();
    let content = format!("```mermaid\n{}```\n", machine.to_mermaid());
    fs::write(path, content)?;
    debug!(machine = machine.name(), path = %path.display(), "diagram written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transition;
    use crate::transitions;

    #[test]
    fn renders_title_entry_and_edges() {
        let machine = Machine::new(
            "test-machine",
            "state1",
            transitions![
                ("action1", "state1" => "state2", "output1"),
                ("action2", "state2" => "state1", "output2"),
            ],
        )
        .unwrap();

        let diagram = machine.to_mermaid();

        assert!(diagram.contains("title: test-machine"));
        assert!(diagram.contains("stateDiagram-v2"));
        assert!(diagram.contains("[*] --> state1"));
        assert!(diagram.contains("state1 --> state2 : action1 -> output1"));
        assert!(diagram.contains("state2 --> state1 : action2 -> output2"));
    }

    #[test]
    fn output_is_canonically_ordered() {
        let machine = Machine::new(
            "demo",
            "s1",
            transitions![
                ("b", "s2" => "s1", "o2"),
                ("a", "s1" => "s2", "o1"),
            ],
        )
        .unwrap();

        let expected = "---\n\
                        title: demo\n\
                        ---\n \
                        stateDiagram-v2\n    \
                        [*] --> s1\n    \
                        s1 --> s2 : a -> o1\n    \
                        s2 --> s1 : b -> o2\n";
        assert_eq!(machine.to_mermaid(), expected);
    }

    #[test]
    fn actions_between_the_same_pair_share_one_edge() {
        let machine = Machine::new(
            "test-multiple-actions",
            "S1",
            transitions![
                ("x", "S1" => "S1", "o1"),
                ("y", "S1" => "S1", "o2"),
            ],
        )
        .unwrap();

        let diagram = machine.to_mermaid();

        let edge_lines: Vec<&str> = diagram
            .lines()
            .filter(|line| line.contains("S1 --> S1"))
            .collect();
        assert_eq!(edge_lines.len(), 1);
        assert!(edge_lines[0].contains("x -> o1"));
        assert!(edge_lines[0].contains("y -> o2"));
    }

    #[test]
    fn multiple_pairs_and_self_loops_render_together() {
        let machine = Machine::new(
            "test-multiple-actions",
            "state1",
            transitions![
                ("action1", "state1" => "state1", "output1"),
                ("action2", "state1" => "state1", "output2"),
                ("action3", "state1" => "state2", "output3"),
                ("action4", "state2" => "state1", "output4"),
                ("action5", "state2" => "state1", "output5"),
            ],
        )
        .unwrap();

        let diagram = machine.to_mermaid();

        assert!(diagram.contains("state1 --> state2 : action3 -> output3"));
        assert!(diagram.contains("state1 --> state1 : action1 -> output1, action2 -> output2"));
        assert!(diagram.contains("state2 --> state1 : action4 -> output4, action5 -> output5"));
    }

    #[test]
    fn write_markdown_file_wraps_diagram_in_a_fence() {
        let machine = Machine::new(
            "fenced",
            "a",
            vec![Transition::new("go", "a", "b", "out")],
        )
        .unwrap();

        let path = std::env::temp_dir().join("mealy-diagram-fence-test.md");
        write_markdown_file(&machine, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(written.starts_with("```mermaid\n---\n"));
        assert!(written.ends_with("```\n"));
        assert!(written.contains("title: fenced"));
        assert!(written.contains("a --> b : go -> out"));
    }
}
