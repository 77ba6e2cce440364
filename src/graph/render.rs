//! Textual rendering of a recorded graph.
//!
//! Each node becomes a `<id>[label="<text>"]` line and each edge a
//! `<parent>-><child>` line, emitted in recording order. `to_dot` wraps
//! the lines in a `digraph { ... }` envelope; callers with their own
//! envelope use `write_lines` directly.

use super::recorder::{GraphEvent, GraphRecorder};
use std::fmt::{self, Write};

impl GraphRecorder {
    /// Write node and edge lines, one per event, each ending in `\n`.
    pub fn write_lines<W: Write>(&self, out: &mut W) -> fmt::Result {
        for event in self.events() {
            match event {
                GraphEvent::Node(id) => {
                    let label = self.node(*id).map_or("", |node| node.label.as_str());
                    writeln!(out, "{id}[label=\"{}\"]", escape_label(label))?;
                }
                GraphEvent::Edge { parent, child } => writeln!(out, "{parent}->{child}")?,
            }
        }
        Ok(())
    }

    /// Render the whole graph as a dot document.
    ///
    /// ```rust
    /// use exhaust::graph::{GraphRecorder, NodeKind};
    ///
    /// let mut graph = GraphRecorder::new();
    /// let a = graph.record_node("start".to_string(), NodeKind::Choice);
    /// let b = graph.record_node("done".to_string(), NodeKind::Goal);
    /// graph.record_edge(a, b);
    ///
    /// assert_eq!(
    ///     graph.to_dot(),
    ///     "digraph {\n0[label=\"start\"]\n1[label=\"done\"]\n0->1\n}\n"
    /// );
    /// ```
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph {\n");
        // Writing into a String cannot fail.
        let _ = self.write_lines(&mut out);
        out.push_str("}\n");
        out
    }
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
