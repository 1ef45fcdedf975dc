use std::fmt::Write;

use crate::history::{Revision, Timeline};

/// Name of the top-level directed graph.
const GRAPH_NAME: &str = "G";
/// Attributes applied to every commit node.
const NODE_STYLE: &str = "shape=box, style=filled, color=lightblue";
const INDENT: &str = "    ";

/// Render a timeline as a DOT directed graph: one node per revision and an
/// edge between each consecutive pair, in history order.
///
/// Lines are joined with `\n` and there is no trailing newline.
pub fn render(timeline: &Timeline) -> String {
    let mut out = String::new();
    write!(out, "digraph {} {{", GRAPH_NAME).unwrap();

    let mut previous: Option<String> = None;
    for revision in timeline.revisions() {
        let current = node_label(revision);
        write!(out, "\n{INDENT}{} [{}]", current, NODE_STYLE).unwrap();

        if let Some(previous) = &previous {
            write!(out, "\n{INDENT}{} -> {}", previous, current).unwrap();
        }

        previous = Some(current);
    }

    out.push_str("\n}");
    out
}

/// Quoted node id, e.g. `"3: 1a2b3c"`.
fn node_label(revision: Revision<'_>) -> String {
    format!("\"{}: {}\"", revision.order, revision.commit)
}

#[cfg(test)]
#[path = "dot_test.rs"]
mod tests;
