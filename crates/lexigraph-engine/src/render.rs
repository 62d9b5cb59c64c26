//! Graphviz DOT rendering.
//!
//! Turns a graph, and optionally a path to highlight, into DOT text for
//! external tooling to lay out. Output is deterministic: vertices in index
//! order, edges in row-major order, so renderings of the same graph diff
//! cleanly. The renderer never mutates the graph.

use lexigraph_core::{Edge, WordGraph};

/// Renders `graph` as a directed DOT graph.
///
/// Edge labels carry the weights. Edges contained in `highlight` are drawn
/// red, everything else black; pass an empty slice for a plain rendering.
pub fn to_dot<G>(graph: &G, highlight: &[Edge]) -> String
where
    G: WordGraph + ?Sized,
{
    let mut out = String::from("digraph words {\n");
    for word in graph.words() {
        out.push_str(&format!("    {word:?};\n"));
    }
    for edge in graph.edges() {
        let color = if highlight.contains(&edge) {
            "red"
        } else {
            "black"
        };
        out.push_str(&format!(
            "    {:?} -> {:?} [label=\"{}\", color={}];\n",
            edge.from, edge.to, edge.weight, color
        ));
    }
    out.push_str("}\n");
    out
}
