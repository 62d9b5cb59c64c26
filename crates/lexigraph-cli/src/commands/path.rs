//! Shortest-path command.

use std::path::Path;

use anyhow::{Context, Result};
use lexigraph_core::{Edge, WordGraph};
use lexigraph_engine::{PathEntry, shortest_path, shortest_paths, to_dot};

use crate::OutputFormat;
use crate::output::{self, Format};

/// Run the path command.
///
/// With two words, prints the single shortest path (and optionally writes
/// a DOT rendering with that path highlighted); with one word, prints the
/// shortest path to every vertex, unreachable vertices included.
pub fn run(
    file: &Path,
    word1: &str,
    word2: Option<&str>,
    dot: Option<&Path>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let graph = super::load_graph(file)?;
    let source = word1.to_ascii_lowercase();
    if !graph.contains(&source) {
        if !quiet {
            println!("\"{word1}\" is not exist");
        }
        return Ok(());
    }

    match word2 {
        Some(word2) => {
            let dest = word2.to_ascii_lowercase();
            if !graph.contains(&dest) {
                if !quiet {
                    println!("\"{word2}\" is not exist");
                }
                return Ok(());
            }
            let entry = shortest_path(&*graph, &source, &dest)?;

            if let Some(dot_path) = dot {
                let highlight = highlight_edges(&*graph, &entry);
                std::fs::write(dot_path, to_dot(&*graph, &highlight))
                    .with_context(|| format!("failed to write {}", dot_path.display()))?;
            }

            if quiet {
                return Ok(());
            }
            match Format::from(format) {
                Format::Json => println!("{}", serde_json::to_string_pretty(&entry)?),
                Format::Table => println!("{}", describe(&source, &entry)),
            }
        }
        None => {
            let paths = shortest_paths(&*graph, &source)?;
            if quiet {
                return Ok(());
            }
            match Format::from(format) {
                Format::Json => println!("{}", serde_json::to_string_pretty(&paths)?),
                Format::Table => {
                    let mut table = output::create_table();
                    output::add_header(&mut table, &["Target", "Distance", "Path"]);
                    for entry in &paths.entries {
                        match (entry.route(), entry.distance) {
                            (Some(route), Some(distance)) => {
                                table.add_row(vec![
                                    entry.target.clone(),
                                    distance.to_string(),
                                    route,
                                ]);
                            }
                            _ => {
                                table.add_row(vec![
                                    entry.target.clone(),
                                    "-".to_owned(),
                                    "(unreachable)".to_owned(),
                                ]);
                            }
                        }
                    }
                    println!("{table}");
                }
            }
        }
    }

    Ok(())
}

/// The user-facing line for a single shortest-path result.
fn describe(source: &str, entry: &PathEntry) -> String {
    match (entry.route(), entry.distance) {
        (Some(route), Some(distance)) => format!("({distance}): {route}"),
        _ => format!("{source} -x {}: unreachable", entry.target),
    }
}

/// The edges along a reconstructed path, for DOT highlighting.
fn highlight_edges(graph: &dyn WordGraph, entry: &PathEntry) -> Vec<Edge> {
    let Some(hops) = &entry.path else {
        return Vec::new();
    };
    hops.windows(2)
        .map(|pair| Edge {
            from: pair[0].clone(),
            to: pair[1].clone(),
            weight: graph.edge_weight(&pair[0], &pair[1]).unwrap_or_default(),
        })
        .collect()
}
