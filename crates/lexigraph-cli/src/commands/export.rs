//! Graph export command.

use std::path::Path;

use anyhow::{Context, Result};
use lexigraph_engine::to_dot;

/// Run the export command, writing DOT text to `output` or stdout.
pub fn run(file: &Path, output: Option<&Path>) -> Result<()> {
    let graph = super::load_graph(file)?;
    let dot = to_dot(&*graph, &[]);

    match output {
        Some(path) => std::fs::write(path, dot)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{dot}"),
    }

    Ok(())
}
