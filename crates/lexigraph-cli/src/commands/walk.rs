//! Random-walk command.

use std::io::{self, BufRead};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use lexigraph_engine::walk_with;

use crate::OutputFormat;
use crate::output::Format;

/// Run the walk command.
///
/// Steps are paced by `delay_ms` and printed live as the route grows; the
/// first line read from stdin (pressing Enter is enough) raises the
/// cancellation flag the walker polls before every step.
pub fn run(
    file: &Path,
    output: Option<&Path>,
    delay_ms: u64,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let graph = super::load_graph(file)?;

    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel = Arc::clone(&cancel);
        thread::spawn(move || {
            let mut line = String::new();
            if io::stdin().lock().read_line(&mut line).is_ok() {
                cancel.store(true, Ordering::Relaxed);
            }
        });
    }

    let live = matches!(Format::from(format), Format::Table) && !quiet;
    if live {
        println!("Press Enter to stop the walk.");
    }

    let delay = Duration::from_millis(delay_ms);
    let mut route = String::new();
    let mut rng = rand::thread_rng();
    let walk = walk_with(&*graph, &mut rng, &cancel, |edge| {
        if route.is_empty() {
            route.push_str(&edge.from);
        }
        route.push_str("-->");
        route.push_str(&edge.to);
        if live {
            println!("{route}");
        }
        thread::sleep(delay);
    });

    let Some(walk) = walk else {
        if !quiet {
            println!("The graph has no vertices to walk.");
        }
        return Ok(());
    };

    if live && cancel.load(Ordering::Relaxed) {
        println!("User interrupt.");
    }

    if let Some(path) = output {
        std::fs::write(path, walk.route())
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if quiet {
        return Ok(());
    }
    match Format::from(format) {
        Format::Json => println!("{}", serde_json::to_string_pretty(&walk)?),
        Format::Table => println!("{}", walk.route()),
    }

    Ok(())
}
