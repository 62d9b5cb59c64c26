//! Text expansion command.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::OutputFormat;
use crate::output::Format;

/// Expansion result.
#[derive(Serialize)]
struct ExpandOutput {
    sentence: String,
    expanded: String,
}

/// Run the expand command.
pub fn run(file: &Path, sentence: &str, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = super::load_graph(file)?;
    let mut rng = rand::thread_rng();
    let expanded = lexigraph_engine::expand(&*graph, sentence, &mut rng);

    if quiet {
        return Ok(());
    }

    match Format::from(format) {
        Format::Json => {
            let output = ExpandOutput {
                sentence: sentence.to_owned(),
                expanded,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Format::Table => println!("{expanded}"),
    }

    Ok(())
}
