//! Graph information command.

use std::path::Path;

use anyhow::Result;
use lexigraph_core::GraphBuilder;
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Summary of the built graph.
#[derive(Serialize)]
struct InfoOutput {
    document_tokens: usize,
    distinct_words: usize,
    edge_count: usize,
    total_adjacencies: u64,
}

/// Run the info command.
pub fn run(file: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    let tokens = super::load_tokens(file)?;
    let graph = GraphBuilder::new().build(&tokens)?;
    let edges = graph.edges();

    let info = InfoOutput {
        document_tokens: tokens.len(),
        distinct_words: graph.len(),
        edge_count: edges.len(),
        total_adjacencies: edges.iter().map(|e| u64::from(e.weight)).sum(),
    };

    match Format::from(format) {
        Format::Json => {
            if !quiet {
                println!("{}", serde_json::to_string_pretty(&info)?);
            }
        }
        Format::Table => {
            let items = vec![
                ("Document Tokens", info.document_tokens.to_string()),
                ("Distinct Words", info.distinct_words.to_string()),
                ("Edges", info.edge_count.to_string()),
                ("Total Adjacencies", info.total_adjacencies.to_string()),
            ];
            output::print_key_value_table(&items, quiet);
        }
    }

    Ok(())
}
