//! CLI command implementations.

pub mod bridges;
pub mod expand;
pub mod export;
pub mod info;
pub mod path;
pub mod walk;

use std::path::Path;

use anyhow::{Context, Result};
use lexigraph_core::{GraphBuilder, WordGraph, text};

/// Reads the document and splits it into lowercase alphabetic tokens.
pub fn load_tokens(file: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    Ok(text::tokenize(&content))
}

/// Reads the document and builds the adjacency graph.
pub fn load_graph(file: &Path) -> Result<Box<dyn WordGraph + Send + Sync>> {
    let tokens = load_tokens(file)?;
    Ok(GraphBuilder::new().build(&tokens)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_graph_tokenizes_and_builds() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "To be, or not to be!").unwrap();
        let graph = load_graph(file.path()).unwrap();
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.edge_weight("to", "be"), Some(2));
    }

    #[test]
    fn missing_file_is_a_readable_error() {
        let err = load_graph(Path::new("/no/such/document.txt")).err().unwrap();
        assert!(err.to_string().contains("/no/such/document.txt"));
    }
}
