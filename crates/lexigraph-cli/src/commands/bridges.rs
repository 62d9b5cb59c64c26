//! Bridge-word query command.

use std::path::Path;

use anyhow::Result;
use lexigraph_engine::bridge_words;
use serde::Serialize;

use crate::OutputFormat;
use crate::output::Format;

/// Bridge query result.
#[derive(Serialize)]
struct BridgesOutput {
    word1: String,
    word2: String,
    /// Whether both words are vertices of the graph.
    known: bool,
    bridges: Vec<String>,
}

/// Run the bridges command.
pub fn run(file: &Path, word1: &str, word2: &str, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = super::load_graph(file)?;
    let first = word1.to_ascii_lowercase();
    let second = word2.to_ascii_lowercase();

    let known = graph.contains(&first) && graph.contains(&second);
    let output = BridgesOutput {
        word1: first.clone(),
        word2: second.clone(),
        known,
        bridges: bridge_words(&*graph, &first, &second),
    };

    if quiet {
        return Ok(());
    }

    match Format::from(format) {
        Format::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        Format::Table => println!("{}", describe(&output)),
    }

    Ok(())
}

/// The user-facing sentence for a bridge query result.
fn describe(output: &BridgesOutput) -> String {
    let (word1, word2) = (&output.word1, &output.word2);
    if !output.known {
        return format!("No \"{word1}\" or \"{word2}\" in the graph!");
    }
    match output.bridges.as_slice() {
        [] => format!("No bridge words from \"{word1}\" to \"{word2}\"!"),
        [only] => format!("The bridge word from \"{word1}\" to \"{word2}\" is: {only}"),
        [head @ .., last] => format!(
            "The bridge words from \"{word1}\" to \"{word2}\" are: {}, and {last}.",
            head.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(known: bool, bridges: &[&str]) -> BridgesOutput {
        BridgesOutput {
            word1: "explore".to_owned(),
            word2: "new".to_owned(),
            known,
            bridges: bridges.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn unknown_words_sentence() {
        assert_eq!(
            describe(&output(false, &[])),
            "No \"explore\" or \"new\" in the graph!"
        );
    }

    #[test]
    fn no_bridges_sentence() {
        assert_eq!(
            describe(&output(true, &[])),
            "No bridge words from \"explore\" to \"new\"!"
        );
    }

    #[test]
    fn single_bridge_sentence() {
        assert_eq!(
            describe(&output(true, &["strange"])),
            "The bridge word from \"explore\" to \"new\" is: strange"
        );
    }

    #[test]
    fn several_bridges_sentence() {
        assert_eq!(
            describe(&output(true, &["strange", "bold", "vast"])),
            "The bridge words from \"explore\" to \"new\" are: strange, bold, and vast."
        );
    }
}
