//! Bridge-based text expansion.
//!
//! Walks a new sentence against an existing graph and inserts a bridge
//! word between every consecutive token pair that has one. Graph lookups
//! use the lowercased token forms; the output echoes the input tokens with
//! their original casing.

use rand::Rng;

use lexigraph_core::{WordGraph, text};

use crate::bridge::bridge_words;

/// Expands `sentence` by interleaving bridge words from `graph`.
///
/// For each consecutive token pair: exactly one bridge is inserted as-is,
/// several bridges have one chosen uniformly at random through `rng`, and
/// none inserts nothing. Non-alphabetic characters separate tokens and do
/// not survive into the output; tokens are joined by single spaces.
pub fn expand<G, R>(graph: &G, sentence: &str, rng: &mut R) -> String
where
    G: WordGraph + ?Sized,
    R: Rng,
{
    let tokens = text::split_words(sentence);
    let mut out: Vec<String> = Vec::with_capacity(tokens.len() * 2);
    let mut previous: Option<String> = None;

    for token in tokens {
        let lower = token.to_ascii_lowercase();
        if let Some(prev) = &previous {
            let mut bridges = bridge_words(graph, prev, &lower);
            if !bridges.is_empty() {
                // a single bridge is inserted without consulting the rng
                let pick = if bridges.len() == 1 {
                    0
                } else {
                    rng.gen_range(0..bridges.len())
                };
                out.push(bridges.swap_remove(pick));
            }
        }
        out.push(token);
        previous = Some(lower);
    }

    out.join(" ")
}
