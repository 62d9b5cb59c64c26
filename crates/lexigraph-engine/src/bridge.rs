//! Bridge-word discovery.
//!
//! A word `w` bridges `word1` to `word2` when the edges `word1 -> w` and
//! `w -> word2` both exist. The relation is directional: bridges from
//! `word1` to `word2` say nothing about bridges from `word2` to `word1`.

use lexigraph_core::WordGraph;

/// Returns every bridge word from `word1` to `word2`, in the
/// neighbor-iteration order of `word1`'s successors.
///
/// Returns an empty list both when no bridge exists and when either word
/// is not a vertex; callers that need to tell those cases apart check
/// vertex membership separately.
pub fn bridge_words<G>(graph: &G, word1: &str, word2: &str) -> Vec<String>
where
    G: WordGraph + ?Sized,
{
    let (Some(first), Some(second)) = (graph.index_of(word1), graph.index_of(word2)) else {
        return Vec::new();
    };
    let words = graph.words();
    graph
        .neighbor_indices(first)
        .into_iter()
        .filter(|&middle| graph.weight_between(middle, second) > 0)
        .map(|middle| words[middle].to_owned())
        .collect()
}
