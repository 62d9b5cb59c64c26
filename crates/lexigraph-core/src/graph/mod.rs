//! The word-adjacency graph model.
//!
//! One capability set, two interchangeable stores: [`DenseGraph`] keeps a
//! square weight matrix and is the right choice for the small vocabularies
//! a single document produces; [`SparseGraph`] keeps per-row weight maps
//! for vocabularies where an O(n²) matrix would be wasteful. Both implement
//! [`WordGraph`], and every query algorithm is written against that trait
//! alone.

mod dense;
mod sparse;

pub use dense::DenseGraph;
pub use sparse::SparseGraph;

use std::fmt;

use serde::Serialize;

use crate::error::Result;

/// A directed weighted edge between two words.
///
/// An `Edge` value only ever describes a present adjacency: its weight is
/// the number of observed occurrences and is always at least 1. Absent
/// adjacencies are encoded as weight 0 inside the stores and are never
/// materialized as `Edge` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Source word.
    pub from: String,
    /// Destination word.
    pub to: String,
    /// Observed occurrence count.
    pub weight: u32,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) = {}", self.from, self.to, self.weight)
    }
}

/// Read/write contract shared by the dense and sparse stores.
///
/// Vertices are addressable both by value (the word itself) and by the
/// stable index assigned at insertion; the two schemes resolve consistently
/// for the lifetime of the graph. After construction the graph is treated
/// as read-only: no operation removes a vertex or an edge.
pub trait WordGraph {
    /// Number of vertices.
    fn len(&self) -> usize;

    /// Whether the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a vertex and returns its permanent index, extending the
    /// weight storage by one zero row and column.
    ///
    /// Words are unique by value: inserting a word that is already a vertex
    /// leaves the graph unchanged and returns the existing index.
    fn add_vertex(&mut self, word: &str) -> usize;

    /// Resolves a word to its vertex index.
    fn index_of(&self, word: &str) -> Option<usize>;

    /// Resolves a vertex index to its word.
    ///
    /// Fails with [`GraphError::IndexOutOfBounds`] unless
    /// `0 <= index < len()`.
    ///
    /// [`GraphError::IndexOutOfBounds`]: crate::error::GraphError::IndexOutOfBounds
    fn word_at(&self, index: usize) -> Result<&str>;

    /// All words in index order.
    fn words(&self) -> Vec<&str>;

    /// Whether the word is a vertex.
    fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_some()
    }

    /// Direct successors of `word` in index order; empty if `word` is not
    /// a vertex.
    fn neighbors(&self, word: &str) -> Vec<String> {
        match self.index_of(word) {
            Some(index) => {
                let words = self.words();
                self.neighbor_indices(index)
                    .into_iter()
                    .map(|i| words[i].to_owned())
                    .collect()
            }
            None => Vec::new(),
        }
    }

    /// Indices of the direct successors of the vertex at `index`, in index
    /// order. Out-of-range indices have no successors.
    fn neighbor_indices(&self, index: usize) -> Vec<usize>;

    /// Increments the `(from, to)` weight by 1, recording one more observed
    /// adjacency.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if either endpoint is
    /// absent.
    ///
    /// [`GraphError::VertexNotFound`]: crate::error::GraphError::VertexNotFound
    fn add_edge(&mut self, from: &str, to: &str) -> Result<()>;

    /// Overwrites the `(from, to)` weight with exactly `weight`.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if either endpoint is
    /// absent.
    ///
    /// [`GraphError::VertexNotFound`]: crate::error::GraphError::VertexNotFound
    fn set_edge(&mut self, from: &str, to: &str, weight: u32) -> Result<()>;

    /// The stored `(from, to)` weight.
    ///
    /// Returns `None` iff either vertex is unknown. `Some(0)` means both
    /// vertices exist but no adjacency was observed; the two cases are
    /// deliberately distinct.
    fn edge_weight(&self, from: &str, to: &str) -> Option<u32>;

    /// Index-addressed weight read; 0 encodes an absent edge.
    fn weight_between(&self, from: usize, to: usize) -> u32;

    /// Every present edge (weight > 0) in row-major order.
    fn edges(&self) -> Vec<Edge>;
}
