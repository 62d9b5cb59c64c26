//! Sparse map-based store.
//!
//! Keeps one weight map per source vertex instead of a square matrix.
//! Memory is proportional to the number of present edges, which makes this
//! the right store once the vocabulary grows past the point where an O(n²)
//! matrix is defensible. Answers every [`WordGraph`] read identically to
//! [`DenseGraph`](super::DenseGraph) for the same build input.

use hashbrown::HashMap;
use indexmap::IndexSet;

use super::{Edge, WordGraph};
use crate::error::{GraphError, Result};

/// Adjacency-map graph over string-labeled vertices.
#[derive(Debug, Clone)]
pub struct SparseGraph {
    /// Insertion-ordered word table; the set index is the vertex index.
    words: IndexSet<String>,
    /// Per-source weight maps, indexed by source vertex. Entries are only
    /// present for weights > 0, except where `set_edge` stored an explicit
    /// zero, which reads the same as absence.
    rows: Vec<HashMap<usize, u32>>,
}

impl SparseGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: IndexSet::new(),
            rows: Vec::new(),
        }
    }

    /// Creates a graph with the given vertices and no edges.
    pub fn with_vertices<I, S>(vertices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: IndexSet<String> = vertices.into_iter().map(Into::into).collect();
        let rows = vec![HashMap::new(); words.len()];
        Self { words, rows }
    }

    fn resolve(&self, from: &str, to: &str) -> Result<(usize, usize)> {
        let from_idx = self.words.get_index_of(from).ok_or_else(|| {
            GraphError::VertexNotFound {
                word: from.to_owned(),
            }
        })?;
        let to_idx = self
            .words
            .get_index_of(to)
            .ok_or_else(|| GraphError::VertexNotFound { word: to.to_owned() })?;
        Ok((from_idx, to_idx))
    }
}

impl Default for SparseGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl WordGraph for SparseGraph {
    fn len(&self) -> usize {
        self.words.len()
    }

    fn add_vertex(&mut self, word: &str) -> usize {
        let (index, inserted) = self.words.insert_full(word.to_owned());
        if inserted {
            self.rows.push(HashMap::new());
        }
        index
    }

    fn index_of(&self, word: &str) -> Option<usize> {
        self.words.get_index_of(word)
    }

    fn word_at(&self, index: usize) -> Result<&str> {
        self.words
            .get_index(index)
            .map(String::as_str)
            .ok_or(GraphError::IndexOutOfBounds {
                index,
                len: self.words.len(),
            })
    }

    fn words(&self) -> Vec<&str> {
        self.words.iter().map(String::as_str).collect()
    }

    fn neighbor_indices(&self, index: usize) -> Vec<usize> {
        let Some(row) = self.rows.get(index) else {
            return Vec::new();
        };
        let mut indices: Vec<usize> = row
            .iter()
            .filter(|&(_, &w)| w > 0)
            .map(|(&i, _)| i)
            .collect();
        indices.sort_unstable();
        indices
    }

    fn add_edge(&mut self, from: &str, to: &str) -> Result<()> {
        let (from_idx, to_idx) = self.resolve(from, to)?;
        *self.rows[from_idx].entry(to_idx).or_insert(0) += 1;
        Ok(())
    }

    fn set_edge(&mut self, from: &str, to: &str, weight: u32) -> Result<()> {
        let (from_idx, to_idx) = self.resolve(from, to)?;
        self.rows[from_idx].insert(to_idx, weight);
        Ok(())
    }

    fn edge_weight(&self, from: &str, to: &str) -> Option<u32> {
        let from_idx = self.words.get_index_of(from)?;
        let to_idx = self.words.get_index_of(to)?;
        Some(
            self.rows[from_idx]
                .get(&to_idx)
                .copied()
                .unwrap_or_default(),
        )
    }

    fn weight_between(&self, from: usize, to: usize) -> u32 {
        self.rows
            .get(from)
            .and_then(|row| row.get(&to))
            .copied()
            .unwrap_or_default()
    }

    fn edges(&self) -> Vec<Edge> {
        let mut out = Vec::new();
        for from in 0..self.rows.len() {
            for to in self.neighbor_indices(from) {
                out.push(Edge {
                    from: self.words[from].clone(),
                    to: self.words[to].clone(),
                    weight: self.rows[from][&to],
                });
            }
        }
        out
    }
}
