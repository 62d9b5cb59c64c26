//! Dense adjacency-matrix store.
//!
//! Keeps the full square weight matrix as a flat row-major `Vec<u32>`.
//! The right store while the vocabulary is small: every weight read is one
//! indexed load and row scans are cache-friendly. Growing the vertex table
//! rebuilds the matrix with a wider stride, preserving all existing
//! entries.

use indexmap::IndexSet;

use super::{Edge, WordGraph};
use crate::error::{GraphError, Result};

/// Adjacency-matrix graph over string-labeled vertices.
#[derive(Debug, Clone)]
pub struct DenseGraph {
    /// Insertion-ordered word table; the set index is the vertex index.
    words: IndexSet<String>,
    /// Row-major weight matrix, `words.len()` squared entries.
    weights: Vec<u32>,
}

impl DenseGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: IndexSet::new(),
            weights: Vec::new(),
        }
    }

    /// Creates a graph with the given vertices and no edges, allocating the
    /// matrix once.
    pub fn with_vertices<I, S>(vertices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: IndexSet<String> = vertices.into_iter().map(Into::into).collect();
        let n = words.len();
        Self {
            words,
            weights: vec![0; n * n],
        }
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

impl Default for DenseGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl WordGraph for DenseGraph {
    fn len(&self) -> usize {
        self.words.len()
    }

    fn add_vertex(&mut self, word: &str) -> usize {
        let n = self.words.len();
        let (index, inserted) = self.words.insert_full(word.to_owned());
        if !inserted {
            return index;
        }

        // Widen the matrix from n x n to (n+1) x (n+1), keeping every
        // existing entry at its (row, col) position.
        let mut grown = vec![0; (n + 1) * (n + 1)];
        for row in 0..n {
            let src = row * n;
            let dst = row * (n + 1);
            grown[dst..dst + n].copy_from_slice(&self.weights[src..src + n]);
        }
        self.weights = grown;
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
        let n = self.words.len();
        if index >= n {
            return Vec::new();
        }
        let row = &self.weights[index * n..(index + 1) * n];
        row.iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0)
            .map(|(i, _)| i)
            .collect()
    }

    fn add_edge(&mut self, from: &str, to: &str) -> Result<()> {
        let (from_idx, to_idx) = self.resolve(from, to)?;
        let n = self.words.len();
        self.weights[from_idx * n + to_idx] += 1;
        Ok(())
    }

    fn set_edge(&mut self, from: &str, to: &str, weight: u32) -> Result<()> {
        let (from_idx, to_idx) = self.resolve(from, to)?;
        let n = self.words.len();
        self.weights[from_idx * n + to_idx] = weight;
        Ok(())
    }

    fn edge_weight(&self, from: &str, to: &str) -> Option<u32> {
        let from_idx = self.words.get_index_of(from)?;
        let to_idx = self.words.get_index_of(to)?;
        Some(self.weights[from_idx * self.words.len() + to_idx])
    }

    fn weight_between(&self, from: usize, to: usize) -> u32 {
        let n = self.words.len();
        if from >= n || to >= n {
            return 0;
        }
        self.weights[from * n + to]
    }

    fn edges(&self) -> Vec<Edge> {
        let n = self.words.len();
        let mut out = Vec::new();
        for from in 0..n {
            for to in 0..n {
                let weight = self.weights[from * n + to];
                if weight > 0 {
                    out.push(Edge {
                        from: self.words[from].clone(),
                        to: self.words[to].clone(),
                        weight,
                    });
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DenseGraph {
        let mut g = DenseGraph::with_vertices(["a", "b", "c"]);
        g.add_edge("a", "b").unwrap();
        g.add_edge("a", "b").unwrap();
        g.add_edge("b", "c").unwrap();
        g
    }

    #[test]
    fn add_edge_increments_weight() {
        let g = sample();
        assert_eq!(g.edge_weight("a", "b"), Some(2));
        assert_eq!(g.edge_weight("b", "c"), Some(1));
    }

    #[test]
    fn set_edge_overwrites_weight() {
        let mut g = sample();
        g.set_edge("a", "b", 7).unwrap();
        assert_eq!(g.edge_weight("a", "b"), Some(7));
    }

    #[test]
    fn absent_edge_is_zero_not_sentinel() {
        let g = sample();
        // both vertices known, no adjacency observed
        assert_eq!(g.edge_weight("c", "a"), Some(0));
        // unknown vertex
        assert_eq!(g.edge_weight("a", "zebra"), None);
        assert_eq!(g.edge_weight("zebra", "a"), None);
    }

    #[test]
    fn edge_to_unknown_vertex_fails() {
        let mut g = sample();
        let err = g.add_edge("a", "zebra").unwrap_err();
        assert_eq!(
            err,
            GraphError::VertexNotFound {
                word: "zebra".to_owned()
            }
        );
    }

    #[test]
    fn both_addressing_schemes_agree() {
        let g = sample();
        for (i, word) in g.words().iter().enumerate() {
            assert_eq!(g.index_of(word), Some(i));
            assert_eq!(g.word_at(i).unwrap(), *word);
        }
        assert!(matches!(
            g.word_at(3),
            Err(GraphError::IndexOutOfBounds { index: 3, len: 3 })
        ));
    }

    #[test]
    fn neighbors_in_index_order() {
        let mut g = DenseGraph::with_vertices(["a", "b", "c", "d"]);
        g.add_edge("a", "d").unwrap();
        g.add_edge("a", "b").unwrap();
        assert_eq!(g.neighbors("a"), vec!["b".to_owned(), "d".to_owned()]);
        assert!(g.neighbors("d").is_empty());
        assert!(g.neighbors("zebra").is_empty());
    }

    #[test]
    fn growth_preserves_existing_entries() {
        let mut g = sample();
        let index = g.add_vertex("d");
        assert_eq!(index, 3);
        assert_eq!(g.len(), 4);
        assert_eq!(g.edge_weight("a", "b"), Some(2));
        assert_eq!(g.edge_weight("b", "c"), Some(1));
        assert_eq!(g.edge_weight("d", "a"), Some(0));

        g.add_edge("c", "d").unwrap();
        assert_eq!(g.edge_weight("c", "d"), Some(1));
    }

    #[test]
    fn duplicate_vertex_returns_existing_index() {
        let mut g = sample();
        assert_eq!(g.add_vertex("b"), 1);
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn edges_in_row_major_order() {
        let g = sample();
        let edges = g.edges();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].to_string(), "(a, b) = 2");
        assert_eq!(edges[1].to_string(), "(b, c) = 1");
    }

    #[test]
    fn empty_graph() {
        let g = DenseGraph::new();
        assert!(g.is_empty());
        assert!(g.edges().is_empty());
        assert_eq!(g.edge_weight("a", "a"), None);
    }
}
