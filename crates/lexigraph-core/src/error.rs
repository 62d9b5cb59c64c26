//! Error types for graph operations.

use thiserror::Error;

/// Error produced by graph construction or queries.
///
/// Every variant is a deterministic function of the inputs; nothing here is
/// transient, so callers surface these immediately instead of retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An operation referenced a word that is not a vertex of the graph.
    #[error("vertex not found: {word:?}")]
    VertexNotFound {
        /// The word that failed to resolve.
        word: String,
    },
    /// An index-based vertex lookup was outside the vertex table.
    #[error("vertex index {index} out of range for graph of {len} vertices")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The vertex count at the time of the lookup.
        len: usize,
    },
}

/// Result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
