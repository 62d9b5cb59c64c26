//! # lexigraph-core
//!
//! Foundation layer for lexigraph: the word-adjacency graph model, the
//! builder that constructs it from a token stream, and the tokenizer that
//! produces that stream from raw text.
//!
//! A word-adjacency graph has one vertex per distinct word of a document
//! and a directed edge `a -> b` weighted by the number of times `b`
//! immediately follows `a`. The graph is built once and is read-only
//! afterwards; every query layer above this crate depends only on the
//! [`WordGraph`] read contract.
//!
//! ## Modules
//!
//! - [`graph`] - The [`WordGraph`] contract and its dense/sparse stores
//! - [`builder`] - Token stream to graph construction
//! - [`text`] - Document tokenization
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod error;
pub mod graph;
pub mod text;

// Re-export commonly used types at crate root
pub use builder::{BuilderConfig, GraphBuilder};
pub use error::{GraphError, Result};
pub use graph::{DenseGraph, Edge, SparseGraph, WordGraph};
