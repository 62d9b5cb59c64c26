//! # lexigraph-engine
//!
//! Query algorithms over the read-only [`WordGraph`] contract: bridge-word
//! discovery, bridge-based text expansion, single-source shortest paths
//! with path reconstruction, and cancellable random walks, plus a Graphviz
//! DOT renderer for the graph and for highlighted paths.
//!
//! The algorithms never mutate the graph and depend only on
//! `lexigraph-core`; the only state any of them keeps is local to a single
//! random walk. Randomized operations take an injected [`rand::Rng`] so
//! callers and tests control the source of randomness.
//!
//! [`WordGraph`]: lexigraph_core::WordGraph

pub mod bridge;
pub mod expand;
pub mod render;
pub mod shortest_path;
pub mod walk;

pub use bridge::bridge_words;
pub use expand::expand;
pub use render::to_dot;
pub use shortest_path::{PathEntry, ShortestPaths, shortest_path, shortest_paths};
pub use walk::{Walk, random_walk, walk_with};
