//! Cancellable random traversal.
//!
//! A walk starts at a uniformly random vertex and repeatedly follows a
//! uniformly random outgoing edge. It terminates on the first of: a dead
//! end (no outgoing edges), the first edge it would traverse twice (the
//! repeat is not emitted, so no edge ever appears twice in the output), or
//! a raised cancellation flag. Every termination is normal; a short walk
//! is a result, not an error.
//!
//! Cancellation is cooperative: the flag is polled before every step, so
//! latency is bounded by the cost of one step. Each walk owns its
//! visitation state, which is why concurrent walks may share one
//! read-only graph.

use std::sync::atomic::{AtomicBool, Ordering};

use ahash::AHashSet;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, trace};

use lexigraph_core::{Edge, WordGraph};

/// A completed random traversal.
#[derive(Debug, Clone, Serialize)]
pub struct Walk {
    /// The randomly chosen start vertex; recorded even for zero-step walks.
    pub start: String,
    /// Traversed edges in order; no edge appears twice.
    pub edges: Vec<Edge>,
}

impl Walk {
    /// Number of traversed edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the walk terminated before its first step.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The visited vertices formatted as `start-->a-->b`.
    #[must_use]
    pub fn route(&self) -> String {
        let mut out = self.start.clone();
        for edge in &self.edges {
            out.push_str("-->");
            out.push_str(&edge.to);
        }
        out
    }
}

/// Performs one random walk over `graph`.
///
/// Returns `None` only when the graph has no vertices to start from.
pub fn random_walk<G, R>(graph: &G, rng: &mut R, cancel: &AtomicBool) -> Option<Walk>
where
    G: WordGraph + ?Sized,
    R: Rng,
{
    walk_with(graph, rng, cancel, |_| {})
}

/// Performs one random walk, reporting each traversed edge to `on_step`
/// as it happens.
///
/// The observer is a live view only: the walk never depends on what it
/// does, and pacing between steps is the observer's (caller's) concern.
pub fn walk_with<G, R, F>(graph: &G, rng: &mut R, cancel: &AtomicBool, mut on_step: F) -> Option<Walk>
where
    G: WordGraph + ?Sized,
    R: Rng,
    F: FnMut(&Edge),
{
    if graph.is_empty() {
        return None;
    }
    let words = graph.words();
    let mut current = rng.gen_range(0..graph.len());
    let start = words[current].to_owned();
    let mut traversed: AHashSet<(usize, usize)> = AHashSet::new();
    let mut edges = Vec::new();

    loop {
        if cancel.load(Ordering::Relaxed) {
            debug!(start = %start, steps = edges.len(), "walk cancelled");
            break;
        }
        let neighbors = graph.neighbor_indices(current);
        if neighbors.is_empty() {
            debug!(start = %start, steps = edges.len(), "walk reached a dead end");
            break;
        }
        let next = neighbors[rng.gen_range(0..neighbors.len())];
        if !traversed.insert((current, next)) {
            // first repeated edge: stop without emitting it again
            debug!(start = %start, steps = edges.len(), "walk hit a repeated edge");
            break;
        }
        let edge = Edge {
            from: words[current].to_owned(),
            to: words[next].to_owned(),
            weight: graph.weight_between(current, next),
        };
        trace!(%edge, "walk step");
        on_step(&edge);
        edges.push(edge);
        current = next;
    }

    Some(Walk { start, edges })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    use lexigraph_core::{DenseGraph, GraphBuilder};

    use super::*;

    fn fixed_rng() -> StepRng {
        // all-zero stream: start vertex 0, first neighbor at every step
        StepRng::new(0, 0)
    }

    fn live() -> AtomicBool {
        AtomicBool::new(false)
    }

    #[test]
    fn empty_graph_has_no_walk() {
        let g = DenseGraph::new();
        assert!(random_walk(&g, &mut fixed_rng(), &live()).is_none());
    }

    #[test]
    fn all_sink_graph_terminates_with_zero_steps() {
        let g = DenseGraph::with_vertices(["a", "b", "c"]);
        let walk = random_walk(&g, &mut fixed_rng(), &live()).unwrap();
        assert!(walk.is_empty());
        assert_eq!(walk.start, "a");
        assert_eq!(walk.route(), "a");
    }

    #[test]
    fn dead_end_stops_the_walk() {
        let g = GraphBuilder::new().build(&["a", "b"]).unwrap();
        let walk = random_walk(&*g, &mut fixed_rng(), &live()).unwrap();
        assert_eq!(walk.len(), 1);
        assert_eq!(walk.route(), "a-->b");
    }

    #[test]
    fn repeated_edge_stops_the_walk() {
        // two-cycle: a -> b -> a -> (a -> b would repeat)
        let g = GraphBuilder::new().build(&["a", "b", "a"]).unwrap();
        let walk = random_walk(&*g, &mut fixed_rng(), &live()).unwrap();
        assert_eq!(walk.route(), "a-->b-->a");
        assert_eq!(walk.len(), 2);
    }

    #[test]
    fn no_edge_is_ever_emitted_twice() {
        let tokens = ["a", "b", "c", "a", "c", "b", "a"];
        let g = GraphBuilder::new().build(&tokens).unwrap();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let walk = random_walk(&*g, &mut rng, &live()).unwrap();
            let mut seen = std::collections::HashSet::new();
            for edge in &walk.edges {
                assert!(
                    seen.insert((edge.from.clone(), edge.to.clone())),
                    "seed {seed} repeated {edge}"
                );
            }
        }
    }

    #[test]
    fn raised_cancel_flag_stops_before_the_first_step() {
        let g = GraphBuilder::new().build(&["a", "b", "a"]).unwrap();
        let cancel = AtomicBool::new(true);
        let walk = random_walk(&*g, &mut fixed_rng(), &cancel).unwrap();
        assert!(walk.is_empty());
        assert_eq!(walk.start, "a");
    }

    #[test]
    fn observer_sees_every_emitted_edge() {
        let g = GraphBuilder::new().build(&["a", "b", "a"]).unwrap();
        let mut observed = Vec::new();
        let walk = walk_with(&*g, &mut fixed_rng(), &live(), |edge| {
            observed.push(edge.clone());
        })
        .unwrap();
        assert_eq!(observed, walk.edges);
    }

    #[test]
    fn revisiting_a_vertex_alone_does_not_stop_the_walk() {
        // a -> b -> a revisits vertex a but repeats no edge, so the walk
        // continues until a -> b would repeat
        let g = GraphBuilder::new().build(&["a", "b", "a"]).unwrap();
        let walk = random_walk(&*g, &mut fixed_rng(), &live()).unwrap();
        assert!(walk.len() > 1);
    }
}
