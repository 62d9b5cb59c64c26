//! Single-source shortest paths with path reconstruction.
//!
//! A Dijkstra variant shaped for the dense weight view: selection scans
//! the unvisited vertices in index order and keeps the first minimum, so
//! ties break toward the lowest vertex index. A stored weight of 0 means
//! "no direct edge" and is treated as infinite distance, never as a free
//! hop. Unreachable vertices are part of the result, not an error.

use serde::Serialize;
use tracing::debug;

use lexigraph_core::{GraphError, Result, WordGraph};

/// Distance value meaning "not reached yet / unreachable".
const UNREACHED: u64 = u64::MAX;

/// Shortest-path result for a single destination vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    /// Destination word.
    pub target: String,
    /// Full vertex sequence from source to target, source included;
    /// `None` when the target is unreachable.
    pub path: Option<Vec<String>>,
    /// Sum of traversed edge weights; `None` when unreachable.
    pub distance: Option<u64>,
}

impl PathEntry {
    /// Whether a path from the source exists.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.path.is_some()
    }

    /// The path formatted as `a-->b-->c`, or `None` when unreachable.
    #[must_use]
    pub fn route(&self) -> Option<String> {
        self.path.as_ref().map(|hops| hops.join("-->"))
    }
}

/// Shortest paths from one source to every vertex of the graph.
///
/// Entries are in vertex-index order and cover every vertex, the source
/// and unreachable vertices included.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths {
    /// Source word.
    pub source: String,
    /// One entry per graph vertex, in index order.
    pub entries: Vec<PathEntry>,
}

impl ShortestPaths {
    /// The entry for a destination word, if that word is a vertex.
    #[must_use]
    pub fn entry_for(&self, target: &str) -> Option<&PathEntry> {
        self.entries.iter().find(|e| e.target == target)
    }
}

/// Computes shortest paths from `source` to every vertex.
///
/// Fails with [`GraphError::VertexNotFound`] if `source` is not a vertex.
pub fn shortest_paths<G>(graph: &G, source: &str) -> Result<ShortestPaths>
where
    G: WordGraph + ?Sized,
{
    let start = graph
        .index_of(source)
        .ok_or_else(|| GraphError::VertexNotFound {
            word: source.to_owned(),
        })?;
    let n = graph.len();
    let words = graph.words();

    let mut dist = vec![UNREACHED; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    dist[start] = 0;

    for _ in 0..n {
        // index-ordered scan keeps the first minimum, so ties break toward
        // the lowest vertex index
        let mut best = UNREACHED;
        let mut selected = None;
        for i in 0..n {
            if !visited[i] && dist[i] < best {
                best = dist[i];
                selected = Some(i);
            }
        }
        let Some(k) = selected else {
            break;
        };
        visited[k] = true;

        for i in 0..n {
            if visited[i] {
                continue;
            }
            let weight = graph.weight_between(k, i);
            if weight == 0 {
                // 0 encodes "no edge", never a zero-cost hop
                continue;
            }
            let candidate = best + u64::from(weight);
            if candidate < dist[i] {
                dist[i] = candidate;
                prev[i] = Some(k);
            }
        }
    }

    let entries = (0..n)
        .map(|i| {
            if dist[i] == UNREACHED {
                PathEntry {
                    target: words[i].to_owned(),
                    path: None,
                    distance: None,
                }
            } else {
                let mut hops = Vec::new();
                let mut current = Some(i);
                while let Some(c) = current {
                    hops.push(words[c].to_owned());
                    current = prev[c];
                }
                hops.reverse();
                PathEntry {
                    target: words[i].to_owned(),
                    path: Some(hops),
                    distance: Some(dist[i]),
                }
            }
        })
        .collect();

    let reached = dist.iter().filter(|&&d| d != UNREACHED).count();
    debug!(source, vertices = n, reached, "shortest paths computed");

    Ok(ShortestPaths {
        source: source.to_owned(),
        entries,
    })
}

/// Computes the shortest path from `source` to `dest`.
///
/// Fails with [`GraphError::VertexNotFound`] if either word is not a
/// vertex; an unreachable `dest` is a normal result with an absent path.
pub fn shortest_path<G>(graph: &G, source: &str, dest: &str) -> Result<PathEntry>
where
    G: WordGraph + ?Sized,
{
    let mut all = shortest_paths(graph, source)?;
    let target = graph
        .index_of(dest)
        .ok_or_else(|| GraphError::VertexNotFound {
            word: dest.to_owned(),
        })?;
    Ok(all.entries.swap_remove(target))
}
