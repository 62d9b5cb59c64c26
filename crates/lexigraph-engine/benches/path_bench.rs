//! Shortest-path benchmark over a synthetic vocabulary.

use criterion::{Criterion, criterion_group, criterion_main};

use lexigraph_core::GraphBuilder;
use lexigraph_engine::shortest_paths;

/// Deterministic pseudo-text: a few hundred words over a bounded
/// vocabulary, enough adjacency variety to exercise relaxation.
fn synthetic_tokens(vocabulary: usize, length: usize) -> Vec<String> {
    (0..length)
        .map(|i| format!("w{}", (i * 7 + i / 3) % vocabulary))
        .collect()
}

fn bench_shortest_paths(c: &mut Criterion) {
    let tokens = synthetic_tokens(200, 4000);
    let builder = GraphBuilder::new();
    let dense = builder.build_dense(&tokens).unwrap();
    let sparse = builder.build_sparse(&tokens).unwrap();

    c.bench_function("shortest_paths/dense/200", |b| {
        b.iter(|| shortest_paths(&dense, "w0").unwrap());
    });
    c.bench_function("shortest_paths/sparse/200", |b| {
        b.iter(|| shortest_paths(&sparse, "w0").unwrap());
    });
}

criterion_group!(benches, bench_shortest_paths);
criterion_main!(benches);
