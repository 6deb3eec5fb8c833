// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_toolkit::Graph;

/// Ring of `n` vertices with chords every 7 steps.
fn chorded_ring(n: usize) -> Graph {
    let mut graph = Graph::new(false, true);
    for i in 0..n {
        graph.add_edge(format!("v{i}"), format!("v{}", (i + 1) % n), (i % 5) as f64 + 1.0);
    }
    for i in (0..n).step_by(7) {
        graph.add_edge(
            format!("v{i}"),
            format!("v{}", (i + n / 2) % n),
            (i % 3) as f64 + 2.0,
        );
    }
    graph
}

fn bench_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimum_spanning_tree");

    for size in [100, 1000].iter() {
        let graph = chorded_ring(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(graph.minimum_spanning_tree().unwrap()));
        });
    }

    group.finish();
}

fn bench_second_best(c: &mut Criterion) {
    let mut group = c.benchmark_group("second_best_spanning_tree");

    for size in [100, 500].iter() {
        let graph = chorded_ring(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(graph.second_best_spanning_tree().unwrap()));
        });
    }

    group.finish();
}

fn bench_shortest_distances(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_distances");

    for size in [100, 1000].iter() {
        let graph = chorded_ring(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(graph.shortest_distances("v0").unwrap()));
        });
    }

    group.finish();
}

fn bench_centrality(c: &mut Criterion) {
    let mut group = c.benchmark_group("betweenness_centralities");
    group.sample_size(10);

    for size in [50, 200].iter() {
        let graph = chorded_ring(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(graph.betweenness_centralities().unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mst,
    bench_second_best,
    bench_shortest_distances,
    bench_centrality
);
criterion_main!(benches);
