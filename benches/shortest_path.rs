use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use mazegraph::graph::{Digraph, MutableGraph, TraversalState, VertexId};
use mazegraph::shortest_path::{bellman_ford, bellman_ford_in, dijkstra, dijkstra_in};

// Size configurations for benchmarks
const SMALL_SIZE: usize = 100;
const MEDIUM_SIZE: usize = 1_000;
const LARGE_SIZE: usize = 5_000;

const OUT_DEGREE: usize = 8;
const MAX_WEIGHT: i64 = 100;

// Random digraph with nonnegative weights so both solvers apply.
// A ring through every vertex keeps the whole graph reachable from 0.
fn create_random_graph(n: usize, out_degree: usize, seed: u64) -> Digraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Digraph::with_vertices(n);

    for u in 0..n as VertexId {
        let next = (u + 1) % n as VertexId;
        if next != u {
            graph.add_edge(u, next, rng.random_range(0..=MAX_WEIGHT));
        }

        let mut targets: Vec<VertexId> = Vec::with_capacity(out_degree);
        while targets.len() < out_degree.min(n.saturating_sub(2)) {
            let v = rng.random_range(0..n as VertexId);
            if v != u && v != next && !targets.contains(&v) {
                targets.push(v);
            }
        }
        for v in targets {
            graph.add_edge(u, v, rng.random_range(0..=MAX_WEIGHT));
        }
    }

    graph
}

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_source");

    for size in [SMALL_SIZE, MEDIUM_SIZE, LARGE_SIZE] {
        let graph = create_random_graph(size, OUT_DEGREE, 42);

        group.bench_with_input(BenchmarkId::new("dijkstra", size), &size, |b, _| {
            b.iter(|| black_box(dijkstra(&graph, 0)))
        });

        // Bellman-Ford is O(VE); keep it off the largest graph
        if size <= MEDIUM_SIZE {
            group.bench_with_input(BenchmarkId::new("bellman_ford", size), &size, |b, _| {
                b.iter(|| black_box(bellman_ford(&graph, 0)))
            });
        }
    }

    group.finish();
}

fn bench_reused_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("reused_state");
    let graph = create_random_graph(MEDIUM_SIZE, OUT_DEGREE, 7);
    let mut state = TraversalState::for_graph(&graph);

    group.bench_function("dijkstra_in", |b| {
        b.iter(|| {
            state.reset();
            black_box(dijkstra_in(&graph, &mut state, 0))
        })
    });
    group.bench_function("bellman_ford_in", |b| {
        b.iter(|| {
            state.reset();
            black_box(bellman_ford_in(&graph, &mut state, 0))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_solvers, bench_reused_state);
criterion_main!(benches);
