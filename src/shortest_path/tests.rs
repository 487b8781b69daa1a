use super::*;
use crate::graph::{Digraph, Graph, MutableGraph, TraversalState, INFINITE};
use crate::maze::{Maze, MazeGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Helper to create a small weighted graph with a known answer
//
//   0 -4-> 1 -1-> 3
//   0 -1-> 2 -2-> 1
//   2 -5-> 3 -3-> 4
fn create_weighted_graph() -> Digraph {
    Digraph::from_edge_list(
        5,
        &[
            (0, 1, 4),
            (0, 2, 1),
            (2, 1, 2),
            (1, 3, 1),
            (2, 3, 5),
            (3, 4, 3),
        ],
    )
}

fn random_graph(rng: &mut StdRng, n: usize, edge_probability: f64, max_weight: Weight) -> Digraph {
    let mut graph = Digraph::with_vertices(n);
    for from in 0..n as VertexId {
        for to in 0..n as VertexId {
            if from != to && rng.random_bool(edge_probability) {
                graph.add_edge(from, to, rng.random_range(0..=max_weight));
            }
        }
    }
    graph
}

#[test]
fn dijkstra_finds_known_weights() {
    let graph = create_weighted_graph();
    let tree = dijkstra(&graph, 0).unwrap();

    assert!(tree.is_feasible());
    let weights: Vec<Weight> = graph.vertices().map(|v| tree.weight(v)).collect();
    assert_eq!(weights, vec![0, 3, 1, 4, 7]);
    assert_eq!(tree.predecessor(0), None);
    assert_eq!(tree.predecessor(1), Some(2));
    assert_eq!(tree.path_to(4).unwrap().vertices(), &[0, 2, 1, 3, 4]);
}

#[test]
fn bellman_ford_finds_known_weights() {
    let graph = create_weighted_graph();
    let tree = bellman_ford(&graph, 0);

    assert_eq!(tree.verdict(), Verdict::Feasible);
    let weights: Vec<Weight> = graph.vertices().map(|v| tree.weight(v)).collect();
    assert_eq!(weights, vec![0, 3, 1, 4, 7]);
    assert_eq!(tree.path_to(3).unwrap().vertices(), &[0, 2, 1, 3]);
}

#[test]
fn dijkstra_reports_unreachable_vertices() {
    let graph = Digraph::from_edge_list(3, &[(0, 1, 2)]);
    let tree = dijkstra(&graph, 0).unwrap();

    assert_eq!(tree.verdict(), Verdict::Unreachable);
    assert_eq!(tree.weight(2), INFINITE);
    assert_eq!(tree.distance(2), None);
    assert_eq!(tree.distance(1), Some(2));
    assert!(tree.path_to(2).is_none());
    assert!(!tree.state().is_visited(2));
}

#[test]
fn bellman_ford_leaves_unreachable_vertices_infinite() {
    let graph = Digraph::from_edge_list(3, &[(0, 1, 2), (2, 1, -7)]);
    let tree = bellman_ford(&graph, 0);

    assert!(tree.is_feasible());
    assert_eq!(tree.weight(2), INFINITE);
    // the negative edge out of an unreached vertex never applies
    assert_eq!(tree.weight(1), 2);
}

#[test]
fn dijkstra_rejects_negative_edge() {
    let graph = Digraph::from_edge_list(3, &[(0, 1, -1), (1, 2, 4)]);
    let err = dijkstra(&graph, 0).unwrap_err();
    assert_eq!(
        err,
        SolverError::NegativeWeight {
            vertex: 1,
            weight: -1
        }
    );
}

#[test]
fn bellman_ford_handles_negative_edges() {
    let graph = Digraph::from_edge_list(4, &[(0, 1, 4), (0, 2, 5), (2, 1, -3), (1, 3, 2)]);
    let tree = bellman_ford(&graph, 0);

    assert!(tree.is_feasible());
    assert_eq!(tree.weight(1), 2);
    assert_eq!(tree.weight(3), 4);
    assert_eq!(tree.path_to(3).unwrap().vertices(), &[0, 2, 1, 3]);
}

#[test]
fn bellman_ford_detects_negative_cycle() {
    let cycle = Digraph::from_edge_list(3, &[(0, 1, -1), (1, 2, -1), (2, 0, -1)]);
    let tree = bellman_ford(&cycle, 0);
    assert_eq!(tree.verdict(), Verdict::NegativeCycle);
    assert!(!tree.is_feasible());
    assert!(tree.path_to(2).is_none());

    // breaking the cycle makes it feasible again
    let chain = Digraph::from_edge_list(3, &[(0, 1, -1), (1, 2, -1)]);
    let tree = bellman_ford(&chain, 0);
    assert!(tree.is_feasible());
    assert_eq!(tree.weight(2), -2);
}

#[test]
fn negative_cycle_out_of_reach_is_feasible() {
    // vertices 1 and 2 form a negative cycle the source cannot reach
    let graph = Digraph::from_edge_list(3, &[(1, 2, -1), (2, 1, -1)]);
    let tree = bellman_ford(&graph, 0);
    assert!(tree.is_feasible());
    assert_eq!(tree.weight(1), INFINITE);
}

#[test]
fn single_vertex_graph() {
    let graph = Digraph::with_vertices(1);
    let tree = dijkstra(&graph, 0).unwrap();
    assert!(tree.is_feasible());
    assert_eq!(tree.path_to(0).unwrap().vertices(), &[0]);

    let tree = bellman_ford(&graph, 0);
    assert!(tree.is_feasible());
    assert_eq!(tree.weight(0), 0);
}

#[test]
fn dijkstra_matches_bellman_ford_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let n = rng.random_range(1..25);
        let graph = random_graph(&mut rng, n, 0.15, 20);
        let source = rng.random_range(0..n as VertexId);

        let fast = dijkstra(&graph, source).unwrap();
        let slow = bellman_ford(&graph, source);
        assert!(slow.is_feasible());
        for v in graph.vertices() {
            assert_eq!(fast.weight(v), slow.weight(v), "vertex {v} differs");
            if let Some(path) = fast.path_to(v) {
                assert!(path.is_valid_in(&graph));
                assert_eq!(path.source(), source);
                assert_eq!(path.target(), v);
                let total: Weight = path
                    .vertices()
                    .windows(2)
                    .map(|pair| {
                        let id = graph.find_edge(pair[0], pair[1]).unwrap();
                        graph.edge(id).weight
                    })
                    .sum();
                assert_eq!(total, fast.weight(v));
            }
        }
    }
}

#[test]
fn rerun_on_shared_state_is_idempotent() {
    let graph = create_weighted_graph();
    let mut state = TraversalState::for_graph(&graph);

    let first = dijkstra_in(&graph, &mut state, 0).unwrap();
    let snapshot = state.clone();
    let second = dijkstra_in(&graph, &mut state, 0).unwrap();
    assert_eq!(first, second);
    assert_eq!(state, snapshot);

    // a run from another source overwrites weights and predecessors
    bellman_ford_in(&graph, &mut state, 2);
    assert_eq!(state.weight(0), INFINITE);
    assert_eq!(state.weight(2), 0);
    assert_eq!(state.predecessor(2), None);
}

#[test]
fn dijkstra_on_maze_counts_steps() {
    let maze = Maze::from_rows(&["OOO", "XXO", "OOO"]).unwrap();
    let maze_graph = MazeGraph::build(&maze);
    let start = maze_graph.vertex_at(0, 0).unwrap().unwrap();
    let goal = maze_graph.vertex_at(2, 0).unwrap().unwrap();

    let tree = dijkstra(maze_graph.graph(), start).unwrap();
    assert!(tree.is_feasible());
    assert_eq!(tree.weight(goal), 6);
    let path = tree.path_to(goal).unwrap();
    assert_eq!(path.edge_count(), 6);
    assert!(path.is_valid_in(maze_graph.graph()));
    assert_eq!(maze_graph.graph().size(), 7);
}
