//! Bellman-Ford single-source shortest paths with negative-cycle detection

use tracing::{debug, warn};

use super::{candidate_weight, initialize, relax, ShortestPathTree, Verdict};
use crate::graph::{Digraph, TraversalState, VertexId};

/// Runs Bellman-Ford from `source` on a fresh state.
pub fn bellman_ford(graph: &Digraph, source: VertexId) -> ShortestPathTree {
    let mut state = TraversalState::for_graph(graph);
    let verdict = bellman_ford_in(graph, &mut state, source);
    ShortestPathTree {
        source,
        verdict,
        state,
    }
}

/// Runs Bellman-Ford from `source`, leaving weights and predecessors in `state`.
///
/// Relaxes every edge exactly `V - 1` times, then scans once more: any edge
/// that still improves its target means a negative cycle is reachable from
/// the source. Vertices the source cannot reach keep `INFINITE` and do not
/// make the run infeasible.
pub fn bellman_ford_in(graph: &Digraph, state: &mut TraversalState, source: VertexId) -> Verdict {
    initialize(graph, state, source);

    for _ in 1..graph.vertex_count() {
        for (id, edge) in graph.edges() {
            relax(state, id, edge);
        }
    }

    let cycle_edge = graph.edges().find(|(_, edge)| {
        candidate_weight(state, edge).is_some_and(|candidate| candidate < state.weight(edge.target))
    });

    match cycle_edge {
        Some((_, edge)) => {
            warn!(
                source,
                from = edge.source,
                to = edge.target,
                "negative cycle reachable from source"
            );
            Verdict::NegativeCycle
        }
        None => {
            debug!(source, edges = graph.edges().count(), "bellman-ford finished");
            Verdict::Feasible
        }
    }
}
