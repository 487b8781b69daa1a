//! Dijkstra's algorithm on top of the indexed heap

use tracing::{debug, trace, warn};

use super::{initialize, relax, ShortestPathTree, SolverError, Verdict};
use crate::graph::{Digraph, TraversalState, VertexId, INFINITE};
use crate::heap::{HeapError, IndexedMinHeap};

/// Runs Dijkstra from `source` on a fresh state.
///
/// Edge weights must be non-negative. A run that settles a vertex at a
/// negative weight stops with [`SolverError::NegativeWeight`] instead of
/// returning wrong weights.
pub fn dijkstra(graph: &Digraph, source: VertexId) -> Result<ShortestPathTree, SolverError> {
    let mut state = TraversalState::for_graph(graph);
    let verdict = dijkstra_in(graph, &mut state, source)?;
    Ok(ShortestPathTree {
        source,
        verdict,
        state,
    })
}

/// Runs Dijkstra from `source`, leaving weights and predecessors in `state`.
///
/// Weights and predecessors are re-initialised here. Visited flags are not
/// cleared; vertices settled by this run are marked visited, and edges that
/// improved a weight are marked visited.
pub fn dijkstra_in(
    graph: &Digraph,
    state: &mut TraversalState,
    source: VertexId,
) -> Result<Verdict, SolverError> {
    initialize(graph, state, source);
    let mut heap = IndexedMinHeap::build(graph.vertices(), state.weights());

    // extract_min only fails once the heap is exhausted
    while let Ok(u) = heap.extract_min(state.weights()) {
        let weight = state.weight(u);
        if weight < 0 {
            warn!(vertex = u, weight, "negative weight settled, aborting Dijkstra");
            return Err(SolverError::NegativeWeight { vertex: u, weight });
        }
        if weight == INFINITE {
            // everything still in the heap is unreachable too
            break;
        }
        state.visit(u);

        for &id in graph.out_edges(u) {
            let edge = graph.edge(id);
            if !relax(state, id, edge) {
                continue;
            }
            trace!(from = u, to = edge.target, weight = state.weight(edge.target), "relaxed");
            if let Err(err) = heap.decrease_key(edge.target, state.weights()) {
                // only a settled vertex can be improved again, and only when
                // a negative edge slipped in; the extraction check reports it
                debug_assert!(matches!(err, HeapError::Extracted(_)));
                trace!(%err, "ignored decrease-key on settled vertex");
            }
        }
    }

    let verdict = if state.weights().contains(&INFINITE) {
        Verdict::Unreachable
    } else {
        Verdict::Feasible
    };
    debug!(source, ?verdict, vertices = graph.vertex_count(), "dijkstra finished");
    Ok(verdict)
}
