//! breadth-first shortest paths by edge count

use std::collections::VecDeque;

use tracing::debug;

use super::check_endpoints;
use crate::graph::{Graph, Path, TraversalState, VertexId};

pub fn bfs<G: Graph + ?Sized>(graph: &G, source: VertexId, target: VertexId) -> Option<Path> {
    let mut state = TraversalState::for_graph(graph);
    bfs_in(graph, &mut state, source, target)
}

/// Level-order search from `source`, returning a path with the fewest edges.
///
/// Every vertex discovered gets weight = its discoverer's weight + 1 and the
/// discoverer as predecessor, and is enqueued exactly once. The whole
/// component of `source` is explored, so `state` holds hop counts for every
/// reachable vertex afterwards; vertices it does not reach keep whatever
/// weight they had.
pub fn bfs_in<G: Graph + ?Sized>(
    graph: &G,
    state: &mut TraversalState,
    source: VertexId,
    target: VertexId,
) -> Option<Path> {
    check_endpoints(graph, state, source, target);

    state.set_weight(source, 0);
    state.set_predecessor(source, None);
    state.visit(source);
    let mut queue = VecDeque::from([source]);

    while let Some(u) = queue.pop_front() {
        let next_weight = state.weight(u) + 1;
        for &w in graph.neighbors(u) {
            if state.is_visited(w) {
                continue;
            }
            state.visit(w);
            state.set_weight(w, next_weight);
            state.set_predecessor(w, Some(u));
            queue.push_back(w);
        }
    }

    let found = state.is_visited(target);
    debug!(source, target, found, "bfs finished");
    if !found {
        return None;
    }
    Path::from_predecessors(state.predecessors(), source, target)
}
