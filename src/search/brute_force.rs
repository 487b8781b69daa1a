//! exhaustive depth-first search for a shortest path

use tracing::debug;

use super::check_endpoints;
use crate::graph::{Graph, Path, TraversalState, VertexId};

pub fn shortest_dfs<G: Graph + ?Sized>(graph: &G, source: VertexId, target: VertexId) -> Option<Path> {
    let mut state = TraversalState::for_graph(graph);
    shortest_dfs_in(graph, &mut state, source, target)
}

/// Explores every simple path from `source` and keeps the shortest one that
/// ends at `target`.
///
/// A vertex is marked visited only while it sits on the working path and is
/// unmarked when the search backs out of it, so every branch is explored
/// independently. Among equally short paths the first one found wins.
/// Exponential in the worst case; use [`bfs`](super::bfs) for real inputs.
pub fn shortest_dfs_in<G: Graph + ?Sized>(
    graph: &G,
    state: &mut TraversalState,
    source: VertexId,
    target: VertexId,
) -> Option<Path> {
    check_endpoints(graph, state, source, target);

    let mut best: Option<Vec<VertexId>> = None;
    let mut working: Vec<VertexId> = vec![source];
    let mut cursors: Vec<usize> = vec![0];
    let mut paths_seen = 0usize;
    state.visit(source);

    while let Some(&vertex) = working.last() {
        if vertex == target {
            paths_seen += 1;
            if best.as_ref().map_or(true, |b| working.len() < b.len()) {
                best = Some(working.clone());
            }
            backtrack(state, &mut working, &mut cursors);
            continue;
        }

        let depth = cursors.len() - 1;
        let neighbors = graph.neighbors(vertex);
        let next = neighbors[cursors[depth]..]
            .iter()
            .position(|&w| !state.is_visited(w));
        match next {
            Some(offset) => {
                let w = neighbors[cursors[depth] + offset];
                cursors[depth] += offset + 1;
                state.visit(w);
                working.push(w);
                cursors.push(0);
            }
            None => backtrack(state, &mut working, &mut cursors),
        }
    }

    debug!(source, target, paths_seen, found = best.is_some(), "shortest dfs finished");
    best.and_then(Path::from_vertices)
}

fn backtrack(state: &mut TraversalState, working: &mut Vec<VertexId>, cursors: &mut Vec<usize>) {
    if let Some(v) = working.pop() {
        state.unvisit(v);
    }
    cursors.pop();
}
