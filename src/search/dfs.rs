//! first-found depth-first searches

use tracing::debug;

use super::check_endpoints;
use crate::graph::{Graph, Path, TraversalState, VertexId};

/// one level of the depth-first descent: a vertex and how far its
/// neighbor list has been scanned
struct Frame {
    vertex: VertexId,
    cursor: usize,
}

pub fn recursive_dfs<G: Graph + ?Sized>(graph: &G, source: VertexId, target: VertexId) -> Option<Path> {
    let mut state = TraversalState::for_graph(graph);
    recursive_dfs_in(graph, &mut state, source, target)
}

/// Backtracking depth-first search returning the first path found.
///
/// Behaves like the textbook recursion (mark the vertex, stop at the target,
/// otherwise descend into each unvisited neighbor in insertion order) but
/// keeps its frames on the heap, so deep mazes cannot overflow the call stack.
/// Vertices stay marked visited after a dead end; the path found depends on
/// neighbor order and is not necessarily the shortest.
pub fn recursive_dfs_in<G: Graph + ?Sized>(
    graph: &G,
    state: &mut TraversalState,
    source: VertexId,
    target: VertexId,
) -> Option<Path> {
    check_endpoints(graph, state, source, target);

    state.visit(source);
    let mut frames = vec![Frame {
        vertex: source,
        cursor: 0,
    }];

    while let Some(frame) = frames.last_mut() {
        if frame.vertex == target {
            let path = Path::from_vertices(frames.iter().map(|f| f.vertex).collect());
            debug!(source, target, found = true, "recursive dfs finished");
            return path;
        }

        let neighbors = graph.neighbors(frame.vertex);
        let next = neighbors[frame.cursor..]
            .iter()
            .position(|&w| !state.is_visited(w));
        match next {
            Some(offset) => {
                let w = neighbors[frame.cursor + offset];
                frame.cursor += offset + 1;
                state.visit(w);
                frames.push(Frame { vertex: w, cursor: 0 });
            }
            None => {
                frames.pop();
            }
        }
    }

    debug!(source, target, found = false, "recursive dfs finished");
    None
}

pub fn stack_dfs<G: Graph + ?Sized>(graph: &G, source: VertexId, target: VertexId) -> Option<Path> {
    let mut state = TraversalState::for_graph(graph);
    stack_dfs_in(graph, &mut state, source, target)
}

/// Depth-first search over an explicit stack of vertices.
///
/// While the top of the stack is not the target, the first unvisited neighbor
/// of the top is pushed (and marked), or the top is popped if it has none.
/// The stack is unwound target-first and reordered before returning.
pub fn stack_dfs_in<G: Graph + ?Sized>(
    graph: &G,
    state: &mut TraversalState,
    source: VertexId,
    target: VertexId,
) -> Option<Path> {
    check_endpoints(graph, state, source, target);

    state.visit(source);
    let mut stack = vec![source];

    while let Some(&top) = stack.last() {
        if top == target {
            let discovered: Vec<VertexId> = std::iter::from_fn(|| stack.pop()).collect();
            debug!(source, target, found = true, "stack dfs finished");
            return Path::from_discovery_order(discovered);
        }

        match graph.neighbors(top).iter().find(|&&w| !state.is_visited(w)) {
            Some(&w) => {
                state.visit(w);
                stack.push(w);
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!(source, target, found = false, "stack dfs finished");
    None
}
