//! Single-source shortest paths over weighted directed graphs

mod bellman_ford;
mod dijkstra;

#[cfg(test)]
mod tests;

pub use bellman_ford::*;
pub use dijkstra::*;

use thiserror::Error;

use crate::graph::{Digraph, Edge, EdgeId, Path, TraversalState, VertexId, Weight, INFINITE};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    #[error("vertex {vertex} settled at negative weight {weight}; Dijkstra requires non-negative edge weights")]
    NegativeWeight { vertex: VertexId, weight: Weight },
}

/// Outcome of a solver run. Only `Feasible` is a clean result; the others are
/// answers, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Feasible,
    /// at least one vertex is not reachable from the source
    Unreachable,
    /// a negative cycle is reachable from the source; predecessors are unreliable
    NegativeCycle,
}

/// Weights and predecessors left behind by a solver, plus its verdict.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: VertexId,
    verdict: Verdict,
    state: TraversalState,
}

impl ShortestPathTree {
    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn is_feasible(&self) -> bool {
        self.verdict == Verdict::Feasible
    }

    /// raw weight of `v`, `INFINITE` if unreached
    pub fn weight(&self, v: VertexId) -> Weight {
        self.state.weight(v)
    }

    /// weight of `v`, or `None` if it was never reached
    pub fn distance(&self, v: VertexId) -> Option<Weight> {
        match self.state.weight(v) {
            INFINITE => None,
            w => Some(w),
        }
    }

    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.state.predecessor(v)
    }

    /// path from the source to `target`; always `None` under a negative cycle
    pub fn path_to(&self, target: VertexId) -> Option<Path> {
        if self.verdict == Verdict::NegativeCycle {
            return None;
        }
        Path::from_predecessors(self.state.predecessors(), self.source, target)
    }

    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    pub fn into_state(self) -> TraversalState {
        self.state
    }
}

/// Sets every weight to `INFINITE` and every predecessor to none, then puts
/// the source at weight 0.
fn initialize(graph: &Digraph, state: &mut TraversalState, source: VertexId) {
    assert!(
        (source as usize) < graph.vertex_count(),
        "source {source} outside a graph of {} vertices",
        graph.vertex_count()
    );
    assert_eq!(state.vertex_count(), graph.vertex_count());
    state.set_all_weights(INFINITE);
    state.clear_predecessors();
    state.set_weight(source, 0);
}

/// the weight `edge.target` would get through `edge`, if its source is reached
fn candidate_weight(state: &TraversalState, edge: &Edge) -> Option<Weight> {
    match state.weight(edge.source) {
        INFINITE => None,
        w => Some(w.saturating_add(edge.weight)),
    }
}

/// Relaxes one edge. Returns true if the target's weight went down.
fn relax(state: &mut TraversalState, id: EdgeId, edge: &Edge) -> bool {
    match candidate_weight(state, edge) {
        Some(candidate) if candidate < state.weight(edge.target) => {
            state.set_weight(edge.target, candidate);
            state.set_predecessor(edge.target, Some(edge.source));
            state.visit_edge(id);
            true
        }
        _ => false,
    }
}
