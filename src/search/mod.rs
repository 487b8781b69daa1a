//! Path discovery between two vertices of an unweighted graph
//!
//! Every searcher comes in two forms. The plain form (`bfs`, `recursive_dfs`,
//! ...) allocates a fresh [`TraversalState`] and cannot see leftovers from an
//! earlier run. The `_in` form works on a caller-owned state and does **not**
//! reset it: visited flags left by a previous run make those vertices look
//! explored and can hide a path that exists. Call
//! [`TraversalState::reset`] (or at least `clear_visited`) between runs.

mod bfs;
mod brute_force;
mod dfs;


pub use bfs::*;
pub use brute_force::*;
pub use dfs::*;

use std::fmt;
use std::str::FromStr;

use crate::graph::{Graph, Path, TraversalState, VertexId};

/// The available path searchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    RecursiveDfs,
    StackDfs,
    ShortestDfs,
    Bfs,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::RecursiveDfs,
        Strategy::StackDfs,
        Strategy::ShortestDfs,
        Strategy::Bfs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::RecursiveDfs => "recursive-dfs",
            Strategy::StackDfs => "stack-dfs",
            Strategy::ShortestDfs => "shortest-dfs",
            Strategy::Bfs => "bfs",
        }
    }

    /// whether the strategy always returns a path with the fewest edges
    pub fn is_shortest(self) -> bool {
        matches!(self, Strategy::ShortestDfs | Strategy::Bfs)
    }

    pub fn run<G: Graph + ?Sized>(self, graph: &G, source: VertexId, target: VertexId) -> Option<Path> {
        let mut state = TraversalState::for_graph(graph);
        self.run_in(graph, &mut state, source, target)
    }

    pub fn run_in<G: Graph + ?Sized>(
        self,
        graph: &G,
        state: &mut TraversalState,
        source: VertexId,
        target: VertexId,
    ) -> Option<Path> {
        match self {
            Strategy::RecursiveDfs => recursive_dfs_in(graph, state, source, target),
            Strategy::StackDfs => stack_dfs_in(graph, state, source, target),
            Strategy::ShortestDfs => shortest_dfs_in(graph, state, source, target),
            Strategy::Bfs => bfs_in(graph, state, source, target),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| format!("unknown search strategy: {s}"))
    }
}

/// panics unless both endpoints are vertices of `graph`
fn check_endpoints<G: Graph + ?Sized>(graph: &G, state: &TraversalState, source: VertexId, target: VertexId) {
    let n = graph.size();
    assert!(
        (source as usize) < n && (target as usize) < n,
        "endpoints {source} -> {target} outside 0..{n}"
    );
    assert_eq!(state.vertex_count(), n, "traversal state sized for another graph");
}
