//! per-run mutable state for algorithms walking a graph

use std::fmt;

use super::{Digraph, EdgeId, Graph, VertexId, Weight, INFINITE};

/// Weights, predecessors and visited/marked flags for one graph.
///
/// Algorithms that take a `&mut TraversalState` read the flags as they find
/// them. Reusing a state across runs without calling [`reset`](Self::reset)
/// (or the narrower clears) carries stale flags into the next run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalState {
    weights: Vec<Weight>,
    predecessors: Vec<Option<VertexId>>,
    visited: Vec<bool>,
    marked: Vec<bool>,
    edge_visited: Vec<bool>,
    edge_marked: Vec<bool>,
}

impl TraversalState {
    /// fresh state: every weight `INFINITE`, no predecessors, no flags set
    pub fn new(vertex_count: usize, edge_count: usize) -> TraversalState {
        TraversalState {
            weights: vec![INFINITE; vertex_count],
            predecessors: vec![None; vertex_count],
            visited: vec![false; vertex_count],
            marked: vec![false; vertex_count],
            edge_visited: vec![false; edge_count],
            edge_marked: vec![false; edge_count],
        }
    }

    pub fn for_graph<G: Graph + ?Sized>(graph: &G) -> TraversalState {
        TraversalState::new(graph.size(), graph.edge_count())
    }

    pub fn vertex_count(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    pub fn weight(&self, v: VertexId) -> Weight {
        self.weights[v as usize]
    }

    pub fn set_weight(&mut self, v: VertexId, weight: Weight) {
        self.weights[v as usize] = weight;
    }

    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessors
    }

    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.predecessors[v as usize]
    }

    pub fn set_predecessor(&mut self, v: VertexId, pred: Option<VertexId>) {
        self.predecessors[v as usize] = pred;
    }

    pub fn is_visited(&self, v: VertexId) -> bool {
        self.visited[v as usize]
    }

    pub fn visit(&mut self, v: VertexId) {
        self.visited[v as usize] = true;
    }

    pub fn unvisit(&mut self, v: VertexId) {
        self.visited[v as usize] = false;
    }

    pub fn is_marked(&self, v: VertexId) -> bool {
        self.marked[v as usize]
    }

    pub fn mark(&mut self, v: VertexId) {
        self.marked[v as usize] = true;
    }

    pub fn is_edge_visited(&self, e: EdgeId) -> bool {
        self.edge_visited[e as usize]
    }

    pub fn visit_edge(&mut self, e: EdgeId) {
        self.edge_visited[e as usize] = true;
    }

    pub fn is_edge_marked(&self, e: EdgeId) -> bool {
        self.edge_marked[e as usize]
    }

    pub fn mark_edge(&mut self, e: EdgeId) {
        self.edge_marked[e as usize] = true;
    }

    /// clears the visited flag of every vertex and edge
    pub fn clear_visited(&mut self) {
        self.visited.fill(false);
        self.edge_visited.fill(false);
    }

    /// clears the marked flag of every vertex and edge
    pub fn clear_marked(&mut self) {
        self.marked.fill(false);
        self.edge_marked.fill(false);
    }

    pub fn set_all_weights(&mut self, weight: Weight) {
        self.weights.fill(weight);
    }

    pub fn clear_predecessors(&mut self) {
        self.predecessors.fill(None);
    }

    /// returns the state to what [`new`](Self::new) produces
    pub fn reset(&mut self) {
        self.set_all_weights(INFINITE);
        self.clear_predecessors();
        self.clear_visited();
        self.clear_marked();
    }

    /// a printable view of this state laid over `graph`
    pub fn dump<'a>(&'a self, graph: &'a Digraph) -> StateDump<'a> {
        StateDump { graph, state: self }
    }
}

/// Per-vertex and per-edge listing of a graph's traversal state.
pub struct StateDump<'a> {
    graph: &'a Digraph,
    state: &'a TraversalState,
}

impl fmt::Display for StateDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.graph.vertices() {
            write!(f, "Vertex: {v}")?;
            if let Some((row, col)) = self.graph.cell(v) {
                write!(f, " cell ({row}, {col})")?;
            }
            writeln!(f)?;
            writeln!(f, "Marked: {}", self.state.is_marked(v))?;
            match self.state.predecessor(v) {
                Some(pred) => writeln!(f, "Pred: {pred}")?,
                None => writeln!(f, "Pred: none")?,
            }
            writeln!(f, "Visited: {}", self.state.is_visited(v))?;
            match self.state.weight(v) {
                INFINITE => writeln!(f, "Weight: inf\n")?,
                w => writeln!(f, "Weight: {w}\n")?,
            }
        }

        for (id, edge) in self.graph.edges() {
            writeln!(f, "Edge: {} -> {}", edge.source, edge.target)?;
            writeln!(f, "Weight: {}", edge.weight)?;
            writeln!(f, "Marked: {}", self.state.is_edge_marked(id))?;
            writeln!(f, "Visited: {}\n", self.state.is_edge_visited(id))?;
        }
        Ok(())
    }
}
