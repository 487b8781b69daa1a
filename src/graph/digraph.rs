//! implementation of a weighted directed graph with adjacency lists

use super::{Cell, EdgeId, Graph, MutableGraph, VertexId, Weight};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: Weight,
}

/// Directed graph whose structure is fixed once built.
///
/// Vertices may carry the maze cell they were created for. Everything an
/// algorithm mutates (weights, predecessors, flags) lives in a separate
/// [`TraversalState`](super::TraversalState), so one graph can serve any
/// number of runs.
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    cells: Vec<Option<Cell>>,
    edges: Vec<Edge>,
    out_edges: Vec<Vec<EdgeId>>,
    out_neighbors: Vec<Vec<VertexId>>,
}

impl Digraph {
    /// constructs an empty graph
    pub fn new() -> Digraph {
        Digraph::default()
    }

    /// constructs a graph with `n` untagged vertices and no edges
    pub fn with_vertices(n: usize) -> Digraph {
        let mut graph = Digraph::new();
        for _ in 0..n {
            graph.add_vertex();
        }
        graph
    }

    /// builds a graph from `(from, to, weight)` triples over `n` vertices
    pub fn from_edge_list(n: usize, edges: &[(VertexId, VertexId, Weight)]) -> Digraph {
        let mut graph = Digraph::with_vertices(n);
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// adds a vertex tagged with the maze cell it stands for
    pub fn add_vertex_at(&mut self, cell: Cell) -> VertexId {
        self.push_vertex(Some(cell))
    }

    fn push_vertex(&mut self, cell: Option<Cell>) -> VertexId {
        assert!(
            self.cells.len() <= VertexId::MAX as usize,
            "vertex ids exhausted"
        );
        let id = self.cells.len() as VertexId;
        self.cells.push(cell);
        self.out_edges.push(Vec::new());
        self.out_neighbors.push(Vec::new());
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.cells.len()
    }

    /// every vertex id, in increasing order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + Clone {
        0..self.cells.len() as VertexId
    }

    /// every edge with its id, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + Clone {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| (i as EdgeId, edge))
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        assert!((id as usize) < self.edges.len());
        &self.edges[id as usize]
    }

    /// ids of the edges leaving a vertex, in insertion order
    pub fn out_edges(&self, i: VertexId) -> &[EdgeId] {
        assert!((i as usize) < self.vertex_count());
        &self.out_edges[i as usize]
    }

    /// looks up the directed edge `from -> to`
    pub fn find_edge(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.out_edges(from)
            .iter()
            .copied()
            .find(|&id| self.edges[id as usize].target == to)
    }

    pub fn cell(&self, i: VertexId) -> Option<Cell> {
        assert!((i as usize) < self.vertex_count());
        self.cells[i as usize]
    }

    /// largest out-degree of any vertex
    pub fn max_degree(&self) -> usize {
        self.out_edges.iter().map(|e| e.len()).max().unwrap_or(0)
    }
}

impl Graph for Digraph {
    fn size(&self) -> usize {
        self.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn neighbors(&self, i: VertexId) -> &[VertexId] {
        assert!((i as usize) < self.vertex_count());
        &self.out_neighbors[i as usize]
    }
}

impl MutableGraph for Digraph {
    fn add_vertex(&mut self) -> VertexId {
        self.push_vertex(None)
    }

    /// adds the directed edge `from -> to`; the pair must not already exist
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> EdgeId {
        let n = self.vertex_count() as VertexId;
        assert!(from < n && to < n, "edge {from} -> {to} outside 0..{n}");
        debug_assert!(
            self.find_edge(from, to).is_none(),
            "duplicate edge {from} -> {to}"
        );

        assert!(self.edges.len() <= EdgeId::MAX as usize, "edge ids exhausted");
        let id = self.edges.len() as EdgeId;
        self.edges.push(Edge {
            source: from,
            target: to,
            weight,
        });
        self.out_edges[from as usize].push(id);
        self.out_neighbors[from as usize].push(to);
        id
    }
}
