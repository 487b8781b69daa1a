//! Traits and index types for graph interfaces

pub type VertexId = u32;
pub type EdgeId = u32;
pub type Weight = i64;

/// a (row, column) position in a maze grid
pub type Cell = (usize, usize);

/// weight of a vertex no run has reached yet
pub const INFINITE: Weight = Weight::MAX;

pub trait Graph {
    /// number of vertices; ids are dense in `0..size()`
    fn size(&self) -> usize;

    /// number of directed edges; ids are dense in `0..edge_count()`
    fn edge_count(&self) -> usize;

    /// out-neighbors of a vertex, in edge insertion order
    fn neighbors(&self, i: VertexId) -> &[VertexId];
}

pub trait MutableGraph {
    fn add_vertex(&mut self) -> VertexId;
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> EdgeId;
}
