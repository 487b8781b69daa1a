//! ordered vertex paths and their reconstruction from search output

use std::fmt;

use itertools::Itertools;

use super::{Cell, Digraph, Graph, VertexId};

/// A non-empty walk from a source vertex to a target vertex.
///
/// "No path" is expressed as `Option::<Path>::None` by every producer, so a
/// one-vertex path (source equals target) can never be confused with an
/// unreachable target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    vertices: Vec<VertexId>,
}

impl Path {
    /// the trivial path that starts and ends at `v`
    pub fn single(v: VertexId) -> Path {
        Path { vertices: vec![v] }
    }

    /// wraps vertices already in source-to-target order; `None` if empty
    pub fn from_vertices(vertices: Vec<VertexId>) -> Option<Path> {
        if vertices.is_empty() {
            None
        } else {
            Some(Path { vertices })
        }
    }

    /// reorders a sequence discovered target-first (e.g. popped off a search
    /// stack) into source-to-target order
    pub fn from_discovery_order(mut discovered: Vec<VertexId>) -> Option<Path> {
        discovered.reverse();
        Path::from_vertices(discovered)
    }

    /// Walks the predecessor chain backward from `target`.
    ///
    /// The walk stops at the first vertex without a predecessor; the result is
    /// a path only if that vertex is `source`. A chain that does not terminate
    /// within `preds.len()` steps (a predecessor cycle) yields `None`.
    pub fn from_predecessors(
        preds: &[Option<VertexId>],
        source: VertexId,
        target: VertexId,
    ) -> Option<Path> {
        let mut discovered = vec![target];
        let mut current = target;
        while let Some(pred) = preds[current as usize] {
            if discovered.len() > preds.len() {
                return None;
            }
            discovered.push(pred);
            current = pred;
        }
        if current != source {
            return None;
        }
        Path::from_discovery_order(discovered)
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn source(&self) -> VertexId {
        self.vertices[0]
    }

    pub fn target(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    /// number of vertices on the path
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// always false for a constructed path
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// number of edges walked, i.e. one less than the vertex count
    pub fn edge_count(&self) -> usize {
        self.vertices.len() - 1
    }

    /// checks that every consecutive pair of vertices is joined by an edge
    pub fn is_valid_in<G: Graph + ?Sized>(&self, graph: &G) -> bool {
        self.vertices
            .iter()
            .all(|&v| (v as usize) < graph.size())
            && self
                .vertices
                .iter()
                .tuple_windows()
                .all(|(&from, to)| graph.neighbors(from).contains(to))
    }

    /// maps the path onto maze cells; `None` if any vertex has no cell
    pub fn cells(&self, graph: &Digraph) -> Option<Vec<Cell>> {
        self.vertices.iter().map(|&v| graph.cell(v)).collect()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vertices.iter().join(" -> "))
    }
}
