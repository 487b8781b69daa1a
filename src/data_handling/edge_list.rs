//! functions for reading weighted edge-list files
//!
//! File format, whitespace separated:
//! - vertex count, source vertex, target vertex
//! - any number of `from to weight` triples, each a directed edge
//! - an optional terminating triple whose first field is `-1`; input after
//!   it is ignored. End of input also terminates the list.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use super::{parse_token, vertex_id, InputError, Tokens};
use crate::graph::{Digraph, VertexId, Weight};

/// first field of the triple that ends an edge list
pub const END_OF_EDGES: i64 = -1;

/// A parsed edge-list file: the graph's shape plus the designated endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    pub vertex_count: usize,
    pub source: VertexId,
    pub target: VertexId,
    pub edges: Vec<(VertexId, VertexId, Weight)>,
}

impl EdgeList {
    pub fn to_graph(&self) -> Digraph {
        Digraph::from_edge_list(self.vertex_count, &self.edges)
    }
}

/// read an edge list from a file
pub fn read_edge_list(path: &Path) -> Result<EdgeList, InputError> {
    let text = std::fs::read_to_string(path)?;
    let list = parse_edge_list(&text)?;
    debug!(
        path = %path.display(),
        vertices = list.vertex_count,
        edges = list.edges.len(),
        "read edge list"
    );
    Ok(list)
}

pub fn parse_edge_list(text: &str) -> Result<EdgeList, InputError> {
    let mut tokens = Tokens::new(text);
    let vertex_count: usize = tokens.parse("vertex count")?;
    if vertex_count > VertexId::MAX as usize + 1 {
        return Err(InputError::TooManyVertices { vertex_count });
    }
    let source = vertex_id(tokens.parse("source vertex")?, vertex_count)?;
    let target = vertex_id(tokens.parse("target vertex")?, vertex_count)?;

    let mut edges = Vec::new();
    let mut seen = HashSet::new();
    while let Some(first) = tokens.try_next() {
        let from: i64 = parse_token(first, "edge source")?;
        if from == END_OF_EDGES {
            break;
        }
        let from = vertex_id(from, vertex_count)?;
        let to = vertex_id(tokens.parse("edge target")?, vertex_count)?;
        let weight: Weight = tokens.parse("edge weight")?;
        if !seen.insert((from, to)) {
            return Err(InputError::DuplicateEdge { from, to });
        }
        edges.push((from, to, weight));
    }

    Ok(EdgeList {
        vertex_count,
        source,
        target,
        edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use tempfile::tempdir;

    #[test]
    fn parses_triples_until_sentinel() {
        let text = "4 0 3\n0 1 5\n1 2 -2\n2 3 1\n-1 -1 -1\n9 9 9\n";
        let list = parse_edge_list(text).unwrap();
        assert_eq!(list.vertex_count, 4);
        assert_eq!((list.source, list.target), (0, 3));
        assert_eq!(list.edges, vec![(0, 1, 5), (1, 2, -2), (2, 3, 1)]);

        let graph = list.to_graph();
        assert_eq!(graph.size(), 4);
        assert_eq!(graph.neighbors(1), &[2]);
    }

    #[test]
    fn end_of_input_also_terminates() {
        let list = parse_edge_list("2 0 1\n0 1 7").unwrap();
        assert_eq!(list.edges, vec![(0, 1, 7)]);
        let list = parse_edge_list("1 0 0").unwrap();
        assert!(list.edges.is_empty());
    }

    #[test]
    fn rejects_out_of_range_vertices() {
        let err = parse_edge_list("3 0 2\n0 3 1\n").unwrap_err();
        assert!(matches!(
            err,
            InputError::VertexOutOfRange {
                vertex: 3,
                vertex_count: 3
            }
        ));
        assert!(parse_edge_list("3 5 0").is_err());
    }

    #[test]
    fn rejects_vertex_counts_beyond_id_range() {
        let err = parse_edge_list("4294967297 4294967296 1").unwrap_err();
        assert!(matches!(
            err,
            InputError::TooManyVertices {
                vertex_count: 4294967297
            }
        ));
    }

    #[test]
    fn rejects_truncated_triple() {
        let err = parse_edge_list("3 0 2\n0 1").unwrap_err();
        assert!(matches!(err, InputError::MissingToken { what: "edge weight" }));
        let err = parse_edge_list("3 0 2\n0 1 heavy").unwrap_err();
        assert!(matches!(err, InputError::InvalidToken { what: "edge weight", .. }));
    }

    #[test]
    fn rejects_duplicate_edges() {
        let err = parse_edge_list("3 0 2\n0 1 1\n1 2 1\n0 1 4\n").unwrap_err();
        assert!(matches!(err, InputError::DuplicateEdge { from: 0, to: 1 }));
        // the reverse direction is a different edge
        assert!(parse_edge_list("2 0 1\n0 1 1\n1 0 1\n").is_ok());
    }

    #[test]
    fn reads_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.txt");
        std::fs::write(&path, "3 0 2\n0 1 1\n1 2 1\n-1\n").unwrap();

        let list = read_edge_list(&path).unwrap();
        assert_eq!(list.edges.len(), 2);
    }
}
