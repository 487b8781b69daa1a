//! turns a maze grid into a graph of legal moves

use tracing::debug;

use crate::graph::{Cell, Digraph, MutableGraph, VertexId, Weight};

use super::{Maze, MazeError};

/// weight of a single step between adjacent cells
pub const STEP_WEIGHT: Weight = 1;

/// A maze's move graph together with the cell-to-vertex lookup.
#[derive(Debug, Clone)]
pub struct MazeGraph {
    graph: Digraph,
    lookup: Vec<Option<VertexId>>,
    rows: usize,
    cols: usize,
}

impl MazeGraph {
    /// Creates one vertex per open cell and a pair of opposite unit-weight
    /// edges between every two open cells that share a side.
    ///
    /// Cells are scanned top-to-bottom, left-to-right, and each new vertex
    /// only links back to the cell above and the cell to its left. Those
    /// neighbours already have vertices, so every adjacency is added once.
    pub fn build(maze: &Maze) -> MazeGraph {
        let (rows, cols) = (maze.rows(), maze.cols());
        let mut graph = Digraph::new();
        let mut lookup: Vec<Option<VertexId>> = vec![None; rows * cols];

        for row in 0..rows {
            for col in 0..cols {
                if !maze.cells[row * cols + col] {
                    continue;
                }
                let v = graph.add_vertex_at((row, col));
                lookup[row * cols + col] = Some(v);

                let above = row.checked_sub(1).and_then(|r| lookup[r * cols + col]);
                let left = col.checked_sub(1).and_then(|c| lookup[row * cols + c]);
                for neighbor in [above, left].into_iter().flatten() {
                    graph.add_edge(v, neighbor, STEP_WEIGHT);
                    graph.add_edge(neighbor, v, STEP_WEIGHT);
                }
            }
        }

        debug!(
            rows,
            cols,
            vertices = graph.vertex_count(),
            edges = graph.edges().count(),
            "mapped maze to graph"
        );
        MazeGraph {
            graph,
            lookup,
            rows,
            cols,
        }
    }

    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    pub fn into_graph(self) -> Digraph {
        self.graph
    }

    /// vertex standing for cell (row, col), `None` if the cell is blocked
    pub fn vertex_at(&self, row: usize, col: usize) -> Result<Option<VertexId>, MazeError> {
        if row >= self.rows || col >= self.cols {
            return Err(MazeError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.lookup[row * self.cols + col])
    }

    pub fn cell_of(&self, v: VertexId) -> Option<Cell> {
        if (v as usize) < self.graph.vertex_count() {
            self.graph.cell(v)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::maze::generate::random_maze;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn builds_vertices_in_raster_order() {
        let maze = Maze::from_rows(&["OO", "XO"]).unwrap();
        let mg = MazeGraph::build(&maze);
        let graph = mg.graph();

        assert_eq!(graph.size(), 3);
        assert_eq!(graph.cell(0), Some((0, 0)));
        assert_eq!(graph.cell(1), Some((0, 1)));
        assert_eq!(graph.cell(2), Some((1, 1)));
        assert_eq!(mg.vertex_at(1, 0), Ok(None));
        assert_eq!(mg.vertex_at(1, 1), Ok(Some(2)));
        assert!(mg.vertex_at(2, 0).is_err());

        // two adjacencies, each as a reciprocal pair of unit edges
        assert_eq!(graph.edge_count(), 4);
        for (_, edge) in graph.edges() {
            assert_eq!(edge.weight, STEP_WEIGHT);
            assert!(graph.find_edge(edge.target, edge.source).is_some());
        }
        assert_eq!(graph.neighbors(1), &[0, 2]);
    }

    #[test]
    fn open_grid_edge_count() {
        let maze = Maze::new(3, 4, vec![true; 12]).unwrap();
        let mg = MazeGraph::build(&maze);
        // 3 rows of 3 horizontal links, 2 rows of 4 vertical links, both directions
        assert_eq!(mg.graph().edge_count(), 2 * (3 * 3 + 2 * 4));
        assert_eq!(mg.graph().max_degree(), 4);
    }

    #[test]
    fn edges_join_adjacent_cells_only() {
        let mut rng = StdRng::seed_from_u64(7);
        let maze = random_maze(12, 9, 0.6, &mut rng);
        let mg = MazeGraph::build(&maze);
        let graph = mg.graph();

        assert_eq!(graph.size(), maze.open_cells());
        for (_, edge) in graph.edges() {
            assert_ne!(edge.source, edge.target);
            let (r1, c1) = graph.cell(edge.source).unwrap();
            let (r2, c2) = graph.cell(edge.target).unwrap();
            assert_eq!(r1.abs_diff(r2) + c1.abs_diff(c2), 1);
        }
        for v in graph.vertices() {
            let (row, col) = mg.cell_of(v).unwrap();
            assert_eq!(mg.vertex_at(row, col), Ok(Some(v)));
        }
    }
}
