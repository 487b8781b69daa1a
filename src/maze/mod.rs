//! Rectangular mazes and their conversion to graphs

pub mod generate;
mod grid;
mod mapping;

pub use grid::*;
pub use mapping::*;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} maze")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("expected {expected} cells for the maze, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown maze marker {marker:?} at ({row}, {col})")]
    UnknownMarker { row: usize, col: usize, marker: char },
}

/// Characters used for open and blocked cells in text mazes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeFormat {
    pub open: char,
    pub blocked: char,
}

impl Default for MazeFormat {
    fn default() -> Self {
        MazeFormat {
            open: 'O',
            blocked: 'X',
        }
    }
}

impl MazeFormat {
    /// `Some(true)` for an open marker, `Some(false)` for a blocked one
    pub fn classify(&self, marker: char) -> Option<bool> {
        if marker == self.open {
            Some(true)
        } else if marker == self.blocked {
            Some(false)
        } else {
            None
        }
    }
}
