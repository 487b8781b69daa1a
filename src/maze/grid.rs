//! boolean maze grid

use crate::graph::Cell;

use super::{MazeError, MazeFormat};

/// A rows x cols grid of cells, `true` where the cell can be entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub(super) rows: usize,
    pub(super) cols: usize,
    pub(super) cells: Vec<bool>,
}

impl Maze {
    /// builds a maze from row-major cell values
    pub fn new(rows: usize, cols: usize, cells: Vec<bool>) -> Result<Maze, MazeError> {
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(MazeError::DimensionMismatch {
                expected: rows.saturating_mul(cols),
                found: cells.len(),
            });
        }
        Ok(Maze { rows, cols, cells })
    }

    /// builds a maze from text rows using the default `O`/`X` markers
    pub fn from_rows(rows: &[&str]) -> Result<Maze, MazeError> {
        Maze::parse_rows(rows, &MazeFormat::default())
    }

    pub fn parse_rows(rows: &[&str], format: &MazeFormat) -> Result<Maze, MazeError> {
        let cols = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, marker) in line.chars().enumerate() {
                let open = format
                    .classify(marker)
                    .ok_or(MazeError::UnknownMarker { row, col, marker })?;
                cells.push(open);
            }
        }
        Maze::new(rows.len(), cols, cells)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn check(&self, row: usize, col: usize) -> Result<usize, MazeError> {
        if row >= self.rows || col >= self.cols {
            return Err(MazeError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// whether cell (row, col) can be entered; out-of-range cells are an error
    pub fn is_legal(&self, row: usize, col: usize) -> Result<bool, MazeError> {
        self.check(row, col).map(|i| self.cells[i])
    }

    /// top-left and bottom-right cells, `None` for a maze without cells
    pub fn corners(&self) -> Option<(Cell, Cell)> {
        if self.rows == 0 || self.cols == 0 {
            return None;
        }
        Some(((0, 0), (self.rows - 1, self.cols - 1)))
    }

    /// number of open cells
    pub fn open_cells(&self) -> usize {
        self.cells.iter().filter(|&&open| open).count()
    }

    /// Renders the maze with `*` on the goal, `+` on the current cell,
    /// `X` on blocked cells and a space on open ones.
    pub fn render(&self, goal: Cell, current: Cell) -> Result<String, MazeError> {
        self.check(goal.0, goal.1)?;
        self.check(current.0, current.1)?;

        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in 0..self.rows {
            for col in 0..self.cols {
                let c = if (row, col) == goal {
                    '*'
                } else if (row, col) == current {
                    '+'
                } else if self.cells[row * self.cols + col] {
                    ' '
                } else {
                    'X'
                };
                out.push(c);
            }
            out.push('\n');
        }
        Ok(out)
    }
}
