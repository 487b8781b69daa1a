//! functions for reading maze text files
//!
//! File format: the row count and column count, then `rows * cols`
//! single-character cell markers in row-major order, all separated by
//! whitespace. With the default [`MazeFormat`], `O` is open and `X` blocked.

use std::path::Path;

use tracing::debug;

use super::{InputError, Tokens};
use crate::maze::{Maze, MazeError, MazeFormat};

/// read a maze from a file
pub fn read_maze(path: &Path, format: &MazeFormat) -> Result<Maze, InputError> {
    let text = std::fs::read_to_string(path)?;
    let maze = parse_maze(&text, format)?;
    debug!(path = %path.display(), rows = maze.rows(), cols = maze.cols(), "read maze");
    Ok(maze)
}

pub fn parse_maze(text: &str, format: &MazeFormat) -> Result<Maze, InputError> {
    let mut tokens = Tokens::new(text);
    let rows: usize = tokens.parse("row count")?;
    let cols: usize = tokens.parse("column count")?;

    let size = rows
        .checked_mul(cols)
        .ok_or_else(|| InputError::InvalidToken {
            what: "maze dimensions",
            token: format!("{rows} {cols}"),
        })?;

    // markers may be packed into row strings ("OXO") or spaced out ("O X O")
    let mut cells = Vec::new();
    while cells.len() < size {
        let token = tokens.next_token("maze cell")?;
        for marker in token.chars() {
            let index = cells.len();
            let (row, col) = (index / cols, index % cols);
            let open = format
                .classify(marker)
                .ok_or(MazeError::UnknownMarker { row, col, marker })?;
            cells.push(open);
        }
    }
    if let Some(extra) = tokens.try_next() {
        return Err(InputError::InvalidToken {
            what: "end of maze",
            token: extra.to_string(),
        });
    }

    Ok(Maze::new(rows, cols, cells)?)
}
