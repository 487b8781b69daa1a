//! argument parsers shared by the command-line tools

use crate::graph::Cell;

/// parses a `row,col` cell
pub fn parse_cell(s: &str) -> Result<Cell, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("bad row in {s:?}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("bad column in {s:?}"))?;
    Ok((row, col))
}

/// parses maze dimensions written as `ROWSxCOLS`, both non-zero
pub fn parse_dimensions(s: &str) -> Result<(usize, usize), String> {
    let (rows, cols) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got {s:?}"))?;
    let rows: usize = rows.parse().map_err(|_| format!("bad row count in {s:?}"))?;
    let cols: usize = cols.parse().map_err(|_| format!("bad column count in {s:?}"))?;
    if rows == 0 || cols == 0 {
        return Err(format!("maze must have at least one cell, got {s:?}"));
    }
    Ok((rows, cols))
}

/// parses an open-cell density, a finite number in `[0, 1]`
pub fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s.trim().parse().map_err(|_| format!("bad density {s:?}"))?;
    if !(0.0..=1.0).contains(&density) {
        return Err(format!("density must be between 0 and 1, got {s:?}"));
    }
    Ok(density)
}
