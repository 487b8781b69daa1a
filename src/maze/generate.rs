//! random maze generation for benchmarks and experiments

use rand::Rng;

use super::Maze;

/// Fills a rows x cols grid with open cells at probability `density`.
///
/// The top-left and bottom-right corners are always open so the default
/// start and goal cells exist. Nothing guarantees they are connected.
pub fn random_maze<R: Rng + ?Sized>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Maze {
    assert!(rows > 0 && cols > 0, "maze must have at least one cell");
    // NaN survives clamp, and random_bool rejects it
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut cells: Vec<bool> = (0..rows * cols).map(|_| rng.random_bool(density)).collect();
    cells[0] = true;
    cells[rows * cols - 1] = true;

    Maze { rows, cols, cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn corners_are_open() {
        let mut rng = StdRng::seed_from_u64(3);
        let maze = random_maze(5, 8, 0.0, &mut rng);
        assert_eq!(maze.is_legal(0, 0), Ok(true));
        assert_eq!(maze.is_legal(4, 7), Ok(true));
        assert_eq!(maze.open_cells(), 2);
    }

    #[test]
    fn same_seed_same_maze() {
        let a = random_maze(6, 6, 0.5, &mut StdRng::seed_from_u64(11));
        let b = random_maze(6, 6, 0.5, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn nan_density_opens_only_corners() {
        let maze = random_maze(3, 3, f64::NAN, &mut StdRng::seed_from_u64(1));
        assert_eq!(maze.open_cells(), 2);
    }
}
