//! Randomized depth-first carving with backtracking and wall jumps
//!
//! Starting from the entrance, the walk repeatedly moves to a random adjacent
//! unvisited path cell. When no adjacent cell qualifies it looks two cells
//! ahead instead and opens the single wall cell in between, which is how
//! corridors through the structural wall lattice are carved. Dead ends are
//! resolved by backtracking along an explicit stack.

use crate::algorithm::perimeter::select_entrance_and_exit;
use crate::algorithm::visited::VisitedSet;
use crate::io::configuration::{MAX_GRID_DIMENSION, MIN_GRID_DIMENSION};
use crate::io::error::{MazeError, Result};
use crate::spatial::{GridPosition, MazeGrid, MazeResult};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Orthogonal step directions as row/column deltas
const DIRECTIONS: [(i64, i64); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Generate a maze from a fixed seed
///
/// Convenience wrapper around [`generate_maze`] driving a seeded [`StdRng`];
/// equal seeds produce identical mazes.
///
/// # Errors
///
/// Returns [`MazeError::InvalidDimension`] for dimensions that are below 3,
/// even, or above the maximum grid dimension.
pub fn generate_seeded(width: usize, height: usize, seed: u64) -> Result<MazeResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_maze(width, height, &mut rng)
}

/// Generate a maze using the supplied random source
///
/// Places the entrance and exit on opposite halves of the perimeter, builds
/// the parity wall grid, and carves corridors with the depth-first walk. The
/// returned maze is fully connected: every path cell is reachable from the
/// entrance through 4-directional moves.
///
/// # Errors
///
/// Returns [`MazeError::InvalidDimension`] for dimensions that are below 3,
/// even, or above the maximum grid dimension, and
/// [`MazeError::IncompleteMaze`] if the walk halts with unreached path cells
/// (impossible for validated dimensions, checked rather than assumed).
pub fn generate_maze<R: Rng>(width: usize, height: usize, rng: &mut R) -> Result<MazeResult> {
    validate_dimension("width", width)?;
    validate_dimension("height", height)?;

    let (entrance, exit) = select_entrance_and_exit(width, height, rng);
    let grid = MazeGrid::with_parity_walls(height, width, &[entrance, exit]);

    let mut carver = Carver::new(grid, entrance);
    carver.run(rng)?;

    Ok(MazeResult {
        entrance,
        exit,
        grid: carver.grid.into_walls(),
    })
}

fn validate_dimension(dimension: &'static str, value: usize) -> Result<()> {
    if value < MIN_GRID_DIMENSION {
        return Err(MazeError::InvalidDimension {
            dimension,
            value,
            reason: "must be at least 3",
        });
    }
    if value % 2 == 0 {
        return Err(MazeError::InvalidDimension {
            dimension,
            value,
            reason: "must be odd for the wall parity scheme",
        });
    }
    if value > MAX_GRID_DIMENSION {
        return Err(MazeError::InvalidDimension {
            dimension,
            value,
            reason: "exceeds the maximum grid dimension",
        });
    }
    Ok(())
}

/// Walk state for one carve run
struct Carver {
    grid: MazeGrid,
    visited: VisitedSet,
    stack: Vec<GridPosition>,
    current: GridPosition,
    /// Path cells not yet visited; the loop condition of the walk
    remaining: usize,
}

impl Carver {
    fn new(grid: MazeGrid, entrance: GridPosition) -> Self {
        let mut visited = VisitedSet::new(grid.rows(), grid.cols());
        visited.mark(entrance);
        let remaining = grid.path_cell_count().saturating_sub(1);

        Self {
            grid,
            visited,
            stack: Vec::new(),
            current: entrance,
            remaining,
        }
    }

    fn run<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        while self.remaining > 0 {
            let mut candidates = self.unvisited_neighbors(1);
            if candidates.is_empty() {
                candidates = self.unvisited_neighbors(2);
            }

            if candidates.is_empty() {
                match self.stack.pop() {
                    Some(previous) => self.current = previous,
                    None => break,
                }
            } else {
                let choice = rng.random_range(0..candidates.len());
                if let Some(&next) = candidates.get(choice) {
                    self.advance(next);
                }
            }
        }

        // Left-over unvisited cells mean a disconnected maze; reject it
        // outright instead of returning a partial result
        if self.remaining > 0 {
            return Err(MazeError::IncompleteMaze {
                unreached: self.remaining,
                grid_dimensions: (self.grid.rows(), self.grid.cols()),
            });
        }
        Ok(())
    }

    /// Step onto the chosen cell, opening the intermediate wall on a jump
    fn advance(&mut self, next: GridPosition) {
        self.stack.push(self.current);

        let span = next.row.abs_diff(self.current.row) + next.col.abs_diff(self.current.col);
        if span == 2 {
            let between = GridPosition::new(
                (self.current.row + next.row) / 2,
                (self.current.col + next.col) / 2,
            );
            self.grid.open(between);
            self.visited.mark(between);
        }

        self.current = next;
        self.visited.mark(next);
        self.remaining -= 1;
    }

    fn unvisited_neighbors(&self, distance: i64) -> Vec<GridPosition> {
        let mut neighbors = Vec::with_capacity(4);
        for (row_step, col_step) in DIRECTIONS {
            let row = self.current.row as i64 + row_step * distance;
            let col = self.current.col as i64 + col_step * distance;
            if row < 0 || col < 0 {
                continue;
            }

            let candidate = GridPosition::new(row as usize, col as usize);
            if !self.grid.is_wall(candidate) && !self.visited.is_marked(candidate) {
                neighbors.push(candidate);
            }
        }
        neighbors
    }
}
