//! Wall occupancy storage with parity-based initialization
//!
//! The working grid is a dense boolean matrix where `true` marks a wall cell.
//! Structural walls follow the parity scheme: every even row and every even
//! column is a wall line, leaving odd/odd cells as the corridor lattice.

use ndarray::Array2;

/// A cell coordinate within the maze grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPosition {
    /// Row index, 0 at the top edge
    pub row: usize,
    /// Column index, 0 at the left edge
    pub col: usize,
}

impl GridPosition {
    /// Create a position from row and column indices
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Test whether the position lies on the outer boundary of a grid
    pub const fn on_boundary(&self, rows: usize, cols: usize) -> bool {
        self.row == 0 || self.col == 0 || self.row + 1 == rows || self.col + 1 == cols
    }
}

/// Returns true if the parity scheme forces the cell to be a wall
pub const fn is_structural_wall(row: usize, col: usize) -> bool {
    row % 2 == 0 || col % 2 == 0
}

/// Mutable wall occupancy used while carving
///
/// Out-of-range queries read as walls, so neighbor scans never need a
/// separate bounds check.
#[derive(Debug, Clone)]
pub struct MazeGrid {
    walls: Array2<bool>,
}

impl MazeGrid {
    /// Build a grid with structural walls everywhere the parity scheme
    /// demands, then force the given cells (entrance and exit) open
    pub fn with_parity_walls(rows: usize, cols: usize, open_cells: &[GridPosition]) -> Self {
        let mut walls = Array2::from_shape_fn((rows, cols), |(row, col)| {
            is_structural_wall(row, col)
        });

        for position in open_cells {
            if let Some(cell) = walls.get_mut([position.row, position.col]) {
                *cell = false;
            }
        }

        Self { walls }
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.walls.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.walls.ncols()
    }

    /// Test whether a cell is a wall; positions outside the grid count as walls
    pub fn is_wall(&self, position: GridPosition) -> bool {
        self.walls
            .get([position.row, position.col])
            .copied()
            .unwrap_or(true)
    }

    /// Turn a wall cell into a path cell
    pub fn open(&mut self, position: GridPosition) {
        if let Some(cell) = self.walls.get_mut([position.row, position.col]) {
            *cell = false;
        }
    }

    /// Count the path cells currently in the grid
    pub fn path_cell_count(&self) -> usize {
        self.walls.iter().filter(|is_wall| !**is_wall).count()
    }

    /// Consume the grid, yielding the wall occupancy matrix
    pub fn into_walls(self) -> Array2<bool> {
        self.walls
    }
}

/// Immutable output of one generation run
///
/// The entrance and exit always refer to open cells on the grid boundary;
/// the visit state used while carving is not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeResult {
    /// Boundary cell where the maze is entered
    pub entrance: GridPosition,
    /// Boundary cell where the maze is left
    pub exit: GridPosition,
    /// Wall occupancy, `true` meaning wall, indexed `[row, col]`
    pub grid: Array2<bool>,
}

impl MazeResult {
    /// Maze width in cells
    pub fn width(&self) -> usize {
        self.grid.ncols()
    }

    /// Maze height in cells
    pub fn height(&self) -> usize {
        self.grid.nrows()
    }

    /// Test whether a cell is a wall; positions outside the grid count as walls
    pub fn is_wall(&self, position: GridPosition) -> bool {
        self.grid
            .get([position.row, position.col])
            .copied()
            .unwrap_or(true)
    }
}
