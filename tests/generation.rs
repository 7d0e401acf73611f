//! Validates connectivity, structure, and determinism of generated mazes

use mazecarve::MazeError;
use mazecarve::algorithm::{generate_maze, generate_seeded};
use mazecarve::spatial::{GridPosition, MazeResult};
use ndarray::arr2;
use rand::RngCore;

/// Random source that always draws the lowest value in any range
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
}

fn path_cell_count(maze: &MazeResult) -> usize {
    maze.grid.iter().filter(|is_wall| !**is_wall).count()
}

// Counts the path cells reachable from the entrance by 4-directional moves
fn flood_fill_count(maze: &MazeResult) -> usize {
    let mut seen = vec![vec![false; maze.width()]; maze.height()];
    let mut stack = vec![maze.entrance];
    seen[maze.entrance.row][maze.entrance.col] = true;
    let mut count = 0;

    while let Some(cell) = stack.pop() {
        count += 1;
        for (row_step, col_step) in [(-1_i64, 0_i64), (1, 0), (0, -1), (0, 1)] {
            let row = cell.row as i64 + row_step;
            let col = cell.col as i64 + col_step;
            if row < 0 || col < 0 || row >= maze.height() as i64 || col >= maze.width() as i64 {
                continue;
            }
            let next = GridPosition::new(row as usize, col as usize);
            if !maze.is_wall(next) && !seen[next.row][next.col] {
                seen[next.row][next.col] = true;
                stack.push(next);
            }
        }
    }

    count
}

#[test]
fn test_every_path_cell_reachable_from_entrance() {
    for seed in [0, 1, 17, 99, 4096] {
        let maze = generate_seeded(21, 15, seed).expect("generation should succeed");
        assert_eq!(
            flood_fill_count(&maze),
            path_cell_count(&maze),
            "disconnected maze for seed {seed}"
        );
    }
}

#[test]
fn test_smallest_grid_generates() {
    let maze = generate_seeded(3, 3, 0).expect("generation should succeed");
    assert!(!maze.is_wall(GridPosition::new(1, 1)));
    assert_eq!(flood_fill_count(&maze), path_cell_count(&maze));
}

#[test]
fn test_output_shape_matches_dimensions() {
    let maze = generate_seeded(9, 13, 5).expect("generation should succeed");
    assert_eq!(maze.width(), 9);
    assert_eq!(maze.height(), 13);
    assert_eq!(maze.grid.nrows(), 13);
    assert_eq!(maze.grid.ncols(), 9);
}

#[test]
fn test_entrance_and_exit_are_open_boundary_cells() {
    for seed in 0..50 {
        let maze = generate_seeded(11, 11, seed).expect("generation should succeed");
        assert!(maze.entrance.on_boundary(11, 11), "seed {seed}");
        assert!(maze.exit.on_boundary(11, 11), "seed {seed}");
        assert_ne!(maze.entrance, maze.exit, "seed {seed}");
        assert!(!maze.is_wall(maze.entrance), "seed {seed}");
        assert!(!maze.is_wall(maze.exit), "seed {seed}");
    }
}

#[test]
fn test_walls_stay_on_even_lines() {
    let maze = generate_seeded(15, 15, 8).expect("generation should succeed");
    for ((row, col), &is_wall) in maze.grid.indexed_iter() {
        if is_wall {
            assert!(
                row % 2 == 0 || col % 2 == 0,
                "wall at odd/odd cell ({row}, {col})"
            );
        }
        if row % 2 == 1 && col % 2 == 1 {
            assert!(!is_wall, "corridor lattice cell ({row}, {col}) became a wall");
        }
    }
}

// The carved corridors form a spanning tree over the open cells, give or
// take the single extra adjacency a wall jump can introduce
#[test]
fn test_carved_maze_is_a_near_tree() {
    for seed in [2, 3, 23] {
        let maze = generate_seeded(13, 13, seed).expect("generation should succeed");
        let cells = path_cell_count(&maze);

        let mut edges = 0;
        for ((row, col), &is_wall) in maze.grid.indexed_iter() {
            if is_wall {
                continue;
            }
            for (row_step, col_step) in [(0, 1), (1, 0)] {
                let next = GridPosition::new(row + row_step, col + col_step);
                if !maze.is_wall(next) {
                    edges += 1;
                }
            }
        }

        assert!(edges >= cells - 1, "seed {seed}: {edges} edges cannot connect {cells} cells");
        assert!(
            edges <= cells,
            "seed {seed}: {edges} edges over {cells} cells means multiple cycles"
        );
    }
}

#[test]
fn test_same_seed_reproduces_the_same_maze() {
    let first = generate_seeded(21, 21, 7).expect("generation should succeed");
    let second = generate_seeded(21, 21, 7).expect("generation should succeed");
    assert_eq!(first, second);

    let third = generate_seeded(21, 21, 8).expect("generation should succeed");
    assert_ne!(first, third);
}

// With every draw pinned to zero the whole run is fixed: entrance at offset 0,
// exit at offset 8, and the walk always taking the first candidate
#[test]
fn test_lowest_draw_sequence_resolves_known_maze() {
    let mut rng = ZeroRng;
    let maze = generate_maze(5, 5, &mut rng).expect("generation should succeed");

    assert_eq!(maze.entrance, GridPosition::new(0, 1));
    assert_eq!(maze.exit, GridPosition::new(4, 3));

    let expected = arr2(&[
        [true, false, true, true, true],
        [true, false, false, false, true],
        [true, true, true, false, true],
        [true, false, false, false, true],
        [true, true, true, false, true],
    ]);
    assert_eq!(maze.grid, expected);
}

#[test]
fn test_invalid_dimensions_are_rejected() {
    let cases = [(0, 9), (9, 0), (1, 9), (9, 1), (2, 9), (9, 2), (8, 9), (9, 40)];
    for (width, height) in cases {
        let result = generate_seeded(width, height, 1);
        assert!(
            matches!(result, Err(MazeError::InvalidDimension { .. })),
            "dimensions {width}x{height} should be rejected"
        );
    }

    let oversized = generate_seeded(10_001, 9, 1);
    assert!(matches!(
        oversized,
        Err(MazeError::InvalidDimension { .. })
    ));
}
