//! Validates perimeter offset resolution and entrance/exit placement

use mazecarve::algorithm::perimeter::{
    cell_at_perimeter_offset, perimeter_len, select_entrance_and_exit,
};
use mazecarve::spatial::GridPosition;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_perimeter_length() {
    assert_eq!(perimeter_len(3, 3), 8);
    assert_eq!(perimeter_len(5, 5), 16);
    assert_eq!(perimeter_len(9, 5), 24);
    assert_eq!(perimeter_len(41, 41), 160);
}

// Hand-derived offsets for the 5x5 cycle of length 16, walked clockwise
// from the top-left corner
#[test]
fn test_known_offsets_on_a_five_by_five_grid() {
    let cases = [
        (0, (0, 1)),
        (2, (0, 3)),
        (5, (1, 4)),
        (7, (3, 4)),
        (8, (4, 3)),
        (11, (4, 1)),
        (12, (3, 0)),
        (15, (1, 0)),
    ];
    for (offset, (row, col)) in cases {
        assert_eq!(
            cell_at_perimeter_offset(5, 5, offset),
            GridPosition::new(row, col),
            "offset {offset}"
        );
    }
}

#[test]
fn test_every_offset_lands_on_an_open_boundary_cell() {
    for (width, height) in [(5, 5), (7, 9), (13, 3), (3, 13)] {
        let perimeter = perimeter_len(width, height);
        for offset in 0..perimeter {
            let cell = cell_at_perimeter_offset(width, height, offset);
            assert!(cell.row < height && cell.col < width, "offset {offset} on {width}x{height}");
            assert!(
                cell.on_boundary(height, width),
                "offset {offset} on {width}x{height} left the boundary: {cell:?}"
            );

            // The coordinate running along the edge must sit on an odd line
            let free = if cell.row == 0 || cell.row == height - 1 {
                cell.col
            } else {
                cell.row
            };
            assert_eq!(
                free % 2,
                1,
                "offset {offset} on {width}x{height} landed on a wall line: {cell:?}"
            );
        }
    }
}

#[test]
fn test_offsets_wrap_around_the_cycle() {
    let perimeter = perimeter_len(7, 7);
    for offset in 0..perimeter {
        assert_eq!(
            cell_at_perimeter_offset(7, 7, offset + perimeter),
            cell_at_perimeter_offset(7, 7, offset)
        );
    }
}

// The first half of the cycle covers the top and right edges, the second
// half the bottom and left edges, so the two picks can never collide
#[test]
fn test_entrance_and_exit_come_from_opposite_halves() {
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (entrance, exit) = select_entrance_and_exit(9, 7, &mut rng);

        assert!(
            entrance.row == 0 || entrance.col == 8,
            "seed {seed}: entrance {entrance:?} off the top/right edges"
        );
        assert!(
            exit.row == 6 || exit.col == 0,
            "seed {seed}: exit {exit:?} off the bottom/left edges"
        );
        assert_ne!(entrance, exit, "seed {seed}");
    }
}
