//! Perimeter walking for entrance and exit placement
//!
//! The grid boundary is treated as a clockwise cycle starting at the top-left
//! corner: top row, right column, bottom row, left column. A walked distance
//! along that cycle resolves to a boundary cell, with a parity correction that
//! keeps the cell off the structural wall lines of each edge.

use crate::spatial::GridPosition;
use rand::Rng;

/// Length of the boundary cycle for a `width` by `height` grid
pub const fn perimeter_len(width: usize, height: usize) -> usize {
    2 * (width + height - 2)
}

// Shift an even coordinate down onto the nearest odd row/column
const fn odd_below(value: i64) -> i64 {
    if value % 2 == 0 { value - 1 } else { value }
}

// Shift an even coordinate up onto the nearest odd row/column
const fn odd_above(value: i64) -> i64 {
    if value % 2 == 0 { value + 1 } else { value }
}

// Corrected coordinates at the corner offsets of each edge segment can
// escape the axis by one cell; pull them back into the open band. The band
// ends are odd for odd axis lengths, so the result stays off the wall lines.
fn into_open_band(value: i64, axis_len: usize) -> usize {
    value.clamp(1, axis_len as i64 - 2) as usize
}

/// Map a clockwise walked distance along the boundary cycle to a cell
///
/// `offset` is taken modulo the perimeter length. The four edge segments are
/// resolved in left, bottom, right, top order, each with its own parity
/// correction away from the structural wall lines.
pub fn cell_at_perimeter_offset(width: usize, height: usize, offset: usize) -> GridPosition {
    let perimeter = perimeter_len(width, height) as i64;
    let width_i = width as i64;
    let height_i = height as i64;
    let offset = (offset as i64).rem_euclid(perimeter);

    if offset > perimeter - height_i {
        let row = odd_below(perimeter - offset);
        GridPosition::new(into_open_band(row, height), 0)
    } else if offset > perimeter - height_i - width_i + 1 {
        let col = odd_above(perimeter - height_i - offset + 1);
        GridPosition::new(height - 1, into_open_band(col, width))
    } else if offset > perimeter - 2 * height_i - width_i + 2 {
        let row = odd_below(offset - height_i + 1);
        GridPosition::new(into_open_band(row, height), width - 1)
    } else {
        let col = odd_above(offset);
        GridPosition::new(0, into_open_band(col, width))
    }
}

/// Draw entrance and exit cells from opposite halves of the boundary cycle
///
/// The entrance offset is drawn from the first half of the cycle and the exit
/// offset from the second, which lands the entrance on the top or right edge
/// and the exit on the bottom or left edge. The two can therefore never
/// resolve to the same cell.
pub fn select_entrance_and_exit<R: Rng>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> (GridPosition, GridPosition) {
    let perimeter = perimeter_len(width, height);
    let entrance = cell_at_perimeter_offset(width, height, rng.random_range(0..perimeter / 2));
    let exit = cell_at_perimeter_offset(width, height, rng.random_range(perimeter / 2..perimeter));
    (entrance, exit)
}
