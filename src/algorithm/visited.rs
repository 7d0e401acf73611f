use crate::spatial::GridPosition;
use bitvec::prelude::*;

/// Fixed-size visit bitset over row-major cell indices
///
/// Tracks which cells the carve walk has entered, separate from the wall
/// occupancy so the traversal state can be discarded after generation.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
    cols: usize,
}

impl VisitedSet {
    /// Create a visit set with no cells marked
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            cols,
        }
    }

    /// Mark a cell as visited; positions outside the grid are ignored
    pub fn mark(&mut self, position: GridPosition) {
        if position.col < self.cols {
            let index = position.row * self.cols + position.col;
            if index < self.bits.len() {
                self.bits.set(index, true);
            }
        }
    }

    /// Test whether a cell has been visited
    pub fn is_marked(&self, position: GridPosition) -> bool {
        if position.col >= self.cols {
            return false;
        }
        let index = position.row * self.cols + position.col;
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Count the visited cells
    pub fn marked_count(&self) -> usize {
        self.bits.count_ones()
    }
}
