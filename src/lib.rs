//! Perfect maze generation using randomized depth-first carving
//!
//! The system places an entrance and an exit on the grid perimeter, lays down
//! structural walls on every even row and column, and carves corridors with a
//! backtracking depth-first walk that can jump across a single wall cell when
//! no adjacent unvisited cell remains.

#![forbid(unsafe_code)]

/// Core carving algorithm including perimeter placement, the depth-first
/// carve loop, and visit tracking
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid storage and generation results
pub mod spatial;

pub use io::error::{MazeError, Result};
