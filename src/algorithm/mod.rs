/// Depth-first carve loop and generation entry points
pub mod carver;
/// Perimeter walking for entrance and exit placement
pub mod perimeter;
/// Visit tracking over row-major cell indices
pub mod visited;

pub use carver::{generate_maze, generate_seeded};
