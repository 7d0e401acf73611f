//! Defaults and limits for generation and rendering

// Grid validation bounds
/// Smallest grid dimension that yields an interior corridor
pub const MIN_GRID_DIMENSION: usize = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default maze width in cells
pub const DEFAULT_MAZE_WIDTH: usize = 41;

/// Default maze height in cells
pub const DEFAULT_MAZE_HEIGHT: usize = 41;

// Rendering defaults matching the classic black-on-white tile scheme
/// Edge length of one rendered grid cell in pixels
pub const DEFAULT_TILE_SIZE: u32 = 5;

/// Default wall color as a hex string
pub const DEFAULT_WALL_COLOR: &str = "#000000";

/// Default path color as a hex string
pub const DEFAULT_PATH_COLOR: &str = "#ffffff";

/// Maximum rendered tile size in pixels
pub const MAX_TILE_SIZE: u32 = 256;

// Output settings
/// Zero-padded width of the index appended to batch output names
pub const OUTPUT_INDEX_WIDTH: usize = 4;
