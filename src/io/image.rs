//! PNG rendering of generated mazes

use crate::io::error::{MazeError, Result};
use crate::io::render::RenderOptions;
use crate::spatial::{GridPosition, MazeResult};
use image::{ImageBuffer, Rgba};

/// Export a maze as a PNG image, one filled square per wall cell
///
/// The image is `width * tile_size` by `height * tile_size` pixels, with
/// wall tiles in the wall color over a path-colored background.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_maze_as_png(
    result: &MazeResult,
    options: &RenderOptions,
    output_path: &str,
) -> Result<()> {
    let tile_size = options.tile_size;
    let pixel_width = result.width() as u32 * tile_size;
    let pixel_height = result.height() as u32 * tile_size;

    let img = ImageBuffer::from_fn(pixel_width, pixel_height, |x, y| {
        let cell = GridPosition::new((y / tile_size) as usize, (x / tile_size) as usize);
        if result.is_wall(cell) {
            Rgba(options.wall_color)
        } else {
            Rgba(options.path_color)
        }
    });

    if let Some(parent) = std::path::Path::new(output_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| MazeError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}
