//! SVG rendering of generated mazes

use crate::io::error::{MazeError, Result};
use crate::io::render::{RenderOptions, Rgba};
use crate::spatial::MazeResult;
use std::fmt::Write as _;

// Alpha is folded into an 8-digit hex code only when not fully opaque
fn hex_color(color: Rgba) -> String {
    let [r, g, b, a] = color;
    if a == 255 {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// Serialize a maze as an SVG document with one rectangle per wall cell
///
/// The root element carries the path color as its background; wall cells
/// become `tile_size`-sized `rect` elements at their pixel offsets.
pub fn maze_to_svg(result: &MazeResult, options: &RenderOptions) -> String {
    let tile_size = options.tile_size;
    let pixel_width = result.width() as u32 * tile_size;
    let pixel_height = result.height() as u32 * tile_size;
    let wall_fill = hex_color(options.wall_color);

    let mut document = String::new();
    let _ = writeln!(
        document,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{pixel_width}\" height=\"{pixel_height}\" style=\"background-color:{}\">",
        hex_color(options.path_color)
    );

    for ((row, col), &is_wall) in result.grid.indexed_iter() {
        if !is_wall {
            continue;
        }
        let x = col as u32 * tile_size;
        let y = row as u32 * tile_size;
        let _ = writeln!(
            document,
            "  <rect x=\"{x}\" y=\"{y}\" width=\"{tile_size}\" height=\"{tile_size}\" fill=\"{wall_fill}\"/>"
        );
    }

    document.push_str("</svg>\n");
    document
}

/// Write a maze to disk as an SVG document
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn export_maze_as_svg(
    result: &MazeResult,
    options: &RenderOptions,
    output_path: &str,
) -> Result<()> {
    let document = maze_to_svg(result, options);

    if let Some(parent) = std::path::Path::new(output_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(output_path, document).map_err(|e| MazeError::FileSystem {
        path: output_path.into(),
        operation: "write file",
        source: e,
    })?;

    Ok(())
}
