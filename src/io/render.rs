//! Shared tile rendering settings and color parsing

use crate::io::configuration::{DEFAULT_TILE_SIZE, MAX_TILE_SIZE};
use crate::io::error::{Result, invalid_parameter};

/// RGBA color channels as four bytes
pub type Rgba = [u8; 4];

/// Tile size and colors shared by the PNG and SVG exporters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Edge length of one rendered grid cell in pixels
    pub tile_size: u32,
    /// Fill color for wall cells
    pub wall_color: Rgba,
    /// Fill color for path cells and the background
    pub path_color: Rgba,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            wall_color: [0, 0, 0, 255],
            path_color: [255, 255, 255, 255],
        }
    }
}

impl RenderOptions {
    /// Build render options from string-valued color parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the tile size is zero or exceeds the maximum, or
    /// if either color fails to parse
    pub fn new(tile_size: u32, wall_color: &str, path_color: &str) -> Result<Self> {
        if tile_size == 0 {
            return Err(invalid_parameter(
                "tile-size",
                &tile_size,
                &"must be at least 1",
            ));
        }
        if tile_size > MAX_TILE_SIZE {
            return Err(invalid_parameter(
                "tile-size",
                &tile_size,
                &format!("exceeds the maximum of {MAX_TILE_SIZE}"),
            ));
        }

        Ok(Self {
            tile_size,
            wall_color: parse_color("wall-color", wall_color)?,
            path_color: parse_color("path-color", path_color)?,
        })
    }
}

/// Parse a `#rrggbb` or `#rrggbbaa` hex string into RGBA channels
///
/// A six-digit color is fully opaque.
///
/// # Errors
///
/// Returns an error when the string is missing the leading `#`, has the
/// wrong length, or contains non-hex digits
pub fn parse_color(parameter: &'static str, value: &str) -> Result<Rgba> {
    let digits = value
        .strip_prefix('#')
        .ok_or_else(|| invalid_parameter(parameter, &value, &"expected a leading '#'"))?;

    if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
        return Err(invalid_parameter(
            parameter,
            &value,
            &"expected #rrggbb or #rrggbbaa",
        ));
    }

    let mut channels = [0, 0, 0, 255];
    for index in 0..digits.len() / 2 {
        let start = index * 2;
        if let (Some(slot), Some(pair)) = (channels.get_mut(index), digits.get(start..start + 2)) {
            *slot = u8::from_str_radix(pair, 16)
                .map_err(|source| invalid_parameter(parameter, &value, &source))?;
        }
    }

    Ok(channels)
}
