//! Periodic placement of tiles across a viewport.

mod schedule;

pub use schedule::{Placements, TessellationSchedule};

use serde::Serialize;

use crate::math::Vector2;
use crate::template::TilingMode;

/// Amount trimmed from the staggered axis of a hexagon advance, in tile
/// units at scale 1.
pub const HEX_INSET: f64 = 25.0;

/// The area to cover and how many tiles should fit across it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Tiles that should fit along the shorter direction.
    pub desired_repeats: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64, desired_repeats: f64) -> Self {
        Self {
            width,
            height,
            desired_repeats,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            desired_repeats: 5.0,
        }
    }
}

/// Where one tile copy goes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    /// Translation of the tile's origin.
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    /// Grid position; starts at -1.
    pub col: i64,
    pub row: i64,
    /// Grid size, not counting the leading -1 column and row.
    pub cols: i64,
    pub rows: i64,
}

/// Distance between neighboring tile copies along each axis.
///
/// `tile_size` is the already scaled size. Hexagons overlap on their
/// staggered axis by `25 * scale`.
#[must_use]
pub fn tiling_advance(mode: TilingMode, scale: f64, tile_size: Vector2) -> Vector2 {
    match mode {
        TilingMode::Square => tile_size,
        TilingMode::Hex => Vector2::new(tile_size.x - HEX_INSET * scale, tile_size.y),
        TilingMode::Hex2 => Vector2::new(tile_size.x, tile_size.y - HEX_INSET * scale),
    }
}
