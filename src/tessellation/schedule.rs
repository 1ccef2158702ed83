use std::iter::FusedIterator;

use crate::error::{ConfigurationError, GeometryError, HankinError, Result};
use crate::math::Vector2;
use crate::pattern::{FillPattern, Pattern};
use crate::template::TilingMode;

use super::{tiling_advance, Placement, Viewport};

/// The grid of tile placements covering a viewport.
///
/// The schedule is a plain value; [`TessellationSchedule::iter`] can be
/// called any number of times and each call yields the same sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct TessellationSchedule {
    mode: TilingMode,
    scale: f64,
    tile: Vector2,
    advance: Vector2,
    cols: i64,
    rows: i64,
    /// Number of placements, leading -1 column and row included.
    len: i64,
    shift: Vector2,
    fill_shift: Vector2,
}

impl TessellationSchedule {
    /// Sizes the grid so that `desired_repeats` tiles fit along the tighter
    /// axis, then centers it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::ParameterOutOfRange` for a non-positive
    /// viewport or repeat count, or one so large the grid cannot be counted,
    /// and `GeometryError::Degenerate` if the
    /// pattern's tile has no area or its advance collapses.
    pub fn new(viewport: Viewport, pattern: &Pattern) -> Result<Self> {
        check_positive("width", viewport.width)?;
        check_positive("height", viewport.height)?;
        check_positive("desiredRepeats", viewport.desired_repeats)?;
        let size = pattern.tile_size;
        if !(size.x > 0.0 && size.y > 0.0) {
            return Err(GeometryError::Degenerate(format!("tile size {} x {}", size.x, size.y)).into());
        }

        let mode = pattern.tiling_mode;
        let scale = (viewport.width / viewport.desired_repeats / size.x)
            .min(viewport.height / viewport.desired_repeats / size.y);
        let tile = size * scale;
        let advance = tiling_advance(mode, scale, tile);
        if !(advance.x > 0.0 && advance.y > 0.0) {
            return Err(GeometryError::Degenerate(format!("tile advance {} x {}", advance.x, advance.y)).into());
        }

        let repeats = viewport.desired_repeats;
        let mut cols = grid_count(viewport.width / advance.x, repeats)?;
        let rows = grid_count(viewport.height / advance.y, repeats)?;
        if mode == TilingMode::Hex {
            cols += 1;
        }
        // One extra column and row for the leading -1 index.
        let len = (cols + 1)
            .checked_mul(rows + 1)
            .ok_or_else(|| too_many_repeats(repeats))?;

        #[allow(clippy::cast_precision_loss)]
        let mut shift = Vector2::new(
            (viewport.width - cols as f64 * advance.x) / 2.0,
            (viewport.height - rows as f64 * advance.y) / 2.0,
        );
        if mode == TilingMode::Hex {
            shift.x -= tile.x / 2.0;
        }

        Ok(Self {
            mode,
            scale,
            tile,
            advance,
            cols,
            rows,
            len,
            shift,
            fill_shift: Vector2::zeros(),
        })
    }

    /// Offsets every placement by a fill pattern's shift, in tile advances.
    #[must_use]
    pub fn with_fill_shift(mut self, fill: &FillPattern) -> Self {
        self.fill_shift = Vector2::new(fill.shift_x, fill.shift_y);
        self
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn advance(&self) -> Vector2 {
        self.advance
    }

    /// Centering translation applied to every placement.
    #[must_use]
    pub fn shift(&self) -> Vector2 {
        self.shift
    }

    #[must_use]
    pub fn cols(&self) -> i64 {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> i64 {
        self.rows
    }

    /// Placement of the tile at grid position `(col, row)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn placement(&self, col: i64, row: i64) -> Placement {
        let (c, r) = (col as f64, row as f64);
        let mut x = c * self.advance.x + self.fill_shift.x * self.advance.x;
        let mut y = r * self.advance.y + self.fill_shift.y * self.advance.y;

        // Truncating remainder: column -1 staggers by minus half a tile.
        match self.mode {
            TilingMode::Hex2 => x += (row % 2) as f64 * (self.tile.x / 2.0),
            TilingMode::Hex => y += (col % 2) as f64 * (self.tile.y / 2.0),
            TilingMode::Square => {}
        }

        Placement {
            x: x + self.shift.x,
            y: y + self.shift.y,
            scale: self.scale,
            col,
            row,
            cols: self.cols,
            rows: self.rows,
        }
    }

    /// All placements in drawing order.
    ///
    /// Hex tilings run column by column; the others run row by row. Both
    /// start one step before zero so that seam shapes of off-screen
    /// neighbors are drawn.
    #[must_use]
    pub fn iter(&self) -> Placements<'_> {
        Placements {
            schedule: self,
            next: 0,
        }
    }

    fn inner_len(&self) -> i64 {
        match self.mode {
            TilingMode::Hex => self.rows + 1,
            TilingMode::Square | TilingMode::Hex2 => self.cols + 1,
        }
    }
}

impl<'a> IntoIterator for &'a TessellationSchedule {
    type Item = Placement;
    type IntoIter = Placements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`TessellationSchedule`].
#[derive(Debug, Clone)]
pub struct Placements<'a> {
    schedule: &'a TessellationSchedule,
    next: i64,
}

impl Placements<'_> {
    fn total(&self) -> i64 {
        self.schedule.len
    }
}

impl Iterator for Placements<'_> {
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        if self.next >= self.total() {
            return None;
        }
        let inner_len = self.schedule.inner_len();
        let outer = self.next / inner_len - 1;
        let inner = self.next % inner_len - 1;
        self.next += 1;

        Some(match self.schedule.mode {
            TilingMode::Hex => self.schedule.placement(outer, inner),
            TilingMode::Square | TilingMode::Hex2 => self.schedule.placement(inner, outer),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.total() - self.next).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Placements<'_> {}

impl FusedIterator for Placements<'_> {}

/// Tiles needed to span `extent_in_advances`, plus one.
fn grid_count(extent_in_advances: f64, repeats: f64) -> Result<i64> {
    let count = extent_in_advances.ceil();
    // Leaves headroom for the hex column and the leading -1 index.
    #[allow(clippy::cast_precision_loss)]
    let limit = (i64::MAX / 4) as f64;
    if !(count.is_finite() && count < limit) {
        return Err(too_many_repeats(repeats));
    }
    #[allow(clippy::cast_possible_truncation)]
    let count = count as i64;
    Ok(count + 1)
}

fn too_many_repeats(repeats: f64) -> HankinError {
    ConfigurationError::ParameterOutOfRange {
        parameter: "desiredRepeats",
        value: repeats,
        min: f64::MIN_POSITIVE,
        max: f64::MAX,
    }
    .into()
}

fn check_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::ParameterOutOfRange {
            parameter,
            value,
            min: f64::MIN_POSITIVE,
            max: f64::MAX,
        }
        .into())
    }
}
