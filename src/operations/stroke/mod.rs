//! Centerline to ribbon expansion.

mod junction;
mod miter;
mod style;

use tracing::{debug, warn};

use crate::error::{HankinError, Result};
use crate::geometry::{Line, Ribbon};
use crate::pattern::Pattern;

pub use junction::find_junction_neighbors;
pub use miter::{miter_at, miter_point};
pub use style::StrokeWidth;

/// Expands one centerline into a mitered ribbon.
///
/// Neighbors across tile edges are synthesized by mirroring, so the ribbon
/// meets its continuation in the next tile without that tile existing.
#[derive(Debug)]
pub struct ExpandStroke<'a> {
    line: &'a Line,
    lines: &'a [Line],
    tile_edges: &'a [Line],
    width: StrokeWidth,
}

impl<'a> ExpandStroke<'a> {
    #[must_use]
    pub fn new(line: &'a Line, lines: &'a [Line], tile_edges: &'a [Line], width: StrokeWidth) -> Self {
        Self {
            line,
            lines,
            tile_edges,
            width,
        }
    }

    /// Returns the ribbon, or `None` if either end is a dead end.
    ///
    /// # Errors
    ///
    /// Returns a `GeometryError` if a miter at either end degenerates.
    pub fn execute(&self) -> Result<Option<Ribbon>> {
        let w = self.width.width();

        let at_end = find_junction_neighbors(self.line, self.lines, self.tile_edges);
        let Some((top_below, top_above)) = miter_at(self.line, &at_end, w)? else {
            return Ok(None);
        };

        let reversed = self.line.reversed();
        let at_start = find_junction_neighbors(&reversed, self.lines, self.tile_edges);
        let Some((bottom_below, bottom_above)) = miter_at(&reversed, &at_start, w)? else {
            return Ok(None);
        };

        Ok(Some(Ribbon::new([
            bottom_below,
            self.line.start,
            bottom_above,
            top_below,
            self.line.end,
            top_above,
        ])))
    }
}

/// Expands every line of a pattern, keeping ribbons index-aligned with
/// `lines`.
///
/// A line whose miter degenerates gets no ribbon and is logged; the rest of
/// the pattern is still expanded.
#[derive(Debug, Clone, Copy)]
pub struct ExpandPattern {
    width: StrokeWidth,
}

impl ExpandPattern {
    #[must_use]
    pub fn new(width: StrokeWidth) -> Self {
        Self { width }
    }

    /// Returns a copy of `pattern` with `expanded_lines` filled in.
    ///
    /// # Errors
    ///
    /// Only non-geometric failures propagate; geometric ones drop the
    /// affected ribbon.
    pub fn execute(&self, pattern: &Pattern) -> Result<Pattern> {
        let mut ribbons = Vec::with_capacity(pattern.lines.len());
        for (idx, line) in pattern.lines.iter().enumerate() {
            let ribbon = match ExpandStroke::new(line, &pattern.lines, &pattern.tile_edges, self.width).execute() {
                Ok(ribbon) => ribbon,
                Err(HankinError::Geometry(err)) => {
                    warn!(line = idx, error = %err, "dropping ribbon");
                    None
                }
                Err(err) => return Err(err),
            };
            ribbons.push(ribbon);
        }

        debug!(
            width = self.width.width(),
            ribbons = ribbons.iter().flatten().count(),
            missing = ribbons.iter().filter(|r| r.is_none()).count(),
            "expanded strokes"
        );
        Ok(pattern.clone().with_expanded_lines(ribbons))
    }
}
