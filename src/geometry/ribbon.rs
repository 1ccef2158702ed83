use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::math::{lerp, Point2};

/// Number of corners in a ribbon polygon.
pub const RIBBON_CORNERS: usize = 6;

/// Width-aware polygon replacing one centerline.
///
/// Corner layout: `[below_start, start, above_start, above_end, end, below_end]`.
/// Corners 1 and 4 are the raw centerline endpoints; 0/2 and 3/5 are the
/// miter points flanking them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ribbon(pub [Point2; RIBBON_CORNERS]);

impl Ribbon {
    #[must_use]
    pub fn new(corners: [Point2; RIBBON_CORNERS]) -> Self {
        Self(corners)
    }

    #[must_use]
    pub fn corners(&self) -> &[Point2; RIBBON_CORNERS] {
        &self.0
    }

    /// Returns a copy with both middle corners moved to the midpoint of their
    /// flanking miter points, so the ribbon no longer pokes past its band.
    #[must_use]
    pub fn flattened(&self) -> Self {
        let mut out = *self;
        out.0[1] = lerp(&self.0[0], &self.0[2], 0.5);
        out.0[4] = lerp(&self.0[3], &self.0[5], 0.5);
        out
    }
}

impl Index<usize> for Ribbon {
    type Output = Point2;

    fn index(&self, index: usize) -> &Point2 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Ribbon {
    fn index_mut(&mut self, index: usize) -> &mut Point2 {
        &mut self.0[index]
    }
}
