//! The pattern data model shared by every stage of the pipeline.

pub mod config;
pub mod fill;
pub mod interlace_rule;

use serde::Serialize;

use crate::error::{HankinError, Result, TopologyError};
use crate::geometry::{Line, Ribbon, Shape};
use crate::math::Vector2;

pub use crate::template::TilingMode;
pub use config::PatternConfig;
pub use fill::FillPattern;
pub use interlace_rule::{InterlaceRule, InterlaceRuleTable};

/// Where a historical pattern comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub title: String,
    pub location: String,
}

impl Label {
    #[must_use]
    pub fn new(title: &str, location: &str) -> Self {
        Self {
            title: title.to_owned(),
            location: location.to_owned(),
        }
    }
}

/// A generated pattern for one tile.
///
/// Stages after generation return a new value with more fields filled in;
/// nothing edits a pattern in place.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    pub tiling_mode: TilingMode,
    pub tile_size: Vector2,
    pub tile_edges: Vec<Line>,
    /// Centerline network. Order is load-bearing for `interlace_rules`.
    pub lines: Vec<Line>,
    /// One entry per line once stroke expansion has run; `None` marks a
    /// line with nothing to draw.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded_lines: Option<Vec<Option<Ribbon>>>,
    pub shapes: Vec<Shape>,
    /// Regions whose boundary closes only across a tile seam.
    pub external_shapes: Vec<Shape>,
    /// Disjoint subsets of `shapes ++ external_shapes` that can be drawn
    /// alternately.
    pub shape_sets: Vec<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interlace_rules: Option<InterlaceRuleTable>,
    pub fill_patterns: Vec<FillPattern>,
}

impl Pattern {
    #[must_use]
    pub fn new(tiling_mode: TilingMode, tile_size: Vector2, tile_edges: Vec<Line>) -> Self {
        Self {
            label: None,
            tiling_mode,
            tile_size,
            tile_edges,
            lines: Vec::new(),
            expanded_lines: None,
            shapes: Vec::new(),
            external_shapes: Vec::new(),
            shape_sets: Vec::new(),
            interlace_rules: None,
            fill_patterns: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    #[must_use]
    pub fn with_lines(mut self, lines: Vec<Line>) -> Self {
        self.lines = lines;
        self
    }

    #[must_use]
    pub fn with_shapes(mut self, shapes: Vec<Shape>) -> Self {
        self.shapes = shapes;
        self
    }

    #[must_use]
    pub fn with_external_shapes(mut self, external_shapes: Vec<Shape>) -> Self {
        self.external_shapes = external_shapes;
        self
    }

    #[must_use]
    pub fn with_fill_patterns(mut self, fill_patterns: Vec<FillPattern>) -> Self {
        self.fill_patterns = fill_patterns;
        self
    }

    #[must_use]
    pub fn with_expanded_lines(mut self, expanded_lines: Vec<Option<Ribbon>>) -> Self {
        self.expanded_lines = Some(expanded_lines);
        self
    }

    /// Attaches a rule table after validating it against this pattern's lines.
    ///
    /// Call after [`Pattern::with_lines`].
    ///
    /// # Errors
    ///
    /// Returns a `TopologyError` if any rule index is out of range.
    pub fn with_interlace_rules(mut self, rules: Vec<InterlaceRule>) -> Result<Self> {
        self.interlace_rules = Some(InterlaceRuleTable::new(rules, self.lines.len())?);
        Ok(self)
    }

    /// Attaches shape sets after validating them against the fillable regions.
    ///
    /// Call after the shapes and external shapes are set.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::ShapeSetIndexOutOfRange` if a set names a
    /// region that does not exist.
    pub fn with_shape_sets(mut self, shape_sets: Vec<Vec<usize>>) -> Result<Self> {
        let len = self.region_count();
        for (set, indices) in shape_sets.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|i| **i >= len) {
                return Err(TopologyError::ShapeSetIndexOutOfRange { set, index, len }.into());
            }
        }
        self.shape_sets = shape_sets;
        Ok(self)
    }

    /// Number of fillable regions, internal plus external.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.shapes.len() + self.external_shapes.len()
    }

    /// Fillable region by index into `shapes ++ external_shapes`.
    #[must_use]
    pub fn region(&self, index: usize) -> Option<&Shape> {
        self.shapes
            .get(index)
            .or_else(|| self.external_shapes.get(index.checked_sub(self.shapes.len())?))
    }

    /// Regions to draw for a normalized shape-set pick in `[0, 1]`.
    ///
    /// Without shape sets every region is returned. Otherwise the set at
    /// `min(len - 1, floor(shape_set * len))` is used.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::ShapeSetIndexOutOfRange` if the chosen set
    /// names a missing region.
    pub fn select_shapes(&self, shape_set: f64) -> Result<Vec<&Shape>> {
        if self.shape_sets.is_empty() {
            return Ok(self.shapes.iter().chain(&self.external_shapes).collect());
        }
        let len = self.shape_sets.len();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let set = ((shape_set.clamp(0.0, 1.0) * len as f64).floor() as usize).min(len - 1);
        self.shape_sets[set]
            .iter()
            .map(|&index| {
                self.region(index).ok_or_else(|| {
                    HankinError::from(TopologyError::ShapeSetIndexOutOfRange {
                        set,
                        index,
                        len: self.region_count(),
                    })
                })
            })
            .collect()
    }
}
