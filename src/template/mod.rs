//! Tile templates: cyclic boundary edges, tiling modes and angle ranges.

pub mod generated;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};
use crate::geometry::Line;
use crate::math::{polar_offset, Point2, Vector2};

pub use generated::{hexagon, pointy_hexagon_edges, polygon_edges, square, square_tile_edges};

/// Named pattern templates accepted by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateName {
    #[serde(alias = "template-square")]
    Square,
    #[serde(alias = "template-hexagon")]
    Hexagon,
    Cordoba,
    CapellaPalatina,
    Kharraqan,
    IbnTulun,
    AlSamad,
}

impl TemplateName {
    pub const ALL: [TemplateName; 7] = [
        TemplateName::Square,
        TemplateName::Hexagon,
        TemplateName::Cordoba,
        TemplateName::CapellaPalatina,
        TemplateName::Kharraqan,
        TemplateName::IbnTulun,
        TemplateName::AlSamad,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateName::Square => "square",
            TemplateName::Hexagon => "hexagon",
            TemplateName::Cordoba => "cordoba",
            TemplateName::CapellaPalatina => "capella-palatina",
            TemplateName::Kharraqan => "kharraqan",
            TemplateName::IbnTulun => "ibn-tulun",
            TemplateName::AlSamad => "al-samad",
        }
    }

    /// Returns `true` for templates built by the polygons-in-contact walker.
    #[must_use]
    pub fn is_generated(self) -> bool {
        matches!(self, TemplateName::Square | TemplateName::Hexagon)
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateName {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.strip_prefix("template-").unwrap_or(s);
        TemplateName::ALL
            .into_iter()
            .find(|t| t.as_str() == name && (t.is_generated() || name == s))
            .ok_or_else(|| ConfigurationError::UnknownTemplate(s.to_owned()))
    }
}

/// Depth of the polygons-in-contact construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepthMode {
    /// One star point per edge pair.
    #[serde(rename = "+1")]
    PlusOne,
    /// Rays aimed two edges away, two junctions per edge.
    #[serde(rename = "+2")]
    PlusTwo,
}

impl fmt::Display for DepthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DepthMode::PlusOne => "+1",
            DepthMode::PlusTwo => "+2",
        })
    }
}

impl FromStr for DepthMode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "+1" => Ok(DepthMode::PlusOne),
            "+2" => Ok(DepthMode::PlusTwo),
            other => Err(ConfigurationError::UnsupportedDepthMode(other.to_owned())),
        }
    }
}

/// How copies of a tile are laid out across the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TilingMode {
    Square,
    /// Flat-top hexagons; odd columns are shifted down half a tile.
    Hex,
    /// Pointy-top hexagons; odd rows are shifted right half a tile.
    Hex2,
}

/// Valid degree ranges for each depth mode of a generated template.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleRanges {
    pub plus_one: Vec<(f64, f64)>,
    pub plus_two: Vec<(f64, f64)>,
}

impl AngleRanges {
    #[must_use]
    pub fn for_depth(&self, depth: DepthMode) -> &[(f64, f64)] {
        match depth {
            DepthMode::PlusOne => &self.plus_one,
            DepthMode::PlusTwo => &self.plus_two,
        }
    }

    /// Maps a normalized angle onto this template's degree ranges.
    ///
    /// # Errors
    ///
    /// See [`from_ranges`].
    pub fn resolve(&self, depth: DepthMode, angle: f64) -> Result<f64> {
        from_ranges(self.for_depth(depth), angle)
    }
}

/// One repeating construction unit for the generated path.
#[derive(Debug, Clone)]
pub struct TileTemplate {
    pub tiling_mode: TilingMode,
    /// Boundary edges in cyclic order. The order is load-bearing: interlace
    /// tables index lines generated from it.
    pub edges: Vec<Line>,
    pub angle_ranges: AngleRanges,
}

impl TileTemplate {
    #[must_use]
    pub fn tile_size(&self) -> Vector2 {
        tile_size(&self.edges)
    }
}

/// Maximum extent of a set of edges, measured from the origin.
///
/// A rect spanning `(1, 1)` to `(3, 3)` therefore has size `(3, 3)`.
#[must_use]
pub fn tile_size(edges: &[Line]) -> Vector2 {
    edges
        .iter()
        .flat_map(|e| [e.start, e.end])
        .fold(Vector2::zeros(), |acc, p| Vector2::new(acc.x.max(p.x), acc.y.max(p.y)))
}

/// Maps `value` in `[0, 1]` onto a union of degree ranges.
///
/// The ranges are consumed in order in proportion to their lengths, so
/// `0` maps to the start of the first range and `1` to the end of the last.
/// A range may run downwards (`lo > hi`).
///
/// # Errors
///
/// Returns `ConfigurationError::EmptyAngleRanges` if `ranges` is empty and
/// `ConfigurationError::ParameterOutOfRange` if `value` is outside `[0, 1]`.
pub fn from_ranges(ranges: &[(f64, f64)], value: f64) -> Result<f64> {
    let Some(&(_, last_hi)) = ranges.last() else {
        return Err(ConfigurationError::EmptyAngleRanges.into());
    };
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigurationError::ParameterOutOfRange {
            parameter: "angle",
            value,
            min: 0.0,
            max: 1.0,
        }
        .into());
    }

    let total: f64 = ranges.iter().map(|(lo, hi)| (hi - lo).abs()).sum();
    let mut remaining = value * total;
    for &(lo, hi) in ranges {
        let segment = (hi - lo).abs();
        if remaining <= segment {
            if segment == 0.0 {
                return Ok(lo);
            }
            return Ok(lo + remaining / segment * (hi - lo));
        }
        remaining -= segment;
    }
    Ok(last_hi)
}

/// Displacement of a literal construction point: `magnitude` units in the
/// direction `degrees`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturbation {
    pub degrees: f64,
    pub magnitude: f64,
}

impl Perturbation {
    #[must_use]
    pub fn new(degrees: f64, magnitude: f64) -> Self {
        Self { degrees, magnitude }
    }

    #[must_use]
    pub fn apply(&self, p: &Point2) -> Point2 {
        polar_offset(p, self.degrees, self.magnitude)
    }
}
