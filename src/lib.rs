//! Islamic star patterns by the polygons-in-contact method.
//!
//! A [`PatternConfig`] names a tile template and an angle. [`BuildPattern`]
//! turns it into a [`Pattern`] of centerlines and fillable regions, expands
//! the centerlines into mitered ribbons and optionally weaves them.
//! [`TessellationSchedule`] then places copies of the tile across a
//! viewport.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod pattern;
pub mod template;
pub mod tessellation;

pub use error::{HankinError, Result};
pub use operations::BuildPattern;
pub use pattern::{Pattern, PatternConfig};
pub use tessellation::{Placement, TessellationSchedule, Viewport};
