use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::geometry::Line;
use crate::math::{angle_between_points, Point2, TOLERANCE};

/// Smallest `|sin θ|` accepted between two joined rays.
const MIN_SIN: f64 = 1e-9;

/// Point where the stroke edges of rays `shared → a` and `shared → b` meet.
///
/// Both edges sit `width` away from their centerline; the miter lies on the
/// bisector at `width / sin θ`, where `θ` is the counter-clockwise angle
/// from `a` to `b`. A reflex angle puts the miter on the far side.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateMiter` if the rays are nearly parallel
/// or opposite, and `GeometryError::ZeroVector` if either ray has no length.
pub fn miter_point(shared: &Point2, a: &Point2, b: &Point2, width: f64) -> Result<Point2> {
    let angle = (angle_between_points(shared, b) - angle_between_points(shared, a)).rem_euclid(TAU);
    let sin = angle.sin();
    if sin.abs() < MIN_SIN {
        return Err(GeometryError::DegenerateMiter { angle }.into());
    }

    let ua = (a - shared).try_normalize(TOLERANCE).ok_or(GeometryError::ZeroVector)?;
    let ub = (b - shared).try_normalize(TOLERANCE).ok_or(GeometryError::ZeroVector)?;
    Ok(shared + (ua + ub) * (width / sin))
}

/// Miter pair `(below, above)` at the end point of `line`.
///
/// `neighbors` must all start at that end point and include `line`
/// reversed, as returned by
/// [`find_junction_neighbors`](super::find_junction_neighbors). The two
/// flanking neighbors are the ones next to `line` in polar-angle order.
/// Returns `None` for a dead end.
///
/// # Errors
///
/// Propagates [`miter_point`] failures.
pub fn miter_at(line: &Line, neighbors: &[Line], width: f64) -> Result<Option<(Point2, Point2)>> {
    if neighbors.len() < 2 {
        return Ok(None);
    }
    let joint = line.end;
    let far = line.start;

    let mut sorted = neighbors.to_vec();
    sorted.sort_by(|a, b| a.angle().total_cmp(&b.angle()));
    let Some(idx) = sorted.iter().position(|l| l.same_as(&line.reversed())) else {
        return Ok(None);
    };
    let n = sorted.len();
    let after = sorted[(idx + 1) % n];
    let before = sorted[(idx + n - 1) % n];

    let below = miter_point(&joint, &far, &after.end, width)?;
    let above = miter_point(&joint, &before.end, &far, width)?;
    Ok(Some((below, above)))
}
