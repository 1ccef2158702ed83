use super::{Point2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Intersection of two infinite lines, each given by two points on it.
///
/// Vertical lines (undefined slope) are resolved by substitution into the
/// other line's equation. Two lines with different finite slopes are solved
/// in closed form. Collinear lines return `a0`.
///
/// # Errors
///
/// Returns `GeometryError::ParallelLines` for distinct parallel lines, and
/// `GeometryError::ZeroVector` if either line has coincident points.
pub fn intersect_lines(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> Result<Point2> {
    let da = a1 - a0;
    let db = b1 - b0;
    if da.norm() < TOLERANCE || db.norm() < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }

    let a_vertical = da.x.abs() < TOLERANCE;
    let b_vertical = db.x.abs() < TOLERANCE;

    match (a_vertical, b_vertical) {
        (true, true) => {
            if (a0.x - b0.x).abs() < TOLERANCE {
                Ok(*a0)
            } else {
                Err(GeometryError::ParallelLines.into())
            }
        }
        (true, false) => Ok(Point2::new(a0.x, b0.y + db.y / db.x * (a0.x - b0.x))),
        (false, true) => Ok(Point2::new(b0.x, a0.y + da.y / da.x * (b0.x - a0.x))),
        (false, false) => {
            let cross = da.x * db.y - da.y * db.x;
            if cross.abs() < TOLERANCE * da.norm() * db.norm() {
                // Same slope: either the same line or disjoint parallels.
                let offset = (b0.x - a0.x) * da.y - (b0.y - a0.y) * da.x;
                return if offset.abs() < TOLERANCE * da.norm() {
                    Ok(*a0)
                } else {
                    Err(GeometryError::ParallelLines.into())
                };
            }
            let det_a = a0.x * a1.y - a0.y * a1.x;
            let det_b = b0.x * b1.y - b0.y * b1.x;
            let denom = (a0.x - a1.x) * (b0.y - b1.y) - (a0.y - a1.y) * (b0.x - b1.x);
            let px = (det_a * (b0.x - b1.x) - (a0.x - a1.x) * det_b) / denom;
            let py = (det_a * (b0.y - b1.y) - (a0.y - a1.y) * det_b) / denom;
            Ok(Point2::new(px, py))
        }
    }
}
