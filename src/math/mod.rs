pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod random;
pub mod transform_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point degeneracy checks.
pub const TOLERANCE: f64 = 1e-10;

/// Per-axis tolerance used to decide that two points are the same junction.
///
/// All junction finding depends on this value rather than exact equality.
pub const POINT_TOLERANCE: f64 = 0.01;

/// Returns `true` if both axis differences are at most [`POINT_TOLERANCE`].
#[must_use]
pub fn points_equal(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() <= POINT_TOLERANCE && (a.y - b.y).abs() <= POINT_TOLERANCE
}

/// Lexicographic ordering used to canonicalize lines: x first, then y.
#[must_use]
pub fn point_is_less(a: &Point2, b: &Point2) -> bool {
    a.x < b.x || (a.x == b.x && a.y < b.y)
}

/// Linear interpolation: `a * (1 - t) + b * t`.
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    Point2::new(a.x * (1.0 - t) + b.x * t, a.y * (1.0 - t) + b.y * t)
}

/// Angle in radians of the direction from `from` to `to`.
#[must_use]
pub fn angle_between_points(from: &Point2, to: &Point2) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Returns the point `magnitude` away from `anchor` in the direction `degrees`.
#[must_use]
pub fn polar_offset(anchor: &Point2, degrees: f64, magnitude: f64) -> Point2 {
    let rad = degrees.to_radians();
    Point2::new(anchor.x + rad.cos() * magnitude, anchor.y + rad.sin() * magnitude)
}
