use super::{Point2, Vector2, TOLERANCE};

/// Returns the vector from `p` to its perpendicular projection onto the
/// infinite line through `a` and `b`.
///
/// If `a` and `b` coincide the line is degenerate, and the vector from `p`
/// to `a` is returned instead.
#[must_use]
pub fn perpendicular_offset(a: &Point2, b: &Point2, p: &Point2) -> Vector2 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return a - p;
    }
    let t = (p - a).dot(&d) / len_sq;
    let foot = a + d * t;
    foot - p
}

/// Returns the distance from `p` to the infinite line through `a` and `b`.
#[must_use]
pub fn point_to_line_dist(a: &Point2, b: &Point2, p: &Point2) -> f64 {
    perpendicular_offset(a, b, p).norm()
}

/// Reflects `p` across the infinite line through `a` and `b`.
#[must_use]
pub fn reflect_across_line(a: &Point2, b: &Point2, p: &Point2) -> Point2 {
    p + perpendicular_offset(a, b, p) * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn offset_to_horizontal_line() {
        let v = perpendicular_offset(&Point2::new(0.0, 0.0), &Point2::new(10.0, 0.0), &Point2::new(3.0, 4.0));
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, -4.0, epsilon = 1e-12);
    }

    #[test]
    fn offset_to_diagonal_line() {
        let v = perpendicular_offset(&Point2::new(0.0, 0.0), &Point2::new(1.0, 1.0), &Point2::new(2.0, 0.0));
        assert_abs_diff_eq!(v.x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn point_beyond_segment_still_projects_onto_line() {
        let d = point_to_line_dist(&Point2::new(0.0, 0.0), &Point2::new(1.0, 0.0), &Point2::new(50.0, 0.005));
        assert!(d < 0.01);
    }

    #[test]
    fn degenerate_line_points_at_anchor() {
        let a = Point2::new(2.0, 2.0);
        let v = perpendicular_offset(&a, &a, &Point2::new(5.0, 6.0));
        assert_abs_diff_eq!(v.x, -3.0);
        assert_abs_diff_eq!(v.y, -4.0);
    }

    #[test]
    fn reflect_across_vertical_edge() {
        let r = reflect_across_line(&Point2::new(100.0, 0.0), &Point2::new(100.0, 100.0), &Point2::new(90.0, 30.0));
        assert_abs_diff_eq!(r.x, 110.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.y, 30.0, epsilon = 1e-12);
    }
}
