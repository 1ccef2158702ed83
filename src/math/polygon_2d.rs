use std::f64::consts::TAU;

use super::Point2;

/// Axis-aligned bounds `(min, max)` of a point set, or `None` if it is empty.
#[must_use]
pub fn bounds(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

/// Vertices of a regular polygon with `sides` sides around `(cx, cy)`.
///
/// Starts at angle `start` and walks counter-clockwise in angle; the first
/// vertex is repeated at the end so consecutive pairs form the edges.
#[must_use]
pub fn regular_polygon(cx: f64, cy: f64, radius: f64, sides: usize, start: f64) -> Vec<Point2> {
    #[allow(clippy::cast_precision_loss)]
    let step = TAU / sides as f64;
    (0..=sides)
        .map(|k| {
            #[allow(clippy::cast_precision_loss)]
            let a = start + step * k as f64;
            Point2::new(cx + a.cos() * radius, cy + a.sin() * radius)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn bounds_of_points() {
        let (min, max) = bounds(&[Point2::new(3.0, -1.0), Point2::new(-2.0, 4.0)]).unwrap();
        assert_abs_diff_eq!(min.x, -2.0);
        assert_abs_diff_eq!(min.y, -1.0);
        assert_abs_diff_eq!(max.x, 3.0);
        assert_abs_diff_eq!(max.y, 4.0);
        assert!(bounds(&[]).is_none());
    }

    #[test]
    fn hexagon_is_closed() {
        let pts = regular_polygon(50.0, 50.0, 50.0, 6, 0.0);
        assert_eq!(pts.len(), 7);
        assert_abs_diff_eq!(pts[0].x, pts[6].x, epsilon = 1e-9);
        assert_abs_diff_eq!(pts[0].y, pts[6].y, epsilon = 1e-9);
        assert_abs_diff_eq!(pts[0].x, 100.0, epsilon = 1e-9);
    }
}
