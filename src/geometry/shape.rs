//! Closed polygons and the helpers that close shapes spanning a tile seam.

use std::f64::consts::{PI, TAU};

use crate::math::transform_2d::{reflect_x, reflect_y, rotate_about};
use crate::math::{angle_between_points, Point2, POINT_TOLERANCE};

use super::Line;

/// A closed polygon. The edge from the last point back to the first is
/// implicit.
pub type Shape = Vec<Point2>;

/// Shorthand for building a shape from coordinate pairs.
#[must_use]
pub fn shape(points: &[[f64; 2]]) -> Shape {
    points.iter().map(|p| Point2::from(*p)).collect()
}

/// Edges of a closed shape, starting with the closing edge
/// `[last, first]`, then `[p0, p1]`, `[p1, p2]` and so on.
#[must_use]
pub fn edges_of_shape(shape: &[Point2]) -> Vec<Line> {
    let n = shape.len();
    (0..n)
        .map(|k| {
            let prev = if k == 0 { n - 1 } else { k - 1 };
            Line::new(shape[prev], shape[k])
        })
        .collect()
}

/// Edges of every shape in order, concatenated.
#[must_use]
pub fn lines_from_shapes(shapes: &[Shape]) -> Vec<Line> {
    shapes.iter().flat_map(|s| edges_of_shape(s)).collect()
}

/// Rotates every point about `center` by `degrees`.
#[must_use]
pub fn rotate_points(points: &[Point2], center: &Point2, degrees: f64) -> Vec<Point2> {
    let radians = degrees.to_radians();
    points.iter().map(|p| rotate_about(p, center, radians)).collect()
}

/// Closes a shape cut in half by a tile edge.
///
/// Returns `shape` followed, in reverse order, by the reflections across
/// `edge` of those points that do not lie on the edge's line.
#[must_use]
pub fn reflect_at_edge(shape: &[Point2], edge: &Line) -> Shape {
    let mirrored: Vec<Point2> = shape
        .iter()
        .filter(|p| edge.distance_to(p) >= POINT_TOLERANCE)
        .map(|p| edge.reflect(p))
        .collect();
    shape.iter().copied().chain(mirrored.into_iter().rev()).collect()
}

/// Closes a polyline cut into quarters by the two axis lines through
/// `corner`.
///
/// `shape` must run from a point on one axis line to a point on the other.
/// The quarter is reflected across the last point's line, then across both
/// lines, then across the first point's line; seam points shared between
/// neighboring quarters are kept once.
#[must_use]
pub fn mirror_at_corner(shape: &[Point2], corner: &Point2) -> Shape {
    let (Some(first), Some(last)) = (shape.first(), shape.last()) else {
        return Vec::new();
    };
    if shape.len() < 2 {
        return shape.to_vec();
    }

    let across = |p: &Point2, anchor: &Point2| {
        if (anchor.x - corner.x).abs() <= POINT_TOLERANCE {
            reflect_x(p, corner.x)
        } else {
            reflect_y(p, corner.y)
        }
    };
    let both = |p: &Point2| reflect_y(&reflect_x(p, corner.x), corner.y);

    let n = shape.len();
    let mut out: Shape = shape.to_vec();
    out.extend(shape.iter().rev().skip(1).map(|p| across(p, last)));
    out.extend(shape.iter().skip(1).map(both));
    out.extend(shape.iter().rev().skip(1).take(n - 2).map(|p| across(p, first)));
    out
}

/// Closes a polyline around a tile vertex where several tiles meet.
///
/// The first and last points must be equidistant from `vertex`. Rotated
/// copies of the polyline, stepping by the angle between its two ends, are
/// appended until the loop closes.
#[must_use]
pub fn rotate_about_vertex(shape: &[Point2], vertex: &Point2) -> Shape {
    let (Some(first), Some(last)) = (shape.first(), shape.last()) else {
        return Vec::new();
    };
    let mut delta = angle_between_points(vertex, last) - angle_between_points(vertex, first);
    while delta <= -PI {
        delta += TAU;
    }
    while delta > PI {
        delta -= TAU;
    }
    if delta.abs() < 1e-9 {
        return shape.to_vec();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let copies = (TAU / delta.abs()).round() as usize;
    let open = &shape[..shape.len() - 1];
    let mut out = Vec::with_capacity(open.len() * copies);
    for k in 0..copies {
        #[allow(clippy::cast_precision_loss)]
        let step = delta * k as f64;
        out.extend(open.iter().map(|p| rotate_about(p, vertex, step)));
    }
    out
}
