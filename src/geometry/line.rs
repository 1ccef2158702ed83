use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::distance_2d::{perpendicular_offset, point_to_line_dist, reflect_across_line};
use crate::math::intersect_2d::intersect_lines;
use crate::math::{angle_between_points, lerp, point_is_less, points_equal, Point2, Vector2};

/// A centerline segment between two points.
///
/// Equality through [`Line::same_as`] ignores direction and matches
/// endpoints within [`crate::math::POINT_TOLERANCE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point2,
    pub end: Point2,
}

impl Line {
    /// Creates a new line from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Creates a line of length `magnitude` from `anchor` pointing at `radians`.
    #[must_use]
    pub fn from_angle(anchor: Point2, radians: f64, magnitude: f64) -> Self {
        let end = Point2::new(
            anchor.x + radians.cos() * magnitude,
            anchor.y + radians.sin() * magnitude,
        );
        Self { start: anchor, end }
    }

    /// Returns the same line with endpoints ordered lexicographically.
    #[must_use]
    pub fn canonical(&self) -> Self {
        if point_is_less(&self.start, &self.end) {
            *self
        } else {
            self.reversed()
        }
    }

    /// Returns `true` if both lines connect the same two points, in either
    /// direction.
    #[must_use]
    pub fn same_as(&self, other: &Line) -> bool {
        (points_equal(&self.start, &other.start) && points_equal(&self.end, &other.end))
            || (points_equal(&self.start, &other.end) && points_equal(&self.end, &other.start))
    }

    /// Returns the line with start and end swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns `true` if either endpoint matches `p`.
    #[must_use]
    pub fn has_endpoint(&self, p: &Point2) -> bool {
        points_equal(&self.start, p) || points_equal(&self.end, p)
    }

    /// Returns the line oriented so that it starts at `p`.
    ///
    /// If `p` is not the start point the line is reversed, whether or not
    /// `p` is its end point.
    #[must_use]
    pub fn oriented_from(&self, p: &Point2) -> Self {
        if points_equal(&self.start, p) {
            *self
        } else {
            self.reversed()
        }
    }

    /// Angle in radians of the direction from start to end.
    #[must_use]
    pub fn angle(&self) -> f64 {
        angle_between_points(&self.start, &self.end)
    }

    /// Direction vector from start to end (not normalized).
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        self.interpolate(0.5)
    }

    /// Point at parameter `t` along the segment.
    #[must_use]
    pub fn interpolate(&self, t: f64) -> Point2 {
        lerp(&self.start, &self.end, t)
    }

    /// Intersection of the two infinite lines through `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParallelLines` if the lines are parallel and
    /// distinct, or `GeometryError::ZeroVector` if either has zero length.
    pub fn intersect(&self, other: &Line) -> Result<Point2> {
        intersect_lines(&self.start, &self.end, &other.start, &other.end)
    }

    /// Vector from `p` to its projection onto the infinite line.
    #[must_use]
    pub fn perpendicular_offset(&self, p: &Point2) -> Vector2 {
        perpendicular_offset(&self.start, &self.end, p)
    }

    /// Distance from `p` to the infinite line.
    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> f64 {
        point_to_line_dist(&self.start, &self.end, p)
    }

    /// Reflection of `p` across the infinite line.
    #[must_use]
    pub fn reflect(&self, p: &Point2) -> Point2 {
        reflect_across_line(&self.start, &self.end, p)
    }

    /// Translates both endpoints by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let v = Vector2::new(dx, dy);
        Self {
            start: self.start + v,
            end: self.end + v,
        }
    }
}

/// Shorthand for building a line from two coordinate pairs.
#[must_use]
pub fn line(start: [f64; 2], end: [f64; 2]) -> Line {
    Line::new(Point2::from(start), Point2::from(end))
}
