use super::Point2;

/// Rotates `p` about `center` by `radians`.
#[must_use]
pub fn rotate_about(p: &Point2, center: &Point2, radians: f64) -> Point2 {
    let (sin, cos) = radians.sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point2::new(dx * cos - dy * sin + center.x, dx * sin + dy * cos + center.y)
}

/// Reflects `p` across the vertical line `x = axis`.
#[must_use]
pub fn reflect_x(p: &Point2, axis: f64) -> Point2 {
    Point2::new(2.0 * axis - p.x, p.y)
}

/// Reflects `p` across the horizontal line `y = axis`.
#[must_use]
pub fn reflect_y(p: &Point2, axis: f64) -> Point2 {
    Point2::new(p.x, 2.0 * axis - p.y)
}
