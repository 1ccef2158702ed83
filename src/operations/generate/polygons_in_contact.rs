use crate::error::{GeometryError, Result};
use crate::geometry::{mirror_at_corner, rotate_about_vertex, Line, Shape};
use crate::math::{points_equal, Point2};
use crate::pattern::Pattern;
use crate::template::{DepthMode, TileTemplate, TilingMode};

use super::tables::{generated_fill_patterns, generated_interlace_rules};

/// Outer corner of the square template, shared by four tiles.
const SQUARE_CORNER: [f64; 2] = [100.0, 100.0];

/// Hankin's polygons-in-contact construction over a tile template.
///
/// From the midpoint of every boundary edge two rays leave at `degrees`
/// off the edge direction. Each ray stops where it meets the mirrored ray
/// from a neighboring edge (`+1`) or from the edge two steps away (`+2`).
#[derive(Debug)]
pub struct PolygonsInContact<'a> {
    template: &'a TileTemplate,
    degrees: f64,
    depth: DepthMode,
}

impl<'a> PolygonsInContact<'a> {
    /// Creates the construction with an already resolved angle in degrees.
    #[must_use]
    pub fn new(template: &'a TileTemplate, degrees: f64, depth: DepthMode) -> Self {
        Self {
            template,
            degrees,
            depth,
        }
    }

    /// Walks the template edges and assembles the pattern.
    ///
    /// # Errors
    ///
    /// Returns a `GeometryError` if two rays that should meet are parallel
    /// or collinear at this angle, or a `TopologyError` if the default
    /// interlace table does not fit the generated lines.
    pub fn execute(&self) -> Result<Pattern> {
        let (lines, shapes, external_shapes) = match self.depth {
            DepthMode::PlusOne => self.walk_plus_one()?,
            DepthMode::PlusTwo => self.walk_plus_two()?,
        };

        let mode = self.template.tiling_mode;
        Pattern::new(mode, self.template.tile_size(), self.template.edges.clone())
            .with_lines(lines)
            .with_shapes(shapes)
            .with_external_shapes(external_shapes)
            .with_fill_patterns(generated_fill_patterns(mode, self.depth))
            .with_interlace_rules(generated_interlace_rules(mode, self.depth))
    }

    fn edge(&self, idx: isize) -> &Line {
        let n = self.template.edges.len() as isize;
        #[allow(clippy::cast_sign_loss)]
        let wrapped = idx.rem_euclid(n) as usize;
        &self.template.edges[wrapped]
    }

    /// Ray from the midpoint of edge `idx` to where it meets the opposing
    /// ray from edge `stop`. `dir` flips the sense of rotation.
    ///
    /// Collinear rays meet everywhere; that and any other meeting at the
    /// midpoint itself is rejected rather than emitted as a zero-length line.
    fn ray_to(&self, idx: isize, stop: isize, dir: f64) -> Result<Line> {
        let edge = self.edge(idx);
        let stopping = self.edge(stop);
        let from = edge.midpoint();

        let outgoing = Line::from_angle(from, edge.angle() - (self.degrees * dir).to_radians(), 1.0);
        let incoming = Line::from_angle(
            stopping.midpoint(),
            stopping.angle() + (self.degrees * dir).to_radians(),
            1.0,
        );
        let meet = outgoing.intersect(&incoming)?;
        if points_equal(&meet, &from) {
            return Err(GeometryError::Degenerate(format!(
                "rays from edges {idx} and {stop} meet at the edge midpoint at {} degrees",
                self.degrees
            ))
            .into());
        }
        Ok(Line::new(from, meet))
    }

    fn walk_plus_one(&self) -> Result<(Vec<Line>, Vec<Shape>, Vec<Shape>)> {
        let n = self.template.edges.len() as isize;
        let mut lines = Vec::with_capacity(2 * self.template.edges.len());
        let mut center: Shape = Vec::new();
        let mut external = Vec::new();

        for i in 0..n {
            let first = self.ray_to(i, i + 1, 1.0)?;
            let second = self.ray_to(i + 1, i, -1.0)?;
            lines.push(first);
            lines.push(second);
            center.splice(0..0, [second.start, first.end, first.start]);

            match self.template.tiling_mode {
                TilingMode::Hex if i == 0 || i == 5 => external.push(rotate_about_vertex(
                    &[first.start, first.end, second.start],
                    &self.edge(i).end,
                )),
                TilingMode::Square if i == 0 => external.push(mirror_at_corner(
                    &[second.start, first.end, first.start],
                    &Point2::from(SQUARE_CORNER),
                )),
                _ => {}
            }
        }

        Ok((lines, vec![center], external))
    }

    fn walk_plus_two(&self) -> Result<(Vec<Line>, Vec<Shape>, Vec<Shape>)> {
        let count = self.template.edges.len();
        let n = count as isize;
        let mut lines = Vec::with_capacity(4 * count);
        let mut center: Shape = Vec::new();
        let mut peripheral: Vec<Shape> = vec![Vec::new(); count];
        let mut external = Vec::new();

        for i in 0..n {
            // Walks counter-clockwise: each edge aims two edges ahead and
            // meets the ray coming back from the next edge.
            let current = self.ray_to(i, i + 2, 1.0)?;
            let next = self.ray_to(i + 1, i - 1, -1.0)?;
            let crossing = current.intersect(&next)?;

            lines.push(Line::new(current.start, crossing));
            lines.push(Line::new(crossing, current.end));
            lines.push(Line::new(next.start, crossing));
            lines.push(Line::new(crossing, next.end));

            center.extend([next.end, crossing]);

            #[allow(clippy::cast_sign_loss)]
            let (here, before) = (i as usize, (i - 1).rem_euclid(n) as usize);
            peripheral[here].extend([next.start, crossing, current.end]);
            peripheral[before].extend([crossing, current.start]);

            match self.template.tiling_mode {
                TilingMode::Square if i == 0 => external.push(mirror_at_corner(
                    &[next.start, crossing, current.start],
                    &Point2::from(SQUARE_CORNER),
                )),
                TilingMode::Hex if i == 0 || i == 5 => external.push(rotate_about_vertex(
                    &[current.start, crossing, next.start],
                    &self.edge(i).end,
                )),
                _ => {}
            }
        }

        let mut shapes: Vec<Shape> = peripheral.into_iter().filter(|s| !s.is_empty()).collect();
        shapes.push(center);
        Ok((lines, shapes, external))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::cast_precision_loss)]
mod tests {
    use super::*;
    use crate::error::HankinError;
    use crate::template::{hexagon, square};
    use approx::assert_abs_diff_eq;

    fn build(template: &TileTemplate, depth: DepthMode, angle: f64) -> Pattern {
        let degrees = template.angle_ranges.resolve(depth, angle).unwrap();
        PolygonsInContact::new(template, degrees, depth).execute().unwrap()
    }

    /// Every endpoint must meet another line or sit on the tile boundary.
    fn assert_no_dangling_endpoints(pattern: &Pattern) {
        for (idx, line) in pattern.lines.iter().enumerate() {
            for p in [line.start, line.end] {
                let joined = pattern
                    .lines
                    .iter()
                    .enumerate()
                    .any(|(other, l)| other != idx && l.has_endpoint(&p));
                let on_edge = pattern.tile_edges.iter().any(|e| e.distance_to(&p) < 0.01);
                assert!(joined || on_edge, "line {idx} dangles at {p:?}");
            }
        }
    }

    #[test]
    fn square_plus_one_counts() {
        let p = build(&square(), DepthMode::PlusOne, 0.5);
        assert_eq!(p.lines.len(), 8);
        assert_eq!(p.shapes.len(), 1);
        assert_eq!(p.shapes[0].len(), 12);
        assert_eq!(p.external_shapes.len(), 1);
        assert_eq!(p.external_shapes[0].len(), 8);
        assert_eq!(p.interlace_rules.as_ref().unwrap().rules().len(), 2);
    }

    #[test]
    fn square_plus_one_first_ray() {
        // 22.5 degrees off the bottom edge, meeting the ray from the right edge.
        let p = build(&square(), DepthMode::PlusOne, 0.5);
        let first = p.lines[0];
        assert_abs_diff_eq!(first.start.x, 50.0);
        assert_abs_diff_eq!(first.start.y, 100.0);
        let slope = (first.end.y - first.start.y) / (first.end.x - first.start.x);
        assert_abs_diff_eq!(slope, -(22.5_f64.to_radians().tan()), epsilon = 1e-9);
        assert!(points_equal(&first.end, &p.lines[1].end));
    }

    #[test]
    fn square_plus_two_counts() {
        let p = build(&square(), DepthMode::PlusTwo, 0.5);
        assert_eq!(p.lines.len(), 16);
        assert_eq!(p.shapes.len(), 5);
        assert!(p.shapes[..4].iter().all(|s| s.len() == 5));
        assert_eq!(p.shapes[4].len(), 8);
        assert_eq!(p.external_shapes.len(), 1);
    }

    #[test]
    fn hexagon_counts() {
        let p = build(&hexagon(), DepthMode::PlusOne, 0.3);
        assert_eq!(p.lines.len(), 12);
        assert_eq!(p.external_shapes.len(), 2);
        assert_eq!(p.external_shapes[0].len(), 6);

        let p = build(&hexagon(), DepthMode::PlusTwo, 0.2);
        assert_eq!(p.lines.len(), 24);
        assert_eq!(p.shapes.len(), 7);
        assert_eq!(p.external_shapes.len(), 2);
        assert_eq!(p.tiling_mode, TilingMode::Hex);
    }

    #[test]
    fn no_dangling_endpoints_across_angles() {
        for template in [square(), hexagon()] {
            for depth in [DepthMode::PlusOne, DepthMode::PlusTwo] {
                for k in 0..20 {
                    let angle = k as f64 / 19.0;
                    assert_no_dangling_endpoints(&build(&template, depth, angle));
                }
            }
        }
    }

    #[test]
    fn fill_patterns_reference_existing_regions() {
        for template in [square(), hexagon()] {
            for depth in [DepthMode::PlusOne, DepthMode::PlusTwo] {
                let p = build(&template, depth, 0.5);
                assert!(!p.fill_patterns.is_empty());
                for fill in &p.fill_patterns {
                    assert!(fill.max_index().unwrap() < p.region_count());
                }
            }
        }
    }

    #[test]
    fn collinear_plus_one_rays_fail() {
        // A quarter of the hexagon +1 range is -30 degrees, where neighboring
        // rays share a line.
        let template = hexagon();
        let degrees = template.angle_ranges.resolve(DepthMode::PlusOne, 0.25).unwrap();
        assert_abs_diff_eq!(degrees, -30.0);
        let result = PolygonsInContact::new(&template, degrees, DepthMode::PlusOne).execute();
        assert!(matches!(result, Err(HankinError::Geometry(GeometryError::Degenerate(_)))));
    }

    #[test]
    fn generated_lines_have_length() {
        for template in [square(), hexagon()] {
            for depth in [DepthMode::PlusOne, DepthMode::PlusTwo] {
                for angle in [0.0, 0.2, 0.5, 0.8, 1.0] {
                    let p = build(&template, depth, angle);
                    assert!(p.lines.iter().all(|l| !points_equal(&l.start, &l.end)), "{depth} {angle}");
                }
            }
        }
    }

    #[test]
    fn collinear_rays_fail() {
        // At -60 degrees each +2 hexagon ray lies on its partner's line.
        let result = PolygonsInContact::new(&hexagon(), -60.0, DepthMode::PlusTwo).execute();
        assert!(result.is_err());
    }
}
