use std::f64::consts::FRAC_PI_2;

use crate::geometry::{line, Line};
use crate::math::polygon_2d::{bounds, regular_polygon};

use super::{AngleRanges, TileTemplate, TilingMode};

/// The 100×100 square walked by the generator.
///
/// Edge order and orientation feed the interlace tables: bottom, right,
/// top, left.
#[must_use]
pub fn square() -> TileTemplate {
    TileTemplate {
        tiling_mode: TilingMode::Square,
        edges: vec![
            line([0.0, 100.0], [100.0, 100.0]),
            line([100.0, 0.0], [100.0, 100.0]),
            line([0.0, 0.0], [100.0, 0.0]),
            line([0.0, 0.0], [0.0, 100.0]),
        ],
        angle_ranges: AngleRanges {
            plus_one: vec![(10.0, 35.0)],
            plus_two: vec![(60.0, 70.0)],
        },
    }
}

/// Flat-top hexagon of radius 50, moved so its bounds start at the origin.
#[must_use]
pub fn hexagon() -> TileTemplate {
    TileTemplate {
        tiling_mode: TilingMode::Hex,
        edges: polygon_edges(50.0, 50.0, 50.0, 6, 0.0),
        angle_ranges: AngleRanges {
            plus_one: vec![(-15.0, -75.0)],
            // -60 itself yields parallel rays.
            plus_two: vec![(-50.0, -59.0), (-61.0, -82.0)],
        },
    }
}

/// Boundary of the hand-authored square patterns.
#[must_use]
pub fn square_tile_edges() -> Vec<Line> {
    vec![
        line([0.0, 0.0], [0.0, 100.0]),
        line([100.0, 100.0], [0.0, 100.0]),
        line([100.0, 0.0], [100.0, 100.0]),
        line([100.0, 0.0], [0.0, 0.0]),
    ]
}

/// Boundary of the hand-authored pointy-top hexagon patterns.
#[must_use]
pub fn pointy_hexagon_edges() -> Vec<Line> {
    polygon_edges(50.0, 50.0, 50.0, 6, FRAC_PI_2)
}

/// Edges of a regular polygon, translated so the minimum x and y of its
/// vertices are zero.
#[must_use]
pub fn polygon_edges(cx: f64, cy: f64, radius: f64, sides: usize, start: f64) -> Vec<Line> {
    let points = regular_polygon(cx, cy, radius, sides, start);
    let Some((min, _)) = bounds(&points) else {
        return Vec::new();
    };
    points
        .windows(2)
        .map(|w| Line::new(w[0], w[1]).translated(-min.x, -min.y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::points_equal;
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;

    #[test]
    fn square_template_shape() {
        let t = square();
        assert_eq!(t.edges.len(), 4);
        let size = t.tile_size();
        assert_abs_diff_eq!(size.x, 100.0);
        assert_abs_diff_eq!(size.y, 100.0);
    }

    #[test]
    fn hexagon_edges_are_cyclic() {
        let t = hexagon();
        assert_eq!(t.edges.len(), 6);
        for k in 0..6 {
            let next = &t.edges[(k + 1) % 6];
            assert!(points_equal(&t.edges[k].end, &next.start));
            assert_abs_diff_eq!(t.edges[k].length(), 50.0, epsilon = 1e-9);
        }
        assert!(points_equal(&t.edges[0].start, &Point2::new(100.0, 43.30127)));
        let size = t.tile_size();
        assert_abs_diff_eq!(size.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(size.y, 86.602_540_378, epsilon = 1e-6);
    }

    #[test]
    fn pointy_hexagon_size() {
        let size = super::super::tile_size(&pointy_hexagon_edges());
        assert_abs_diff_eq!(size.x, 86.602_540_378, epsilon = 1e-6);
        assert_abs_diff_eq!(size.y, 100.0, epsilon = 1e-9);
    }
}
