use crate::error::Result;
use crate::geometry::{edges_of_shape, reflect_at_edge, rotate_about_vertex, Line};
use crate::math::{lerp, Point2};
use crate::pattern::fill::grid;
use crate::pattern::{FillPattern, Label, Pattern, TilingMode};
use crate::template::{pointy_hexagon_edges, tile_size};

/// Horizontal offset that brings the hand-measured hexagon flush with the
/// origin.
pub(super) const HEX_SHIFT_X: f64 = -6.698_729_810_778_047_5;

/// Two points on `edge`, symmetric about its midpoint, that move apart as
/// the angle drops.
fn slide(edge: (Point2, Point2), angle: f64) -> (Point2, Point2) {
    let r = 0.2 + 0.2 * angle;
    (lerp(&edge.0, &edge.1, r), lerp(&edge.0, &edge.1, 1.0 - r))
}

/// Six-pointed rosette window from the Mosque of Ibn Tulun.
pub(super) fn build(angle: f64) -> Result<Pattern> {
    let p = |x: f64, y: f64| Point2::new(x + HEX_SHIFT_X, y);
    let a1 = p(6.6987, 25.0);
    let a2 = p(50.0, 0.0);
    let a3 = p(93.3012, 25.0);
    let a4 = p(93.301_270_189_221_93, 75.0);
    let a5 = p(50.0, 100.0);
    let a6 = p(6.6987, 75.0);

    let (r, q) = slide((a1, a6), angle);
    let (g, h) = slide((a1, a2), angle);
    let (i, j) = slide((a2, a3), angle);
    let (k, l) = slide((a3, a4), angle);
    let (m, n) = slide((a4, a5), angle);
    let (o, pp) = slide((a5, a6), angle);

    let t = Line::new(r, i).intersect(&Line::new(h, k))?;
    let u = Line::new(h, k).intersect(&Line::new(j, m))?;
    let v = Line::new(l, o).intersect(&Line::new(j, m))?;
    let w = Line::new(l, o).intersect(&Line::new(n, q))?;
    let x = Line::new(pp, g).intersect(&Line::new(n, q))?;
    let s = Line::new(pp, g).intersect(&Line::new(r, i))?;

    let hexagon = vec![t, u, v, w, x, s];
    let mut lines = edges_of_shape(&hexagon);
    lines.extend(
        [
            (h, t),
            (t, i),
            (j, u),
            (u, k),
            (l, v),
            (v, m),
            (n, w),
            (w, o),
            (pp, x),
            (x, q),
            (r, s),
            (s, g),
            (s, x),
            (w, x),
            (w, v),
            (v, u),
            (u, t),
            (t, s),
        ]
        .map(|(start, end)| Line::new(start, end)),
    );

    // Only the seams to the right and below are closed here; the tiles on
    // the other sides close theirs.
    let external_shapes = vec![
        reflect_at_edge(&[k, u, v, l], &Line::new(k, l)),
        rotate_about_vertex(&[l, v, m], &a4),
        reflect_at_edge(&[m, v, w, n], &Line::new(m, n)),
        rotate_about_vertex(&[n, w, o], &a5),
        reflect_at_edge(&[o, w, x, pp], &Line::new(o, pp)),
    ];

    let edges = pointy_hexagon_edges();
    Ok(Pattern::new(TilingMode::Hex2, tile_size(&edges), edges)
        .with_label(Label::new("Mosque of Ibn Tulun", "Cairo, Egypt (AD 879, AH 265)"))
        .with_lines(lines)
        .with_shapes(vec![hexagon])
        .with_external_shapes(external_shapes)
        .with_fill_patterns(fill_patterns()))
}

fn fill_patterns() -> Vec<FillPattern> {
    vec![
        FillPattern::new(grid(&[&[&[1, 2, 3, 4]]])),
        FillPattern::new(grid(&[&[&[1, 2, 4, 5]]])),
        FillPattern::new(grid(&[&[&[2, 3, 4, 5]]])).with_shift(0.0, -0.2),
        FillPattern::new(grid(&[&[&[1, 2, 4]]])).with_shift(0.0, -0.2),
        FillPattern::new(grid(&[&[&[0]]])).with_shift(0.0, -0.2),
        FillPattern::new(grid(&[&[&[1, 2, 3, 4, 5]]])).with_shift(0.0, -0.2),
        FillPattern::new(grid(&[&[&[2, 4, 0]]])).with_shift(0.0, -0.2),
        FillPattern::new(grid(&[&[&[2, 3, 4], &[1, 2, 4, 5]], &[&[1, 2, 3, 4, 5], &[1, 2, 4]]]))
            .with_shift(0.0, -0.7),
        FillPattern::new(grid(&[&[&[2, 3, 4], &[4, 5]], &[&[1, 2, 3, 4, 5], &[1, 2]]]))
            .with_shift(0.0, -0.7),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::points_equal;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rosette_topology() {
        let pattern = build(0.5).unwrap();
        assert_eq!(pattern.lines.len(), 24);
        assert_eq!(pattern.shapes.len(), 1);
        assert_eq!(pattern.external_shapes.len(), 5);
        assert_eq!(pattern.tiling_mode, TilingMode::Hex2);
        for fill in &pattern.fill_patterns {
            assert!(fill.max_index().unwrap() < pattern.region_count());
        }
    }

    #[test]
    fn tile_is_a_pointy_hexagon_at_the_origin() {
        let pattern = build(0.5).unwrap();
        assert_eq!(pattern.tile_edges.len(), 6);
        assert_abs_diff_eq!(pattern.tile_size.x, 86.602_540_378_443_86, epsilon = 1e-9);
        assert_abs_diff_eq!(pattern.tile_size.y, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn spokes_start_on_the_boundary() {
        let pattern = build(0.25).unwrap();
        let edges = &pattern.tile_edges;
        // Every other spoke after the inner hexagon starts at a slide point.
        for spoke in [6, 8, 10, 12, 14, 16] {
            let start = pattern.lines[spoke].start;
            let nearest = edges.iter().map(|e| e.distance_to(&start)).fold(f64::MAX, f64::min);
            assert!(nearest < 0.01, "line {spoke} starts {nearest} off the boundary");
        }
    }

    #[test]
    fn corner_rosettes_close_in_three_turns() {
        let pattern = build(0.5).unwrap();
        let corner = &pattern.external_shapes[1];
        assert_eq!(corner.len(), 6);
        assert!(!points_equal(&corner[0], &corner[2]));
    }
}
