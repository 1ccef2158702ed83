use crate::error::Result;
use crate::geometry::{line, mirror_at_corner, reflect_at_edge, Line};
use crate::math::{Point2, Vector2};
use crate::pattern::fill::grid;
use crate::pattern::{FillPattern, Label, Pattern, TilingMode};
use crate::template::{square_tile_edges, Perturbation};

/// Where the corner lines leave the tile, measured from the nearest corner.
const CORNER_EXIT: f64 = 8.578_643_798_828_125;
const FAR_EXIT: f64 = 100.0 - CORNER_EXIT;

/// Eight-pointed star lattice of the Great Mosque of Cordoba.
///
/// The angle pushes the eight inner points of the central star in or out;
/// every crossing is then re-derived by intersection.
pub(super) fn build(angle: f64) -> Result<Pattern> {
    let p = Point2::new;
    let corner_a = p(100.0, FAR_EXIT);
    let corner_b = p(FAR_EXIT, 100.0);

    let a = p(0.0, 50.0);
    let c = p(50.0, 100.0);
    let e = p(100.0, 50.0);
    let g = p(50.0, 0.0);
    let i = p(14.644_660_949_707_031, 14.644_660_949_707_031);
    let j = p(14.644_660_949_707_031, 85.355_339_050_292_97);
    let k = p(85.355_339_050_292_97, 85.355_339_050_292_97);
    let l = p(85.355_339_050_292_97, 14.644_660_949_707_031);

    // Inner star points, clockwise from the top, each pushed along its own
    // 45 degree spoke.
    let mut inner = [
        p(50.0, 29.289_321_899_414_062),
        p(64.644_660_949_707_03, 35.355_339_050_292_97),
        p(70.710_678_100_585_94, 50.0),
        p(64.644_660_949_707_03, 64.644_660_949_707_03),
        p(50.0, 70.710_678_100_585_94),
        p(35.355_339_050_292_97, 64.644_660_949_707_03),
        p(29.289_321_899_414_062, 50.0),
        p(35.355_339_050_292_97, 35.355_339_050_292_97),
    ];
    let push = -14.0 + angle * 25.0;
    for (idx, point) in inner.iter_mut().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let degrees = 90.0 + 45.0 * idx as f64;
        *point = Perturbation::new(degrees, push).apply(point);
    }
    let [n, f, o, d, pp, b, m, h] = inner;

    let x = Line::new(l, n).intersect(&Line::new(g, f))?;
    let q = Line::new(l, o).intersect(&Line::new(e, f))?;
    let r = Line::new(k, o).intersect(&Line::new(e, d))?;
    let s = Line::new(k, pp).intersect(&Line::new(c, d))?;
    let t = Line::new(c, b).intersect(&Line::new(j, pp))?;
    let u = Line::new(j, m).intersect(&Line::new(a, b))?;
    let v = Line::new(a, h).intersect(&Line::new(i, m))?;
    let w = Line::new(i, n).intersect(&Line::new(g, h))?;

    let lines = vec![
        Line::new(b, u),
        Line::new(u, a),
        Line::new(t, c),
        Line::new(t, b),
        Line::new(x, g),
        Line::new(f, x),
        Line::new(w, g),
        Line::new(h, w),
        Line::new(s, c),
        Line::new(d, s),
        Line::new(r, e),
        Line::new(d, r),
        Line::new(q, e),
        Line::new(f, q),
        Line::new(v, a),
        Line::new(h, v),
        // top left corner
        Line::new(i, p(0.0, CORNER_EXIT)),
        Line::new(w, i),
        Line::new(n, w),
        Line::new(i, p(CORNER_EXIT, 0.0)),
        Line::new(v, i),
        Line::new(m, v),
        // top right corner
        Line::new(n, x),
        Line::new(l, p(100.0, CORNER_EXIT)),
        Line::new(x, l),
        Line::new(l, p(FAR_EXIT, 0.0)),
        Line::new(q, l),
        Line::new(o, q),
        // bottom left corner
        Line::new(pp, t),
        Line::new(j, p(0.0, FAR_EXIT)),
        Line::new(t, j),
        Line::new(j, p(CORNER_EXIT, 100.0)),
        Line::new(u, j),
        Line::new(m, u),
        // bottom right corner
        Line::new(k, corner_a),
        Line::new(s, k),
        Line::new(pp, s),
        Line::new(o, r),
        Line::new(k, corner_b),
        Line::new(r, k),
    ];

    let shapes = vec![
        vec![g, x, n, w],
        vec![x, l, q, f],
        vec![q, e, r, o],
        vec![r, k, s, d],
        vec![s, c, t, pp],
        vec![j, u, b, t],
        vec![v, i, w, h],
        vec![a, v, m, u],
        vec![n, x, f, q, o, r, d, s, pp, t, b, u, m, v, h, w],
    ];

    let right = line([100.0, 0.0], [100.0, 100.0]);
    let bottom = line([0.0, 100.0], [100.0, 100.0]);
    let external_shapes = vec![
        reflect_at_edge(&[p(100.0, CORNER_EXIT), l, q, e], &right),
        reflect_at_edge(&[e, r, k, corner_a], &right),
        mirror_at_corner(&[corner_a, k, corner_b], &p(100.0, 100.0)),
        reflect_at_edge(&[corner_b, k, s, c], &bottom),
        reflect_at_edge(&[c, t, j, p(CORNER_EXIT, 100.0)], &bottom),
    ];

    Ok(Pattern::new(TilingMode::Square, Vector2::new(100.0, 100.0), square_tile_edges())
        .with_label(Label::new("The Great Mosque of Cordoba", "Cordoba, Spain (AD 784 / AH 167)"))
        .with_lines(lines)
        .with_shapes(shapes)
        .with_external_shapes(external_shapes)
        .with_fill_patterns(fill_patterns()))
}

fn fill_patterns() -> Vec<FillPattern> {
    let star_ring: &[usize] = &[8, 1, 3, 5, 6, 11];
    vec![
        FillPattern::new(grid(&[&[star_ring, &[]], &[&[], star_ring]])),
        FillPattern::new(grid(&[&[star_ring, &[11]], &[&[11], star_ring]])),
        FillPattern::new(grid(&[
            &[&[0, 1, 2, 3, 4, 5, 6, 7, 9, 10, 11, 12, 13], &[2, 7, 8, 9, 10, 11]],
            &[&[0, 4, 8, 11, 12, 13], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 11]],
        ]))
        .with_shift(-0.5, -0.5),
        FillPattern::new(grid(&[
            &[&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13], &[2, 7, 9, 10, 11]],
            &[&[0, 4, 11, 12, 13], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 11]],
        ]))
        .with_shift(-0.5, -0.5),
        FillPattern::new(grid(&[&[&[9, 10, 12, 13]]])),
        FillPattern::new(grid(&[&[&[9, 10, 11, 12, 13]]])),
        FillPattern::new(grid(&[&[&[0, 2, 4, 7, 8, 11]], &[&[11, 6, 3, 1, 5], &[0, 2, 4, 7, 8, 11]]]))
            .with_shift(1.0, -0.5),
        FillPattern::new(grid(&[&[&[0, 2, 4, 7, 8]], &[&[], &[0, 2, 4, 7, 8]]])).with_shift(0.5, -0.5),
        FillPattern::new(grid(&[&[&[0, 1, 2, 3, 4, 5, 6, 7]], &[&[8], &[0, 1, 2, 3, 4, 5, 6, 7]]]))
            .with_shift(0.5, 0.5),
        FillPattern::new(grid(&[&[&[0, 1, 2, 3, 4, 5, 6, 7]]])),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_point(actual: &Point2, x: f64, y: f64) {
        assert_abs_diff_eq!(actual.x, x, epsilon = 1e-6);
        assert_abs_diff_eq!(actual.y, y, epsilon = 1e-6);
    }

    #[test]
    fn golden_topology_at_half_angle() {
        let pattern = build(0.5).unwrap();
        assert_eq!(pattern.lines.len(), 40);
        assert_eq!(pattern.shapes.len(), 9);
        assert_eq!(pattern.shapes[8].len(), 16);
        assert_eq!(pattern.external_shapes.len(), 5);
        assert!(pattern.interlace_rules.is_none());

        // n, f and h
        let center = &pattern.shapes[8];
        assert_point(&center[0], 50.0, 27.789_321_899_414_062);
        assert_point(&center[2], 65.705_321_121_486_85, 34.294_678_878_513_146);
        assert_point(&center[14], 34.294_678_878_513_146, 34.294_678_878_513_146);

        // x, q, r, s, t, u, v, w from the line list
        let lines = &pattern.lines;
        assert_point(&lines[4].start, 60.874_652_849_789_46, 23.746_265_645_508_235);
        assert_point(&lines[12].start, 76.253_734_354_491_77, 39.125_347_150_210_516);
        assert_point(&lines[10].start, 76.253_734_354_491_77, 60.874_652_849_789_456);
        assert_point(&lines[8].start, 60.874_652_849_789_48, 76.253_734_354_491_77);
        assert_point(&lines[2].start, 39.125_347_150_210_52, 76.253_734_354_491_77);
        assert_point(&lines[0].end, 23.746_265_645_508_23, 60.874_652_849_789_48);
        assert_point(&lines[14].start, 23.746_265_645_508_23, 39.125_347_150_210_516);
        assert_point(&lines[6].start, 39.125_347_150_210_516, 23.746_265_645_508_23);
    }

    #[test]
    fn corner_lines_leave_through_the_boundary() {
        let pattern = build(0.5).unwrap();
        assert_point(&pattern.lines[16].end, 0.0, CORNER_EXIT);
        assert_point(&pattern.lines[34].end, 100.0, FAR_EXIT);
    }

    #[test]
    fn fills_reference_existing_regions() {
        let pattern = build(0.2).unwrap();
        assert_eq!(pattern.region_count(), 14);
        assert_eq!(pattern.fill_patterns.len(), 10);
        for fill in &pattern.fill_patterns {
            assert!(fill.max_index().unwrap() < pattern.region_count());
        }
    }

    #[test]
    fn angle_moves_the_inner_star() {
        let narrow = build(0.0).unwrap();
        let wide = build(1.0).unwrap();
        // n sits at 29.29 - 14 and 29.29 + 11.
        assert_abs_diff_eq!(narrow.shapes[8][0].y, 15.289_321_899_414_062, epsilon = 1e-9);
        assert_abs_diff_eq!(wide.shapes[8][0].y, 40.289_321_899_414_06, epsilon = 1e-9);
    }
}
