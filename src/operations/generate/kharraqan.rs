use crate::error::Result;
use crate::geometry::Line;
use crate::math::random::ParkMiller;
use crate::math::{Point2, Vector2};
use crate::pattern::{InterlaceRule, Label, Pattern, TilingMode};
use crate::template::square_tile_edges;

type R = InterlaceRule;

const NEAR: f64 = 10.355_339_050_292_969;
const INNER: f64 = 39.644_660_949_707_03;

fn mirrored(v: f64) -> f64 {
    100.0 - v
}

/// Brick pattern from the east tower at Kharraqan.
///
/// Three draws from `rng` widen the central cross, stretch the side
/// triangles and slide the eight corner struts; the four corner junctions
/// are then re-derived by intersection.
pub(super) fn build(rng: &mut ParkMiller) -> Result<Pattern> {
    let pt = Point2::new;
    let center = pt(50.0, 50.0);

    let cross = rng.next_range(-6.0, 10.0);
    let o = pt(mirrored(INNER) + cross, 75.0);
    let p = pt(INNER - cross, 75.0);
    let m = pt(INNER - cross, 25.0);
    let n = pt(mirrored(INNER) + cross, 25.0);

    let side = rng.next_range(-10.0, 6.0);
    let nn = pt(75.0, INNER + side);
    let oo = pt(75.0, mirrored(INNER) - side);
    let pp = pt(25.0, mirrored(INNER) - side);
    let mm = pt(25.0, INNER + side);

    let a = pt(100.0, 50.0);
    let b = pt(50.0, 100.0);
    let c = pt(0.0, 50.0);
    let d = pt(50.0, 0.0);

    // Each strut pair moves as one line.
    let strut = rng.next_range(-10.0, 10.0);
    let shift = |q: Point2, dx: f64, dy: f64| pt(q.x + dx, q.y + dy);
    let (r, mm) = (shift(pt(25.0, NEAR), -strut, 0.0), shift(mm, -strut, 0.0));
    let (b2, m) = (shift(pt(NEAR, 25.0), 0.0, -strut), shift(m, 0.0, -strut));
    let (b4, p) = (shift(pt(NEAR, 75.0), 0.0, strut), shift(p, 0.0, strut));
    let (pp, u) = (shift(pp, -strut, 0.0), shift(pt(25.0, mirrored(NEAR)), -strut, 0.0));
    let (o, b3) = (shift(o, 0.0, strut), shift(pt(mirrored(NEAR), 75.0), 0.0, strut));
    let (t, oo) = (shift(pt(75.0, mirrored(NEAR)), strut, 0.0), shift(oo, strut, 0.0));
    let (n, b1) = (shift(n, 0.0, -strut), shift(pt(mirrored(NEAR), 25.0), 0.0, -strut));
    let (s, nn) = (shift(pt(75.0, NEAR), strut, 0.0), shift(nn, strut, 0.0));

    let e = Line::new(b2, m).intersect(&Line::new(r, mm))?;
    let h = Line::new(b4, p).intersect(&Line::new(pp, u))?;
    let g = Line::new(o, b3).intersect(&Line::new(t, oo))?;
    let f = Line::new(n, b1).intersect(&Line::new(s, nn))?;

    let lines = vec![
        Line::new(pt(0.0, 0.0), b2),
        Line::new(b2, e),
        Line::new(e, m),
        Line::new(center, m),
        Line::new(center, n),
        Line::new(f, n),
        Line::new(f, b1),
        Line::new(pt(100.0, 0.0), b1),
        Line::new(d, s),
        Line::new(f, s),
        Line::new(d, r),
        Line::new(r, e),
        Line::new(f, nn),
        Line::new(nn, a),
        Line::new(a, oo),
        Line::new(oo, g),
        Line::new(g, b3),
        Line::new(b3, pt(100.0, 100.0)),
        Line::new(g, o),
        Line::new(o, center),
        Line::new(p, center),
        Line::new(p, h),
        Line::new(h, b4),
        Line::new(b4, pt(0.0, 100.0)),
        Line::new(h, pp),
        Line::new(pp, c),
        Line::new(c, mm),
        Line::new(mm, e),
        Line::new(h, u),
        Line::new(u, b),
        Line::new(b, t),
        Line::new(t, g),
    ];

    let quarter = pt(25.0, 75.0);
    let shapes = vec![
        vec![r, d, s, f, n, center, m, e],
        vec![c, mm, e, m, center, p, quarter, pp],
        vec![b, u, quarter, p, center, o, g, t],
        vec![a, oo, g, o, center, n, f, nn],
    ];

    Pattern::new(TilingMode::Square, Vector2::new(100.0, 100.0), square_tile_edges())
        .with_label(Label::new(
            "The East Tower of Kharraqan",
            "Kharraqan, Iran (AD 1076 / AH 459)",
        ))
        .with_lines(lines)
        .with_shapes(shapes)
        .with_shape_sets(vec![vec![0, 2], vec![1, 3]])?
        .with_interlace_rules(vec![
            R::new(6, 5, 0, 0, 0, 2),
            R::new(27, 11, 0, 0, 5, 3).one_way(),
            R::new(27, 11, 0, 0, 3, 5).one_way(),
            R::new(8, 29, 0, -1, 2, 3).one_way(),
            R::new(29, 8, 0, 1, 5, 0).one_way(),
            R::new(17, 0, 1, 1, 5, 0).one_way(),
            R::new(17, 0, 1, 1, 3, 2).one_way(),
            R::new(21, 22, 0, 0, 5, 0).one_way(),
            R::new(21, 22, 0, 0, 3, 2).one_way(),
            R::new(3, 19, 0, 0, 0, 5).one_way(),
            R::new(3, 19, 0, 0, 2, 3).one_way(),
            R::new(13, 25, 1, 0, 3, 5).one_way(),
            R::new(25, 13, -1, 0, 3, 5).one_way(),
            R::new(31, 15, 0, 0, 3, 5).one_way(),
            R::new(31, 15, 0, 0, 5, 3).one_way(),
        ])
}
