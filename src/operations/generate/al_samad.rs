use crate::error::Result;
use crate::geometry::{lines_from_shapes, Line};
use crate::math::Point2;
use crate::pattern::{Label, Pattern, TilingMode};
use crate::template::{from_ranges, pointy_hexagon_edges, tile_size, Perturbation};

use super::ibn_tulun::HEX_SHIFT_X;

/// Hexagonal star from the 'Abd al-Samad complex in Natanz.
///
/// The angle pushes the six pairs of kite points outward along their
/// spokes. Large pushes bring some defining lines close to parallel.
pub(super) fn build(angle: f64) -> Result<Pattern> {
    let push = from_ranges(&[(-6.0, 10.0)], angle)?;
    let p = |x: f64, y: f64| Point2::new(x + HEX_SHIFT_X, y);

    let a = p(50.0, 0.0);
    let b = p(93.301, 25.0);
    let c = p(93.301, 75.0);
    let d = p(50.0, 100.0);
    let e = p(6.698, 74.999);
    let f = p(6.698, 24.999);

    let mut pairs = [
        (p(17.5238, 43.7497), p(28.349, 24.999), 30.0),
        (p(39.1743, 18.75), p(60.825, 18.75), 90.0),
        (p(71.65, 24.999), p(82.475, 43.749), 150.0),
        (p(71.65, 74.999), p(82.475, 56.249), 210.0),
        (p(39.174, 81.249), p(60.825, 81.25), 270.0),
        (p(28.349, 74.999), p(17.523, 56.249), 330.0),
    ];
    for (left, right, degrees) in &mut pairs {
        let shift = Perturbation::new(*degrees, push);
        *left = shift.apply(left);
        *right = shift.apply(right);
    }
    let [(w, x, _), (m, n, _), (o, pp, _), (r, q, _), (t, s, _), (u, v, _)] = pairs;

    let y1 = Line::new(w, n).intersect(&Line::new(m, pp))?;
    let y2 = Line::new(m, pp).intersect(&Line::new(o, r))?;
    let y3 = Line::new(t, q).intersect(&Line::new(o, r))?;
    let y4 = Line::new(v, s).intersect(&Line::new(t, q))?;
    let y5 = Line::new(u, x).intersect(&Line::new(v, s))?;
    let y6 = Line::new(w, n).intersect(&Line::new(x, u))?;

    let shapes = vec![
        vec![a, m, y1, n],
        vec![b, o, y2, pp],
        vec![c, q, y3, r],
        vec![d, s, y4, t],
        vec![e, u, y5, v],
        vec![f, w, y6, x],
        vec![y1, y2, y3, y4, y5, y6],
    ];
    let lines = lines_from_shapes(&shapes);

    let edges = pointy_hexagon_edges();
    Ok(Pattern::new(TilingMode::Hex2, tile_size(&edges), edges)
        .with_label(Label::new(
            "The 'Abd al-Samad Complex",
            "Natanz, Iran (AD 1304, AH 703)",
        ))
        .with_lines(lines)
        .with_shapes(shapes))
}
