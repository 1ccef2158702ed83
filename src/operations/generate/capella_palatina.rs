use crate::error::Result;
use crate::geometry::{lines_from_shapes, rotate_points};
use crate::math::{Point2, Vector2};
use crate::pattern::fill::grid;
use crate::pattern::{FillPattern, InterlaceRule, Label, Pattern, TilingMode};
use crate::template::square_tile_edges;

const INSET: f64 = 14.644_66;
const OUTSET: f64 = 85.355_339;

/// The sixteen-sided star of the Cappella Palatina ceiling.
///
/// The angle slides the star's shoulders along the inset square from 20 to
/// 45 units; the historical proportion sits near 35.36.
pub(super) fn build(angle: f64) -> Result<Pattern> {
    let near = 20.0 + angle * 25.0;
    let far = 100.0 - near;
    let p = Point2::new;

    let i = p(100.0, 50.0);
    let j = p(OUTSET, far);
    let k = p(OUTSET, OUTSET);
    let l = p(far, OUTSET);
    let m = p(50.0, 100.0);

    let star = vec![
        p(50.0, 0.0),
        p(far, INSET),
        p(OUTSET, INSET),
        p(OUTSET, near),
        i,
        j,
        k,
        l,
        m,
        p(near, OUTSET),
        p(INSET, 85.3553),
        p(INSET, far),
        p(0.0, 50.0),
        p(INSET, near),
        p(INSET, INSET),
        p(near, INSET),
    ];
    let shapes = vec![star];
    let lines = lines_from_shapes(&shapes);

    // The corner star closes around (100, 100) from four rotated quarters.
    let corner = p(100.0, 100.0);
    let quarter = [j, k, l, m];
    let mut around_corner = vec![i, j, k, l, m];
    for degrees in [-90.0, -180.0, -270.0] {
        around_corner.extend(rotate_points(&quarter, &corner, degrees));
    }

    Pattern::new(TilingMode::Square, Vector2::new(100.0, 100.0), square_tile_edges())
        .with_label(Label::new(
            "Capella Palatina",
            "Palermo, Sicily, Italy (AD 1132, AH 526)",
        ))
        .with_lines(lines)
        .with_shapes(shapes)
        .with_external_shapes(vec![around_corner])
        .with_fill_patterns(vec![
            FillPattern::new(grid(&[&[&[0, 1], &[0]], &[&[0], &[0, 1]]])).with_shift(0.5, 0.5),
            FillPattern::new(grid(&[&[&[1], &[0]], &[&[0], &[1]]])).with_shift(-0.5, 0.0),
            FillPattern::new(grid(&[&[&[0, 1], &[]], &[&[], &[0, 1]]])).with_shift(0.0, 0.5),
            FillPattern::new(grid(&[&[&[1], &[0, 1], &[]], &[&[0, 1], &[1], &[0]], &[&[], &[0], &[1]]]))
                .with_shift(0.0, 0.5),
        ])
        .with_interlace_rules(vec![InterlaceRule::new(0, 8, 0, -1, 3, 5), InterlaceRule::new(4, 12, 1, 0, 3, 5)])
}
