//! Literal interlace and fill tables for the generated templates.
//!
//! Line indices follow the walker's emission order; regenerate these
//! tables whenever that order changes.

use crate::pattern::fill::grid;
use crate::pattern::{FillPattern, InterlaceRule};
use crate::template::{DepthMode, TilingMode};

type R = InterlaceRule;

#[must_use]
pub fn generated_interlace_rules(mode: TilingMode, depth: DepthMode) -> Vec<InterlaceRule> {
    match (mode, depth) {
        (TilingMode::Square, DepthMode::PlusOne) => vec![R::new(0, 4, 0, 1, 0, 2), R::new(2, 6, 1, 0, 0, 2)],
        (TilingMode::Square, DepthMode::PlusTwo) => vec![
            R::new(15, 14, 0, 0, 5, 5).one_way(),
            R::new(15, 14, 0, 0, 3, 3).one_way(),
            R::new(3, 2, 0, 0, 3, 3).one_way(),
            R::new(3, 2, 0, 0, 5, 5).one_way(),
            R::new(7, 6, 0, 0, 3, 3).one_way(),
            R::new(7, 6, 0, 0, 5, 5).one_way(),
            R::new(11, 10, 0, 0, 3, 3).one_way(),
            R::new(11, 10, 0, 0, 5, 5).one_way(),
            R::new(0, 8, 0, 1, 0, 2),
            R::new(4, 12, 1, 0, 0, 2),
        ],
        (TilingMode::Hex, DepthMode::PlusOne) => vec![
            R::new(7, 1, 0, -1, 0, 2),
            // Lines 5/11 and 6/0 cross at the same four-way junction; only one
            // pair may carry a rule.
            R::new(5, 11, -1, 0, 0, 2).with_extra_y(1),
            R::new(3, 9, -1, 0, 0, 2).with_extra_y(-1),
        ],
        (TilingMode::Hex, DepthMode::PlusTwo) => {
            let mut rules: Vec<InterlaceRule> = [21, 17, 13, 9, 5, 1]
                .into_iter()
                .flat_map(|t| {
                    [
                        R::new(t, t - 1, 0, 0, 2, 3).one_way(),
                        R::new(t, t - 1, 0, 0, 0, 5).one_way(),
                    ]
                })
                .collect();
            rules.extend([
                R::new(10, 22, -1, 0, 0, 2).with_extra_y(1),
                R::new(6, 18, -1, 0, 0, 2).with_extra_y(-1),
                R::new(2, 14, 0, 1, 0, 2),
            ]);
            rules
        }
        (TilingMode::Hex2, _) => Vec::new(),
    }
}

#[must_use]
pub fn generated_fill_patterns(mode: TilingMode, depth: DepthMode) -> Vec<FillPattern> {
    match (mode, depth) {
        (TilingMode::Square, DepthMode::PlusOne) => vec![
            FillPattern::new(grid(&[&[&[1], &[0, 1], &[]], &[&[0, 1], &[1], &[0]], &[&[], &[0], &[1]]]))
                .with_shift(0.0, 0.5),
            FillPattern::new(grid(&[&[&[1], &[0]], &[&[0], &[1]]])),
            FillPattern::new(grid(&[&[&[0, 1], &[]], &[&[], &[0, 1]]])),
            FillPattern::new(grid(&[&[&[1], &[0], &[0, 1]], &[&[0], &[1], &[]], &[&[0, 1], &[], &[1]]]))
                .with_shift(-0.5, 0.0),
            FillPattern::new(grid(&[&[&[0, 1], &[0], &[0, 1]], &[&[0], &[], &[]], &[&[0, 1], &[], &[1]]]))
                .with_shift(-0.5, 0.0),
            FillPattern::new(grid(&[&[&[0, 1], &[1]], &[&[0], &[]]])),
        ],
        (TilingMode::Square, DepthMode::PlusTwo) => vec![
            FillPattern::new(grid(&[&[&[5], &[4, 5], &[]], &[&[4, 5], &[5], &[4]], &[&[], &[4], &[5]]]))
                .with_shift(0.0, -0.5),
            FillPattern::new(grid(&[&[&[4, 5], &[4]], &[&[4], &[4, 5]]])).with_shift(0.0, -0.5),
            FillPattern::new(grid(&[&[&[5], &[]], &[&[], &[5]]])).with_shift(-0.5, 0.5),
            FillPattern::new(grid(&[
                &[&[1, 2, 0, 3, 4], &[0, 1, 2, 3, 4, 5]],
                &[&[0, 1, 2, 3, 4, 5], &[0, 1, 2, 3, 4]],
            ]))
            .with_shift(0.0, 0.5),
            FillPattern::new(grid(&[&[&[1, 0, 2, 3, 4]]])),
            FillPattern::new(grid(&[&[&[1, 0, 2, 3]]])),
        ],
        (TilingMode::Hex, DepthMode::PlusOne) => vec![
            FillPattern::new(grid(&[
                &[&[1, 2], &[1, 0], &[2, 0], &[2, 0, 1]],
                &[&[1, 2], &[1], &[2, 0], &[2, 1]],
            ]))
            .with_shift(0.5, 0.0),
            FillPattern::new(grid(&[&[&[0, 1, 2], &[1, 2]]])).with_shift(-0.5, 0.0),
            FillPattern::new(grid(&[&[&[0]]])),
            FillPattern::new(grid(&[&[&[1, 2]]])),
        ],
        (TilingMode::Hex, DepthMode::PlusTwo) => vec![
            // Reads best with the cross fill.
            FillPattern::new(grid(&[&[&[6, 7], &[7, 8]], &[&[8], &[6, 7]], &[&[7, 8], &[8]]]))
                .with_shift(-0.5, -0.5),
            FillPattern::new(grid(&[&[&[6], &[7, 8]], &[&[], &[6]], &[&[7, 8], &[]]])),
            FillPattern::new(grid(&[&[&[6, 7], &[]], &[&[8], &[6, 7]], &[&[], &[8]]])),
            FillPattern::new(grid(&[&[&[6, 8], &[7]]])).with_shift(0.5, 0.0),
            FillPattern::new(grid(&[&[&[0, 1, 2, 3, 4, 5, 6]]])),
            FillPattern::new(grid(&[&[&[6]]])),
            FillPattern::new(grid(&[&[&[7, 8]]])).with_shift(-0.5, 0.0),
        ],
        (TilingMode::Hex2, _) => Vec::new(),
    }
}
