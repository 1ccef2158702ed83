//! Over/under weaving of expanded ribbons.

use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::Ribbon;
use crate::math::Vector2;
use crate::pattern::{InterlaceRule, Pattern, TilingMode};
use crate::tessellation::tiling_advance;

/// Relocates ribbon corners along a pattern's interlace rules, then
/// flattens every ribbon that no rule keeps on top.
///
/// Offsets in a rule are counted in tile advances, so a corner can be moved
/// onto the copy of a ribbon that lives in the next tile over.
#[derive(Debug, Clone, Copy)]
pub struct ApplyInterlacing {
    advance: Vector2,
    extra_y: f64,
}

impl ApplyInterlacing {
    #[must_use]
    pub fn new(advance: Vector2, extra_y: f64) -> Self {
        Self { advance, extra_y }
    }

    /// Advance at scale 1 for the pattern's tiling. Staggered hex columns
    /// also get a half-tile vertical nudge.
    #[must_use]
    pub fn for_pattern(pattern: &Pattern) -> Self {
        let advance = tiling_advance(pattern.tiling_mode, 1.0, pattern.tile_size);
        let extra_y = match pattern.tiling_mode {
            TilingMode::Hex => pattern.tile_size.y / 2.0,
            TilingMode::Square | TilingMode::Hex2 => 0.0,
        };
        Self::new(advance, extra_y)
    }

    /// Returns a copy of `pattern` with interlaced ribbons.
    ///
    /// Patterns without rules or without expanded lines come back unchanged.
    /// A rule naming a line that has no ribbon is skipped.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::LineCountMismatch` if the rule table was
    /// validated against a different number of lines.
    pub fn execute(&self, pattern: &Pattern) -> Result<Pattern> {
        let (Some(table), Some(ribbons)) = (&pattern.interlace_rules, &pattern.expanded_lines) else {
            return Ok(pattern.clone());
        };
        table.check_line_count(pattern.lines.len())?;
        table.check_line_count(ribbons.len())?;

        let mut ribbons = ribbons.clone();
        let mut applied = 0_usize;
        for (idx, rule) in table.rules().iter().enumerate() {
            if self.apply_rule(rule, &mut ribbons) {
                applied += 1;
            } else {
                warn!(rule = idx, target = rule.target, change = rule.change, "skipping interlace rule");
            }
        }

        let on_top = table.targets();
        for (idx, ribbon) in ribbons.iter_mut().enumerate() {
            if on_top.contains(&idx) {
                continue;
            }
            if let Some(r) = ribbon {
                *r = r.flattened();
            }
        }

        debug!(
            rules = table.rules().len(),
            applied,
            on_top = on_top.len(),
            "applied interlacing"
        );
        Ok(pattern.clone().with_expanded_lines(ribbons))
    }

    /// Returns false if either ribbon is missing.
    fn apply_rule(&self, rule: &InterlaceRule, ribbons: &mut [Option<Ribbon>]) -> bool {
        let (Some(target), Some(mut change)) = (ribbons[rule.target], ribbons[rule.change]) else {
            return false;
        };
        let shift = Vector2::new(
            self.advance.x * f64::from(rule.offset_x),
            self.advance.y * f64::from(rule.offset_y) - self.extra_y * f64::from(rule.extra_y),
        );

        change[rule.dest] = target[rule.source] - shift;
        ribbons[rule.change] = Some(change);

        if rule.mirror {
            // Re-read the target: it may be the change ribbon itself.
            let Some(mut target) = ribbons[rule.target] else {
                return false;
            };
            target[rule.dest] = change[rule.source] + shift;
            ribbons[rule.target] = Some(target);
        }
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{HankinError, TopologyError};
    use crate::geometry::line;
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;

    fn ribbon(offset: f64) -> Ribbon {
        Ribbon::new([
            Point2::new(offset, -1.0),
            Point2::new(offset - 2.0, 0.0),
            Point2::new(offset, 1.0),
            Point2::new(offset + 10.0, 1.0),
            Point2::new(offset + 12.0, 0.0),
            Point2::new(offset + 10.0, -1.5),
        ])
    }

    fn pattern(mode: TilingMode, ribbons: Vec<Option<Ribbon>>, rules: Vec<InterlaceRule>) -> Pattern {
        let lines = (0..ribbons.len())
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let y = i as f64;
                line([0.0, y], [10.0, y])
            })
            .collect();
        Pattern::new(mode, Vector2::new(100.0, 100.0), Vec::new())
            .with_lines(lines)
            .with_expanded_lines(ribbons)
            .with_interlace_rules(rules)
            .unwrap()
    }

    #[test]
    fn one_way_rule_touches_only_its_destination() {
        let before = pattern(
            TilingMode::Square,
            vec![Some(ribbon(0.0)), Some(ribbon(50.0))],
            vec![InterlaceRule::new(0, 1, 0, 1, 0, 2).one_way()],
        );
        let after = ApplyInterlacing::for_pattern(&before).execute(&before).unwrap();
        let old = before.expanded_lines.unwrap();
        let new = after.expanded_lines.unwrap();

        let (old_target, old_change) = (old[0].unwrap(), old[1].unwrap());
        let (target, change) = (new[0].unwrap(), new[1].unwrap());
        assert_eq!(target, old_target);
        assert_eq!(change[2], Point2::new(0.0, -101.0));
        // Line 1 is not a target, so only its middles move with the flattening.
        assert_eq!(change[0], old_change[0]);
        assert_eq!(change[3], old_change[3]);
        assert_eq!(change[5], old_change[5]);
    }

    #[test]
    fn mirrored_rule_updates_both_ribbons() {
        let before = pattern(
            TilingMode::Square,
            vec![Some(ribbon(0.0)), Some(ribbon(50.0))],
            vec![InterlaceRule::new(0, 1, 1, 0, 0, 2)],
        );
        let after = ApplyInterlacing::for_pattern(&before).execute(&before).unwrap();
        let new = after.expanded_lines.unwrap();
        let (target, change) = (new[0].unwrap(), new[1].unwrap());
        assert_eq!(change[2], Point2::new(-100.0, -1.0));
        // change[0] is untouched by the first write, then shifted back.
        assert_eq!(target[2], Point2::new(150.0, -1.0));
    }

    #[test]
    fn hex_extra_y_nudges_by_half_a_tile() {
        let before = pattern(
            TilingMode::Hex,
            vec![Some(ribbon(0.0)), Some(ribbon(50.0))],
            vec![InterlaceRule::new(0, 1, -1, 0, 0, 2).with_extra_y(1).one_way()],
        );
        let op = ApplyInterlacing::for_pattern(&before);
        let after = op.execute(&before).unwrap();
        let change = after.expanded_lines.unwrap()[1].unwrap();
        // advance x is 100 - 25
        assert_abs_diff_eq!(change[2].x, 75.0);
        assert_abs_diff_eq!(change[2].y, -1.0 + 50.0);
    }

    #[test]
    fn flattening_uses_exact_midpoints() {
        let before = pattern(
            TilingMode::Square,
            vec![Some(ribbon(0.0)), Some(ribbon(50.0)), Some(ribbon(-20.0))],
            vec![InterlaceRule::new(0, 1, 0, 0, 5, 5).one_way()],
        );
        let after = ApplyInterlacing::for_pattern(&before).execute(&before).unwrap();
        let new = after.expanded_lines.unwrap();
        assert_eq!(new[0].unwrap()[1], Point2::new(-2.0, 0.0));
        let flat = new[2].unwrap();
        assert_eq!(flat[1], Point2::new(-20.0, 0.0));
        assert_eq!(flat[4], Point2::new(-10.0, -0.25));
    }

    #[test]
    fn missing_ribbons_skip_the_rule() {
        let before = pattern(
            TilingMode::Square,
            vec![Some(ribbon(0.0)), None],
            vec![InterlaceRule::new(0, 1, 0, 1, 0, 2)],
        );
        let after = ApplyInterlacing::for_pattern(&before).execute(&before).unwrap();
        let new = after.expanded_lines.unwrap();
        assert_eq!(new[0], Some(ribbon(0.0)));
        assert!(new[1].is_none());
    }

    #[test]
    fn without_ribbons_nothing_happens() {
        let bare = Pattern::new(TilingMode::Square, Vector2::new(100.0, 100.0), Vec::new())
            .with_lines(vec![line([0.0, 0.0], [1.0, 0.0])])
            .with_interlace_rules(vec![InterlaceRule::new(0, 0, 0, 0, 0, 2)])
            .unwrap();
        let after = ApplyInterlacing::for_pattern(&bare).execute(&bare).unwrap();
        assert!(after.expanded_lines.is_none());
    }

    #[test]
    fn stale_table_is_rejected() {
        let mut stale = pattern(
            TilingMode::Square,
            vec![Some(ribbon(0.0)), Some(ribbon(1.0))],
            vec![InterlaceRule::new(0, 1, 0, 0, 0, 2)],
        );
        stale.lines.push(line([5.0, 5.0], [6.0, 6.0]));
        let result = ApplyInterlacing::for_pattern(&stale).execute(&stale);
        assert!(matches!(
            result,
            Err(HankinError::Topology(TopologyError::LineCountMismatch { expected: 2, actual: 3 }))
        ));
    }
}
