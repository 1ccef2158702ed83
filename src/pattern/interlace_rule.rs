use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{Result, TopologyError};
use crate::geometry::RIBBON_CORNERS;

/// One over/under relocation between two ribbons.
///
/// Indices refer to positions in a pattern's `lines`, so a table is only
/// valid for the generation order it was written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterlaceRule {
    /// Ribbon read from; also the ribbon left unflattened.
    pub target: usize,
    /// Ribbon whose corner is overwritten.
    pub change: usize,
    /// Horizontal offset in tile advances.
    pub offset_x: i32,
    /// Vertical offset in tile advances.
    pub offset_y: i32,
    /// Corner read from the target ribbon.
    pub source: usize,
    /// Corner written on the change ribbon.
    pub dest: usize,
    /// Multiplier for the half-tile nudge used by staggered hex columns.
    pub extra_y: i32,
    /// Also copy back from the change ribbon to the target ribbon.
    pub mirror: bool,
}

impl InterlaceRule {
    #[must_use]
    pub const fn new(
        target: usize,
        change: usize,
        offset_x: i32,
        offset_y: i32,
        source: usize,
        dest: usize,
    ) -> Self {
        Self {
            target,
            change,
            offset_x,
            offset_y,
            source,
            dest,
            extra_y: 0,
            mirror: true,
        }
    }

    #[must_use]
    pub const fn with_extra_y(mut self, extra_y: i32) -> Self {
        self.extra_y = extra_y;
        self
    }

    /// Disables the symmetric update.
    #[must_use]
    pub const fn one_way(mut self) -> Self {
        self.mirror = false;
        self
    }
}

/// A rule table checked against the line count it will be applied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterlaceRuleTable {
    rules: Vec<InterlaceRule>,
    line_count: usize,
}

impl InterlaceRuleTable {
    /// Validates every rule index against `line_count` lines.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::RuleIndexOutOfRange` if a rule names a line
    /// that does not exist, or `TopologyError::CornerOutOfRange` if it names
    /// a ribbon corner past the sixth.
    pub fn new(rules: Vec<InterlaceRule>, line_count: usize) -> Result<Self> {
        for (idx, rule) in rules.iter().enumerate() {
            for index in [rule.target, rule.change] {
                if index >= line_count {
                    return Err(TopologyError::RuleIndexOutOfRange {
                        rule: idx,
                        index,
                        len: line_count,
                    }
                    .into());
                }
            }
            for corner in [rule.source, rule.dest] {
                if corner >= RIBBON_CORNERS {
                    return Err(TopologyError::CornerOutOfRange { rule: idx, corner }.into());
                }
            }
        }
        Ok(Self { rules, line_count })
    }

    #[must_use]
    pub fn rules(&self) -> &[InterlaceRule] {
        &self.rules
    }

    /// Number of lines the table was validated against.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Lines named as a rule target. These keep their pointed ends.
    #[must_use]
    pub fn targets(&self) -> BTreeSet<usize> {
        self.rules.iter().map(|r| r.target).collect()
    }

    /// Checks that the table still matches a pattern with `line_count` lines.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::LineCountMismatch` on a mismatch.
    pub fn check_line_count(&self, line_count: usize) -> Result<()> {
        if line_count == self.line_count {
            Ok(())
        } else {
            Err(TopologyError::LineCountMismatch {
                expected: self.line_count,
                actual: line_count,
            }
            .into())
        }
    }
}
