use crate::error::Result;
use crate::operations::generate::GeneratePattern;
use crate::operations::interlace::ApplyInterlacing;
use crate::operations::stroke::{ExpandPattern, StrokeWidth};
use crate::pattern::{Pattern, PatternConfig};

/// Runs the whole pipeline for one configuration.
///
/// Generation always runs. Stroke expansion runs when the config asks for a
/// positive width, and interlacing runs on top of that when it is enabled
/// and the pattern declares rules.
#[derive(Debug, Clone)]
pub struct BuildPattern {
    config: PatternConfig,
    seed: Option<u32>,
}

impl BuildPattern {
    #[must_use]
    pub fn new(config: PatternConfig) -> Self {
        Self { config, seed: None }
    }

    /// See [`GeneratePattern::with_seed`].
    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Errors
    ///
    /// Returns a `ConfigurationError` for an invalid config, or any error
    /// raised by generation or interlacing.
    pub fn execute(&self) -> Result<Pattern> {
        self.config.validate()?;

        let mut generate = GeneratePattern::from_config(&self.config);
        if let Some(seed) = self.seed {
            generate = generate.with_seed(seed);
        }
        let mut pattern = generate.execute()?;

        let Some(width) = self.config.stroke_width() else {
            return Ok(pattern);
        };
        pattern = ExpandPattern::new(StrokeWidth::new(width)?).execute(&pattern)?;

        if self.config.interlacing_enabled && pattern.interlace_rules.is_some() {
            pattern = ApplyInterlacing::for_pattern(&pattern).execute(&pattern)?;
        }
        Ok(pattern)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::stroke::find_junction_neighbors;
    use crate::template::{DepthMode, TemplateName};
    use tracing_subscriber::EnvFilter;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn centerlines_only_without_width() {
        let config = PatternConfig::new(TemplateName::Square, DepthMode::PlusOne, 0.5).with_interlacing(true);
        let pattern = BuildPattern::new(config.clone()).execute().unwrap();
        assert!(pattern.expanded_lines.is_none());

        let zero = BuildPattern::new(config.with_stroke_width(0.0)).execute().unwrap();
        assert!(zero.expanded_lines.is_none());
    }

    #[test]
    fn expands_every_line_index() {
        init_tracing();
        for name in TemplateName::ALL {
            for depth in [DepthMode::PlusOne, DepthMode::PlusTwo] {
                let config = PatternConfig::new(name, depth, 0.5).with_stroke_width(2.0);
                let pattern = BuildPattern::new(config).execute().unwrap();
                let ribbons = pattern.expanded_lines.as_ref().unwrap();
                assert_eq!(ribbons.len(), pattern.lines.len(), "{name} {depth}");
                assert!(ribbons.iter().flatten().all(|r| r.corners().iter().all(|p| p.x.is_finite() && p.y.is_finite())));

                // Any line joined at both ends, across seams included, gets a ribbon.
                for (idx, line) in pattern.lines.iter().enumerate() {
                    let at_end = find_junction_neighbors(line, &pattern.lines, &pattern.tile_edges);
                    let at_start = find_junction_neighbors(&line.reversed(), &pattern.lines, &pattern.tile_edges);
                    if at_end.len() >= 2 && at_start.len() >= 2 {
                        assert!(ribbons[idx].is_some(), "{name} {depth} line {idx}");
                    }
                }
            }
        }
    }

    #[test]
    fn interlacing_flattens_lines_left_underneath() {
        init_tracing();
        let config = PatternConfig::new(TemplateName::Square, DepthMode::PlusOne, 0.5).with_stroke_width(2.0);
        let plain = BuildPattern::new(config.clone()).execute().unwrap();
        let woven = BuildPattern::new(config.with_interlacing(true)).execute().unwrap();

        let targets = woven.interlace_rules.as_ref().unwrap().targets();
        let plain_ribbons = plain.expanded_lines.unwrap();
        let woven_ribbons = woven.expanded_lines.unwrap();
        for (idx, (before, after)) in plain_ribbons.iter().zip(&woven_ribbons).enumerate() {
            let (Some(before), Some(after)) = (before, after) else {
                continue;
            };
            if targets.contains(&idx) {
                assert_eq!(after[1], before[1], "line {idx}");
            } else {
                assert_eq!(*after, after.flattened(), "line {idx}");
            }
        }
    }

    #[test]
    fn patterns_without_rules_are_only_expanded() {
        let config = PatternConfig::new(TemplateName::Cordoba, DepthMode::PlusOne, 0.5)
            .with_stroke_width(2.0)
            .with_interlacing(true);
        let woven = BuildPattern::new(config.clone()).execute().unwrap();
        let plain = BuildPattern::new(config.with_interlacing(false)).execute().unwrap();
        assert!(woven.interlace_rules.is_none());
        assert_eq!(woven.expanded_lines, plain.expanded_lines);
    }

    #[test]
    fn invalid_config_is_rejected_before_generation() {
        let config = PatternConfig::new(TemplateName::Hexagon, DepthMode::PlusOne, 0.5).with_stroke_width(-1.0);
        assert!(BuildPattern::new(config).execute().is_err());
        let config = PatternConfig::new(TemplateName::Hexagon, DepthMode::PlusOne, 0.5).with_shape_set(2.0);
        assert!(BuildPattern::new(config).execute().is_err());
    }

    #[test]
    fn explicit_seed_changes_kharraqan() {
        let config = PatternConfig::new(TemplateName::Kharraqan, DepthMode::PlusOne, 0.5);
        let a = BuildPattern::new(config.clone()).with_seed(11).execute().unwrap();
        let b = BuildPattern::new(config.clone()).with_seed(11).execute().unwrap();
        let c = BuildPattern::new(config).with_seed(12).execute().unwrap();
        assert_eq!(a.lines, b.lines);
        assert_ne!(a.lines, c.lines);
    }
}
