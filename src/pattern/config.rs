use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};
use crate::template::{DepthMode, TemplateName};

/// Everything needed to build one pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternConfig {
    #[serde(alias = "name")]
    pub template_name: TemplateName,
    #[serde(alias = "mode")]
    pub depth_mode: DepthMode,
    /// Normalized angle in `[0, 1]`, mapped into the template's own range.
    pub angle: f64,
    /// Ribbon width. Absent or zero skips stroke expansion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded_stroke_width: Option<f64>,
    #[serde(default)]
    pub interlacing_enabled: bool,
    /// Opaque to this crate; carried for the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_selector: Option<u32>,
    /// Normalized pick among the pattern's shape sets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_set: Option<f64>,
}

impl PatternConfig {
    #[must_use]
    pub fn new(template_name: TemplateName, depth_mode: DepthMode, angle: f64) -> Self {
        Self {
            template_name,
            depth_mode,
            angle,
            expanded_stroke_width: None,
            interlacing_enabled: false,
            fill_selector: None,
            shape_set: None,
        }
    }

    #[must_use]
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.expanded_stroke_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_interlacing(mut self, enabled: bool) -> Self {
        self.interlacing_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_shape_set(mut self, shape_set: f64) -> Self {
        self.shape_set = Some(shape_set);
        self
    }

    /// Ribbon width to expand with, or `None` when expansion is off.
    #[must_use]
    pub fn stroke_width(&self) -> Option<f64> {
        self.expanded_stroke_width.filter(|w| *w > 0.0)
    }

    /// Checks numeric parameters against their allowed ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::ParameterOutOfRange` for an angle or
    /// shape set outside `[0, 1]`, or a negative or non-finite stroke width.
    pub fn validate(&self) -> Result<()> {
        check_range("angle", self.angle, 0.0, 1.0)?;
        if let Some(width) = self.expanded_stroke_width {
            check_range("expandedStrokeWidth", width, 0.0, f64::MAX)?;
        }
        if let Some(set) = self.shape_set {
            check_range("shapeSet", set, 0.0, 1.0)?;
        }
        Ok(())
    }
}

fn check_range(parameter: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigurationError::ParameterOutOfRange {
            parameter,
            value,
            min,
            max,
        }
        .into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_names() {
        let json = r#"{
            "templateName": "template-hexagon",
            "depthMode": "+2",
            "angle": 0.25,
            "expandedStrokeWidth": 3.0,
            "interlacingEnabled": true
        }"#;
        let config: PatternConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.template_name, TemplateName::Hexagon);
        assert_eq!(config.depth_mode, DepthMode::PlusTwo);
        assert_eq!(config.stroke_width(), Some(3.0));
        assert!(config.interlacing_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn accepts_short_field_aliases() {
        let config: PatternConfig =
            serde_json::from_str(r#"{"name": "kharraqan", "mode": "+1", "angle": 1.0}"#).unwrap();
        assert_eq!(config.template_name, TemplateName::Kharraqan);
        assert!(!config.interlacing_enabled);
        assert_eq!(config.stroke_width(), None);
    }

    #[test]
    fn unknown_template_fails_to_parse() {
        let result: std::result::Result<PatternConfig, _> =
            serde_json::from_str(r#"{"name": "octagon", "mode": "+1", "angle": 0.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let base = PatternConfig::new(TemplateName::Square, DepthMode::PlusOne, 0.5);
        assert!(PatternConfig { angle: 1.01, ..base.clone() }.validate().is_err());
        assert!(PatternConfig { angle: f64::NAN, ..base.clone() }.validate().is_err());
        assert!(base.clone().with_stroke_width(-1.0).validate().is_err());
        assert!(base.clone().with_shape_set(2.0).validate().is_err());
        assert!(base.with_stroke_width(0.0).validate().is_ok());
    }

    #[test]
    fn zero_width_disables_expansion() {
        let config = PatternConfig::new(TemplateName::Cordoba, DepthMode::PlusOne, 0.0).with_stroke_width(0.0);
        assert_eq!(config.stroke_width(), None);
    }
}
