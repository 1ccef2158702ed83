use crate::error::{ConfigurationError, Result};

/// Offset from a centerline to each edge of its ribbon.
///
/// A ribbon built with width `w` is `2w` across.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeWidth {
    width: f64,
}

impl StrokeWidth {
    /// Creates a new stroke width.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::ParameterOutOfRange` if `width` is not
    /// positive and finite.
    pub fn new(width: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(ConfigurationError::ParameterOutOfRange {
                parameter: "expandedStrokeWidth",
                value: width,
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
            }
            .into());
        }
        Ok(Self { width })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }
}
