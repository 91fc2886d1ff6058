//! Error types for colorcode.

use thiserror::Error;

/// Main error type for color parsing and construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Input text does not match the expected notation.
    #[error("invalid color format: {0}")]
    Format(String),

    /// A hue/saturation/lightness/value channel is outside its bounds.
    #[error("{channel} out of range: expected {min} to {max}, got {value}")]
    Range {
        channel: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ColorError {
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Check `value` against `[min, max]`, rejecting NaN.
    pub(crate) fn check_range(channel: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(Self::Range {
                channel,
                value,
                min,
                max,
            })
        }
    }

    /// Whether this is a [`ColorError::Format`].
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Whether this is a [`ColorError::Range`].
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }
}

/// Result type alias for colorcode operations.
pub type Result<T> = std::result::Result<T, ColorError>;
