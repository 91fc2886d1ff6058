//! `#rrggbb` hex codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{ColorError, Result};
use crate::hsl::Hsl;
use crate::hsv::Hsv;
use crate::rgb::Rgb;

/// A hex color code such as `#deadaf`.
///
/// Construction through [`HexCode::new`] does not validate; the code is
/// checked when it is converted. Use [`str::parse`] to validate up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexCode(String);

impl HexCode {
    /// Wrap a string as a hex code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The code as written.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into RGB.
    ///
    /// Fails with [`ColorError::Format`] unless the code is `#` followed by
    /// exactly six hex digits.
    pub fn to_rgb(&self) -> Result<Rgb> {
        let digits = self.0.strip_prefix('#').ok_or_else(|| {
            debug!(code = %self.0, "hex code without '#'");
            ColorError::format(format!("hex code {:?} must start with '#'", self.0))
        })?;

        if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            debug!(code = %self.0, "malformed hex digits");
            return Err(ColorError::format(format!(
                "hex code {:?} must have exactly 6 hex digits",
                self.0
            )));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| ColorError::format(format!("hex code {:?}: {e}", self.0)))
        };
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Convert to HSL by way of RGB.
    pub fn to_hsl(&self) -> Result<Hsl> {
        self.to_rgb().map(Rgb::to_hsl)
    }

    /// Convert to HSV by way of RGB.
    pub fn to_hsv(&self) -> Result<Hsv> {
        self.to_rgb().map(Rgb::to_hsv)
    }

    /// Whether the code is well formed.
    pub fn is_valid(&self) -> bool {
        self.to_rgb().is_ok()
    }
}

impl fmt::Display for HexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexCode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let code = Self::new(s.trim());
        code.to_rgb()?;
        Ok(code)
    }
}

impl From<Rgb> for HexCode {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex_code()
    }
}

impl TryFrom<&HexCode> for Rgb {
    type Error = ColorError;

    fn try_from(code: &HexCode) -> Result<Self> {
        code.to_rgb()
    }
}
