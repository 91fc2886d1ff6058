//! 8-bit RGB colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};
use crate::hex::HexCode;
use crate::hsl::Hsl;
use crate::hsv::Hsv;
use crate::math::Normalized;
use crate::parse;

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#rrggbb` with lowercase digits.
    pub fn to_hex_code(self) -> HexCode {
        HexCode::new(format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b))
    }

    /// Convert to HSL. Saturation and lightness come out in percent.
    pub fn to_hsl(self) -> Hsl {
        let n = Normalized::from_rgb(self);
        let l = (n.max + n.min) / 2.0;
        let s = if n.chroma == 0.0 {
            0.0
        } else {
            n.chroma / (1.0 - (2.0 * l - 1.0).abs())
        };
        Hsl::from_parts(n.hue(), s.clamp(0.0, 1.0) * 100.0, l * 100.0)
    }

    /// Convert to HSV. Saturation and value come out in percent.
    pub fn to_hsv(self) -> Hsv {
        let n = Normalized::from_rgb(self);
        let s = if n.max == 0.0 { 0.0 } else { n.chroma / n.max };
        Hsv::from_parts(n.hue(), s * 100.0, n.max * 100.0)
    }

    // Common colors
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Parse `rgb(r, g, b)`.
    fn from_str(s: &str) -> Result<Self> {
        let [r, g, b] = parse::function_args(s, "rgb")?;
        Ok(Self::new(parse::byte(r)?, parse::byte(g)?, parse::byte(b)?))
    }
}
