//! Hue/saturation/value colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};
use crate::hex::HexCode;
use crate::hsl::Hsl;
use crate::math::{self, display_hue, display_round};
use crate::parse;
use crate::rgb::Rgb;

/// HSV color. Hue in degrees, saturation and value in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HsvChannels")]
pub struct Hsv {
    h: f64,
    s: f64,
    v: f64,
}

#[derive(Deserialize)]
struct HsvChannels {
    h: f64,
    s: f64,
    v: f64,
}

impl TryFrom<HsvChannels> for Hsv {
    type Error = ColorError;

    fn try_from(c: HsvChannels) -> Result<Self> {
        Self::new(c.h, c.s, c.v)
    }
}

impl Hsv {
    /// Create a new HSV color, with the same bounds as [`Hsl::new`].
    pub fn new(h: f64, s: f64, v: f64) -> Result<Self> {
        ColorError::check_range("hue", h, 0.0, 360.0)?;
        ColorError::check_range("saturation", s, 0.0, 100.0)?;
        ColorError::check_range("value", v, 0.0, 100.0)?;
        Ok(Self { h, s, v })
    }

    pub(crate) const fn from_parts(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Hue in degrees.
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Saturation in percent.
    #[inline]
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Value in percent.
    #[inline]
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Convert to RGB, truncating each scaled channel to a byte.
    pub fn to_rgb(self) -> Rgb {
        let s = self.s / 100.0;
        let v = self.v / 100.0;
        let chroma = v * s;
        math::rgb_from_chroma(self.h, chroma, v - chroma)
    }

    /// Convert to a hex code by way of RGB.
    pub fn to_hex_code(self) -> HexCode {
        self.to_rgb().to_hex_code()
    }

    /// Convert to HSL directly.
    ///
    /// A lightness that displays as 0% carries no saturation. On the bright
    /// side only pure white does.
    pub fn to_hsl(self) -> Hsl {
        let s = self.s / 100.0;
        let v = self.v / 100.0;
        let l = v * (1.0 - s / 2.0);

        let s_l = if display_round(l * 100.0) == 0 || l >= 1.0 {
            0.0
        } else {
            (v - l) / l.min(1.0 - l)
        };
        Hsl::from_parts(self.h, s_l * 100.0, l * 100.0)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsv({}, {}%, {}%)",
            display_hue(self.h),
            display_round(self.s),
            display_round(self.v)
        )
    }
}

impl FromStr for Hsv {
    type Err = ColorError;

    /// Parse `hsv(h, s%, v%)`; the percent signs are optional.
    fn from_str(s: &str) -> Result<Self> {
        let [h, sat, value] = parse::function_args(s, "hsv")?;
        Self::new(
            parse::number(h, false)?,
            parse::number(sat, true)?,
            parse::number(value, true)?,
        )
    }
}
