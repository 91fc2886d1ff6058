//! Hue/saturation/lightness colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};
use crate::hex::HexCode;
use crate::hsv::Hsv;
use crate::math::{self, display_hue, display_round};
use crate::parse;
use crate::rgb::Rgb;

/// HSL color. Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HslChannels")]
pub struct Hsl {
    h: f64,
    s: f64,
    l: f64,
}

#[derive(Deserialize)]
struct HslChannels {
    h: f64,
    s: f64,
    l: f64,
}

impl TryFrom<HslChannels> for Hsl {
    type Error = ColorError;

    fn try_from(c: HslChannels) -> Result<Self> {
        Self::new(c.h, c.s, c.l)
    }
}

impl Hsl {
    /// Create a new HSL color.
    ///
    /// Fails with [`ColorError::Range`] if `h` is outside [0, 360] or `s`/`l`
    /// are outside [0, 100].
    pub fn new(h: f64, s: f64, l: f64) -> Result<Self> {
        ColorError::check_range("hue", h, 0.0, 360.0)?;
        ColorError::check_range("saturation", s, 0.0, 100.0)?;
        ColorError::check_range("lightness", l, 0.0, 100.0)?;
        Ok(Self { h, s, l })
    }

    /// Build from channels computed by a conversion, bypassing validation.
    pub(crate) const fn from_parts(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
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

    /// Lightness in percent.
    #[inline]
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Convert to RGB, truncating each scaled channel to a byte.
    pub fn to_rgb(self) -> Rgb {
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        if s == 0.0 {
            let gray = math::to_byte(l);
            return Rgb::new(gray, gray, gray);
        }

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        math::rgb_from_chroma(self.h, chroma, l - chroma / 2.0)
    }

    /// Convert to a hex code by way of RGB.
    pub fn to_hex_code(self) -> HexCode {
        self.to_rgb().to_hex_code()
    }

    /// Convert to HSV directly.
    ///
    /// At or below half lightness the HSV saturation only depends on the HSL
    /// saturation, so black keeps the saturation it was given.
    pub fn to_hsv(self) -> Hsv {
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let (s_v, v) = if l <= 0.5 {
            (2.0 * s / (1.0 + s), l * (1.0 + s))
        } else {
            let t = s * (1.0 - l);
            let v = l + t;
            (2.0 * t / v, v)
        };
        Hsv::from_parts(self.h, s_v * 100.0, v * 100.0)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            display_hue(self.h),
            display_round(self.s),
            display_round(self.l)
        )
    }
}

impl FromStr for Hsl {
    type Err = ColorError;

    /// Parse `hsl(h, s%, l%)`; the percent signs are optional.
    fn from_str(s: &str) -> Result<Self> {
        let [h, sat, light] = parse::function_args(s, "hsl")?;
        Self::new(
            parse::number(h, false)?,
            parse::number(sat, true)?,
            parse::number(light, true)?,
        )
    }
}
