//! A color in any of the supported notations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{ColorError, Result};
use crate::hex::HexCode;
use crate::hsl::Hsl;
use crate::hsv::Hsv;
use crate::rgb::Rgb;

/// The textual representations a color can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// `#rrggbb`
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsv(h, s%, v%)`
    Hsv,
}

impl Notation {
    pub const ALL: [Self; 4] = [Self::Hex, Self::Rgb, Self::Hsl, Self::Hsv];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
        }
    }

    /// Detect the notation of `input` from its prefix.
    pub fn detect(input: &str) -> Option<Self> {
        let input = input.trim_start();
        if input.starts_with('#') {
            return Some(Self::Hex);
        }
        let head = input.get(..3)?;
        [Self::Rgb, Self::Hsl, Self::Hsv]
            .into_iter()
            .find(|n| head.eq_ignore_ascii_case(n.name()))
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color in one of the four notations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "notation", content = "value", rename_all = "lowercase")]
pub enum Color {
    Hex(HexCode),
    Rgb(Rgb),
    Hsl(Hsl),
    Hsv(Hsv),
}

impl Color {
    /// Which notation this color is held in.
    pub fn notation(&self) -> Notation {
        match self {
            Self::Hex(_) => Notation::Hex,
            Self::Rgb(_) => Notation::Rgb,
            Self::Hsl(_) => Notation::Hsl,
            Self::Hsv(_) => Notation::Hsv,
        }
    }

    /// Only a malformed hex code can fail.
    pub fn to_rgb(&self) -> Result<Rgb> {
        match self {
            Self::Hex(hex) => hex.to_rgb(),
            Self::Rgb(rgb) => Ok(*rgb),
            Self::Hsl(hsl) => Ok(hsl.to_rgb()),
            Self::Hsv(hsv) => Ok(hsv.to_rgb()),
        }
    }

    pub fn to_hex_code(&self) -> Result<HexCode> {
        match self {
            Self::Hex(hex) => hex.to_rgb().map(|_| hex.clone()),
            other => other.to_rgb().map(Rgb::to_hex_code),
        }
    }

    pub fn to_hsl(&self) -> Result<Hsl> {
        match self {
            Self::Hsl(hsl) => Ok(*hsl),
            Self::Hsv(hsv) => Ok(hsv.to_hsl()),
            other => other.to_rgb().map(Rgb::to_hsl),
        }
    }

    pub fn to_hsv(&self) -> Result<Hsv> {
        match self {
            Self::Hsv(hsv) => Ok(*hsv),
            Self::Hsl(hsl) => Ok(hsl.to_hsv()),
            other => other.to_rgb().map(Rgb::to_hsv),
        }
    }

    /// Convert into the given notation.
    pub fn convert(&self, notation: Notation) -> Result<Self> {
        Ok(match notation {
            Notation::Hex => Self::Hex(self.to_hex_code()?),
            Notation::Rgb => Self::Rgb(self.to_rgb()?),
            Notation::Hsl => Self::Hsl(self.to_hsl()?),
            Notation::Hsv => Self::Hsv(self.to_hsv()?),
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(hex) => fmt::Display::fmt(hex, f),
            Self::Rgb(rgb) => fmt::Display::fmt(rgb, f),
            Self::Hsl(hsl) => fmt::Display::fmt(hsl, f),
            Self::Hsv(hsv) => fmt::Display::fmt(hsv, f),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let notation = Notation::detect(s).ok_or_else(|| {
            debug!(input = s, "unrecognized color notation");
            ColorError::format(format!(
                "{s:?} is not a hex code or rgb()/hsl()/hsv() color"
            ))
        })?;
        debug!(input = s, %notation, "parsing color");

        Ok(match notation {
            Notation::Hex => Self::Hex(s.parse()?),
            Notation::Rgb => Self::Rgb(s.parse()?),
            Notation::Hsl => Self::Hsl(s.parse()?),
            Notation::Hsv => Self::Hsv(s.parse()?),
        })
    }
}

impl From<HexCode> for Color {
    fn from(hex: HexCode) -> Self {
        Self::Hex(hex)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::Hsl(hsl)
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        Self::Hsv(hsv)
    }
}
