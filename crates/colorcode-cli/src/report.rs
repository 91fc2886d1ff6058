//! Rendering of converted colors.

use colorcode_core::{Color, Notation, Result};
use serde::Serialize;

/// Every notation of a single input color, as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub input: String,
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub hsv: String,
}

impl Report {
    pub fn new(input: &str, color: &Color) -> Result<Self> {
        Ok(Self {
            input: input.to_owned(),
            hex: color.to_hex_code()?.to_string(),
            rgb: color.to_rgb()?.to_string(),
            hsl: color.to_hsl()?.to_string(),
            hsv: color.to_hsv()?.to_string(),
        })
    }

    pub fn get(&self, notation: Notation) -> &str {
        match notation {
            Notation::Hex => &self.hex,
            Notation::Rgb => &self.rgb,
            Notation::Hsl => &self.hsl,
            Notation::Hsv => &self.hsv,
        }
    }

    /// Plain text lines, either one notation or all four labeled.
    pub fn lines(&self, only: Option<Notation>) -> Vec<String> {
        match only {
            Some(notation) => vec![self.get(notation).to_owned()],
            None => Notation::ALL
                .iter()
                .map(|n| format!("{n}: {}", self.get(*n)))
                .collect(),
        }
    }
}
