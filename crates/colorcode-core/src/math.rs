//! Arithmetic shared by the cylindrical color models.

use crate::rgb::Rgb;

/// RGB channels normalized to [0, 1] along with their max, min and chroma.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Normalized {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub max: f64,
    pub min: f64,
    pub chroma: f64,
}

impl Normalized {
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        Self {
            r,
            g,
            b,
            max,
            min,
            chroma: max - min,
        }
    }

    /// Hue in degrees, [0, 360). Zero for achromatic colors.
    pub fn hue(&self) -> f64 {
        let Self {
            r,
            g,
            b,
            max,
            chroma,
            ..
        } = *self;
        if chroma == 0.0 {
            return 0.0;
        }

        let hue = if max == r {
            60.0 * ((g - b) / chroma)
        } else if max == g {
            60.0 * ((b - r) / chroma + 2.0)
        } else {
            60.0 * ((r - g) / chroma + 4.0)
        };

        if hue < 0.0 {
            hue + 360.0
        } else {
            hue
        }
    }
}

/// Build an RGB color from hue (degrees), chroma and the lightness offset `m`,
/// all but hue in the [0, 1] domain.
pub(crate) fn rgb_from_chroma(hue: f64, chroma: f64, m: f64) -> Rgb {
    let sector = hue / 60.0;
    let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());

    let (r, g, b) = match sector {
        s if s < 1.0 => (chroma, x, 0.0),
        s if s < 2.0 => (x, chroma, 0.0),
        s if s < 3.0 => (0.0, chroma, x),
        s if s < 4.0 => (0.0, x, chroma),
        s if s < 5.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Rgb::new(to_byte(r + m), to_byte(g + m), to_byte(b + m))
}

/// Scale a [0, 1] channel to a byte, truncating and clamping.
#[inline]
pub(crate) fn to_byte(unit: f64) -> u8 {
    (unit * 255.0).clamp(0.0, 255.0) as u8
}

/// Round a real channel for display (half away from zero).
#[inline]
pub(crate) fn display_round(value: f64) -> i64 {
    value.round() as i64
}

/// Round a hue for display, folding 360 back onto 0.
#[inline]
pub(crate) fn display_hue(hue: f64) -> i64 {
    display_round(hue).rem_euclid(360)
}
