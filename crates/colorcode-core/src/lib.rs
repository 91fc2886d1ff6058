//! Colorcode Core - Conversions between color notations
//!
//! This crate converts colors between four representations and formats
//! each one as a canonical display string:
//! - Hex codes (`#rrggbb`)
//! - RGB with 8-bit channels (`rgb(r, g, b)`)
//! - HSL (`hsl(h, s%, l%)`)
//! - HSV (`hsv(h, s%, v%)`)
//!
//! ```
//! use colorcode_core::{HexCode, Hsl};
//!
//! let rgb = HexCode::new("#deadaf").to_rgb()?;
//! assert_eq!(rgb.to_string(), "rgb(222, 173, 175)");
//!
//! let hsl = Hsl::new(200.0, 90.0, 50.0)?;
//! assert_eq!(hsl.to_hex_code().as_str(), "#0ca5f2");
//! # Ok::<(), colorcode_core::ColorError>(())
//! ```

pub mod color;
pub mod error;
pub mod hex;
pub mod hsl;
pub mod hsv;
pub mod rgb;

mod math;
mod parse;

pub use color::{Color, Notation};
pub use error::{ColorError, Result};
pub use hex::HexCode;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;
