//! Integration tests for hex code parsing.

use colorcode_core::{ColorError, HexCode, Rgb};

#[test]
fn hex_code_prints_as_written() {
    assert_eq!(HexCode::new("#164080").to_string(), "#164080");
}

#[test]
fn hex_converts_to_every_notation() {
    let hex = HexCode::new("#deadaf");
    assert_eq!(hex.to_rgb().unwrap().to_string(), "rgb(222, 173, 175)");
    assert_eq!(hex.to_hsl().unwrap().to_string(), "hsl(358, 43%, 77%)");
    assert_eq!(hex.to_hsv().unwrap().to_string(), "hsv(358, 22%, 87%)");
}

#[test]
fn hex_without_hash_sign_is_rejected() {
    let hex = HexCode::new("deadaf");
    assert!(matches!(hex.to_rgb(), Err(ColorError::Format(_))));
    assert!(matches!(hex.to_hsl(), Err(ColorError::Format(_))));
}

#[test]
fn hex_with_invalid_characters_is_rejected() {
    let hex = HexCode::new("#jklmno");
    assert!(matches!(hex.to_rgb(), Err(ColorError::Format(_))));
    assert!(matches!(hex.to_hsl(), Err(ColorError::Format(_))));
    assert!(matches!(hex.to_hsv(), Err(ColorError::Format(_))));
}

#[test]
fn every_byte_survives_a_hex_round_trip() {
    for v in 0..=255u8 {
        for rgb in [Rgb::new(v, 0, 0), Rgb::new(0, v, 0), Rgb::new(0, 0, v), Rgb::new(v, 255 - v, v / 2)] {
            assert_eq!(rgb.to_hex_code().to_rgb().unwrap(), rgb);
        }
    }
}

#[test]
fn rgb_hex_codes_are_lowercase() {
    assert_eq!(Rgb::new(68, 138, 255).to_hex_code().as_str(), "#448aff");
    assert_eq!(Rgb::new(0xAB, 0xCD, 0xEF).to_hex_code().as_str(), "#abcdef");
}
