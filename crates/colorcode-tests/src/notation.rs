//! Integration tests for notation-agnostic parsing.

use colorcode_core::{Color, Notation};

#[test]
fn any_notation_converts_to_any_other() {
    let color: Color = "hsv(23, 100%, 100%)".parse().unwrap();
    assert_eq!(color.convert(Notation::Rgb).unwrap().to_string(), "rgb(255, 97, 0)");
    assert_eq!(color.convert(Notation::Hex).unwrap().to_string(), "#ff6100");

    let color: Color = "hsl(200, 90%, 50%)".parse().unwrap();
    assert_eq!(color.convert(Notation::Hex).unwrap().to_string(), "#0ca5f2");

    let color: Color = "rgb(128, 128, 128)".parse().unwrap();
    assert_eq!(color.convert(Notation::Hsv).unwrap().to_string(), "hsv(0, 0%, 50%)");
}

#[test]
fn converting_to_own_notation_is_identity() {
    for input in ["#deadaf", "rgb(1, 2, 3)", "hsl(250.4, 65%, 35%)", "hsv(45, 90%, 100%)"] {
        let color: Color = input.parse().unwrap();
        assert_eq!(color.convert(color.notation()).unwrap(), color);
    }
}

#[test]
fn unrecognized_input_is_a_format_error() {
    for input in ["deadaf", "#jklmno", "cmyk(0, 0, 0, 0)", "rgb(1, 2)", ""] {
        let err = input.parse::<Color>().unwrap_err();
        assert!(err.is_format(), "{input}: {err}");
    }
}
