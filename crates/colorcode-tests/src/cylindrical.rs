//! Reference tables for RGB, HSL and HSV conversions.

use colorcode_core::{ColorError, Hsl, Hsv, Rgb};

// ── Helpers ────────────────────────────────────────────────────

fn hsl(h: f64, s: f64, l: f64) -> Hsl {
    Hsl::new(h, s, l).unwrap()
}

fn hsv(h: f64, s: f64, v: f64) -> Hsv {
    Hsv::new(h, s, v).unwrap()
}

fn within_one(a: Rgb, b: Rgb) -> bool {
    a.r.abs_diff(b.r) <= 1 && a.g.abs_diff(b.g) <= 1 && a.b.abs_diff(b.b) <= 1
}

// ── Construction ───────────────────────────────────────────────

#[test]
fn out_of_range_channels_are_rejected() {
    assert!(matches!(
        Hsl::new(378.0, 65.0, 35.0),
        Err(ColorError::Range { channel: "hue", .. })
    ));
    assert!(matches!(
        Hsv::new(450.0, 90.0, 100.0),
        Err(ColorError::Range { channel: "hue", .. })
    ));
    assert!(matches!(
        Hsv::new(45.0, 90.0, 100.1),
        Err(ColorError::Range { channel: "value", .. })
    ));
}

#[test]
fn fractional_channels_display_rounded() {
    assert_eq!(hsl(250.4, 65.0, 35.0).to_string(), "hsl(250, 65%, 35%)");
    assert_eq!(hsv(216.23, 82.81, 50.2).to_string(), "hsv(216, 83%, 50%)");
}

// ── HSL ────────────────────────────────────────────────────────

#[test]
fn hsl_reference_table() {
    let table = [
        ((200.0, 90.0, 50.0), "rgb(12, 165, 242)", "#0ca5f2"),
        ((0.0, 0.0, 50.0), "rgb(127, 127, 127)", "#7f7f7f"),
        ((256.0, 100.0, 15.0), "rgb(20, 0, 76)", "#14004c"),
        ((90.0, 100.0, 15.0), "rgb(38, 76, 0)", "#264c00"),
    ];
    for ((h, s, l), rgb, hex) in table {
        let color = hsl(h, s, l);
        assert_eq!(color.to_rgb().to_string(), rgb);
        assert_eq!(color.to_hex_code().to_string(), hex);
    }
}

#[test]
fn hsl_to_hsv_reference_table() {
    let table = [
        ((197.0, 84.0, 63.0), "hsv(197, 66%, 94%)"),
        ((197.0, 84.0, 30.0), "hsv(197, 91%, 55%)"),
        ((197.0, 84.0, 0.0), "hsv(197, 91%, 0%)"),
    ];
    for ((h, s, l), expected) in table {
        assert_eq!(hsl(h, s, l).to_hsv().to_string(), expected);
    }
}

#[test]
fn hsl_to_hsv_agrees_with_rgb_path() {
    for (h, s, l) in [(197.0, 84.0, 63.0), (120.0, 50.0, 50.0), (20.0, 100.0, 40.0)] {
        let direct = hsl(h, s, l).to_hsv();
        let via_rgb = hsl(h, s, l).to_rgb().to_hsv();
        assert!((direct.h() - via_rgb.h()).abs() <= 1.0);
        assert!((direct.s() - via_rgb.s()).abs() <= 1.0);
        assert!((direct.v() - via_rgb.v()).abs() <= 1.0);
    }
}

// ── HSV ────────────────────────────────────────────────────────

#[test]
fn hsv_reference_table() {
    let table = [
        ((216.23, 82.81, 50.2), "rgb(22, 64, 128)", "#164080"),
        ((23.0, 100.0, 100.0), "rgb(255, 97, 0)", "#ff6100"),
        ((82.0, 100.0, 100.0), "rgb(161, 255, 0)", "#a1ff00"),
        ((170.0, 100.0, 100.0), "rgb(0, 255, 212)", "#00ffd4"),
        ((226.0, 100.0, 100.0), "rgb(0, 59, 255)", "#003bff"),
        ((280.0, 100.0, 100.0), "rgb(170, 0, 255)", "#aa00ff"),
        ((344.0, 100.0, 100.0), "rgb(255, 0, 67)", "#ff0043"),
    ];
    for ((h, s, v), rgb, hex) in table {
        let color = hsv(h, s, v);
        assert_eq!(color.to_rgb().to_string(), rgb);
        assert_eq!(color.to_hex_code().to_string(), hex);
    }
}

#[test]
fn hsv_to_hsl_reference_table() {
    let table = [
        ((344.0, 100.0, 100.0), "hsl(344, 100%, 50%)"),
        ((198.0, 60.0, 1.0), "hsl(198, 43%, 1%)"),
        ((198.0, 60.0, 0.5), "hsl(198, 0%, 0%)"),
    ];
    for ((h, s, v), expected) in table {
        assert_eq!(hsv(h, s, v).to_hsl().to_string(), expected);
    }
}

// ── RGB ────────────────────────────────────────────────────────

#[test]
fn rgb_reference_table() {
    let table = [
        (Rgb::new(13, 166, 242), "hsl(200, 90%, 50%)", "hsv(200, 95%, 95%)"),
        (Rgb::new(128, 128, 128), "hsl(0, 0%, 50%)", "hsv(0, 0%, 50%)"),
        (Rgb::new(0, 0, 0), "hsl(0, 0%, 0%)", "hsv(0, 0%, 0%)"),
        (Rgb::new(40, 34, 90), "hsl(246, 45%, 24%)", "hsv(246, 62%, 35%)"),
        (Rgb::new(40, 150, 90), "hsl(147, 58%, 37%)", "hsv(147, 73%, 59%)"),
    ];
    for (rgb, hsl, hsv) in table {
        assert_eq!(rgb.to_hsl().to_string(), hsl);
        assert_eq!(rgb.to_hsv().to_string(), hsv);
    }
}

#[test]
fn rgb_round_trips_on_a_coarse_grid() {
    for r in (0..=255u8).step_by(5) {
        for g in (0..=255u8).step_by(5) {
            for b in (0..=255u8).step_by(5) {
                let rgb = Rgb::new(r, g, b);
                assert!(within_one(rgb, rgb.to_hsl().to_rgb()), "hsl {rgb}");
                assert!(within_one(rgb, rgb.to_hsv().to_rgb()), "hsv {rgb}");
            }
        }
    }
}
