//! Colour value types and the conversions between them.
//!
//! Everything here is pure: RGB <-> hex, HSV -> RGB and the Euclidean
//! distance used by the scoring engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest possible distance between two colours in RGB space, `sqrt(3 * 255^2)`.
pub const MAX_DISTANCE: f64 = 441.672_955_930_063_7;

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical upper-case `#RRGGBB`.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// HSV colour as used by the picker: hue in degrees `[0, 360)`,
/// saturation and value in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Builds a normalized colour: hue wraps modulo 360, saturation and value clamp.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: s.clamp(0.0, 100.0),
            v: v.clamp(0.0, 100.0),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self.h, self.s, self.v)
    }

    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl Default for Hsv {
    /// Pure red, the picker's starting colour.
    fn default() -> Self {
        Self {
            h: 0.0,
            s: 100.0,
            v: 100.0,
        }
    }
}

/// Wraps any hue (negative, or >= 360) into `[0, 360)`.
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Six-sector HSV to RGB conversion.
///
/// `h` is in degrees, `s` and `v` in percent. Out-of-range inputs are
/// normalized first, so the result is always a valid colour.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = wrap_hue(h) / 360.0;
    let s = s.clamp(0.0, 100.0) / 100.0;
    let v = v.clamp(0.0, 100.0) / 100.0;

    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(unit_to_channel(r), unit_to_channel(g), unit_to_channel(b))
}

fn unit_to_channel(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Formats three channels as `#RRGGBB`, zero-padded and upper-case.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Parses a hex colour. Returns `None` unless the input is exactly six hex
/// digits after removing one optional leading `#`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    if !is_valid_hex(hex) {
        return None;
    }
    let digits = strip_hash(hex);

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

/// True for `RRGGBB` / `#RRGGBB`, case-insensitive.
pub fn is_valid_hex(hex: &str) -> bool {
    let digits = strip_hash(hex);
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn strip_hash(hex: &str) -> &str {
    hex.strip_prefix('#').unwrap_or(hex)
}

/// Cleans up what the player is typing into a hex field.
///
/// Drops every character that is not a hex digit, keeps at most six digits,
/// upper-cases them and puts a `#` in front. Input without any hex digit
/// formats to an empty string.
pub fn format_hex_input(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .take(6)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if digits.is_empty() {
        String::new()
    } else {
        format!("#{}", digits)
    }
}

/// Euclidean distance between two colours in RGB space.
pub fn color_distance(a: Rgb, b: Rgb) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex_pads_and_uppercases() {
        assert_eq!(rgb_to_hex(255, 87, 51), "#FF5733");
        assert_eq!(rgb_to_hex(0, 10, 1), "#000A01");
        assert_eq!(Rgb::new(171, 205, 239).to_string(), "#ABCDEF");
    }

    #[test]
    fn test_hex_round_trip() {
        for &(r, g, b) in &[(0, 0, 0), (255, 255, 255), (1, 128, 254), (17, 34, 51)] {
            let hex = rgb_to_hex(r, g, b);
            assert_eq!(hex_to_rgb(&hex), Some(Rgb::new(r, g, b)));
        }
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed() {
        assert_eq!(hex_to_rgb("#ff5733"), Some(Rgb::new(255, 87, 51)));
        assert_eq!(hex_to_rgb("FF5733"), Some(Rgb::new(255, 87, 51)));
        assert_eq!(hex_to_rgb("GG5733"), None);
        assert_eq!(hex_to_rgb("FF57"), None);
        assert_eq!(hex_to_rgb("##FF5733"), None);
        assert_eq!(hex_to_rgb("#FF57331"), None);
        assert_eq!(hex_to_rgb(""), None);
    }

    #[test]
    fn test_is_valid_hex() {
        assert!(is_valid_hex("FF5733"));
        assert!(is_valid_hex("#ff5733"));
        assert!(!is_valid_hex("GG5733"));
        assert!(!is_valid_hex("FF57"));
        assert!(!is_valid_hex(""));
        assert!(!is_valid_hex("#"));
    }

    #[test]
    fn test_format_hex_input() {
        assert_eq!(format_hex_input("ff5733"), "#FF5733");
        assert_eq!(format_hex_input("#ab"), "#AB");
        assert_eq!(format_hex_input("zz12-34xy56789"), "#123456");
        assert_eq!(format_hex_input("###"), "");
        assert_eq!(format_hex_input(""), "");
    }

    #[test]
    fn test_hsv_to_rgb_primary_sectors() {
        assert_eq!(hsv_to_rgb(0.0, 100.0, 100.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(60.0, 100.0, 100.0), Rgb::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(120.0, 100.0, 100.0), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(180.0, 100.0, 100.0), Rgb::new(0, 255, 255));
        assert_eq!(hsv_to_rgb(240.0, 100.0, 100.0), Rgb::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(300.0, 100.0, 100.0), Rgb::new(255, 0, 255));
    }

    #[test]
    fn test_hsv_to_rgb_greys_and_wrap() {
        assert_eq!(hsv_to_rgb(200.0, 0.0, 100.0), Rgb::WHITE);
        assert_eq!(hsv_to_rgb(200.0, 50.0, 0.0), Rgb::BLACK);
        assert_eq!(hsv_to_rgb(0.0, 0.0, 50.0), Rgb::new(128, 128, 128));
        assert_eq!(hsv_to_rgb(360.0, 100.0, 100.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(-120.0, 100.0, 100.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_hsv_new_normalizes() {
        let hsv = Hsv::new(370.0, 150.0, -5.0);
        assert!((hsv.h - 10.0).abs() < 1e-9);
        assert_eq!(hsv.s, 100.0);
        assert_eq!(hsv.v, 0.0);
        assert_eq!(Hsv::default().to_hex(), "#FF0000");
    }

    #[test]
    fn test_color_distance_bounds() {
        assert_eq!(color_distance(Rgb::BLACK, Rgb::BLACK), 0.0);
        let d = color_distance(Rgb::BLACK, Rgb::WHITE);
        assert!((d - MAX_DISTANCE).abs() < 1e-9);
        assert!((d - 441.67).abs() < 0.01);
        assert_eq!(color_distance(Rgb::new(3, 0, 0), Rgb::new(0, 4, 0)), 5.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_hex_round_trips_for_every_rgb(
                r in any::<u8>(),
                g in any::<u8>(),
                b in any::<u8>(),
            ) {
                let hex = rgb_to_hex(r, g, b);
                prop_assert!(is_valid_hex(&hex));
                prop_assert_eq!(hex_to_rgb(&hex), Some(Rgb::new(r, g, b)));
                prop_assert_eq!(hex_to_rgb(&hex.to_lowercase()), Some(Rgb::new(r, g, b)));
                prop_assert_eq!(hex_to_rgb(&hex[1..]), Some(Rgb::new(r, g, b)));
            }

            #[test]
            fn test_wrap_hue_stays_in_range(h in -1.0e9_f64..1.0e9) {
                let wrapped = wrap_hue(h);
                prop_assert!((0.0..360.0).contains(&wrapped), "{} -> {}", h, wrapped);
            }
        }
    }
}
