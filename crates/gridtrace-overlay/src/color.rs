//! Marker colours.
//!
//! Region colours are spread around the hue circle starting from the spawn
//! colour, keeping its saturation, brightness and alpha. Channels are
//! rounded to the nearest integer after each HSB conversion.

use std::error::Error;
use std::fmt;

/// Failure to parse an `rrggbbaa` hex string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseColorError {
    text: String,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid colour {:?}, expected 8 hex digits rrggbbaa", self.text)
    }
}

impl Error for ParseColorError {}

/// An sRGB colour with straight alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity, 0 transparent to 1 opaque.
    pub a: f32,
}

impl Rgba {
    /// Hex text of [`DEFAULT_SPAWN`](Self::DEFAULT_SPAWN).
    pub const DEFAULT_SPAWN_HEX: &'static str = "1e90ff1a";

    /// Translucent dodger blue.
    pub const DEFAULT_SPAWN: Rgba = Rgba {
        r: 0x1e,
        g: 0x90,
        b: 0xff,
        a: 0x1a as f32 / 255.0,
    };

    /// Parse `rrggbbaa`, with or without a leading `#`.
    pub fn from_hex(text: &str) -> Result<Self, ParseColorError> {
        let err = || ParseColorError {
            text: text.to_string(),
        };
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| err());
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: f32::from(channel(6)?) / 255.0,
        })
    }

    /// Lower-case `rrggbbaa`.
    pub fn to_hex(&self) -> String {
        format!(
            "{:02x}{:02x}{:02x}{:02x}",
            self.r,
            self.g,
            self.b,
            alpha_byte(self.a)
        )
    }

    /// Rotate the hue by `turns` of a full circle, keeping saturation,
    /// brightness and alpha.
    pub fn with_hue_shift(&self, turns: f32) -> Self {
        let (h, s, v) = rgb_to_hsb(self.r, self.g, self.b);
        let (r, g, b) = hsb_to_rgb((h + turns).rem_euclid(1.0), s, v);
        Self { r, g, b, a: self.a }
    }

    /// The stroke colour for a region filled with `self`: same hue, alpha
    /// raised by 0.3 up to fully opaque.
    pub fn outline_color(&self) -> Self {
        Self {
            a: (self.a + 0.3).min(1.0),
            ..*self
        }
    }

    /// Colour of the `index`-th of `count` regions around the hue circle.
    ///
    /// Index 0 is `self`. A zero `count` is treated as one.
    pub fn hue_for(&self, index: usize, count: usize) -> Self {
        self.with_hue_shift(index as f32 / count.max(1) as f32)
    }
}

fn alpha_byte(a: f32) -> u8 {
    (a.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn rgb_to_hsb(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let brightness = f32::from(max) / 255.0;
    if max == min {
        return (0.0, 0.0, brightness);
    }
    let range = f32::from(max - min);
    let saturation = range / f32::from(max);
    let rc = f32::from(max - r) / range;
    let gc = f32::from(max - g) / range;
    let bc = f32::from(max - b) / range;
    let sector = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    let mut hue = sector / 6.0;
    if hue < 0.0 {
        hue += 1.0;
    }
    (hue, saturation, brightness)
}

fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> (u8, u8, u8) {
    let channel = |x: f32| (x * 255.0 + 0.5) as u8;
    if saturation == 0.0 {
        let v = channel(brightness);
        return (v, v, v);
    }
    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));
    let (r, g, b) = match h as u8 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };
    (channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_with_and_without_hash() {
        let plain = Rgba::from_hex("1e90ff1a").unwrap();
        assert_eq!(plain, Rgba::DEFAULT_SPAWN);
        assert_eq!(Rgba::from_hex("#1e90ff1a").unwrap(), plain);
        assert_eq!(plain.to_hex(), "1e90ff1a");
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in ["", "1e90ff", "1e90ff1a00", "zz90ff1a", "#", "1e90ff1é"] {
            assert!(Rgba::from_hex(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn outline_alpha_is_clamped() {
        let faint = Rgba::from_hex("00000033").unwrap().outline_color();
        assert!((faint.a - (0.2 + 0.3)).abs() < 1e-6);
        let solid = Rgba::from_hex("000000e6").unwrap().outline_color();
        assert_eq!(solid.a, 1.0);
    }

    #[test]
    fn primaries_rotate_by_thirds() {
        let red = Rgba::from_hex("ff0000ff").unwrap();
        assert_eq!(red.with_hue_shift(1.0 / 3.0).to_hex(), "00ff00ff");
        assert_eq!(red.with_hue_shift(2.0 / 3.0).to_hex(), "0000ffff");
        assert_eq!(red.hue_for(0, 5), red);
    }

    #[test]
    fn grey_has_no_hue_to_rotate() {
        let grey = Rgba::from_hex("80808040").unwrap();
        assert_eq!(grey.with_hue_shift(0.37), grey);
    }

    proptest! {
        #[test]
        fn hex_round_trips(r: u8, g: u8, b: u8, a: u8) {
            let text = format!("{r:02x}{g:02x}{b:02x}{a:02x}");
            prop_assert_eq!(Rgba::from_hex(&text).unwrap().to_hex(), text);
        }

        #[test]
        fn full_turn_keeps_colour_close(r: u8, g: u8, b: u8) {
            let c = Rgba { r, g, b, a: 0.5 };
            let back = c.with_hue_shift(1.0);
            prop_assert!(c.r.abs_diff(back.r) <= 1);
            prop_assert!(c.g.abs_diff(back.g) <= 1);
            prop_assert!(c.b.abs_diff(back.b) <= 1);
            prop_assert_eq!(back.a, c.a);
        }
    }
}
