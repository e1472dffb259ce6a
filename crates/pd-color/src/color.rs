// SPDX-License-Identifier: MIT
//
// pd-color color system — 8-bit sRGB with HSL as the working space.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) are the
// standard convention in color science and match the published HSL
// conversion formulas line for line.
#![allow(clippy::many_single_char_names)]
//
// The dashboard stores every color as a six-digit hex string, so the
// canonical representation here is the 8-bit RGB triple that string
// encodes. Palette math happens in HSL: the generator nudges lightness and
// saturation while holding hue fixed, then rounds back to 8-bit channels.
//
// Conversion pipeline:
//
//   "#rrggbb" ↔ Color (u8 × 3) ↔ Hsl (f64 degrees / unit)
//                    │
//                    └─→ normalized sRGB → linear sRGB (for luminance)
//
// Every conversion is deterministic. The same seed always produces the same
// bytes, which callers rely on for caching generated palettes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
///
/// Parsed from and formatted as `#rrggbb`. Output is always lowercase, so
/// `"#7E69AB"` parses to a color that prints as `"#7e69ab"`.
///
/// # Examples
///
/// ```
/// use pd_color::Color;
///
/// let purple = Color::hex("#9B87F5").unwrap();
/// assert_eq!(purple, Color::rgb(0x9b, 0x87, 0xf5));
/// assert_eq!(purple.to_string(), "#9b87f5");
///
/// let hsl = purple.to_hsl();
/// assert!(hsl.l > 0.74 && hsl.l < 0.75);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a six-digit hex color, with or without the leading `#`.
    ///
    /// Case-insensitive. Shorthand (`#abc`), alpha (`#rrggbbaa`) and any
    /// non-hex character are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for anything that does not
    /// match `^#?[0-9a-fA-F]{6}$`.
    pub fn hex(s: &str) -> Result<Self> {
        parse_hex(s).ok_or_else(|| ColorError::invalid(s))
    }

    /// Build a color from HSL components.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl.h, hsl.s, hsl.l)
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (h, s, l) = rgb_to_hsl(self.r, self.g, self.b);
        Hsl { h, s, l }
    }

    /// Normalized sRGB channels in `0.0..=1.0`.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b } = self;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    // ─── Distance ────────────────────────────────────────────────────────

    /// Euclidean distance in raw 8-bit RGB space.
    ///
    /// Not perceptual, but it is what the color-match feature has always
    /// used to pick a slot, and users have learned its behavior.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(s: &str) -> Result<Self> {
        Self::hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self> {
        Self::hex(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL, derived from a [`Color`] and never stored.
///
/// - `h`: hue in degrees, `0.0..360.0`
/// - `s`: saturation, `0.0..=1.0`
/// - `l`: lightness, `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Round back to an 8-bit color.
    #[inline]
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::from_hsl(self)
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        color.to_hsl()
    }
}

// ─── Linear sRGB ─────────────────────────────────────────────────────────────
//
// WCAG 2.x defines relative luminance with the older 0.03928 breakpoint
// rather than the 0.04045 of IEC 61966-2-1. The two only disagree for
// channel values that no 8-bit input can produce, but contrast verdicts
// must match the published formula exactly.

/// Convert a single normalized sRGB component to linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── RGB ↔ HSL ───────────────────────────────────────────────────────────────

fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < f64::EPSILON {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, s, l)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Color {
    if s.abs() < f64::EPSILON {
        let v = to_u8(l);
        return Color::rgb(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let t = h / 360.0;

    Color::rgb(
        to_u8(hue_to_rgb(p, q, t + 1.0 / 3.0)),
        to_u8(hue_to_rgb(p, q, t)),
        to_u8(hue_to_rgb(p, q, t - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Convert a unit float to a channel byte, rounding half up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Clamp keeps the cast in range.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();
    if digits.len() != 6 {
        return None;
    }

    let r = parse_hex_byte(&digits[0..2])?;
    let g = parse_hex_byte(&digits[2..4])?;
    let b = parse_hex_byte(&digits[4..6])?;
    Some(Color::rgb(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
