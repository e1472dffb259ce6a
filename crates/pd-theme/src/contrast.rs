// SPDX-License-Identifier: MIT

//! WCAG contrast ratios and pass/fail verdicts.
//!
//! The dashboard places black text on the table surface and white text on
//! the highlight color. Both pairings are checked against WCAG 2.1 AA for
//! normal text (4.5:1). A failing pairing is reported, never corrected: the
//! user picked the color, the UI shows a warning next to it.

use std::fmt;

use pd_color::Color;
use pd_color::color::srgb_to_linear;
use serde::Serialize;

/// Minimum ratio for WCAG AA, normal-size text.
pub const AA_NORMAL: f64 = 4.5;

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// `L = 0.2126 * R_lin + 0.7152 * G_lin + 0.0722 * B_lin`, in [0.0, 1.0].
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_srgb();
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`, in [1.0, 21.0] regardless of
/// argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    ((lighter + 0.05) / (darker + 0.05)).min(21.0)
}

/// Whether `fg` on `bg` meets WCAG AA for normal text.
#[must_use]
pub fn meets_aa(fg: Color, bg: Color) -> bool {
    contrast_ratio(fg, bg) >= AA_NORMAL
}

// ---------------------------------------------------------------------------
// Levels and verdicts
// ---------------------------------------------------------------------------

/// A WCAG 2.1 success threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WcagLevel {
    /// AA, normal text: 4.5:1.
    #[default]
    Aa,
    /// AA, large text (18pt, or 14pt bold): 3:1.
    AaLarge,
    /// AAA, normal text: 7:1.
    Aaa,
    /// AAA, large text: 4.5:1.
    AaaLarge,
}

impl WcagLevel {
    #[must_use]
    pub const fn min_ratio(self) -> f64 {
        match self {
            Self::Aa | Self::AaaLarge => AA_NORMAL,
            Self::AaLarge => 3.0,
            Self::Aaa => 7.0,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::AaLarge => "AA (large text)",
            Self::Aaa => "AAA",
            Self::AaaLarge => "AAA (large text)",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contrast ratio of a foreground/background pair and whether it passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastVerdict {
    pub ratio: f64,
    pub passes: bool,
}

impl ContrastVerdict {
    /// Judge `fg` on `bg` against `level`.
    #[must_use]
    pub fn at_level(fg: Color, bg: Color, level: WcagLevel) -> Self {
        let ratio = contrast_ratio(fg, bg);
        Self {
            ratio,
            passes: ratio >= level.min_ratio(),
        }
    }
}

impl fmt::Display for ContrastVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.passes { "pass" } else { "fail" };
        write!(f, "{:.2}:1 ({mark})", self.ratio)
    }
}

/// Judge `fg` on `bg` against WCAG AA for normal text.
#[must_use]
pub fn evaluate(fg: Color, bg: Color) -> ContrastVerdict {
    ContrastVerdict::at_level(fg, bg, WcagLevel::Aa)
}

/// Judge `fg` on `bg` against an arbitrary level.
#[must_use]
pub fn evaluate_at(fg: Color, bg: Color, level: WcagLevel) -> ContrastVerdict {
    ContrastVerdict::at_level(fg, bg, level)
}

/// Black or white, whichever reads better on `bg`. Ties go to black.
#[must_use]
pub fn readable_foreground(bg: Color) -> Color {
    if contrast_ratio(Color::BLACK, bg) >= contrast_ratio(Color::WHITE, bg) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
