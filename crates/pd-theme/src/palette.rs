// SPDX-License-Identifier: MIT

//! Tonal palette generation — one seed color in, twelve ordered slots out.
//!
//! The seed keeps its exact value and lands in the slot that matches its
//! lightness, so a pale seed sits near the top of the ramp and a deep one
//! near the bottom. Slots above it are lifted toward white along an eased
//! curve, slots below it fall toward black along a logarithmic one. Hue is
//! never touched; saturation is trimmed near white so tints stay clean.

use std::ops::Index;

use pd_color::{Color, ColorError, Hsl};
use serde::Serialize;
use tracing::debug;

/// Number of slots in every palette.
pub const PALETTE_LEN: usize = 12;

/// Fixed ramp returned for a pure white seed. White holds slot 0.
pub const WHITE_RAMP: [Color; PALETTE_LEN] = [
    Color::rgb(0xff, 0xff, 0xff),
    Color::rgb(0xf5, 0xf5, 0xf5),
    Color::rgb(0xeb, 0xeb, 0xeb),
    Color::rgb(0xde, 0xde, 0xde),
    Color::rgb(0xcf, 0xcf, 0xcf),
    Color::rgb(0xbd, 0xbd, 0xbd),
    Color::rgb(0xa6, 0xa6, 0xa6),
    Color::rgb(0x8c, 0x8c, 0x8c),
    Color::rgb(0x70, 0x70, 0x70),
    Color::rgb(0x52, 0x52, 0x52),
    Color::rgb(0x36, 0x36, 0x36),
    Color::rgb(0x1c, 0x1c, 0x1c),
];

/// Fixed ramp returned for a pure black seed. Black holds slot 11.
pub const BLACK_RAMP: [Color; PALETTE_LEN] = [
    Color::rgb(0xf2, 0xf2, 0xf2),
    Color::rgb(0xde, 0xde, 0xde),
    Color::rgb(0xc4, 0xc4, 0xc4),
    Color::rgb(0xa8, 0xa8, 0xa8),
    Color::rgb(0x8c, 0x8c, 0x8c),
    Color::rgb(0x73, 0x73, 0x73),
    Color::rgb(0x5c, 0x5c, 0x5c),
    Color::rgb(0x45, 0x45, 0x45),
    Color::rgb(0x30, 0x30, 0x30),
    Color::rgb(0x1f, 0x1f, 0x1f),
    Color::rgb(0x0f, 0x0f, 0x0f),
    Color::rgb(0x00, 0x00, 0x00),
];

// ---------------------------------------------------------------------------
// Saturation tiers
// ---------------------------------------------------------------------------

/// How colorful the seed is. Each tier walks the ramp at its own pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    /// `s > 0.7`
    Vibrant,
    /// `0.3 < s <= 0.7`
    Medium,
    /// `s <= 0.3`
    Muted,
}

impl Tone {
    fn of(saturation: f64) -> Self {
        if saturation > 0.7 {
            Self::Vibrant
        } else if saturation > 0.3 {
            Self::Medium
        } else {
            Self::Muted
        }
    }

    /// Lightness increase (before easing) and saturation change for a slot
    /// above the base. `position` is 0 at the base and 1 at slot 0.
    fn brighter_step(self, position: f64) -> (f64, f64) {
        match self {
            Self::Vibrant => (0.08 + position * 0.07, -0.05 * position),
            Self::Medium => (0.09 + position * 0.08, -0.1 * position),
            Self::Muted => (0.1 + position * 0.09, 0.0),
        }
    }

    /// Saturation change for a slot below the base. Lightness below the
    /// base follows the shared logarithmic curve regardless of tier.
    fn darker_saturation(self, position: f64) -> f64 {
        match self {
            Self::Vibrant => 0.05 * position,
            Self::Medium => 0.1 * position,
            Self::Muted => 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Twelve colors ordered from lightest (slot 0) to darkest (slot 11).
///
/// The slot named by [`base_slot`](Self::base_slot) holds the seed exactly
/// as it was given; every other slot is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Palette {
    slots: [Color; PALETTE_LEN],
    base_slot: usize,
}

impl Palette {
    /// Generate the palette for `seed`.
    ///
    /// Pure white and pure black bypass the math and return
    /// [`WHITE_RAMP`] and [`BLACK_RAMP`].
    #[must_use]
    pub fn generate(seed: Color) -> Self {
        let palette = if seed == Color::WHITE {
            Self { slots: WHITE_RAMP, base_slot: 0 }
        } else if seed == Color::BLACK {
            Self { slots: BLACK_RAMP, base_slot: PALETTE_LEN - 1 }
        } else {
            Self::generate_ramp(seed)
        };

        debug!(seed = %seed, base_slot = palette.base_slot, "generated palette");
        palette
    }

    /// Parse `seed` and generate its palette.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] if `seed` is not `#rrggbb`.
    pub fn from_hex(seed: &str) -> Result<Self, ColorError> {
        Ok(Self::generate(Color::hex(seed)?))
    }

    fn generate_ramp(seed: Color) -> Self {
        let Hsl { h, s, l } = seed.to_hsl();
        let tone = Tone::of(s);
        let base = base_slot_for(l);

        let mut slots = [seed; PALETTE_LEN];

        // Brighter: base-1 down to 0.
        for i in (0..base).rev() {
            let position = (base - i) as f64 / base as f64;
            let (increase, saturation_change) = tone.brighter_step(position);

            let mut increase = increase * position.powf(0.8);
            if i < 2 {
                increase += 0.05;
            }

            let lightness = (l + increase).min(0.98);
            let mut saturation = (s + saturation_change).clamp(0.0, 1.0);
            if lightness > 0.9 {
                saturation = (saturation * 0.7).max(0.02);
            }

            slots[i] = Hsl::new(h, saturation, lightness).to_color();
        }

        // Darker: base+1 up to 11.
        for (i, slot) in slots.iter_mut().enumerate().skip(base + 1) {
            let position = (i - base) as f64 / (PALETTE_LEN - base) as f64;

            let curve = 1.0 - (position * 9.0 + 1.0).ln() / std::f64::consts::LN_10;
            let lightness = (l * curve).max(0.05);

            let mut saturation = (s + tone.darker_saturation(position)).min(1.0);
            if lightness < 0.15 {
                saturation *= 0.9;
            }

            *slot = Hsl::new(h, saturation, lightness).to_color();
        }

        Self { slots, base_slot: base }
    }

    // ── Accessors ──────────────────────────────────────────────

    /// Index of the slot holding the unmodified seed.
    #[inline]
    #[must_use]
    pub const fn base_slot(&self) -> usize {
        self.base_slot
    }

    /// The color in the base slot: the seed, unless a caller replaced it
    /// with [`with_slot`](Self::with_slot).
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> Color {
        self.slots[self.base_slot]
    }

    /// All twelve slots, lightest first.
    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[Color; PALETTE_LEN] {
        &self.slots
    }

    /// The color at `index`, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.slots.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.slots.iter().copied()
    }

    /// A copy with `slot` replaced by `color`.
    ///
    /// The base slot index is unchanged even if `slot` is the base slot:
    /// it records where the seed was placed, not what is there now.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= PALETTE_LEN`.
    #[must_use]
    pub fn with_slot(mut self, slot: usize, color: Color) -> Self {
        self.slots[slot] = color;
        self
    }

    /// Slots as `#rrggbb` strings.
    #[must_use]
    pub fn to_hex_vec(&self) -> Vec<String> {
        self.iter().map(Color::to_hex).collect()
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.slots[index]
    }
}

/// Parse `seed` and generate its palette.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `seed` is not `#rrggbb`.
pub fn generate_palette(seed: &str) -> Result<Palette, ColorError> {
    Palette::from_hex(seed)
}

/// Slot that a seed of the given HSL lightness occupies.
///
/// Very light seeds (`l > 0.9`) take slot 0 and very dark ones (`l < 0.1`)
/// slot 11. In between, `round(10 - (l - 0.1) * 9/0.8) + 1` gives the
/// seed's 1-based position (2 through 11) on the ramp; the returned index
/// is that position minus one, so the middle band spans slots 1 through 10.
#[must_use]
pub fn base_slot_for(lightness: f64) -> usize {
    if lightness > 0.9 {
        return 0;
    }
    if lightness < 0.1 {
        return PALETTE_LEN - 1;
    }

    let position = (10.0 - (lightness - 0.1) * (9.0 / 0.8)).round() + 1.0;
    (position as usize).clamp(2, PALETTE_LEN) - 1
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hexes(palette: &Palette) -> Vec<String> {
        palette.to_hex_vec()
    }

    // ── Special seeds ───────────────────────────────────────────────

    #[test]
    fn white_seed_uses_fixed_ramp() {
        let p = generate_palette("#FFFFFF").unwrap();
        assert_eq!(p.slots(), &WHITE_RAMP);
        assert_eq!(p.base_slot(), 0);
        assert_eq!(p.seed(), Color::WHITE);
    }

    #[test]
    fn black_seed_uses_fixed_ramp() {
        let p = generate_palette("000000").unwrap();
        assert_eq!(p.slots(), &BLACK_RAMP);
        assert_eq!(p.base_slot(), 11);
        assert_eq!(p.seed(), Color::BLACK);
    }

    #[test]
    fn fixed_ramps_run_light_to_dark() {
        for ramp in [WHITE_RAMP, BLACK_RAMP] {
            for pair in ramp.windows(2) {
                assert!(pair[0].r > pair[1].r, "{:?} then {:?}", pair[0], pair[1]);
            }
        }
    }

    // ── Base slot ───────────────────────────────────────────────────

    #[test]
    fn base_slot_extremes() {
        assert_eq!(base_slot_for(0.95), 0);
        assert_eq!(base_slot_for(1.0), 0);
        assert_eq!(base_slot_for(0.05), 11);
        assert_eq!(base_slot_for(0.0), 11);
    }

    #[test]
    fn base_slot_thresholds_are_strict() {
        // Exactly 0.9 and 0.1 fall into the middle band.
        assert_eq!(base_slot_for(0.9), 1);
        assert_eq!(base_slot_for(0.1), 10);
    }

    #[test]
    fn tone_thresholds_are_strict() {
        assert_eq!(Tone::of(0.7), Tone::Medium);
        assert_eq!(Tone::of(0.700_000_1), Tone::Vibrant);
        assert_eq!(Tone::of(0.3), Tone::Muted);
        assert_eq!(Tone::of(0.300_000_1), Tone::Medium);
        assert_eq!(Tone::of(0.0), Tone::Muted);
        assert_eq!(Tone::of(1.0), Tone::Vibrant);
    }

    #[test]
    fn base_slot_middle_band() {
        assert_eq!(base_slot_for(0.745_098), 3);
        assert_eq!(base_slot_for(0.541_176), 5);
        assert_eq!(base_slot_for(0.3), 8);
    }

    #[test]
    fn purple_seed_sits_in_upper_bright_range() {
        let p = generate_palette("#9b87f5").unwrap();
        assert!(p.base_slot() <= 3);
        assert_eq!(p[p.base_slot()].to_hex(), "#9b87f5");
    }

    // ── Known ramps ─────────────────────────────────────────────────

    #[test]
    fn vibrant_purple_ramp() {
        let p = generate_palette("#9b87f5").unwrap();
        assert_eq!(
            hexes(&p),
            [
                "#ece9f9", "#d3cbfa", "#ac9cf6", "#9b87f5", "#431ded", "#2d0eb9",
                "#220a8d", "#1a086b", "#13054f", "#0f0635", "#090421", "#060317",
            ]
        );
        assert_eq!(p.base_slot(), 3);
    }

    #[test]
    fn muted_purple_ramp() {
        let p = generate_palette("#7E69AB").unwrap();
        assert_eq!(
            hexes(&p),
            [
                "#c1b7d7", "#b5a8ce", "#9b8abe", "#907eb7", "#8774b1", "#7e69ab",
                "#4f4071", "#372c4f", "#271f37", "#1b1625", "#100d16", "#0c0a10",
            ]
        );
        assert_eq!(p.base_slot(), 5);
    }

    #[test]
    fn near_black_gray_ramp() {
        let p = generate_palette("#1a1a1a").unwrap();
        assert_eq!(p.base_slot(), 10);
        assert_eq!(p[2].to_hex(), "#3f3f3f");
        assert_eq!(p[11].to_hex(), "#0d0d0d");
    }

    #[test]
    fn gray_seed_stays_gray() {
        let p = generate_palette("#808080").unwrap();
        for c in p.iter() {
            assert!(c.r == c.g && c.g == c.b, "not gray: {c}");
        }
    }

    // ── Structure ───────────────────────────────────────────────────

    #[test]
    fn seed_held_exactly_once() {
        for seed in ["#9b87f5", "#7e69ab", "#33c3f0", "#ff0000", "#0d0d0d", "#fafafa"] {
            let color = Color::hex(seed).unwrap();
            let p = Palette::generate(color);
            assert_eq!(p.iter().filter(|&c| c == color).count(), 1, "{seed}");
            assert_eq!(p.seed(), color);
        }
    }

    #[test]
    fn very_light_seed_takes_slot_zero() {
        let p = generate_palette("#fafafa").unwrap();
        assert_eq!(p.base_slot(), 0);
        assert_eq!(p[0].to_hex(), "#fafafa");
    }

    #[test]
    fn very_dark_seed_takes_last_slot() {
        let p = generate_palette("#0d0d0d").unwrap();
        assert_eq!(p.base_slot(), 11);
        assert_eq!(p[11].to_hex(), "#0d0d0d");
    }

    #[test]
    fn deterministic() {
        let a = generate_palette("#33c3f0").unwrap();
        let b = generate_palette("#33C3F0").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_seed_is_rejected() {
        assert!(generate_palette("#abc").is_err());
        assert!(generate_palette("purple").is_err());
    }

    #[test]
    fn with_slot_keeps_base_index() {
        let p = generate_palette("#9b87f5").unwrap();
        let snapped = p.with_slot(3, Color::rgb(0x33, 0xc3, 0xf0));
        assert_eq!(snapped.base_slot(), 3);
        assert_eq!(snapped[3].to_hex(), "#33c3f0");
        assert_eq!(snapped[2], p[2]);
    }

    #[test]
    fn get_past_end_is_none() {
        let p = generate_palette("#9b87f5").unwrap();
        assert_eq!(p.get(11), Some(p[11]));
        assert_eq!(p.get(12), None);
    }
}
