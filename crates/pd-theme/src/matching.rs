// SPDX-License-Identifier: MIT

//! Color match — snapping a highlight color into an existing palette.
//!
//! With color match on, the dashboard does not build a second palette for
//! the highlight color. It finds the seed-palette slot nearest to the
//! highlight (straight-line distance in 8-bit RGB), overwrites that slot
//! with the exact highlight value, and derives hover/darker shades from
//! the slot's neighbors.

use pd_color::Color;
use tracing::trace;

use crate::palette::Palette;

/// Index of the slot nearest to `target` in raw RGB space.
///
/// Linear scan with a strict `<`, so the lowest index wins a tie.
#[must_use]
pub fn closest_slot(palette: &Palette, target: Color) -> usize {
    let mut best_idx = 0;
    let mut best_dist = f64::MAX;

    for (idx, color) in palette.iter().enumerate() {
        let dist = color.distance(target);
        if dist < best_dist {
            best_dist = dist;
            best_idx = idx;
        }
    }

    trace!(color = %target, slot = best_idx, distance = best_dist, "closest palette slot");
    best_idx
}

/// Replace the slot nearest to `target` with `target` itself.
///
/// Returns the new palette and the index that was overwritten.
#[must_use]
pub fn snap(palette: &Palette, target: Color) -> (Palette, usize) {
    let idx = closest_slot(palette, target);
    (palette.with_slot(idx, target), idx)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
