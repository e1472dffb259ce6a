// SPDX-License-Identifier: MIT
//
// pd-color — color primitives for the pivotdeck theming engine.
//
// Colors enter the system as `#rrggbb` strings typed or picked in the
// dashboard's settings panel and leave it as the same hex form, written
// into CSS custom properties. In between, the palette generator works in
// HSL and the contrast checks work in linearized sRGB. This crate owns the
// representation and every conversion; it knows nothing about palettes,
// roles, or contrast thresholds.

pub mod color;
pub mod error;

pub use color::{Color, Hsl};
pub use error::ColorError;
