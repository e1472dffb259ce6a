// SPDX-License-Identifier: MIT

//! # pd-theme — seed-color theming engine for pivotdeck
//!
//! Turns the one color a user picks in the dashboard's style panel into a
//! full UI palette, assigns palette slots to the dashboard's surfaces, and
//! checks that text placed on those surfaces stays readable.
//!
//! # Architecture
//!
//! ```text
//! seed color                       highlight color + color-match flag
//!     │                                      │
//!     ▼                                      │
//! palette.rs:  12-slot tonal ramp            │
//!     │                                      ▼
//!     ├──────────────────────────▶ matching.rs: nearest slot, snap
//!     ▼                                      │
//! theme.rs:    surfaces + highlight roles ◀──┘
//!     │        contrast.rs verdicts (WCAG AA)
//!     ▼
//! state.rs:    live inputs, atomic re-derivation
//!     │
//!     ▼
//! sink.rs:     CSS custom properties at the UI boundary
//! ```
//!
//! Everything above `state.rs` is pure: the same inputs always produce the
//! same bytes, so callers may cache palettes by seed.

// Mathematical code casts small loop indices to floats and back.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Hue/saturation/lightness names are inherently similar.
#![allow(clippy::similar_names)]

pub mod builtin;
pub mod config;
pub mod contrast;
pub mod matching;
pub mod palette;
pub mod sink;
pub mod state;
pub mod theme;

pub use contrast::{ContrastVerdict, WcagLevel};
pub use palette::{PALETTE_LEN, Palette};
pub use state::ThemeState;
pub use theme::{Role, Theme, ThemeAssignment, ThemeInputs};
