// SPDX-License-Identifier: MIT

//! Live theme state behind the dashboard's color pickers.
//!
//! The picker fires on every drag step and every keystroke in the hex
//! field, so half the strings it sends are not colors yet. `ThemeState`
//! parses before it touches anything: a bad string returns an error and the
//! current theme stays exactly as it was. A good one re-derives the whole
//! theme and swaps it in at once, so readers never see a seed palette from
//! one input paired with highlight roles from another.

use pd_color::{Color, ColorError};

use crate::builtin;
use crate::sink::ThemeSink;
use crate::theme::{Theme, ThemeInputs};

/// Current picker inputs and the theme derived from them.
#[derive(Debug, Clone)]
pub struct ThemeState {
    theme: Theme,
}

impl ThemeState {
    #[must_use]
    pub fn new(inputs: ThemeInputs) -> Self {
        Self {
            theme: Theme::derive(&inputs),
        }
    }

    #[inline]
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    #[must_use]
    pub const fn inputs(&self) -> &ThemeInputs {
        &self.theme.inputs
    }

    // ── Updates ────────────────────────────────────────────────

    /// Set the seed color from user input.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] and leaves the state
    /// untouched if `hex` is not `#rrggbb`.
    pub fn set_seed(&mut self, hex: &str) -> Result<&Theme, ColorError> {
        let seed = Color::hex(hex)?;
        Ok(self.commit(ThemeInputs { seed, ..self.theme.inputs }))
    }

    /// Set the highlight color from user input.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] and leaves the state
    /// untouched if `hex` is not `#rrggbb`.
    pub fn set_highlight(&mut self, hex: &str) -> Result<&Theme, ColorError> {
        let highlight = Color::hex(hex)?;
        Ok(self.commit(ThemeInputs { highlight, ..self.theme.inputs }))
    }

    /// Turn color match on or off.
    pub fn set_color_match(&mut self, color_match: bool) -> &Theme {
        self.commit(ThemeInputs { color_match, ..self.theme.inputs })
    }

    /// Replace all inputs at once.
    pub fn set_inputs(&mut self, inputs: ThemeInputs) -> &Theme {
        self.commit(inputs)
    }

    fn commit(&mut self, inputs: ThemeInputs) -> &Theme {
        if inputs == self.theme.inputs {
            return &self.theme;
        }

        let theme = Theme::derive(&inputs);
        theme.warn_contrast_issues();

        self.theme = theme;
        &self.theme
    }

    // ── Output ─────────────────────────────────────────────────

    /// Push the current theme through the UI boundary adapter.
    ///
    /// # Errors
    ///
    /// Whatever the sink reports.
    pub fn apply<S: ThemeSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.apply(&self.theme)
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(builtin::DEFAULT)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
