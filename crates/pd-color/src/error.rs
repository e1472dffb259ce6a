// SPDX-License-Identifier: MIT

//! Errors raised while reading colors from user input.

use thiserror::Error;

/// A color string could not be understood.
///
/// The engine never substitutes a fallback color: a malformed value is the
/// caller's problem to surface (or to ignore while the user is still typing).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input is not a six-digit hex color (`#rrggbb` or `rrggbb`).
    #[error("invalid color format: {input:?} (expected #rrggbb)")]
    InvalidColorFormat { input: String },
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        Self::InvalidColorFormat {
            input: input.to_string(),
        }
    }
}

/// Result type for color parsing.
pub type Result<T> = std::result::Result<T, ColorError>;
