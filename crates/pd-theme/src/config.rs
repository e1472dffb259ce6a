// SPDX-License-Identifier: MIT

//! Theme configuration files.
//!
//! ```toml
//! preset = "ocean"        # optional starting point
//! seed = "#0ea5e9"        # overrides the preset's seed
//! highlight = "#0369a1"
//! color_match = false
//! ```
//!
//! Every field is optional. Resolution starts from the named preset (or the
//! default preset) and then applies the explicit fields on top.

use std::path::{Path, PathBuf};

use pd_color::{Color, ColorError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builtin;
use crate::theme::ThemeInputs;

/// Errors from loading or resolving a theme configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme config")]
    Parse {
        #[from]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("unknown preset {0:?}")]
    UnknownPreset(String),
}

/// Raw, unvalidated configuration. Colors stay strings until
/// [`resolve`](Self::resolve) so a bad value is reported with its text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_match: Option<bool>,
}

impl ThemeConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Layer `overrides` on top of `self`; fields set in `overrides` win.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            preset: overrides.preset.or(self.preset),
            seed: overrides.seed.or(self.seed),
            highlight: overrides.highlight.or(self.highlight),
            color_match: overrides.color_match.or(self.color_match),
        }
    }

    /// Turn the configuration into validated theme inputs.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownPreset`] for an unrecognized preset name,
    /// [`ConfigError::Color`] for a malformed seed or highlight.
    pub fn resolve(&self) -> Result<ThemeInputs, ConfigError> {
        let mut inputs = match self.preset.as_deref() {
            Some(name) => builtin::builtin_inputs(name)
                .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?,
            None => builtin::DEFAULT,
        };

        if let Some(seed) = &self.seed {
            inputs.seed = Color::hex(seed)?;
        }
        if let Some(highlight) = &self.highlight {
            inputs.highlight = Color::hex(highlight)?;
        }
        if let Some(color_match) = self.color_match {
            inputs.color_match = color_match;
        }
        Ok(inputs)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
