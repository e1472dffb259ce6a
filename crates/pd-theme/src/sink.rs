// SPDX-License-Identifier: MIT

//! The UI boundary: where a derived theme turns into side effects.
//!
//! Derivation is pure; applying a theme is not. Everything that writes
//! theme colors somewhere (a stylesheet, a document root, a test buffer)
//! goes through [`ThemeSink`], and nothing else in the engine writes at all.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::io::{self, Write};

use crate::theme::{Theme, ThemeAssignment};

/// Receives complete themes.
///
/// `apply` always gets a whole theme. Implementations write every role on
/// each call instead of diffing, so a sink can never hold a mix of two
/// derivations.
pub trait ThemeSink {
    type Error;

    /// Publish `theme`.
    ///
    /// # Errors
    ///
    /// Implementation-defined; I/O sinks report write failures.
    fn apply(&mut self, theme: &Theme) -> Result<(), Self::Error>;
}

// ---------------------------------------------------------------------------
// CssWriter
// ---------------------------------------------------------------------------

/// Writes each theme as a CSS rule of custom properties.
///
/// ```text
/// :root {
///   --background-color: #d3cbfa;
///   ...
/// }
/// ```
#[derive(Debug)]
pub struct CssWriter<W> {
    out: W,
    selector: String,
}

impl<W: Write> CssWriter<W> {
    /// Writer targeting `:root`.
    pub fn new(out: W) -> Self {
        Self::with_selector(out, ":root")
    }

    pub fn with_selector(out: W, selector: &str) -> Self {
        Self {
            out,
            selector: selector.to_string(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ThemeSink for CssWriter<W> {
    type Error = io::Error;

    fn apply(&mut self, theme: &Theme) -> io::Result<()> {
        self.out
            .write_all(css_rule(&self.selector, &theme.assignment).as_bytes())?;
        self.out.flush()
    }
}

/// Render `assignment` as a CSS rule for `selector`.
#[must_use]
pub fn css_rule(selector: &str, assignment: &ThemeAssignment) -> String {
    let mut css = format!("{selector} {{\n");
    for (name, value) in assignment.css_variables() {
        css.push_str("  ");
        css.push_str(name);
        css.push_str(": ");
        css.push_str(&value);
        css.push_str(";\n");
    }
    css.push_str("}\n");
    css
}

// ---------------------------------------------------------------------------
// CssVariables
// ---------------------------------------------------------------------------

/// In-memory custom-property table, the shape a document root's style
/// declaration has. Useful for embedding and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssVariables {
    vars: BTreeMap<&'static str, String>,
    applied: usize,
}

impl CssVariables {
    /// Current value of a custom property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Number of themes applied so far.
    #[must_use]
    pub const fn applied(&self) -> usize {
        self.applied
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.vars.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

impl ThemeSink for CssVariables {
    type Error = Infallible;

    fn apply(&mut self, theme: &Theme) -> Result<(), Infallible> {
        self.vars.extend(theme.assignment.css_variables());
        self.applied += 1;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use pretty_assertions::assert_eq;

    fn default_theme() -> Theme {
        Theme::derive(&builtin::DEFAULT)
    }

    #[test]
    fn css_rule_lists_every_role() {
        let css = css_rule(":root", &default_theme().assignment);
        assert_eq!(
            css,
            ":root {\n  \
             --background-color: #d3cbfa;\n  \
             --card-color: #ece9f9;\n  \
             --table-color: #ac9cf6;\n  \
             --outline-color: #431ded;\n  \
             --highlight-color: #7e69ab;\n  \
             --highlight-hover: #4f4071;\n  \
             --highlight-darker: #372c4f;\n  \
             --highlight-foreground: #ffffff;\n\
             }\n"
        );
    }

    #[test]
    fn css_writer_appends_rules() {
        let mut writer = CssWriter::with_selector(Vec::new(), ".dashboard");
        writer.apply(&default_theme()).unwrap();
        writer.apply(&default_theme()).unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(out.matches(".dashboard {").count(), 2);
        assert_eq!(out.matches("--table-color: #ac9cf6;").count(), 2);
    }

    #[test]
    fn css_variables_hold_latest_theme() {
        let mut vars = CssVariables::default();
        vars.apply(&default_theme()).unwrap();
        assert_eq!(vars.iter().count(), 8);
        assert_eq!(vars.get("--outline-color"), Some("#431ded"));
        assert_eq!(vars.get("--nope"), None);
    }
}
