// SPDX-License-Identifier: MIT

//! Theme derivation — palette slots assigned to dashboard roles.
//!
//! A `Theme` is everything the UI needs after the user touches a color
//! picker: eight role colors for the CSS custom properties, the palettes
//! they came from (for the swatch strip), and the two contrast verdicts
//! the settings panel warns about. It is rebuilt from scratch on every
//! input change and never edited in place.

use std::fmt;

use pd_color::{Color, ColorError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::contrast::{ContrastVerdict, evaluate};
use crate::matching::snap;
use crate::palette::{PALETTE_LEN, Palette};

// ---------------------------------------------------------------------------
// Slot layout
// ---------------------------------------------------------------------------

const CARD_SLOT: usize = 0;
const BACKGROUND_SLOT: usize = 1;
const TABLE_SLOT: usize = 2;
const OUTLINE_SLOT: usize = 4;

const HIGHLIGHT_SLOT: usize = 5;
const HOVER_SLOT: usize = 6;
const DARKER_SLOT: usize = 7;

/// Text drawn on the table surface.
pub const TABLE_TEXT: Color = Color::BLACK;

/// Text drawn on the highlight color.
pub const HIGHLIGHT_FOREGROUND: Color = Color::WHITE;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A semantic color slot in the dashboard's stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Background,
    Card,
    Table,
    Outline,
    Highlight,
    HighlightHover,
    HighlightDarker,
    HighlightForeground,
}

impl Role {
    /// Every role, in stylesheet order.
    pub const ALL: [Self; 8] = [
        Self::Background,
        Self::Card,
        Self::Table,
        Self::Outline,
        Self::Highlight,
        Self::HighlightHover,
        Self::HighlightDarker,
        Self::HighlightForeground,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Card => "card",
            Self::Table => "table",
            Self::Outline => "outline",
            Self::Highlight => "highlight",
            Self::HighlightHover => "highlight-hover",
            Self::HighlightDarker => "highlight-darker",
            Self::HighlightForeground => "highlight-foreground",
        }
    }

    /// Name of the CSS custom property the UI reads this role from.
    #[must_use]
    pub const fn css_var(self) -> &'static str {
        match self {
            Self::Background => "--background-color",
            Self::Card => "--card-color",
            Self::Table => "--table-color",
            Self::Outline => "--outline-color",
            Self::Highlight => "--highlight-color",
            Self::HighlightHover => "--highlight-hover",
            Self::HighlightDarker => "--highlight-darker",
            Self::HighlightForeground => "--highlight-foreground",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ThemeAssignment
// ---------------------------------------------------------------------------

/// One color per [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThemeAssignment {
    pub background: Color,
    pub card: Color,
    pub table: Color,
    pub outline: Color,
    pub highlight: Color,
    pub highlight_hover: Color,
    pub highlight_darker: Color,
    pub highlight_foreground: Color,
}

impl ThemeAssignment {
    #[must_use]
    pub const fn get(&self, role: Role) -> Color {
        match role {
            Role::Background => self.background,
            Role::Card => self.card,
            Role::Table => self.table,
            Role::Outline => self.outline,
            Role::Highlight => self.highlight,
            Role::HighlightHover => self.highlight_hover,
            Role::HighlightDarker => self.highlight_darker,
            Role::HighlightForeground => self.highlight_foreground,
        }
    }

    /// `(role, color)` pairs in stylesheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Color)> + '_ {
        Role::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    /// `(custom property, #rrggbb)` pairs in stylesheet order.
    #[must_use]
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        self.iter().map(|(role, color)| (role.css_var(), color.to_hex())).collect()
    }
}

// ---------------------------------------------------------------------------
// ThemeInputs
// ---------------------------------------------------------------------------

/// What the user controls: two colors and the color-match toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeInputs {
    pub seed: Color,
    pub highlight: Color,
    #[serde(default)]
    pub color_match: bool,
}

impl ThemeInputs {
    #[must_use]
    pub const fn new(seed: Color, highlight: Color, color_match: bool) -> Self {
        Self { seed, highlight, color_match }
    }

    /// Parse both colors from hex.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for the first malformed
    /// color.
    pub fn from_hex(seed: &str, highlight: &str, color_match: bool) -> Result<Self, ColorError> {
        Ok(Self::new(Color::hex(seed)?, Color::hex(highlight)?, color_match))
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A fully derived theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Theme {
    /// Inputs this theme was derived from.
    pub inputs: ThemeInputs,
    /// Role colors, ready for the stylesheet.
    pub assignment: ThemeAssignment,
    /// Seed palette. With color match on, the matched slot holds the
    /// highlight color.
    pub palette: Palette,
    /// Palette generated from the highlight color. `None` with color match
    /// on, since the highlight then lives inside the seed palette.
    pub highlight_palette: Option<Palette>,
    /// Slot where the seed was placed, for the swatch strip's marker.
    pub base_slot: usize,
    /// Slot the highlight was snapped into, with color match on.
    pub matched_slot: Option<usize>,
    /// Black text on the table surface.
    pub table_contrast: ContrastVerdict,
    /// White text on the highlight color.
    pub highlight_contrast: ContrastVerdict,
}

/// The three highlight-family colors.
struct HighlightRoles {
    highlight: Color,
    hover: Color,
    darker: Color,
}

impl Theme {
    /// Derive a complete theme.
    #[must_use]
    pub fn derive(inputs: &ThemeInputs) -> Self {
        let seed_palette = Palette::generate(inputs.seed);

        let card = seed_palette[CARD_SLOT];
        let background = seed_palette[BACKGROUND_SLOT];
        let table = seed_palette[TABLE_SLOT];
        let outline = seed_palette[OUTLINE_SLOT];

        let (palette, highlight_palette, matched_slot, roles) = if inputs.color_match {
            let (snapped, idx) = snap(&seed_palette, inputs.highlight);
            let roles = matched_roles(&snapped, idx);
            (snapped, None, Some(idx), roles)
        } else {
            let hp = Palette::generate(inputs.highlight);
            let roles = HighlightRoles {
                highlight: hp[HIGHLIGHT_SLOT],
                hover: hp[HOVER_SLOT],
                darker: hp[DARKER_SLOT],
            };
            (seed_palette, Some(hp), None, roles)
        };

        let assignment = ThemeAssignment {
            background,
            card,
            table,
            outline,
            highlight: roles.highlight,
            highlight_hover: roles.hover,
            highlight_darker: roles.darker,
            highlight_foreground: HIGHLIGHT_FOREGROUND,
        };

        let table_contrast = evaluate(TABLE_TEXT, table);
        let highlight_contrast = evaluate(HIGHLIGHT_FOREGROUND, roles.highlight);

        debug!(
            seed = %inputs.seed,
            highlight = %inputs.highlight,
            color_match = inputs.color_match,
            matched_slot = ?matched_slot,
            table_ratio = table_contrast.ratio,
            highlight_ratio = highlight_contrast.ratio,
            "derived theme"
        );

        Self {
            inputs: *inputs,
            assignment,
            palette,
            highlight_palette,
            base_slot: seed_palette.base_slot(),
            matched_slot,
            table_contrast,
            highlight_contrast,
        }
    }

    /// Black text on the table surface is below AA.
    #[must_use]
    pub const fn has_table_contrast_issue(&self) -> bool {
        !self.table_contrast.passes
    }

    /// White text on the highlight is below AA.
    #[must_use]
    pub const fn has_highlight_contrast_issue(&self) -> bool {
        !self.highlight_contrast.passes
    }

    /// Both checked pairings pass.
    #[must_use]
    pub const fn is_accessible(&self) -> bool {
        self.table_contrast.passes && self.highlight_contrast.passes
    }

    /// Log a warning for each pairing that fails AA.
    pub fn warn_contrast_issues(&self) {
        if self.has_table_contrast_issue() {
            warn!(
                table = %self.assignment.table,
                ratio = self.table_contrast.ratio,
                "black text on table surface is below WCAG AA"
            );
        }
        if self.has_highlight_contrast_issue() {
            warn!(
                highlight = %self.assignment.highlight,
                ratio = self.highlight_contrast.ratio,
                "white text on highlight is below WCAG AA"
            );
        }
    }
}

/// Highlight roles when the highlight was snapped into slot `idx`.
///
/// Hover is one step lighter, clamped at slot 0. Darker is slot 7; two past
/// the match, then the last slot, only stand in if slot 7 is missing.
fn matched_roles(palette: &Palette, idx: usize) -> HighlightRoles {
    let hover = idx.saturating_sub(1);
    let darker = palette
        .get(DARKER_SLOT)
        .or_else(|| palette.get(idx + 2))
        .unwrap_or(palette[PALETTE_LEN - 1]);

    HighlightRoles {
        highlight: palette[idx],
        hover: palette[hover],
        darker,
    }
}

/// Derive a theme from a seed, a highlight and the color-match toggle.
#[must_use]
pub fn derive_theme(seed: Color, highlight: Color, color_match: bool) -> Theme {
    Theme::derive(&ThemeInputs::new(seed, highlight, color_match))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::generate_palette;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Color {
        Color::hex(s).unwrap()
    }

    fn purple(highlight: &str, color_match: bool) -> Theme {
        derive_theme(hex("#9b87f5"), hex(highlight), color_match)
    }

    // ── Surfaces ────────────────────────────────────────────────────

    #[test]
    fn surfaces_come_from_fixed_slots() {
        let t = purple("#7E69AB", false);
        let a = t.assignment;
        assert_eq!(a.card.to_hex(), "#ece9f9");
        assert_eq!(a.background.to_hex(), "#d3cbfa");
        assert_eq!(a.table.to_hex(), "#ac9cf6");
        assert_eq!(a.outline.to_hex(), "#431ded");
        assert_eq!(a.highlight_foreground, Color::WHITE);
    }

    #[test]
    fn surfaces_ignore_color_match() {
        let off = purple("#33C3F0", false).assignment;
        let on = purple("#33C3F0", true).assignment;
        assert_eq!(off.card, on.card);
        assert_eq!(off.background, on.background);
        assert_eq!(off.table, on.table);
        assert_eq!(off.outline, on.outline);
    }

    #[test]
    fn base_slot_reported() {
        assert_eq!(purple("#7E69AB", false).base_slot, 3);
        // Still the seed's slot after the highlight is snapped over it.
        assert_eq!(purple("#33C3F0", true).base_slot, 3);
    }

    // ── Table contrast ──────────────────────────────────────────────

    #[test]
    fn light_table_passes() {
        let t = purple("#7E69AB", false);
        assert!(!t.has_table_contrast_issue());
        assert!(t.table_contrast.ratio > 8.0);
    }

    #[test]
    fn dark_seed_flags_table() {
        let t = derive_theme(hex("#1a1a1a"), hex("#7e69ab"), false);
        assert_eq!(t.assignment.table.to_hex(), "#3f3f3f");
        assert!(t.has_table_contrast_issue());
        assert!(!t.is_accessible());
    }

    // ── Independent highlight palette ───────────────────────────────

    #[test]
    fn highlight_from_its_own_palette() {
        let t = purple("#7E69AB", false);
        let hp = generate_palette("#7E69AB").unwrap();
        assert_eq!(t.highlight_palette, Some(hp));
        assert_eq!(t.assignment.highlight, hp[5]);
        assert_eq!(t.assignment.highlight.to_hex(), "#7e69ab");
        assert_eq!(t.assignment.highlight_hover.to_hex(), "#4f4071");
        assert_eq!(t.assignment.highlight_darker.to_hex(), "#372c4f");
        assert_eq!(t.matched_slot, None);
        assert_eq!(t.palette, generate_palette("#9b87f5").unwrap());
    }

    #[test]
    fn muted_purple_highlight_passes() {
        let t = purple("#7E69AB", false);
        assert!(!t.has_highlight_contrast_issue());
        assert!(t.is_accessible());
    }

    #[test]
    fn light_blue_highlight_slot_five_fails() {
        // #33c3f0 sits at slot 5 of its own palette; white on it is ~2:1.
        let t = purple("#33C3F0", false);
        assert_eq!(t.assignment.highlight.to_hex(), "#33c3f0");
        assert!(t.has_highlight_contrast_issue());
    }

    // ── Color match ─────────────────────────────────────────────────

    #[test]
    fn color_match_snaps_into_seed_palette() {
        let t = purple("#33C3F0", true);
        assert_eq!(t.matched_slot, Some(3));
        assert_eq!(t.palette[3].to_hex(), "#33c3f0");
        assert_eq!(t.highlight_palette, None);

        let a = t.assignment;
        assert_eq!(a.highlight.to_hex(), "#33c3f0");
        assert_eq!(a.highlight_hover.to_hex(), "#ac9cf6");
        assert_eq!(a.highlight_darker.to_hex(), "#1a086b");
        assert!(t.has_highlight_contrast_issue());
    }

    #[test]
    fn color_match_hover_clamps_at_top() {
        let t = purple("#ffffff", true);
        assert_eq!(t.matched_slot, Some(0));
        assert_eq!(t.assignment.highlight_hover, Color::WHITE);
        assert_eq!(t.assignment.highlight_darker.to_hex(), "#1a086b");
    }

    #[test]
    fn color_match_darker_is_slot_seven_for_every_match() {
        let p = generate_palette("#9b87f5").unwrap();
        for k in 0..PALETTE_LEN {
            let t = derive_theme(p.seed(), p[k], true);
            assert_eq!(t.matched_slot, Some(k), "slot {k}");
            assert_eq!(t.assignment.highlight_darker.to_hex(), "#1a086b", "slot {k}");
        }
    }

    #[test]
    fn color_match_past_slot_seven() {
        // Exact member of slot 8.
        let t = purple("#13054f", true);
        assert_eq!(t.matched_slot, Some(8));
        assert_eq!(t.assignment.highlight_hover.to_hex(), "#1a086b");
        assert_eq!(t.assignment.highlight_darker.to_hex(), "#1a086b");
    }

    #[test]
    fn color_match_black_lands_on_last_slot() {
        let t = purple("#000000", true);
        assert_eq!(t.matched_slot, Some(11));
        assert_eq!(t.assignment.highlight, Color::BLACK);
        assert_eq!(t.assignment.highlight_darker.to_hex(), "#1a086b");
        assert_eq!(t.assignment.highlight_hover.to_hex(), "#090421");
    }

    // ── Whole-theme behavior ────────────────────────────────────────

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(purple("#33C3F0", true), purple("#33c3f0", true));
        assert_eq!(purple("#7E69AB", false), purple("#7e69ab", false));
    }

    #[test]
    fn css_variables_in_order() {
        let vars = purple("#7E69AB", false).assignment.css_variables();
        let names: Vec<_> = vars.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "--background-color",
                "--card-color",
                "--table-color",
                "--outline-color",
                "--highlight-color",
                "--highlight-hover",
                "--highlight-darker",
                "--highlight-foreground",
            ]
        );
        assert_eq!(vars[4].1, "#7e69ab");
        assert_eq!(vars[7].1, "#ffffff");
    }

    #[test]
    fn assignment_get_matches_fields() {
        let a = purple("#7E69AB", false).assignment;
        assert_eq!(a.get(Role::Table), a.table);
        assert_eq!(a.get(Role::HighlightHover), a.highlight_hover);
        assert_eq!(a.iter().count(), Role::ALL.len());
    }

    #[test]
    fn assignment_serializes_kebab_case() {
        let a = purple("#7E69AB", false).assignment;
        let json = serde_json::to_value(a).unwrap();
        assert_eq!(json["highlight-hover"], "#4f4071");
        assert_eq!(json["highlight-foreground"], "#ffffff");
    }

    #[test]
    fn inputs_from_hex_reports_bad_color() {
        assert!(ThemeInputs::from_hex("#9b87f5", "#7e69ab", false).is_ok());
        let err = ThemeInputs::from_hex("#9b87f5", "#7e6", true).unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidColorFormat {
                input: "#7e6".to_string()
            }
        );
    }
}
