// SPDX-License-Identifier: MIT

//! Named preset inputs: ready-to-use seed/highlight combinations.

use pd_color::Color;

use crate::theme::{Theme, ThemeInputs};

/// The dashboard's stock look: lavender surfaces, muted purple highlight.
pub const DEFAULT: ThemeInputs =
    ThemeInputs::new(Color::rgb(0x9b, 0x87, 0xf5), Color::rgb(0x7e, 0x69, 0xab), false);

/// Look up builtin inputs by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_inputs(name: &str) -> Option<ThemeInputs> {
    Some(match name {
        "default" | "lavender" => DEFAULT,
        "ocean" => ThemeInputs::new(
            Color::rgb(0x0e, 0xa5, 0xe9),
            Color::rgb(0x03, 0x69, 0xa1),
            false,
        ),
        "forest" => ThemeInputs::new(
            Color::rgb(0x22, 0xc5, 0x5e),
            Color::rgb(0x15, 0x80, 0x3d),
            false,
        ),
        "sunset" => ThemeInputs::new(
            Color::rgb(0xf9, 0x73, 0x16),
            Color::rgb(0xe1, 0x1d, 0x48),
            true,
        ),
        "slate" => ThemeInputs::new(
            Color::rgb(0x64, 0x74, 0x8b),
            Color::rgb(0x33, 0x41, 0x55),
            false,
        ),
        // White and black seeds take the fixed gray ramps.
        "paper" => ThemeInputs::new(Color::WHITE, Color::rgb(0x25, 0x63, 0xeb), false),
        "ink" => ThemeInputs::new(Color::BLACK, Color::rgb(0x33, 0x33, 0x33), true),
        _ => return None,
    })
}

/// Derive the theme for a builtin preset.
#[must_use]
pub fn builtin_theme(name: &str) -> Option<Theme> {
    builtin_inputs(name).map(|inputs| Theme::derive(&inputs))
}

/// List all available builtin preset names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &[
        "default", "lavender", "ocean", "forest", "sunset", "slate", "paper", "ink",
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLACK_RAMP, WHITE_RAMP};
    use pretty_assertions::assert_eq;

    #[test]
    fn all_builtins_resolve() {
        for name in builtin_names() {
            assert!(builtin_theme(name).is_some(), "Builtin '{name}' failed to resolve");
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(builtin_inputs("nonexistent").is_none());
        assert!(builtin_theme("Default").is_none());
    }

    #[test]
    fn default_is_lavender() {
        assert_eq!(builtin_inputs("default"), Some(DEFAULT));
        assert_eq!(builtin_inputs("lavender"), Some(DEFAULT));
        assert_eq!(DEFAULT.seed.to_hex(), "#9b87f5");
        assert_eq!(DEFAULT.highlight.to_hex(), "#7e69ab");
        assert!(!DEFAULT.color_match);
    }

    #[test]
    fn default_theme_is_accessible() {
        let theme = builtin_theme("default").unwrap();
        assert!(theme.is_accessible());
        assert_eq!(theme.assignment.card.to_hex(), "#ece9f9");
    }

    #[test]
    fn paper_uses_white_ramp() {
        let theme = builtin_theme("paper").unwrap();
        assert_eq!(theme.palette.slots(), &WHITE_RAMP);
        assert_eq!(theme.base_slot, 0);
    }

    #[test]
    fn ink_snaps_into_black_ramp() {
        let theme = builtin_theme("ink").unwrap();
        assert_eq!(theme.base_slot, 11);
        // #333333 is nearest #303030.
        assert_eq!(theme.matched_slot, Some(8));
        assert_eq!(theme.assignment.highlight_hover, BLACK_RAMP[7]);
    }

    #[test]
    fn each_builtin_is_distinct() {
        let names = builtin_names();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                if [*a, *b] == ["default", "lavender"] {
                    continue;
                }
                assert_ne!(builtin_inputs(a), builtin_inputs(b), "{a} == {b}");
            }
        }
    }
}
