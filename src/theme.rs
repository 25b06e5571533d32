//! Theme support module for the Folio viewer
//!
//! This module provides the light/dark theming system for the portfolio page.
//! Each theme carries a full color palette that is applied to egui visuals and
//! also drives the matrix background animation's glyph and fade colors.
//!
//! # Examples
//!
//! ```
//! use folio::theme::Theme;
//!
//! let theme = Theme::from_preference(Some("light"), None);
//! assert_eq!(theme, Theme::Light);
//! assert_eq!(theme.toggled(), Theme::Dark);
//! ```

use egui::Color32;

/// The two visual modes of the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// Complete color palette for a theme, covering all UI elements
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub card_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub heading: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
    pub link: Color32,

    // Accent (drives the nav highlight and the matrix rain)
    pub accent: Color32,

    // Status colors
    pub error: Color32,
    pub warning: Color32,
}

impl Theme {
    /// Storage string form of the theme (`"light"` or `"dark"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a stored preference string.
    pub fn from_str(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Resolves the initial theme from a stored preference and the platform's
    /// scheme hint: stored value first, then the hint, then dark.
    pub fn from_preference(stored: Option<&str>, system_hint: Option<Theme>) -> Theme {
        stored
            .and_then(Theme::from_str)
            .or(system_hint)
            .unwrap_or(Theme::Dark)
    }

    /// The opposite mode.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The color palette for this theme.
    pub fn colors(&self) -> ThemeColors {
        match self {
            Theme::Light => light_colors(),
            Theme::Dark => dark_colors(),
        }
    }

    /// Glyph color for the matrix background: the accent with the
    /// theme-specific alpha (light themes get a slightly dimmer rain).
    pub fn rain_glyph_color(&self) -> Color32 {
        let accent = self.colors().accent;
        match self {
            Theme::Light => with_alpha(accent, 217), // 0.85
            Theme::Dark => with_alpha(accent, 242),  // 0.95
        }
    }

    /// Per-tick fade tint for the matrix background trail.
    pub fn rain_fade_color(&self) -> Color32 {
        match self {
            Theme::Light => Color32::from_rgba_unmultiplied(255, 255, 255, 5),
            Theme::Dark => Color32::from_rgba_unmultiplied(0, 0, 0, 13),
        }
    }

    /// Applies the theme's colors to egui visuals.
    ///
    /// Idempotent: applying the same theme twice leaves the visuals unchanged.
    pub fn apply_to_visuals(&self, visuals: &mut egui::Visuals) {
        let colors = self.colors();

        // Override background colors
        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.card_background;
        visuals.faint_bg_color = colors.hover;

        // Override text colors
        visuals.override_text_color = Some(colors.text);

        // Override selection
        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        // Override widget colors
        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        // Override hyperlink
        visuals.hyperlink_color = colors.link;

        // Override error/warning colors
        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }

    /// Base visuals for this theme, before palette overrides.
    pub fn base_visuals(&self) -> egui::Visuals {
        let mut visuals = match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        };
        self.apply_to_visuals(&mut visuals);
        visuals
    }
}

/// Creates the light palette
fn light_colors() -> ThemeColors {
    ThemeColors {
        // Background colors
        background: Color32::from_rgb(250, 250, 250),
        panel_background: Color32::from_rgb(244, 244, 245),
        card_background: Color32::from_rgb(255, 255, 255),

        // Foreground colors
        text: Color32::from_rgb(24, 24, 27),
        text_dim: Color32::from_rgb(113, 113, 122),
        heading: Color32::from_rgb(9, 9, 11),

        // Interactive colors
        selection: Color32::from_rgb(254, 226, 226),
        hover: Color32::from_rgb(228, 228, 231),
        border: Color32::from_rgb(212, 212, 216),
        link: Color32::from_rgb(153, 27, 27),

        // Accent (same red in both modes, matching the site's --accent-rgb)
        accent: Color32::from_rgb(200, 29, 37),

        // Status colors
        error: Color32::from_rgb(185, 28, 28),
        warning: Color32::from_rgb(180, 83, 9),
    }
}

/// Creates the dark palette
fn dark_colors() -> ThemeColors {
    ThemeColors {
        // Background colors
        background: hex_to_color32("#09090b"),
        panel_background: hex_to_color32("#101013"),
        card_background: hex_to_color32("#18181b"),

        // Foreground colors
        text: hex_to_color32("#e4e4e7"),
        text_dim: hex_to_color32("#a1a1aa"),
        heading: hex_to_color32("#fafafa"),

        // Interactive colors
        selection: hex_to_color32("#3f1d1d"),
        hover: hex_to_color32("#27272a"),
        border: hex_to_color32("#3f3f46"),
        link: hex_to_color32("#f87171"),

        // Accent
        accent: Color32::from_rgb(200, 29, 37),

        // Status colors
        error: hex_to_color32("#ef4444"),
        warning: hex_to_color32("#f59e0b"),
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_resolution_order() {
        // Stored value wins over the hint
        assert_eq!(
            Theme::from_preference(Some("dark"), Some(Theme::Light)),
            Theme::Dark
        );
        // No stored value: the hint decides
        assert_eq!(Theme::from_preference(None, Some(Theme::Light)), Theme::Light);
        // Nothing at all: dark
        assert_eq!(Theme::from_preference(None, None), Theme::Dark);
        // Garbage in storage falls through to the hint
        assert_eq!(
            Theme::from_preference(Some("sepia"), Some(Theme::Light)),
            Theme::Light
        );
    }

    #[test]
    fn test_toggle_is_an_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_storage_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_str("mauve"), None);
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#ff0000"), Color32::from_rgb(255, 0, 0));
        assert_eq!(hex_to_color32("09090b"), Color32::from_rgb(9, 9, 11));
        assert_eq!(hex_to_color32("bogus"), Color32::from_rgb(0, 0, 0));
    }
}
