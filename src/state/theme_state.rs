//! Theme state management.
//!
//! This module encapsulates the active visual mode and a change epoch that
//! theme-dependent subsystems (the matrix background) watch to know when to
//! recompute derived colors.

use folio::Theme;

/// State related to the active visual theme.
///
/// Responsibilities:
/// - Tracking the current theme
/// - Counting theme changes so observers can cheaply detect them
pub struct ThemeState {
    /// Currently active theme
    current: Theme,
    /// Incremented on every effective theme change
    epoch: u64,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with the default (dark) theme.
    pub fn new() -> Self {
        Self::with_theme(Theme::Dark)
    }

    /// Creates a new theme state with a specific theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            current: theme,
            epoch: 0,
        }
    }

    // ===== Theme Queries =====

    /// Returns the active theme.
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Returns the change epoch. Observers that cache theme-derived values
    /// compare this against their remembered epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    // ===== Theme Mutations =====

    /// Sets the active theme. Setting the already-active theme is a no-op
    /// and does not bump the epoch.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.current != theme {
            self.current = theme;
            self.epoch += 1;
        }
    }

    /// Flips the active mode and returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set_theme(next);
        next
    }
}
