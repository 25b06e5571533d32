//! Theme management and persistence coordination.
//!
//! Handles theme resolution, application, toggling, and persistent storage
//! across sessions. The stored preference wins over the platform's scheme
//! hint; with neither, the page is dark. Storage absence degrades silently
//! to a session-only theme.

use crate::app::AppState;
use folio::Theme;

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Resolves the startup theme from persistent storage and the
    /// platform's light/dark hint.
    pub fn load_theme_from_storage(
        storage: Option<&dyn eframe::Storage>,
        system_hint: Option<Theme>,
    ) -> Theme {
        let stored = storage.and_then(|s| s.get_string(THEME_KEY));
        Theme::from_preference(stored.as_deref(), system_hint)
    }

    /// Saves the current theme preference to persistent storage.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme: Theme) {
        storage.set_string(THEME_KEY, theme.as_str().to_string());
        storage.flush();
    }

    /// The platform's scheme hint, when the windowing system reports one.
    pub fn system_hint(ctx: &egui::Context) -> Option<Theme> {
        ctx.input(|i| i.raw.system_theme).map(|t| match t {
            egui::Theme::Light => Theme::Light,
            egui::Theme::Dark => Theme::Dark,
        })
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame; applying an unchanged theme is idempotent.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        ctx.set_visuals(state.theme.current().base_visuals());
    }

    /// Flips the active mode. Persistence happens in the app's save path;
    /// the bumped theme epoch notifies the background animation.
    pub fn toggle_theme(state: &mut AppState) -> Theme {
        state.theme.toggle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut storage = MockStorage::new();
        ThemeCoordinator::save_theme_to_storage(&mut storage, Theme::Light);

        let loaded = ThemeCoordinator::load_theme_from_storage(Some(&storage), None);
        assert_eq!(loaded, Theme::Light);
    }

    #[test]
    fn test_missing_storage_falls_back_to_hint_then_dark() {
        assert_eq!(
            ThemeCoordinator::load_theme_from_storage(None, Some(Theme::Light)),
            Theme::Light
        );
        assert_eq!(ThemeCoordinator::load_theme_from_storage(None, None), Theme::Dark);
    }

    #[test]
    fn test_stored_preference_beats_hint() {
        let mut storage = MockStorage::new();
        ThemeCoordinator::save_theme_to_storage(&mut storage, Theme::Dark);
        assert_eq!(
            ThemeCoordinator::load_theme_from_storage(Some(&storage), Some(Theme::Light)),
            Theme::Dark
        );
    }

    #[test]
    fn test_persisted_value_tracks_toggles() {
        let mut storage = MockStorage::new();
        let mut state = AppState::new(std::path::PathBuf::from("site"));

        for _ in 0..3 {
            let theme = ThemeCoordinator::toggle_theme(&mut state);
            ThemeCoordinator::save_theme_to_storage(&mut storage, theme);
            let loaded = ThemeCoordinator::load_theme_from_storage(Some(&storage), None);
            assert_eq!(loaded, state.theme.current());
        }
        // Odd number of toggles from dark lands on light.
        assert_eq!(state.theme.current(), Theme::Light);
    }
}
