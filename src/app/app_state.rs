//! Centralized application state for the Folio viewer.
//!
//! This module composes focused state components that each manage a specific
//! aspect of the application's state:
//! - Keeps invariants local within each component
//! - Allows borrow-checker friendly access to different state aspects
//! - Provides intent-revealing methods for state mutations

use crate::state::{ContentState, GateState, NavState, ThemeState};
use folio::{SiteManifest, Theme};
use std::path::PathBuf;

/// Startup phase of the page.
///
/// The only hard ordering contract in the system: preloading settles before
/// the theme initializes and any feature starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitPhase {
    /// Preloader running; the gate is up and no feature has started.
    Preloading,
    /// Preload settled; content loaders, the rain, and the scroll-spy run.
    FeaturesStarted,
    /// Gate dismissed; steady state.
    Done,
}

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Theme and change-epoch state
    pub theme: ThemeState,

    /// Per-section content state
    pub content: ContentState,

    /// Loader overlay state
    pub gate: GateState,

    /// Navigation highlighter state
    pub nav: NavState,

    // ===== Top-Level State =====
    /// Directory of the site being viewed
    pub site_root: PathBuf,

    /// The loaded site manifest (None until startup, or when loading failed)
    pub manifest: Option<SiteManifest>,

    /// Current startup phase
    pub init: InitPhase,

    /// Site-level error to display (manifest missing or unreadable)
    pub error_message: Option<String>,
}

impl AppState {
    /// Creates application state for a site directory with the default theme.
    pub fn new(site_root: PathBuf) -> Self {
        Self::with_theme(site_root, Theme::Dark)
    }

    /// Creates application state with a specific theme loaded from storage.
    pub fn with_theme(site_root: PathBuf, theme: Theme) -> Self {
        Self {
            theme: ThemeState::with_theme(theme),
            content: ContentState::new(),
            gate: GateState::new(),
            nav: NavState::new(),
            site_root,
            manifest: None,
            init: InitPhase::Preloading,
            error_message: None,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Resets everything tied to the current site when another site
    /// directory is opened. The theme preference survives.
    pub fn reset_for_site(&mut self, site_root: PathBuf) {
        self.site_root = site_root;
        self.manifest = None;
        self.content.reset();
        self.nav = NavState::new();
        self.gate = GateState::new();
        self.init = InitPhase::Preloading;
        self.error_message = None;
    }
}
