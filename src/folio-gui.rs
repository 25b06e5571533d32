//! Folio Portfolio Viewer GUI Application
//!
//! This module provides the desktop viewer for a portfolio site directory
//! using the egui framework. The viewer features:
//! - A blocking loader gate with a hard safety timeout
//! - Best-effort resource preloading that gates feature initialization
//! - Independently loading content sections (repositories from the GitHub
//!   API, certifications/education/skills from site-local JSON)
//! - A matrix rain background parameterized by the active theme
//! - Light/dark theming with a persisted preference
//! - Scroll-spy navigation highlighting
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Core business logic (scroll-spy geometry)
//! - `io/` - Background content loading
//! - `rendering/` - The matrix rain state machine and painter
//! - `state/` - State components (theme, content, gate, nav)
//! - `ui/` - UI panel rendering and orchestration
//! - `utils/` - Formatting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

mod app;
mod domain;
mod io;
mod rendering;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, InitPhase, ThemeCoordinator};
use folio::Preloader;
use io::ContentLoader;
use rendering::matrix_rain::TICK_INTERVAL;
use rendering::MatrixRain;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the viewer.
fn main() -> eframe::Result {
    env_logger::init();

    // Site directory from the command line, else the default resolution
    let site_root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_site_root);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 860.0])
            .with_title("Folio"),
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        options,
        Box::new(move |cc| Ok(Box::new(FolioApp::new(cc, site_root)))),
    )
}

/// Default site directory: `./site` when it holds a manifest, else the
/// per-user data directory.
fn default_site_root() -> PathBuf {
    let local = PathBuf::from("site");
    if local.join(folio::MANIFEST_FILE).exists() {
        return local;
    }
    dirs::data_dir()
        .map(|d| d.join("folio").join("site"))
        .unwrap_or(local)
}

/// The Folio viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` owns startup sequencing and content handling
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct FolioApp {
    /// Centralized application state
    state: AppState,
    /// Best-effort resource preloader
    preloader: Preloader,
    /// Background content loader
    content_loader: ContentLoader,
    /// Matrix rain background animation
    rain: MatrixRain,
    /// Whether the startup sequence has begun (first frame)
    started: bool,
    /// Theme epoch last written to storage; the preference is persisted on
    /// every change, never before (a pre-init write would shadow the
    /// platform hint on first run)
    persisted_epoch: u64,
}

impl FolioApp {
    /// Creates a new viewer with the theme resolved from persistent storage
    /// and the platform's scheme hint.
    fn new(cc: &eframe::CreationContext, site_root: PathBuf) -> Self {
        let system_hint = ThemeCoordinator::system_hint(&cc.egui_ctx);
        let theme = ThemeCoordinator::load_theme_from_storage(cc.storage, system_hint);

        Self {
            state: AppState::with_theme(site_root, theme),
            preloader: Preloader::new(),
            content_loader: ContentLoader::new(),
            rain: MatrixRain::new(),
            started: false,
            persisted_epoch: 0,
        }
    }

    /// Handles panel interactions by delegating to the coordinators.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, now: Instant) {
        match interaction {
            PanelInteraction::SectionClicked(section) => {
                ApplicationCoordinator::handle_nav_click(&mut self.state, section, now);
            }
            PanelInteraction::ThemeToggleClicked => {
                ThemeCoordinator::toggle_theme(&mut self.state);
            }
            PanelInteraction::OpenSiteRequested(path) => {
                ApplicationCoordinator::open_site(
                    &mut self.state,
                    &mut self.preloader,
                    &mut self.rain,
                    path,
                    now,
                );
            }
        }
    }
}

impl eframe::App for FolioApp {
    /// Called when the app is being shut down - ensures the preference is saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        // Before theme initialization the active theme is provisional;
        // writing it would shadow the platform hint on the next run.
        if self.state.init != InitPhase::Preloading {
            ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current());
        }
    }

    /// Main update loop.
    ///
    /// 1. Begin startup on the first frame (gate up, preloader running)
    /// 2. Advance the startup phase machine and the gate timers
    /// 3. Apply content-loader results
    /// 4. Apply the theme and render all panels
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let now = Instant::now();

        if !self.started {
            self.started = true;
            ApplicationCoordinator::begin_startup(&mut self.state, &mut self.preloader, now);
        }

        let was_preloading = self.state.init == InitPhase::Preloading;
        ApplicationCoordinator::advance_startup(
            &mut self.state,
            &mut self.preloader,
            &mut self.content_loader,
            &mut self.rain,
            ctx,
            now,
        );
        if was_preloading && self.state.init == InitPhase::FeaturesStarted {
            // Theme store initialization is sequenced after preload
            // settlement; by now the platform hint is live.
            let hint = ThemeCoordinator::system_hint(ctx);
            let theme = ThemeCoordinator::load_theme_from_storage(frame.storage(), hint);
            self.state.theme.set_theme(theme);
        }
        ApplicationCoordinator::apply_content_updates(&mut self.state, &mut self.content_loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) =
            PanelManager::render_all_panels(ctx, &mut self.state, &mut self.rain, now)
        {
            self.handle_panel_interaction(interaction, now);
        }

        // Persist the preference on every change (crash resilience)
        if self.state.theme.epoch() != self.persisted_epoch {
            self.persisted_epoch = self.state.theme.epoch();
            if let Some(storage) = frame.storage_mut() {
                ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current());
            }
        }

        // Keep frames coming while the gate or the animation needs them
        if self.state.gate.is_visible() || self.rain.is_running() {
            ctx.request_repaint_after(TICK_INTERVAL);
        }
    }
}
