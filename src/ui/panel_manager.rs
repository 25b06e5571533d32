//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (nav bar, page body, status bar, loader
//! overlay) and manages the per-frame scroll-spy observation and nav-offset
//! re-derivation.

use crate::app::AppState;
use crate::domain::scroll_spy;
use crate::rendering::MatrixRain;
use crate::ui::{loader_overlay, nav_bar, section_panels, status_bar};
use eframe::egui;
use std::time::Instant;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// A nav link was clicked
    SectionClicked(folio::Section),
    /// The theme toggle was clicked
    ThemeToggleClicked,
    /// User picked another site directory
    OpenSiteRequested(std::path::PathBuf),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        rain: &mut MatrixRain,
        now: Instant,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Nav bar at the top
        let nav_panel = egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            if let Some(nav_interaction) = nav_bar::render_nav_bar(ui, state) {
                interaction = Some(match nav_interaction {
                    nav_bar::NavInteraction::SectionClicked(section) => {
                        PanelInteraction::SectionClicked(section)
                    }
                    nav_bar::NavInteraction::ThemeToggleClicked => {
                        PanelInteraction::ThemeToggleClicked
                    }
                    nav_bar::NavInteraction::OpenSiteRequested(path) => {
                        PanelInteraction::OpenSiteRequested(path)
                    }
                });
            }
        });
        let nav_height = nav_panel.response.rect.height();

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Debounced nav-offset re-derivation on window resize
        let screen = ctx.content_rect();
        state.nav.note_viewport_size(screen.width(), screen.height(), now);
        if state.nav.resize_due(now) {
            state.nav.set_nav_offset(scroll_spy::nav_offset(nav_height));
        }

        // Page body: the matrix rain painted behind a transparent scroll area
        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                let canvas = ui.max_rect();

                rain.sync_theme(state.theme.current(), state.theme.epoch());
                let mut rng = rand::thread_rng();
                rain.resize(canvas.width(), canvas.height(), &mut rng);
                rain.advance(now, &mut rng);
                if rain.is_running() {
                    rain.paint(ui.painter(), canvas);
                } else {
                    ui.painter().rect_filled(
                        canvas,
                        0.0,
                        state.theme.current().colors().background,
                    );
                }

                let viewport_top = canvas.top();
                let viewport_bottom = canvas.bottom();

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        egui::Frame::default()
                            .inner_margin(egui::Margin::symmetric(24, 0))
                            .show(ui, |ui| {
                                let extents = section_panels::render_sections(ui, state);
                                let active = scroll_spy::most_prominent(
                                    &extents,
                                    viewport_top,
                                    viewport_bottom,
                                    state.nav.nav_offset(),
                                );
                                state.nav.observe(active, now);
                            });
                    });
            });

        // Loader overlay covers everything while the gate is up
        loader_overlay::render_loader_overlay(ctx, state);

        interaction
    }
}
