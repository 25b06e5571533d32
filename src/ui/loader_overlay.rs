//! Loader overlay UI rendering
//!
//! The full-window gate shown while the page initializes. It covers every
//! panel, swallows pointer input, and disappears when the gate state hides,
//! either on normal completion or when the safety deadline fires.

use crate::app::AppState;
use eframe::egui;
use egui::{Align2, FontId, Rect};

/// Renders the loader overlay while the gate is visible.
pub fn render_loader_overlay(ctx: &egui::Context, state: &AppState) {
    if !state.gate.is_visible() {
        return;
    }

    let colors = state.theme.current().colors();
    let screen = ctx.content_rect();

    egui::Area::new(egui::Id::new("site_loader"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.painter().rect_filled(screen, 0.0, colors.background);

            let title = state
                .manifest
                .as_ref()
                .map(|m| m.title.as_str())
                .unwrap_or("Portfolio");
            ui.painter().text(
                screen.center() - egui::vec2(0.0, 48.0),
                Align2::CENTER_CENTER,
                title,
                FontId::proportional(22.0),
                colors.heading,
            );
            ui.painter().text(
                screen.center() + egui::vec2(0.0, 48.0),
                Align2::CENTER_CENTER,
                "Loading…",
                FontId::proportional(15.0),
                colors.text_dim,
            );

            ui.put(
                Rect::from_center_size(screen.center(), egui::vec2(48.0, 48.0)),
                egui::Spinner::new().size(40.0).color(colors.accent),
            );

            // The gate blocks the page: swallow pointer input underneath.
            ui.allocate_rect(screen, egui::Sense::click_and_drag());
        });
}
