//! Nav bar UI rendering
//!
//! Handles the top bar with the brand, section links, theme toggle, and the
//! site directory picker. Below a width threshold the section links collapse
//! into a menu button, which carries its own theme toggle.

use crate::app::AppState;
use eframe::egui;
use egui::RichText;
use folio::{Section, Theme};
use std::path::PathBuf;

/// Width below which the section links collapse into a menu.
const COLLAPSE_WIDTH: f32 = 560.0;

/// Result of user interaction with the nav bar
pub enum NavInteraction {
    /// A section link was clicked
    SectionClicked(Section),
    /// The theme toggle (desktop or menu) was clicked
    ThemeToggleClicked,
    /// User picked another site directory
    OpenSiteRequested(PathBuf),
}

/// Toggle affordance icon: follows the active mode like the original's
/// sun/moon button.
fn theme_toggle_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☀",
        Theme::Dark => "🌙",
    }
}

/// Renders the nav bar.
///
/// # Returns
/// * `Option<NavInteraction>` - User interaction result
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState) -> Option<NavInteraction> {
    let mut interaction = None;
    let theme = state.theme.current();
    let colors = theme.colors();

    ui.horizontal(|ui| {
        let owner = state
            .manifest
            .as_ref()
            .map(|m| m.owner.as_str())
            .unwrap_or("Portfolio");
        ui.label(RichText::new(owner).strong().size(18.0).color(colors.heading));
        ui.separator();

        let narrow = ui.available_width() < COLLAPSE_WIDTH;
        if narrow {
            ui.menu_button("☰", |ui| {
                for section in Section::ALL {
                    let active = state.nav.active() == Some(section);
                    if ui.selectable_label(active, section.title()).clicked() {
                        interaction = Some(NavInteraction::SectionClicked(section));
                    }
                }
                ui.separator();
                let label = format!("{} Switch theme", theme_toggle_icon(theme));
                if ui.button(label).clicked() {
                    interaction = Some(NavInteraction::ThemeToggleClicked);
                }
            });
        } else {
            for section in Section::ALL {
                let active = state.nav.active() == Some(section);
                let text = if active {
                    RichText::new(section.title()).strong().color(colors.accent)
                } else {
                    RichText::new(section.title())
                };
                if ui.selectable_label(active, text).clicked() {
                    interaction = Some(NavInteraction::SectionClicked(section));
                }
            }
        }

        // Push the theme toggle and site picker to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let toggle = ui
                .button(theme_toggle_icon(theme))
                .on_hover_text("Switch theme");
            if toggle.clicked() {
                interaction = Some(NavInteraction::ThemeToggleClicked);
            }

            if !narrow {
                if ui.button("📁 Open Site").clicked() {
                    let mut dialog = rfd::FileDialog::new();
                    if let Ok(cwd) = std::env::current_dir() {
                        dialog = dialog.set_directory(cwd);
                    }
                    if let Some(path) = dialog.pick_folder() {
                        interaction = Some(NavInteraction::OpenSiteRequested(path));
                    }
                }
            }
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(colors.error, err);
    }

    interaction
}
