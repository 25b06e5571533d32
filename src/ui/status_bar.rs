//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying memory usage, the site directory,
//! and each section's load status.

use crate::app::AppState;
use crate::state::SectionContent;
use crate::utils::{format_memory_mb, get_current_memory_mb};
use eframe::egui;
use egui::RichText;

fn status_of<T>(content: &SectionContent<T>) -> String {
    match content {
        SectionContent::Loading => "…".to_string(),
        SectionContent::Ready(items) => items.len().to_string(),
        SectionContent::Failed(_) => "error".to_string(),
    }
}

/// Renders the status panel at the bottom of the window
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        ui.label(RichText::new("|").strong());
        ui.label(format!("Site: {}", state.site_root.display()));

        ui.label(RichText::new("|").strong());
        let content = &state.content;
        ui.label(format!(
            "Projects: {} · Certifications: {} · Education: {} · Skills: {}",
            status_of(&content.repos),
            status_of(&content.certifications),
            status_of(&content.education),
            status_of(&content.skills),
        ));

        if state.gate.is_loaded() {
            ui.label(RichText::new("|").strong());
            ui.label("loaded");
        }
    });
}
