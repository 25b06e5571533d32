//! Section panel rendering
//!
//! Renders the page body: one block per section, each populated from its
//! own content state. Every fetched section renders exactly one of three
//! shapes (a loading row, its items, or an inline error row), so a failure
//! in one section never changes how the others draw.

use crate::app::AppState;
use crate::domain::scroll_spy::SectionExtent;
use crate::state::SectionContent;
use crate::utils::format_star_count;
use eframe::egui;
use egui::{Rect, RichText};
use folio::theme::ThemeColors;
use folio::{Certification, EducationEntry, Repo, Section, SkillGroup};

const CARD_WIDTH: f32 = 280.0;
const SECTION_GAP: f32 = 36.0;

/// Renders all sections into the scroll area and reports their vertical
/// extents for the scroll-spy. Also performs the smooth scroll a nav click
/// requested on a previous frame.
pub fn render_sections(ui: &mut egui::Ui, state: &mut AppState) -> Vec<SectionExtent> {
    let pending_scroll = state.nav.take_pending_scroll();
    let nav_offset = state.nav.nav_offset();
    let colors = state.theme.current().colors();

    let mut extents = Vec::with_capacity(Section::ALL.len());

    for section in Section::ALL {
        let top = ui.cursor().top();

        ui.add_space(SECTION_GAP);
        ui.heading(RichText::new(section.title()).size(26.0).color(colors.heading));
        ui.add_space(10.0);
        render_section_body(ui, state, section, &colors);

        let bottom = ui.cursor().top();
        extents.push(SectionExtent { section, top, bottom });

        if pending_scroll == Some(section) {
            // Align the section's top nav_offset below the viewport top.
            let target_y = top - nav_offset;
            let target = Rect::from_min_max(
                egui::pos2(ui.max_rect().left(), target_y),
                egui::pos2(ui.max_rect().right(), target_y),
            );
            ui.scroll_to_rect(target, Some(egui::Align::TOP));
        }
    }

    // Breathing room so the last section can reach the viewport top.
    ui.add_space(160.0);

    extents
}

fn render_section_body(
    ui: &mut egui::Ui,
    state: &AppState,
    section: Section,
    colors: &ThemeColors,
) {
    match section {
        Section::About => render_about(ui, state, colors),
        Section::Projects => render_fetched(ui, &state.content.repos, section, colors, render_repos),
        Section::Certifications => render_fetched(
            ui,
            &state.content.certifications,
            section,
            colors,
            render_certifications,
        ),
        Section::Education => render_fetched(
            ui,
            &state.content.education,
            section,
            colors,
            render_education,
        ),
        Section::Skills => {
            render_fetched(ui, &state.content.skills, section, colors, render_skills)
        }
    }
}

/// Shared loading / error / items shape for the fetched sections.
fn render_fetched<T>(
    ui: &mut egui::Ui,
    content: &SectionContent<T>,
    section: Section,
    colors: &ThemeColors,
    render_items: fn(&mut egui::Ui, &[T], &ThemeColors),
) {
    match content {
        SectionContent::Loading => {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new().color(colors.accent));
                ui.label(RichText::new("Loading…").color(colors.text_dim));
            });
        }
        SectionContent::Failed(message) => {
            ui.colored_label(
                colors.error,
                format!(
                    "Error loading {}. Please try again later.",
                    section.title().to_lowercase()
                ),
            )
            .on_hover_text(message);
        }
        SectionContent::Ready(items) if items.is_empty() => {
            ui.label(RichText::new("Nothing here yet.").color(colors.text_dim));
        }
        SectionContent::Ready(items) => render_items(ui, items, colors),
    }
}

fn render_about(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) {
    let Some(manifest) = &state.manifest else {
        ui.label(RichText::new("No site loaded.").color(colors.text_dim));
        return;
    };

    ui.label(RichText::new(&manifest.owner).size(34.0).strong().color(colors.heading));
    if !manifest.roles.is_empty() {
        ui.label(RichText::new(manifest.roles.join("  ·  ")).color(colors.accent));
    }
    ui.add_space(8.0);
    for paragraph in &manifest.about {
        ui.label(RichText::new(paragraph).color(colors.text));
        ui.add_space(4.0);
    }
}

fn render_repos(ui: &mut egui::Ui, repos: &[Repo], colors: &ThemeColors) {
    ui.horizontal_wrapped(|ui| {
        for repo in repos {
            card(ui, colors, |ui| {
                ui.label(RichText::new(&repo.name).strong().size(16.0).color(colors.heading));
                ui.label(
                    RichText::new(repo.description_or_placeholder()).color(colors.text_dim),
                );
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(repo.language_or_placeholder()).color(colors.text_dim));
                    ui.label(format!("⭐ {}", format_star_count(repo.stargazers_count)));
                });
                ui.hyperlink_to("View on GitHub", &repo.html_url);
            });
        }
    });
}

fn render_certifications(ui: &mut egui::Ui, certs: &[Certification], colors: &ThemeColors) {
    for cert in certs {
        card(ui, colors, |ui| {
            ui.label(RichText::new(&cert.title).strong().size(16.0).color(colors.heading));
            ui.label(RichText::new(format!("Issuer: {}", cert.issuer)).color(colors.text_dim));
            ui.label(RichText::new(format!("Date: {}", cert.date)).color(colors.text_dim));
            ui.label(&cert.description);
        });
        ui.add_space(8.0);
    }
}

fn render_education(ui: &mut egui::Ui, entries: &[EducationEntry], colors: &ThemeColors) {
    for entry in entries {
        card(ui, colors, |ui| {
            ui.label(RichText::new(&entry.degree).strong().size(16.0).color(colors.heading));
            ui.label(RichText::new(&entry.institution).color(colors.text_dim));
            ui.label(&entry.description);
        });
        ui.add_space(8.0);
    }
}

fn render_skills(ui: &mut egui::Ui, groups: &[SkillGroup], colors: &ThemeColors) {
    ui.horizontal_wrapped(|ui| {
        for group in groups {
            card(ui, colors, |ui| {
                ui.label(RichText::new(&group.category).strong().size(16.0).color(colors.heading));
                ui.add_space(4.0);
                for item in &group.items {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("•").color(colors.accent));
                        ui.label(&item.name);
                    });
                }
            });
        }
    });
}

/// One content card, matching the page's card look in both themes.
fn card(ui: &mut egui::Ui, colors: &ThemeColors, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style())
        .fill(colors.card_background)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(add_contents);
        });
}
