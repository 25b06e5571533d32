//! Application-level coordination and workflow management.
//!
//! Owns the startup sequence: the loader gate goes up, the preloader runs,
//! and only once preloading settles do the content loaders, the background
//! animation, and the scroll-spy start: that settlement is the one hard
//! ordering contract in the page. Also applies content-loader results to
//! state and handles re-targeting the viewer at another site directory.

use crate::app::{AppState, InitPhase};
use crate::io::{ContentLoader, SectionData, SectionUpdate};
use crate::rendering::MatrixRain;
use crate::state::SectionContent;
use folio::{build_preload_plan, Preloader, Section, SiteManifest, DEFAULT_RESOURCE_TIMEOUT};
use std::path::PathBuf;
use std::time::Instant;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Begins startup for the current site directory.
    ///
    /// Shows the gate (arming its safety deadline), loads the manifest, and
    /// starts the preloader. A missing or broken manifest still starts an
    /// empty preload run so the startup sequencing stays uniform.
    pub fn begin_startup(state: &mut AppState, preloader: &mut Preloader, now: Instant) {
        state.gate.show(now);
        state.init = InitPhase::Preloading;

        match SiteManifest::load(&state.site_root) {
            Ok(manifest) => {
                let plan = build_preload_plan(&manifest, &state.site_root);
                log::info!(
                    "preloading {} resources for {}",
                    plan.len(),
                    state.site_root.display()
                );
                state.manifest = Some(manifest);
                preloader.start(plan, DEFAULT_RESOURCE_TIMEOUT);
            }
            Err(e) => {
                log::error!("site manifest load failed: {:#}", e);
                state.error_message = Some(format!("Could not load site: {:#}", e));
                preloader.start(Vec::new(), DEFAULT_RESOURCE_TIMEOUT);
            }
        }
    }

    /// Advances the startup phase machine. Called once per frame.
    pub fn advance_startup(
        state: &mut AppState,
        preloader: &mut Preloader,
        content_loader: &mut ContentLoader,
        rain: &mut MatrixRain,
        ctx: &egui::Context,
        now: Instant,
    ) {
        if state.init == InitPhase::Preloading {
            if let Some(report) = preloader.check_completion() {
                log::info!(
                    "preload settled: {}/{} loaded, {} failed, {} timed out in {:?}",
                    report.loaded,
                    report.total,
                    report.failed,
                    report.timed_out,
                    report.elapsed
                );
                Self::start_features(state, content_loader, rain, ctx);
                state.init = InitPhase::FeaturesStarted;
                state.gate.schedule_dismiss(now);
            }
        }

        // The safety deadline runs regardless of which phase stalled.
        state.gate.poll(now);
        if state.init == InitPhase::FeaturesStarted && !state.gate.is_visible() {
            state.init = InitPhase::Done;
        }
    }

    /// Starts every page feature. Only ever called after preload settles.
    fn start_features(
        state: &mut AppState,
        content_loader: &mut ContentLoader,
        rain: &mut MatrixRain,
        ctx: &egui::Context,
    ) {
        if let Some(manifest) = &state.manifest {
            state.content.reset();
            content_loader.start_all(&state.site_root, &manifest.github_user, ctx);
        } else {
            state.content.fail_all("site content unavailable");
        }
        rain.start();
        state.nav.enable();
    }

    /// Applies whatever the content jobs have delivered since last frame.
    pub fn apply_content_updates(state: &mut AppState, content_loader: &mut ContentLoader) {
        for SectionUpdate { section, result } in content_loader.drain() {
            match result {
                Ok(SectionData::Repos(items)) => {
                    state.content.repos = SectionContent::Ready(items);
                }
                Ok(SectionData::Certifications(items)) => {
                    state.content.certifications = SectionContent::Ready(items);
                }
                Ok(SectionData::Education(items)) => {
                    state.content.education = SectionContent::Ready(items);
                }
                Ok(SectionData::Skills(items)) => {
                    state.content.skills = SectionContent::Ready(items);
                }
                Err(message) => {
                    log::error!("loading {} section failed: {}", section.id(), message);
                    Self::fail_section(state, section, message);
                }
            }
        }
    }

    fn fail_section(state: &mut AppState, section: Section, message: String) {
        match section {
            Section::Projects => state.content.repos = SectionContent::Failed(message),
            Section::Certifications => {
                state.content.certifications = SectionContent::Failed(message)
            }
            Section::Education => state.content.education = SectionContent::Failed(message),
            Section::Skills => state.content.skills = SectionContent::Failed(message),
            Section::About => {}
        }
    }

    /// Re-targets the viewer at another site directory and restarts the
    /// startup sequence. The theme preference is kept.
    pub fn open_site(
        state: &mut AppState,
        preloader: &mut Preloader,
        rain: &mut MatrixRain,
        site_root: PathBuf,
        now: Instant,
    ) {
        log::info!("opening site {}", site_root.display());
        rain.stop();
        state.reset_for_site(site_root);
        Self::begin_startup(state, preloader, now);
    }

    /// Handles a nav link click: pin the link and request the smooth scroll.
    pub fn handle_nav_click(state: &mut AppState, section: Section, now: Instant) {
        state.nav.click(section, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_section_leaves_others_untouched() {
        let mut state = AppState::new(PathBuf::from("site"));
        state.content.education = SectionContent::Ready(Vec::new());

        ApplicationCoordinator::fail_section(
            &mut state,
            Section::Certifications,
            "404".to_string(),
        );

        assert_eq!(state.content.certifications.error(), Some("404"));
        assert!(state.content.education.items().is_some());
        assert!(state.content.repos.is_loading());
        assert!(state.content.skills.is_loading());
    }
}
