//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the Folio viewer:
//! - Nav bar (brand, section links, theme toggle, site picker)
//! - Section panels (the page body: about, projects, certifications,
//!   education, skills, each with its loading/error presentation)
//! - Loader overlay (the blocking gate shown during startup)
//! - Status bar (memory usage and per-section load status)
//! - Panel manager (panel orchestration and layout)

pub mod loader_overlay;
pub mod nav_bar;
pub mod panel_manager;
pub mod section_panels;
pub mod status_bar;
