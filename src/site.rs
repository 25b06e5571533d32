//! Site manifest: the "document" the viewer renders.
//!
//! A site directory holds one `folio.json` manifest describing the page (the
//! owner, the asset references the preloader warms, the GitHub user for the
//! projects section) plus the three content documents and any referenced
//! assets. The manifest plays the role the HTML document plays in a browser:
//! it is the single source the preloader scans for asset references.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the site manifest inside a site directory.
pub const MANIFEST_FILE: &str = "folio.json";

/// The page's sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Projects,
    Certifications,
    Education,
    Skills,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Projects,
        Section::Certifications,
        Section::Education,
        Section::Skills,
    ];

    /// Navigation label for the section.
    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Certifications => "Certifications",
            Section::Education => "Education",
            Section::Skills => "Skills",
        }
    }

    /// Stable identifier, used for egui ids and log lines.
    pub fn id(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
            Section::Education => "education",
            Section::Skills => "skills",
        }
    }

    /// File name of the section's content document, for the sections that
    /// are populated from a site-local JSON file.
    pub fn document_name(&self) -> Option<&'static str> {
        match self {
            Section::Certifications => Some("certifications.json"),
            Section::Education => Some("education.json"),
            Section::Skills => Some("skills.json"),
            Section::About | Section::Projects => None,
        }
    }
}

/// Asset references of the document, scanned by the preloader.
///
/// Paths are site-relative; entries may also be absolute `http(s)` URLs
/// (e.g. a font-provider stylesheet), which the preloader downgrades to a
/// preconnect or skips.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetRefs {
    #[serde(default)]
    pub stylesheets: Vec<String>,
    #[serde(default)]
    pub scripts: Vec<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteManifest {
    /// Window / page title.
    pub title: String,
    /// Display name of the portfolio owner.
    pub owner: String,
    /// Short role lines shown under the owner's name.
    #[serde(default)]
    pub roles: Vec<String>,
    /// About-section paragraphs.
    #[serde(default)]
    pub about: Vec<String>,
    /// GitHub user whose repositories fill the projects section.
    pub github_user: String,
    /// Asset references warmed during preload.
    #[serde(default)]
    pub assets: AssetRefs,
}

impl SiteManifest {
    /// Parses a manifest from its JSON text.
    pub fn parse(json: &str) -> Result<SiteManifest> {
        serde_json::from_str(json).context("failed to parse site manifest")
    }

    /// Loads the manifest of the site directory at `site_root`.
    pub fn load(site_root: &Path) -> Result<SiteManifest> {
        let path = site_root.join(MANIFEST_FILE);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("failed to read site manifest {}", path.display()))?;
        Self::parse(&json)
    }

    /// Path of a section's content document under `site_root`, for sections
    /// backed by a site-local JSON file.
    pub fn document_path(site_root: &Path, section: Section) -> Option<PathBuf> {
        section.document_name().map(|name| site_root.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest_minimal() {
        let json = r#"{
            "title": "Jane Doe — Portfolio",
            "owner": "Jane Doe",
            "github_user": "janedoe"
        }"#;
        let manifest = SiteManifest::parse(json).unwrap();
        assert_eq!(manifest.owner, "Jane Doe");
        assert!(manifest.assets.stylesheets.is_empty());
        assert!(manifest.roles.is_empty());
    }

    #[test]
    fn test_parse_manifest_with_assets() {
        let json = r#"{
            "title": "t",
            "owner": "o",
            "github_user": "u",
            "assets": {
                "stylesheets": ["styles/main.css", "https://fonts.googleapis.com/css2?family=Inter"],
                "icon": "assets/favicon.png",
                "images": ["assets/portrait.jpg"]
            }
        }"#;
        let manifest = SiteManifest::parse(json).unwrap();
        assert_eq!(manifest.assets.stylesheets.len(), 2);
        assert_eq!(manifest.assets.icon.as_deref(), Some("assets/favicon.png"));
    }

    #[test]
    fn test_document_paths() {
        let root = Path::new("/tmp/site");
        assert_eq!(
            SiteManifest::document_path(root, Section::Skills),
            Some(root.join("skills.json"))
        );
        assert_eq!(SiteManifest::document_path(root, Section::Projects), None);
    }

    #[test]
    fn test_sections_in_display_order() {
        assert_eq!(Section::ALL[0], Section::About);
        assert_eq!(Section::ALL[4], Section::Skills);
        assert_eq!(Section::Projects.title(), "Projects");
    }
}
