//! Background loading of the content sections.
//!
//! Each fetched section (repositories, certifications, education, skills)
//! loads on its own thread, independently of the others; results come back
//! to the UI thread over a single mpsc channel that is drained once per
//! frame. A failed section reports its error and nothing else; there is no
//! shared failure state between sections.

use eframe::egui;
use folio::{self, Section};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

/// Loaded items for one section.
pub enum SectionData {
    Repos(Vec<folio::Repo>),
    Certifications(Vec<folio::Certification>),
    Education(Vec<folio::EducationEntry>),
    Skills(Vec<folio::SkillGroup>),
}

/// One terminal message per section job.
pub struct SectionUpdate {
    pub section: Section,
    pub result: Result<SectionData, String>,
}

/// Spawns and joins the per-section loading jobs.
pub struct ContentLoader {
    /// Channel receiver shared by all in-flight jobs
    receiver: Option<Receiver<SectionUpdate>>,
}

impl ContentLoader {
    /// Creates a content loader with no active jobs.
    pub fn new() -> Self {
        Self { receiver: None }
    }

    /// Starts all four section jobs.
    ///
    /// The GUI stays responsive; call `drain()` once per frame to apply
    /// whatever has arrived. Starting again replaces the channel, so updates
    /// from a previous site's jobs are discarded.
    pub fn start_all(&mut self, site_root: &Path, github_user: &str, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);

        spawn_job(&sender, ctx, Section::Projects, {
            let user = github_user.to_string();
            move || folio::fetch_user_repos(&user).map(folio::rank_repos).map(SectionData::Repos)
        });

        spawn_job(&sender, ctx, Section::Certifications, {
            let path = document_path(site_root, Section::Certifications);
            move || folio::load_certifications(&path).map(SectionData::Certifications)
        });

        spawn_job(&sender, ctx, Section::Education, {
            let path = document_path(site_root, Section::Education);
            move || folio::load_education(&path).map(SectionData::Education)
        });

        spawn_job(&sender, ctx, Section::Skills, {
            let path = document_path(site_root, Section::Skills);
            move || folio::load_skills(&path).map(SectionData::Skills)
        });
    }

    /// Takes every update that has arrived since the last frame.
    pub fn drain(&mut self) -> Vec<SectionUpdate> {
        let mut updates = Vec::new();
        if let Some(receiver) = &self.receiver {
            while let Ok(update) = receiver.try_recv() {
                updates.push(update);
            }
        }
        updates
    }
}

impl Default for ContentLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn document_path(site_root: &Path, section: Section) -> PathBuf {
    folio::SiteManifest::document_path(site_root, section)
        .expect("section has a content document")
}

/// Runs one fetch job on a background thread and sends its terminal update.
fn spawn_job<F>(sender: &Sender<SectionUpdate>, ctx: &egui::Context, section: Section, job: F)
where
    F: FnOnce() -> anyhow::Result<SectionData> + Send + 'static,
{
    let sender = sender.clone();
    let ctx = ctx.clone();
    thread::spawn(move || {
        let result = job().map_err(|e| format!("{:#}", e));
        // The receiver may be gone if the site was re-opened mid-flight.
        let _ = sender.send(SectionUpdate { section, result });
        ctx.request_repaint();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_when_idle_is_empty() {
        let mut loader = ContentLoader::new();
        assert!(loader.drain().is_empty());
    }

    #[test]
    fn test_document_paths_exist_for_file_backed_sections() {
        let root = Path::new("/srv/site");
        assert_eq!(
            document_path(root, Section::Skills),
            root.join("skills.json")
        );
    }
}
