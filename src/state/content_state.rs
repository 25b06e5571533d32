//! Per-section content state.
//!
//! Every content section loads independently; a failure in one section must
//! never leak into another. Each section therefore owns its own
//! [`SectionContent`] and there is no shared failure state.

use folio::{Certification, EducationEntry, Repo, SkillGroup};

/// Fetch state of one content section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent<T> {
    /// Fetch in flight (or not yet started); the section shows its spinner.
    Loading,
    /// Items ready to render.
    Ready(Vec<T>),
    /// Fetch or parse failed; the section shows an inline error row.
    Failed(String),
}

impl<T> SectionContent<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, SectionContent::Loading)
    }

    /// The error message, when the section failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            SectionContent::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The loaded items, when the section is ready.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            SectionContent::Ready(items) => Some(items),
            _ => None,
        }
    }
}

/// Content state for all fetched sections.
pub struct ContentState {
    pub repos: SectionContent<Repo>,
    pub certifications: SectionContent<Certification>,
    pub education: SectionContent<EducationEntry>,
    pub skills: SectionContent<SkillGroup>,
}

impl Default for ContentState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentState {
    /// Creates content state with every section loading.
    pub fn new() -> Self {
        Self {
            repos: SectionContent::Loading,
            certifications: SectionContent::Loading,
            education: SectionContent::Loading,
            skills: SectionContent::Loading,
        }
    }

    /// Puts every section back into its loading state (site re-open).
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Marks every section failed with the same message. Used when the site
    /// manifest itself cannot be loaded and no fetches will run.
    pub fn fail_all(&mut self, message: &str) {
        self.repos = SectionContent::Failed(message.to_string());
        self.certifications = SectionContent::Failed(message.to_string());
        self.education = SectionContent::Failed(message.to_string());
        self.skills = SectionContent::Failed(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_fail_independently() {
        let mut state = ContentState::new();
        state.certifications = SectionContent::Failed("boom".to_string());
        state.education = SectionContent::Ready(vec![EducationEntry {
            degree: "BSc".to_string(),
            institution: "Uni".to_string(),
            description: "CS".to_string(),
        }]);

        assert_eq!(state.certifications.error(), Some("boom"));
        assert_eq!(state.education.items().map(|i| i.len()), Some(1));
        // The untouched sections are still loading, not failed.
        assert!(state.repos.is_loading());
        assert!(state.skills.is_loading());
    }
}
