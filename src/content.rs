//! Content document models for the portfolio sections.
//!
//! Three of the page's sections are populated from static JSON documents in
//! the site directory: certifications, education, and skills. Each document
//! is a top-level object wrapping a named array of item objects; the parse
//! functions here unwrap that envelope and hand the items to the renderer.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<SkillItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    /// Site-relative path to the skill's logo image.
    pub logo: String,
}

// Document envelopes: each JSON file wraps its items in a named array.

#[derive(Debug, Serialize, Deserialize)]
pub struct CertificationsDoc {
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EducationDoc {
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SkillsDoc {
    pub skills: Vec<SkillGroup>,
}

fn parse_doc<D: DeserializeOwned>(json: &str, what: &str) -> Result<D> {
    serde_json::from_str(json).with_context(|| format!("failed to parse {} document", what))
}

fn load_doc<D: DeserializeOwned>(path: &Path, what: &str) -> Result<D> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {} document from {}", what, path.display()))?;
    parse_doc(&json, what)
}

/// Parses a certifications document from its JSON text.
pub fn parse_certifications(json: &str) -> Result<Vec<Certification>> {
    Ok(parse_doc::<CertificationsDoc>(json, "certifications")?.certifications)
}

/// Parses an education document from its JSON text.
pub fn parse_education(json: &str) -> Result<Vec<EducationEntry>> {
    Ok(parse_doc::<EducationDoc>(json, "education")?.education)
}

/// Parses a skills document from its JSON text.
pub fn parse_skills(json: &str) -> Result<Vec<SkillGroup>> {
    Ok(parse_doc::<SkillsDoc>(json, "skills")?.skills)
}

/// Loads and parses the certifications document at `path`.
pub fn load_certifications(path: &Path) -> Result<Vec<Certification>> {
    Ok(load_doc::<CertificationsDoc>(path, "certifications")?.certifications)
}

/// Loads and parses the education document at `path`.
pub fn load_education(path: &Path) -> Result<Vec<EducationEntry>> {
    Ok(load_doc::<EducationDoc>(path, "education")?.education)
}

/// Loads and parses the skills document at `path`.
pub fn load_skills(path: &Path) -> Result<Vec<SkillGroup>> {
    Ok(load_doc::<SkillsDoc>(path, "skills")?.skills)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_certifications() {
        let json = r#"{
            "certifications": [
                {
                    "title": "Certified Kubernetes Administrator",
                    "issuer": "CNCF",
                    "date": "2024-03",
                    "description": "Cluster administration and troubleshooting."
                }
            ]
        }"#;
        let certs = parse_certifications(json).unwrap();
        assert_eq!(certs.len(), 1);
        assert_eq!(certs[0].title, "Certified Kubernetes Administrator");
        assert_eq!(certs[0].issuer, "CNCF");
    }

    #[test]
    fn test_parse_skills_nested_items() {
        let json = r#"{
            "skills": [
                {
                    "category": "Languages",
                    "items": [
                        { "name": "Rust", "logo": "assets/logos/rust.png" },
                        { "name": "Kotlin", "logo": "assets/logos/kotlin.png" }
                    ]
                }
            ]
        }"#;
        let skills = parse_skills(json).unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].category, "Languages");
        assert_eq!(skills[0].items.len(), 2);
        assert_eq!(skills[0].items[1].name, "Kotlin");
    }

    #[test]
    fn test_parse_rejects_wrong_envelope() {
        // An education document is not a skills document
        let json = r#"{ "education": [] }"#;
        assert!(parse_skills(json).is_err());
    }
}
