//! Sample site generator.
//!
//! Writes a complete site directory the viewer can open out of the box: the
//! `folio.json` manifest, the three content documents, and the placeholder
//! assets the manifest references (so the preloader has real files to warm).
//!
//! Usage: `folio-sitegen [output-dir]` (defaults to `./site`).

use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

// 1x1 transparent PNG, used for every placeholder image.
const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0xDA, 0x63, 0x64,
    0x60, 0xF8, 0x5F, 0x0F, 0x00, 0x02, 0x87, 0x01, 0x80, 0xEB, 0x47, 0xBA, 0x92, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

const PLACEHOLDER_CSS: &str = "\
/* Palette tokens mirrored by the viewer's built-in themes. */
:root {
    --accent-rgb: 200, 29, 37;
}
";

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("site"));

    write_site(&out_dir)?;
    println!("Sample site written to {}", out_dir.display());
    Ok(())
}

fn write_site(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir.join("styles"))
        .with_context(|| format!("failed to create {}", dir.display()))?;
    fs::create_dir_all(dir.join("assets/logos"))?;

    write_json(&dir.join("folio.json"), &manifest())?;
    write_json(&dir.join("certifications.json"), &certifications())?;
    write_json(&dir.join("education.json"), &education())?;
    write_json(&dir.join("skills.json"), &skills())?;

    fs::write(dir.join("styles/main.css"), PLACEHOLDER_CSS)?;
    fs::write(dir.join("assets/favicon.png"), PLACEHOLDER_PNG)?;
    fs::write(dir.join("assets/portrait.png"), PLACEHOLDER_PNG)?;
    for logo in ["rust", "kotlin", "typescript", "postgres", "linux", "figma"] {
        fs::write(dir.join(format!("assets/logos/{}.png", logo)), PLACEHOLDER_PNG)?;
    }

    Ok(())
}

fn write_json(path: &Path, value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn manifest() -> serde_json::Value {
    json!({
        "title": "Avery Quinn — Portfolio",
        "owner": "Avery Quinn",
        "roles": [
            "Student",
            "Beginner Android-Dev",
            "Full-Stack Dev",
            "Creative Designer",
            "Linux Enthusiast"
        ],
        "about": [
            "I build small tools, break them, and write about what I learned.",
            "Currently studying computer science and contributing to open source on weekends."
        ],
        "github_user": "octocat",
        "assets": {
            "stylesheets": [
                "styles/main.css",
                "https://fonts.googleapis.com/css2?family=Inter&display=swap"
            ],
            "icon": "assets/favicon.png",
            "images": ["assets/portrait.png"]
        }
    })
}

fn certifications() -> serde_json::Value {
    json!({
        "certifications": [
            {
                "title": "Certified Kubernetes Administrator",
                "issuer": "CNCF",
                "date": "2024-03",
                "description": "Cluster setup, workloads, networking, and troubleshooting."
            },
            {
                "title": "AWS Cloud Practitioner",
                "issuer": "Amazon Web Services",
                "date": "2023-09",
                "description": "Cloud fundamentals, core services, and pricing models."
            }
        ]
    })
}

fn education() -> serde_json::Value {
    json!({
        "education": [
            {
                "degree": "BSc Computer Science",
                "institution": "State University",
                "description": "Focus on systems programming and distributed computing."
            },
            {
                "degree": "High School Diploma",
                "institution": "Central High",
                "description": "STEM track with an extracurricular robotics team."
            }
        ]
    })
}

fn skills() -> serde_json::Value {
    json!({
        "skills": [
            {
                "category": "Languages",
                "items": [
                    { "name": "Rust", "logo": "assets/logos/rust.png" },
                    { "name": "Kotlin", "logo": "assets/logos/kotlin.png" },
                    { "name": "TypeScript", "logo": "assets/logos/typescript.png" }
                ]
            },
            {
                "category": "Tools",
                "items": [
                    { "name": "PostgreSQL", "logo": "assets/logos/postgres.png" },
                    { "name": "Linux", "logo": "assets/logos/linux.png" },
                    { "name": "Figma", "logo": "assets/logos/figma.png" }
                ]
            }
        ]
    })
}
