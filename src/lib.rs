pub mod content;
pub mod github;
pub mod preload;
pub mod site;
pub mod theme;

// Export content models
pub use content::{
    Certification, EducationEntry, SkillGroup, SkillItem,
    load_certifications, load_education, load_skills,
    parse_certifications, parse_education, parse_skills,
};

// Export repository listing
pub use github::{
    Repo, fetch_repos, fetch_user_repos, parse_repos, rank_repos,
    repos_endpoint, MAX_LISTED_REPOS,
};

// Export preloading
pub use preload::{
    build_preload_plan, PreloadReport, PreloadResource, Preloader,
    ResourceOutcome, ResourceRole, ResourceTarget, DEFAULT_RESOURCE_TIMEOUT,
};

// Export site manifest
pub use site::{Section, SiteManifest, MANIFEST_FILE};

// Export theme support
pub use theme::{Theme, ThemeColors, hex_to_color32, with_alpha};
