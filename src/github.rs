//! Repository listing for the projects section.
//!
//! Fetches the owner's public repositories from the GitHub REST API and ranks
//! them for display: forks are dropped, the rest are ordered by star count
//! descending, and the list is capped at six entries.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Maximum number of repositories shown in the projects section.
pub const MAX_LISTED_REPOS: usize = 6;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// One repository as read from the listing endpoint.
///
/// Only the fields the page renders are deserialized; everything else in the
/// API response is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub fork: bool,
    pub html_url: String,
}

impl Repo {
    /// Description with the placeholder the page shows for repos without one.
    pub fn description_or_placeholder(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("No description available")
    }

    /// Language with the placeholder for repos GitHub could not classify.
    pub fn language_or_placeholder(&self) -> &str {
        self.language.as_deref().unwrap_or("N/A")
    }
}

/// The repository listing endpoint for a user.
pub fn repos_endpoint(user: &str) -> String {
    format!("https://api.github.com/users/{}/repos", user)
}

/// Parses a repository listing from its JSON text.
pub fn parse_repos(json: &str) -> Result<Vec<Repo>> {
    serde_json::from_str(json).context("failed to parse repository listing")
}

/// Fetches a repository listing from an explicit endpoint URL.
///
/// The GitHub API rejects requests without a User-Agent, so one is always
/// set. The request carries a hard timeout; a slow or unreachable endpoint
/// surfaces as an error, never a hang.
pub fn fetch_repos(endpoint: &str) -> Result<Vec<Repo>> {
    let agent = ureq::AgentBuilder::new()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build();

    let repos = agent
        .get(endpoint)
        .call()
        .with_context(|| format!("repository listing request failed: {}", endpoint))?
        .into_json::<Vec<Repo>>()
        .context("failed to decode repository listing")?;

    Ok(repos)
}

/// Fetches the public repositories of a GitHub user.
pub fn fetch_user_repos(user: &str) -> Result<Vec<Repo>> {
    fetch_repos(&repos_endpoint(user))
}

/// Ranks repositories for display.
///
/// Forks are removed, the remainder is sorted by star count descending with
/// name ascending as the tie-break (so equal-star repos render in a stable
/// order), and the result is truncated to [`MAX_LISTED_REPOS`].
pub fn rank_repos(repos: Vec<Repo>) -> Vec<Repo> {
    let mut ranked: Vec<Repo> = repos.into_iter().filter(|r| !r.fork).collect();
    ranked.sort_by(|a, b| {
        b.stargazers_count
            .cmp(&a.stargazers_count)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(MAX_LISTED_REPOS);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, stars: u64, fork: bool) -> Repo {
        Repo {
            name: name.to_string(),
            description: None,
            language: None,
            stargazers_count: stars,
            fork,
            html_url: format!("https://github.com/someone/{}", name),
        }
    }

    #[test]
    fn test_rank_drops_forks_and_sorts_by_stars() {
        let repos = vec![
            repo("small", 2, false),
            repo("forked", 100, true),
            repo("big", 50, false),
            repo("mid", 10, false),
        ];
        let ranked = rank_repos(repos);
        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["big", "mid", "small"]);
    }

    #[test]
    fn test_rank_caps_at_six() {
        let repos = (0..10).map(|i| repo(&format!("r{}", i), i, false)).collect();
        let ranked = rank_repos(repos);
        assert_eq!(ranked.len(), MAX_LISTED_REPOS);
        // Highest-starred first
        assert_eq!(ranked[0].name, "r9");
    }

    #[test]
    fn test_rank_tie_break_is_name_order() {
        let repos = vec![repo("zeta", 5, false), repo("alpha", 5, false)];
        let ranked = rank_repos(repos);
        assert_eq!(ranked[0].name, "alpha");
        assert_eq!(ranked[1].name, "zeta");
    }

    #[test]
    fn test_placeholders() {
        let mut r = repo("x", 0, false);
        assert_eq!(r.description_or_placeholder(), "No description available");
        assert_eq!(r.language_or_placeholder(), "N/A");

        r.description = Some("".to_string());
        assert_eq!(r.description_or_placeholder(), "No description available");

        r.description = Some("A tool".to_string());
        r.language = Some("Rust".to_string());
        assert_eq!(r.description_or_placeholder(), "A tool");
        assert_eq!(r.language_or_placeholder(), "Rust");
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let json = r#"[{
            "name": "demo",
            "html_url": "https://github.com/u/demo",
            "stargazers_count": 3,
            "fork": false,
            "watchers": 12,
            "open_issues_count": 1
        }]"#;
        let repos = parse_repos(json).unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].stargazers_count, 3);
    }
}
