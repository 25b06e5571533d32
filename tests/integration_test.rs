use anyhow::Result;
use folio::{
    build_preload_plan, fetch_repos, load_certifications, load_education, load_skills,
    rank_repos, PreloadResource, Preloader, ResourceRole, ResourceTarget, SiteManifest,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

/// Writes a small but complete site directory: manifest, content documents,
/// and the assets the manifest references.
fn write_sample_site(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir.join("styles"))?;
    fs::create_dir_all(dir.join("assets"))?;

    fs::write(
        dir.join("folio.json"),
        r#"{
            "title": "Test Portfolio",
            "owner": "Test Owner",
            "roles": ["Tester"],
            "about": ["A site used by the integration tests."],
            "github_user": "octocat",
            "assets": {
                "stylesheets": [
                    "styles/main.css",
                    "https://fonts.googleapis.com/css2?family=Inter"
                ],
                "icon": "assets/favicon.png",
                "images": ["assets/portrait.png", "assets/portrait.png"]
            }
        }"#,
    )?;
    fs::write(dir.join("styles/main.css"), "/* test */")?;
    fs::write(dir.join("assets/favicon.png"), [0u8; 16])?;
    fs::write(dir.join("assets/portrait.png"), [0u8; 16])?;

    fs::write(
        dir.join("certifications.json"),
        r#"{ "certifications": [
            { "title": "Cert A", "issuer": "Org", "date": "2024", "description": "d" }
        ] }"#,
    )?;
    fs::write(
        dir.join("education.json"),
        r#"{ "education": [
            { "degree": "BSc", "institution": "Uni", "description": "d" }
        ] }"#,
    )?;
    fs::write(
        dir.join("skills.json"),
        r#"{ "skills": [
            { "category": "Languages", "items": [ { "name": "Rust", "logo": "assets/rust.png" } ] }
        ] }"#,
    )?;

    Ok(())
}

#[test]
fn test_site_directory_loads_end_to_end() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_sample_site(dir.path())?;

    let manifest = SiteManifest::load(dir.path())?;
    assert_eq!(manifest.owner, "Test Owner");

    let certs = load_certifications(&dir.path().join("certifications.json"))?;
    assert_eq!(certs.len(), 1);
    assert_eq!(certs[0].title, "Cert A");

    let education = load_education(&dir.path().join("education.json"))?;
    assert_eq!(education[0].institution, "Uni");

    let skills = load_skills(&dir.path().join("skills.json"))?;
    assert_eq!(skills[0].items[0].name, "Rust");

    Ok(())
}

#[test]
fn test_one_broken_document_does_not_affect_the_others() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_sample_site(dir.path())?;
    fs::write(dir.path().join("certifications.json"), "{ not json")?;

    assert!(load_certifications(&dir.path().join("certifications.json")).is_err());
    // The sibling documents still load.
    assert!(load_education(&dir.path().join("education.json")).is_ok());
    assert!(load_skills(&dir.path().join("skills.json")).is_ok());

    Ok(())
}

#[test]
fn test_preload_plan_dedupes_and_preconnects() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_sample_site(dir.path())?;
    let manifest = SiteManifest::load(dir.path())?;

    let plan = build_preload_plan(&manifest, dir.path());
    // main.css + favicon + portrait (listed twice, warmed once) + one
    // preconnect for the font stylesheet.
    assert_eq!(plan.len(), 4);
    let preconnects: Vec<_> = plan
        .iter()
        .filter(|r| r.role == ResourceRole::Preconnect)
        .collect();
    assert_eq!(preconnects.len(), 1);
    assert_eq!(
        preconnects[0].target,
        ResourceTarget::Origin {
            host: "fonts.googleapis.com".to_string(),
            port: 443
        }
    );

    Ok(())
}

/// Polls the preloader to completion, panicking after `bound`.
fn settle(preloader: &mut Preloader, bound: Duration) -> folio::PreloadReport {
    let started = Instant::now();
    loop {
        if let Some(report) = preloader.check_completion() {
            return report;
        }
        assert!(
            started.elapsed() < bound,
            "preloader failed to settle within {:?}",
            bound
        );
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn test_preload_settles_with_real_site_assets() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_sample_site(dir.path())?;
    let manifest = SiteManifest::load(dir.path())?;
    // Drop the remote stylesheet so the run is hermetic.
    let mut manifest = manifest;
    manifest.assets.stylesheets.retain(|s| !s.starts_with("https://"));

    let plan = build_preload_plan(&manifest, dir.path());
    assert_eq!(plan.len(), 3);

    let mut preloader = Preloader::new();
    preloader.start(plan, Duration::from_secs(2));
    let report = settle(&mut preloader, Duration::from_secs(5));

    assert_eq!(report.total, 3);
    assert!(report.is_clean());
    Ok(())
}

#[test]
fn test_preload_never_fails_and_respects_the_timeout_bound() {
    // Missing files and an unresolvable origin: everything settles as a
    // failure, the aggregate still resolves, and it does so within the
    // per-resource timeout plus slack.
    let timeout = Duration::from_millis(500);
    let plan = vec![
        PreloadResource {
            role: ResourceRole::Style,
            target: ResourceTarget::File(PathBuf::from("/nonexistent/style.css")),
        },
        PreloadResource {
            role: ResourceRole::Image,
            target: ResourceTarget::File(PathBuf::from("/nonexistent/image.png")),
        },
        PreloadResource {
            role: ResourceRole::Preconnect,
            target: ResourceTarget::Origin {
                host: "host.invalid".to_string(),
                port: 443,
            },
        },
    ];

    let started = Instant::now();
    let mut preloader = Preloader::new();
    preloader.start(plan, timeout);
    let report = settle(&mut preloader, timeout + Duration::from_secs(2));

    assert_eq!(report.total, 3);
    assert_eq!(report.loaded, 0);
    assert_eq!(report.failed + report.timed_out, 3);
    // Liveness: settled within timeout + slack despite every resource failing.
    assert!(started.elapsed() < timeout + Duration::from_secs(2));
}

#[test]
fn test_fetch_and_rank_repos_from_local_endpoint() -> Result<()> {
    // Serve a canned GitHub-style listing over loopback.
    let body = r#"[
        { "name": "starred", "html_url": "https://github.com/u/starred",
          "stargazers_count": 42, "fork": false, "language": "Rust",
          "description": "The popular one" },
        { "name": "forked", "html_url": "https://github.com/u/forked",
          "stargazers_count": 99, "fork": true },
        { "name": "quiet", "html_url": "https://github.com/u/quiet",
          "stargazers_count": 1, "fork": false }
    ]"#;

    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let endpoint = format!("http://{}/users/u/repos", addr);
    let body_owned = body.to_string();
    let serve = thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let response = tiny_http::Response::from_string(body_owned).with_header(
                "Content-Type: application/json"
                    .parse::<tiny_http::Header>()
                    .unwrap(),
            );
            let _ = request.respond(response);
        }
    });

    let repos = fetch_repos(&endpoint)?;
    serve.join().unwrap();

    let ranked = rank_repos(repos);
    let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["starred", "quiet"]);
    assert_eq!(ranked[0].description_or_placeholder(), "The popular one");
    assert_eq!(ranked[1].language_or_placeholder(), "N/A");

    Ok(())
}
