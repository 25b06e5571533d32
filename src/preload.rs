//! Best-effort resource preloading.
//!
//! Before the page's features start, the viewer warms the assets the site
//! manifest references: site-local files are read once so the OS cache is
//! hot, and remote font-provider origins get an early TCP connect in place
//! of a fetch. Every resource is raced against a per-resource timeout, and
//! success, failure, and timeout all count as "settled"; preloading can be
//! slow, but it can never fail, and it can never block startup for longer
//! than the timeout.
//!
//! The [`Preloader`] follows the same shape as the viewer's other background
//! work: a spawned worker per resource, results joined over an mpsc channel,
//! and a `check_completion` poll called once per frame by the UI thread.

use std::collections::HashSet;
use std::fs;
use std::net::{TcpStream, ToSocketAddrs};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use url::Url;

use crate::site::SiteManifest;

/// Default per-resource timeout used on startup.
pub const DEFAULT_RESOURCE_TIMEOUT: Duration = Duration::from_secs(6);

/// Remote stylesheet hosts that earn a preconnect instead of a fetch.
const FONT_PROVIDER_HOSTS: &[&str] = &["fonts.googleapis.com", "fonts.gstatic.com"];

/// What the document references a resource as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceRole {
    Style,
    Script,
    Icon,
    Image,
    /// Connection warm-up only; nothing is fetched.
    Preconnect,
}

/// Where a resource lives once its reference is resolved.
///
/// The target is the de-duplication key: two references resolving to the
/// same file or origin are warmed once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceTarget {
    /// A file under the site root.
    File(PathBuf),
    /// A remote origin to open a connection to.
    Origin { host: String, port: u16 },
}

/// One asset discovered in the document, ready to warm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadResource {
    pub role: ResourceRole,
    pub target: ResourceTarget,
}

/// How a single resource settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceOutcome {
    Loaded,
    Failed,
    TimedOut,
}

/// Aggregate result of a preload run. Always produced; never an error.
#[derive(Debug, Clone)]
pub struct PreloadReport {
    pub total: usize,
    pub loaded: usize,
    pub failed: usize,
    pub timed_out: usize,
    pub elapsed: Duration,
}

impl PreloadReport {
    /// True when every resource loaded before its timeout.
    pub fn is_clean(&self) -> bool {
        self.loaded == self.total
    }
}

/// Scans the manifest's asset references and builds the preload plan.
///
/// Site-local references resolve against `site_root` and keep their role.
/// Remote references are never fetched: a font-provider stylesheet becomes a
/// preconnect to its origin, everything else is dropped. The plan is
/// de-duplicated by resolved target, first reference wins.
pub fn build_preload_plan(manifest: &SiteManifest, site_root: &Path) -> Vec<PreloadResource> {
    let assets = &manifest.assets;
    let mut seen: HashSet<ResourceTarget> = HashSet::new();
    let mut plan = Vec::new();

    let mut push = |resource: Option<PreloadResource>| {
        if let Some(resource) = resource {
            if seen.insert(resource.target.clone()) {
                plan.push(resource);
            }
        }
    };

    for reference in &assets.stylesheets {
        push(classify(reference, ResourceRole::Style, site_root));
    }
    for reference in &assets.scripts {
        push(classify(reference, ResourceRole::Script, site_root));
    }
    if let Some(reference) = &assets.icon {
        push(classify(reference, ResourceRole::Icon, site_root));
    }
    for reference in &assets.images {
        push(classify(reference, ResourceRole::Image, site_root));
    }

    plan
}

/// Resolves one asset reference to a preloadable resource, or None when the
/// reference is remote and not a font-provider stylesheet.
fn classify(reference: &str, role: ResourceRole, site_root: &Path) -> Option<PreloadResource> {
    if let Ok(url) = Url::parse(reference) {
        // Absolute URL. Only font-provider stylesheets are warmed, and only
        // as a preconnect to their origin.
        if !matches!(url.scheme(), "http" | "https") {
            return None;
        }
        let host = url.host_str()?;
        if role == ResourceRole::Style && FONT_PROVIDER_HOSTS.iter().any(|h| host.contains(h)) {
            return Some(PreloadResource {
                role: ResourceRole::Preconnect,
                target: ResourceTarget::Origin {
                    host: host.to_string(),
                    port: url.port_or_known_default().unwrap_or(443),
                },
            });
        }
        return None;
    }

    // Relative reference: a file under the site root.
    Some(PreloadResource {
        role,
        target: ResourceTarget::File(site_root.join(reference)),
    })
}

/// Runs a preload plan in the background and reports once it settles.
///
/// The report arrives no later than the per-resource timeout (plus
/// scheduling slack) after `start`, whatever the individual outcomes;
/// workers that outlive the deadline are abandoned and counted as timed out.
pub struct Preloader {
    /// Shared in-progress flag
    in_progress: Arc<Mutex<bool>>,

    /// Channel receiver for the aggregate report
    receiver: Option<Receiver<PreloadReport>>,
}

impl Preloader {
    /// Creates a preloader with no active run.
    pub fn new() -> Self {
        Self {
            in_progress: Arc::new(Mutex::new(false)),
            receiver: None,
        }
    }

    /// Checks whether a preload run is currently in progress.
    pub fn is_running(&self) -> bool {
        *self.in_progress.lock().unwrap()
    }

    /// Starts warming every resource in the plan.
    ///
    /// Call `check_completion()` regularly (e.g. once per frame) to pick up
    /// the report.
    pub fn start(&mut self, plan: Vec<PreloadResource>, timeout: Duration) {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        *self.in_progress.lock().unwrap() = true;

        let in_progress = Arc::clone(&self.in_progress);
        thread::spawn(move || {
            let report = run_plan(plan, timeout);
            let _ = sender.send(report);
            *in_progress.lock().unwrap() = false;
        });
    }

    /// Returns the report once the run has settled, else None.
    pub fn check_completion(&mut self) -> Option<PreloadReport> {
        if let Some(receiver) = &self.receiver {
            if let Ok(report) = receiver.try_recv() {
                self.receiver = None;
                return Some(report);
            }
        }
        None
    }
}

impl Default for Preloader {
    fn default() -> Self {
        Self::new()
    }
}

/// Fans the plan out to one worker per resource and collects outcomes until
/// everything has settled or the deadline passes.
fn run_plan(plan: Vec<PreloadResource>, timeout: Duration) -> PreloadReport {
    let started = Instant::now();
    let deadline = started + timeout;
    let total = plan.len();

    let (tx, rx) = channel();
    for resource in plan {
        let tx = tx.clone();
        thread::spawn(move || {
            let outcome = if warm_resource(&resource, timeout) {
                ResourceOutcome::Loaded
            } else {
                ResourceOutcome::Failed
            };
            let _ = tx.send(outcome);
        });
    }
    drop(tx);

    let mut loaded = 0;
    let mut failed = 0;
    let mut settled = 0;
    while settled < total {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(ResourceOutcome::Loaded) => {
                loaded += 1;
                settled += 1;
            }
            Ok(ResourceOutcome::Failed) | Ok(ResourceOutcome::TimedOut) => {
                failed += 1;
                settled += 1;
            }
            // Deadline passed: whatever is still outstanding is timed out.
            Err(RecvTimeoutError::Timeout) => break,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    PreloadReport {
        total,
        loaded,
        failed,
        timed_out: total - settled,
        elapsed: started.elapsed(),
    }
}

/// Warms one resource. Returns true on success; any error is a settled
/// failure.
fn warm_resource(resource: &PreloadResource, timeout: Duration) -> bool {
    match &resource.target {
        ResourceTarget::File(path) => fs::read(path).is_ok(),
        ResourceTarget::Origin { host, port } => preconnect(host, *port, timeout),
    }
}

/// Opens and immediately drops a TCP connection to the origin, warming DNS
/// and the connection path.
fn preconnect(host: &str, port: u16, timeout: Duration) -> bool {
    let addrs = match (host, port).to_socket_addrs() {
        Ok(addrs) => addrs,
        Err(_) => return false,
    };
    for addr in addrs {
        if TcpStream::connect_timeout(&addr, timeout).is_ok() {
            return true;
        }
    }
    false
}
