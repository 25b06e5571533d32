//! Navigation and scroll-spy state.
//!
//! Tracks which navigation link is active, the click override that pins a
//! link while its smooth-scroll is in flight, and the debounced viewport
//! resize that triggers a nav-offset re-derivation.

use folio::Section;
use std::time::{Duration, Instant};

/// How long a clicked link stays pinned before per-frame observation
/// resumes; covers the scroll animation.
const CLICK_OVERRIDE_HOLD: Duration = Duration::from_millis(600);

/// Quiet period after the last viewport size change before the nav offset
/// is re-derived.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// State of the navigation highlighter.
pub struct NavState {
    /// False until feature initialization; observation is inert before that.
    enabled: bool,
    /// Link currently marked active.
    active: Option<Section>,
    /// While set and in the future, observation must not move the highlight.
    override_until: Option<Instant>,
    /// Section a click asked to scroll to; consumed by the renderer.
    pending_scroll: Option<Section>,
    /// Current top offset applied to visibility checks (nav height + margin).
    nav_offset: f32,
    /// Last seen viewport size, for resize detection.
    last_size: Option<(f32, f32)>,
    /// When the pending resize becomes due.
    resize_at: Option<Instant>,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavState {
    pub fn new() -> Self {
        Self {
            enabled: false,
            active: None,
            override_until: None,
            pending_scroll: None,
            nav_offset: 0.0,
            last_size: None,
            resize_at: None,
        }
    }

    /// Starts observation; part of feature initialization after preload.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn active(&self) -> Option<Section> {
        self.active
    }

    pub fn nav_offset(&self) -> f32 {
        self.nav_offset
    }

    pub fn set_nav_offset(&mut self, offset: f32) {
        self.nav_offset = offset;
    }

    // ===== Observation =====

    /// Applies an observation result. Ignored while disabled or while a
    /// click override is holding; an empty observation keeps the previous
    /// highlight rather than clearing it.
    pub fn observe(&mut self, section: Option<Section>, now: Instant) {
        if !self.enabled || self.override_active(now) {
            return;
        }
        if let Some(section) = section {
            self.active = Some(section);
        }
    }

    fn override_active(&self, now: Instant) -> bool {
        self.override_until.is_some_and(|until| now < until)
    }

    // ===== Click handling =====

    /// A nav link was clicked: mark it active immediately, request the
    /// smooth scroll, and hold the highlight until the scroll settles.
    pub fn click(&mut self, section: Section, now: Instant) {
        self.active = Some(section);
        self.pending_scroll = Some(section);
        self.override_until = Some(now + CLICK_OVERRIDE_HOLD);
    }

    /// Takes the pending scroll target, if any. Consumed by the section
    /// renderer on the next frame.
    pub fn take_pending_scroll(&mut self) -> Option<Section> {
        self.pending_scroll.take()
    }

    // ===== Resize debounce =====

    /// Notes the current viewport size; a change (re)arms the debounce.
    pub fn note_viewport_size(&mut self, width: f32, height: f32, now: Instant) {
        let size = (width, height);
        match self.last_size {
            None => {
                // First frame: derive the offset right away.
                self.last_size = Some(size);
                self.resize_at = Some(now);
            }
            Some(last) if last != size => {
                self.last_size = Some(size);
                self.resize_at = Some(now + RESIZE_DEBOUNCE);
            }
            Some(_) => {}
        }
    }

    /// True once the debounced resize is due; clears the pending state.
    pub fn resize_due(&mut self, now: Instant) -> bool {
        if self.resize_at.is_some_and(|at| now >= at) {
            self.resize_at = None;
            true
        } else {
            false
        }
    }
}
