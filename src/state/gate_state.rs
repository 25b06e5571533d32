//! Loader gate state.
//!
//! The gate is the blocking overlay shown while the page initializes. It is
//! dismissed shortly after feature initialization completes, but a safety
//! deadline dismisses it unconditionally 8 seconds after it was shown, so the
//! page is never stuck behind the overlay because something upstream stalled.

use std::time::{Duration, Instant};

/// Upper bound on how long the overlay can stay up, measured from `show`.
pub const SAFETY_TIMEOUT: Duration = Duration::from_secs(8);

/// Delay between feature initialization finishing and the overlay hiding.
pub const DISMISS_DELAY: Duration = Duration::from_millis(200);

/// State of the loader overlay.
pub struct GateState {
    visible: bool,
    /// Set once the overlay has been dismissed; the page is "loaded".
    loaded: bool,
    /// Unconditional hide deadline, armed by `show`.
    deadline: Option<Instant>,
    /// Scheduled normal dismissal, armed when initialization completes.
    dismiss_at: Option<Instant>,
}

impl Default for GateState {
    fn default() -> Self {
        Self::new()
    }
}

impl GateState {
    /// Creates a hidden gate.
    pub fn new() -> Self {
        Self {
            visible: false,
            loaded: false,
            deadline: None,
            dismiss_at: None,
        }
    }

    /// Reveals the overlay and arms the safety deadline.
    pub fn show(&mut self, now: Instant) {
        self.visible = true;
        self.loaded = false;
        self.deadline = Some(now + SAFETY_TIMEOUT);
        self.dismiss_at = None;
    }

    /// Conceals the overlay and marks the page loaded. Disarms both timers.
    pub fn hide(&mut self) {
        self.visible = false;
        self.loaded = true;
        self.deadline = None;
        self.dismiss_at = None;
    }

    /// Schedules the normal dismissal and disarms the safety deadline:
    /// initialization finished, the overlay goes away after a short beat.
    pub fn schedule_dismiss(&mut self, now: Instant) {
        if self.visible {
            self.dismiss_at = Some(now + DISMISS_DELAY);
            self.deadline = None;
        }
    }

    /// Advances the gate's timers. Called once per frame.
    pub fn poll(&mut self, now: Instant) {
        if !self.visible {
            return;
        }
        let due = |at: Option<Instant>| at.is_some_and(|at| now >= at);
        if due(self.dismiss_at) || due(self.deadline) {
            self.hide();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_deadline_hides_unconditionally() {
        let t0 = Instant::now();
        let mut gate = GateState::new();
        gate.show(t0);

        gate.poll(t0 + Duration::from_secs(7));
        assert!(gate.is_visible(), "still within the safety window");

        gate.poll(t0 + SAFETY_TIMEOUT);
        assert!(!gate.is_visible());
        assert!(gate.is_loaded());
    }

    #[test]
    fn test_normal_dismissal_disarms_safety_deadline() {
        let t0 = Instant::now();
        let mut gate = GateState::new();
        gate.show(t0);

        let t1 = t0 + Duration::from_secs(1);
        gate.schedule_dismiss(t1);

        gate.poll(t1 + Duration::from_millis(100));
        assert!(gate.is_visible(), "dismiss delay not elapsed yet");

        gate.poll(t1 + DISMISS_DELAY);
        assert!(!gate.is_visible());
    }

    #[test]
    fn test_poll_before_show_is_inert() {
        let mut gate = GateState::new();
        gate.poll(Instant::now());
        assert!(!gate.is_visible());
        assert!(!gate.is_loaded());
    }
}
