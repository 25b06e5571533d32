//! State management modules for the Folio viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Theme state (active theme, change epoch)
//! - Content state (per-section fetch state)
//! - Gate state (loader overlay visibility, safety deadline)
//! - Nav state (active section, click override, resize debounce)

mod content_state;
mod gate_state;
mod nav_state;
mod theme_state;

pub use content_state::{ContentState, SectionContent};
pub use gate_state::GateState;
pub use nav_state::NavState;
pub use theme_state::ThemeState;
