//! I/O modules for background content loading.

pub mod content_loader;

// Re-export commonly used types
pub use content_loader::{ContentLoader, SectionData, SectionUpdate};
