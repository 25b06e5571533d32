//! Text formatting utilities for the Folio viewer.
//!
//! This module provides helper functions for formatting values in a human-readable way.

use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Formats a star count compactly: exact below 1000, `1.2k` style above.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_star_count(42), "42");
/// assert_eq!(format_star_count(1234), "1.2k");
/// ```
pub fn format_star_count(stars: u64) -> String {
    if stars < 1000 {
        stars.to_string()
    } else {
        format!("{:.1}k", stars as f64 / 1000.0)
    }
}

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory()),
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_star_count() {
        assert_eq!(format_star_count(0), "0");
        assert_eq!(format_star_count(999), "999");
        assert_eq!(format_star_count(1000), "1.0k");
        assert_eq!(format_star_count(12_345), "12.3k");
    }

    #[test]
    fn test_format_memory() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }
}
