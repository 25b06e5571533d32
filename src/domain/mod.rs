//! Domain logic modules for the Folio viewer.
//!
//! This module contains core business logic:
//! - Scroll-spy (section prominence and nav offset, independent of egui)

pub mod scroll_spy;
