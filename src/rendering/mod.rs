//! Rendering subsystem for the decorative page background
//!
//! This module contains the matrix rain painter: the column state machine
//! driven on a fixed tick and the egui painting that draws it behind the
//! page content.

pub mod matrix_rain;

pub use matrix_rain::MatrixRain;
