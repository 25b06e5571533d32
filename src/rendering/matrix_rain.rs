//! Matrix rain background animation.
//!
//! A fixed-interval column animation: every tick each column stamps one
//! random glyph at its current drop row and advances; once a drop has
//! scrolled past the bottom it resets to the top with small probability.
//! Previously stamped glyphs age each tick and are painted with decaying
//! alpha, which reproduces the canvas trail the original achieves by fading
//! the whole canvas per tick.
//!
//! The animation carries an explicit lifecycle handle: `start`/`stop`
//! control it, and the painter is a no-op while stopped.

use egui::{Align2, Color32, FontId, Painter, Rect};
use folio::Theme;
use once_cell::sync::Lazy;
use rand::Rng;
use std::time::{Duration, Instant};

/// Glyph cell size in pixels; column count derives from this.
pub const FONT_SIZE: f32 = 16.0;

/// Fixed animation tick. No frame-rate adaptation.
pub const TICK_INTERVAL: Duration = Duration::from_millis(35);

/// Chance per tick that a drop past the bottom resets to the top.
const RESET_PROBABILITY: f64 = 0.025;

/// Ticks a stamped glyph stays visible before its trail alpha is negligible.
const AGE_CUTOFF: u8 = 40;

/// Backlog cap: a stalled frame advances at most this many ticks at once.
const MAX_TICKS_PER_FRAME: u32 = 8;

static GLYPHS: Lazy<Vec<char>> = Lazy::new(|| {
    concat!(
        "AaBbCcDdEeFfGgHhIiJjKkLlMmNnOoPpQqRrSsTtUuVvWwXxYyZz",
        "0123456789!@#$%^&*()_+-=[]{}|;:,.<>?~",
        "アイウエオカキクケコサシスセソタチツテトナニヌネノ",
        "ハヒフヘホマミムメモヤユヨラリルレロワヰヱヲン",
    )
    .chars()
    .collect()
});

#[derive(Clone, Copy)]
struct Cell {
    glyph: char,
    age: u8,
}

/// The matrix rain's state machine and painter.
pub struct MatrixRain {
    running: bool,

    columns: usize,
    rows: usize,
    /// Current drop row per column, in cell units. May exceed `rows` until
    /// the probabilistic reset fires.
    drops: Vec<usize>,
    /// Stamped glyphs, column-major (`col * rows + row`).
    cells: Vec<Option<Cell>>,

    width: f32,
    height: f32,

    last_tick: Option<Instant>,

    // Theme-derived colors, refreshed when the theme epoch changes.
    theme_epoch: Option<u64>,
    glyph_color: Color32,
    background: Color32,
    fade_per_tick: f32,
}

impl Default for MatrixRain {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixRain {
    /// Creates a stopped animation with no canvas.
    pub fn new() -> Self {
        Self {
            running: false,
            columns: 0,
            rows: 0,
            drops: Vec::new(),
            cells: Vec::new(),
            width: 0.0,
            height: 0.0,
            last_tick: None,
            theme_epoch: None,
            glyph_color: Color32::WHITE,
            background: Color32::BLACK,
            fade_per_tick: 0.05,
        }
    }

    // ===== Lifecycle =====

    /// Starts the animation.
    pub fn start(&mut self) {
        self.running = true;
        self.last_tick = None;
    }

    /// Stops the animation; ticking and painting become no-ops.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // ===== Canvas and theme =====

    /// Refreshes the derived colors when the theme has changed since the
    /// last call. Cheap to call every frame.
    pub fn sync_theme(&mut self, theme: Theme, epoch: u64) {
        if self.theme_epoch == Some(epoch) {
            return;
        }
        self.theme_epoch = Some(epoch);
        self.glyph_color = theme.rain_glyph_color();
        self.background = theme.colors().background;
        self.fade_per_tick = f32::from(theme.rain_fade_color().a()) / 255.0;
    }

    /// Resizes the canvas. Column count becomes `floor(width / FONT_SIZE)`
    /// (at least 1): growing appends freshly randomized columns, shrinking
    /// truncates, and surviving columns keep their drop positions.
    pub fn resize(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        let new_columns = ((width / FONT_SIZE).floor() as usize).max(1);
        let new_rows = ((height / FONT_SIZE).ceil() as usize).max(1);
        if new_columns == self.columns && new_rows == self.rows {
            self.width = width;
            self.height = height;
            return;
        }

        if new_columns > self.columns {
            for _ in self.columns..new_columns {
                self.drops.push(rng.gen_range(0..new_rows));
            }
        } else {
            self.drops.truncate(new_columns);
        }

        self.columns = new_columns;
        self.rows = new_rows;
        self.width = width;
        self.height = height;
        // Trails rebuild within a few ticks; no need to remap old cells.
        self.cells = vec![None; new_columns * new_rows];
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    #[cfg(test)]
    fn drops(&self) -> &[usize] {
        &self.drops
    }

    // ===== Ticking =====

    /// Advances the animation by however many fixed ticks have elapsed.
    pub fn advance(&mut self, now: Instant, rng: &mut impl Rng) {
        if !self.running || self.columns == 0 {
            return;
        }
        let mut last = self.last_tick.unwrap_or(now);
        let mut ticks = 0;
        while now.duration_since(last) >= TICK_INTERVAL {
            last += TICK_INTERVAL;
            self.tick(rng);
            ticks += 1;
            if ticks >= MAX_TICKS_PER_FRAME {
                // Drop the backlog rather than spiral after a stall.
                last = now;
                break;
            }
        }
        self.last_tick = Some(last);
    }

    /// One animation step: age the trail, stamp one glyph per column,
    /// advance the drops.
    fn tick(&mut self, rng: &mut impl Rng) {
        for cell in self.cells.iter_mut() {
            if let Some(c) = cell {
                if c.age >= AGE_CUTOFF {
                    *cell = None;
                } else {
                    c.age += 1;
                }
            }
        }

        for col in 0..self.columns {
            let row = self.drops[col];
            if row < self.rows {
                let glyph = GLYPHS[rng.gen_range(0..GLYPHS.len())];
                self.cells[col * self.rows + row] = Some(Cell { glyph, age: 0 });
            }

            if row as f32 * FONT_SIZE > self.height && rng.gen_bool(RESET_PROBABILITY) {
                self.drops[col] = 0;
            }
            self.drops[col] += 1;
        }
    }

    // ===== Painting =====

    /// Paints the background fill and the glyph trails into `rect`.
    /// No-op while stopped.
    pub fn paint(&self, painter: &Painter, rect: Rect) {
        if !self.running {
            return;
        }
        painter.rect_filled(rect, 0.0, self.background);

        let font = FontId::monospace(FONT_SIZE);
        for col in 0..self.columns {
            for row in 0..self.rows {
                let Some(cell) = self.cells[col * self.rows + row] else {
                    continue;
                };
                let strength = (1.0 - self.fade_per_tick).powi(i32::from(cell.age));
                if strength < 0.03 {
                    continue;
                }
                let pos = rect.min
                    + egui::vec2(col as f32 * FONT_SIZE, row as f32 * FONT_SIZE);
                painter.text(
                    pos,
                    Align2::LEFT_TOP,
                    cell.glyph,
                    font.clone(),
                    self.glyph_color.gamma_multiply(strength),
                );
            }
        }
    }
}
