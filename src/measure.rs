//! Advance measurement — the seam to the font collaborator.
//!
//! The kernel never measures text itself. Horizontal clipping in the view
//! needs to know how wide rendered text is, and that knowledge lives with
//! whoever owns the font (a glyph atlas, a terminal grid, a test fixture).
//! [`Measure`] is that collaborator's interface: deterministic, pure
//! functions of the input string.
//!
//! Two implementations ship with the crate:
//!
//! - [`CellMeasure`] — terminal-cell advances via `unicode-width`, where a
//!   cell has a fixed pixel width and CJK characters span two cells.
//! - [`FixedAdvance`] — every character has the same advance. The workhorse
//!   for tests and headless callers.

use unicode_width::UnicodeWidthChar;

// ---------------------------------------------------------------------------
// Measure
// ---------------------------------------------------------------------------

/// Horizontal advance measurement for rendered text.
///
/// Both methods must be consistent: `advance_of(s)` equals the sum of
/// `advances(s)`. The view's clipping walk relies on that.
pub trait Measure {
    /// Total horizontal advance of `text`, in pixels.
    fn advance_of(&self, text: &str) -> f32;

    /// Per-character advances of `text`, in order.
    fn advances(&self, text: &str) -> Vec<f32>;
}

// ---------------------------------------------------------------------------
// CellMeasure
// ---------------------------------------------------------------------------

/// Terminal-grid measurement: each character occupies a whole number of
/// cells (per `unicode-width`), and every cell is `cell_width` pixels wide.
#[derive(Debug, Clone, Copy)]
pub struct CellMeasure {
    cell_width: f32,
}

impl CellMeasure {
    /// Create a measurer for a grid whose cells are `cell_width` pixels wide.
    #[must_use]
    pub const fn new(cell_width: f32) -> Self {
        Self { cell_width }
    }

    fn char_advance(self, ch: char) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let cells = ch.width().unwrap_or(0) as f32;
        cells * self.cell_width
    }
}

impl Measure for CellMeasure {
    fn advance_of(&self, text: &str) -> f32 {
        text.chars().map(|ch| self.char_advance(ch)).sum()
    }

    fn advances(&self, text: &str) -> Vec<f32> {
        text.chars().map(|ch| self.char_advance(ch)).collect()
    }
}

// ---------------------------------------------------------------------------
// FixedAdvance
// ---------------------------------------------------------------------------

/// Uniform measurement: every character is `width` pixels wide.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvance {
    width: f32,
}

impl FixedAdvance {
    /// Create a measurer where every character advances by `width` pixels.
    #[must_use]
    pub const fn new(width: f32) -> Self {
        Self { width }
    }
}

impl Measure for FixedAdvance {
    fn advance_of(&self, text: &str) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let count = text.chars().count() as f32;
        count * self.width
    }

    fn advances(&self, text: &str) -> Vec<f32> {
        text.chars().map(|_| self.width).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
