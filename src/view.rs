//! View — scroll state and the visible-window query.
//!
//! The `View` is intentionally lightweight: it holds only the scroll offset,
//! the horizontal clip remainder, and the bounds-derived line capacity. It
//! does not own the document or the cursor — both are passed to
//! [`visible_text`](View::visible_text) as parameters, the same way a render
//! call receives its inputs.
//!
//! # Scroll model
//!
//! Two mechanisms move the window:
//!
//! - [`center`](View::center) recenters on a line. Jumps (goto, search,
//!   undo) use this.
//! - [`visible_text`](View::visible_text) follows the cursor by **at most
//!   one line per call**. Interactive callers invoke it once per frame, so
//!   the window catches up with ordinary cursor motion; batch callers must
//!   call it repeatedly to converge.
//!
//! # Horizontal clipping
//!
//! When the advance of the text left of the cursor exceeds the window width,
//! the query walks per-character advances (via the [`Measure`] collaborator)
//! to decide how many leading characters every visible line drops, and keeps
//! the dropped pixel width in `x_skip` for sub-character alignment by the
//! renderer.

use crate::measure::Measure;
use crate::position::Position;

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// Scroll state mapping document lines onto a bounded visible window.
#[derive(Debug, Clone, Default)]
pub struct View {
    /// First visible line (0-indexed).
    skip: usize,
    /// Pixel width dropped from the left edge by horizontal clipping.
    x_skip: f32,
    /// Viewport pixel height, as given to `set_bounds`.
    height: f32,
    /// Pixel height of one rendered line.
    line_height: f32,
    /// Visible line capacity, derived from the bounds.
    max_lines: usize,
}

impl View {
    /// Create a view with no bounds set. Until [`set_bounds`](Self::set_bounds)
    /// is called the window holds zero lines.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Accessors ----------------------------------------------------------

    /// First visible line (0-indexed).
    #[inline]
    #[must_use]
    pub const fn skip(&self) -> usize {
        self.skip
    }

    /// Pixel width clipped off the left edge by the last
    /// [`visible_text`](Self::visible_text) call.
    #[inline]
    #[must_use]
    pub const fn x_skip(&self) -> f32 {
        self.x_skip
    }

    /// Visible line capacity.
    #[inline]
    #[must_use]
    pub const fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Set the scroll offset directly.
    pub const fn set_skip(&mut self, skip: usize) {
        self.skip = skip;
    }

    // -- Bounds -------------------------------------------------------------

    /// Recompute the visible line capacity from the viewport pixel height
    /// and the line pixel height: `floor(height / line_height) - 1`, with
    /// one row reserved for the command/status line.
    pub fn set_bounds(&mut self, height: f32, line_height: f32) {
        self.height = height;
        self.line_height = line_height;
        let rows = (height / line_height).floor();
        self.max_lines = if rows.is_finite() && rows >= 1.0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let rows = rows as usize;
            rows - 1
        } else {
            0
        };
    }

    // -- Recentering --------------------------------------------------------

    /// Recenter the window on `line`: the new offset puts `line` half a
    /// window down. Lines in the top half of the first window, and lines
    /// beyond `line_count`, reset the offset to 0.
    pub fn center(&mut self, line: usize, line_count: usize) {
        let half = self.max_lines / 2;
        if line < half || line_count < line {
            self.skip = 0;
        } else {
            self.skip = line - half;
        }
    }

    // -- Visible window -----------------------------------------------------

    /// Compute the text block to display: the visible lines, joined with
    /// newline separators, each clipped horizontally when the cursor sits
    /// past the window width.
    ///
    /// This is a query with two deliberate side effects: the window scrolls
    /// by **at most one line** toward the cursor, and `x_skip` is updated by
    /// the clipping walk. `cursor.line` must be a valid line index.
    pub fn visible_text<M: Measure + ?Sized>(
        &mut self,
        lines: &[String],
        cursor: Position,
        measure: &M,
        max_width: f32,
    ) -> String {
        let len = lines.len();

        // Clamp the window to the document, pulling the offset back when
        // the window would overrun the end.
        let mut end = self.skip + self.max_lines;
        if end >= len {
            end = len;
            self.skip = end.saturating_sub(self.max_lines);
        }

        // Follow the cursor one line per call.
        if cursor.line == end && end < len {
            self.skip += 1;
            end += 1;
        } else if cursor.line < self.skip && self.skip > 0 {
            self.skip -= 1;
            end -= 1;
        }
        let window = &lines[self.skip..end];

        // Horizontal clip: how many leading characters every visible line
        // drops so the cursor stays inside the window width.
        let current = &lines[cursor.line];
        let needed = measure.advance_of(&current[..cursor.col.min(current.len())]);
        let mut x_offset = 0usize;
        if needed > max_width {
            self.x_skip = 0.0;
            let mut acc = 0.0_f32;
            for advance in measure.advances(current) {
                if acc > needed {
                    // One character past the cursor's advance, for
                    // sub-character alignment.
                    self.x_skip += advance;
                    x_offset += 1;
                    break;
                }
                if acc > max_width {
                    x_offset += 1;
                    self.x_skip += advance;
                }
                acc += advance;
            }
        } else {
            self.x_skip = 0.0;
        }

        let mut out = String::new();
        for (i, line) in window.iter().enumerate() {
            if x_offset > 0 {
                // Lines shorter than the clip offset render empty.
                if line.len() > x_offset {
                    out.push_str(&line[x_offset..]);
                }
            } else {
                out.push_str(line);
            }
            if i + 1 < window.len() {
                out.push('\n');
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
