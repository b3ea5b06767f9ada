//! Text position type.
//!
//! Coordinates are **0-indexed**. Line 0 is the first line, column 0 is the
//! first character. Columns are byte offsets into a line's string — the
//! editing kernel deliberately treats text as a narrow string type and does
//! not do Unicode-aware column arithmetic (see the crate docs).
//!
//! Display layers (status line, goto dialog) should convert to 1-indexed for
//! the user; that conversion never belongs here.

use std::fmt;

/// A position in a text buffer: (line, column), both 0-indexed.
///
/// `col` is a byte offset from the start of the line. A column equal to the
/// line's length is legal — it is the cursor-after-last-char position used
/// while inserting at the end of a line.
///
/// # Ordering
///
/// Positions are ordered lexicographically: line first, then column, so
/// `Position { line: 0, col: 5 }` < `Position { line: 1, col: 0 }`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// The origin — line 0, column 0.
    pub const ZERO: Self = Self { line: 0, col: 0 };

    /// Create a new position.
    #[inline]
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

// Natural ordering: line first, then column.
impl Ord for Position {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.line
            .cmp(&other.line)
            .then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}:{})", self.line, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-indexed for human display, matching Vim's `line:col` status.
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
