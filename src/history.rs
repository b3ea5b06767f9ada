//! Undo history — a bounded log of reversible edit records.
//!
//! Every mutating operation on the buffer pushes one [`EditRecord`] carrying
//! exactly the data its inverse needs: the cursor position at edit time and
//! whatever text the edit destroyed or split. [`crate::buffer::TextBuffer::undo`]
//! pops the most recent record and applies the inverse with an exhaustive
//! match — there is no integer mode code and no unknown-mode path.
//!
//! The log is strictly LIFO and single-level: one `undo()` reverts one
//! record, and there is no redo. It is capacity-bounded; once
//! [`UndoLog::MAX`] records are held, pushing evicts the oldest, so edits
//! older than the cap become permanently non-undoable.

use std::collections::VecDeque;

use crate::position::Position;

// ---------------------------------------------------------------------------
// EditRecord
// ---------------------------------------------------------------------------

/// A single reversible edit.
///
/// `pos` is always the cursor position **at the time the edit was recorded**,
/// which the buffer captures before any post-edit cursor adjustment (for a
/// newline insert, before the cursor drops to the new line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditRecord {
    /// A word (plus its trailing delimiter) was deleted forward from `pos`.
    /// Undo reinserts `text` at `pos` and advances the column past it.
    WordRemoved { pos: Position, text: String },

    /// Backspace removed the character before `pos` on the same line.
    /// Undo reinserts `ch` at `pos.col - 1` and restores the cursor to `pos`.
    CharRemoved { pos: Position, ch: char },

    /// Backspace at column 0 joined `pos.line` into the line above.
    /// Undo reinserts `line` at `pos.line`; when the join appended content,
    /// `prev` holds the upper line's original text to restore.
    LineJoined {
        pos: Position,
        line: String,
        prev: Option<String>,
    },

    /// Newline at end-of-line opened an empty line below `pos.line`.
    /// Undo removes it and puts the cursor back at the end of `pos.line`.
    LineOpened { pos: Position },

    /// Newline at column 0 or mid-line. `parts` is `Some((head, tail))` when
    /// the line was split in two; undo rejoins them and drops the spill line.
    /// `None` means an empty line was inserted at `pos.line`; undo removes it.
    LineSplit {
        pos: Position,
        parts: Option<(String, String)>,
    },

    /// A single character was inserted at `pos`. Undo erases it.
    CharInserted { pos: Position },
}

// ---------------------------------------------------------------------------
// UndoLog
// ---------------------------------------------------------------------------

/// Bounded double-ended log of edit records. Front is most recent.
#[derive(Debug, Default)]
pub struct UndoLog {
    records: VecDeque<EditRecord>,
}

impl UndoLog {
    /// Maximum number of records held. Pushing beyond this evicts the oldest.
    pub const MAX: usize = 5000;

    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
        }
    }

    /// Push a record as the most recent entry, evicting the oldest when the
    /// log is at capacity.
    pub fn push(&mut self, record: EditRecord) {
        if self.records.len() == Self::MAX {
            self.records.pop_back();
        }
        self.records.push_front(record);
    }

    /// Pop the most recent record, or `None` when the log is empty.
    pub fn pop(&mut self) -> Option<EditRecord> {
        self.records.pop_front()
    }

    /// Drop every record. Undo never crosses a file switch.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing can be undone.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
