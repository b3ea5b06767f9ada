//! Text buffer — document, cursor, undo, and file state in one place.
//!
//! A `TextBuffer` owns the document as a `Vec<String>` of lines (never
//! empty, no stored newlines), the cursor, a bounded [`UndoLog`], the
//! [`View`] scroll state, and a table of per-path saved positions. The modal
//! dispatch layer above calls its operations; the renderer below asks it for
//! [`visible_text`](TextBuffer::visible_text).
//!
//! # Design choices
//!
//! - **Lines are plain `String`s**, spliced in place. Documents this kernel
//!   serves are small enough that O(line) splices beat the complexity of a
//!   rope, and every undo inverse is a direct splice at a recorded offset.
//!
//! - **Columns are byte offsets.** The kernel treats text as a narrow
//!   string type and does no Unicode-aware column arithmetic; callers that
//!   feed multi-byte text must keep the cursor on character boundaries.
//!
//! - **Motion saturates at boundaries.** Moving past the document edge, or
//!   jumping to a line that does not exist, silently does nothing. Only file
//!   I/O reports errors.
//!
//! - **Bound editing.** [`bind_to`](TextBuffer::bind_to) deposits an
//!   external string (a prompt or input field) into the buffer; every
//!   column-relative operation then edits that string instead of the
//!   document, undo recording pauses, and no motion crosses lines.
//!   [`unbind`](TextBuffer::unbind) hands the edited string back.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::history::{EditRecord, UndoLog};
use crate::measure::Measure;
use crate::position::Position;
use crate::search;
use crate::view::View;
use crate::word;

// ---------------------------------------------------------------------------
// SavedPosition
// ---------------------------------------------------------------------------

/// Remembered cursor and scroll state for a file path, restored when the
/// path is opened again in the same session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SavedPosition {
    /// Saved column (the buffer's saved column, not the live cursor column).
    pub col: usize,
    /// Cursor line.
    pub line: usize,
    /// Scroll offset.
    pub skip: usize,
}

// ---------------------------------------------------------------------------
// TextBuffer
// ---------------------------------------------------------------------------

/// The editing kernel: document lines, cursor, undo history, viewport
/// state, and per-path saved positions.
#[derive(Debug)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: Position,
    /// Last explicit horizontal target: search hits record their byte
    /// offset here, and ending a bound edit restores the cursor to it.
    saved_col: usize,
    /// Bound edit target. While `Some`, all column-relative operations edit
    /// this string instead of the document.
    bind: Option<String>,
    undo: UndoLog,
    view: View,
    saved_positions: BTreeMap<PathBuf, SavedPosition>,
}

impl TextBuffer {
    // -- Construction -------------------------------------------------------

    /// Create a buffer holding a single empty line.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Position::ZERO,
            saved_col: 0,
            bind: None,
            undo: UndoLog::new(),
            view: View::new(),
            saved_positions: BTreeMap::new(),
        }
    }

    /// Load a buffer from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self {
            lines: split_lines(&text),
            ..Self::new()
        })
    }

    // -- Accessors ----------------------------------------------------------

    /// The document lines.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines (always at least 1).
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The whole document, lines joined with `\n`.
    #[must_use]
    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }

    /// Current cursor position. While bound, the column indexes the bound
    /// string rather than the document line.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Position {
        self.cursor
    }

    /// The saved column (search-hit offset / bind-restore column).
    #[inline]
    #[must_use]
    pub const fn saved_col(&self) -> usize {
        self.saved_col
    }

    /// Viewport scroll state.
    #[inline]
    #[must_use]
    pub const fn view(&self) -> &View {
        &self.view
    }

    /// Number of undoable records currently held.
    #[inline]
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Recompute the viewport's visible line capacity from pixel bounds.
    pub fn set_bounds(&mut self, height: f32, line_height: f32) {
        self.view.set_bounds(height, line_height);
    }

    /// The text left of the cursor on the current line (or in the bound
    /// string), which the renderer measures to place the caret. With
    /// `use_saved`, the prefix up to the saved column instead — used to
    /// show where a search hit.
    #[must_use]
    pub fn text_before_cursor(&self, use_saved: bool) -> &str {
        let line = &self.lines[self.cursor.line];
        if use_saved {
            return &line[..self.saved_col.min(line.len())];
        }
        match &self.bind {
            Some(text) => &text[..self.cursor.col.min(text.len())],
            None => &line[..self.cursor.col.min(line.len())],
        }
    }

    // -- Binding ------------------------------------------------------------

    /// Redirect all column-relative operations to `text` and place the
    /// cursor at its end. The current column is remembered and restored by
    /// [`unbind`](Self::unbind). While bound, undo recording is suspended
    /// and no motion crosses lines.
    pub fn bind_to(&mut self, text: String) {
        self.saved_col = self.cursor.col;
        self.cursor.col = text.len();
        self.bind = Some(text);
    }

    /// End the bound edit, restore the pre-bind column, and hand the edited
    /// string back. Returns `None` when nothing was bound.
    pub fn unbind(&mut self) -> Option<String> {
        self.cursor.col = self.saved_col;
        self.bind.take()
    }

    /// True while a bound edit is active.
    #[inline]
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.bind.is_some()
    }

    /// The bound string, while a bound edit is active.
    #[must_use]
    pub fn bound_text(&self) -> Option<&str> {
        self.bind.as_deref()
    }

    // -- Edit target --------------------------------------------------------

    fn target(&self) -> &str {
        match &self.bind {
            Some(text) => text,
            None => &self.lines[self.cursor.line],
        }
    }

    fn target_mut(&mut self) -> &mut String {
        let line = self.cursor.line;
        match &mut self.bind {
            Some(text) => text,
            None => &mut self.lines[line],
        }
    }

    fn push_record(&mut self, record: EditRecord) {
        // Bound edits are never undoable.
        if self.bind.is_none() {
            self.undo.push(record);
        }
    }

    // -- Horizontal motion --------------------------------------------------

    /// Move one column left, wrapping to the end of the previous line at
    /// column 0. Saturates at the document start; never wraps while bound.
    pub fn move_left(&mut self) {
        if self.cursor.col == 0 {
            if self.cursor.line == 0 || self.bind.is_some() {
                return;
            }
            self.cursor.line -= 1;
            self.cursor.col = self.lines[self.cursor.line].len();
        } else {
            self.cursor.col -= 1;
        }
    }

    /// Move one column right, wrapping to the start of the next line at
    /// end-of-line. Saturates at the document end; never wraps while bound.
    pub fn move_right(&mut self) {
        let len = self.target().len();
        if self.cursor.col == len {
            if self.bind.is_some() || self.cursor.line + 1 == self.lines.len() {
                return;
            }
            self.cursor.line += 1;
            self.cursor.col = 0;
        } else {
            self.cursor.col += 1;
        }
    }

    /// Jump to column 0.
    pub const fn jump_start(&mut self) {
        self.cursor.col = 0;
    }

    /// Jump past the last character of the current line (or bound string).
    pub fn jump_end(&mut self) {
        self.cursor.col = self.target().len();
    }

    // -- Vertical motion ----------------------------------------------------

    /// Move up one line, clamping the column to the target line's length.
    /// No-op on the first line or while bound.
    pub fn move_up(&mut self) {
        if self.cursor.line == 0 || self.bind.is_some() {
            return;
        }
        self.cursor.line -= 1;
        self.cursor.col = self.cursor.col.min(self.lines[self.cursor.line].len());
    }

    /// Move down one line, clamping the column to the target line's length.
    /// No-op on the last line or while bound.
    pub fn move_down(&mut self) {
        if self.bind.is_some() || self.cursor.line + 1 == self.lines.len() {
            return;
        }
        self.cursor.line += 1;
        self.cursor.col = self.cursor.col.min(self.lines[self.cursor.line].len());
    }

    /// Jump to 1-indexed line `line`, column 0, and recenter. Lines past
    /// the document are silently ignored (no clamping to the last line).
    pub fn goto_line(&mut self, line: usize) {
        let Some(target) = line.checked_sub(1) else {
            return;
        };
        if target >= self.lines.len() {
            return;
        }
        self.cursor = Position::new(target, 0);
        self.saved_col = 0;
        // Recenter anchors on the 1-indexed argument, one past the target.
        self.view.center(line, self.lines.len());
    }

    // -- Word motion --------------------------------------------------------

    /// Advance to the next word delimiter, or to end-of-line when the rest
    /// of the line holds none. The character at the cursor is skipped, so
    /// repeating the motion from a delimiter makes progress.
    pub fn advance_word(&mut self) {
        let col = self.cursor.col;
        let (offset, len) = {
            let target = self.target();
            (word::next_delimiter(&target[col..]), target.len())
        };
        self.cursor.col = offset.map_or(len, |o| col + o);
    }

    /// Move back to the previous word delimiter, or to column 0 when the
    /// prefix holds none.
    pub fn advance_word_backwards(&mut self) {
        let col = self.cursor.col;
        let offset = word::prev_delimiter(&self.target()[..col]);
        self.cursor.col = offset.map_or(0, |o| col - o);
    }

    // -- Mutation -----------------------------------------------------------

    /// Insert one character at the cursor. A `'\n'` splits the current line
    /// (or opens a new one at the boundaries) unless a bound edit is
    /// active, in which case it is inserted literally.
    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' && self.bind.is_none() {
            let line = self.cursor.line;
            let col = self.cursor.col;
            if col == self.lines[line].len() {
                self.lines.insert(line + 1, String::new());
                self.push_record(EditRecord::LineOpened { pos: self.cursor });
            } else if col == 0 {
                self.lines.insert(line, String::new());
                self.push_record(EditRecord::LineSplit {
                    pos: self.cursor,
                    parts: None,
                });
            } else {
                let tail = self.lines[line].split_off(col);
                let head = self.lines[line].clone();
                self.lines.insert(line + 1, tail.clone());
                self.push_record(EditRecord::LineSplit {
                    pos: self.cursor,
                    parts: Some((head, tail)),
                });
            }
            self.cursor.line += 1;
            self.cursor.col = 0;
        } else {
            let col = self.cursor.col;
            self.target_mut().insert(col, ch);
            self.push_record(EditRecord::CharInserted { pos: self.cursor });
            self.cursor.col += 1;
        }
    }

    /// Insert a string at the cursor and advance past it. Bulk insertion is
    /// not undoable — no record kind exists for it.
    pub fn insert_text(&mut self, text: &str) {
        let col = self.cursor.col;
        self.target_mut().insert_str(col, text);
        self.cursor.col += text.len();
    }

    /// Backspace: remove the character before the cursor, or join the
    /// current line into the one above at column 0. Saturates at the
    /// document origin; the join never happens while bound.
    pub fn delete_char_before(&mut self) {
        if self.cursor.col == 0 {
            if self.cursor.line == 0 || self.bind.is_some() {
                return;
            }
            let line = self.cursor.line;
            let prev_len = self.lines[line - 1].len();
            let record = if self.lines[line].is_empty() {
                EditRecord::LineJoined {
                    pos: self.cursor,
                    line: String::new(),
                    prev: None,
                }
            } else {
                EditRecord::LineJoined {
                    pos: self.cursor,
                    line: self.lines[line].clone(),
                    prev: Some(self.lines[line - 1].clone()),
                }
            };
            self.push_record(record);
            let tail = self.lines.remove(line);
            self.lines[line - 1].push_str(&tail);
            self.cursor.line -= 1;
            self.cursor.col = prev_len;
        } else {
            let col = self.cursor.col;
            let pos = self.cursor;
            let ch = self.target_mut().remove(col - 1);
            self.push_record(EditRecord::CharRemoved { pos, ch });
            self.cursor.col -= 1;
        }
    }

    /// Delete forward from the cursor through the next word delimiter
    /// (inclusive), or to end-of-line when none follows. Returns the
    /// removed text so callers can reuse it.
    pub fn delete_word(&mut self) -> String {
        let col = self.cursor.col;
        let pos = self.cursor;
        let removed = {
            let target = self.target_mut();
            let mut span = word::next_delimiter(&target[col..]).unwrap_or(target.len() - col);
            // Take one character past the delimiter, clamped to the line.
            span += 1;
            span = span.min(target.len() - col);
            let removed = target[col..col + span].to_string();
            target.replace_range(col..col + span, "");
            removed
        };
        self.push_record(EditRecord::WordRemoved {
            pos,
            text: removed.clone(),
        });
        removed
    }

    // -- Undo ---------------------------------------------------------------

    /// Revert the most recent recorded edit: document, cursor, and viewport
    /// anchor return to their pre-edit state. Strictly one record per call,
    /// LIFO, no redo. Returns `false` when the log is empty.
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.undo.pop() else {
            return false;
        };
        match record {
            EditRecord::WordRemoved { pos, text } => {
                self.cursor = pos;
                self.view.center(pos.line, self.lines.len());
                self.lines[pos.line].insert_str(pos.col, &text);
                self.cursor.col += text.len();
            }
            EditRecord::CharRemoved { pos, ch } => {
                self.cursor = pos;
                self.view.center(pos.line, self.lines.len());
                self.lines[pos.line].insert(pos.col - 1, ch);
            }
            EditRecord::LineJoined { pos, line, prev } => {
                self.cursor = Position::new(pos.line, 0);
                self.lines.insert(pos.line, line);
                self.view.center(pos.line, self.lines.len());
                if let Some(prev) = prev {
                    self.lines[pos.line - 1] = prev;
                }
            }
            EditRecord::LineOpened { pos } => {
                self.cursor = Position::new(pos.line, self.lines[pos.line].len());
                self.lines.remove(pos.line + 1);
                self.view.center(pos.line, self.lines.len());
            }
            EditRecord::LineSplit { pos, parts } => {
                self.cursor = Position::new(pos.line, 0);
                match parts {
                    Some((head, tail)) => {
                        self.lines[pos.line] = head + &tail;
                        self.lines.remove(pos.line + 1);
                    }
                    None => {
                        self.lines.remove(pos.line);
                    }
                }
                self.view.center(pos.line, self.lines.len());
            }
            EditRecord::CharInserted { pos } => {
                self.cursor = pos;
                self.lines[pos.line].remove(pos.col);
                self.view.center(pos.line, self.lines.len());
            }
        }
        true
    }

    // -- Search -------------------------------------------------------------

    /// Literal substring search from the cursor line down (or from the top
    /// with `should_offset` false). `skip_first` ignores the match at the
    /// current position once, for find-next.
    ///
    /// On a hit the cursor moves to the matching line, the saved column
    /// records the match's byte offset, and the viewport recenters. The
    /// returned status string is 1-indexed for display.
    pub fn search(&mut self, pattern: &str, skip_first: bool, should_offset: bool) -> String {
        let start = if should_offset { self.cursor.line } else { 0 };
        let Some(hit) = search::find(&self.lines, pattern, start, skip_first) else {
            return if skip_first {
                "[No further matches]: ".to_string()
            } else {
                "[Not found]: ".to_string()
            };
        };
        self.cursor.line = hit.line;
        if self.bind.is_none() {
            // Keep the column legal on the new line; the bound column
            // indexes the bound string and must not be touched.
            self.cursor.col = self.cursor.col.min(self.lines[hit.line].len());
        }
        self.saved_col = hit.col;
        self.view.center(hit.line, self.lines.len());
        format!("[At: {}:{}]: ", hit.line + 1, hit.col + 1)
    }

    // -- File I/O -----------------------------------------------------------

    /// Load `path` into the buffer, replacing the document.
    ///
    /// When `old_path` is given, the current position is snapshotted for it
    /// first. If `path` was opened before in this session, its saved
    /// position is restored; otherwise the cursor and viewport reset to the
    /// origin and a zero snapshot is created (so the path shows up in
    /// [`saved_paths`](Self::saved_paths)). The undo log is cleared
    /// unconditionally — undo never crosses files.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read; the buffer is left
    /// untouched in that case.
    pub fn open_file(&mut self, old_path: Option<&Path>, path: &Path) -> io::Result<()> {
        let text = fs::read_to_string(path)?;
        if let Some(old) = old_path {
            self.saved_positions.insert(
                old.to_path_buf(),
                SavedPosition {
                    col: self.saved_col,
                    line: self.cursor.line,
                    skip: self.view.skip(),
                },
            );
        }
        if let Some(entry) = self.saved_positions.get(path) {
            self.cursor = Position::new(entry.line, entry.col);
            self.view.set_skip(entry.skip);
        } else {
            self.saved_positions
                .insert(path.to_path_buf(), SavedPosition::default());
            self.cursor = Position::ZERO;
            self.view.set_skip(0);
        }
        self.saved_col = self.cursor.col;
        self.undo.clear();
        self.lines = split_lines(&text);
        if self.view.skip() > self.lines.len().saturating_sub(self.view.max_lines()) {
            self.view.set_skip(0);
        }
        // The snapshot may predate an external edit; keep the cursor legal.
        self.cursor.line = self.cursor.line.min(self.lines.len() - 1);
        self.cursor.col = self.cursor.col.min(self.lines[self.cursor.line].len());
        Ok(())
    }

    /// Write the document to `path`: lines joined by `\n`, no trailing
    /// newline after the last line.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.contents())
    }

    /// Every path a position has been saved for, in order — the buffer
    /// switcher lists these.
    #[must_use]
    pub fn saved_paths(&self) -> Vec<&Path> {
        self.saved_positions.keys().map(PathBuf::as_path).collect()
    }

    // -- Viewport -----------------------------------------------------------

    /// The text block to display; see [`View::visible_text`]. Scrolls at
    /// most one line toward the cursor per call.
    pub fn visible_text<M: Measure + ?Sized>(&mut self, measure: &M, max_width: f32) -> String {
        self.view
            .visible_text(&self.lines, self.cursor, measure, max_width)
    }
}

// An empty `lines` would break the one-line-minimum invariant, so Default
// cannot be derived.
impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Split file content on `\n`. A trailing newline yields a trailing empty
/// line entry; empty content yields one empty line.
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
