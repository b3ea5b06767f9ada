//! # pica-edit — a small in-memory text editing kernel
//!
//! The engine behind a minimal modal editor: a line-based document with a
//! cursor, bounded undo, literal search, viewport scrolling with horizontal
//! clipping, and per-path position memory. It renders nothing and reads no
//! input — a frontend feeds it operations and asks for the visible text.
//!
//! - **[`position`]** — `Position` (line, col), 0-indexed, columns in bytes
//! - **[`buffer`]** — `TextBuffer`: document, cursor, editing, undo, file I/O
//! - **[`history`]** — `EditRecord` and the bounded `UndoLog`
//! - **[`word`]** — delimiter scanning for word motions and word deletion
//! - **[`search`]** — literal per-line substring scan
//! - **[`view`]** — scroll state and the visible-window query
//! - **[`measure`]** — the `Measure` trait the viewport uses for text widths

pub mod buffer;
pub mod history;
pub mod measure;
pub mod position;
pub mod search;
pub mod view;
pub mod word;
