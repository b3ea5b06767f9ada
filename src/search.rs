//! Search — literal substring scan over the document's lines.
//!
//! No regex, no incremental state: each call walks lines from a starting
//! line and reports the first hit. Only the **first occurrence per line** is
//! ever considered (`str::find` per line), so a second match on the same
//! line is invisible to repeat-search — it resumes on the next line. That
//! per-line granularity is part of the contract.
//!
//! `skip_first` supports "find next": the first matching line is consumed
//! silently and the scan continues below it.

// ---------------------------------------------------------------------------
// Hit
// ---------------------------------------------------------------------------

/// A search hit: the matching line and the byte offset of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// Matching line (0-indexed).
    pub line: usize,
    /// Byte offset of the match within the line.
    pub col: usize,
}

// ---------------------------------------------------------------------------
// Scan
// ---------------------------------------------------------------------------

/// Find the first line at or below `start` whose text contains `pattern`.
///
/// With `skip_first`, the first matching line is ignored once and the scan
/// resumes on the line after it.
#[must_use]
pub fn find(lines: &[String], pattern: &str, start: usize, skip_first: bool) -> Option<Hit> {
    let mut skipped = false;
    for (line, text) in lines.iter().enumerate().skip(start) {
        if let Some(col) = text.find(pattern) {
            if skip_first && !skipped {
                skipped = true;
                continue;
            }
            return Some(Hit { line, col });
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
