//! Word boundaries — delimiter scanning for word motions and word deletion.
//!
//! Word motion here is simpler than Vim's class-based model: a fixed set of
//! delimiter bytes separates words, and motions land on the first delimiter
//! found. Two quirks are part of the contract:
//!
//! - The byte at the cursor itself is **skipped**, so repeating a motion
//!   while sitting on a delimiter still makes progress.
//! - The backward scan reports the offset counted from the *end* of the
//!   scanned prefix, which is what the cursor subtracts.
//!
//! Scans operate on bytes. All delimiters are ASCII, and columns in this
//! crate are byte offsets (see [`crate::position`]).

/// The delimiter set that separates words.
pub const DELIMITERS: &str = " \t\n[]{}/\\*()=_-,.";

/// True if `byte` is one of [`DELIMITERS`].
#[inline]
#[must_use]
pub fn is_delimiter(byte: u8) -> bool {
    DELIMITERS.as_bytes().contains(&byte)
}

/// Offset of the first delimiter in `text`, never examining the byte at
/// offset 0. Returns `None` when the rest of `text` holds no delimiter.
#[must_use]
pub fn next_delimiter(text: &str) -> Option<usize> {
    text.bytes()
        .enumerate()
        .skip(1)
        .find(|&(_, byte)| is_delimiter(byte))
        .map(|(offset, _)| offset)
}

/// Distance from the end of `text` back to the nearest delimiter, never
/// examining the last byte (distance 0) or the first byte of `text`.
/// Returns `None` when no delimiter is found in that interior range.
#[must_use]
pub fn prev_delimiter(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    if len < 2 {
        return None;
    }
    (1..len - 1)
        .rev()
        .find(|&idx| is_delimiter(bytes[idx]))
        .map(|idx| len - 1 - idx)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
