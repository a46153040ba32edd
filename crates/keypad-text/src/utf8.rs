//! Codepoint helpers over raw UTF-8 byte offsets, and the fixed-capacity byte
//! buffer shared by the input engine and the layout engine.
//!
//! Offsets handed to these helpers may come straight from host navigation, so
//! every function clamps instead of trusting its input.

use core::{ops::Range, str};

#[inline]
pub const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Whether `offset` sits between two codepoints (or at either end).
pub fn is_boundary(bytes: &[u8], offset: usize) -> bool {
    match bytes.get(offset) {
        Some(&byte) => !is_continuation(byte),
        None => offset == bytes.len(),
    }
}

/// Clamps `offset` into `0..=len` and walks back to the nearest boundary.
pub fn snap_back(bytes: &[u8], offset: usize) -> usize {
    let mut offset = offset.min(bytes.len());
    while offset > 0 && !is_boundary(bytes, offset) {
        offset -= 1;
    }
    offset
}

/// Start of the codepoint that ends at `offset`.
pub fn prev_boundary(bytes: &[u8], offset: usize) -> usize {
    let offset = snap_back(bytes, offset);
    if offset == 0 {
        0
    } else {
        snap_back(bytes, offset - 1)
    }
}

/// End of the codepoint that starts at `offset`.
pub fn next_boundary(bytes: &[u8], offset: usize) -> usize {
    let len = bytes.len();
    let mut offset = snap_back(bytes, offset);
    if offset >= len {
        return len;
    }

    offset += 1;
    while offset < len && is_continuation(bytes[offset]) {
        offset += 1;
    }
    offset
}

/// Moves `offset` by `delta` whole codepoints, stopping at either end.
pub fn step_codepoints(bytes: &[u8], offset: usize, delta: isize) -> usize {
    let mut offset = snap_back(bytes, offset);
    if delta >= 0 {
        for _ in 0..delta.unsigned_abs() {
            if offset >= bytes.len() {
                break;
            }
            offset = next_boundary(bytes, offset);
        }
    } else {
        for _ in 0..delta.unsigned_abs() {
            if offset == 0 {
                break;
            }
            offset = prev_boundary(bytes, offset);
        }
    }
    offset
}

/// Inline UTF-8 byte buffer with a fixed capacity.
///
/// Writes that would not fit are refused as a whole, so the contents are
/// always valid UTF-8.
#[derive(Clone)]
pub struct Utf8Buffer<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> Default for Utf8Buffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Debug for Utf8Buffer<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Utf8Buffer").field(&self.as_str()).finish()
    }
}

impl<const N: usize> Utf8Buffer<N> {
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; N],
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn as_str(&self) -> &str {
        if self.len == 0 {
            return "";
        }

        str::from_utf8(&self.bytes[..self.len]).unwrap_or("")
    }

    /// Appends `text` if it fits entirely.
    pub fn push_str(&mut self, text: &str) -> bool {
        self.insert_str(self.len, text)
    }

    /// Replaces the contents with as many leading codepoints of `text` as fit.
    pub fn set_truncated(&mut self, text: &str) {
        self.len = 0;

        for ch in text.chars() {
            let mut utf8 = [0u8; 4];
            let encoded = ch.encode_utf8(&mut utf8).as_bytes();
            if self.len + encoded.len() > N {
                break;
            }

            self.bytes[self.len..self.len + encoded.len()].copy_from_slice(encoded);
            self.len += encoded.len();
        }
    }

    /// Inserts `text` at `offset` (snapped back to a boundary). Returns `false`
    /// and leaves the buffer untouched when there is no room.
    pub fn insert_str(&mut self, offset: usize, text: &str) -> bool {
        let extra = text.len();
        if self.len + extra > N {
            return false;
        }
        if extra == 0 {
            return true;
        }

        let at = snap_back(self.as_bytes(), offset);
        self.bytes.copy_within(at..self.len, at + extra);
        self.bytes[at..at + extra].copy_from_slice(text.as_bytes());
        self.len += extra;
        true
    }

    pub fn insert_char(&mut self, offset: usize, ch: char) -> bool {
        let mut utf8 = [0u8; 4];
        self.insert_str(offset, ch.encode_utf8(&mut utf8))
    }

    /// Removes `range`, with both ends snapped back to boundaries.
    pub fn remove(&mut self, range: Range<usize>) {
        let start = snap_back(self.as_bytes(), range.start);
        let end = snap_back(self.as_bytes(), range.end);
        if end <= start {
            return;
        }

        self.bytes.copy_within(end..self.len, start);
        self.len -= end - start;
    }
}
