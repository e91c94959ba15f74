//! Byte cursor for scanning inline text.
//!
//! Every marker the formatter cares about is ASCII, so any offset the
//! cursor stops at next to a marker is also a UTF-8 char boundary.

/// A forward-only cursor over a string's bytes.
///
/// # Example
/// ```
/// use lessonmark::cursor::Cursor;
///
/// let mut cursor = Cursor::new("**bold**");
/// assert!(cursor.at_bytes(b"**"));
/// cursor.advance(2);
/// assert_eq!(cursor.peek(), Some(b'b'));
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `text`.
    #[inline]
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Check if the remaining input starts with `bytes`.
    #[inline]
    pub fn at_bytes(&self, bytes: &[u8]) -> bool {
        self.text.as_bytes()[self.pos..].starts_with(bytes)
    }

    /// Advance by `n` bytes, clamped to the end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.text.len());
    }

    /// Jump to an absolute offset at or after the current one.
    #[inline]
    pub fn jump_to(&mut self, offset: usize) {
        debug_assert!(offset >= self.pos);
        self.pos = offset.min(self.text.len());
    }

    /// Text between `start` and the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.text[start..self.pos]
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("len", &self.text.len())
            .finish()
    }
}
