//! Special-character scanning and memoized delimiter lookahead.
//!
//! Every closing-delimiter search goes through [`Lookahead`], which
//! remembers the last answer per needle. The cursor only moves forward, so
//! a found position stays valid until the cursor passes it and a failed
//! search stays failed. This keeps a line full of unmatched markers linear.

use memchr::{memchr, memmem};

/// Lookup table for bytes that may start an inline construct.
const SPECIAL_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'`' as usize] = true;
    table[b'*' as usize] = true;
    table[b'_' as usize] = true;
    table[b'[' as usize] = true;
    table
};

/// Check if a byte may start an inline construct.
#[inline]
pub fn is_special(b: u8) -> bool {
    SPECIAL_TABLE[b as usize]
}

/// Offset of the next special byte at or after `from`, or `text.len()`.
#[inline]
pub fn next_special(text: &[u8], from: usize) -> usize {
    text[from..]
        .iter()
        .position(|&b| is_special(b))
        .map_or(text.len(), |n| from + n)
}

/// Closing delimiters the formatter searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Needle {
    /// `` ` `` closing a code span.
    Backtick,
    /// `*` closing italic.
    Star,
    /// `**` closing bold.
    DoubleStar,
    /// `__` closing underline.
    DoubleUnderscore,
    /// `]` closing a link label.
    CloseBracket,
    /// `)` closing a link destination.
    CloseParen,
}

impl Needle {
    const COUNT: usize = 6;

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }

    #[inline]
    fn bytes(self) -> &'static [u8] {
        match self {
            Self::Backtick => b"`",
            Self::Star => b"*",
            Self::DoubleStar => b"**",
            Self::DoubleUnderscore => b"__",
            Self::CloseBracket => b"]",
            Self::CloseParen => b")",
        }
    }
}

/// Remembered result of the last search for one needle.
#[derive(Debug, Clone, Copy)]
enum Cached {
    Unknown,
    /// First occurrence at or after `from` starts at `pos`.
    At { from: usize, pos: usize },
    /// No occurrence at or after this offset.
    MissingFrom(usize),
}

/// Memoized forward search over one inline text.
#[derive(Debug)]
pub struct Lookahead<'a> {
    text: &'a [u8],
    cache: [Cached; Needle::COUNT],
}

impl<'a> Lookahead<'a> {
    /// Create a lookahead over `text`.
    pub fn new(text: &'a [u8]) -> Self {
        Self {
            text,
            cache: [Cached::Unknown; Needle::COUNT],
        }
    }

    /// Offset of the first occurrence of `needle` at or after `from`.
    pub fn find(&mut self, needle: Needle, from: usize) -> Option<usize> {
        if from >= self.text.len() {
            return None;
        }

        match self.cache[needle.slot()] {
            Cached::At { from: start, pos } if start <= from && from <= pos => return Some(pos),
            Cached::MissingFrom(start) if from >= start => return None,
            _ => {}
        }

        let haystack = &self.text[from..];
        let found = match needle.bytes() {
            [b] => memchr(*b, haystack),
            bytes => memmem::find(haystack, bytes),
        }
        .map(|n| from + n);

        self.cache[needle.slot()] = match found {
            Some(pos) => Cached::At { from, pos },
            None => Cached::MissingFrom(from),
        };
        found
    }
}
