//! Code span matching.
//!
//! Code spans have highest precedence among inline elements. Content is
//! taken verbatim: markers inside a code span are never formatted.

use super::scan::{Lookahead, Needle};

/// A matched code span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpan<'a> {
    /// Text between the backticks.
    pub content: &'a str,
    /// Offset just past the closing backtick.
    pub end: usize,
}

/// Match `` `content` `` starting at `pos`.
///
/// The closer is the next backtick; an empty span (two adjacent backticks)
/// does not match.
pub fn match_code_span<'a>(
    text: &'a str,
    pos: usize,
    lookahead: &mut Lookahead<'_>,
) -> Option<CodeSpan<'a>> {
    if text.as_bytes().get(pos) != Some(&b'`') {
        return None;
    }

    let open_end = pos + 1;
    let close = lookahead.find(Needle::Backtick, open_end)?;
    if close == open_end {
        return None;
    }

    Some(CodeSpan {
        content: &text[open_end..close],
        end: close + 1,
    })
}
