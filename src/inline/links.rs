//! Link matching: `[label](href)`.
//!
//! The label runs to the first `]` and must be followed directly by `(`.
//! The destination runs to the first `)` and is not validated.

use super::scan::{Lookahead, Needle};

/// A matched inline link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkMatch<'a> {
    /// Raw label (formatted by the caller).
    pub label: &'a str,
    /// Destination, verbatim.
    pub href: &'a str,
    /// Offset just past the closing `)`.
    pub end: usize,
}

/// Match a link starting at `pos`.
pub fn match_link<'a>(
    text: &'a str,
    pos: usize,
    lookahead: &mut Lookahead<'_>,
) -> Option<LinkMatch<'a>> {
    let bytes = text.as_bytes();
    if bytes.get(pos) != Some(&b'[') {
        return None;
    }

    let label_start = pos + 1;
    let label_end = lookahead.find(Needle::CloseBracket, label_start)?;
    if label_end == label_start || bytes.get(label_end + 1) != Some(&b'(') {
        return None;
    }

    let href_start = label_end + 2;
    let href_end = lookahead.find(Needle::CloseParen, href_start)?;
    if href_end == href_start {
        return None;
    }

    Some(LinkMatch {
        label: &text[label_start..label_end],
        href: &text[href_start..href_end],
        end: href_end + 1,
    })
}
