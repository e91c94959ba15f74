//! Bold, italic and underline matching.
//!
//! Each kind closes at the nearest matching delimiter after a non-empty
//! run of content. Bold is tried before italic so `**` is never split into
//! two italic markers.

use super::node::InlineNode;
use super::scan::{Lookahead, Needle};

/// Emphasis flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisKind {
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `__underline__`
    Underline,
}

impl EmphasisKind {
    /// Delimiter bytes that open and close this kind.
    #[inline]
    pub fn delimiter(self) -> &'static [u8] {
        match self {
            Self::Bold => b"**",
            Self::Italic => b"*",
            Self::Underline => b"__",
        }
    }

    #[inline]
    fn needle(self) -> Needle {
        match self {
            Self::Bold => Needle::DoubleStar,
            Self::Italic => Needle::Star,
            Self::Underline => Needle::DoubleUnderscore,
        }
    }

    /// Wrap formatted content in the node for this kind.
    pub fn wrap(self, children: Vec<InlineNode>) -> InlineNode {
        match self {
            Self::Bold => InlineNode::Bold(children),
            Self::Italic => InlineNode::Italic(children),
            Self::Underline => InlineNode::Underline(children),
        }
    }
}

/// A matched emphasis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmphasisMatch<'a> {
    /// Which kind matched.
    pub kind: EmphasisKind,
    /// Raw content between the delimiters (formatted by the caller).
    pub content: &'a str,
    /// Offset just past the closing delimiter.
    pub end: usize,
}

/// Match one emphasis kind at `pos`.
pub fn match_emphasis<'a>(
    text: &'a str,
    pos: usize,
    kind: EmphasisKind,
    lookahead: &mut Lookahead<'_>,
) -> Option<EmphasisMatch<'a>> {
    let delim = kind.delimiter();
    if !text.as_bytes()[pos..].starts_with(delim) {
        return None;
    }

    let content_start = pos + delim.len();
    let close = lookahead.find(kind.needle(), content_start)?;
    if close == content_start {
        return None;
    }

    Some(EmphasisMatch {
        kind,
        content: &text[content_start..close],
        end: close + delim.len(),
    })
}
