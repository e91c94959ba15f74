//! Inline formatter.
//!
//! A cursor walks the text of one block. At every special character the
//! constructs are tried in fixed priority order and the first match wins:
//!
//! 1. Code spans (`` `code` ``), content kept verbatim
//! 2. Bold (`**bold**`)
//! 3. Italic (`*italic*`)
//! 4. Underline (`__underline__`)
//! 5. Links (`[label](href)`)
//!
//! Everything else is text. A special character that starts nothing is
//! emitted as literal text and the cursor moves on by one byte (two for an
//! unmatched `**`), so unterminated markers never swallow the rest of the
//! line.

mod code_span;
mod emphasis;
mod links;
mod node;
pub mod scan;

pub use emphasis::EmphasisKind;
pub use node::{InlineNode, plain_text};

use crate::Options;
use crate::cursor::Cursor;
use code_span::match_code_span;
use emphasis::match_emphasis;
use links::match_link;
use node::NodeSink;
use scan::{Lookahead, is_special, next_special};

/// Emphasis kinds in match priority order.
const EMPHASIS_ORDER: [EmphasisKind; 3] = [
    EmphasisKind::Bold,
    EmphasisKind::Italic,
    EmphasisKind::Underline,
];

/// Inline formatter.
///
/// Holds only configuration; every call to [`format`](Self::format) is
/// independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineFormatter {
    options: Options,
}

impl InlineFormatter {
    /// Create a formatter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with options.
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Format inline markup into a node sequence.
    pub fn format(&self, text: &str) -> Vec<InlineNode> {
        self.format_at_depth(text, 0)
    }

    fn format_at_depth(&self, text: &str, depth: usize) -> Vec<InlineNode> {
        let mut sink = NodeSink::new();

        if depth >= self.options.max_inline_depth {
            log::debug!("inline nesting limit {depth} reached, keeping text as-is");
            sink.push_text(text);
            return sink.finish();
        }

        let bytes = text.as_bytes();
        let mut lookahead = Lookahead::new(bytes);
        let mut cursor = Cursor::new(text);

        while let Some(b) = cursor.peek() {
            let start = cursor.offset();

            if !is_special(b) {
                cursor.jump_to(next_special(bytes, start));
                sink.push_text(cursor.slice_from(start));
                continue;
            }

            match self.match_at(text, start, depth, &mut lookahead) {
                Some((node, end)) => {
                    sink.push(node);
                    cursor.jump_to(end);
                }
                None => {
                    // Unmatched marker is literal. A failed `**` stays whole
                    // so its second star cannot open an italic.
                    let width = if cursor.at_bytes(b"**") { 2 } else { 1 };
                    cursor.advance(width);
                    sink.push_text(cursor.slice_from(start));
                }
            }
        }

        sink.finish()
    }

    /// Try every construct at `pos` in priority order.
    ///
    /// Returns the node and the offset just past it.
    fn match_at(
        &self,
        text: &str,
        pos: usize,
        depth: usize,
        lookahead: &mut Lookahead<'_>,
    ) -> Option<(InlineNode, usize)> {
        if let Some(span) = match_code_span(text, pos, lookahead) {
            return Some((InlineNode::Code(span.content.to_owned()), span.end));
        }

        for kind in EMPHASIS_ORDER {
            if let Some(m) = match_emphasis(text, pos, kind, lookahead) {
                let children = self.format_at_depth(m.content, depth + 1);
                return Some((m.kind.wrap(children), m.end));
            }
        }

        if let Some(link) = match_link(text, pos, lookahead) {
            let label = self.format_at_depth(link.label, depth + 1);
            let node = InlineNode::Link {
                label,
                href: link.href.to_owned(),
            };
            return Some((node, link.end));
        }

        None
    }
}
