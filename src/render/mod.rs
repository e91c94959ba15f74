//! Presentation targets.
//!
//! [`render_blocks`] walks a block sequence, formats the inline markup of
//! every text-bearing block and table cell, groups neighbouring list items
//! and hands the result to a [`Render`] implementation. One grammar, many
//! targets: adding an output format means implementing the trait, not
//! touching the parser.

mod html;
mod text;

pub use html::{HtmlRenderer, OpaqueHandler, OpaqueRegistry, render_html};
pub use text::{TextRenderer, render_text};

use crate::Options;
use crate::block::{Block, list_run};
use crate::inline::{InlineFormatter, InlineNode};

/// A formatted table row: one node sequence per cell.
pub type Row = Vec<Vec<InlineNode>>;

/// Visitor over a formatted document.
///
/// Calls arrive in document order. List items are always bracketed by
/// [`list_start`](Self::list_start) and [`list_end`](Self::list_end).
pub trait Render {
    /// A heading of `level` (1-6).
    fn heading(&mut self, level: u8, content: &[InlineNode]);

    /// A paragraph.
    fn paragraph(&mut self, content: &[InlineNode]);

    /// Open a list. `start` is the first item's number for ordered lists.
    fn list_start(&mut self, ordered: bool, start: Option<u32>);

    /// One list item inside an open list.
    fn list_item(&mut self, content: &[InlineNode]);

    /// Close the list opened by the matching `list_start`.
    fn list_end(&mut self, ordered: bool);

    /// One block quote line.
    fn block_quote(&mut self, content: &[InlineNode]);

    /// A horizontal rule.
    fn horizontal_rule(&mut self);

    /// A fenced code block; `code` is verbatim.
    fn code_block(&mut self, language: &str, code: &str);

    /// A table. With `has_header`, the first row is the header row.
    fn table(&mut self, rows: &[Row], has_header: bool);

    /// A passthrough block owned by the host.
    fn opaque(&mut self, kind: &str, payload: &str);
}

/// Drive `target` over `blocks`.
pub fn render_blocks<R: Render + ?Sized>(blocks: &[Block], options: &Options, target: &mut R) {
    let formatter = InlineFormatter::with_options(*options);
    let mut i = 0;

    while i < blocks.len() {
        if let Some(run) = list_run(blocks, i) {
            target.list_start(run.ordered, run.first_index);
            for item in &blocks[run.start..run.end] {
                if let Some(text) = item.text() {
                    target.list_item(&formatter.format(text));
                }
            }
            target.list_end(run.ordered);
            i = run.end;
            continue;
        }

        match &blocks[i] {
            Block::Heading { level, text } => target.heading(*level, &formatter.format(text)),
            Block::Paragraph { text } => target.paragraph(&formatter.format(text)),
            Block::BlockQuote { text } => target.block_quote(&formatter.format(text)),
            Block::HorizontalRule => target.horizontal_rule(),
            Block::CodeBlock { language, code } => target.code_block(language, code),
            Block::Table { rows, has_header } => {
                let rows: Vec<Row> = rows
                    .iter()
                    .map(|row| row.iter().map(|cell| formatter.format(cell)).collect())
                    .collect();
                target.table(&rows, *has_header);
            }
            Block::Opaque { kind, payload } => target.opaque(kind, payload),
            // Handled by the list_run branch above
            Block::ListItem { .. } => {}
        }
        i += 1;
    }
}
