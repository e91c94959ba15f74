//! Plain terminal text target.
//!
//! Formatting markers are dropped and text is printed as written. Blocks
//! are separated by a blank line, items of one list by a single newline.

use super::{Render, Row, render_blocks};
use crate::Options;
use crate::block::Block;
use crate::inline::InlineNode;

const RULE_WIDTH: usize = 40;
const CODE_INDENT: &str = "    ";

/// Terminal text renderer.
#[derive(Debug, Default)]
pub struct TextRenderer {
    out: String,
    /// Number of the next ordered item, `None` outside ordered lists.
    next_number: Option<u32>,
    /// Whether the current list has emitted an item yet.
    list_has_items: bool,
}

impl TextRenderer {
    /// Create an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the renderer and return the text, newline-terminated.
    pub fn into_string(mut self) -> String {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        self.out
    }

    /// Separate a new block from the previous one.
    fn begin_block(&mut self) {
        if !self.out.is_empty() {
            self.out.push_str("\n\n");
        }
    }

    fn write_inline(&mut self, nodes: &[InlineNode]) {
        write_inline(&mut self.out, nodes);
    }
}

fn write_inline(out: &mut String, nodes: &[InlineNode]) {
    for node in nodes {
        match node {
            InlineNode::Text(text) => out.push_str(text),
            InlineNode::Code(code) => out.push_str(code),
            InlineNode::Bold(children)
            | InlineNode::Italic(children)
            | InlineNode::Underline(children) => write_inline(out, children),
            InlineNode::Link { label, href } => {
                write_inline(out, label);
                out.push_str(" (");
                out.push_str(href);
                out.push(')');
            }
        }
    }
}

fn cell_text(cell: &[InlineNode]) -> String {
    let mut out = String::new();
    write_inline(&mut out, cell);
    out
}

impl Render for TextRenderer {
    fn heading(&mut self, level: u8, content: &[InlineNode]) {
        self.begin_block();
        let start = self.out.len();
        self.write_inline(content);
        let width = self.out[start..].chars().count();

        let underline = match level {
            1 => '=',
            2 => '-',
            _ => return,
        };
        self.out.push('\n');
        self.out.extend(std::iter::repeat_n(underline, width));
    }

    fn paragraph(&mut self, content: &[InlineNode]) {
        self.begin_block();
        self.write_inline(content);
    }

    fn list_start(&mut self, ordered: bool, start: Option<u32>) {
        self.begin_block();
        self.next_number = ordered.then(|| start.unwrap_or(1));
        self.list_has_items = false;
    }

    fn list_item(&mut self, content: &[InlineNode]) {
        if self.list_has_items {
            self.out.push('\n');
        }
        self.list_has_items = true;

        match self.next_number.as_mut() {
            Some(n) => {
                self.out.push_str(&n.to_string());
                self.out.push_str(". ");
                *n = n.saturating_add(1);
            }
            None => self.out.push_str("• "),
        }
        self.write_inline(content);
    }

    fn list_end(&mut self, _ordered: bool) {
        self.next_number = None;
        self.list_has_items = false;
    }

    fn block_quote(&mut self, content: &[InlineNode]) {
        self.begin_block();
        self.out.push_str("│ ");
        self.write_inline(content);
    }

    fn horizontal_rule(&mut self) {
        self.begin_block();
        self.out.extend(std::iter::repeat_n('─', RULE_WIDTH));
    }

    fn code_block(&mut self, _language: &str, code: &str) {
        self.begin_block();
        for (i, line) in code.split('\n').enumerate() {
            if i > 0 {
                self.out.push('\n');
            }
            if !line.is_empty() {
                self.out.push_str(CODE_INDENT);
                self.out.push_str(line);
            }
        }
    }

    fn table(&mut self, rows: &[Row], has_header: bool) {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|cell| cell_text(cell)).collect())
            .collect();

        let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
        let mut widths = vec![0usize; columns];
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        self.begin_block();
        for (i, row) in cells.iter().enumerate() {
            if i > 0 {
                self.out.push('\n');
            }
            let line: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(col, &w)| {
                    let cell = row.get(col).map_or("", String::as_str);
                    format!("{cell:<w$}")
                })
                .collect();
            self.out.push_str(line.join(" | ").trim_end());

            if i == 0 && has_header {
                self.out.push('\n');
                let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w.max(1))).collect();
                self.out.push_str(&rule.join("-+-"));
            }
        }
    }

    fn opaque(&mut self, kind: &str, _payload: &str) {
        // Host widgets have no terminal form
        log::trace!("skipping opaque block {kind:?} in text output");
    }
}

/// Render blocks as plain terminal text.
pub fn render_text(blocks: &[Block], options: &Options) -> String {
    let mut renderer = TextRenderer::new();
    render_blocks(blocks, options, &mut renderer);
    renderer.into_string()
}
