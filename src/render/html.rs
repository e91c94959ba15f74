//! HTML target.
//!
//! Text and attribute values are escaped. Code blocks carry a
//! `language-*` class for client-side highlighters. Opaque blocks are
//! looked up by kind in an [`OpaqueRegistry`]; unknown kinds become an
//! empty `<div>` with `data-kind`/`data-payload` attributes the host can
//! hydrate later.

use rustc_hash::FxHashMap;

use super::{Render, Row, render_blocks};
use crate::Options;
use crate::block::Block;
use crate::escape;
use crate::inline::InlineNode;

/// Writes the host markup for one opaque block.
///
/// Receives the payload and the output buffer. What it writes is emitted
/// as-is, without escaping.
pub type OpaqueHandler = Box<dyn Fn(&str, &mut String) + Send + Sync>;

/// Opaque block handlers keyed by kind.
///
/// # Example
/// ```
/// use lessonmark::render::{OpaqueRegistry, render_html};
/// use lessonmark::{Options, segment_blocks};
///
/// let mut registry = OpaqueRegistry::new();
/// registry.register("ad", |slot, out| {
///     out.push_str("<aside class=\"ad\">");
///     out.push_str(slot);
///     out.push_str("</aside>");
/// });
///
/// let blocks = segment_blocks("{{ad sidebar}}");
/// let html = render_html(&blocks, &Options::default(), &registry);
/// assert_eq!(html, "<aside class=\"ad\">sidebar</aside>\n");
/// ```
#[derive(Default)]
pub struct OpaqueRegistry {
    handlers: FxHashMap<String, OpaqueHandler>,
}

impl OpaqueRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for `kind`, replacing any previous one.
    pub fn register<F>(&mut self, kind: impl Into<String>, handler: F)
    where
        F: Fn(&str, &mut String) + Send + Sync + 'static,
    {
        self.handlers.insert(kind.into(), Box::new(handler));
    }

    /// Whether a handler exists for `kind`.
    pub fn contains(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    fn get(&self, kind: &str) -> Option<&OpaqueHandler> {
        self.handlers.get(kind)
    }
}

impl std::fmt::Debug for OpaqueRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

/// HTML renderer with a pre-allocated output buffer.
pub struct HtmlRenderer<'r> {
    out: String,
    registry: &'r OpaqueRegistry,
}

impl<'r> HtmlRenderer<'r> {
    /// Create a renderer, reserving room for roughly `input_len` bytes of
    /// source markup.
    pub fn with_capacity_for(input_len: usize, registry: &'r OpaqueRegistry) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
            registry,
        }
    }

    /// Consume the renderer and return the HTML.
    pub fn into_string(self) -> String {
        self.out
    }

    #[inline]
    fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    #[inline]
    fn write_escaped_text(&mut self, text: &str) {
        escape::escape_text_into(&mut self.out, text);
    }

    #[inline]
    fn write_escaped_attr(&mut self, value: &str) {
        escape::escape_attr_into(&mut self.out, value);
    }

    fn write_inline(&mut self, nodes: &[InlineNode]) {
        for node in nodes {
            match node {
                InlineNode::Text(text) => self.write_escaped_text(text),
                InlineNode::Bold(children) => self.write_wrapped("strong", children),
                InlineNode::Italic(children) => self.write_wrapped("em", children),
                InlineNode::Underline(children) => self.write_wrapped("u", children),
                InlineNode::Code(code) => {
                    self.write_str("<code>");
                    self.write_escaped_text(code);
                    self.write_str("</code>");
                }
                InlineNode::Link { label, href } => {
                    self.write_str("<a href=\"");
                    self.write_escaped_attr(href);
                    self.write_str("\">");
                    self.write_inline(label);
                    self.write_str("</a>");
                }
            }
        }
    }

    fn write_wrapped(&mut self, tag: &str, children: &[InlineNode]) {
        self.write_str("<");
        self.write_str(tag);
        self.write_str(">");
        self.write_inline(children);
        self.write_str("</");
        self.write_str(tag);
        self.write_str(">");
    }

    fn write_row(&mut self, cell_tag: &str, row: &Row) {
        self.write_str("<tr>");
        for cell in row {
            self.write_str("<");
            self.write_str(cell_tag);
            self.write_str(">");
            self.write_inline(cell);
            self.write_str("</");
            self.write_str(cell_tag);
            self.write_str(">");
        }
        self.write_str("</tr>\n");
    }
}

impl Render for HtmlRenderer<'_> {
    fn heading(&mut self, level: u8, content: &[InlineNode]) {
        let level = level.to_string();
        self.write_str("<h");
        self.write_str(&level);
        self.write_str(">");
        self.write_inline(content);
        self.write_str("</h");
        self.write_str(&level);
        self.write_str(">\n");
    }

    fn paragraph(&mut self, content: &[InlineNode]) {
        self.write_str("<p>");
        self.write_inline(content);
        self.write_str("</p>\n");
    }

    fn list_start(&mut self, ordered: bool, start: Option<u32>) {
        match (ordered, start) {
            (false, _) => self.write_str("<ul>\n"),
            (true, Some(n)) if n != 1 => {
                self.write_str("<ol start=\"");
                self.write_str(&n.to_string());
                self.write_str("\">\n");
            }
            (true, _) => self.write_str("<ol>\n"),
        }
    }

    fn list_item(&mut self, content: &[InlineNode]) {
        self.write_str("<li>");
        self.write_inline(content);
        self.write_str("</li>\n");
    }

    fn list_end(&mut self, ordered: bool) {
        self.write_str(if ordered { "</ol>\n" } else { "</ul>\n" });
    }

    fn block_quote(&mut self, content: &[InlineNode]) {
        self.write_str("<blockquote>");
        self.write_inline(content);
        self.write_str("</blockquote>\n");
    }

    fn horizontal_rule(&mut self) {
        self.write_str("<hr />\n");
    }

    fn code_block(&mut self, language: &str, code: &str) {
        self.write_str("<pre><code class=\"language-");
        self.write_escaped_attr(language);
        self.write_str("\">");
        self.write_escaped_text(code);
        self.write_str("</code></pre>\n");
    }

    fn table(&mut self, rows: &[Row], has_header: bool) {
        self.write_str("<table>\n");
        let body = match rows.split_first() {
            Some((head, rest)) if has_header => {
                self.write_str("<thead>\n");
                self.write_row("th", head);
                self.write_str("</thead>\n");
                rest
            }
            _ => rows,
        };
        if !body.is_empty() {
            self.write_str("<tbody>\n");
            for row in body {
                self.write_row("td", row);
            }
            self.write_str("</tbody>\n");
        }
        self.write_str("</table>\n");
    }

    fn opaque(&mut self, kind: &str, payload: &str) {
        if let Some(handler) = self.registry.get(kind) {
            handler(payload, &mut self.out);
            self.write_str("\n");
            return;
        }

        log::debug!("no opaque handler for kind {kind:?}, emitting placeholder");
        self.write_str("<div data-kind=\"");
        self.write_escaped_attr(kind);
        self.write_str("\" data-payload=\"");
        self.write_escaped_attr(payload);
        self.write_str("\"></div>\n");
    }
}

/// Render blocks to HTML using `registry` for opaque blocks.
pub fn render_html(blocks: &[Block], options: &Options, registry: &OpaqueRegistry) -> String {
    let size_hint = blocks
        .iter()
        .map(|b| b.text().map_or(16, str::len))
        .sum::<usize>();
    let mut renderer = HtmlRenderer::with_capacity_for(size_hint, registry);
    render_blocks(blocks, options, &mut renderer);
    renderer.into_string()
}
