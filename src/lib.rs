//! lessonmark: lightweight markup for lessons, chat and documentation
//!
//! Two independent stages:
//!
//! - [`segment_blocks`] splits text into a flat sequence of typed
//!   [`Block`]s (headings, paragraphs, list items, quotes, rules, fenced
//!   code, pipe tables and opaque `{{kind payload}}` passthrough blocks).
//! - [`format_inline`] turns the text of one block into a tree of
//!   [`InlineNode`]s (bold, italic, underline, code spans, links).
//!
//! Presentation lives in [`render`]: a [`Render`](render::Render) visitor
//! plus HTML and terminal text targets.
//!
//! # Design Principles
//! - Total: every input produces output; malformed markup degrades to text
//! - No regex: byte-level scanning with `memchr`
//! - Linear time on every input, including long runs of unmatched markers
//! - No global state: every call starts fresh

pub mod block;
pub mod cursor;
pub mod escape;
pub mod inline;
pub mod limits;
pub mod render;

// Re-export primary types
pub use block::{Block, BlockParser, blocks_to_markup};
pub use inline::{InlineFormatter, InlineNode, plain_text};
pub use render::{OpaqueRegistry, Render};

/// Parsing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Recognize `{{kind payload}}` lines as opaque blocks.
    pub opaque_blocks: bool,
    /// Maximum nesting of inline constructs. Deeper content stays text.
    pub max_inline_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            opaque_blocks: true,
            max_inline_depth: limits::MAX_INLINE_NESTING,
        }
    }
}

/// Split markup into blocks.
///
/// # Example
/// ```
/// use lessonmark::{Block, segment_blocks};
///
/// let blocks = segment_blocks("# Hello\n\nWorld");
/// assert_eq!(
///     blocks,
///     vec![
///         Block::Heading { level: 1, text: "Hello".into() },
///         Block::Paragraph { text: "World".into() },
///     ]
/// );
/// ```
pub fn segment_blocks(input: &str) -> Vec<Block> {
    segment_blocks_with_options(input, &Options::default())
}

/// Split markup into blocks with options.
pub fn segment_blocks_with_options(input: &str, options: &Options) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(input.len() / 64 + 1);
    let mut parser = BlockParser::new_with_options(input, *options);
    parser.parse(&mut blocks);
    log::debug!(
        "segmented {} bytes into {} blocks",
        input.len(),
        blocks.len()
    );
    blocks
}

/// Format the inline markup of one block.
///
/// # Example
/// ```
/// use lessonmark::{InlineNode, format_inline};
///
/// let nodes = format_inline("**bold** and *italic*");
/// assert_eq!(
///     nodes,
///     vec![
///         InlineNode::Bold(vec![InlineNode::Text("bold".into())]),
///         InlineNode::Text(" and ".into()),
///         InlineNode::Italic(vec![InlineNode::Text("italic".into())]),
///     ]
/// );
/// ```
pub fn format_inline(text: &str) -> Vec<InlineNode> {
    format_inline_with_options(text, &Options::default())
}

/// Format inline markup with options.
pub fn format_inline_with_options(text: &str, options: &Options) -> Vec<InlineNode> {
    InlineFormatter::with_options(*options).format(text)
}

/// Convert markup to HTML.
///
/// Opaque blocks become `<div data-kind=".." data-payload=".."></div>`
/// placeholders; use [`render::render_html`] with an [`OpaqueRegistry`] to
/// substitute host widgets.
///
/// # Example
/// ```
/// let html = lessonmark::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>\n");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert markup to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let blocks = segment_blocks_with_options(input, options);
    render::render_html(&blocks, options, &OpaqueRegistry::new())
}

/// Convert markup to plain terminal text.
///
/// # Example
/// ```
/// let text = lessonmark::to_plain_text("Some **bold** text");
/// assert_eq!(text, "Some bold text\n");
/// ```
pub fn to_plain_text(input: &str) -> String {
    let options = Options::default();
    let blocks = segment_blocks_with_options(input, &options);
    render::render_text(&blocks, &options)
}
