//! Block parser implementation.

use crate::Options;
use crate::limits;

use super::model::{Block, DEFAULT_CODE_LANGUAGE};
use super::opaque::parse_opaque_marker;
use super::table::{TableState, is_table_line};

/// State for an open fenced code block.
#[derive(Debug)]
struct FenceState<'a> {
    /// Info string from the opening fence (already defaulted).
    language: String,
    /// Verbatim content lines.
    lines: Vec<&'a str>,
}

/// Block parser state.
///
/// Single forward pass over lines. Only fences, tables and paragraphs carry
/// state from one line to the next.
pub struct BlockParser<'a> {
    /// Input text.
    input: &'a str,
    /// Parser options.
    options: Options,
    /// Trimmed lines of the paragraph being accumulated.
    paragraph_lines: Vec<&'a str>,
    /// Current fenced code block, if inside one.
    fence_state: Option<FenceState<'a>>,
    /// Current table, if inside one.
    table_state: Option<TableState>,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser with default options.
    pub fn new(input: &'a str) -> Self {
        Self::new_with_options(input, Options::default())
    }

    /// Create a new block parser with options.
    pub fn new_with_options(input: &'a str, options: Options) -> Self {
        Self {
            input,
            options,
            paragraph_lines: Vec::new(),
            fence_state: None,
            table_state: None,
        }
    }

    /// Parse all lines and append the resulting blocks.
    pub fn parse(&mut self, blocks: &mut Vec<Block>) {
        // Split on `\n` only: fence content keeps any `\r` it carries
        for (line_no, raw) in self.input.split_terminator('\n').enumerate() {
            self.parse_line(line_no, raw, blocks);
        }

        // Close whatever is still open at end of input
        self.close_paragraph(blocks);
        self.close_table(blocks);
        self.close_fence(blocks);
    }

    /// Parse a single line.
    ///
    /// `raw` still carries the `\r` of a CRLF line ending; only fence
    /// content sees it.
    fn parse_line(&mut self, line_no: usize, raw: &'a str, blocks: &mut Vec<Block>) {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        // Inside a fence every line is content until the closing fence
        if self.fence_state.is_some() {
            if fence_len(line.trim_start()) >= limits::MIN_FENCE_LEN {
                log::trace!("line {line_no}: closing fence");
                self.close_fence(blocks);
            } else if let Some(fence) = self.fence_state.as_mut() {
                fence.lines.push(raw);
            }
            return;
        }

        let stripped = line.trim_start();
        let trimmed = stripped.trim_end();

        // Table mode decides before any other rule
        if let Some(table) = self.table_state.as_mut() {
            if is_table_line(trimmed) {
                log::trace!("line {line_no}: table row");
                table.push_line(trimmed);
                return;
            }
            self.close_table(blocks);
        }

        if !self.paragraph_lines.is_empty() {
            if trimmed.is_empty() {
                self.close_paragraph(blocks);
                return;
            }
            if !interrupts_paragraph(stripped) {
                log::trace!("line {line_no}: paragraph continuation");
                self.paragraph_lines.push(trimmed);
                return;
            }
            self.close_paragraph(blocks);
        }

        self.classify_line(line_no, stripped, blocks);
    }

    /// Classify a line outside any multi-line construct.
    ///
    /// `stripped` has its leading whitespace removed. Rules run in fixed
    /// order; the first match wins.
    fn classify_line(&mut self, line_no: usize, stripped: &'a str, blocks: &mut Vec<Block>) {
        let trimmed = stripped.trim_end();

        if self.try_code_fence(trimmed) {
            log::trace!("line {line_no}: opening fence");
            return;
        }

        if self.options.opaque_blocks {
            if let Some(marker) = parse_opaque_marker(trimmed) {
                log::trace!("line {line_no}: opaque block {:?}", marker.kind);
                blocks.push(Block::Opaque {
                    kind: marker.kind.to_owned(),
                    payload: marker.payload.to_owned(),
                });
                return;
            }
        }

        if let Some((level, text)) = parse_heading(stripped) {
            log::trace!("line {line_no}: heading level {level}");
            blocks.push(Block::Heading {
                level,
                text: text.to_owned(),
            });
            return;
        }

        if is_horizontal_rule(trimmed) {
            log::trace!("line {line_no}: horizontal rule");
            blocks.push(Block::HorizontalRule);
            return;
        }

        if let Some(text) = parse_block_quote(stripped) {
            log::trace!("line {line_no}: block quote");
            blocks.push(Block::BlockQuote {
                text: text.to_owned(),
            });
            return;
        }

        if let Some(item) = parse_list_marker(stripped) {
            log::trace!("line {line_no}: list item (ordered: {})", item.ordered);
            blocks.push(Block::ListItem {
                ordered: item.ordered,
                index: item.index,
                text: item.text.to_owned(),
            });
            return;
        }

        if is_table_line(trimmed) {
            log::trace!("line {line_no}: table start");
            self.table_state = Some(TableState::new(trimmed));
            return;
        }

        if trimmed.is_empty() {
            return;
        }

        log::trace!("line {line_no}: paragraph start");
        self.paragraph_lines.push(trimmed);
    }

    /// Try to open a fenced code block.
    /// Returns true if successful.
    fn try_code_fence(&mut self, trimmed: &str) -> bool {
        let len = fence_len(trimmed);
        if len < limits::MIN_FENCE_LEN {
            return false;
        }

        let info = trimmed[len..].trim();
        let language = if info.is_empty() {
            DEFAULT_CODE_LANGUAGE.to_owned()
        } else {
            info.to_owned()
        };

        self.fence_state = Some(FenceState {
            language,
            lines: Vec::new(),
        });
        true
    }

    /// Emit the open code block, if any.
    fn close_fence(&mut self, blocks: &mut Vec<Block>) {
        if let Some(fence) = self.fence_state.take() {
            blocks.push(Block::CodeBlock {
                language: fence.language,
                code: fence.lines.join("\n"),
            });
        }
    }

    /// Emit the open table, if it has any data rows.
    fn close_table(&mut self, blocks: &mut Vec<Block>) {
        let Some(table) = self.table_state.take() else {
            return;
        };

        if table.rows.is_empty() {
            log::debug!("dropping table with no data rows");
            return;
        }

        blocks.push(Block::Table {
            rows: table.rows,
            has_header: table.has_header,
        });
    }

    /// Emit the accumulated paragraph, if any.
    fn close_paragraph(&mut self, blocks: &mut Vec<Block>) {
        if self.paragraph_lines.is_empty() {
            return;
        }

        let text = self.paragraph_lines.join(" ");
        self.paragraph_lines.clear();
        blocks.push(Block::Paragraph { text });
    }
}

/// Length of the leading backtick run.
#[inline]
fn fence_len(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b'`').count()
}

/// Check whether a line ends paragraph accumulation.
///
/// Headings, fences, block quotes, list items and tables interrupt a
/// paragraph; everything else non-blank continues it.
fn interrupts_paragraph(stripped: &str) -> bool {
    fence_len(stripped) >= limits::MIN_FENCE_LEN
        || parse_heading(stripped).is_some()
        || parse_block_quote(stripped).is_some()
        || parse_list_marker(stripped).is_some()
        || is_table_line(stripped.trim_end())
}

/// Parse `#{1,6} text`. Exactly one space is required after the hashes.
fn parse_heading(stripped: &str) -> Option<(u8, &str)> {
    let level = stripped.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > limits::MAX_HEADING_LEVEL {
        return None;
    }

    let text = stripped[level..].strip_prefix(' ')?;
    Some((level as u8, text.trim()))
}

/// A line of only `-` or only `*`, at least three long.
fn is_horizontal_rule(trimmed: &str) -> bool {
    let Some(&marker) = trimmed.as_bytes().first() else {
        return false;
    };

    (marker == b'-' || marker == b'*')
        && trimmed.len() >= 3
        && trimmed.bytes().all(|b| b == marker)
}

fn parse_block_quote(stripped: &str) -> Option<&str> {
    stripped.strip_prefix("> ").map(str::trim)
}

/// A parsed list marker with its item text.
#[derive(Debug, PartialEq, Eq)]
struct ListMarker<'a> {
    ordered: bool,
    index: Option<u32>,
    text: &'a str,
}

/// Parse `- `, `* ` or `N. ` list markers.
fn parse_list_marker(stripped: &str) -> Option<ListMarker<'_>> {
    if let Some(text) = stripped
        .strip_prefix("- ")
        .or_else(|| stripped.strip_prefix("* "))
    {
        return Some(ListMarker {
            ordered: false,
            index: None,
            text: text.trim(),
        });
    }

    let digits = stripped.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let text = stripped[digits..].strip_prefix(". ")?;
    Some(ListMarker {
        ordered: true,
        // Numbers past u32::MAX keep the item but lose the index
        index: stripped[..digits].parse::<u32>().ok(),
        text: text.trim(),
    })
}
