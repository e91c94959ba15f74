//! Block-level data model.

/// Language recorded for a fence opened without an info string.
pub const DEFAULT_CODE_LANGUAGE: &str = "text";

/// A structural unit of a parsed document.
///
/// Blocks own their text. Text-bearing variants (headings, paragraphs,
/// list items, block quotes) hold raw inline markup, ready for
/// [`format_inline`](crate::format_inline).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Block {
    /// ATX-style heading (`# Title`).
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Heading text, trimmed. May be empty.
        text: String,
    },

    /// A run of non-blank lines, space-joined.
    Paragraph {
        /// Paragraph text.
        text: String,
    },

    /// A single bullet or numbered line.
    ///
    /// Consecutive items are not grouped here; see
    /// [`list_runs`](super::list_runs).
    ListItem {
        /// Whether the marker was numeric (`1. `).
        ordered: bool,
        /// The number written in an ordered marker.
        index: Option<u32>,
        /// Item text.
        text: String,
    },

    /// One `> ` line. Consecutive quote lines stay separate blocks.
    BlockQuote {
        /// Quote text with the `> ` prefix stripped.
        text: String,
    },

    /// A `---` or `***` line.
    HorizontalRule,

    /// A fenced code block.
    CodeBlock {
        /// Fence info string, or [`DEFAULT_CODE_LANGUAGE`].
        language: String,
        /// Raw code, lines joined with `\n`.
        code: String,
    },

    /// A pipe table.
    Table {
        /// Data rows (separator rows excluded), cells trimmed.
        rows: Vec<Vec<String>>,
        /// Whether a separator row (`| --- |`) was seen.
        has_header: bool,
    },

    /// A passthrough block owned by the host application.
    Opaque {
        /// Marker kind (`ad` in `{{ad sidebar}}`).
        kind: String,
        /// Everything after the kind, uninterpreted.
        payload: String,
    },
}

impl Block {
    /// Raw inline markup of a text-bearing block.
    ///
    /// Returns `None` for rules, code blocks, tables and opaque blocks.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Heading { text, .. }
            | Self::Paragraph { text }
            | Self::ListItem { text, .. }
            | Self::BlockQuote { text } => Some(text),
            Self::HorizontalRule
            | Self::CodeBlock { .. }
            | Self::Table { .. }
            | Self::Opaque { .. } => None,
        }
    }

    /// Short lowercase name of the variant, used in logs and debug dumps.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::Paragraph { .. } => "paragraph",
            Self::ListItem { .. } => "list_item",
            Self::BlockQuote { .. } => "block_quote",
            Self::HorizontalRule => "horizontal_rule",
            Self::CodeBlock { .. } => "code_block",
            Self::Table { .. } => "table",
            Self::Opaque { .. } => "opaque",
        }
    }

    /// Write this block back as markup.
    ///
    /// Segmenting the result yields an equivalent block. Whitespace inside
    /// paragraphs and table cells is not preserved byte for byte.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    /// Append this block's markup to `out` (no trailing newline).
    pub fn write_markup(&self, out: &mut String) {
        match self {
            Self::Heading { level, text } => {
                for _ in 0..*level {
                    out.push('#');
                }
                out.push(' ');
                out.push_str(text);
            }
            Self::Paragraph { text } => out.push_str(text),
            Self::ListItem {
                ordered,
                index,
                text,
            } => {
                if *ordered {
                    out.push_str(&index.unwrap_or(1).to_string());
                    out.push_str(". ");
                } else {
                    out.push_str("- ");
                }
                out.push_str(text);
            }
            Self::BlockQuote { text } => {
                out.push_str("> ");
                out.push_str(text);
            }
            Self::HorizontalRule => out.push_str("---"),
            Self::CodeBlock { language, code } => {
                out.push_str("```");
                out.push_str(language);
                out.push('\n');
                out.push_str(code);
                out.push_str("\n```");
            }
            Self::Table { rows, has_header } => {
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    write_table_row(out, row.iter().map(String::as_str));
                    if i == 0 && *has_header {
                        out.push('\n');
                        write_table_row(out, row.iter().map(|_| "---"));
                    }
                }
            }
            Self::Opaque { kind, payload } => {
                out.push_str("{{");
                out.push_str(kind);
                if !payload.is_empty() {
                    out.push(' ');
                    out.push_str(payload);
                }
                out.push_str("}}");
            }
        }
    }
}

fn write_table_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(cell);
        out.push_str(" |");
    }
}

/// Write a block sequence back as markup, one blank line between blocks.
pub fn blocks_to_markup(blocks: &[Block]) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        block.write_markup(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_accessor() {
        let heading = Block::Heading {
            level: 2,
            text: "Intro".into(),
        };
        assert_eq!(heading.text(), Some("Intro"));
        assert_eq!(Block::HorizontalRule.text(), None);
        let code = Block::CodeBlock {
            language: "rust".into(),
            code: "fn main() {}".into(),
        };
        assert_eq!(code.text(), None);
    }

    #[test]
    fn test_heading_markup() {
        let block = Block::Heading {
            level: 3,
            text: "Setup".into(),
        };
        assert_eq!(block.to_markup(), "### Setup");
    }

    #[test]
    fn test_ordered_list_markup_defaults_index() {
        let block = Block::ListItem {
            ordered: true,
            index: None,
            text: "first".into(),
        };
        assert_eq!(block.to_markup(), "1. first");
    }

    #[test]
    fn test_table_markup_with_header() {
        let block = Block::Table {
            rows: vec![
                vec!["A".into(), "B".into()],
                vec!["1".into(), "2".into()],
            ],
            has_header: true,
        };
        assert_eq!(block.to_markup(), "| A | B |\n| --- | --- |\n| 1 | 2 |");
    }

    #[test]
    fn test_opaque_markup_without_payload() {
        let block = Block::Opaque {
            kind: "ad".into(),
            payload: String::new(),
        };
        assert_eq!(block.to_markup(), "{{ad}}");
    }

    #[test]
    fn test_blocks_to_markup_separates_with_blank_line() {
        let blocks = vec![Block::HorizontalRule, Block::Paragraph { text: "x".into() }];
        assert_eq!(blocks_to_markup(&blocks), "---\n\nx");
    }
}
