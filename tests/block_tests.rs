//! Block segmenter tests.
//!
//! Covers the classification order, the three multi-line constructs
//! (fences, tables, paragraphs) and the documented degradations.

use lessonmark::{Block, Options, blocks_to_markup, segment_blocks, segment_blocks_with_options};

fn paragraph(text: &str) -> Block {
    Block::Paragraph { text: text.into() }
}

fn heading(level: u8, text: &str) -> Block {
    Block::Heading {
        level,
        text: text.into(),
    }
}

fn item(ordered: bool, index: Option<u32>, text: &str) -> Block {
    Block::ListItem {
        ordered,
        index,
        text: text.into(),
    }
}

fn quote(text: &str) -> Block {
    Block::BlockQuote { text: text.into() }
}

fn code(language: &str, code: &str) -> Block {
    Block::CodeBlock {
        language: language.into(),
        code: code.into(),
    }
}

fn table(rows: &[&[&str]], has_header: bool) -> Block {
    Block::Table {
        rows: rows
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect(),
        has_header,
    }
}

// === Documented examples ===

#[test]
fn table_with_header() {
    assert_eq!(
        segment_blocks("| A | B |\n|---|---|\n| 1 | 2 |"),
        vec![table(&[&["A", "B"], &["1", "2"]], true)]
    );
}

#[test]
fn opaque_sentinel() {
    assert_eq!(
        segment_blocks("{{ad sidebar-top}}"),
        vec![Block::Opaque {
            kind: "ad".into(),
            payload: "sidebar-top".into()
        }]
    );
}

#[test]
fn lesson_document() {
    let input = "\
# Variables

Values are *immutable* by default.
Use `mut` to opt in.

- shadowing
- mutation

1. read
2. write

> Note: constants differ.

```rust
let mut x = 5;
x += 1;
```

{{quiz variables-1}}

---
";
    assert_eq!(
        segment_blocks(input),
        vec![
            heading(1, "Variables"),
            paragraph("Values are *immutable* by default. Use `mut` to opt in."),
            item(false, None, "shadowing"),
            item(false, None, "mutation"),
            item(true, Some(1), "read"),
            item(true, Some(2), "write"),
            quote("Note: constants differ."),
            code("rust", "let mut x = 5;\nx += 1;"),
            Block::Opaque {
                kind: "quiz".into(),
                payload: "variables-1".into()
            },
            Block::HorizontalRule,
        ]
    );
}

// === Fences ===

#[test]
fn fence_content_is_verbatim() {
    assert_eq!(
        segment_blocks("```\n# not a heading\n  - not a list\n| no | table |\n```"),
        vec![code("text", "# not a heading\n  - not a list\n| no | table |")]
    );
}

#[test]
fn fence_language_is_trimmed() {
    assert_eq!(
        segment_blocks("```  python  \nprint()\n```"),
        vec![code("python", "print()")]
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    assert_eq!(
        segment_blocks("```py\nx = 1\n\ny = 2"),
        vec![code("py", "x = 1\n\ny = 2")]
    );
}

#[test]
fn indented_fence() {
    assert_eq!(
        segment_blocks("  ```sh\n  ls -la\n  ```"),
        vec![code("sh", "  ls -la")]
    );
}

#[test]
fn longer_fence_closes() {
    assert_eq!(
        segment_blocks("```\na\n`````\nafter"),
        vec![code("text", "a"), paragraph("after")]
    );
}

#[test]
fn fence_keeps_carriage_returns() {
    assert_eq!(
        segment_blocks("```\na\r\nb\r\n```"),
        vec![code("text", "a\r\nb\r")]
    );
}

#[test]
fn crlf_outside_fence_is_ignored() {
    assert_eq!(
        segment_blocks("## Title\r\n- item\r\n\r\ntext\r\n"),
        vec![heading(2, "Title"), item(false, None, "item"), paragraph("text")]
    );
}

#[test]
fn empty_fence() {
    assert_eq!(segment_blocks("```\n```"), vec![code("text", "")]);
}

// === Paragraph continuation ===

#[test]
fn paragraph_interrupted_by_heading() {
    assert_eq!(
        segment_blocks("intro\n## Next"),
        vec![paragraph("intro"), heading(2, "Next")]
    );
}

#[test]
fn paragraph_interrupted_by_list_and_quote() {
    assert_eq!(
        segment_blocks("intro\n- a\nmore\n> q"),
        vec![
            paragraph("intro"),
            item(false, None, "a"),
            paragraph("more"),
            quote("q"),
        ]
    );
}

#[test]
fn paragraph_interrupted_by_fence_and_table() {
    assert_eq!(
        segment_blocks("a\n```\nx\n```\nb\n| c |"),
        vec![
            paragraph("a"),
            code("text", "x"),
            paragraph("b"),
            table(&[&["c"]], false),
        ]
    );
}

#[test]
fn rule_line_continues_paragraph() {
    assert_eq!(segment_blocks("Text\n---"), vec![paragraph("Text ---")]);
}

#[test]
fn sentinel_line_continues_paragraph() {
    assert_eq!(
        segment_blocks("Text\n{{ad x}}"),
        vec![paragraph("Text {{ad x}}")]
    );
}

// === Tables ===

#[test]
fn table_ends_at_non_table_line() {
    assert_eq!(
        segment_blocks("| a | b |\n| c | d |\nafter"),
        vec![table(&[&["a", "b"], &["c", "d"]], false), paragraph("after")]
    );
}

#[test]
fn table_ends_at_blank_line() {
    assert_eq!(
        segment_blocks("| a |\n\n| b |"),
        vec![table(&[&["a"]], false), table(&[&["b"]], false)]
    );
}

#[test]
fn separator_only_table_is_dropped() {
    assert!(segment_blocks("|---|---|").is_empty());
}

#[test]
fn table_takes_precedence_over_other_rules() {
    // Inside table mode every pipe-delimited line is a row
    assert_eq!(
        segment_blocks("| a |\n|# b|"),
        vec![table(&[&["a"], &["# b"]], false)]
    );
}

#[test]
fn ragged_rows_are_kept() {
    assert_eq!(
        segment_blocks("| a | b | c |\n| d |"),
        vec![table(&[&["a", "b", "c"], &["d"]], false)]
    );
}

#[test]
fn wide_table_is_capped() {
    let line = format!("|{}", " x |".repeat(lessonmark::limits::MAX_TABLE_COLUMNS + 10));
    let blocks = segment_blocks(&line);
    let Block::Table { rows, .. } = &blocks[0] else {
        panic!("expected a table, got {blocks:?}");
    };
    assert_eq!(rows[0].len(), lessonmark::limits::MAX_TABLE_COLUMNS);
}

// === Single-line constructs ===

#[test]
fn quote_lines_are_not_merged() {
    assert_eq!(segment_blocks("> a\n> b"), vec![quote("a"), quote("b")]);
}

#[test]
fn quote_needs_space() {
    assert_eq!(segment_blocks(">a"), vec![paragraph(">a")]);
}

#[test]
fn horizontal_rules() {
    assert_eq!(
        segment_blocks("---\n\n***\n\n-----"),
        vec![Block::HorizontalRule; 3]
    );
}

#[test]
fn mixed_rule_characters_are_text() {
    assert_eq!(segment_blocks("-*-"), vec![paragraph("-*-")]);
}

#[test]
fn star_bullet_is_not_rule() {
    assert_eq!(segment_blocks("* item"), vec![item(false, None, "item")]);
}

#[test]
fn ordered_list_indexes() {
    assert_eq!(
        segment_blocks("7. seven\n08. eight"),
        vec![item(true, Some(7), "seven"), item(true, Some(8), "eight")]
    );
}

#[test]
fn oversized_list_marker_keeps_item() {
    assert_eq!(
        segment_blocks("1234567890. big\n12345678901. bigger"),
        vec![item(true, Some(1_234_567_890), "big"), item(true, None, "bigger")]
    );
}

#[test]
fn list_marker_needs_space() {
    assert_eq!(segment_blocks("-a\n1.b"), vec![paragraph("-a 1.b")]);
}

#[test]
fn opaque_requires_identifier_kind() {
    assert_eq!(segment_blocks("{{1ad}}"), vec![paragraph("{{1ad}}")]);
    assert_eq!(segment_blocks("{{ ad }}"), vec![paragraph("{{ ad }}")]);
}

#[test]
fn opaque_without_payload() {
    assert_eq!(
        segment_blocks("  {{divider}}  "),
        vec![Block::Opaque {
            kind: "divider".into(),
            payload: String::new()
        }]
    );
}

#[test]
fn opaque_can_be_disabled() {
    let options = Options {
        opaque_blocks: false,
        ..Options::default()
    };
    assert_eq!(
        segment_blocks_with_options("{{ad top}}", &options),
        vec![paragraph("{{ad top}}")]
    );
}

// === Markup round trip ===

#[test]
fn markup_round_trip() {
    let input = "## Setup\n\nInstall it.\n\n3. first\n\n> careful\n\n***\n\n```toml\n[deps]\n```\n\n| k | v |\n| --- | --- |\n| a | 1 |\n\n{{ad footer}}";
    let blocks = segment_blocks(input);
    assert_eq!(blocks.len(), 8);
    assert_eq!(segment_blocks(&blocks_to_markup(&blocks)), blocks);
}

#[test]
fn markup_round_trip_of_empty_texts() {
    let blocks = vec![heading(3, ""), item(false, None, ""), quote("")];
    assert_eq!(segment_blocks(&blocks_to_markup(&blocks)), blocks);
}
