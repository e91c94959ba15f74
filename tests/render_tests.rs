//! Presentation target tests: HTML, plain text and custom visitors.

use lessonmark::inline::InlineNode;
use lessonmark::render::{self, Render, Row};
use lessonmark::{OpaqueRegistry, Options, plain_text, segment_blocks, to_html, to_plain_text};

// === HTML ===

#[test]
fn html_lesson() {
    let input = "\
# Loops

Use `for` to **iterate**:

```rust
for i in 0..3 {}
```

- [Docs](https://doc.rust-lang.org)
- *Book*
";
    let expected = "\
<h1>Loops</h1>
<p>Use <code>for</code> to <strong>iterate</strong>:</p>
<pre><code class=\"language-rust\">for i in 0..3 {}</code></pre>
<ul>
<li><a href=\"https://doc.rust-lang.org\">Docs</a></li>
<li><em>Book</em></li>
</ul>
";
    assert_eq!(to_html(input), expected);
}

#[test]
fn html_separate_lists_by_kind() {
    assert_eq!(
        to_html("- a\n1. b"),
        "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>\n"
    );
}

#[test]
fn html_escapes_code_block_and_language() {
    assert_eq!(
        to_html("```c\"x\n<b>&</b>\n```"),
        "<pre><code class=\"language-c&quot;x\">&lt;b&gt;&amp;&lt;/b&gt;</code></pre>\n"
    );
}

#[test]
fn html_empty_input() {
    assert_eq!(to_html(""), "");
}

#[test]
fn html_registry_substitutes_widgets() {
    let mut registry = OpaqueRegistry::new();
    registry.register("video", |id, out| {
        out.push_str("<iframe src=\"/v/");
        out.push_str(id);
        out.push_str("\"></iframe>");
    });

    let blocks = segment_blocks("Watch:\n\n{{video abc123}}");
    assert_eq!(
        render::render_html(&blocks, &Options::default(), &registry),
        "<p>Watch:</p>\n<iframe src=\"/v/abc123\"></iframe>\n"
    );
}

// === Plain text ===

#[test]
fn plain_text_lesson() {
    let input = "## Summary\n\n> Keep it *simple*\n\n1. Plan\n2. Build\n\n---\n\nDone &amp; dusted.";
    let rule = "─".repeat(40);
    let expected = format!(
        "Summary\n-------\n\n│ Keep it simple\n\n1. Plan\n2. Build\n\n{rule}\n\nDone &amp; dusted.\n"
    );
    assert_eq!(to_plain_text(input), expected);
}

// === Custom visitor ===

/// Writes headings and list items back as a compact outline.
#[derive(Default)]
struct Outline {
    out: Vec<String>,
    depth: usize,
}

impl Render for Outline {
    fn heading(&mut self, level: u8, content: &[InlineNode]) {
        self.out
            .push(format!("{} {}", "#".repeat(level as usize), plain_text(content)));
    }
    fn paragraph(&mut self, _content: &[InlineNode]) {}
    fn list_start(&mut self, _ordered: bool, _start: Option<u32>) {
        self.depth += 1;
    }
    fn list_item(&mut self, content: &[InlineNode]) {
        self.out.push(format!("{} {}", "*".repeat(self.depth), plain_text(content)));
    }
    fn list_end(&mut self, _ordered: bool) {
        self.depth -= 1;
    }
    fn block_quote(&mut self, _content: &[InlineNode]) {}
    fn horizontal_rule(&mut self) {}
    fn code_block(&mut self, _language: &str, _code: &str) {}
    fn table(&mut self, rows: &[Row], _has_header: bool) {
        let cells: Vec<String> = rows.iter().flatten().map(|cell| plain_text(cell)).collect();
        self.out.push(cells.join(","));
    }
    fn opaque(&mut self, kind: &str, _payload: &str) {
        self.out.push(format!("[{kind}]"));
    }
}

#[test]
fn custom_visitor() {
    let input = "# **Unit** 1\n\nintro\n\n- a\n- *b*\n\n| x | `y` |\n\n{{poll}}";
    let blocks = segment_blocks(input);
    let mut outline = Outline::default();
    render::render_blocks(&blocks, &Options::default(), &mut outline);
    assert_eq!(outline.depth, 0);
    assert_eq!(outline.out, vec!["# Unit 1", "* a", "* b", "x,y", "[poll]"]);
}
