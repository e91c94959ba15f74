//! Inline node tree.

/// A structural unit within the text of a single block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InlineNode {
    /// Plain text, unescaped.
    Text(String),
    /// `**strong**`.
    Bold(Vec<InlineNode>),
    /// `*emphasis*`.
    Italic(Vec<InlineNode>),
    /// `__underline__`.
    Underline(Vec<InlineNode>),
    /// `` `code` `` (always a leaf, content is raw).
    Code(String),
    /// `[label](href)`.
    Link {
        /// Formatted label.
        label: Vec<InlineNode>,
        /// Destination, verbatim.
        href: String,
    },
}

impl InlineNode {
    /// Shorthand for a `Text` node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Child nodes of a container node.
    pub fn children(&self) -> &[InlineNode] {
        match self {
            Self::Bold(children) | Self::Italic(children) | Self::Underline(children) => {
                children.as_slice()
            }
            Self::Link { label, .. } => label.as_slice(),
            Self::Text(_) | Self::Code(_) => &[],
        }
    }
}

/// Flatten nodes into their visible text.
///
/// Markers are dropped; link destinations are not included.
///
/// # Example
/// ```
/// use lessonmark::{format_inline, plain_text};
///
/// let nodes = format_inline("**Read** the [guide](/docs) `now`");
/// assert_eq!(plain_text(&nodes), "Read the guide now");
/// ```
pub fn plain_text(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    push_plain_text(nodes, &mut out);
    out
}

fn push_plain_text(nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::Text(text) | InlineNode::Code(text) => out.push_str(text),
            other => push_plain_text(other.children(), out),
        }
    }
}

/// Output buffer that merges neighbouring text.
#[derive(Debug, Default)]
pub(crate) struct NodeSink {
    nodes: Vec<InlineNode>,
}

impl NodeSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append text, extending a trailing `Text` node if there is one.
    pub(crate) fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(InlineNode::Text(last)) = self.nodes.last_mut() {
            last.push_str(text);
        } else {
            self.nodes.push(InlineNode::Text(text.to_owned()));
        }
    }

    /// Append a node, merging it into a trailing `Text` node when it is text.
    pub(crate) fn push(&mut self, node: InlineNode) {
        match node {
            InlineNode::Text(text) => self.push_text(&text),
            other => self.nodes.push(other),
        }
    }

    pub(crate) fn finish(self) -> Vec<InlineNode> {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_merges_text() {
        let mut sink = NodeSink::new();
        sink.push_text("a");
        sink.push_text("");
        sink.push(InlineNode::text("b"));
        sink.push(InlineNode::Code("c".into()));
        sink.push_text("d");
        assert_eq!(
            sink.finish(),
            vec![
                InlineNode::text("ab"),
                InlineNode::Code("c".into()),
                InlineNode::text("d"),
            ]
        );
    }

    #[test]
    fn test_children() {
        let link = InlineNode::Link {
            label: vec![InlineNode::text("x")],
            href: "/x".into(),
        };
        assert_eq!(link.children(), &[InlineNode::text("x")]);
        assert!(InlineNode::Code("y".into()).children().is_empty());
    }

    #[test]
    fn test_plain_text_nested() {
        let nodes = vec![InlineNode::Bold(vec![
            InlineNode::text("a "),
            InlineNode::Italic(vec![InlineNode::text("b")]),
        ])];
        assert_eq!(plain_text(&nodes), "a b");
    }
}
