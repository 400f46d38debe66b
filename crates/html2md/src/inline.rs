//! Inline rendering: one node and its subtree to a single Markdown fragment.

use crate::node::{Element, Node};
use crate::utilities::escape_markdown;

/// The inline constructs with their own Markdown syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineKind {
    Strong,
    Emphasis,
    Code,
    Link,
    Image,
    /// Unrecognized wrappers such as `span`: children only.
    Transparent,
}

impl InlineKind {
    fn of(tag: &str) -> Self {
        match tag {
            "strong" | "b" => InlineKind::Strong,
            "em" | "i" => InlineKind::Emphasis,
            "code" => InlineKind::Code,
            "a" => InlineKind::Link,
            "img" => InlineKind::Image,
            _ => InlineKind::Transparent,
        }
    }
}

/// Render a node as inline Markdown.
///
/// Text leaves are escaped; the delimiters added here are not. The renderer
/// never inserts newlines of its own, though raw newlines in text leaves
/// pass through.
pub fn render_inline(node: &Node) -> String {
    match node {
        Node::Text(text) => escape_markdown(text),
        Node::Element(element) => render_element(element),
    }
}

/// Render a sequence of sibling nodes and concatenate the fragments.
pub fn render_inlines<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> String {
    nodes.into_iter().map(render_inline).collect()
}

fn render_element(element: &Element) -> String {
    match InlineKind::of(element.tag()) {
        InlineKind::Strong => format!("**{}**", render_inlines(element.children())),
        InlineKind::Emphasis => format!("*{}*", render_inlines(element.children())),
        // Leaves are escaped like any other text, backticks included.
        InlineKind::Code => format!("`{}`", render_inlines(element.children())),
        InlineKind::Link => {
            let href = element.attr_or("href", "#");
            let content = render_inlines(element.children());
            let display = if content.is_empty() { href } else { content.as_str() };
            format!("[{}]({})", display, href)
        }
        InlineKind::Image => {
            let alt = element.attr_or("alt", "");
            let src = element.attr_or("src", "");
            format!("![{}]({})", alt, src)
        }
        InlineKind::Transparent => render_inlines(element.children()),
    }
}
