//! HTML parsing support.
//!
//! This module parses HTML strings with scraper (html5ever underneath) and
//! converts the result into the parser-agnostic [`Node`] tree.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::{Element, Node};

/// Deepest element nesting kept as structure. Below this depth an element's
/// content is collapsed into a single text node, which keeps the recursive
/// conversion and drop of the tree within a normal thread stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parse a complete HTML document into a Node tree rooted at `<html>`.
///
/// html5ever applies the usual error recovery, so this never fails: missing
/// `<html>`/`<body>` wrappers are synthesized and unclosed tags are closed.
/// Comments, doctypes and processing instructions are dropped. Elements
/// nested deeper than [`MAX_NESTING_DEPTH`] keep only their text.
///
/// # Example
///
/// ```rust
/// use html2md::{parse_html, MarkdownConverter};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>");
///
/// let converter = MarkdownConverter::new();
/// let markdown = converter.convert(&node);
/// assert_eq!(markdown, "# Hello *World*\n");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_document(html);
    Node::from(scraper_to_element(document.root_element(), 0))
}

/// Convert a scraper ElementRef to our Element structure
fn scraper_to_element(element: ElementRef, depth: usize) -> Element {
    let mut node = Element::new(element.value().name());

    for (name, value) in element.value().attrs() {
        node.set_attr(name, value);
    }

    if depth >= MAX_NESTING_DEPTH {
        let text: String = element.text().collect();
        if !text.is_empty() {
            node.add_child(Node::Text(text));
        }
        return node;
    }

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(Node::from(scraper_to_element(child_element, depth + 1)));
                }
            }
            _ => {}
        }
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_html() {
        let node = parse_html("<p>Hello World</p>");
        assert_eq!(node.tag_name(), Some("html"));

        let body = node.find_self_or_descendant("body").unwrap();
        let p = body.find("p").unwrap();
        assert_eq!(p.text_content(), "Hello World");
    }

    #[test]
    fn test_parse_keeps_attributes_in_order() {
        let node = parse_html(r#"<a href="https://x.io" TITLE="X">x</a>"#);
        let a = node.find_self_or_descendant("a").unwrap();
        let attrs: Vec<_> = a.attrs().collect();
        assert_eq!(attrs, vec![("href", "https://x.io"), ("title", "X")]);
    }

    #[test]
    fn test_parse_drops_comments() {
        let node = parse_html("<body><!-- note --><p>a</p></body>");
        let body = node.find_self_or_descendant("body").unwrap();
        assert_eq!(body.children().len(), 1);
    }

    #[test]
    fn test_parse_collapses_excessive_nesting() {
        let depth = MAX_NESTING_DEPTH * 10;
        let html = format!(
            "{}a<b>b</b>{}",
            "<div>".repeat(depth),
            "</div>".repeat(depth)
        );
        let node = parse_html(&html);

        let mut deepest = 0;
        let mut current = node.as_element();
        while let Some(element) = current {
            deepest += 1;
            current = element.element_children().next();
        }
        assert!(deepest <= MAX_NESTING_DEPTH + 1);
        assert_eq!(node.text_content(), "ab");
    }

    #[test]
    fn test_parse_lowercases_tags() {
        let node = parse_html("<DIV><P>x</P></DIV>");
        assert!(node.find_self_or_descendant("div").is_some());
        assert!(node.find_self_or_descendant("p").is_some());
    }
}
