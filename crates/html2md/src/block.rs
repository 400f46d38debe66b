//! Block rendering: nodes in block context to output lines.
//!
//! Indentation is threaded through every call as a parameter. Lines only
//! ever get appended to the buffer, never rewritten.

use log::trace;

use crate::inline::render_inlines;
use crate::node::{Element, Node};
use crate::service::ConvertOptions;
use crate::table::render_table;
use crate::utilities::{escape_markdown, indentation};

/// The block constructs with their own Markdown syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Heading(usize),
    Paragraph,
    List { ordered: bool },
    Preformatted,
    Table,
    /// `div`, `body`, `section` and anything unrecognized.
    Container,
}

impl BlockKind {
    fn of(tag: &str) -> Self {
        match tag {
            "h1" => BlockKind::Heading(1),
            "h2" => BlockKind::Heading(2),
            "h3" => BlockKind::Heading(3),
            "h4" => BlockKind::Heading(4),
            "h5" => BlockKind::Heading(5),
            "h6" => BlockKind::Heading(6),
            "p" => BlockKind::Paragraph,
            "ul" => BlockKind::List { ordered: false },
            "ol" => BlockKind::List { ordered: true },
            "pre" => BlockKind::Preformatted,
            "table" => BlockKind::Table,
            _ => BlockKind::Container,
        }
    }
}

fn is_list(element: &Element) -> bool {
    matches!(BlockKind::of(element.tag()), BlockKind::List { .. })
}

/// Walks block-level nodes and accumulates Markdown lines.
pub(crate) struct BlockRenderer<'a> {
    options: &'a ConvertOptions,
    lines: Vec<String>,
}

impl<'a> BlockRenderer<'a> {
    pub(crate) fn new(options: &'a ConvertOptions) -> Self {
        Self {
            options,
            lines: Vec::new(),
        }
    }

    /// The accumulated lines, in emission order.
    pub(crate) fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub(crate) fn render(&mut self, node: &Node, indent: usize) {
        match node {
            Node::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    self.lines
                        .push(format!("{}{}", indentation(indent), escape_markdown(text)));
                }
            }
            Node::Element(element) => self.render_element(element, indent),
        }
    }

    fn render_element(&mut self, element: &Element, indent: usize) {
        match BlockKind::of(element.tag()) {
            BlockKind::Heading(level) => self.heading(element, level),
            BlockKind::Paragraph => self.paragraph(element, indent),
            BlockKind::List { ordered } => self.list(element, ordered, indent),
            BlockKind::Preformatted => self.preformatted(element),
            BlockKind::Table => {
                render_table(element, &mut self.lines);
                self.blank();
            }
            BlockKind::Container => {
                trace!("passing through <{}>", element.tag());
                for child in element.children() {
                    self.render(child, indent);
                }
            }
        }
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn heading(&mut self, element: &Element, level: usize) {
        let content = render_inlines(element.children());
        self.lines
            .push(format!("{} {}", "#".repeat(level), content.trim()));
        self.blank();
    }

    fn paragraph(&mut self, element: &Element, indent: usize) {
        let content = render_inlines(element.children());
        let content = content.trim();
        if !content.is_empty() {
            self.lines.push(format!("{}{}", indentation(indent), content));
            self.blank();
        }
    }

    fn list(&mut self, list: &Element, ordered: bool, indent: usize) {
        let items = list.element_children().filter(|e| e.tag() == "li");

        for (index, item) in items.enumerate() {
            let marker = if ordered {
                format!("{}.", index + 1)
            } else {
                "-".to_string()
            };

            // Direct child lists get their own lines below the item.
            let own_content = item
                .children()
                .iter()
                .filter(|child| !child.as_element().is_some_and(is_list));
            let text = render_inlines(own_content);
            self.lines
                .push(format!("{}{} {}", indentation(indent), marker, text.trim()));

            for nested in item.element_children().filter(|e| is_list(e)) {
                self.render_element(nested, indent + self.options.list_indent);
            }
        }

        self.blank();
    }

    fn preformatted(&mut self, pre: &Element) {
        let code = pre.find("code");

        let language = code
            .and_then(|c| c.attr("class"))
            .and_then(|class| class.split_whitespace().next())
            .map(|class| class.strip_prefix("language-").unwrap_or(class))
            .unwrap_or("");

        let content = match code {
            Some(code) => code.text_content(),
            None => pre.text_content(),
        };

        self.lines.push(format!("```{}", language));
        self.lines.push(content.trim_end().to_string());
        self.lines.push("```".to_string());
        self.blank();
    }
}
