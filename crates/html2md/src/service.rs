//! MarkdownConverter - the main entry point for HTML to Markdown conversion.

#[cfg(feature = "html")]
use std::{fs, path::Path};

use log::debug;

use crate::block::BlockRenderer;
use crate::node::Node;
#[cfg(feature = "html")]
use crate::{Html2MdError, Result};

/// Options for MarkdownConverter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Spaces added per nested list level
    pub list_indent: usize,

    /// Elements removed, with their content, before an HTML string is converted
    pub strip_tags: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            list_indent: 2,
            strip_tags: vec!["script".to_string(), "style".to_string()],
        }
    }
}

/// The main service for converting documents to Markdown
///
/// Holds only immutable options, so one converter can be shared across
/// threads and reused for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    options: ConvertOptions,
}

impl MarkdownConverter {
    /// Create a new MarkdownConverter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MarkdownConverter with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }

    /// Escape markdown special characters in a string
    pub fn escape(&self, text: &str) -> String {
        crate::utilities::escape_markdown(text)
    }

    /// Render a document tree to Markdown lines.
    ///
    /// The top-level blocks are the children of the first `body` element
    /// found depth-first from `root` (including `root` itself). Without a
    /// `body`, the children of `root` are used.
    pub fn render_lines(&self, root: &Node) -> Vec<String> {
        let blocks = match root.find_self_or_descendant("body") {
            Some(body) => body.children(),
            None => root.children(),
        };

        let mut renderer = BlockRenderer::new(&self.options);
        for block in blocks {
            renderer.render(block, 0);
        }
        renderer.into_lines()
    }

    /// Convert a document tree to Markdown
    ///
    /// # Example
    ///
    /// ```rust
    /// use html2md::{MarkdownConverter, Node};
    ///
    /// let body = Node::element("body")
    ///     .with_child(Node::element("h1").with_child(Node::text("Hello World")));
    ///
    /// let markdown = MarkdownConverter::new().convert(&body);
    /// assert_eq!(markdown, "# Hello World\n");
    /// ```
    pub fn convert(&self, root: &Node) -> String {
        let lines = self.render_lines(root);
        debug!("rendered {} markdown lines", lines.len());
        lines.join("\n")
    }

    /// Parse an HTML document, strip non-content elements and convert it
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> String {
        let mut root = crate::html::parse_html(html);
        let stripped = root.strip_elements(self.options.strip_tags.as_slice());
        debug!("stripped {} non-content elements", stripped);
        self.convert(&root)
    }

    /// Convert the UTF-8 HTML file at `input` and write the Markdown to
    /// `output`.
    ///
    /// # Errors
    ///
    /// Returns [`Html2MdError::Io`] if the input cannot be read or the output
    /// cannot be written, and [`Html2MdError::Decode`] if the input is not
    /// valid UTF-8. Nothing is written unless conversion got that far.
    #[cfg(feature = "html")]
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<()> {
        let bytes = fs::read(input).map_err(|source| Html2MdError::Io {
            path: input.to_path_buf(),
            source,
        })?;
        let html = String::from_utf8(bytes).map_err(|source| Html2MdError::Decode {
            path: input.to_path_buf(),
            source,
        })?;

        let markdown = self.convert_html(&html);

        fs::write(output, &markdown).map_err(|source| Html2MdError::Io {
            path: output.to_path_buf(),
            source,
        })?;
        debug!(
            "wrote {} bytes of markdown to {}",
            markdown.len(),
            output.display()
        );
        Ok(())
    }
}
