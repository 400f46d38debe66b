//! # html2md
//!
//! Convert HTML documents to Markdown.
//!
//! ## Design
//!
//! The converter walks a parser-agnostic [`Node`] tree once, depth-first:
//!
//! - **Inline rendering** turns a node and its subtree into one Markdown
//!   fragment (`**strong**`, `*em*`, `` `code` ``, links, images).
//! - **Block rendering** turns headings, paragraphs, lists, code blocks and
//!   tables into output lines, with list indentation passed down explicitly.
//! - Unknown elements are transparent: their children are rendered, the
//!   element itself emits nothing.
//!
//! HTML string parsing (the default `html` feature) uses scraper; any other
//! parser can build a [`Node`] tree directly.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use html2md::{MarkdownConverter, Node};
//!
//! let body = Node::element("body").with_child(
//!     Node::element("ul")
//!         .with_child(Node::element("li").with_child(Node::text("one")))
//!         .with_child(Node::element("li").with_child(Node::text("two"))),
//! );
//!
//! let markdown = MarkdownConverter::new().convert(&body);
//! assert_eq!(markdown, "- one\n- two\n");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use html2md::MarkdownConverter;
//!
//! let converter = MarkdownConverter::new();
//! let markdown = converter.convert_html("<h1>Hello World</h1>");
//! assert_eq!(markdown, "# Hello World\n");
//! ```

use std::path::PathBuf;

mod block;
#[cfg(feature = "html")]
pub mod html;
mod inline;
pub mod node;
mod service;
mod table;
mod utilities;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use inline::{render_inline, render_inlines};
pub use node::{Element, Node};
pub use service::{ConvertOptions, MarkdownConverter};
pub use utilities::{escape_markdown, MARKDOWN_SPECIAL_CHARS};

/// Error type for html2md operations
#[derive(Debug, thiserror::Error)]
pub enum Html2MdError {
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

pub type Result<T> = std::result::Result<T, Html2MdError>;
