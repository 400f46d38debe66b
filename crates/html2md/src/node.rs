//! Parser-agnostic DOM tree used as input to the Markdown converter.
//!
//! Any HTML parser (scraper, html5ever, CDP, ...) can convert its output to
//! this structure. The converter only ever talks to the methods defined here,
//! never to a parser's own API.

use indexmap::IndexMap;

/// A node in the document tree: either literal character data or an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Raw character data, not yet escaped.
    Text(String),
    /// An element with a tag name, attributes and ordered children.
    Element(Element),
}

/// An element node.
///
/// Tag names and attribute keys are stored lowercase so lookups are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element::new(tag_name))
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut element = Element::new(tag_name);
        for (name, value) in attrs {
            element.set_attr(name, value);
        }
        Node::Element(element)
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Append a child and return the node, for building trees inline.
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Append several children and return the node.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        for child in children {
            self.add_child(child);
        }
        self
    }

    /// Add a child node. Text nodes cannot hold children; the call is ignored.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.add_child(child);
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Borrow the element, if this is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Get the tag name (lowercase), `None` for text nodes.
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(Element::tag)
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.as_element().and_then(|e| e.attr(name))
    }

    /// Get all child nodes. Text nodes have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Find the first element whose tag is `tag`, searching depth-first from
    /// this node itself.
    pub fn find_self_or_descendant(&self, tag: &str) -> Option<&Element> {
        let element = self.as_element()?;
        if element.tag == tag {
            return Some(element);
        }
        element.find(tag)
    }

    /// Remove every descendant element whose tag is in `tags`, together with
    /// its subtree. Returns the number of elements removed.
    pub fn strip_elements<S: AsRef<str>>(&mut self, tags: &[S]) -> usize {
        match self {
            Node::Element(element) => element.strip_elements(tags),
            Node::Text(_) => 0,
        }
    }
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag: tag_name.to_lowercase(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// The lowercase tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Get an attribute value, or `default` when it is absent.
    pub fn attr_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.attr(name).unwrap_or(default)
    }

    /// Set an attribute, replacing any previous value but keeping its position.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_lowercase(), value.to_string());
    }

    /// Attributes in source order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Ordered child nodes.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Only element children, in order.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First descendant element (not `self`) with the given tag, depth-first.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        for child in self.element_children() {
            if child.tag == tag {
                return Some(child);
            }
            if let Some(found) = child.find(tag) {
                return Some(found);
            }
        }
        None
    }

    /// All descendant elements (not `self`) whose tag is one of `tags`, in
    /// document order. Matches are searched into as well, so nested matches
    /// are returned after their ancestor.
    pub fn find_all(&self, tags: &[&str]) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_matching(tags, &mut found);
        found
    }

    fn collect_matching<'a>(&'a self, tags: &[&str], found: &mut Vec<&'a Element>) {
        for child in self.element_children() {
            if tags.contains(&child.tag.as_str()) {
                found.push(child);
            }
            child.collect_matching(tags, found);
        }
    }

    /// Get all text content from this element and descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    fn strip_elements<S: AsRef<str>>(&mut self, tags: &[S]) -> usize {
        let before = self.children.len();
        self.children.retain(|child| match child {
            Node::Element(e) => !tags.iter().any(|t| t.as_ref() == e.tag),
            Node::Text(_) => true,
        });
        let mut removed = before - self.children.len();

        for child in &mut self.children {
            if let Node::Element(e) = child {
                removed += e.strip_elements(tags);
            }
        }
        removed
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}
