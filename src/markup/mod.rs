//! DOM-like markup tree
//!
//! Elements nest; text and comments are leaf content. Only elements
//! are traversable, so walking a document yields its elements in
//! document order and never descends through non-element content.

mod walker;

pub use walker::ElementWalker;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cursor::SequenceIterator;

/// One piece of markup content
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// Tagged element with attributes and children
    Element(Element),

    /// Character data
    Text(String),

    /// Comment (ignored by traversal)
    Comment(String),
}

/// Tagged element
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    /// Tag name
    pub tag: String,

    /// Attributes in declaration order
    pub attributes: Vec<(String, String)>,

    /// Child content in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Element with no attributes or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Append a child node
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Look up an attribute value by key
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl Node {
    /// Text node
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Comment node
    pub fn comment(content: impl Into<String>) -> Self {
        Node::Comment(content.into())
    }

    /// Borrow the element, if this node is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Elements at or below this node, in document order
    ///
    /// Empty when `self` is not an element.
    pub fn elements(&self) -> SequenceIterator<&Element> {
        SequenceIterator::from_tree(&ElementWalker, self)
            .iter()
            .copied()
            .filter_map(Node::as_element)
            .collect()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (key, value) in &self.attributes {
            write!(f, " {}=\"{}\"", key, value)?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_lookup() {
        let element = Element::new("a")
            .with_attribute("href", "/home")
            .with_attribute("class", "nav");
        assert_eq!(element.attribute("class"), Some("nav"));
        assert_eq!(element.attribute("id"), None);
        assert_eq!(element.to_string(), "<a href=\"/home\" class=\"nav\">");
    }

    #[test]
    fn test_elements_skips_text() {
        let doc = Node::from(
            Element::new("body")
                .with_child(Node::text("hello"))
                .with_child(Element::new("p").with_child(Node::comment("note"))),
        );
        let tags: Vec<_> = doc.elements().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["body", "p"]);
    }

    #[test]
    fn test_elements_of_text_root_is_empty() {
        let text = Node::text("loose");
        assert!(text.elements().is_empty());
    }
}
