//! Element-only tree source

use super::Node;
use crate::tree::TreeSource;

/// Treats elements as traversable and everything else as opaque
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementWalker;

impl<'a> TreeSource<&'a Node> for ElementWalker {
    fn is_node(&self, value: &&'a Node) -> bool {
        matches!(value, Node::Element(_))
    }

    fn children(&self, node: &&'a Node) -> Vec<&'a Node> {
        match *node {
            Node::Element(element) => element.children.iter().collect(),
            _ => Vec::new(),
        }
    }
}
