//! Tree collaborators for pre-order materialization
//!
//! The flattener never owns or stores the tree. It only asks two
//! questions of a [`TreeSource`]: is this value a traversable node, and
//! what are its ordered children.

mod traversal;

pub use traversal::flatten_preorder;

use std::fmt;

/// Capability a tree-like structure exposes to the flattener
pub trait TreeSource<N> {
    /// Whether `value` is a traversable node
    ///
    /// Values failing this check are skipped together with their subtrees.
    fn is_node(&self, value: &N) -> bool;

    /// Ordered children of `node` (possibly empty)
    fn children(&self, node: &N) -> Vec<N>;
}

impl<N, S: TreeSource<N> + ?Sized> TreeSource<N> for &S {
    fn is_node(&self, value: &N) -> bool {
        (**self).is_node(value)
    }

    fn children(&self, node: &N) -> Vec<N> {
        (**self).children(node)
    }
}

/// [`TreeSource`] assembled from a predicate and a children accessor
pub struct FnSource<P, C> {
    is_node: P,
    children: C,
}

/// Build a [`TreeSource`] from two closures
pub fn from_fn<N, P, C>(is_node: P, children: C) -> FnSource<P, C>
where
    P: Fn(&N) -> bool,
    C: Fn(&N) -> Vec<N>,
{
    FnSource { is_node, children }
}

impl<N, P, C> TreeSource<N> for FnSource<P, C>
where
    P: Fn(&N) -> bool,
    C: Fn(&N) -> Vec<N>,
{
    fn is_node(&self, value: &N) -> bool {
        (self.is_node)(value)
    }

    fn children(&self, node: &N) -> Vec<N> {
        (self.children)(node)
    }
}

impl<P, C> fmt::Debug for FnSource<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_source_delegates() {
        // Implicit binary tree over 1..=7: children of k are 2k and 2k+1
        let source = from_fn(|n: &u32| *n <= 7, |n: &u32| vec![2 * n, 2 * n + 1]);
        assert!(source.is_node(&7));
        assert!(!source.is_node(&8));
        assert_eq!(source.children(&3), vec![6, 7]);
    }
}
