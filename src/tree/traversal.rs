//! Eager pre-order DFS
//!
//! Visit node, then each child left to right. Uses an explicit stack so
//! depth is bounded by heap, not by the call stack.

use tracing::{debug, trace};

use super::TreeSource;

/// Materialize the pre-order sequence of `root`
///
/// A root that fails `is_node` yields an empty vector.
pub fn flatten_preorder<N, S>(source: &S, root: N) -> Vec<N>
where
    S: TreeSource<N> + ?Sized,
{
    let mut order = Vec::new();
    let mut stack = vec![root];
    let mut skipped = 0usize;

    while let Some(node) = stack.pop() {
        if !source.is_node(&node) {
            skipped += 1;
            continue;
        }

        let children = source.children(&node);
        trace!(children = children.len(), "visit");
        order.push(node);

        // Reverse so the leftmost child is popped first
        stack.extend(children.into_iter().rev());
    }

    debug!(visited = order.len(), skipped, "pre-order materialization complete");
    order
}
