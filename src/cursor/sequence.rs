//! List-backed cursor
//!
//! Items are fixed at construction; only the cursor moves.

use std::fmt;

use tracing::{debug, trace};

use super::{CursorError, Traversal};
use crate::tree::{flatten_preorder, TreeSource};

/// Restartable iterator over an owned, finite sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceIterator<T> {
    /// Materialized items (never mutated after construction)
    items: Vec<T>,

    /// Index of the next unread item
    cursor: usize,

    /// Index of the item most recently handed out by `advance`
    last: Option<usize>,
}

impl<T> SequenceIterator<T> {
    /// Wrap a literal sequence
    pub fn new(items: Vec<T>) -> Self {
        debug!(len = items.len(), "sequence iterator created");
        Self {
            items,
            cursor: 0,
            last: None,
        }
    }

    /// Materialize a tree in pre-order and wrap the result
    ///
    /// The whole walk happens here, before the first `next()`. The
    /// source is not consulted again afterwards.
    pub fn from_tree<S>(source: &S, root: T) -> Self
    where
        S: TreeSource<T> + ?Sized,
    {
        Self::new(flatten_preorder(source, root))
    }

    /// Cursor position (index of the next unread item)
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Total number of items, regardless of cursor position
    ///
    /// `len()` (from [`ExactSizeIterator`]) counts only what is left.
    #[inline]
    pub fn total_len(&self) -> usize {
        self.items.len()
    }

    /// True when the sequence holds no items at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items left before exhaustion
    #[inline]
    pub fn remaining(&self) -> usize {
        self.items.len() - self.cursor
    }

    /// Item most recently returned by `advance`/`next`
    ///
    /// `None` before the first advance and after `reset` or `seek`.
    pub fn current(&self) -> Option<&T> {
        self.last.map(|idx| &self.items[idx])
    }

    /// Reposition the cursor
    ///
    /// `seek(total_len())` is allowed and leaves the iterator exhausted.
    pub fn seek(&mut self, position: usize) -> Result<(), CursorError> {
        if position > self.items.len() {
            return Err(CursorError::SeekOutOfRange {
                position,
                len: self.items.len(),
            });
        }
        trace!(from = self.cursor, to = position, "seek");
        self.cursor = position;
        self.last = None;
        Ok(())
    }

    /// Iterate every item from the start without touching the cursor
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Traversal for SequenceIterator<T> {
    type Item = T;

    #[inline]
    fn has_next(&self) -> bool {
        self.cursor < self.items.len()
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    fn advance(&mut self) -> Option<&T> {
        let item = self.items.get(self.cursor)?;
        self.last = Some(self.cursor);
        self.cursor += 1;
        Some(item)
    }

    fn reset(&mut self) {
        debug!(from = self.cursor, len = self.items.len(), "reset");
        self.cursor = 0;
        self.last = None;
    }
}

impl<T: Clone> Iterator for SequenceIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.advance().cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for SequenceIterator<T> {}

impl<T> From<Vec<T>> for SequenceIterator<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for SequenceIterator<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a SequenceIterator<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Display for SequenceIterator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}]", self.cursor, self.items.len())
    }
}
