//! Restartable cursor traversal
//!
//! A traversal walks a finite, materialized sequence front to back.
//! Position is a single index `0 <= cursor <= len`; exhaustion is
//! reported as `None`, never as an error.
//!
//! The cursor moves only through [`Traversal::advance`],
//! [`Traversal::reset`] and [`SequenceIterator::seek`]. There is no other
//! mutation path.

mod sequence;

pub use sequence::SequenceIterator;

use thiserror::Error;

/// Pull-based traversal capability
///
/// Implementable by any backing store that can answer "is there more",
/// look at the next item, hand it out, and start over.
///
/// Implementors may add explicit repositioning (see
/// [`SequenceIterator::seek`]), but must keep `0 <= cursor <= len`.
pub trait Traversal {
    /// Element type yielded by the traversal
    type Item;

    /// True iff at least one item remains
    fn has_next(&self) -> bool;

    /// Item at the cursor, without advancing
    fn peek(&self) -> Option<&Self::Item>;

    /// Item at the cursor, then advance by one
    ///
    /// Returns `None` without moving once exhausted.
    fn advance(&mut self) -> Option<&Self::Item>;

    /// Move the cursor back to the first item
    fn reset(&mut self);

    /// Current traversal state
    fn state(&self) -> TraversalState {
        if self.has_next() {
            TraversalState::HasMore
        } else {
            TraversalState::Exhausted
        }
    }
}

/// The two states a traversal can be in
///
/// Neither is terminal: `reset` always reopens traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalState {
    /// `cursor < len`
    HasMore,

    /// `cursor == len`
    Exhausted,
}

/// Errors raised by explicit cursor repositioning
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// Requested position lies past the end of the sequence
    #[error("seek position {position} out of range (len {len})")]
    SeekOutOfRange {
        /// Position that was requested
        position: usize,
        /// Number of items in the sequence
        len: usize,
    },
}
