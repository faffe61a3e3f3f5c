//! # Restartable Sequence Cursors
//!
//! This library provides a pull-based, position-aware iterator over a
//! finite ordered sequence, plus an eager pre-order flattener that turns
//! any tree-like structure into such a sequence.
//!
//! ## Core Idea
//!
//! 1. **Materialize**: items are fixed at construction (a literal list, or a
//!    pre-order walk of a tree)
//! 2. **Cursor**: a single index `0 <= cursor <= len` is the only moving part
//! 3. **Restart**: `reset` always reopens traversal; nothing is terminal
//!
//! Running off the end is routine and reported as `None`.
//!
//! ## Usage Example
//!
//! ```
//! use seqwalk::{SequenceIterator, Traversal};
//!
//! let mut seq = SequenceIterator::new(vec![1, 2, 3]);
//! assert_eq!(seq.next(), Some(1));
//! assert_eq!(seq.peek(), Some(&2));
//! seq.reset();
//! assert_eq!(seq.collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod cursor;     // SequenceIterator and the Traversal trait
pub mod tree;       // Tree collaborators and pre-order flattening
pub mod markup;     // DOM-like tree with an element walker
pub mod outline;    // Indented outline reader
pub mod config;     // Walk configuration

// Re-exports for convenience
pub use cursor::{CursorError, SequenceIterator, Traversal, TraversalState};
pub use tree::{flatten_preorder, from_fn, FnSource, TreeSource};
pub use markup::{Element, ElementWalker, Node};
pub use outline::{OutlineError, OutlineReader};
pub use config::{ConfigError, WalkConfig};
