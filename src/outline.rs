//! Indented outline reader
//!
//! One node per non-blank line; nesting is given by leading spaces.
//!
//! ```text
//! html lang=en
//!   body
//!     h1
//!       "Welcome
//!     # sidebar removed
//!     p class=intro
//! ```
//!
//! Bare words open elements (with optional `key=value` attributes),
//! `"` starts a text node, `#` starts a comment.

use thiserror::Error;
use tracing::debug;

use crate::config::WalkConfig;
use crate::markup::{Element, Node};

/// Errors raised while reading an outline
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OutlineError {
    /// Input held no nodes at all
    #[error("outline is empty")]
    Empty,

    /// Indentation is not a whole number of levels
    #[error("line {line}: indentation of {spaces} spaces is not a multiple of {width}")]
    Misaligned {
        /// 1-based line number
        line: usize,
        /// Leading spaces found
        spaces: usize,
        /// Configured indent width
        width: usize,
    },

    /// Tab characters used for indentation
    #[error("line {line}: tabs are not allowed in indentation")]
    TabIndent {
        /// 1-based line number
        line: usize,
    },

    /// Line is nested more than one level below its predecessor
    #[error("line {line}: indentation jumps more than one level")]
    LevelJump {
        /// 1-based line number
        line: usize,
    },

    /// Line is nested under text or comment content
    #[error("line {line}: only elements can have children")]
    ChildOfLeaf {
        /// 1-based line number
        line: usize,
    },

    /// Attribute token without `=`
    #[error("line {line}: malformed attribute '{token}'")]
    BadAttribute {
        /// 1-based line number
        line: usize,
        /// Offending token
        token: String,
    },
}

/// Reads outlines into markup forests
#[derive(Debug, Clone)]
pub struct OutlineReader {
    indent_width: usize,
}

impl OutlineReader {
    /// Reader with the given indent width (at least 1)
    pub fn new(indent_width: usize) -> Self {
        Self {
            indent_width: indent_width.max(1),
        }
    }

    /// Reader configured from a [`WalkConfig`]
    pub fn from_config(config: &WalkConfig) -> Self {
        Self::new(config.indent_width)
    }

    /// Parse `input` into its top-level nodes
    pub fn read(&self, input: &str) -> Result<Vec<Node>, OutlineError> {
        let mut roots = Vec::new();
        // Chain of currently open elements, outermost first
        let mut open: Vec<Element> = Vec::new();
        // Depth of the previous line if it was text or a comment
        let mut leaf_depth: Option<usize> = None;

        for (idx, raw) in input.lines().enumerate() {
            let line = idx + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let body = raw.trim_start_matches(' ');
            let spaces = raw.len() - body.len();
            if body.starts_with('\t') {
                return Err(OutlineError::TabIndent { line });
            }
            if spaces % self.indent_width != 0 {
                return Err(OutlineError::Misaligned {
                    line,
                    spaces,
                    width: self.indent_width,
                });
            }

            let depth = spaces / self.indent_width;
            if depth > open.len() {
                return Err(if leaf_depth.map_or(false, |d| depth == d + 1) {
                    OutlineError::ChildOfLeaf { line }
                } else {
                    OutlineError::LevelJump { line }
                });
            }

            while open.len() > depth {
                close_top(&mut open, &mut roots);
            }

            let body = body.trim_end();
            if let Some(text) = body.strip_prefix('"') {
                let text = text.strip_suffix('"').unwrap_or(text);
                attach(&mut open, &mut roots, Node::text(text));
                leaf_depth = Some(depth);
            } else if let Some(comment) = body.strip_prefix('#') {
                attach(&mut open, &mut roots, Node::comment(comment.trim()));
                leaf_depth = Some(depth);
            } else {
                open.push(parse_element(body, line)?);
                leaf_depth = None;
            }
        }

        while !open.is_empty() {
            close_top(&mut open, &mut roots);
        }

        if roots.is_empty() {
            return Err(OutlineError::Empty);
        }
        debug!(roots = roots.len(), "outline read");
        Ok(roots)
    }
}

impl Default for OutlineReader {
    fn default() -> Self {
        Self::from_config(&WalkConfig::default())
    }
}

fn parse_element(body: &str, line: usize) -> Result<Element, OutlineError> {
    let mut tokens = body.split_whitespace();
    // Caller guarantees a non-blank body
    let tag = tokens.next().unwrap_or_default();
    let mut element = Element::new(tag);

    for token in tokens {
        let (key, value) = token
            .split_once('=')
            .filter(|(key, _)| !key.is_empty())
            .ok_or_else(|| OutlineError::BadAttribute {
                line,
                token: token.to_string(),
            })?;
        element = element.with_attribute(key, value);
    }

    Ok(element)
}

fn attach(open: &mut [Element], roots: &mut Vec<Node>, node: Node) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

fn close_top(open: &mut Vec<Element>, roots: &mut Vec<Node>) {
    if let Some(done) = open.pop() {
        attach(open, roots, Node::Element(done));
    }
}
