//! Walk configuration
//!
//! Shared by the outline reader and the CLI driver.

use thiserror::Error;

/// Errors raised by invalid configuration values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Indent width must be at least one space
    #[error("invalid indent width {0}: must be > 0")]
    InvalidIndentWidth(usize),

    /// At least one pass is required
    #[error("invalid pass count {0}: must be > 0")]
    InvalidPasses(usize),
}

/// Configuration parameters for reading and draining sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkConfig {
    /// Spaces per nesting level in outline input
    pub indent_width: usize,

    /// Number of full drains; the iterator is reset between passes
    pub passes: usize,

    /// Prefix each printed item with its cursor position
    pub show_positions: bool,
}

impl WalkConfig {
    /// Set indent width
    pub fn with_indent_width(mut self, indent_width: usize) -> Result<Self, ConfigError> {
        if indent_width == 0 {
            return Err(ConfigError::InvalidIndentWidth(indent_width));
        }
        self.indent_width = indent_width;
        Ok(self)
    }

    /// Set pass count
    pub fn with_passes(mut self, passes: usize) -> Result<Self, ConfigError> {
        if passes == 0 {
            return Err(ConfigError::InvalidPasses(passes));
        }
        self.passes = passes;
        Ok(self)
    }

    /// Toggle position prefixes
    pub fn with_positions(mut self, enabled: bool) -> Self {
        self.show_positions = enabled;
        self
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            passes: 1,
            show_positions: true,
        }
    }
}
