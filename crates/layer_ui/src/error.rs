//! # UI Error Types
//!
//! Errors here never escape a render: the factory logs them and falls back
//! to defaults. They exist so the parsing helpers stay testable.

use thiserror::Error;

/// Errors raised while reading visual props.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The color string is not `#RRGGBB`, `#AARRGGBB` or a known name.
    #[error("invalid color: '{0}'")]
    InvalidColor(String),
}

/// Result type for style parsing.
pub type StyleResult<T> = Result<T, StyleError>;
