//! # Host Error Types
//!
//! Errors from screen sources and configuration files.

use std::path::PathBuf;
use thiserror::Error;

/// A screen source could not deliver a payload.
#[derive(Error, Debug)]
pub enum SourceError {
    /// No screen is stored under the key.
    #[error("screen not found: {0}")]
    NotFound(String),

    /// The key cannot name a screen (empty, or escapes the source).
    #[error("invalid screen key: {0:?}")]
    InvalidKey(String),

    /// Reading the payload failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// A configuration file could not be used.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Config file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML is malformed or has wrong types.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required setting was given neither on the command line nor in
    /// the config file.
    #[error("missing setting: {0}")]
    Missing(&'static str),

    /// A value is out of range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Offending key.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Any host-level failure.
#[derive(Error, Debug)]
pub enum LayerError {
    /// Source failure.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Configuration failure.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for screen sources.
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type for host operations.
pub type LayerResult<T> = Result<T, LayerError>;
