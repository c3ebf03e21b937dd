//! # Schema Error Types
//!
//! Everything that can go wrong turning a payload into a screen.

use thiserror::Error;

/// Errors raised while decoding a screen payload.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The payload was empty (the config key had no value).
    #[error("empty screen payload")]
    EmptyPayload,

    /// The payload was not a valid screen document.
    #[error("malformed screen payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
