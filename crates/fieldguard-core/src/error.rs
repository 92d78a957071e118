//! Core error types.

use crate::security::SecurityError;
use thiserror::Error;

/// Errors raised while loading engine inputs.
#[derive(Debug, Error)]
pub enum Error {
    /// Permission table has an unexpected shape.
    #[error("invalid permission table: {0}")]
    InvalidTable(String),

    /// Schema field list has an unexpected shape.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// Document is not a field mapping.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// JSON decoding error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Authorization error.
    #[error(transparent)]
    Security(#[from] SecurityError),
}
