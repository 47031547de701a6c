//! JSON serializer errors.

use thiserror::Error;

/// Errors that can occur when canonicalizing JSON text
#[derive(Debug, Error)]
pub enum JsonError {
    /// The input is not valid JSON
    #[error("Parse failed: {0}")]
    ParseFailed(#[from] serde_json::Error),
}
