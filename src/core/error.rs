//! Errors raised when a sequence must be materialized.

use thiserror::Error;

/// Errors that can occur when a finite result is required from a sequence.
///
/// Extraction itself never fails; these only come from the guarded
/// materialization helpers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Sequence is unbounded and cannot be materialized")]
    Unbounded,

    #[error("Sequence has more than {limit} elements")]
    LimitExceeded { limit: usize },
}
