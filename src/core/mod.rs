//! The sequence value and its extraction primitive.
//!
//! This module contains the canonical representation of a sequence:
//! - Constructors (`empty`, `one`, `from_indexable`, `generate`, ...)
//! - The monoid append, `concat`
//! - The single extraction primitive, `next`
//!
//! Everything else in the crate is built on top of these operations.

mod error;
mod list;
pub mod macros;
mod segments;
mod sequence;
mod serialize;
mod thunk;

pub use error::SequenceError;
pub use sequence::Sequence;
