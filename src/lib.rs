//! Lazyseq: persistent, lazily evaluated sequences
//!
//! A [`Sequence`] is an immutable value denoting a possibly infinite ordered
//! list. It is not a cursor: observing it never changes it, so the same value
//! can be traversed any number of times, by any number of observers, with
//! identical results. Derived sequences share structure with their sources.
//!
//! # Core Concepts
//!
//! - **Extraction**: [`Sequence::next`] is the only primitive; it returns the
//!   head and a new sequence for the rest
//! - **Concatenation**: [`Sequence::concat`] is an associative append with
//!   [`Sequence::empty`] as identity; long chains stay flat
//! - **Combinators**: `map`, `flatten`, `flat_map`, and the two scans
//!   ([`Sequence::scan`], [`Sequence::state_scan`]) derive new sequences lazily
//! - **Consumption**: `fold`, `every`, `some`, `find`, `first`, `to_vec`,
//!   `join` observe a sequence in a loop
//!
//! Clients built on top: byte [`codec`]s and a deterministic [`json`]
//! serializer.
//!
//! # Example
//!
//! ```rust
//! use lazyseq::{seq, Sequence};
//!
//! let numbers = seq![1, 2, 3].concat(&seq![4, 5]);
//! assert_eq!(numbers.to_vec(), vec![1, 2, 3, 4, 5]);
//!
//! let labels = numbers.map(|n| n.to_string());
//! assert_eq!(labels.join(":"), "1:2:3:4:5");
//!
//! let naturals = Sequence::generate(None);
//! assert_eq!(naturals.skip(41).first(), Some(41));
//! ```

pub mod codec;
pub mod combinators;
pub mod consume;
pub mod core;
pub mod json;

// Re-export commonly used types
pub use combinators::Scan;
pub use consume::Iter;
pub use core::{Sequence, SequenceError};
