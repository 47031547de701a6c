//! Combinators that derive new sequences from existing ones.
//!
//! - `map`, `flatten`, `flat_map` and friends transform elements lazily
//! - `scan` and `state_scan` carry a step function or an explicit state
//!   across elements
//!
//! All combinators are built from the core constructors, `concat` and
//! `next`; none of them inspects the internal representation.

mod map;
mod scan;

pub use scan::Scan;
