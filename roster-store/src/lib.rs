//! A keyed, open-chaining hash store with automatic growth (specification
//! §4.1), generic over a value type bound by [`roster_model::RecordLike`] in
//! place of the C source's `clear`/`copy`/`equal` callback triple.
//!
//! Keys are `u64` (the record id type); the hash function and growth
//! arithmetic below are the literal formulas required by specification §3,
//! not an incidental implementation detail, so that the testable properties
//! in specification §8 hold exactly.

mod table;

pub use table::{Config, Table};
