//! Loose JSON value access.
//!
//! OCAP captures are loosely typed: ids arrive as numbers or strings, flags
//! as booleans or `0`/`1`, and event records as positional arrays. These
//! helpers coerce such values without failing.

pub mod coerce;

pub use coerce::*;
