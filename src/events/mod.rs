//! Combat event handling.
//!
//! - `normalize` - filters the raw timeline down to typed hit/kill records
//! - `index` - groups those records by source entity and kind

pub mod index;
pub mod normalize;

pub use index::*;
pub use normalize::*;
