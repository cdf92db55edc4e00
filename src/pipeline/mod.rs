//! Pipeline orchestration module.
//!
//! Turns a decoded capture into an [`AggregateResult`]:
//! - Mission header extraction
//! - Roster extraction
//! - Event normalization and indexing
//! - Stats merge

pub mod aggregate;
pub mod context;

pub use aggregate::*;
pub use context::*;
