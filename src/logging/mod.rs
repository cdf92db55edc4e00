//! Structured logging with run context.
//!
//! Every log line emitted during an aggregation carries the run id, and the
//! entity id where one applies, so a single capture's lines can be grepped
//! out of a shared log.

pub mod structured;

pub use structured::*;
