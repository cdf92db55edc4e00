//! Output contract for the rendering side.
//!
//! The charts themselves live outside this crate; these helpers give a
//! renderer the tabulated columns, the chart label and the JSON artifact.

pub mod label;
pub mod table;

pub use label::*;
pub use table::*;
