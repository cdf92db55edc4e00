//! Raw OCAP capture model and decoding.
//!
//! The capture is deserialized once into [`RawCapture`]; everything
//! downstream is a pure transformation over it.

pub mod model;
pub mod reader;

pub use model::*;
pub use reader::*;
