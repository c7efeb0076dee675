//! Output files.
//!
//! - statistics CSV export (`export`)

pub mod export;

pub use export::*;
