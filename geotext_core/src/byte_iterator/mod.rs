//! A position-tracking scanner over in-memory text, plus the small parsing helpers built on it.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
