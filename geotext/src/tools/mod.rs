pub mod check;
pub mod decode;
pub mod encode;
mod input;

pub use input::*;
