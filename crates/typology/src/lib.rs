pub mod catalog;
pub mod color;

pub use catalog::*;
pub use color::*;
