pub mod color;
pub mod drawable;

pub use color::*;
pub use drawable::*;
