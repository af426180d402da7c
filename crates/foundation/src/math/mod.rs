pub mod arc;
pub mod geo;
pub mod vec;

pub use arc::*;
pub use geo::*;
pub use vec::*;
