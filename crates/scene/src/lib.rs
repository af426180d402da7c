pub mod components;
pub mod entity;
pub mod prefabs;
pub mod sink;
pub mod world;

pub use sink::*;
pub use world::*;
