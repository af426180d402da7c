pub mod config;
pub mod controller;
pub mod panel;
pub mod report;

pub use config::GlobeConfig;
pub use controller::*;
pub use panel::*;
