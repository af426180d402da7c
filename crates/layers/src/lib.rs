pub mod cities;
pub mod cluster;
pub mod overlay;
pub mod route;
pub mod symbology;

pub use cities::*;
pub use cluster::*;
pub use overlay::*;
pub use route::*;
pub use symbology::*;
