//! Star system data model
//!
//! The body arena every generation pass reads and writes, plus the
//! collaborators the passes talk to: galactic paths, the orbit interface,
//! the commodity table and system identity.

pub mod body;
pub mod economy;
pub mod error;
pub mod metadata;
pub mod orbit;
pub mod path;
pub mod system;

// Re-export main types at crate root
pub use body::{Body, BodyIndex};
pub use economy::{Commodity, CommodityInfo, EconType, SystemEconomy, TradeLevels};
pub use error::SystemError;
pub use metadata::SystemMetadata;
pub use orbit::{Orbit, rotate_x, rotate_y, rotate_z};
pub use path::SystemPath;
pub use system::StarSystem;

#[cfg(test)]
mod orbit_test;
