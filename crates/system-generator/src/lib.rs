//! Star system generation
//!
//! Turns a galactic path and a universe seed into a fully populated
//! [`StarSystem`](star_system::StarSystem): stars and their pairing, planets
//! and moons, planetary physics, population and economy, and stations.
//! Every draw comes from generators seeded by the path, so the same path
//! always yields the same system.

pub mod builder;
pub mod config;
pub mod context;
pub mod custom;
pub mod error;
pub mod generator;
pub mod names;
pub mod physics;
pub mod population;
pub mod stations;

#[cfg(test)]
mod builder_test;
#[cfg(test)]
mod population_test;
#[cfg(test)]
mod stations_test;

// Re-export the pipeline entry points
pub use config::GeneratorConfig;
pub use context::GenerationContext;
pub use custom::{CustomBody, CustomSystem};
pub use error::{ConfigError, GenerationError};
pub use generator::SystemGenerator;
pub use names::{NameOracle, SyllableNames};
