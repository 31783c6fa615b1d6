//! Planetary physics
//!
//! Pure functions deriving the physical state of planets and moons from their
//! mass, orbit and host stars. Every value that feeds classification or
//! population is fixed-point; atmosphere colours are the only floating-point
//! outputs.

pub mod atmosphere;
pub mod biosphere;
pub mod composition;
pub mod hill;
pub mod planet_class;
pub mod rings;
pub mod temperature;
pub mod tidal;

// Re-export key types at crate root
pub use atmosphere::{Atmosphere, AtmosphereGas, Color};
pub use composition::{RadiativeBalance, SurfaceProperties, Volatiles, draw_volatile_budget};
pub use hill::hill_radius;
pub use planet_class::{BrownDwarfConversion, PlanetClass, brown_dwarf_from_planet, radius_from_mass};
pub use rings::Rings;
pub use tidal::Spin;

#[cfg(test)]
mod temperature_test;
