//! Seeding context for one system.
//!
//! Every random stream the pipeline uses is built here from the system
//! address, the universe seed and (for per-body streams) the body seed. No
//! stage keeps a generator of its own between systems, so generating
//! systems in any order or on any thread gives the same results.

use star_system::SystemPath;
use units::{Fixed, Random, isqrt};

use crate::config::GeneratorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationContext {
    path: SystemPath,
    universe_seed: u32,
    explored: bool,
}

impl GenerationContext {
    /// Context for the system at `path`. Any body index is dropped.
    pub fn new(path: SystemPath, universe_seed: u32, explored: bool) -> Self {
        Self {
            path: path.system_only(),
            universe_seed,
            explored,
        }
    }

    pub fn from_config(path: SystemPath, config: &GeneratorConfig) -> Self {
        let explored = config.is_explored(path.sector_distance_squared());
        Self::new(path, config.universe_seed, explored)
    }

    pub fn path(&self) -> SystemPath {
        self.path
    }

    pub fn universe_seed(&self) -> u32 {
        self.universe_seed
    }

    pub fn is_explored(&self) -> bool {
        self.explored
    }

    /// Tree construction and system-wide economy draws.
    pub fn system_rng(&self) -> Random {
        let [index, x, y, z] = self.path.seed_words();
        Random::from_seeds(&[index, x, y, z, self.universe_seed])
    }

    /// Star count, star types, system seed and system name.
    pub fn stars_rng(&self) -> Random {
        let [index, x, y, z] = self.path.seed_words();
        Random::from_seeds(&[self.universe_seed, x, y, z, index])
    }

    /// Planetary physics of one body.
    pub fn physics_rng(&self, body_seed: u32) -> Random {
        let [index, x, y, z] = self.path.seed_words();
        Random::from_seeds(&[body_seed, index, x, y, z, self.universe_seed])
    }

    /// Population and renaming of one body.
    pub fn population_rng(&self, body_seed: u32) -> Random {
        let [index, x, y, z] = self.path.seed_words();
        Random::from_seeds(&[index, x, y, z, self.universe_seed, body_seed])
    }

    /// Station placement and station naming around one body.
    pub fn station_rng(&self, body_seed: u32) -> Random {
        let [index, x, y, z] = self.path.seed_words();
        Random::from_seeds(&[index, x, y, z, body_seed, self.universe_seed])
    }

    /// 1 in the origin sector, falling off with distance:
    /// `3 / isqrt(9 + 10 d²)`.
    pub fn human_proximity(&self) -> Fixed {
        let d2 = self.path.sector_distance_squared().max(0) as u128;
        let root = isqrt(9 + 10 * d2) as i64;
        Fixed::from_int(3) / root
    }
}
