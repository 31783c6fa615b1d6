//! Generator configuration.
//!
//! Only knobs that select *which* universe is generated live here. Formula
//! constants and thresholds are fixed in code so that two generators with the
//! same configuration always agree.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Folded into every seed; different values give unrelated universes.
    pub universe_seed: u32,
    /// Sectors within this distance of the origin are explored. Systems
    /// further out are generated without population.
    pub explored_radius: u32,
    pub add_stations: bool,
    pub max_surface_stations: u32,
    /// Bound on naming-oracle queries while looking for a unique name.
    pub max_name_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            universe_seed: 0xabcd_1234,
            explored_radius: 90,
            add_stations: true,
            max_surface_stations: 6,
            max_name_attempts: 1000,
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Read `path`, surfacing both missing files and parse errors.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Read `path`, falling back to the defaults when the file is missing or
    /// unreadable.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse config file {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path);
                Self::default()
            }
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })
    }

    /// Whether a sector lies inside the explored region.
    pub fn is_explored(&self, sector_distance_squared: i64) -> bool {
        let radius = self.explored_radius as i64;
        sector_distance_squared <= radius * radius
    }
}
