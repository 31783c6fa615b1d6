//! Galactic addresses of systems and bodies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sector coordinate, in-sector system index and optional body index.
///
/// A path without a body index names a whole system; with one it names a
/// single body of that system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemPath {
    pub sector_x: i32,
    pub sector_y: i32,
    pub sector_z: i32,
    pub system_index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_index: Option<u32>,
}

impl SystemPath {
    pub fn new(sector_x: i32, sector_y: i32, sector_z: i32, system_index: u32) -> Self {
        Self {
            sector_x,
            sector_y,
            sector_z,
            system_index,
            body_index: None,
        }
    }

    /// The same system with a body index attached.
    pub fn with_body(self, body_index: u32) -> Self {
        Self {
            body_index: Some(body_index),
            ..self
        }
    }

    /// The same address with any body index removed.
    pub fn system_only(self) -> Self {
        Self {
            body_index: None,
            ..self
        }
    }

    pub fn is_body_path(&self) -> bool {
        self.body_index.is_some()
    }

    pub fn is_same_system(&self, other: &SystemPath) -> bool {
        self.sector_x == other.sector_x
            && self.sector_y == other.sector_y
            && self.sector_z == other.sector_z
            && self.system_index == other.system_index
    }

    /// Squared distance of the sector from the galactic origin, in sectors.
    pub fn sector_distance_squared(&self) -> i64 {
        let x = self.sector_x as i64;
        let y = self.sector_y as i64;
        let z = self.sector_z as i64;
        x * x + y * y + z * z
    }

    /// The words every seeded generator of this system starts from:
    /// system index, then the sector coordinate reinterpreted as unsigned.
    pub fn seed_words(&self) -> [u32; 4] {
        [
            self.system_index,
            self.sector_x as u32,
            self.sector_y as u32,
            self.sector_z as u32,
        ]
    }
}

impl fmt::Display for SystemPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.body_index {
            Some(body) => write!(
                f,
                "({},{},{},{},{})",
                self.sector_x, self.sector_y, self.sector_z, self.system_index, body
            ),
            None => write!(
                f,
                "({},{},{},{})",
                self.sector_x, self.sector_y, self.sector_z, self.system_index
            ),
        }
    }
}
