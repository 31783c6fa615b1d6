//! System identity and naming.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::path::SystemPath;

/// Identity of a generated system.
///
/// The UUID is derived from the system path and the universe seed, so the
/// same address in the same universe always has the same identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetadata {
    pub id: Uuid,
    pub path: SystemPath,
    pub universe_seed: u32,

    /// Proper name from the naming oracle. Systems without one are known by
    /// their catalog name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SystemMetadata {
    /// Deterministic identity for `path` in the universe seeded by
    /// `universe_seed`. Any body index on the path is ignored.
    ///
    /// # Example
    /// ```
    /// use star_system::{SystemMetadata, SystemPath};
    ///
    /// let path = SystemPath::new(1, -2, 3, 4);
    /// let a = SystemMetadata::from_path(path, 42);
    /// let b = SystemMetadata::from_path(path.with_body(7), 42);
    /// assert_eq!(a.id, b.id);
    /// ```
    pub fn from_path(path: SystemPath, universe_seed: u32) -> Self {
        let path = path.system_only();
        let mut key = Vec::with_capacity(20);
        for word in path.seed_words() {
            key.extend_from_slice(&word.to_le_bytes());
        }
        key.extend_from_slice(&universe_seed.to_le_bytes());

        Self {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, &key),
            path,
            universe_seed,
            name: None,
        }
    }

    /// Designation of an unnamed system: its sector coordinate and index,
    /// then a check letter taken from the identity so that the same address
    /// reads differently in another universe, e.g. `2:-1:0/7K`.
    pub fn catalog_name(&self) -> String {
        let check = (b'A' + self.id.as_bytes()[0] % 26) as char;
        let p = self.path;
        format!("{}:{}:{}/{}{}", p.sector_x, p.sector_y, p.sector_z, p.system_index, check)
    }

    /// Proper name if set, otherwise the catalog name.
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.catalog_name())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
