//! Content loaders for reading battle data from RON files.
//!
//! Loaders convert RON files into the registries consumed by the
//! engine. A small built-in catalog ships with the crate for demos and
//! tests.

use std::path::Path;

use combat_core::{CombatEncounter, EnemyDefinition};

use crate::registry::{EncounterRegistry, EnemyRegistry};

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Loader for enemy catalogs from RON files.
///
/// RON format: `Vec<(String, EnemyDefinition)>`
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load an enemy catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<EnemyRegistry> {
        Self::parse(&read_file(path)?)
    }

    /// Parse an enemy catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<EnemyRegistry> {
        let entries: Vec<(String, EnemyDefinition)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;
        Ok(EnemyRegistry::from_entries(entries))
    }

    /// The catalog bundled with this crate.
    pub fn builtin() -> EnemyRegistry {
        Self::parse(include_str!("../data/enemies.ron"))
            .expect("bundled enemy catalog is well-formed")
    }
}

/// Loader for encounter catalogs from RON files.
///
/// RON format: `Vec<CombatEncounter>`, keyed by each encounter's own id.
pub struct EncounterLoader;

impl EncounterLoader {
    /// Load an encounter catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<EncounterRegistry> {
        Self::parse(&read_file(path)?)
    }

    /// Parse an encounter catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<EncounterRegistry> {
        let encounters: Vec<CombatEncounter> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse encounter catalog RON: {}", e))?;
        Ok(EncounterRegistry::from_encounters(encounters))
    }

    /// The catalog bundled with this crate.
    pub fn builtin() -> EncounterRegistry {
        Self::parse(include_str!("../data/encounters.ron"))
            .expect("bundled encounter catalog is well-formed")
    }
}
