//! In-memory content registries.

use std::collections::HashMap;

use combat_core::{CombatEncounter, EnemyDefinition, EnemyOracle};

/// Enemy definition catalog keyed by enemy id.
///
/// Implements [`EnemyOracle`], making it the content-side collaborator
/// `initialize_combat` consumes.
#[derive(Clone, Debug, Default)]
pub struct EnemyRegistry {
    definitions: HashMap<String, EnemyDefinition>,
}

impl EnemyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, EnemyDefinition)>) -> Self {
        Self {
            definitions: entries.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, enemy_id: impl Into<String>, definition: EnemyDefinition) {
        self.definitions.insert(enemy_id.into(), definition);
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All known enemy ids, unordered.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }
}

impl EnemyOracle for EnemyRegistry {
    fn definition(&self, enemy_id: &str) -> Option<EnemyDefinition> {
        self.definitions.get(enemy_id).cloned()
    }
}

/// Encounter catalog keyed by encounter id.
#[derive(Clone, Debug, Default)]
pub struct EncounterRegistry {
    encounters: HashMap<String, CombatEncounter>,
}

impl EncounterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_encounters(encounters: impl IntoIterator<Item = CombatEncounter>) -> Self {
        Self {
            encounters: encounters
                .into_iter()
                .map(|e| (e.id.clone(), e))
                .collect(),
        }
    }

    pub fn insert(&mut self, encounter: CombatEncounter) {
        self.encounters.insert(encounter.id.clone(), encounter);
    }

    pub fn get(&self, encounter_id: &str) -> Option<&CombatEncounter> {
        self.encounters.get(encounter_id)
    }

    pub fn len(&self) -> usize {
        self.encounters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encounters.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.encounters.keys().map(String::as_str)
    }
}
