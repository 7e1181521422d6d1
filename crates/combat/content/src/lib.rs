//! Data-driven combat content definitions and loaders.
//!
//! This crate houses static battle content and provides loaders for RON
//! data files:
//! - Enemy definition catalogs (data-driven via RON)
//! - Encounter catalogs (data-driven via RON)
//!
//! Content is consumed by the engine through the
//! [`EnemyOracle`](combat_core::EnemyOracle) trait and never appears in
//! combat state. All loaders use combat-core types directly with serde
//! for RON deserialization.

pub mod registry;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use registry::{EncounterRegistry, EnemyRegistry};

#[cfg(feature = "loaders")]
pub use loaders::{EncounterLoader, EnemyLoader, LoadResult};
