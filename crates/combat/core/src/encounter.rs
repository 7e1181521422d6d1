//! Encounter and enemy definitions consumed at battle initialization.
//!
//! The engine never owns a content database. It consumes an
//! [`EnemyOracle`] supplied by the content layer and treats a failed
//! lookup as a fail-fast content error rather than a gameplay outcome.

use crate::combatant::CombatStats;

/// AI hint attached to an enemy definition.
///
/// The engine resolves a *given* action; choosing which action an enemy
/// takes happens outside it. The hint is carried through so the external
/// chooser can see it on the spawned combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorHint {
    #[default]
    Aggressive,
    Defensive,
    Cautious,
    Unpredictable,
}

/// Static definition of an enemy kind, provided by the content layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyDefinition {
    /// Base display name ("Bandit"); instances get letter suffixes.
    pub name: String,
    pub max_health: u32,
    pub base_damage: u32,
    pub armor: u32,
    /// Maps to combat speed.
    pub action_points: u32,
    /// Added to the baseline accuracy.
    pub accuracy_mod: i32,
    pub evasion: i32,
    /// Percent.
    pub crit_chance: u32,
    /// Percent (150 = x1.5).
    pub crit_multiplier: u32,
    pub xp_reward: u32,
    pub gold_reward: u32,
    pub behavior: BehaviorHint,
}

/// One roster entry of an encounter: spawn `count` instances of the
/// enemy definition `enemy_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyGroup {
    pub enemy_id: String,
    pub count: u32,
}

/// A single item drop chance in the encounter's reward table.
///
/// Each drop is an independent Bernoulli trial against `chance`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDrop {
    pub item_id: String,
    /// Drop chance, percent.
    pub chance: u32,
}

/// Base rewards granted on victory, before per-enemy bounties.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardTable {
    pub xp: u32,
    pub gold: u32,
    pub item_drops: Vec<ItemDrop>,
}

/// Everything the engine needs to start a battle, minus the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatEncounter {
    pub id: String,
    pub enemies: Vec<EnemyGroup>,
    pub can_flee: bool,
    pub is_boss: bool,
    pub rewards: RewardTable,
}

/// Player-side context supplied by the caller at initialization.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatInitContext {
    pub player_name: String,
    pub player_stats: CombatStats,
    pub player_weapon: Option<String>,
}

/// Oracle resolving enemy definition ids to definitions.
///
/// Implemented by the content layer; the engine only ever reads through
/// this trait. A `None` result during initialization is a content bug
/// and aborts battle setup.
pub trait EnemyOracle: Send + Sync {
    /// Returns the definition for a given enemy id, if known.
    fn definition(&self, enemy_id: &str) -> Option<EnemyDefinition>;
}
