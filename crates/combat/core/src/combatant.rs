//! Combatant records and their factories.
//!
//! A [`Combatant`] is one participant in a battle. The player is built
//! once from the init context; each enemy instance is spawned from its
//! content definition. Combatants are never removed from the roster,
//! even when dead - corpses stay around for log and reward accounting
//! and are excluded from turn order instead.

use crate::balance::BASE_ACCURACY;
use crate::encounter::{BehaviorHint, EnemyDefinition};
use crate::status::StatusEffects;

/// Identifier unique within one battle.
///
/// The player is always `"player"`; enemies combine their definition id
/// with a spawn index (`"bandit_1"`, `"bandit_2"`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(String);

impl CombatantId {
    pub const PLAYER: &'static str = "player";

    pub fn player() -> Self {
        Self(Self::PLAYER.to_owned())
    }

    pub fn enemy(definition_id: &str, index: usize) -> Self {
        Self(format!("{definition_id}_{}", index + 1))
    }

    pub fn is_player(&self) -> bool {
        self.0 == Self::PLAYER
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which side of the battle a combatant fights on, with side-specific
/// payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatantKind {
    Player {
        /// Equipped weapon, if any. Consumed by presentation and item
        /// resolution outside the engine.
        weapon: Option<String>,
    },
    Enemy {
        /// Content definition this instance was spawned from.
        definition_id: String,
        /// AI hint consumed by the (external) enemy action chooser.
        behavior: BehaviorHint,
        xp_reward: u32,
        gold_reward: u32,
    },
}

/// Combat-relevant numeric stats.
///
/// `hp` is bounded to `[0, max_hp]`; mutate it only through
/// [`Combatant::apply_damage`] and [`Combatant::heal`] so the aliveness
/// flag stays consistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub accuracy: i32,
    pub evasion: i32,
    /// Critical hit chance, percent.
    pub crit_chance: u32,
    /// Critical damage multiplier, percent (150 = x1.5).
    pub crit_multiplier: u32,
}

impl CombatStats {
    /// Stats with baseline accuracy, no evasion, and a modest crit line.
    /// Mostly useful for tests and simple player builds.
    pub fn flat(hp: u32, attack: u32, defense: u32, speed: u32) -> Self {
        Self {
            hp,
            max_hp: hp,
            attack,
            defense,
            speed,
            accuracy: BASE_ACCURACY,
            evasion: 0,
            crit_chance: 10,
            crit_multiplier: 150,
        }
    }
}

/// One participant in a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    /// Display name, disambiguated with a letter suffix for repeated
    /// enemy instances.
    pub name: String,
    pub kind: CombatantKind,
    pub stats: CombatStats,
    /// Invariant: `is_alive == (stats.hp > 0)`.
    pub is_alive: bool,
    pub status_effects: StatusEffects,
}

impl Combatant {
    /// Builds the player combatant.
    pub fn player(name: &str, stats: CombatStats, weapon: Option<String>) -> Self {
        Self {
            id: CombatantId::player(),
            name: name.to_owned(),
            kind: CombatantKind::Player { weapon },
            is_alive: stats.hp > 0,
            stats,
            status_effects: StatusEffects::empty(),
        }
    }

    /// Spawns one enemy instance from its content definition.
    ///
    /// `index` counts prior instances of the same definition in this
    /// battle: index 0 keeps the plain name, index 1 appends " B",
    /// index 2 " C", and so on.
    pub fn enemy(definition_id: &str, definition: &EnemyDefinition, index: usize) -> Self {
        let stats = CombatStats {
            hp: definition.max_health,
            max_hp: definition.max_health,
            attack: definition.base_damage,
            defense: definition.armor,
            speed: definition.action_points,
            accuracy: BASE_ACCURACY + definition.accuracy_mod,
            evasion: definition.evasion,
            crit_chance: definition.crit_chance,
            crit_multiplier: definition.crit_multiplier,
        };

        Self {
            id: CombatantId::enemy(definition_id, index),
            name: instance_name(&definition.name, index),
            kind: CombatantKind::Enemy {
                definition_id: definition_id.to_owned(),
                behavior: definition.behavior,
                xp_reward: definition.xp_reward,
                gold_reward: definition.gold_reward,
            },
            is_alive: definition.max_health > 0,
            stats,
            status_effects: StatusEffects::empty(),
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, CombatantKind::Player { .. })
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self.kind, CombatantKind::Enemy { .. })
    }

    /// XP/gold this combatant yields when defeated (enemies only).
    pub fn reward(&self) -> Option<(u32, u32)> {
        match &self.kind {
            CombatantKind::Enemy {
                xp_reward,
                gold_reward,
                ..
            } => Some((*xp_reward, *gold_reward)),
            CombatantKind::Player { .. } => None,
        }
    }

    /// Subtracts damage from HP, clamping at zero and keeping the
    /// aliveness flag consistent.
    pub fn apply_damage(&mut self, damage: u32) {
        self.stats.hp = self.stats.hp.saturating_sub(damage);
        self.is_alive = self.stats.hp > 0;
    }

    /// Restores HP up to the maximum. Returns the amount actually
    /// healed. Healing never revives: a dead combatant stays dead.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.is_alive {
            return 0;
        }
        let healed = amount.min(self.stats.max_hp - self.stats.hp);
        self.stats.hp += healed;
        healed
    }
}

/// Display name for the `index`-th instance of an enemy kind.
///
/// Index 0 keeps the base name; later instances get a letter suffix
/// starting at "B" ("Bandit", "Bandit B", ..., "Bandit Z"). Past "Z"
/// the suffix grows a second letter ("Bandit BB"), spreadsheet-column
/// style over the B..Z alphabet.
fn instance_name(base: &str, index: usize) -> String {
    if index == 0 {
        return base.to_owned();
    }

    // Letters B..Z form a base-25 alphabet.
    const ALPHABET: &[u8] = b"BCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut suffix = Vec::new();
    let mut n = index;
    while n > 0 {
        n -= 1;
        suffix.push(ALPHABET[n % ALPHABET.len()]);
        n /= ALPHABET.len();
    }
    suffix.reverse();

    format!("{base} {}", String::from_utf8(suffix).expect("ascii suffix"))
}
