//! Canonical battle state.
//!
//! [`CombatState`] is the single source of truth for an in-progress
//! battle. Every transition function in this crate takes a state by
//! reference and returns a new value; the engine never mutates its
//! inputs.

use crate::combatant::{Combatant, CombatantId};

/// Stage of the combat state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatPhase {
    /// Assembled but not yet started.
    Initializing,
    PlayerTurn,
    EnemyTurn,
    Victory,
    Defeat,
    Fled,
}

impl CombatPhase {
    /// Terminal phases end the battle; no further actions resolve.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            CombatPhase::Victory | CombatPhase::Defeat | CombatPhase::Fled
        )
    }
}

/// The single source of truth for an in-progress battle.
///
/// Invariants:
/// * `turn_order` contains only ids of currently-alive combatants.
/// * `current_turn_index` is a valid index into `turn_order` unless the
///   order is empty (by which point the battle must have ended).
/// * `combatants[0]` is the player; enemies follow in spawn order and
///   are never removed, even when dead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    pub combatants: Vec<Combatant>,
    pub turn_order: Vec<CombatantId>,
    pub current_turn_index: usize,
    /// Starts at 1; increments each time the turn order wraps.
    pub round: u32,
    pub phase: CombatPhase,
    pub can_flee: bool,
    pub is_boss: bool,
    /// Append-only result messages for UI consumption.
    pub log: Vec<String>,
}

impl CombatState {
    /// The player combatant. Present in every well-formed state.
    pub fn player(&self) -> &Combatant {
        self.combatants
            .iter()
            .find(|c| c.is_player())
            .expect("combat state always contains the player")
    }

    /// Looks up a combatant by id.
    pub fn combatant(&self, id: &CombatantId) -> Option<&Combatant> {
        self.combatants.iter().find(|c| &c.id == id)
    }

    pub(crate) fn combatant_mut(&mut self, id: &CombatantId) -> Option<&mut Combatant> {
        self.combatants.iter_mut().find(|c| &c.id == id)
    }

    /// Id of the combatant whose turn it is, if the order is non-empty.
    pub fn current_combatant_id(&self) -> Option<&CombatantId> {
        self.turn_order.get(self.current_turn_index)
    }

    /// The combatant whose turn it is.
    pub fn current_combatant(&self) -> Option<&Combatant> {
        self.current_combatant_id().and_then(|id| self.combatant(id))
    }

    /// All enemies still standing, in spawn order.
    pub fn alive_enemies(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants
            .iter()
            .filter(|c| c.is_enemy() && c.is_alive)
    }

    /// All enemies, dead or alive, in spawn order.
    pub fn enemies(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter().filter(|c| c.is_enemy())
    }

    pub(crate) fn push_log(&mut self, message: impl Into<String>) {
        self.log.push(message.into());
    }
}
