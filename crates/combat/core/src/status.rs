//! Status effect system for combatants.
//!
//! Status effects are timed modifiers attached to a combatant and ticked
//! once per round boundary (not once per individual action).
//!
//! # Turn-based Duration
//!
//! Effects store `turns_remaining`, decremented by one on each round
//! tick. An effect is visible during its final active turn and removed
//! when the counter reaches zero.

use arrayvec::ArrayVec;

use crate::combatant::{Combatant, CombatantId};
use crate::config::CombatConfig;

/// Types of status effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusEffectKind {
    /// HP loss over time; `value` is subtracted each round.
    Poisoned,

    /// Outgoing damage increased by `value` percent.
    Buffed,

    /// Incoming damage reduced by `value` percent.
    Defending,

    /// Cannot act at all while any turns remain.
    Stunned,

    /// HP recovery over time; `value` is restored each round.
    Regenerating,
}

/// A single status effect with its remaining duration and magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusEffectKind,
    /// Rounds left, counting the current one.
    pub turns_remaining: u32,
    /// Per-round magnitude; interpretation depends on `kind`.
    pub value: u32,
}

/// Active status effects on a combatant, in application order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { CombatConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks if an effect of the given kind is active.
    pub fn has(&self, kind: StatusEffectKind) -> bool {
        self.effects
            .iter()
            .any(|e| e.kind == kind && e.turns_remaining > 0)
    }

    /// Returns the active effect of the given kind, if any.
    pub fn get(&self, kind: StatusEffectKind) -> Option<&StatusEffect> {
        self.effects
            .iter()
            .find(|e| e.kind == kind && e.turns_remaining > 0)
    }

    /// Adds a status effect.
    ///
    /// If an effect of the same kind is already active, its duration is
    /// extended to the longer of the two and its value replaced.
    pub fn add(&mut self, effect: StatusEffect) {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == effect.kind) {
            existing.turns_remaining = existing.turns_remaining.max(effect.turns_remaining);
            existing.value = effect.value;
            return;
        }

        if !self.effects.is_full() {
            self.effects.push(effect);
        }
    }

    /// Removes all effects of the given kind immediately.
    pub fn remove(&mut self, kind: StatusEffectKind) {
        self.effects.retain(|e| e.kind != kind);
    }

    /// Returns an iterator over all effects in application order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Decrements every effect's duration and drops the expired ones.
    fn advance_round(&mut self) {
        for effect in &mut self.effects {
            effect.turns_remaining = effect.turns_remaining.saturating_sub(1);
        }
        self.effects.retain(|e| e.turns_remaining > 0);
    }
}

/// One observable consequence of a status tick, for log consumption.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusTickEvent {
    pub combatant: CombatantId,
    pub kind: StatusEffectKind,
    /// Signed HP change caused by this tick (0 for non-HP effects).
    pub hp_change: i32,
    /// True if the combatant died from this tick.
    pub lethal: bool,
}

impl StatusTickEvent {
    /// Renders the event as a log line.
    pub fn message(&self, name: &str) -> String {
        match self.kind {
            StatusEffectKind::Poisoned if self.lethal => {
                format!("{name} succumbs to poison!")
            }
            StatusEffectKind::Poisoned => {
                format!("{name} takes {} poison damage", -self.hp_change)
            }
            StatusEffectKind::Regenerating => {
                format!("{name} recovers {} HP", self.hp_change)
            }
            StatusEffectKind::Buffed => format!("{name} is emboldened"),
            StatusEffectKind::Defending => format!("{name} holds a defensive stance"),
            StatusEffectKind::Stunned => format!("{name} is stunned and cannot act"),
        }
    }
}

/// Applies one round of status effects to every combatant.
///
/// For each active effect: the per-round numeric effect is applied
/// (poison subtracts `value` from HP, regeneration restores it; buffs
/// and defend stances modify combat math elsewhere and tick silently),
/// then the duration is decremented and expired effects are dropped.
/// Combatants whose HP reaches zero are marked dead.
///
/// Returns the updated roster plus the events to log. The input slice
/// is never mutated.
pub fn tick_status_effects(combatants: &[Combatant]) -> (Vec<Combatant>, Vec<StatusTickEvent>) {
    let mut updated = combatants.to_vec();
    let mut events = Vec::new();

    for combatant in &mut updated {
        if !combatant.is_alive {
            // Dead combatants keep their effect list for the record but
            // no longer tick.
            continue;
        }

        for effect in combatant.status_effects.clone().iter() {
            let hp_change = match effect.kind {
                StatusEffectKind::Poisoned => {
                    let dealt = effect.value.min(combatant.stats.hp);
                    combatant.apply_damage(dealt);
                    -(dealt as i32)
                }
                StatusEffectKind::Regenerating => {
                    let healed = combatant.heal(effect.value);
                    healed as i32
                }
                StatusEffectKind::Buffed
                | StatusEffectKind::Defending
                | StatusEffectKind::Stunned => 0,
            };

            events.push(StatusTickEvent {
                combatant: combatant.id.clone(),
                kind: effect.kind,
                hp_change,
                lethal: !combatant.is_alive,
            });

            if !combatant.is_alive {
                break;
            }
        }

        combatant.status_effects.advance_round();
    }

    (updated, events)
}
