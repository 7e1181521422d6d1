//! Combat termination detection.

use crate::state::{CombatPhase, CombatState};

/// How a finished battle was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatOutcome {
    Victory,
    Defeat,
}

/// Observes combatant aliveness and decides whether the battle is over.
///
/// Defeat is checked with priority: if the player and the last enemy
/// both hit zero HP in the same status pass, the battle counts as a
/// defeat.
pub fn check_combat_end(state: &CombatState) -> Option<CombatOutcome> {
    if !state.player().is_alive {
        return Some(CombatOutcome::Defeat);
    }
    if state.enemies().all(|e| !e.is_alive) {
        return Some(CombatOutcome::Victory);
    }
    None
}

/// Stamps the terminal phase for an outcome and logs it.
pub fn apply_combat_end(state: &CombatState, outcome: CombatOutcome) -> CombatState {
    let mut next = state.clone();
    match outcome {
        CombatOutcome::Victory => {
            next.phase = CombatPhase::Victory;
            next.push_log("Victory!");
        }
        CombatOutcome::Defeat => {
            next.phase = CombatPhase::Defeat;
            next.push_log(format!("{} has fallen...", next.player().name));
        }
    }
    next
}
