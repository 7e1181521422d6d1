//! Turn ordering and turn advancement.
//!
//! The order is recomputed whenever the roster's aliveness changes
//! meaningfully - at initialization and on every round wrap. Between
//! recomputes, [`advance_turn`] simply skips entries that died since
//! the order was calculated.

use std::cmp::Ordering;

use crate::combatant::{Combatant, CombatantId};
use crate::end::{apply_combat_end, check_combat_end};
use crate::state::{CombatPhase, CombatState};
use crate::status::tick_status_effects;

/// Orders alive combatants by descending speed.
///
/// Tie-break: the player is ordered before any enemy with equal speed;
/// tied enemies keep their roster order (stable sort). Dead combatants
/// are excluded entirely.
pub fn calculate_turn_order(combatants: &[Combatant]) -> Vec<CombatantId> {
    let mut alive: Vec<&Combatant> = combatants.iter().filter(|c| c.is_alive).collect();

    alive.sort_by(|a, b| {
        b.stats
            .speed
            .cmp(&a.stats.speed)
            .then_with(|| match (a.is_player(), b.is_player()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            })
    });

    alive.into_iter().map(|c| c.id.clone()).collect()
}

/// Phase matching whoever holds the given turn.
pub(crate) fn phase_for(current: &CombatantId) -> CombatPhase {
    if current.is_player() {
        CombatPhase::PlayerTurn
    } else {
        CombatPhase::EnemyTurn
    }
}

/// Moves to the next alive entry in the turn order.
///
/// Entries that died since the order was computed are skipped without a
/// recompute. When the index would wrap past the end, the round
/// increments, status effects tick, the order is recomputed from the
/// surviving roster, and the index resets to 0. If the tick ends the
/// battle, the terminal phase is stamped instead of advancing.
pub fn advance_turn(state: &CombatState) -> CombatState {
    if state.phase.is_terminal() {
        return state.clone();
    }

    let mut next = state.clone();

    let mut index = next.current_turn_index + 1;
    while index < next.turn_order.len() {
        let id = &next.turn_order[index];
        if next.combatant(id).is_some_and(|c| c.is_alive) {
            next.current_turn_index = index;
            next.phase = phase_for(id);
            return next;
        }
        index += 1;
    }

    // Order exhausted: round boundary.
    next.round += 1;

    let (combatants, events) = tick_status_effects(&next.combatants);
    next.combatants = combatants;
    for event in &events {
        let name = next
            .combatant(&event.combatant)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let message = event.message(&name);
        next.push_log(message);
    }

    if let Some(outcome) = check_combat_end(&next) {
        return apply_combat_end(&next, outcome);
    }

    next.turn_order = calculate_turn_order(&next.combatants);
    next.current_turn_index = 0;

    // End detection above guarantees both sides still stand, so the
    // recomputed order cannot be empty.
    debug_assert!(!next.turn_order.is_empty());

    if let Some(current) = next.turn_order.first() {
        next.phase = phase_for(current);
    }

    next
}
