//! Battle initialization.

use std::collections::HashMap;

use crate::combatant::Combatant;
use crate::encounter::{CombatEncounter, CombatInitContext, EnemyOracle};
use crate::error::ContentError;
use crate::state::{CombatPhase, CombatState};
use crate::turn_order::{calculate_turn_order, phase_for};

/// Assembles a full [`CombatState`] from an encounter and player context.
///
/// The player is built first, then each enemy group is resolved through
/// the oracle and spawned in order. Instance indices continue across
/// groups of the same enemy id, so a second group of bandits keeps
/// counting from where the first left off.
///
/// # Errors
///
/// Fails fast with [`ContentError::EnemyNotFound`] if the oracle cannot
/// resolve an enemy id - a malformed encounter is a content bug, not a
/// player-facing outcome.
pub fn initialize_combat(
    encounter: &CombatEncounter,
    context: &CombatInitContext,
    enemies: &dyn EnemyOracle,
) -> Result<CombatState, ContentError> {
    let player = Combatant::player(
        &context.player_name,
        context.player_stats,
        context.player_weapon.clone(),
    );

    let mut combatants = vec![player];
    let mut spawned: HashMap<&str, usize> = HashMap::new();

    for group in &encounter.enemies {
        let definition = enemies
            .definition(&group.enemy_id)
            .ok_or_else(|| ContentError::EnemyNotFound(group.enemy_id.clone()))?;

        for _ in 0..group.count {
            let index = spawned.entry(group.enemy_id.as_str()).or_insert(0);
            combatants.push(Combatant::enemy(&group.enemy_id, &definition, *index));
            *index += 1;
        }
    }

    if combatants.len() == 1 {
        return Err(ContentError::EmptyEncounter(encounter.id.clone()));
    }

    let turn_order = calculate_turn_order(&combatants);

    Ok(CombatState {
        combatants,
        turn_order,
        current_turn_index: 0,
        round: 1,
        phase: CombatPhase::Initializing,
        can_flee: encounter.can_flee,
        is_boss: encounter.is_boss,
        log: Vec::new(),
    })
}

/// Moves an initialized battle into its first turn.
///
/// Separate from [`initialize_combat`] so presentation can render the
/// assembled roster (intro screens, "a wild X appears") before the
/// first combatant acts.
pub fn begin_combat(state: &CombatState) -> CombatState {
    let mut next = state.clone();
    if next.phase == CombatPhase::Initializing {
        if let Some(current) = next.current_combatant_id() {
            next.phase = phase_for(current);
        }
    }
    next
}
