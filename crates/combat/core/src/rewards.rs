//! Victory reward calculation.
//!
//! Rewards are only defined for won battles: a successful flee yields
//! nothing, and the session layer never asks for rewards on a `Fled`
//! state. Writing the final gold/xp/items back into persistent player
//! state is the caller's concern.

use crate::encounter::CombatEncounter;
use crate::state::CombatState;

/// Aggregated spoils of a won battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatRewards {
    pub xp: u32,
    pub gold: u32,
    pub items: Vec<String>,
}

/// Sums the encounter's base reward with the bounty of every defeated
/// enemy. Item drops are left empty; roll them separately with
/// [`roll_item_drops`] or use [`calculate_rewards_with_drops`].
pub fn calculate_rewards(state: &CombatState, encounter: &CombatEncounter) -> CombatRewards {
    let mut rewards = CombatRewards {
        xp: encounter.rewards.xp,
        gold: encounter.rewards.gold,
        items: Vec::new(),
    };

    for enemy in state.enemies().filter(|e| !e.is_alive) {
        if let Some((xp, gold)) = enemy.reward() {
            rewards.xp += xp;
            rewards.gold += gold;
        }
    }

    rewards
}

/// Runs one independent Bernoulli trial per configured item drop.
///
/// `draw` supplies one unit-interval roll per trial, in table order; an
/// item drops when its roll falls under the configured chance.
pub fn roll_item_drops(
    encounter: &CombatEncounter,
    mut draw: impl FnMut() -> f64,
) -> Vec<String> {
    encounter
        .rewards
        .item_drops
        .iter()
        .filter(|drop| draw() * 100.0 < f64::from(drop.chance))
        .map(|drop| drop.item_id.clone())
        .collect()
}

/// [`calculate_rewards`] plus item drop trials in one call.
pub fn calculate_rewards_with_drops(
    state: &CombatState,
    encounter: &CombatEncounter,
    draw: impl FnMut() -> f64,
) -> CombatRewards {
    let mut rewards = calculate_rewards(state, encounter);
    rewards.items = roll_item_drops(encounter, draw);
    rewards
}
