//! Ergonomic session layer over the pure resolution core.
//!
//! [`CombatSession`] owns the battle seed, an action nonce, and a
//! [`RollSource`], and fills in whatever rolls the caller did not
//! supply. The hard core stays pure and fully explicit; this wrapper
//! is the "just play" entry point. Replaying a battle is a matter of
//! re-running the same seed and action sequence.

use tracing::debug;

use crate::action::CombatAction;
use crate::balance::BalanceParams;
use crate::encounter::CombatEncounter;
use crate::end::{apply_combat_end, check_combat_end};
use crate::resolve::{ActionResult, process_action};
use crate::rewards::{CombatRewards, calculate_rewards_with_drops};
use crate::rolls::{PcgRolls, RandomRolls, RollSource, compute_seed};
use crate::state::{CombatPhase, CombatState};
use crate::turn_order::advance_turn;

/// Roll context tag for reward drop trials (action rolls use the
/// acting combatant's id instead).
const DROP_ROLL_TAG: &str = "item_drops";

/// Stateful convenience wrapper around the deterministic core.
pub struct CombatSession<R: RollSource = PcgRolls> {
    source: R,
    seed: u64,
    nonce: u64,
    params: BalanceParams,
}

impl CombatSession<PcgRolls> {
    /// Session with the default PCG source and balance table.
    pub fn seeded(seed: u64) -> Self {
        Self::new(PcgRolls, seed)
    }
}

impl<R: RollSource> CombatSession<R> {
    pub fn new(source: R, seed: u64) -> Self {
        Self {
            source,
            seed,
            nonce: 0,
            params: BalanceParams::default(),
        }
    }

    pub fn with_params(mut self, params: BalanceParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &BalanceParams {
        &self.params
    }

    /// Resolves one action, drawing any unsupplied rolls from the
    /// session's source, then stamps the terminal phase if the action
    /// ended the battle.
    ///
    /// The nonce advances on every call, rejected actions included, so
    /// a replayed action sequence reproduces the same roll stream.
    pub fn process_action(
        &mut self,
        state: &CombatState,
        action: &CombatAction,
        overrides: RandomRolls,
    ) -> (CombatState, ActionResult) {
        let nonce = self.nonce;
        let rolls = overrides.resolve(|context| {
            let seed = compute_seed(self.seed, nonce, action.actor.as_str(), context.as_u32());
            self.source.unit(seed)
        });
        self.nonce += 1;

        debug!(actor = %action.actor, nonce, round = state.round, "resolving combat action");

        let (mut next, result) = process_action(state, action, rolls, &self.params);

        if !next.phase.is_terminal() {
            if let Some(outcome) = check_combat_end(&next) {
                debug!(%outcome, round = next.round, "combat ended");
                next = apply_combat_end(&next, outcome);
            }
        }

        (next, result)
    }

    /// Moves to the next turn; see
    /// [`advance_turn`](crate::turn_order::advance_turn).
    pub fn advance_turn(&self, state: &CombatState) -> CombatState {
        advance_turn(state)
    }

    /// Computes rewards for a won battle, rolling item drops from the
    /// session's source.
    ///
    /// Returns `None` unless the state's phase is `Victory`: defeat
    /// yields nothing and a successful flee forfeits all spoils.
    pub fn rewards(
        &mut self,
        state: &CombatState,
        encounter: &CombatEncounter,
    ) -> Option<CombatRewards> {
        if state.phase != CombatPhase::Victory {
            return None;
        }

        let nonce = self.nonce;
        let mut trial = 0u32;
        let rewards = calculate_rewards_with_drops(state, encounter, || {
            let seed = compute_seed(self.seed, nonce, DROP_ROLL_TAG, trial);
            trial += 1;
            self.source.unit(seed)
        });
        self.nonce += 1;

        debug!(xp = rewards.xp, gold = rewards.gold, items = rewards.items.len(), "rewards granted");
        Some(rewards)
    }
}
