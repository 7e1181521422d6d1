//! Action resolution - the state machine over [`ActionKind`].
//!
//! [`process_action`] is the deterministic core of the engine: it takes
//! a state, an action, and fully resolved rolls, and returns a new
//! state plus a descriptive [`ActionResult`]. The input state is never
//! mutated, and identical `(state, action, rolls)` triples always
//! produce identical output.

mod damage;
mod hit;
mod result;

pub use damage::calculate_damage;
pub use hit::{check_hit, hit_chance};
pub use result::ActionResult;

use crate::action::{ActionKind, CombatAction, validate_action};
use crate::balance::BalanceParams;
use crate::combatant::CombatantId;
use crate::rolls::Rolls;
use crate::state::{CombatPhase, CombatState};
use crate::status::{StatusEffect, StatusEffectKind};

/// Validates and resolves one action.
///
/// On a validator rejection the returned state is identical to the
/// input and the result carries the rejection message. Resolved actions
/// return the successor state with the exchange appended to the log.
///
/// Turn advancement is the caller's job: even failed attacks and
/// blocked flee attempts consume the turn.
pub fn process_action(
    state: &CombatState,
    action: &CombatAction,
    rolls: Rolls,
    params: &BalanceParams,
) -> (CombatState, ActionResult) {
    if let Err(reason) = validate_action(state, action) {
        return (state.clone(), ActionResult::failed(reason.to_string()));
    }

    match &action.kind {
        ActionKind::Attack { target } => resolve_attack(state, &action.actor, target, rolls, params),
        ActionKind::Defend => resolve_defend(state, &action.actor, params),
        ActionKind::Flee => resolve_flee(state, &action.actor, rolls, params),
        ActionKind::UseItem { item } => resolve_item(state, &action.actor, item),
    }
}

fn resolve_attack(
    state: &CombatState,
    actor_id: &CombatantId,
    target_id: &CombatantId,
    rolls: Rolls,
    params: &BalanceParams,
) -> (CombatState, ActionResult) {
    // The validator already vetted both sides; this is the defensive
    // re-check for direct callers of the resolver.
    let (Some(actor), Some(target)) = (state.combatant(actor_id), state.combatant(target_id))
    else {
        return (
            state.clone(),
            ActionResult::failed("no valid target for the attack"),
        );
    };

    let chance = hit_chance(actor.stats.accuracy, target.stats.evasion, &params.hit);

    if !check_hit(chance, rolls.hit) {
        let mut next = state.clone();
        let message = format!("{} misses {}!", actor.name, target.name);
        next.push_log(message.clone());
        let result = ActionResult {
            was_dodged: true,
            ..ActionResult::failed(message)
        };
        return (next, result);
    }

    let is_critical = rolls.crit * 100.0 < f64::from(actor.stats.crit_chance);
    let damage = calculate_damage(actor, target, is_critical, rolls.variance, &params.damage);

    let mut message = if is_critical {
        format!(
            "CRITICAL! {} hits {} for {} damage",
            actor.name, target.name, damage
        )
    } else {
        format!("{} hits {} for {} damage", actor.name, target.name, damage)
    };

    let target_name = target.name.clone();

    let mut next = state.clone();
    let target_mut = next
        .combatant_mut(target_id)
        .expect("target vetted above");
    target_mut.apply_damage(damage);
    let target_killed = !target_mut.is_alive;

    if target_killed {
        message = format!("{message} - {target_name} is defeated!");
    }
    next.push_log(message.clone());

    let result = ActionResult {
        damage: Some(damage),
        is_critical,
        target_killed,
        ..ActionResult::succeeded(message)
    };
    (next, result)
}

fn resolve_defend(
    state: &CombatState,
    actor_id: &CombatantId,
    params: &BalanceParams,
) -> (CombatState, ActionResult) {
    let effect = StatusEffect {
        kind: StatusEffectKind::Defending,
        turns_remaining: params.defend.duration,
        value: params.defend.reduction,
    };

    let mut next = state.clone();
    let actor = next
        .combatant_mut(actor_id)
        .expect("actor vetted by validator");
    actor.status_effects.add(effect);
    let message = format!("{} takes a defensive stance", actor.name);
    next.push_log(message.clone());

    let result = ActionResult {
        status_effect_applied: Some(effect),
        ..ActionResult::succeeded(message)
    };
    (next, result)
}

fn resolve_flee(
    state: &CombatState,
    actor_id: &CombatantId,
    rolls: Rolls,
    params: &BalanceParams,
) -> (CombatState, ActionResult) {
    // Defensive duplicate of the validator's rule: boss fights never
    // allow escape, and the state must stay untouched.
    if !state.can_flee {
        return (
            state.clone(),
            ActionResult::failed("fleeing is not possible in this battle"),
        );
    }

    let actor_name = state
        .combatant(actor_id)
        .map(|c| c.name.clone())
        .unwrap_or_default();

    let mut next = state.clone();
    if rolls.hit * 100.0 < f64::from(params.flee_chance) {
        let message = format!("{actor_name} flees the battle!");
        next.phase = CombatPhase::Fled;
        next.push_log(message.clone());
        let result = ActionResult {
            flee_success: Some(true),
            ..ActionResult::succeeded(message)
        };
        (next, result)
    } else {
        // The failed attempt still consumes the turn; the caller
        // advances so the opposing side can act.
        let message = format!("{actor_name} fails to escape!");
        next.push_log(message.clone());
        let result = ActionResult {
            flee_success: Some(false),
            ..ActionResult::failed(message)
        };
        (next, result)
    }
}

fn resolve_item(
    state: &CombatState,
    actor_id: &CombatantId,
    item: &str,
) -> (CombatState, ActionResult) {
    // Item effects belong to an external collaborator; the engine only
    // routes the action and reports that nothing happened here.
    let actor_name = state
        .combatant(actor_id)
        .map(|c| c.name.clone())
        .unwrap_or_default();
    (
        state.clone(),
        ActionResult::failed(format!(
            "{actor_name} reaches for {item}, but item effects are resolved elsewhere"
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::CombatAction;
    use crate::combatant::{CombatStats, Combatant};
    use crate::encounter::{BehaviorHint, EnemyDefinition};
    use crate::turn_order::calculate_turn_order;

    fn bandit() -> EnemyDefinition {
        EnemyDefinition {
            name: "Bandit".to_owned(),
            max_health: 30,
            base_damage: 8,
            armor: 5,
            action_points: 4,
            accuracy_mod: 0,
            evasion: 0,
            crit_chance: 5,
            crit_multiplier: 150,
            xp_reward: 20,
            gold_reward: 10,
            behavior: BehaviorHint::Aggressive,
        }
    }

    fn test_state(can_flee: bool) -> CombatState {
        let combatants = vec![
            Combatant::player("Hero", CombatStats::flat(100, 15, 5, 12), None),
            Combatant::enemy("bandit", &bandit(), 0),
        ];
        let turn_order = calculate_turn_order(&combatants);
        CombatState {
            combatants,
            turn_order,
            current_turn_index: 0,
            round: 1,
            phase: CombatPhase::PlayerTurn,
            can_flee,
            is_boss: !can_flee,
            log: Vec::new(),
        }
    }

    fn attack() -> CombatAction {
        CombatAction::attack(CombatantId::player(), CombatantId::enemy("bandit", 0))
    }

    const PARAMS: BalanceParams = BalanceParams::new();

    #[test]
    fn guaranteed_hit_deals_damage_without_crit() {
        let state = test_state(true);
        let rolls = Rolls {
            hit: 0.1,
            crit: 0.9,
            variance: 0.5,
        };

        let (next, result) = process_action(&state, &attack(), rolls, &PARAMS);

        assert!(result.success);
        assert!(result.damage.unwrap() > 0);
        assert!(!result.is_critical);
        assert_eq!(result.damage, Some(10)); // max(1, 15-5) at neutral variance
        let bandit = next.combatant(&CombatantId::enemy("bandit", 0)).unwrap();
        assert_eq!(bandit.stats.hp, 20);
        assert_eq!(next.log.len(), 1);
    }

    #[test]
    fn guaranteed_miss_dodges_and_still_logs() {
        let state = test_state(true);
        let rolls = Rolls {
            hit: 0.99,
            crit: 0.9,
            variance: 0.5,
        };

        let (next, result) = process_action(&state, &attack(), rolls, &PARAMS);

        assert!(!result.success);
        assert!(result.was_dodged);
        assert_eq!(result.damage, None);
        assert!(result.message.contains("misses"));
        // No damage, no death; only the log moved.
        let bandit = next.combatant(&CombatantId::enemy("bandit", 0)).unwrap();
        assert_eq!(bandit.stats.hp, 30);
        assert!(bandit.is_alive);
    }

    #[test]
    fn critical_hit_is_flagged_and_amplified() {
        let state = test_state(true);
        let rolls = Rolls {
            hit: 0.1,
            crit: 0.0, // under the player's 10% crit chance
            variance: 0.5,
        };

        let (_, result) = process_action(&state, &attack(), rolls, &PARAMS);

        assert!(result.is_critical);
        assert_eq!(result.damage, Some(15)); // 10 * 1.5
        assert!(result.message.contains("CRITICAL"));
    }

    #[test]
    fn lethal_hit_kills_target() {
        let mut state = test_state(true);
        {
            let bandit = state
                .combatant_mut(&CombatantId::enemy("bandit", 0))
                .unwrap();
            bandit.stats.hp = 1;
            bandit.stats.defense = 0;
        }
        let rolls = Rolls {
            hit: 0.1,
            crit: 0.9,
            variance: 0.5,
        };

        let (next, result) = process_action(&state, &attack(), rolls, &PARAMS);

        assert!(result.target_killed);
        let bandit = next.combatant(&CombatantId::enemy("bandit", 0)).unwrap();
        assert!(!bandit.is_alive);
        assert_eq!(bandit.stats.hp, 0);
        assert!(result.message.contains("defeated"));
    }

    #[test]
    fn defend_applies_stance_effect() {
        let state = test_state(true);
        let (next, result) = process_action(
            &state,
            &CombatAction::defend(CombatantId::player()),
            Rolls::MIDPOINT,
            &PARAMS,
        );

        assert!(result.success);
        let applied = result.status_effect_applied.unwrap();
        assert_eq!(applied.kind, StatusEffectKind::Defending);
        assert_eq!(applied.turns_remaining, 1);
        assert!(next.player().status_effects.has(StatusEffectKind::Defending));
    }

    #[test]
    fn flee_in_boss_fight_fails_without_touching_state() {
        let state = test_state(false);
        let (next, result) = process_action(
            &state,
            &CombatAction::flee(CombatantId::player()),
            Rolls::MIDPOINT,
            &PARAMS,
        );

        assert!(!result.success);
        assert!(result.message.contains("not possible"));
        assert_eq!(next, state);
    }

    #[test]
    fn successful_flee_is_terminal() {
        let state = test_state(true);
        let rolls = Rolls {
            hit: 0.1, // under the 50% flee chance
            crit: 0.5,
            variance: 0.5,
        };
        let (next, result) = process_action(
            &state,
            &CombatAction::flee(CombatantId::player()),
            rolls,
            &PARAMS,
        );

        assert!(result.success);
        assert_eq!(result.flee_success, Some(true));
        assert_eq!(next.phase, CombatPhase::Fled);
        assert!(next.phase.is_terminal());
    }

    #[test]
    fn failed_flee_reports_but_does_not_terminate() {
        let state = test_state(true);
        let rolls = Rolls {
            hit: 0.9,
            crit: 0.5,
            variance: 0.5,
        };
        let (next, result) = process_action(
            &state,
            &CombatAction::flee(CombatantId::player()),
            rolls,
            &PARAMS,
        );

        assert!(!result.success);
        assert_eq!(result.flee_success, Some(false));
        assert_eq!(next.phase, CombatPhase::PlayerTurn);
    }

    #[test]
    fn rejected_action_leaves_state_identical() {
        let mut state = test_state(true);
        state
            .combatant_mut(&CombatantId::player())
            .unwrap()
            .status_effects
            .add(StatusEffect {
                kind: StatusEffectKind::Stunned,
                turns_remaining: 1,
                value: 0,
            });

        let (next, result) = process_action(&state, &attack(), Rolls::MIDPOINT, &PARAMS);

        assert!(!result.success);
        assert!(result.message.contains("stunned"));
        assert_eq!(next, state);
    }

    #[test]
    fn resolution_is_deterministic() {
        let state = test_state(true);
        let rolls = Rolls {
            hit: 0.3,
            crit: 0.07,
            variance: 0.62,
        };

        let first = process_action(&state, &attack(), rolls, &PARAMS);
        let second = process_action(&state, &attack(), rolls, &PARAMS);
        assert_eq!(first, second);
    }

    #[test]
    fn item_action_routes_to_stub() {
        let state = test_state(true);
        let action = CombatAction {
            actor: CombatantId::player(),
            kind: ActionKind::UseItem {
                item: "healing_draught".to_owned(),
            },
        };

        let (next, result) = process_action(&state, &action, Rolls::MIDPOINT, &PARAMS);

        assert!(!result.success);
        assert_eq!(next, state);
    }
}
