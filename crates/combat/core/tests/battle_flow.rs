//! End-to-end battle scenarios driving the full engine loop:
//! initialize, act, advance turns across round boundaries, detect the
//! end, and collect rewards.

use combat_core::{
    BehaviorHint, CombatAction, CombatEncounter, CombatInitContext, CombatPhase, CombatSession,
    CombatStats, CombatantId, EnemyDefinition, EnemyGroup, EnemyOracle, ItemDrop, RandomRolls,
    RewardTable, StatusEffect, StatusEffectKind, advance_turn, begin_combat, initialize_combat,
};

struct TestContent;

impl EnemyOracle for TestContent {
    fn definition(&self, enemy_id: &str) -> Option<EnemyDefinition> {
        match enemy_id {
            // Dies to one clean player hit (attack 15 vs armor 0).
            "mook" => Some(EnemyDefinition {
                name: "Mook".to_owned(),
                max_health: 10,
                base_damage: 3,
                armor: 0,
                action_points: 4,
                accuracy_mod: 0,
                evasion: 0,
                crit_chance: 0,
                crit_multiplier: 150,
                xp_reward: 20,
                gold_reward: 10,
                behavior: BehaviorHint::Aggressive,
            }),
            "ogre" => Some(EnemyDefinition {
                name: "Ogre".to_owned(),
                max_health: 200,
                base_damage: 60,
                armor: 20,
                action_points: 3,
                accuracy_mod: 10,
                evasion: 0,
                crit_chance: 0,
                crit_multiplier: 200,
                xp_reward: 150,
                gold_reward: 80,
                behavior: BehaviorHint::Aggressive,
            }),
            _ => None,
        }
    }
}

fn context() -> CombatInitContext {
    CombatInitContext {
        player_name: "Aria".to_owned(),
        player_stats: CombatStats::flat(50, 15, 5, 12),
        player_weapon: Some("iron_sword".to_owned()),
    }
}

fn mook_pair_encounter() -> CombatEncounter {
    CombatEncounter {
        id: "alley_scuffle".to_owned(),
        enemies: vec![EnemyGroup {
            enemy_id: "mook".to_owned(),
            count: 2,
        }],
        can_flee: true,
        is_boss: false,
        rewards: RewardTable {
            xp: 50,
            gold: 20,
            item_drops: vec![ItemDrop {
                item_id: "lucky_coin".to_owned(),
                chance: 100,
            }],
        },
    }
}

const SURE_HIT: RandomRolls = RandomRolls::fixed(0.01, 0.99, 0.5);

#[test]
fn scripted_battle_to_victory_with_rewards() {
    let encounter = mook_pair_encounter();
    let state = initialize_combat(&encounter, &context(), &TestContent).unwrap();
    let state = begin_combat(&state);
    assert_eq!(state.phase, CombatPhase::PlayerTurn);

    let mut session = CombatSession::seeded(42);
    let player = CombatantId::player();
    let mook_1 = CombatantId::enemy("mook", 0);
    let mook_2 = CombatantId::enemy("mook", 1);

    // Round 1: the player one-shots the first mook.
    let (state, result) =
        session.process_action(&state, &CombatAction::attack(player.clone(), mook_1.clone()), SURE_HIT);
    assert!(result.target_killed);
    assert_eq!(state.phase, CombatPhase::PlayerTurn); // mook_2 still stands

    // Advancing skips the fresh corpse and lands on the second mook.
    let state = advance_turn(&state);
    assert_eq!(state.current_combatant_id(), Some(&mook_2));
    assert_eq!(state.phase, CombatPhase::EnemyTurn);

    // The mook claws back.
    let (state, result) =
        session.process_action(&state, &CombatAction::attack(mook_2.clone(), player.clone()), SURE_HIT);
    assert!(result.success);
    assert!(state.player().stats.hp < 50);

    // Wrap into round 2; the dead mook must not reappear in the order.
    let state = advance_turn(&state);
    assert_eq!(state.round, 2);
    assert!(state.turn_order.iter().all(|id| id != &mook_1));
    assert_eq!(state.current_combatant_id(), Some(&player));

    // Round 2: finish the job.
    let (state, result) =
        session.process_action(&state, &CombatAction::attack(player.clone(), mook_2), SURE_HIT);
    assert!(result.target_killed);
    assert_eq!(state.phase, CombatPhase::Victory);

    // Spoils: base 50/20 plus two 20/10 bounties, plus the sure drop.
    let rewards = session.rewards(&state, &encounter).unwrap();
    assert_eq!(rewards.xp, 90);
    assert_eq!(rewards.gold, 40);
    assert_eq!(rewards.items, vec!["lucky_coin".to_owned()]);

    // The log tells the whole story.
    assert!(state.log.iter().any(|l| l.contains("Mook is defeated")));
    assert!(state.log.iter().any(|l| l.contains("Mook B is defeated")));
    assert!(state.log.last().unwrap().contains("Victory"));
}

#[test]
fn overwhelming_enemy_defeats_the_player() {
    let encounter = CombatEncounter {
        id: "ogre_bridge".to_owned(),
        enemies: vec![EnemyGroup {
            enemy_id: "ogre".to_owned(),
            count: 1,
        }],
        can_flee: true,
        is_boss: false,
        rewards: RewardTable::default(),
    };
    let state = initialize_combat(&encounter, &context(), &TestContent).unwrap();
    let state = begin_combat(&state);

    let mut session = CombatSession::seeded(7);
    let player = CombatantId::player();
    let ogre = CombatantId::enemy("ogre", 0);

    // Player plinks the ogre, then the ogre lands a killing blow
    // (60 attack vs 5 defense against 50 HP).
    let (state, _) =
        session.process_action(&state, &CombatAction::attack(player.clone(), ogre.clone()), SURE_HIT);
    let state = advance_turn(&state);
    assert_eq!(state.current_combatant_id(), Some(&ogre));

    let (state, result) =
        session.process_action(&state, &CombatAction::attack(ogre, player), SURE_HIT);

    assert!(result.target_killed);
    assert_eq!(state.phase, CombatPhase::Defeat);
    assert!(!state.player().is_alive);

    // No spoils in defeat.
    assert_eq!(session.rewards(&state, &encounter), None);
}

#[test]
fn failed_flee_consumes_the_turn_then_success_ends_the_battle() {
    let encounter = mook_pair_encounter();
    let state = initialize_combat(&encounter, &context(), &TestContent).unwrap();
    let state = begin_combat(&state);

    let mut session = CombatSession::seeded(3);
    let player = CombatantId::player();

    // Forced failure: roll above the 50% flee chance.
    let (state, result) = session.process_action(
        &state,
        &CombatAction::flee(player.clone()),
        RandomRolls::fixed(0.9, 0.5, 0.5),
    );
    assert!(!result.success);
    assert_eq!(result.flee_success, Some(false));
    assert!(!state.phase.is_terminal());

    // The enemies get their turns before the player can try again.
    let state = advance_turn(&state);
    assert_eq!(state.phase, CombatPhase::EnemyTurn);
    let state = advance_turn(&state);
    let state = advance_turn(&state);
    assert_eq!(state.round, 2);
    assert_eq!(state.current_combatant_id(), Some(&player));

    // Forced success.
    let (state, result) = session.process_action(
        &state,
        &CombatAction::flee(player),
        RandomRolls::fixed(0.1, 0.5, 0.5),
    );
    assert!(result.success);
    assert_eq!(result.flee_success, Some(true));
    assert_eq!(state.phase, CombatPhase::Fled);

    // Fleeing forfeits all spoils, even with a mook already down.
    assert_eq!(session.rewards(&state, &encounter), None);
}

#[test]
fn poison_carries_across_round_boundaries_until_it_expires() {
    let encounter = mook_pair_encounter();
    let mut state = begin_combat(&initialize_combat(&encounter, &context(), &TestContent).unwrap());

    // A poisoned player: 4 damage per round for 2 rounds.
    state
        .combatants
        .iter_mut()
        .find(|c| c.is_player())
        .unwrap()
        .status_effects
        .add(StatusEffect {
            kind: StatusEffectKind::Poisoned,
            turns_remaining: 2,
            value: 4,
        });

    // Walk a full round: player, mook, mook, wrap.
    let state = advance_turn(&state);
    let state = advance_turn(&state);
    let state = advance_turn(&state);
    assert_eq!(state.round, 2);
    assert_eq!(state.player().stats.hp, 46);

    let state = advance_turn(&state);
    let state = advance_turn(&state);
    let state = advance_turn(&state);
    assert_eq!(state.round, 3);
    assert_eq!(state.player().stats.hp, 42);
    assert!(state.player().status_effects.is_empty());

    // Expired: round 4 deals no further poison.
    let state = advance_turn(&state);
    let state = advance_turn(&state);
    let state = advance_turn(&state);
    assert_eq!(state.round, 4);
    assert_eq!(state.player().stats.hp, 42);
}

#[test]
fn identical_seeds_replay_the_whole_battle_identically() {
    let encounter = mook_pair_encounter();

    let run = |seed: u64| {
        let mut session = CombatSession::seeded(seed);
        let mut state =
            begin_combat(&initialize_combat(&encounter, &context(), &TestContent).unwrap());
        let player = CombatantId::player();

        for _ in 0..20 {
            if state.phase.is_terminal() {
                break;
            }
            let current = state.current_combatant_id().unwrap().clone();
            let action = if current.is_player() {
                // Attack the first living mook.
                let target = state
                    .alive_enemies()
                    .next()
                    .map(|e| e.id.clone())
                    .unwrap();
                CombatAction::attack(player.clone(), target)
            } else {
                CombatAction::attack(current, player.clone())
            };
            let (next, _) = session.process_action(&state, &action, RandomRolls::default());
            state = if next.phase.is_terminal() {
                next
            } else {
                advance_turn(&next)
            };
        }
        state
    };

    let first = run(12345);
    let second = run(12345);
    assert_eq!(first, second);
    assert_eq!(first.log, second.log);
}
