//! Plays one scripted battle against the bundled catalogs and prints
//! the combat log.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p combat-content --example skirmish -- 42
//! ```

use combat_content::{EncounterLoader, EnemyLoader};
use combat_core::{
    CombatAction, CombatInitContext, CombatSession, CombatStats, CombatantId, RandomRolls,
    advance_turn, begin_combat, initialize_combat,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let seed = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(42);

    let enemies = EnemyLoader::builtin();
    let encounters = EncounterLoader::builtin();
    let encounter = encounters
        .get("roadside_ambush")
        .ok_or_else(|| anyhow::anyhow!("bundled catalog is missing 'roadside_ambush'"))?;

    let context = CombatInitContext {
        player_name: "Aria".to_owned(),
        player_stats: CombatStats::flat(60, 15, 5, 12),
        player_weapon: Some("iron_sword".to_owned()),
    };

    let mut session = CombatSession::seeded(seed);
    let mut state = begin_combat(&initialize_combat(encounter, &context, &enemies)?);
    let player = CombatantId::player();

    // Greedy policy on both sides: everyone attacks, the player picks
    // the first enemy still standing.
    while !state.phase.is_terminal() {
        let Some(current) = state.current_combatant_id().cloned() else {
            break;
        };
        let action = if current.is_player() {
            let target = state
                .alive_enemies()
                .next()
                .map(|e| e.id.clone())
                .ok_or_else(|| anyhow::anyhow!("no target left in a non-terminal battle"))?;
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

    for line in &state.log {
        println!("{line}");
    }
    println!("--- {} after {} round(s)", state.phase, state.round);

    if let Some(rewards) = session.rewards(&state, encounter) {
        println!(
            "rewards: {} xp, {} gold, items: {:?}",
            rewards.xp, rewards.gold, rewards.items
        );
    }

    Ok(())
}
