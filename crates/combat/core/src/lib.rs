//! Deterministic turn-based combat resolution.
//!
//! `combat-core` defines the canonical battle rules as pure transition
//! functions over an immutable [`CombatState`]: initialization from an
//! encounter, speed-ordered turns, action validation and resolution,
//! per-round status effects, end detection, and victory rewards.
//!
//! Randomness is injected: the core consumes explicit [`Rolls`] for
//! fully reproducible replays, and [`CombatSession`] wraps it with a
//! seeded [`RollSource`] for ergonomic default usage. Presentation,
//! enemy AI, and content storage are external collaborators - the
//! engine consumes an [`EnemyOracle`] and produces state snapshots and
//! [`ActionResult`] values, nothing more.

pub mod action;
pub mod balance;
pub mod combatant;
pub mod config;
pub mod encounter;
pub mod end;
pub mod error;
pub mod init;
pub mod resolve;
pub mod rewards;
pub mod rolls;
pub mod session;
pub mod state;
pub mod status;
pub mod turn_order;

pub use action::{ActionKind, CombatAction, InvalidReason, validate_action};
pub use balance::{BASE_ACCURACY, BalanceParams, DamageParams, DefendParams, HitParams};
pub use combatant::{CombatStats, Combatant, CombatantId, CombatantKind};
pub use config::CombatConfig;
pub use encounter::{
    BehaviorHint, CombatEncounter, CombatInitContext, EnemyDefinition, EnemyGroup, EnemyOracle,
    ItemDrop, RewardTable,
};
pub use end::{CombatOutcome, apply_combat_end, check_combat_end};
pub use error::ContentError;
pub use init::{begin_combat, initialize_combat};
pub use resolve::{ActionResult, calculate_damage, check_hit, hit_chance, process_action};
pub use rewards::{
    CombatRewards, calculate_rewards, calculate_rewards_with_drops, roll_item_drops,
};
pub use rolls::{PcgRolls, RandomRolls, RollContext, RollSource, Rolls, compute_seed};
pub use session::CombatSession;
pub use state::{CombatPhase, CombatState};
pub use status::{
    StatusEffect, StatusEffectKind, StatusEffects, StatusTickEvent, tick_status_effects,
};
pub use turn_order::{advance_turn, calculate_turn_order};
