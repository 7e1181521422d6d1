//! Combat actions and their validation.
//!
//! Validation runs before any state mutation. A failed check is an
//! expected rejection, not an error: `process_action` surfaces it as a
//! failure [`ActionResult`](crate::resolve::ActionResult) carrying the
//! reason's message and returns the input state untouched.

use crate::combatant::CombatantId;
use crate::state::CombatState;
use crate::status::StatusEffectKind;

/// What a combatant is attempting this turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Attack { target: CombatantId },
    Defend,
    Flee,
    /// Routed and validated like any other action; the item's actual
    /// effect is resolved by an external collaborator.
    UseItem { item: String },
}

/// An action submitted by the caller (player input or enemy AI),
/// consumed exactly once by `process_action`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatAction {
    pub actor: CombatantId,
    pub kind: ActionKind,
}

impl CombatAction {
    pub fn attack(actor: CombatantId, target: CombatantId) -> Self {
        Self {
            actor,
            kind: ActionKind::Attack { target },
        }
    }

    pub fn defend(actor: CombatantId) -> Self {
        Self {
            actor,
            kind: ActionKind::Defend,
        }
    }

    pub fn flee(actor: CombatantId) -> Self {
        Self {
            actor,
            kind: ActionKind::Flee,
        }
    }
}

/// Why an action was rejected before resolution.
///
/// The display form is the player-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidReason {
    /// The acting id is not part of this battle.
    #[error("{0} is not part of this battle")]
    UnknownActor(String),

    /// The actor is dead and cannot act.
    #[error("{0} is dead and cannot act")]
    ActorDead(String),

    /// The actor is stunned this turn.
    #[error("{0} is stunned and cannot act")]
    ActorStunned(String),

    /// An attack named a target that is not in this battle.
    #[error("no valid target for the attack")]
    MissingTarget,

    /// An attack named a target that is already down.
    #[error("{0} is already defeated")]
    TargetDead(String),

    /// Fleeing is disallowed in this encounter.
    #[error("fleeing is not possible in this battle")]
    FleeDisallowed,
}

/// Checks whether an action may resolve against the given state.
///
/// Rules are checked in order; the first failure wins:
/// 1. the actor must be part of the battle,
/// 2. the actor must be alive,
/// 3. the actor must not be stunned,
/// 4. an attack's target must exist and still stand,
/// 5. fleeing must be allowed by the encounter.
pub fn validate_action(state: &CombatState, action: &CombatAction) -> Result<(), InvalidReason> {
    let actor = state
        .combatant(&action.actor)
        .ok_or_else(|| InvalidReason::UnknownActor(action.actor.to_string()))?;

    if !actor.is_alive {
        return Err(InvalidReason::ActorDead(actor.name.clone()));
    }

    if actor.status_effects.has(StatusEffectKind::Stunned) {
        return Err(InvalidReason::ActorStunned(actor.name.clone()));
    }

    match &action.kind {
        ActionKind::Attack { target } => {
            let target = state
                .combatant(target)
                .ok_or(InvalidReason::MissingTarget)?;
            if !target.is_alive {
                return Err(InvalidReason::TargetDead(target.name.clone()));
            }
        }
        ActionKind::Flee => {
            if !state.can_flee {
                return Err(InvalidReason::FleeDisallowed);
            }
        }
        ActionKind::Defend | ActionKind::UseItem { .. } => {}
    }

    Ok(())
}
