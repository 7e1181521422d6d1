//! Action resolution output.

use crate::status::StatusEffect;

/// Pure descriptive outcome of one resolved (or rejected) action.
///
/// Never an error: failed hits, blocked flees, and validator rejections
/// are all ordinary values with `success == false`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionResult {
    pub success: bool,
    /// Human-readable summary for the combat log / UI.
    pub message: String,
    /// Damage dealt, if the action dealt any.
    pub damage: Option<u32>,
    pub is_critical: bool,
    /// True when an attack missed its target.
    pub was_dodged: bool,
    /// True when the action dropped its target to zero HP.
    pub target_killed: bool,
    /// Set for flee attempts only.
    pub flee_success: Option<bool>,
    /// Status effect the action placed on a combatant, if any.
    pub status_effect_applied: Option<StatusEffect>,
}

impl ActionResult {
    pub(crate) fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            damage: None,
            is_critical: false,
            was_dodged: false,
            target_killed: false,
            flee_success: None,
            status_effect_applied: None,
        }
    }

    pub(crate) fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::succeeded(message)
        }
    }
}
