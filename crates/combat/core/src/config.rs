/// Engine-wide capacity constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatConfig;

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of simultaneous status effects per combatant.
    pub const MAX_STATUS_EFFECTS: usize = 8;
    /// Soft upper bound on roster size (player + enemies). Encounters
    /// spawning more than this are a content bug, not an engine concern.
    pub const MAX_COMBATANTS: usize = 16;
}
