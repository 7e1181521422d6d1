//! Balance parameters for combat resolution.
//!
//! All tunable numbers used by the resolver live here so that the
//! resolution functions themselves stay formula-only. Defaults match
//! the shipped game balance; tests construct custom values to pin down
//! edge cases (e.g. a 100% flee chance).

/// Baseline accuracy granted to every combatant before per-definition
/// modifiers are applied.
pub const BASE_ACCURACY: i32 = 85;

/// Hit chance parameters.
///
/// ```text
/// hit_chance = accuracy - evasion
/// clamped to [min, max]
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitParams {
    /// Floor on hit chance, percent. Even a hopeless swing can land.
    pub min: u32,
    /// Ceiling on hit chance, percent. No attack is a sure thing.
    pub max: u32,
}

/// Damage calculation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageParams {
    /// Minimum damage dealt by any landed hit.
    pub minimum: u32,
    /// Lower bound of the variance factor, percent (85 = x0.85).
    pub variance_min: u32,
    /// Upper bound of the variance factor, percent (115 = x1.15).
    pub variance_max: u32,
}

/// Defend action parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefendParams {
    /// Number of turns the defending stance persists.
    pub duration: u32,
    /// Incoming damage reduction while defending, percent.
    pub reduction: u32,
}

/// Aggregated balance table consumed by the action resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceParams {
    pub hit: HitParams,
    pub damage: DamageParams,
    pub defend: DefendParams,
    /// Chance for a flee attempt to succeed, percent.
    pub flee_chance: u32,
}

impl BalanceParams {
    pub const fn new() -> Self {
        Self {
            hit: HitParams { min: 5, max: 95 },
            damage: DamageParams {
                minimum: 1,
                variance_min: 85,
                variance_max: 115,
            },
            defend: DefendParams {
                duration: 1,
                reduction: 50,
            },
            flee_chance: 50,
        }
    }
}

impl Default for BalanceParams {
    fn default() -> Self {
        Self::new()
    }
}
