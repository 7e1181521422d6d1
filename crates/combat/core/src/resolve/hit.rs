//! Hit chance and accuracy calculations.

use crate::balance::HitParams;

/// Calculate hit chance based on accuracy vs evasion.
///
/// # Formula
///
/// ```text
/// hit_chance = accuracy - evasion
/// clamped to [min, max]
/// ```
///
/// Returns the chance as a percentage.
pub fn hit_chance(accuracy: i32, evasion: i32, params: &HitParams) -> u32 {
    let stat_diff = accuracy - evasion;
    stat_diff.clamp(params.min as i32, params.max as i32) as u32
}

/// Check whether an attack lands.
///
/// The attack hits when the unit-interval roll falls under the chance;
/// a roll of 0.99 misses anything at or below 99% chance.
pub fn check_hit(chance: u32, roll: f64) -> bool {
    roll * 100.0 < f64::from(chance)
}
