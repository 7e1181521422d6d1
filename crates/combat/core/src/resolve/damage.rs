//! Damage calculation.

use crate::balance::DamageParams;
use crate::combatant::Combatant;
use crate::status::StatusEffectKind;

/// Calculate the damage of a landed hit.
///
/// # Formula
///
/// ```text
/// base    = max(1, attack - defense)
/// scaled  = base * variance_factor          // within [variance_min, variance_max]
/// scaled *= 1 + buff/100                    // attacker's Buffed effect
/// scaled *= 1 - reduction/100               // target's Defending effect
/// scaled *= crit_multiplier/100             // on a critical hit
/// final   = max(minimum, round(scaled))
/// ```
///
/// `variance_roll` is a unit-interval roll mapped linearly onto the
/// variance window, so 0.5 lands exactly between the bounds.
pub fn calculate_damage(
    attacker: &Combatant,
    target: &Combatant,
    is_critical: bool,
    variance_roll: f64,
    params: &DamageParams,
) -> u32 {
    let base = attacker
        .stats
        .attack
        .saturating_sub(target.stats.defense)
        .max(1);

    let spread = f64::from(params.variance_max - params.variance_min);
    let variance_factor = (f64::from(params.variance_min) + variance_roll * spread) / 100.0;

    let mut scaled = f64::from(base) * variance_factor;

    if let Some(buff) = attacker.status_effects.get(StatusEffectKind::Buffed) {
        scaled *= 1.0 + f64::from(buff.value) / 100.0;
    }

    if let Some(guard) = target.status_effects.get(StatusEffectKind::Defending) {
        scaled *= 1.0 - f64::from(guard.value.min(100)) / 100.0;
    }

    if is_critical {
        scaled *= f64::from(attacker.stats.crit_multiplier) / 100.0;
    }

    (scaled.round() as u32).max(params.minimum)
}
