//! Injected randomness for deterministic combat resolution.
//!
//! The resolver itself never draws random numbers: it consumes a fully
//! resolved [`Rolls`] value. Callers either supply every roll explicitly
//! (replays, tests) or let the session layer fill in the gaps from a
//! [`RollSource`].
//!
//! # Determinism
//!
//! All roll sources must be deterministic: given the same seed they must
//! produce the same value. Identical `(state, action, rolls)` triples
//! therefore always resolve identically.

/// A fully resolved set of rolls for one action, each in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rolls {
    /// Compared against hit chance; the attack lands when `hit` falls
    /// under the chance. Also doubles as the flee roll.
    pub hit: f64,
    /// Compared against the attacker's crit chance.
    pub crit: f64,
    /// Scales damage within the variance window.
    pub variance: f64,
}

impl Rolls {
    /// Midpoint rolls: guaranteed hit at any reasonable chance, no crit,
    /// neutral variance. Convenient baseline for tests.
    pub const MIDPOINT: Rolls = Rolls {
        hit: 0.5,
        crit: 0.5,
        variance: 0.5,
    };
}

/// Optional per-roll overrides supplied by the caller.
///
/// Any omitted roll is drawn from the session's [`RollSource`]; any
/// supplied roll is used exactly as given.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RandomRolls {
    pub hit: Option<f64>,
    pub crit: Option<f64>,
    pub variance: Option<f64>,
}

impl RandomRolls {
    /// Fully specified rolls - nothing left to the session's source.
    pub const fn fixed(hit: f64, crit: f64, variance: f64) -> Self {
        Self {
            hit: Some(hit),
            crit: Some(crit),
            variance: Some(variance),
        }
    }

    /// Resolves the overrides into concrete rolls, drawing missing
    /// values from `draw`. The context passed to `draw` distinguishes
    /// the independent rolls of a single action.
    pub fn resolve(self, mut draw: impl FnMut(RollContext) -> f64) -> Rolls {
        Rolls {
            hit: self.hit.unwrap_or_else(|| draw(RollContext::Hit)),
            crit: self.crit.unwrap_or_else(|| draw(RollContext::Crit)),
            variance: self
                .variance
                .unwrap_or_else(|| draw(RollContext::Variance)),
        }
    }
}

/// Which of an action's independent rolls is being drawn.
///
/// Used as the seed context so the same action nonce yields three
/// uncorrelated values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollContext {
    Hit,
    Crit,
    Variance,
}

impl RollContext {
    pub const fn as_u32(self) -> u32 {
        match self {
            RollContext::Hit => 0,
            RollContext::Crit => 1,
            RollContext::Variance => 2,
        }
    }
}

/// Source of deterministic unit-interval rolls.
///
/// Implementations must be pure functions of the seed.
pub trait RollSource: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// A roll in `[0, 1)` derived from the seed.
    fn unit(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / (u64::from(u32::MAX) + 1) as f64
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Deterministic, fast,
/// and statistically solid - more than enough for combat rolls.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRolls;

impl PcgRolls {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step (LCG formula).
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RollSource for PcgRolls {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic seed from battle context.
///
/// Combines multiple entropy sources so each random event in a battle
/// gets a unique seed:
///
/// * `battle_seed` - base seed fixed at initialization (for replays)
/// * `nonce` - action sequence number (increments each action)
/// * `actor` - id bytes of the acting combatant
/// * `context` - distinguishes multiple rolls within one action
pub fn compute_seed(battle_seed: u64, nonce: u64, actor: &str, context: u32) -> u64 {
    // Mix all inputs using simple hash combiners. Constants are based
    // on SplitMix64 and FxHash multipliers.
    let mut hash = battle_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);

    for byte in actor.bytes() {
        hash = hash
            .wrapping_mul(0x517cc1b727220a95)
            .wrapping_add(u64::from(byte));
    }

    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
