//! RNG oracle for deterministic random rolls.
//!
//! The engine never pulls entropy from the environment. Every roll site
//! derives a unique seed from the battle seed plus its position in the turn
//! (round, fighter, roll context) and asks the oracle for one value. Given
//! the same battle seed, a battle replays identically.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be pure: the same seed must always produce the
/// same value. Each call site treats its draw as a one-shot independent
/// sample.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Draw a uniform value in [0, 1).
    fn unit(&self, seed: u64) -> f32 {
        // Use the top 24 bits so the value fits an f32 mantissa exactly.
        (self.next_u32(seed) >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Roll against a probability in [0, 1]. Probabilities above 1 always
    /// succeed (the crit formula is unclamped on purpose).
    fn chance(&self, seed: u64, probability: f32) -> bool {
        self.unit(seed) < probability
    }
}

/// PCG random number generator (PCG-XSH-RR variant).
///
/// Small state, fast, and statistically solid — and, unlike a stateful
/// generator, a pure function of its seed, which keeps battle replays and
/// tests deterministic.
///
/// Reference: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the LCG state by one step.
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift high bits, then rotate by the
    /// top bits of the state.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Roll context identifiers, used to separate independent draws that share
/// an action seed.
pub mod roll {
    /// Accuracy gate of an attack.
    pub const ACCURACY: u32 = 0;
    /// Critical-hit roll.
    pub const CRITICAL: u32 = 1;
    /// Secondary-effect trigger roll.
    pub const SECONDARY: u32 = 2;
    /// Pre-turn status checks; add the effect's list index.
    pub const PRE_TURN: u32 = 16;
}

/// Compute a deterministic action seed from battle state components.
///
/// Combines the battle seed, round number, and acting fighter so every
/// action in a battle rolls from a distinct stream.
pub fn compute_seed(battle_seed: u64, round: u32, fighter_id: u32) -> u64 {
    let mut hash = battle_seed;
    hash ^= (round as u64).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (fighter_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

/// Derive the seed for one roll inside an action.
///
/// `context` is one of the [`roll`] constants (plus an offset for indexed
/// rolls), keeping each draw within an action independent.
pub fn sub_seed(action_seed: u64, context: u32) -> u64 {
    let mut hash = action_seed ^ (context as u64).wrapping_mul(0x85ebca6b);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc2b2ae3d27d4eb4f);
    hash ^= hash >> 29;
    hash
}
