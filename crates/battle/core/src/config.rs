/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Number of rounds after which the surrounding session declares a draw.
    pub max_rounds: u32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum simultaneous status effects on one fighter.
    pub const MAX_STATUS_EFFECTS: usize = 8;
    /// Maximum equipped attacks. Fighters carry 3 until evolved, then 4.
    pub const MAX_ATTACKS: usize = 4;
    pub const BASE_ATTACKS: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_ROUNDS: u32 = 50;
    /// Duration used when an effect is applied without a catalog entry.
    pub const FALLBACK_STATUS_DURATION: u8 = 3;

    pub fn new() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
        }
    }

    pub fn with_max_rounds(max_rounds: u32) -> Self {
        Self { max_rounds }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Game-balance parameters read verbatim by the attack resolver.
///
/// These are injected through [`crate::env::BattleEnv`] rather than baked
/// into the resolver, so content files can override them without touching
/// engine code.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceTables {
    /// Critical-hit probability contributed by each point of luck.
    ///
    /// Deliberately unclamped: at extreme luck values the product can
    /// exceed 1.0, which matches the original balance exactly.
    pub crit_luck_factor: f32,

    /// Damage multiplier applied on a critical hit.
    pub crit_multiplier: f32,
}

impl BalanceTables {
    pub const DEFAULT_CRIT_LUCK_FACTOR: f32 = 0.001;
    pub const DEFAULT_CRIT_MULTIPLIER: f32 = 2.0;
}

impl Default for BalanceTables {
    fn default() -> Self {
        Self {
            crit_luck_factor: Self::DEFAULT_CRIT_LUCK_FACTOR,
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
        }
    }
}
