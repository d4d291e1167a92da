//! Status-effect catalog oracle.
//!
//! The engine does not own status-effect data. It looks behaviors up
//! through [`StatusCatalog`], which maps an effect id to a
//! [`StatusDefinition`]: duration, hook data, and stat multipliers. The
//! standard catalog with shipped numeric values lives in `battle-content`.
//!
//! Hooks are data, not callbacks: the pre-turn processor dispatches on the
//! [`TickDamage`] and [`ActCheck`] variants with a match, so definitions
//! stay serializable and the behavior set stays closed and auditable.

use crate::state::{StatKind, StatusEffectId};

/// Oracle providing status-effect definitions.
///
/// A missing entry is not an error: the engine falls back to the applied
/// instance's own name and duration, with no hooks and no multipliers.
pub trait StatusCatalog: Send + Sync {
    fn definition(&self, id: StatusEffectId) -> Option<&StatusDefinition>;
}

/// Static behavior record for one status effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusDefinition {
    pub id: StatusEffectId,
    /// Display name used in log messages.
    pub name: String,
    /// Turns the effect lasts once applied. Ignored when `permanent`.
    pub base_duration: u8,
    /// Permanent effects never age out (the fear debuff).
    pub permanent: bool,
    /// Start-of-turn damage hook, if any.
    pub tick_damage: Option<TickDamage>,
    /// Start-of-turn move-eligibility hook, if any.
    pub act_check: Option<ActCheck>,
    /// Multiplicative stat modifiers while the effect is active.
    pub stat_multipliers: StatMultipliers,
}

impl StatusDefinition {
    pub fn new(id: StatusEffectId, name: impl Into<String>, base_duration: u8) -> Self {
        Self {
            id,
            name: name.into(),
            base_duration,
            permanent: false,
            tick_damage: None,
            act_check: None,
            stat_multipliers: StatMultipliers::none(),
        }
    }

    #[must_use]
    pub fn permanent(mut self) -> Self {
        self.permanent = true;
        self
    }

    #[must_use]
    pub fn with_tick_damage(mut self, tick_damage: TickDamage) -> Self {
        self.tick_damage = Some(tick_damage);
        self
    }

    #[must_use]
    pub fn with_act_check(mut self, act_check: ActCheck) -> Self {
        self.act_check = Some(act_check);
        self
    }

    #[must_use]
    pub fn with_multiplier(mut self, stat: StatKind, multiplier: f32) -> Self {
        self.stat_multipliers.set(stat, multiplier);
        self
    }
}

/// Start-of-turn damage behaviors.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickDamage {
    /// Burn-style: a fixed fraction of max health each turn.
    FractionOfMax { fraction: f32 },

    /// Poison-style: a fraction of *current* health, doubling each stage
    /// up to `max_stage`. Never lethal on its own — the tick leaves the
    /// fighter at 1 HP rather than finishing it.
    StagedFractionOfCurrent { base_fraction: f32, max_stage: u8 },
}

/// Start-of-turn move-eligibility behaviors.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActCheck {
    /// May act with the given probability (paralysis).
    Paralysis { act_chance: f32 },
    /// Never acts while asleep.
    Sleep,
    /// May redirect the attack onto itself with the given probability.
    Confusion { self_hit_chance: f32 },
    /// Skips exactly the turn it was inflicted on.
    Flinch,
    /// May cower with probability `1 - act_chance` (the permanent fear).
    Fear { act_chance: f32 },
}

/// Multiplicative stat modifiers carried by a status definition.
///
/// `1.5` reads as +50%, `0.7` as −30%. Absent entries leave the stat
/// untouched. Multipliers from multiple active effects compound
/// sequentially in list order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatMultipliers {
    pub attack: Option<f32>,
    pub defense: Option<f32>,
    pub special_attack: Option<f32>,
    pub special_defense: Option<f32>,
    pub speed: Option<f32>,
    pub luck: Option<f32>,
}

impl StatMultipliers {
    pub const fn none() -> Self {
        Self {
            attack: None,
            defense: None,
            special_attack: None,
            special_defense: None,
            speed: None,
            luck: None,
        }
    }

    pub fn get(&self, stat: StatKind) -> Option<f32> {
        match stat {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
            StatKind::Luck => self.luck,
        }
    }

    pub fn set(&mut self, stat: StatKind, multiplier: f32) {
        let slot = match stat {
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::SpecialAttack => &mut self.special_attack,
            StatKind::SpecialDefense => &mut self.special_defense,
            StatKind::Speed => &mut self.speed,
            StatKind::Luck => &mut self.luck,
        };
        *slot = Some(multiplier);
    }
}
