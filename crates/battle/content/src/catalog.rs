//! The standard status-effect catalog.
//!
//! Reproducing battle behavior requires reproducing these exact numbers:
//! the engine reads durations, fractions, and chances verbatim from here.

use battle_core::env::{ActCheck, StatusCatalog, StatusDefinition, TickDamage};
use battle_core::state::{StatKind, StatusEffectId};

/// Fraction of max health burned away each turn.
pub const BURN_TICK_FRACTION: f32 = 0.06;
pub const BURN_DURATION: u8 = 3;
/// Burn saps physical attack while active.
pub const BURN_ATTACK_MULTIPLIER: f32 = 0.8;

/// Stage-1 poison tick, as a fraction of *current* health. Doubles each
/// stage: 10% → 20% → 40%.
pub const POISON_BASE_FRACTION: f32 = 0.10;
pub const POISON_MAX_STAGE: u8 = 3;
pub const POISON_DURATION: u8 = 3;

pub const PARALYSIS_ACT_CHANCE: f32 = 0.5;
pub const PARALYSIS_DURATION: u8 = 2;
pub const PARALYSIS_SPEED_MULTIPLIER: f32 = 0.5;

pub const SLEEP_DURATION: u8 = 2;

pub const CONFUSION_SELF_HIT_CHANCE: f32 = 0.5;
pub const CONFUSION_DURATION: u8 = 3;

pub const FLINCH_DURATION: u8 = 1;

/// The fear debuff is permanent; each turn the fighter acts with this
/// probability.
pub const FEAR_ACT_CHANCE: f32 = 0.75;
pub const FEAR_ATTACK_MULTIPLIER: f32 = 0.7;

pub const STAT_BUFF_MULTIPLIER: f32 = 1.5;
pub const STAT_DEBUFF_MULTIPLIER: f32 = 0.7;
pub const STAT_STAGE_DURATION: u8 = 3;

/// Catalog with the shipped definitions.
#[derive(Clone, Debug)]
pub struct StandardCatalog {
    definitions: Vec<StatusDefinition>,
}

impl StandardCatalog {
    pub fn new() -> Self {
        Self::from_definitions(standard_definitions())
    }

    /// Build a catalog from explicit definitions (used by the RON loader).
    pub fn from_definitions(definitions: Vec<StatusDefinition>) -> Self {
        Self { definitions }
    }

    pub fn definitions(&self) -> &[StatusDefinition] {
        &self.definitions
    }
}

impl Default for StandardCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusCatalog for StandardCatalog {
    fn definition(&self, id: StatusEffectId) -> Option<&StatusDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }
}

fn standard_definitions() -> Vec<StatusDefinition> {
    vec![
        StatusDefinition::new(StatusEffectId::Burn, "Burn", BURN_DURATION)
            .with_tick_damage(TickDamage::FractionOfMax {
                fraction: BURN_TICK_FRACTION,
            })
            .with_multiplier(StatKind::Attack, BURN_ATTACK_MULTIPLIER),
        StatusDefinition::new(StatusEffectId::Poison, "Poison", POISON_DURATION)
            .with_tick_damage(TickDamage::StagedFractionOfCurrent {
                base_fraction: POISON_BASE_FRACTION,
                max_stage: POISON_MAX_STAGE,
            }),
        StatusDefinition::new(StatusEffectId::Paralysis, "Paralysis", PARALYSIS_DURATION)
            .with_act_check(ActCheck::Paralysis {
                act_chance: PARALYSIS_ACT_CHANCE,
            })
            .with_multiplier(StatKind::Speed, PARALYSIS_SPEED_MULTIPLIER),
        StatusDefinition::new(StatusEffectId::Sleep, "Sleep", SLEEP_DURATION)
            .with_act_check(ActCheck::Sleep),
        StatusDefinition::new(StatusEffectId::Confusion, "Confusion", CONFUSION_DURATION)
            .with_act_check(ActCheck::Confusion {
                self_hit_chance: CONFUSION_SELF_HIT_CHANCE,
            }),
        StatusDefinition::new(StatusEffectId::Flinch, "Flinch", FLINCH_DURATION)
            .with_act_check(ActCheck::Flinch),
        StatusDefinition::new(StatusEffectId::Fear, "Impaurita", 1)
            .permanent()
            .with_act_check(ActCheck::Fear {
                act_chance: FEAR_ACT_CHANCE,
            })
            .with_multiplier(StatKind::Attack, FEAR_ATTACK_MULTIPLIER),
        StatusDefinition::new(StatusEffectId::Enraged, "Enraged", STAT_STAGE_DURATION)
            .with_multiplier(StatKind::Attack, STAT_BUFF_MULTIPLIER),
        StatusDefinition::new(StatusEffectId::Fortified, "Fortified", STAT_STAGE_DURATION)
            .with_multiplier(StatKind::Defense, STAT_BUFF_MULTIPLIER),
        StatusDefinition::new(StatusEffectId::Swift, "Swift", STAT_STAGE_DURATION)
            .with_multiplier(StatKind::Speed, STAT_BUFF_MULTIPLIER),
        StatusDefinition::new(StatusEffectId::Weakened, "Weakened", STAT_STAGE_DURATION)
            .with_multiplier(StatKind::Attack, STAT_DEBUFF_MULTIPLIER),
        StatusDefinition::new(StatusEffectId::Exposed, "Exposed", STAT_STAGE_DURATION)
            .with_multiplier(StatKind::Defense, STAT_DEBUFF_MULTIPLIER),
    ]
}
