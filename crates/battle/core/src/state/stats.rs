//! The six combat stats.
//!
//! Fighters carry two [`StatBlock`]s: `base_stats` (the untouched potential,
//! fixed for the battle) and `current_stats` (base × active status-effect
//! multipliers). Current stats are a derived projection — never persisted as
//! authoritative, always recomputable from base stats plus the active-effect
//! list.

use strum::{Display, EnumIter};

/// Identifies one of the six combat stats.
#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
    Luck,
}

/// A full set of the six combat stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub attack: i32,
    pub defense: i32,
    pub special_attack: i32,
    pub special_defense: i32,
    pub speed: i32,
    pub luck: i32,
}

impl StatBlock {
    pub const fn new(
        attack: i32,
        defense: i32,
        special_attack: i32,
        special_defense: i32,
        speed: i32,
        luck: i32,
    ) -> Self {
        Self {
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
            luck,
        }
    }

    pub fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
            StatKind::Luck => self.luck,
        }
    }

    pub fn set(&mut self, stat: StatKind, value: i32) {
        match stat {
            StatKind::Attack => self.attack = value,
            StatKind::Defense => self.defense = value,
            StatKind::SpecialAttack => self.special_attack = value,
            StatKind::SpecialDefense => self.special_defense = value,
            StatKind::Speed => self.speed = value,
            StatKind::Luck => self.luck = value,
        }
    }
}

impl Default for StatBlock {
    /// Average unevolved creature: 10 across the board, modest luck.
    fn default() -> Self {
        Self::new(10, 10, 10, 10, 10, 5)
    }
}
