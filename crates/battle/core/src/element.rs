//! Elemental types and the effectiveness wheel.
//!
//! Five elements arranged in a symmetric matchup chart: every element is
//! strong against exactly two others and weak against the remaining two.
//! Anything not listed is neutral.

use strum::{Display, EnumIter};

/// Elemental type of a fighter or attack.
#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Fire,
    Water,
    Grass,
    Light,
    Dark,
}

impl Element {
    /// Elements this element's attacks are super-effective against.
    pub const fn strong_against(self) -> [Element; 2] {
        match self {
            Self::Fire => [Self::Grass, Self::Dark],
            Self::Water => [Self::Fire, Self::Light],
            Self::Grass => [Self::Water, Self::Light],
            Self::Light => [Self::Dark, Self::Fire],
            Self::Dark => [Self::Water, Self::Grass],
        }
    }

    /// Elements this element's attacks are not very effective against.
    pub const fn weak_against(self) -> [Element; 2] {
        match self {
            Self::Fire => [Self::Water, Self::Light],
            Self::Water => [Self::Grass, Self::Dark],
            Self::Grass => [Self::Fire, Self::Dark],
            Self::Light => [Self::Water, Self::Grass],
            Self::Dark => [Self::Fire, Self::Light],
        }
    }

    /// Look up the matchup of an attack element against a defender element.
    pub fn matchup(attack: Element, defender: Element) -> Effectiveness {
        if attack.strong_against().contains(&defender) {
            Effectiveness::Super
        } else if attack.weak_against().contains(&defender) {
            Effectiveness::NotVery
        } else {
            Effectiveness::Neutral
        }
    }
}

/// Outcome of an elemental matchup, carrying its damage multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effectiveness {
    Super,
    Neutral,
    NotVery,
}

impl Effectiveness {
    pub const SUPER_MULTIPLIER: f32 = 1.5;
    pub const NOT_VERY_MULTIPLIER: f32 = 0.5;

    /// Damage multiplier applied by the attack resolver.
    pub const fn multiplier(self) -> f32 {
        match self {
            Self::Super => Self::SUPER_MULTIPLIER,
            Self::Neutral => 1.0,
            Self::NotVery => Self::NOT_VERY_MULTIPLIER,
        }
    }
}
