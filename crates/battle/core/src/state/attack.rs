//! Immutable attack definitions.

use crate::element::Element;
use crate::state::stats::StatKind;
use crate::state::status::StatusEffectId;

/// Stable identifier of an attack in the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackId(pub u32);

/// Which stat pair an attack's damage formula reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackCategory {
    Physical,
    Special,
    /// No base damage; the move exists for its secondary effect.
    Status,
}

impl AttackCategory {
    /// The (offense, defense) stats used by the damage formula.
    ///
    /// Status moves carry no base damage, so their pair is moot; they fall
    /// back to the physical pair.
    pub const fn stat_pair(self) -> (StatKind, StatKind) {
        match self {
            Self::Physical | Self::Status => (StatKind::Attack, StatKind::Defense),
            Self::Special => (StatKind::SpecialAttack, StatKind::SpecialDefense),
        }
    }
}

/// Non-standard damage modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialDamage {
    /// Target loses half its current health, rounded down.
    HalveHp,
}

/// Which side a secondary effect lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectTarget {
    Attacker,
    Target,
}

/// A chance-gated status effect riding on an attack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecondaryEffect {
    pub status: StatusEffectId,
    pub target: EffectTarget,
    /// Trigger probability in [0, 1], rolled once the attack connects.
    pub chance: f32,
}

/// An equippable move. Immutable once defined.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attack {
    pub id: AttackId,
    pub name: String,
    /// Base damage. Negative values heal the attacker instead.
    pub damage: i32,
    /// Hit probability in [0, 1].
    pub accuracy: f32,
    pub element: Element,
    pub category: AttackCategory,
    /// Optional status effect applied after the attack connects.
    pub effect: Option<SecondaryEffect>,
    /// Fraction of dealt damage returned to the attacker as healing.
    pub drain: Option<f32>,
    /// Fraction of dealt damage the attacker takes as self-damage.
    pub recoil: Option<f32>,
    pub special: Option<SpecialDamage>,
    /// Clears every status effect from the attacker on use.
    pub cures_all_status_on_self: bool,
    /// Opaque icon token, passed through to rendering untouched.
    pub icon: String,
}

impl Attack {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        damage: i32,
        accuracy: f32,
        element: Element,
        category: AttackCategory,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: AttackId(id),
            name: name.into(),
            damage,
            accuracy,
            element,
            category,
            effect: None,
            drain: None,
            recoil: None,
            special: None,
            cures_all_status_on_self: false,
            icon: icon.into(),
        }
    }

    #[must_use]
    pub fn with_effect(mut self, status: StatusEffectId, target: EffectTarget, chance: f32) -> Self {
        self.effect = Some(SecondaryEffect {
            status,
            target,
            chance,
        });
        self
    }

    #[must_use]
    pub fn with_drain(mut self, drain: f32) -> Self {
        self.drain = Some(drain);
        self
    }

    #[must_use]
    pub fn with_recoil(mut self, recoil: f32) -> Self {
        self.recoil = Some(recoil);
        self
    }

    #[must_use]
    pub fn with_special(mut self, special: SpecialDamage) -> Self {
        self.special = Some(special);
        self
    }

    #[must_use]
    pub fn curing(mut self) -> Self {
        self.cures_all_status_on_self = true;
        self
    }
}
