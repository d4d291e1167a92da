//! Active status-effect instances.
//!
//! An instance records *that* an effect is on a fighter and how long it has
//! left; the behavior lives in the catalog definition looked up by id. The
//! instance keeps its own display name so a minimally-specified effect
//! (missing from the catalog) still reports sensibly in logs.

use strum::{Display, EnumIter};

/// Identity of a status effect. Duplicate suppression on a fighter is by
/// this id: reapplying replaces the existing instance, refreshing it.
#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusEffectId {
    Burn,
    Poison,
    Paralysis,
    Sleep,
    Confusion,
    Flinch,
    Fear,
    Enraged,
    Fortified,
    Swift,
    Weakened,
    Exposed,
}

/// One active application of a status effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusInstance {
    pub id: StatusEffectId,
    /// Display name, copied from the definition at application time.
    pub name: String,
    /// Turns remaining. Decremented each pre-turn pass; the effect drops
    /// when it reaches 0. Not decremented for permanent effects.
    pub remaining: u8,
    /// Poison escalation counter (1..=max_stage); unused by other effects.
    pub stage: u8,
}

impl StatusInstance {
    pub fn new(id: StatusEffectId, name: impl Into<String>, remaining: u8) -> Self {
        Self {
            id,
            name: name.into(),
            remaining,
            stage: 1,
        }
    }
}
