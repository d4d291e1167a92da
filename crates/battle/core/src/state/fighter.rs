//! The combatant record.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::element::Element;
use crate::env::StatusCatalog;
use crate::state::attack::Attack;
use crate::state::stats::{StatBlock, StatKind};
use crate::state::status::{StatusEffectId, StatusInstance};

use strum::IntoEnumIterator;

/// Identifies a fighter within a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterId(pub u32);

/// Stat-growth classification. Affects progression outside battle, not
/// combat math.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Archetype {
    Physical,
    Special,
    Balanced,
}

/// Outcome of applying a status effect to a fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusApplication {
    /// A fresh instance was appended.
    Applied,
    /// The same effect was already active; its instance was replaced,
    /// resetting duration and poison stage.
    Refreshed,
    /// The status list was full; the application was dropped.
    Ignored,
}

/// A creature participating in battle.
///
/// # Invariants
///
/// - `0 <= current_health <= max_health`; 0 means defeated
/// - `current_stats` must always be derivable from `base_stats` plus
///   `status_effects` — call [`Fighter::recompute_current_stats`] whenever
///   the active-effect list changes, never edit current stats directly
/// - `status_effects` is ordered; duplicate suppression is by effect id
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub id: FighterId,
    pub name: String,
    pub element: Element,
    pub archetype: Archetype,

    pub max_health: i32,
    pub current_health: i32,

    /// Untouched potential, fixed for the battle.
    pub base_stats: StatBlock,
    /// Derived projection of base stats × active status multipliers.
    pub current_stats: StatBlock,

    /// Active effects, in application order.
    pub status_effects: ArrayVec<StatusInstance, { BattleConfig::MAX_STATUS_EFFECTS }>,

    /// Equipped moves: 3 normally, 4 once evolved.
    pub attacks: ArrayVec<Attack, { BattleConfig::MAX_ATTACKS }>,

    /// Resource gating caller-level special actions (block/charge).
    /// The resolver never consumes it.
    pub trust: u32,
    pub max_trust: u32,
}

/// The equipped-move list is already at capacity.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("fighter {fighter} already carries {capacity} attacks")]
pub struct EquipError {
    pub fighter: String,
    pub capacity: usize,
}

impl Fighter {
    /// Create a fighter with full health and current stats equal to base.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        element: Element,
        archetype: Archetype,
        max_health: i32,
        base_stats: StatBlock,
    ) -> Self {
        Self {
            id: FighterId(id),
            name: name.into(),
            element,
            archetype,
            max_health,
            current_health: max_health,
            base_stats,
            current_stats: base_stats,
            status_effects: ArrayVec::new(),
            attacks: ArrayVec::new(),
            trust: 0,
            max_trust: 100,
        }
    }

    /// Equip a move, failing once the list is at capacity.
    pub fn equip_attack(&mut self, attack: Attack) -> Result<(), EquipError> {
        if self.attacks.is_full() {
            return Err(EquipError {
                fighter: self.name.clone(),
                capacity: self.attacks.capacity(),
            });
        }
        self.attacks.push(attack);
        Ok(())
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.current_health <= 0
    }

    /// Reduce health, clamped at 0.
    pub fn apply_damage(&mut self, amount: i32) {
        self.current_health = (self.current_health - amount).max(0);
    }

    /// Restore health, clamped at max.
    pub fn heal(&mut self, amount: i32) {
        self.current_health = (self.current_health + amount).min(self.max_health);
    }

    pub fn has_status(&self, id: StatusEffectId) -> bool {
        self.status_effects.iter().any(|e| e.id == id)
    }

    /// Apply a status effect, refreshing instead of stacking.
    ///
    /// Duration and display name come from the catalog definition; an
    /// effect missing from the catalog still applies with a fallback
    /// duration and its id as name. The caller is responsible for
    /// recomputing current stats afterwards.
    pub fn apply_status(
        &mut self,
        id: StatusEffectId,
        catalog: &dyn StatusCatalog,
    ) -> StatusApplication {
        let instance = match catalog.definition(id) {
            Some(def) => StatusInstance::new(id, def.name.clone(), def.base_duration),
            None => {
                StatusInstance::new(id, id.to_string(), BattleConfig::FALLBACK_STATUS_DURATION)
            }
        };

        if let Some(existing) = self.status_effects.iter_mut().find(|e| e.id == id) {
            *existing = instance;
            return StatusApplication::Refreshed;
        }

        if self.status_effects.is_full() {
            return StatusApplication::Ignored;
        }
        self.status_effects.push(instance);
        StatusApplication::Applied
    }

    /// Remove every active status effect.
    ///
    /// The caller is responsible for recomputing current stats afterwards.
    pub fn clear_statuses(&mut self) {
        self.status_effects.clear();
    }

    /// Re-derive current stats from base stats and the active-effect list.
    ///
    /// Resets all six stats to base, then applies each active effect's
    /// multipliers in list order: `current = max(1, round(current × m))`.
    /// Multipliers compound sequentially across effects touching the same
    /// stat.
    pub fn recompute_current_stats(&mut self, catalog: &dyn StatusCatalog) {
        self.current_stats = self.base_stats;
        for instance in &self.status_effects {
            let Some(def) = catalog.definition(instance.id) else {
                continue;
            };
            for stat in StatKind::iter() {
                if let Some(multiplier) = def.stat_multipliers.get(stat) {
                    let current = self.current_stats.get(stat);
                    let scaled = ((current as f32 * multiplier).round() as i32).max(1);
                    self.current_stats.set(stat, scaled);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{StatusCatalog, StatusDefinition, TickDamage};
    use crate::state::attack::AttackCategory;

    struct TestCatalog(Vec<StatusDefinition>);

    impl StatusCatalog for TestCatalog {
        fn definition(&self, id: StatusEffectId) -> Option<&StatusDefinition> {
            self.0.iter().find(|d| d.id == id)
        }
    }

    fn catalog() -> TestCatalog {
        TestCatalog(vec![
            StatusDefinition::new(StatusEffectId::Enraged, "Enraged", 3)
                .with_multiplier(StatKind::Attack, 1.5),
            StatusDefinition::new(StatusEffectId::Weakened, "Weakened", 3)
                .with_multiplier(StatKind::Attack, 0.7),
            StatusDefinition::new(StatusEffectId::Poison, "Poison", 3).with_tick_damage(
                TickDamage::StagedFractionOfCurrent {
                    base_fraction: 0.1,
                    max_stage: 3,
                },
            ),
        ])
    }

    fn fighter() -> Fighter {
        Fighter::new(
            0,
            "Embero",
            Element::Fire,
            Archetype::Physical,
            100,
            StatBlock::new(20, 10, 15, 12, 14, 5),
        )
    }

    #[test]
    fn recompute_is_deterministic() {
        let catalog = catalog();
        let mut f = fighter();
        f.apply_status(StatusEffectId::Enraged, &catalog);
        f.recompute_current_stats(&catalog);
        let first = f.current_stats;
        f.recompute_current_stats(&catalog);
        assert_eq!(first, f.current_stats);
        assert_eq!(f.current_stats.attack, 30);
        // Base stats are untouched.
        assert_eq!(f.base_stats.attack, 20);
    }

    #[test]
    fn multipliers_compound_sequentially() {
        let catalog = catalog();
        let mut f = fighter();
        f.apply_status(StatusEffectId::Enraged, &catalog);
        f.apply_status(StatusEffectId::Weakened, &catalog);
        f.recompute_current_stats(&catalog);
        // round(round(20 × 1.5) × 0.7) = round(30 × 0.7) = 21
        assert_eq!(f.current_stats.attack, 21);
    }

    #[test]
    fn stats_never_drop_below_one() {
        let catalog = TestCatalog(vec![
            StatusDefinition::new(StatusEffectId::Weakened, "Weakened", 3)
                .with_multiplier(StatKind::Attack, 0.01),
        ]);
        let mut f = fighter();
        f.apply_status(StatusEffectId::Weakened, &catalog);
        f.recompute_current_stats(&catalog);
        assert_eq!(f.current_stats.attack, 1);
    }

    #[test]
    fn reapplying_refreshes_instead_of_stacking() {
        let catalog = catalog();
        let mut f = fighter();
        assert_eq!(
            f.apply_status(StatusEffectId::Poison, &catalog),
            StatusApplication::Applied
        );
        f.status_effects[0].remaining = 1;
        f.status_effects[0].stage = 3;
        assert_eq!(
            f.apply_status(StatusEffectId::Poison, &catalog),
            StatusApplication::Refreshed
        );
        assert_eq!(f.status_effects.len(), 1);
        assert_eq!(f.status_effects[0].remaining, 3);
        assert_eq!(f.status_effects[0].stage, 1);
    }

    #[test]
    fn unknown_effect_falls_back_to_instance_data() {
        let catalog = TestCatalog(Vec::new());
        let mut f = fighter();
        assert_eq!(
            f.apply_status(StatusEffectId::Sleep, &catalog),
            StatusApplication::Applied
        );
        let instance = &f.status_effects[0];
        assert_eq!(instance.name, "Sleep");
        assert_eq!(instance.remaining, BattleConfig::FALLBACK_STATUS_DURATION);
        // No definition, no multipliers: recompute leaves stats at base.
        f.recompute_current_stats(&catalog);
        assert_eq!(f.current_stats, f.base_stats);
    }

    #[test]
    fn health_clamps() {
        let mut f = fighter();
        f.apply_damage(250);
        assert_eq!(f.current_health, 0);
        assert!(f.is_defeated());
        f.heal(500);
        assert_eq!(f.current_health, f.max_health);
    }

    #[test]
    fn equip_rejects_fifth_attack() {
        let mut f = fighter();
        for i in 0..4 {
            f.equip_attack(Attack::new(
                i,
                format!("Move {i}"),
                10,
                1.0,
                Element::Fire,
                AttackCategory::Physical,
                "icon",
            ))
            .unwrap();
        }
        let err = f
            .equip_attack(Attack::new(
                9,
                "One Too Many",
                10,
                1.0,
                Element::Fire,
                AttackCategory::Physical,
                "icon",
            ))
            .unwrap_err();
        assert_eq!(err.capacity, BattleConfig::MAX_ATTACKS);
    }
}
