//! Built-in creature and attack roster.
//!
//! Templates describe creatures as data; [`Roster::spawn`] turns a template
//! into a battle-ready [`Fighter`] with its moves equipped.

use battle_core::element::Element;
use battle_core::state::{
    Archetype, Attack, AttackCategory, EffectTarget, EquipError, Fighter, SpecialDamage,
    StatBlock, StatusEffectId,
};

/// Template for constructing a fighter.
#[derive(Clone, Debug)]
pub struct CreatureTemplate {
    pub name: &'static str,
    pub element: Element,
    pub archetype: Archetype,
    pub max_health: i32,
    pub base_stats: StatBlock,
    /// Equipped attack ids: 3 for base forms, 4 for evolved forms.
    pub attack_ids: &'static [u32],
}

/// Errors from constructing a fighter out of roster data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("no creature template named '{0}'")]
    UnknownTemplate(String),

    #[error("template references unknown attack id {0}")]
    UnknownAttack(u32),

    #[error(transparent)]
    Equip(#[from] EquipError),
}

/// The shipped attack and creature tables.
#[derive(Clone, Debug)]
pub struct Roster {
    attacks: Vec<Attack>,
    creatures: Vec<CreatureTemplate>,
}

impl Roster {
    pub fn standard() -> Self {
        Self {
            attacks: standard_attacks(),
            creatures: standard_creatures(),
        }
    }

    pub fn attack(&self, id: u32) -> Option<&Attack> {
        self.attacks.iter().find(|a| a.id.0 == id)
    }

    pub fn template(&self, name: &str) -> Option<&CreatureTemplate> {
        self.creatures.iter().find(|c| c.name == name)
    }

    pub fn templates(&self) -> &[CreatureTemplate] {
        &self.creatures
    }

    /// Construct a battle-ready fighter from a template.
    pub fn spawn(&self, template_name: &str, fighter_id: u32) -> Result<Fighter, SpawnError> {
        let template = self
            .template(template_name)
            .ok_or_else(|| SpawnError::UnknownTemplate(template_name.to_string()))?;

        let mut fighter = Fighter::new(
            fighter_id,
            template.name,
            template.element,
            template.archetype,
            template.max_health,
            template.base_stats,
        );
        for &attack_id in template.attack_ids {
            let attack = self
                .attack(attack_id)
                .ok_or(SpawnError::UnknownAttack(attack_id))?;
            fighter.equip_attack(attack.clone())?;
        }
        Ok(fighter)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_attacks() -> Vec<Attack> {
    vec![
        Attack::new(1, "Flame Lash", 40, 0.95, Element::Fire, AttackCategory::Physical, "atk-flame-lash")
            .with_effect(StatusEffectId::Burn, EffectTarget::Target, 0.2),
        Attack::new(2, "Cinder Storm", 55, 0.85, Element::Fire, AttackCategory::Special, "atk-cinder-storm")
            .with_recoil(0.25),
        Attack::new(3, "Tidal Crush", 45, 0.9, Element::Water, AttackCategory::Physical, "atk-tidal-crush"),
        Attack::new(4, "Mist Veil", 0, 1.0, Element::Water, AttackCategory::Status, "atk-mist-veil")
            .curing(),
        Attack::new(5, "Leech Vine", 35, 0.9, Element::Grass, AttackCategory::Special, "atk-leech-vine")
            .with_drain(0.5),
        Attack::new(6, "Regrow", -40, 1.0, Element::Grass, AttackCategory::Status, "atk-regrow"),
        Attack::new(7, "Radiant Beam", 50, 0.85, Element::Light, AttackCategory::Special, "atk-radiant-beam")
            .with_effect(StatusEffectId::Flinch, EffectTarget::Target, 0.2),
        Attack::new(8, "Dazzling Glow", 0, 0.9, Element::Light, AttackCategory::Status, "atk-dazzling-glow")
            .with_effect(StatusEffectId::Confusion, EffectTarget::Target, 1.0),
        Attack::new(9, "Void Rend", 0, 0.8, Element::Dark, AttackCategory::Special, "atk-void-rend")
            .with_special(SpecialDamage::HalveHp),
        Attack::new(10, "Night Fang", 42, 0.9, Element::Dark, AttackCategory::Physical, "atk-night-fang")
            .with_effect(StatusEffectId::Poison, EffectTarget::Target, 0.25),
        Attack::new(11, "War Cry", 0, 1.0, Element::Fire, AttackCategory::Status, "atk-war-cry")
            .with_effect(StatusEffectId::Enraged, EffectTarget::Attacker, 1.0),
        Attack::new(12, "Dread Gaze", 0, 0.75, Element::Dark, AttackCategory::Status, "atk-dread-gaze")
            .with_effect(StatusEffectId::Fear, EffectTarget::Target, 1.0),
    ]
}

fn standard_creatures() -> Vec<CreatureTemplate> {
    vec![
        CreatureTemplate {
            name: "Embero",
            element: Element::Fire,
            archetype: Archetype::Physical,
            max_health: 95,
            base_stats: StatBlock::new(22, 12, 16, 12, 15, 6),
            attack_ids: &[1, 2, 11],
        },
        CreatureTemplate {
            name: "Aquari",
            element: Element::Water,
            archetype: Archetype::Balanced,
            max_health: 105,
            base_stats: StatBlock::new(16, 16, 16, 16, 12, 5),
            attack_ids: &[3, 4, 1],
        },
        CreatureTemplate {
            name: "Verdil",
            element: Element::Grass,
            archetype: Archetype::Special,
            max_health: 100,
            base_stats: StatBlock::new(12, 14, 20, 16, 11, 5),
            attack_ids: &[5, 6, 3],
        },
        CreatureTemplate {
            name: "Luma",
            element: Element::Light,
            archetype: Archetype::Special,
            max_health: 90,
            base_stats: StatBlock::new(13, 12, 21, 15, 14, 7),
            attack_ids: &[7, 8, 6],
        },
        CreatureTemplate {
            name: "Umbra",
            element: Element::Dark,
            archetype: Archetype::Physical,
            max_health: 92,
            base_stats: StatBlock::new(21, 11, 15, 11, 16, 8),
            attack_ids: &[10, 9, 12],
        },
        // Evolved form: fourth move slot unlocked.
        CreatureTemplate {
            name: "Embero Primo",
            element: Element::Fire,
            archetype: Archetype::Physical,
            max_health: 130,
            base_stats: StatBlock::new(30, 17, 21, 16, 19, 9),
            attack_ids: &[1, 2, 11, 4],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::config::BattleConfig;

    #[test]
    fn base_forms_carry_three_attacks() {
        let roster = Roster::standard();
        let fighter = roster.spawn("Embero", 0).unwrap();
        assert_eq!(fighter.attacks.len(), BattleConfig::BASE_ATTACKS);
        assert_eq!(fighter.current_health, fighter.max_health);
        assert_eq!(fighter.current_stats, fighter.base_stats);
    }

    #[test]
    fn evolved_form_carries_four() {
        let roster = Roster::standard();
        let fighter = roster.spawn("Embero Primo", 0).unwrap();
        assert_eq!(fighter.attacks.len(), BattleConfig::MAX_ATTACKS);
    }

    #[test]
    fn unknown_template_is_an_error() {
        let roster = Roster::standard();
        assert_eq!(
            roster.spawn("Missingno", 0),
            Err(SpawnError::UnknownTemplate("Missingno".into()))
        );
    }

    #[test]
    fn every_template_attack_id_resolves() {
        let roster = Roster::standard();
        for template in roster.templates() {
            for &id in template.attack_ids {
                assert!(roster.attack(id).is_some(), "{}: attack {id}", template.name);
            }
        }
    }

    #[test]
    fn one_base_creature_per_element() {
        let roster = Roster::standard();
        for element in [
            Element::Fire,
            Element::Water,
            Element::Grass,
            Element::Light,
            Element::Dark,
        ] {
            assert!(
                roster
                    .templates()
                    .iter()
                    .any(|t| t.element == element && t.attack_ids.len() == 3),
                "{element}"
            );
        }
    }
}
