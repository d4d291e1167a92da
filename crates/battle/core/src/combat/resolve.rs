//! Attack resolution.
//!
//! Resolves one chosen attack from attacker to target: accuracy gate,
//! damage/healing with elemental and critical multipliers, drain/recoil,
//! secondary-effect application, and self-purification. The resolver never
//! mutates its inputs; it returns fresh fighter states.

use crate::element::{Effectiveness, Element};
use crate::env::{BattleEnv, roll, sub_seed};
use crate::events::BattleEvent;
use crate::state::{
    Attack, EffectTarget, Fighter, SpecialDamage, StatKind, StatusApplication, StatusEffectId,
};

/// Result of resolving one attack.
#[derive(Clone, Debug)]
pub struct AttackResolution {
    pub attacker: Fighter,
    /// On a confusion self-hit this carries the same state as `attacker`.
    pub target: Fighter,
    pub log: Vec<BattleEvent>,
    /// Health removed from the target (0 on miss, heal, or status move).
    pub damage_dealt: i32,
    /// Secondary effect that landed this resolution, if any.
    pub effect_applied: Option<StatusEffectId>,
    /// The attack's icon token, passed through for rendering.
    pub icon: String,
}

/// Resolve a chosen attack.
///
/// With `confused_self_hit` set, the target argument is ignored: the
/// attacker strikes itself (no accuracy roll), using its own defense
/// against its own offense. On a miss, the returned fighters are the
/// inputs unchanged — not the defensively re-derived copies.
pub fn resolve_attack(
    attacker: &Fighter,
    target: &Fighter,
    attack: &Attack,
    confused_self_hit: bool,
    env: &BattleEnv<'_>,
    seed: u64,
) -> AttackResolution {
    if confused_self_hit {
        return resolve_self_hit(attacker, attack, env, seed);
    }

    let mut atk = attacker.clone();
    let mut tgt = target.clone();
    // Callers may hand in stale current stats; re-derive both sides.
    atk.recompute_current_stats(env.catalog);
    tgt.recompute_current_stats(env.catalog);

    if !env.rng.chance(sub_seed(seed, roll::ACCURACY), attack.accuracy) {
        return AttackResolution {
            attacker: attacker.clone(),
            target: target.clone(),
            log: vec![BattleEvent::Missed {
                attacker: attacker.name.clone(),
                attack: attack.name.clone(),
            }],
            damage_dealt: 0,
            effect_applied: None,
            icon: attack.icon.clone(),
        };
    }

    let mut log = vec![BattleEvent::AttackUsed {
        attacker: atk.name.clone(),
        attack: attack.name.clone(),
    }];

    let damage_dealt = apply_connected_attack(&mut atk, Some(&mut tgt), attack, env, seed, &mut log);
    let effect_applied = apply_secondary_effect(&mut atk, Some(&mut tgt), attack, env, seed, &mut log);
    apply_self_cure(&mut atk, attack, env, &mut log);

    AttackResolution {
        attacker: atk,
        target: tgt,
        log,
        damage_dealt,
        effect_applied,
        icon: attack.icon.clone(),
    }
}

/// Confusion self-hit: a single fighter plays both roles, so all mutations
/// land on one state and aliasing stays correct.
fn resolve_self_hit(
    fighter: &Fighter,
    attack: &Attack,
    env: &BattleEnv<'_>,
    seed: u64,
) -> AttackResolution {
    let mut actor = fighter.clone();
    actor.recompute_current_stats(env.catalog);

    let mut log = vec![BattleEvent::SelfHit {
        fighter: actor.name.clone(),
    }];

    let damage_dealt = apply_connected_attack(&mut actor, None, attack, env, seed, &mut log);
    let effect_applied = apply_secondary_effect(&mut actor, None, attack, env, seed, &mut log);
    apply_self_cure(&mut actor, attack, env, &mut log);

    AttackResolution {
        attacker: actor.clone(),
        target: actor,
        log,
        damage_dealt,
        effect_applied,
        icon: attack.icon.clone(),
    }
}

/// Damage/healing branch of a connected attack. `target` of `None` means
/// the attacker is its own target (confusion self-hit).
///
/// Returns the damage dealt to the target.
fn apply_connected_attack(
    attacker: &mut Fighter,
    target: Option<&mut Fighter>,
    attack: &Attack,
    env: &BattleEnv<'_>,
    seed: u64,
    log: &mut Vec<BattleEvent>,
) -> i32 {
    if let Some(SpecialDamage::HalveHp) = attack.special {
        let target = match target {
            Some(t) => t,
            None => &mut *attacker,
        };
        let amount = target.current_health / 2;
        target.apply_damage(amount);
        log.push(BattleEvent::HealthHalved {
            target: target.name.clone(),
            amount,
        });
        return amount;
    }

    if attack.damage < 0 {
        let missing = attacker.max_health - attacker.current_health;
        let amount = (-attack.damage).min(missing);
        attacker.heal(amount);
        log.push(BattleEvent::Healed {
            fighter: attacker.name.clone(),
            amount,
        });
        return 0;
    }

    if attack.damage == 0 {
        // Pure status move; the "uses" line is already logged.
        return 0;
    }

    // Copy the offensive numbers out before borrowing the target, so the
    // self-hit alias works on a single state.
    let (offense_kind, defense_kind) = attack.category.stat_pair();
    let offense = attacker.current_stats.get(offense_kind).max(1);
    let luck = attacker.current_stats.get(StatKind::Luck);

    let crit_probability = luck as f32 * env.tables.crit_luck_factor;
    let is_critical = env
        .rng
        .chance(sub_seed(seed, roll::CRITICAL), crit_probability);

    let final_damage;
    {
        let target = match target {
            Some(t) => t,
            None => &mut *attacker,
        };
        let defense = target.current_stats.get(defense_kind).max(1);

        let mut raw = attack.damage as f32 * offense as f32 / defense as f32;

        let rating = Element::matchup(attack.element, target.element);
        if rating != Effectiveness::Neutral {
            log.push(BattleEvent::Matchup { rating });
        }
        raw *= rating.multiplier();

        if is_critical {
            raw *= env.tables.crit_multiplier;
            log.push(BattleEvent::CriticalHit);
        }

        // A connecting attack always deals at least 1.
        final_damage = (raw.round() as i32).max(1);
        target.apply_damage(final_damage);
        log.push(BattleEvent::DamageDealt {
            target: target.name.clone(),
            amount: final_damage,
        });
    }

    if let Some(drain) = attack.drain {
        let amount = ((final_damage as f32 * drain).floor() as i32).max(1);
        attacker.heal(amount);
        log.push(BattleEvent::Drained {
            attacker: attacker.name.clone(),
            amount,
        });
    }

    if let Some(recoil) = attack.recoil {
        let amount = ((final_damage as f32 * recoil).floor() as i32).max(1);
        attacker.apply_damage(amount);
        log.push(BattleEvent::RecoilTaken {
            attacker: attacker.name.clone(),
            amount,
        });
    }

    final_damage
}

/// Roll and apply the attack's secondary effect, if any.
fn apply_secondary_effect(
    attacker: &mut Fighter,
    target: Option<&mut Fighter>,
    attack: &Attack,
    env: &BattleEnv<'_>,
    seed: u64,
    log: &mut Vec<BattleEvent>,
) -> Option<StatusEffectId> {
    let effect = attack.effect.as_ref()?;
    if !env
        .rng
        .chance(sub_seed(seed, roll::SECONDARY), effect.chance)
    {
        return None;
    }

    let recipient = match (effect.target, target) {
        (EffectTarget::Target, Some(t)) => t,
        _ => &mut *attacker,
    };

    let name = env
        .catalog
        .definition(effect.status)
        .map_or_else(|| effect.status.to_string(), |d| d.name.clone());

    match recipient.apply_status(effect.status, env.catalog) {
        StatusApplication::Applied => {
            log.push(BattleEvent::StatusApplied {
                fighter: recipient.name.clone(),
                status: effect.status,
                name,
            });
        }
        StatusApplication::Refreshed => {
            log.push(BattleEvent::StatusRenewed {
                fighter: recipient.name.clone(),
                status: effect.status,
                name,
            });
        }
        StatusApplication::Ignored => return None,
    }
    recipient.recompute_current_stats(env.catalog);
    Some(effect.status)
}

/// Purge the attacker's status effects if the move calls for it.
fn apply_self_cure(
    attacker: &mut Fighter,
    attack: &Attack,
    env: &BattleEnv<'_>,
    log: &mut Vec<BattleEvent>,
) {
    if attack.cures_all_status_on_self && !attacker.status_effects.is_empty() {
        attacker.clear_statuses();
        attacker.recompute_current_stats(env.catalog);
        log.push(BattleEvent::StatusCleared {
            fighter: attacker.name.clone(),
        });
    }
}
