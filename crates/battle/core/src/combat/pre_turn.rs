//! Start-of-turn status processing.
//!
//! Runs once per fighter per turn, before that fighter acts. Applies
//! damage-over-time hooks, rolls move-prevention checks, ages effects out,
//! and re-derives current stats from the surviving effect list.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::env::{ActCheck, BattleEnv, TickDamage, roll, sub_seed};
use crate::events::BattleEvent;
use crate::state::{Fighter, StatusInstance};

/// Result of a fighter's pre-turn pass.
#[derive(Clone, Debug)]
pub struct PreTurn {
    /// Whether the fighter may act this turn.
    pub can_move: bool,
    /// Whether the fighter will target itself this turn.
    pub is_confused: bool,
    pub log: Vec<BattleEvent>,
    pub fighter: Fighter,
}

/// Process all start-of-turn effects for one fighter.
///
/// Effects are visited in list order. A lethal tick stops the pass: the
/// remaining effects keep their durations, and the lethal effect itself is
/// kept with its duration forced to 1 so it reports once more before
/// dropping. Move prevention latches — once any check fails, later checks
/// are skipped for the pass.
pub fn process_pre_turn(fighter: &Fighter, env: &BattleEnv<'_>, seed: u64) -> PreTurn {
    let mut updated = fighter.clone();
    let mut log = Vec::new();
    let mut can_move = true;
    let mut is_confused = false;
    let mut lethal = false;

    let mut survivors: ArrayVec<StatusInstance, { BattleConfig::MAX_STATUS_EFFECTS }> =
        ArrayVec::new();
    let effects = core::mem::take(&mut updated.status_effects);

    for (index, mut instance) in effects.into_iter().enumerate() {
        // Effects after a lethal tick are carried over untouched.
        if lethal {
            survivors.push(instance);
            continue;
        }

        let definition = env.catalog.definition(instance.id);

        if let Some(tick) = definition.and_then(|d| d.tick_damage.as_ref()) {
            apply_tick_damage(&mut updated, &mut instance, tick, &mut log);

            if updated.current_health == 0 {
                log.push(BattleEvent::Defeated {
                    fighter: updated.name.clone(),
                });
                can_move = false;
                instance.remaining = 1;
                lethal = true;
                survivors.push(instance);
                continue;
            }
        }

        if can_move {
            if let Some(check) = definition.and_then(|d| d.act_check.as_ref()) {
                let check_seed = sub_seed(seed, roll::PRE_TURN + index as u32);
                run_act_check(
                    &updated,
                    &instance,
                    check,
                    env,
                    check_seed,
                    &mut can_move,
                    &mut is_confused,
                    &mut log,
                );
            }
        }

        if definition.is_some_and(|d| d.permanent) {
            survivors.push(instance);
            continue;
        }

        instance.remaining = instance.remaining.saturating_sub(1);
        if instance.remaining > 0 {
            survivors.push(instance);
        } else {
            log.push(BattleEvent::StatusFaded {
                fighter: updated.name.clone(),
                status: instance.id,
                name: instance.name.clone(),
            });
        }
    }

    updated.status_effects = survivors;
    updated.recompute_current_stats(env.catalog);

    PreTurn {
        can_move,
        is_confused,
        log,
        fighter: updated,
    }
}

fn apply_tick_damage(
    fighter: &mut Fighter,
    instance: &mut StatusInstance,
    tick: &TickDamage,
    log: &mut Vec<BattleEvent>,
) {
    match *tick {
        TickDamage::FractionOfMax { fraction } => {
            let amount = ((fighter.max_health as f32 * fraction).round() as i32).max(1);
            fighter.apply_damage(amount);
            log.push(BattleEvent::StatusTick {
                fighter: fighter.name.clone(),
                name: instance.name.clone(),
                amount,
            });
        }
        TickDamage::StagedFractionOfCurrent {
            base_fraction,
            max_stage,
        } => {
            let stage = instance.stage.clamp(1, max_stage);
            let fraction = base_fraction * (1 << (stage - 1)) as f32;
            let amount = (fighter.current_health as f32 * fraction).round() as i32;

            if amount <= 0 {
                // At 1 HP the tick rounds to nothing; no damage, no entry.
            } else if fighter.current_health - amount < 1 {
                // Poison never finishes a fighter off on its own.
                fighter.current_health = 1;
                log.push(BattleEvent::PoisonEndured {
                    fighter: fighter.name.clone(),
                });
            } else {
                fighter.apply_damage(amount);
                log.push(BattleEvent::StatusTick {
                    fighter: fighter.name.clone(),
                    name: instance.name.clone(),
                    amount,
                });
            }

            // The fighter always survives a staged tick, so the stage
            // always escalates (until the cap).
            instance.stage = (stage + 1).min(max_stage);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_act_check(
    fighter: &Fighter,
    instance: &StatusInstance,
    check: &ActCheck,
    env: &BattleEnv<'_>,
    seed: u64,
    can_move: &mut bool,
    is_confused: &mut bool,
    log: &mut Vec<BattleEvent>,
) {
    match *check {
        ActCheck::Paralysis { act_chance } | ActCheck::Fear { act_chance } => {
            if !env.rng.chance(seed, act_chance) {
                *can_move = false;
                log.push(BattleEvent::CannotMove {
                    fighter: fighter.name.clone(),
                    status: instance.id,
                });
            }
        }
        ActCheck::Sleep | ActCheck::Flinch => {
            *can_move = false;
            log.push(BattleEvent::CannotMove {
                fighter: fighter.name.clone(),
                status: instance.id,
            });
        }
        ActCheck::Confusion { self_hit_chance } => {
            if env.rng.chance(seed, self_hit_chance) {
                *is_confused = true;
                log.push(BattleEvent::ConfusedTurn {
                    fighter: fighter.name.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BalanceTables;
    use crate::element::Element;
    use crate::env::{PcgRng, RngOracle, StatusCatalog, StatusDefinition};
    use crate::state::{Archetype, StatBlock, StatKind, StatusEffectId};

    struct TestCatalog(Vec<StatusDefinition>);

    impl StatusCatalog for TestCatalog {
        fn definition(&self, id: StatusEffectId) -> Option<&StatusDefinition> {
            self.0.iter().find(|d| d.id == id)
        }
    }

    /// Always rolls 0.0: every chance succeeds.
    struct AlwaysLow;
    impl RngOracle for AlwaysLow {
        fn next_u32(&self, _seed: u64) -> u32 {
            0
        }
    }

    /// Always rolls just under 1.0: every chance below 1.0 fails.
    struct AlwaysHigh;
    impl RngOracle for AlwaysHigh {
        fn next_u32(&self, _seed: u64) -> u32 {
            u32::MAX
        }
    }

    fn catalog() -> TestCatalog {
        TestCatalog(vec![
            StatusDefinition::new(StatusEffectId::Poison, "Poison", 5).with_tick_damage(
                TickDamage::StagedFractionOfCurrent {
                    base_fraction: 0.1,
                    max_stage: 3,
                },
            ),
            StatusDefinition::new(StatusEffectId::Burn, "Burn", 3)
                .with_tick_damage(TickDamage::FractionOfMax { fraction: 0.06 })
                .with_multiplier(StatKind::Attack, 0.8),
            StatusDefinition::new(StatusEffectId::Sleep, "Sleep", 2)
                .with_act_check(ActCheck::Sleep),
            StatusDefinition::new(StatusEffectId::Paralysis, "Paralysis", 2)
                .with_act_check(ActCheck::Paralysis { act_chance: 0.5 }),
            StatusDefinition::new(StatusEffectId::Confusion, "Confusion", 3)
                .with_act_check(ActCheck::Confusion {
                    self_hit_chance: 0.5,
                }),
            StatusDefinition::new(StatusEffectId::Fear, "Fear", 1)
                .permanent()
                .with_act_check(ActCheck::Fear { act_chance: 0.75 }),
        ])
    }

    fn fighter(health: i32) -> Fighter {
        let mut f = Fighter::new(
            0,
            "Verdil",
            Element::Grass,
            Archetype::Balanced,
            health,
            StatBlock::new(20, 10, 15, 12, 14, 5),
        );
        f.current_health = health;
        f
    }

    fn env<'a>(
        catalog: &'a TestCatalog,
        tables: &'a BalanceTables,
        rng: &'a dyn RngOracle,
    ) -> BattleEnv<'a> {
        BattleEnv::new(catalog, tables, rng)
    }

    #[test]
    fn poison_stages_escalate_over_current_health() {
        let catalog = catalog();
        let tables = BalanceTables::default();
        let env = env(&catalog, &tables, &PcgRng);

        let mut f = fighter(1000);
        f.apply_status(StatusEffectId::Poison, &catalog);

        // Tick 1: 10% of 1000 = 100.
        let pass = process_pre_turn(&f, &env, 1);
        assert_eq!(pass.fighter.current_health, 900);
        // Tick 2: 20% of 900 = 180.
        let pass = process_pre_turn(&pass.fighter, &env, 2);
        assert_eq!(pass.fighter.current_health, 720);
        // Tick 3: 40% of 720 = 288.
        let pass = process_pre_turn(&pass.fighter, &env, 3);
        assert_eq!(pass.fighter.current_health, 432);
    }

    #[test]
    fn poison_never_kills() {
        let catalog = TestCatalog(vec![
            StatusDefinition::new(StatusEffectId::Poison, "Poison", 9).with_tick_damage(
                TickDamage::StagedFractionOfCurrent {
                    base_fraction: 0.9,
                    max_stage: 3,
                },
            ),
        ]);
        let tables = BalanceTables::default();
        let env = BattleEnv::new(&catalog, &tables, &PcgRng);

        let mut f = fighter(10);
        f.apply_status(StatusEffectId::Poison, &catalog);

        // 90% of 10 = 9 → exactly 1 left, normal tick.
        let pass = process_pre_turn(&f, &env, 1);
        assert_eq!(pass.fighter.current_health, 1);
        assert!(pass.log.iter().any(|e| matches!(e, BattleEvent::StatusTick { .. })));

        // At 1 HP the stage-2 tick rounds to 2, which would be lethal:
        // the floor branch substitutes its own message.
        let mut f = fighter(2);
        f.apply_status(StatusEffectId::Poison, &catalog);
        f.status_effects[0].stage = 2;
        let pass = process_pre_turn(&f, &env, 2);
        assert_eq!(pass.fighter.current_health, 1);
        assert!(pass.log.iter().any(|e| matches!(e, BattleEvent::PoisonEndured { .. })));
        assert!(pass.can_move);
    }

    #[test]
    fn poison_tick_rounding_to_zero_is_silent() {
        let catalog = catalog();
        let tables = BalanceTables::default();
        let env = env(&catalog, &tables, &PcgRng);

        let mut f = fighter(1);
        f.apply_status(StatusEffectId::Poison, &catalog);
        let pass = process_pre_turn(&f, &env, 1);
        assert_eq!(pass.fighter.current_health, 1);
        assert!(
            !pass
                .log
                .iter()
                .any(|e| matches!(e, BattleEvent::StatusTick { .. } | BattleEvent::PoisonEndured { .. }))
        );
    }

    #[test]
    fn lethal_burn_stops_the_pass_and_pins_duration() {
        let catalog = catalog();
        let tables = BalanceTables::default();
        let env = env(&catalog, &tables, &PcgRng);

        let mut f = fighter(5);
        f.max_health = 100;
        f.apply_status(StatusEffectId::Burn, &catalog);
        f.apply_status(StatusEffectId::Sleep, &catalog);

        // Burn ticks 6 on a fighter at 5 HP: lethal.
        let pass = process_pre_turn(&f, &env, 1);
        assert_eq!(pass.fighter.current_health, 0);
        assert!(!pass.can_move);
        assert!(pass.log.iter().any(|e| matches!(e, BattleEvent::Defeated { .. })));

        // The lethal effect stays with duration forced to 1; the sleep
        // effect after it is untouched (no decrement, no check).
        let burn = &pass.fighter.status_effects[0];
        assert_eq!(burn.id, StatusEffectId::Burn);
        assert_eq!(burn.remaining, 1);
        let sleep = &pass.fighter.status_effects[1];
        assert_eq!(sleep.remaining, 2);
        assert!(!pass.log.iter().any(|e| matches!(e, BattleEvent::CannotMove { .. })));
    }

    #[test]
    fn sleep_prevents_acting_and_wakes_on_expiry() {
        let catalog = catalog();
        let tables = BalanceTables::default();
        let env = env(&catalog, &tables, &PcgRng);

        let mut f = fighter(100);
        f.apply_status(StatusEffectId::Sleep, &catalog);

        let pass = process_pre_turn(&f, &env, 1);
        assert!(!pass.can_move);
        assert_eq!(pass.fighter.status_effects.len(), 1);

        let pass = process_pre_turn(&pass.fighter, &env, 2);
        assert!(!pass.can_move);
        assert!(pass.fighter.status_effects.is_empty());
        let woke = pass
            .log
            .iter()
            .find(|e| matches!(e, BattleEvent::StatusFaded { .. }))
            .unwrap();
        assert_eq!(woke.to_string(), "Verdil woke up!");
    }

    #[test]
    fn paralysis_latch_and_rolls() {
        let catalog = catalog();
        let tables = BalanceTables::default();

        let mut f = fighter(100);
        f.apply_status(StatusEffectId::Paralysis, &catalog);

        // Roll below act_chance: the fighter acts.
        let env_low = BattleEnv::new(&catalog, &tables, &AlwaysLow);
        let pass = process_pre_turn(&f, &env_low, 1);
        assert!(pass.can_move);

        // Roll above act_chance: the fighter is stuck.
        let env_high = BattleEnv::new(&catalog, &tables, &AlwaysHigh);
        let pass = process_pre_turn(&f, &env_high, 1);
        assert!(!pass.can_move);
        assert_eq!(
            pass.log[0].to_string(),
            "Verdil is paralyzed and can't move!"
        );
    }

    #[test]
    fn confusion_flags_without_blocking() {
        let catalog = catalog();
        let tables = BalanceTables::default();
        let env = BattleEnv::new(&catalog, &tables, &AlwaysLow);

        let mut f = fighter(100);
        f.apply_status(StatusEffectId::Confusion, &catalog);
        let pass = process_pre_turn(&f, &env, 1);
        assert!(pass.can_move);
        assert!(pass.is_confused);
    }

    #[test]
    fn fear_is_permanent() {
        let catalog = catalog();
        let tables = BalanceTables::default();
        let env = BattleEnv::new(&catalog, &tables, &AlwaysHigh);

        let mut f = fighter(100);
        f.apply_status(StatusEffectId::Fear, &catalog);

        let mut current = f;
        for round in 0..10 {
            let pass = process_pre_turn(&current, &env, round);
            assert!(!pass.can_move);
            assert_eq!(pass.fighter.status_effects.len(), 1);
            current = pass.fighter;
        }
    }

    #[test]
    fn stats_recomputed_after_aging() {
        let catalog = catalog();
        let tables = BalanceTables::default();
        let env = env(&catalog, &tables, &PcgRng);

        let mut f = fighter(1000);
        f.apply_status(StatusEffectId::Burn, &catalog);
        f.recompute_current_stats(&catalog);
        assert_eq!(f.current_stats.attack, 16);

        // Age the burn out; attack returns to base.
        let mut current = f;
        for round in 0..3 {
            current = process_pre_turn(&current, &env, round).fighter;
        }
        assert!(current.status_effects.is_empty());
        assert_eq!(current.current_stats.attack, current.base_stats.attack);
    }
}
