//! Move selection seam.
//!
//! The engine is agnostic to how attack slots are chosen; the session asks
//! a [`MoveProvider`] per side per round. Real opponent intelligence lives
//! outside this workspace — [`RandomMoveProvider`] is the stand-in.

use battle_core::env::{PcgRng, RngOracle};
use battle_core::state::Fighter;

/// Chooses which equipped attack a fighter uses this round.
pub trait MoveProvider: Send + Sync {
    /// Return the attack slot to use. `seed` is unique per fighter per
    /// round, so a deterministic provider yields replayable battles.
    fn choose(&self, actor: &Fighter, foe: &Fighter, seed: u64) -> usize;
}

/// Picks an equipped slot pseudo-randomly from the round seed.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomMoveProvider;

impl MoveProvider for RandomMoveProvider {
    fn choose(&self, actor: &Fighter, _foe: &Fighter, seed: u64) -> usize {
        let equipped = actor.attacks.len().max(1);
        PcgRng.next_u32(seed) as usize % equipped
    }
}

/// Always uses the same slot. Handy for tests and scripted fights.
#[derive(Clone, Copy, Debug)]
pub struct FixedMoveProvider(pub usize);

impl MoveProvider for FixedMoveProvider {
    fn choose(&self, _actor: &Fighter, _foe: &Fighter, _seed: u64) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::element::Element;
    use battle_core::state::{Archetype, Attack, AttackCategory, StatBlock};

    fn fighter_with_attacks(count: u32) -> Fighter {
        let mut f = Fighter::new(
            0,
            "Tester",
            Element::Light,
            Archetype::Balanced,
            100,
            StatBlock::default(),
        );
        for i in 0..count {
            f.equip_attack(Attack::new(
                i,
                format!("Move {i}"),
                10,
                1.0,
                Element::Light,
                AttackCategory::Physical,
                "icon",
            ))
            .unwrap();
        }
        f
    }

    #[test]
    fn random_provider_stays_in_range_and_replays() {
        let actor = fighter_with_attacks(3);
        let foe = fighter_with_attacks(3);
        let provider = RandomMoveProvider;
        for seed in 0..1_000 {
            let slot = provider.choose(&actor, &foe, seed);
            assert!(slot < 3);
            assert_eq!(slot, provider.choose(&actor, &foe, seed));
        }
    }

    #[test]
    fn random_provider_handles_no_attacks() {
        let actor = fighter_with_attacks(0);
        let foe = fighter_with_attacks(1);
        assert_eq!(RandomMoveProvider.choose(&actor, &foe, 5), 0);
    }
}
