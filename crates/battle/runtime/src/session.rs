//! The battle session: a seeded turn loop over two fighters.

use std::sync::Arc;

use tracing::{debug, info};

use battle_core::combat::{Winner, check_winner, process_pre_turn, resolve_attack};
use battle_core::config::{BalanceTables, BattleConfig};
use battle_core::env::{BattleEnv, PcgRng, RngOracle, StatusCatalog, compute_seed};
use battle_core::events::BattleEvent;
use battle_core::state::Fighter;

use crate::provider::MoveProvider;

/// The two sides of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

/// Terminal result of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BattleOutcome {
    PlayerWon,
    OpponentWon,
    /// The round cap elapsed with both fighters standing.
    Draw,
}

/// What happened during one round.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundReport {
    pub round: u32,
    pub log: Vec<BattleEvent>,
    pub outcome: Option<BattleOutcome>,
}

/// Session misuse errors. The engine itself has no failure modes; these
/// guard the orchestration boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the battle is already over")]
    BattleOver,

    #[error("{side:?} attack slot {slot} is out of range ({available} equipped)")]
    InvalidAttackSlot {
        side: Side,
        slot: usize,
        available: usize,
    },
}

/// Construction parameters for a session.
#[derive(Clone)]
pub struct SessionSettings {
    pub seed: u64,
    pub config: BattleConfig,
    pub tables: BalanceTables,
    pub rng: Arc<dyn RngOracle>,
}

impl SessionSettings {
    /// Default settings over a given battle seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            config: BattleConfig::default(),
            tables: BalanceTables::default(),
            rng: Arc::new(PcgRng),
        }
    }
}

/// A running battle between two fighters.
///
/// The session owns the authoritative fighter records: each engine call
/// returns fresh state which the session commits before the next call.
/// Same seed, same choices ⇒ same battle.
pub struct BattleSession {
    catalog: Arc<dyn StatusCatalog>,
    settings: SessionSettings,
    round: u32,
    player: Fighter,
    opponent: Fighter,
    outcome: Option<BattleOutcome>,
    transcript: Vec<BattleEvent>,
}

impl BattleSession {
    pub fn new(
        player: Fighter,
        opponent: Fighter,
        catalog: Arc<dyn StatusCatalog>,
        settings: SessionSettings,
    ) -> Self {
        info!(
            player = %player.name,
            opponent = %opponent.name,
            seed = settings.seed,
            "battle started"
        );
        Self {
            catalog,
            settings,
            round: 0,
            player,
            opponent,
            outcome: None,
            transcript: Vec::new(),
        }
    }

    pub fn player(&self) -> &Fighter {
        &self.player
    }

    pub fn opponent(&self) -> &Fighter {
        &self.opponent
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    /// Every event emitted so far, in order.
    pub fn transcript(&self) -> &[BattleEvent] {
        &self.transcript
    }

    /// Play one round with both sides' chosen attack slots.
    ///
    /// The faster side (by *current* speed; ties favor the player) acts
    /// first. A side that is defeated when its turn comes — or whose foe
    /// already fell this round — does not act. After both sides, the win
    /// condition is checked, then the round cap.
    pub fn play_round(
        &mut self,
        player_slot: usize,
        opponent_slot: usize,
    ) -> Result<RoundReport, SessionError> {
        if self.outcome.is_some() {
            return Err(SessionError::BattleOver);
        }
        self.validate_slot(Side::Player, player_slot)?;
        self.validate_slot(Side::Opponent, opponent_slot)?;

        let mut log = Vec::new();
        let order = if self.player.current_stats.speed >= self.opponent.current_stats.speed {
            [Side::Player, Side::Opponent]
        } else {
            [Side::Opponent, Side::Player]
        };

        for side in order {
            if self.player.is_defeated() || self.opponent.is_defeated() {
                break;
            }
            let slot = match side {
                Side::Player => player_slot,
                Side::Opponent => opponent_slot,
            };
            self.act(side, slot, &mut log);
        }

        self.round += 1;
        let outcome = match check_winner(&self.player, &self.opponent) {
            Some(Winner::Player) => Some(BattleOutcome::PlayerWon),
            Some(Winner::Opponent) => Some(BattleOutcome::OpponentWon),
            None if self.round >= self.settings.config.max_rounds => {
                info!(round = self.round, "round cap reached, declaring a draw");
                Some(BattleOutcome::Draw)
            }
            None => None,
        };
        self.outcome = outcome;
        if let Some(outcome) = outcome {
            info!(?outcome, round = self.round, "battle ended");
        }

        self.transcript.extend(log.iter().cloned());
        Ok(RoundReport {
            round: self.round,
            log,
            outcome,
        })
    }

    /// Keep playing rounds with the given move providers until the battle
    /// produces an outcome.
    pub fn run_to_completion(
        &mut self,
        player_brain: &dyn MoveProvider,
        opponent_brain: &dyn MoveProvider,
    ) -> Result<BattleOutcome, SessionError> {
        loop {
            if let Some(outcome) = self.outcome {
                return Ok(outcome);
            }
            let player_slot = player_brain.choose(
                &self.player,
                &self.opponent,
                compute_seed(self.settings.seed, self.round, self.player.id.0),
            );
            let opponent_slot = opponent_brain.choose(
                &self.opponent,
                &self.player,
                compute_seed(self.settings.seed, self.round, self.opponent.id.0),
            );
            self.play_round(player_slot, opponent_slot)?;
        }
    }

    fn validate_slot(&self, side: Side, slot: usize) -> Result<(), SessionError> {
        let fighter = match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        };
        if slot >= fighter.attacks.len() {
            return Err(SessionError::InvalidAttackSlot {
                side,
                slot,
                available: fighter.attacks.len(),
            });
        }
        Ok(())
    }

    /// One side's turn: pre-turn processing, then — if the fighter can
    /// still move — the chosen attack.
    fn act(&mut self, side: Side, slot: usize, log: &mut Vec<BattleEvent>) {
        let env = BattleEnv::new(
            self.catalog.as_ref(),
            &self.settings.tables,
            self.settings.rng.as_ref(),
        );
        let (actor, foe) = match side {
            Side::Player => (&mut self.player, &mut self.opponent),
            Side::Opponent => (&mut self.opponent, &mut self.player),
        };

        let action_seed = compute_seed(self.settings.seed, self.round, actor.id.0);

        let pre = process_pre_turn(actor, &env, action_seed);
        log.extend(pre.log);
        *actor = pre.fighter;

        if actor.is_defeated() {
            debug!(?side, "fighter fell to start-of-turn damage");
            return;
        }
        if !pre.can_move {
            debug!(?side, "fighter cannot move this turn");
            return;
        }

        // Slot validated before the round started; the list cannot have
        // shrunk since.
        let Some(attack) = actor.attacks.get(slot).cloned() else {
            return;
        };

        debug!(?side, attack = %attack.name, confused = pre.is_confused, "resolving attack");
        let resolution = resolve_attack(actor, foe, &attack, pre.is_confused, &env, action_seed);
        log.extend(resolution.log);

        // On a confusion self-hit, attacker and target are the same
        // fighter; the foe's state is untouched.
        *actor = resolution.attacker;
        if !pre.is_confused {
            *foe = resolution.target;
        }
    }
}
