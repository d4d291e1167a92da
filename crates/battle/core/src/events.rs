//! Structured battle log entries.
//!
//! The engine returns events instead of strings so callers can react to
//! them structurally (animations, sounds, AI signals); `Display` renders
//! the player-facing message for plain text surfaces.

use core::fmt;

use crate::element::Effectiveness;
use crate::state::StatusEffectId;

/// One entry of the battle log, in emission order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// An attack was launched (emitted once the accuracy gate passes).
    AttackUsed { attacker: String, attack: String },

    /// The attack failed the accuracy roll; nothing else happened.
    Missed { attacker: String, attack: String },

    /// A confused fighter turned its attack on itself.
    SelfHit { fighter: String },

    /// Health removed from the target by a connecting attack.
    DamageDealt { target: String, amount: i32 },

    /// The critical-hit roll succeeded.
    CriticalHit,

    /// Non-neutral elemental matchup.
    Matchup { rating: Effectiveness },

    /// Health restored (healing move or drain).
    Healed { fighter: String, amount: i32 },

    /// A halve-HP move connected.
    HealthHalved { target: String, amount: i32 },

    /// Drained health returned to the attacker.
    Drained { attacker: String, amount: i32 },

    /// Recoil self-damage taken by the attacker.
    RecoilTaken { attacker: String, amount: i32 },

    /// A fresh status effect landed.
    StatusApplied { fighter: String, status: StatusEffectId, name: String },

    /// An already-active effect was reapplied, resetting its duration.
    StatusRenewed { fighter: String, status: StatusEffectId, name: String },

    /// An effect aged out.
    StatusFaded { fighter: String, status: StatusEffectId, name: String },

    /// Start-of-turn damage from an active effect.
    StatusTick { fighter: String, name: String, amount: i32 },

    /// Poison would have been lethal; the fighter is left at 1 HP.
    PoisonEndured { fighter: String },

    /// A move-prevention check failed; the fighter skips this turn.
    CannotMove { fighter: String, status: StatusEffectId },

    /// Confusion took hold; the fighter will strike itself this turn.
    ConfusedTurn { fighter: String },

    /// Every status effect was purged from the fighter.
    StatusCleared { fighter: String },

    /// Health reached zero.
    Defeated { fighter: String },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttackUsed { attacker, attack } => {
                write!(f, "{attacker} uses {attack}!")
            }
            Self::Missed { attacker, attack } => {
                write!(f, "{attacker}'s {attack} misses!")
            }
            Self::SelfHit { fighter } => {
                write!(f, "{fighter} is confused and hurts itself!")
            }
            Self::DamageDealt { target, amount } => {
                write!(f, "{target} takes {amount} damage!")
            }
            Self::CriticalHit => write!(f, "Colpo Critico!"),
            Self::Matchup { rating } => match rating {
                Effectiveness::Super => write!(f, "It's super effective!"),
                Effectiveness::NotVery => write!(f, "It's not very effective..."),
                Effectiveness::Neutral => Ok(()),
            },
            Self::Healed { fighter, amount } => {
                write!(f, "{fighter} recovers {amount} health!")
            }
            Self::HealthHalved { target, amount } => {
                write!(f, "{target}'s health is cut in half ({amount} lost)!")
            }
            Self::Drained { attacker, amount } => {
                write!(f, "{attacker} drains {amount} health!")
            }
            Self::RecoilTaken { attacker, amount } => {
                write!(f, "{attacker} is hit by {amount} recoil!")
            }
            Self::StatusApplied { fighter, name, .. } => {
                write!(f, "{fighter} is now affected by {name}!")
            }
            Self::StatusRenewed { fighter, name, .. } => {
                write!(f, "{fighter}'s {name} is renewed!")
            }
            Self::StatusFaded { fighter, status, name } => match status {
                StatusEffectId::Sleep => write!(f, "{fighter} woke up!"),
                StatusEffectId::Confusion => write!(f, "{fighter} is no longer confused!"),
                _ => write!(f, "{fighter}'s {name} faded."),
            },
            Self::StatusTick { fighter, name, amount } => {
                write!(f, "{fighter} suffers {amount} damage from {name}!")
            }
            Self::PoisonEndured { fighter } => {
                write!(f, "{fighter} endures the poison and hangs on!")
            }
            Self::CannotMove { fighter, status } => match status {
                StatusEffectId::Paralysis => write!(f, "{fighter} is paralyzed and can't move!"),
                StatusEffectId::Sleep => write!(f, "{fighter} is fast asleep."),
                StatusEffectId::Flinch => write!(f, "{fighter} flinched!"),
                StatusEffectId::Fear => write!(f, "{fighter} is too frightened to move!"),
                _ => write!(f, "{fighter} can't move!"),
            },
            Self::ConfusedTurn { fighter } => write!(f, "{fighter} is confused!"),
            Self::StatusCleared { fighter } => {
                write!(f, "{fighter} is purified of every ailment!")
            }
            Self::Defeated { fighter } => write!(f, "{fighter} is defeated!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_messages_vary_by_effect() {
        let sleep = BattleEvent::StatusFaded {
            fighter: "Embero".into(),
            status: StatusEffectId::Sleep,
            name: "Sleep".into(),
        };
        assert_eq!(sleep.to_string(), "Embero woke up!");

        let confusion = BattleEvent::StatusFaded {
            fighter: "Embero".into(),
            status: StatusEffectId::Confusion,
            name: "Confusion".into(),
        };
        assert_eq!(confusion.to_string(), "Embero is no longer confused!");

        let burn = BattleEvent::StatusFaded {
            fighter: "Embero".into(),
            status: StatusEffectId::Burn,
            name: "Burn".into(),
        };
        assert_eq!(burn.to_string(), "Embero's Burn faded.");
    }

    #[test]
    fn critical_hit_message() {
        assert_eq!(BattleEvent::CriticalHit.to_string(), "Colpo Critico!");
    }

    /// Transcript export is the main consumer of the serde feature.
    #[cfg(feature = "serde")]
    #[test]
    fn transcript_survives_json() {
        let transcript = vec![
            BattleEvent::AttackUsed {
                attacker: "Embero".into(),
                attack: "Flame Lash".into(),
            },
            BattleEvent::CriticalHit,
            BattleEvent::StatusApplied {
                fighter: "Verdil".into(),
                status: StatusEffectId::Burn,
                name: "Burn".into(),
            },
        ];
        let json = serde_json::to_string(&transcript).unwrap();
        let back: Vec<BattleEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(transcript, back);
    }
}
