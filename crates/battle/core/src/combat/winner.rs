//! Win-condition detection.

use crate::state::Fighter;

/// Which side won the battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    Player,
    Opponent,
}

/// Inspect both fighters' health and decide whether the battle has ended.
///
/// Player defeat takes priority: a mutual KO in the same evaluation
/// resolves as an opponent win. Draws are not produced here — the
/// session-level turn cap layered above this check owns that outcome.
pub fn check_winner(player: &Fighter, opponent: &Fighter) -> Option<Winner> {
    if player.is_defeated() {
        Some(Winner::Opponent)
    } else if opponent.is_defeated() {
        Some(Winner::Player)
    } else {
        None
    }
}
