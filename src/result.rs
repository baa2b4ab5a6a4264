//! Round result types.

use core::fmt;

use crate::game::Player;

/// Result of a completed round.
///
/// Scores count the valuable cards (rank Ten or Ace) in each player's win
/// pile. The deck holds 8 valuable cards, so the two scores always sum to at
/// most 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    /// Both players captured the same number of valuable cards.
    Draw,
    /// One player captured strictly more valuable cards.
    Win {
        /// The winning player.
        winner: Player,
        /// The winner's score.
        winner_score: u8,
        /// The loser's score.
        loser_score: u8,
    },
}

impl RoundResult {
    /// Returns whether the round was a draw.
    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(self, Self::Draw)
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draw => write!(f, "Draw!"),
            Self::Win {
                winner,
                winner_score,
                loser_score,
            } => write!(f, "Player {winner} won {winner_score}:{loser_score}"),
        }
    }
}
