//! Round control and scoring.

use crate::error::RoundError;
use crate::result::RoundResult;

use super::{Game, Player};

impl Game {
    /// Plays one complete round and returns the result.
    ///
    /// Deals, then alternates trick resolution and replenishment until both
    /// hands are empty. With 32 cards and at least 4 leaving play per
    /// cycle, the loop runs at most 8 times.
    ///
    /// # Errors
    ///
    /// Returns an error if a structural invariant of the state machine is
    /// violated mid-round.
    ///
    /// # Example
    ///
    /// ```
    /// use lardrs::Game;
    ///
    /// let mut game = Game::new(42);
    /// if let Ok(result) = game.play_round() {
    ///     println!("{result}");
    /// }
    /// ```
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        self.deal();

        while !self.hands[0].is_empty() || !self.hands[1].is_empty() {
            self.trick()?;
            self.pull()?;
        }

        let scores = [self.score_of(Player::Zero), self.score_of(Player::One)];

        if scores[0] == scores[1] {
            return Ok(RoundResult::Draw);
        }

        let winner = if scores[1] > scores[0] {
            Player::One
        } else {
            Player::Zero
        };

        Ok(RoundResult::Win {
            winner,
            winner_score: scores[winner.index()],
            loser_score: scores[winner.other().index()],
        })
    }

    /// Counts the valuable cards in the player's win pile.
    #[must_use]
    pub fn score_of(&self, player: Player) -> u8 {
        self.wins[player.index()]
            .iter()
            .filter(|&&idx| self.deck[idx].rank.is_valuable())
            .count() as u8
    }
}
