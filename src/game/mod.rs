//! Game engine and round state.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, HAND_SIZE, create_deck};
use crate::error::PullError;

mod policy;
mod round;
pub mod state;
mod trick;

pub use state::Player;

/// A round simulator that owns the deck, hands, talon, and win piles.
///
/// The deck is built once and never mutated; every other container holds
/// `usize` indices into it. Each index lives in exactly one of the hands, the
/// talon, or the win piles at any time.
///
/// All randomness (the shuffle and the policy choices) comes from a single
/// seeded generator, so a round is fully reproducible from its seed.
pub struct Game {
    /// The fixed 32-card deck, read-only after construction.
    pub deck: Vec<Card>,
    /// The two players' hands, as deck indices.
    pub hands: [Vec<usize>; 2],
    /// The two players' win piles, as deck indices.
    pub wins: [Vec<usize>; 2],
    /// Undealt deck indices, drawn from during replenishment.
    pub talon: Vec<usize>,
    /// The player currently holding the lead.
    pub lead: Player,
    /// The last player to act, or `None` before the first trick of a round.
    pub play: Option<Player>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use lardrs::Game;
    ///
    /// let mut game = Game::new(42);
    /// let _ = game.play_round();
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            deck: create_deck(),
            hands: [Vec::new(), Vec::new()],
            wins: [Vec::new(), Vec::new()],
            talon: Vec::new(),
            lead: Player::Zero,
            play: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffles the deck indices and deals the opening hands.
    ///
    /// Each player receives [`HAND_SIZE`] cards; the remaining 24 indices
    /// become the talon. Win piles, lead, and turn state are reset.
    pub fn deal(&mut self) {
        let mut indices: Vec<usize> = (0..DECK_SIZE).collect();
        indices.shuffle(&mut self.rng);

        self.hands[0] = indices[..HAND_SIZE].to_vec();
        self.hands[1] = indices[HAND_SIZE..2 * HAND_SIZE].to_vec();
        self.talon = indices.split_off(2 * HAND_SIZE);
        self.wins = [Vec::new(), Vec::new()];
        self.lead = Player::Zero;
        self.play = None;
    }

    /// Replenishes both hands from the talon, lead player first.
    ///
    /// Each hand is topped back up towards [`HAND_SIZE`], clamped to what the
    /// talon still holds; near the end of a round the replenishment is
    /// partial or empty by design, and the talon drains to exactly zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the hands differ in size. That is a structural
    /// invariant violation, not a recoverable condition.
    pub fn pull(&mut self) -> Result<(), PullError> {
        if self.hands[0].len() != self.hands[1].len() {
            return Err(PullError::HandSizeMismatch);
        }

        let missing = HAND_SIZE.saturating_sub(self.hands[0].len());

        let take = missing.min(self.talon.len());
        let drawn: Vec<usize> = self.talon.drain(..take).collect();
        self.hands[self.lead.index()].extend(drawn);

        let take = missing.min(self.talon.len());
        let drawn: Vec<usize> = self.talon.drain(..take).collect();
        self.hands[self.lead.other().index()].extend(drawn);

        Ok(())
    }

    /// Returns the card at the given deck index.
    #[must_use]
    pub fn card(&self, idx: usize) -> Card {
        self.deck[idx]
    }

    /// Returns the number of cards left in the talon.
    #[must_use]
    pub fn talon_remaining(&self) -> usize {
        self.talon.len()
    }

    /// Returns the total number of deck indices held across both hands, the
    /// talon, and both win piles.
    ///
    /// Between operations this is always [`DECK_SIZE`]; only mid-trick, while
    /// cards sit on the table, is it smaller.
    #[must_use]
    pub fn cards_accounted(&self) -> usize {
        self.hands[0].len()
            + self.hands[1].len()
            + self.talon.len()
            + self.wins[0].len()
            + self.wins[1].len()
    }
}
