//! Scripted play policies.
//!
//! Three select-and-remove procedures drive every play in a round. Each picks
//! a card from the acting player's hand, removes it, and returns its deck
//! index. Two of them choose uniformly at random among eligible cards; the
//! forced responses in [`Game::attack`] deliberately take the first match in
//! hand order instead.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::card::{Card, Rank};
use crate::error::TrickError;

use super::{Game, Player};

/// Ranks that are never forced plays and carry no points.
const fn is_safe_discard(rank: Rank) -> bool {
    !matches!(rank, Rank::Seven | Rank::Ten | Rank::Ace)
}

impl Game {
    /// Positions in the player's hand whose card satisfies the predicate.
    fn eligible_positions(&self, player: Player, keep: impl Fn(Rank) -> bool) -> Vec<usize> {
        self.hands[player.index()]
            .iter()
            .enumerate()
            .filter(|&(_, &idx)| keep(self.deck[idx].rank))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// First position in the player's hand holding the given rank.
    fn first_of_rank(&self, player: Player, rank: Rank) -> Option<usize> {
        self.hands[player.index()]
            .iter()
            .position(|&idx| self.deck[idx].rank == rank)
    }

    /// Removes the card at a random eligible position, falling back to the
    /// whole hand when no position is eligible. The full hand is always a
    /// valid candidate set, so this only fails on an empty hand.
    fn take_random(&mut self, player: Player, positions: &[usize]) -> Result<usize, TrickError> {
        let len = self.hands[player.index()].len();
        if len == 0 {
            return Err(TrickError::EmptyHand);
        }

        let pos = match positions.choose(&mut self.rng) {
            Some(&pos) => pos,
            None => self.rng.random_range(0..len),
        };

        Ok(self.hands[player.index()].remove(pos))
    }

    /// Opens a trick: plays a random non-Seven card, or a random card from
    /// the whole hand when only Sevens are held.
    ///
    /// # Errors
    ///
    /// Returns an error if the player's hand is empty.
    pub fn initiate(&mut self, player: Player) -> Result<usize, TrickError> {
        let candidates = self.eligible_positions(player, |rank| rank != Rank::Seven);
        self.take_random(player, &candidates)
    }

    /// Responds to the card just played by the opponent.
    ///
    /// A valuable lead (Ten or Ace) forces a capture: the first card of the
    /// matching rank if one is held, otherwise the first Seven. Anything else
    /// falls through to [`Game::throw`].
    ///
    /// # Errors
    ///
    /// Returns an error if the player's hand is empty.
    pub fn attack(&mut self, player: Player, led: Card) -> Result<usize, TrickError> {
        if self.hands[player.index()].is_empty() {
            return Err(TrickError::EmptyHand);
        }

        if led.rank.is_valuable() {
            if let Some(pos) = self.first_of_rank(player, led.rank) {
                return Ok(self.hands[player.index()].remove(pos));
            }
            if let Some(pos) = self.first_of_rank(player, Rank::Seven) {
                return Ok(self.hands[player.index()].remove(pos));
            }
        }

        self.throw(player)
    }

    /// Discards a random card that is neither a Seven nor valuable, or a
    /// random card from the whole hand when nothing safe is held.
    ///
    /// # Errors
    ///
    /// Returns an error if the player's hand is empty.
    pub fn throw(&mut self, player: Player) -> Result<usize, TrickError> {
        let candidates = self.eligible_positions(player, is_safe_discard);
        self.take_random(player, &candidates)
    }
}
