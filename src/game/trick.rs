//! Trick resolution.

use alloc::vec::Vec;

use crate::card::Rank;
use crate::error::TrickError;

use super::{Game, Player};

/// Hard bound on response rounds within one trick. In practice a trick ends
/// much earlier because continuation requires a cover card to exist.
const MAX_RESPONSE_ROUNDS: usize = 7;

impl Game {
    /// Plays out one trick and assigns its cards to the winner's pile.
    ///
    /// The player holding the lead opens (player 0 on the first trick of a
    /// round), then the players alternate responses. A response that covers
    /// the opening card (a Seven, or a card matching the opening card's
    /// rank) keeps the trick open and transfers the lead to the responder.
    /// Any other response closes the trick; on even-numbered response rounds
    /// the opposing player first makes one bonus throw. The closed table goes
    /// to the win pile of whoever holds the lead.
    ///
    /// # Errors
    ///
    /// Returns an error if a play is required from an empty hand, which
    /// indicates a defect in the round state machine.
    pub fn trick(&mut self) -> Result<(), TrickError> {
        let mut table: Vec<usize> = Vec::new();

        let mut play = if self.play.is_none() {
            self.lead = Player::Zero;
            Player::Zero
        } else {
            self.lead
        };

        let mut last = self.initiate(play)?;
        table.push(last);

        for rnd in 1..=MAX_RESPONSE_ROUNDS {
            play = play.other();
            let led = self.deck[last];
            last = self.attack(play, led)?;
            table.push(last);

            let deff = self.deck[table[0]];
            let off = self.deck[last];

            // A cover keeps the trick open and hands the lead to the
            // responder.
            if off.rank == Rank::Seven || off.rank == deff.rank {
                self.lead = play;
                continue;
            }

            // Bonus throw only on even response rounds.
            if rnd % 2 == 0 {
                play = play.other();
                let extra = self.throw(play)?;
                table.push(extra);
            }
            break;
        }

        self.play = Some(play);
        self.wins[self.lead.index()].extend(table);

        Ok(())
    }
}
