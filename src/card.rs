//! Card types and deck construction.

use alloc::vec::Vec;

/// Card suit.
///
/// The four suits of the source game, named by their single-letter symbols.
/// Suits never affect play; only ranks do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// The "P" suit.
    P,
    /// The "Z" suit.
    Z,
    /// The "M" suit.
    M,
    /// The "T" suit.
    T,
}

impl Suit {
    /// All suits in deck enumeration order.
    pub const ALL: [Self; 4] = [Self::P, Self::Z, Self::M, Self::T];
}

/// Card rank, ordered from Seven (lowest) to Ace (highest).
///
/// The discriminant is the 1-based position in this order and doubles as the
/// card's point value. Only [`Rank::Ten`] and [`Rank::Ace`] score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Seven. The universal cover card.
    Seven = 1,
    /// Eight.
    Eight = 2,
    /// Nine.
    Nine = 3,
    /// Ten. Valuable.
    Ten = 4,
    /// Jack.
    Jack = 5,
    /// Queen.
    Queen = 6,
    /// King.
    King = 7,
    /// Ace. Valuable.
    Ace = 8,
}

impl Rank {
    /// All ranks in deck enumeration order.
    pub const ALL: [Self; 8] = [
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the point value (1-based position in rank order).
    #[must_use]
    pub const fn point_value(self) -> u8 {
        self as u8
    }

    /// Returns whether this rank scores when captured into a win pile.
    #[must_use]
    pub const fn is_valuable(self) -> bool {
        matches!(self, Self::Ten | Self::Ace)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 32;

/// Number of cards each player holds after dealing or a full replenishment.
pub const HAND_SIZE: usize = 4;

/// Creates the fixed 32-card deck, suits outer, ranks inner.
///
/// The deck is created once per game and never mutated; all other state
/// refers to cards by their index into this sequence.
#[must_use]
pub fn create_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}
