//! Card types and deck utilities.

use alloc::vec::Vec;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the other suit of the same color.
    ///
    /// Clubs pair with Spades and Diamonds pair with Hearts. When one of a
    /// pair is trump, its partner donates the left bower.
    #[must_use]
    pub const fn same_color(self) -> Self {
        match self {
            Self::Clubs => Self::Spades,
            Self::Spades => Self::Clubs,
            Self::Diamonds => Self::Hearts,
            Self::Hearts => Self::Diamonds,
        }
    }
}

/// Card rank. Only the six euchre ranks exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending face order.
    pub const ALL: [Self; 6] = [
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];
}

/// A playing card.
///
/// Equality is by value. The derived ordering (suit, then rank) is only
/// meant for stable sorting; trick strength lives in [`crate::trump`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Position of the card in [`full_deck`] order, in `0..DECK_SIZE`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.suit as usize * Rank::ALL.len() + self.rank as usize
    }
}

impl core::fmt::Display for Card {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let rank = match self.rank {
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };
        let suit = match self.suit {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        };
        write!(f, "{rank}{suit}")
    }
}

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 24;

/// Number of cards dealt to each seat.
pub const HAND_SIZE: usize = 6;

/// Builds the 24-card deck in suit-major, ascending-rank order.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}
