//! Trump selections and card ranking under trump.

use alloc::vec::Vec;
use core::cmp::Reverse;

use crate::card::{Card, Rank, Suit};

/// What a winning bidder may name as trump.
///
/// The four suits are ordinary trump with bowers. `High` and `Low` are the
/// no-trump selections: cards rank purely by face, aces high or nines high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trump {
    /// Clubs are trump.
    Clubs,
    /// Diamonds are trump.
    Diamonds,
    /// Hearts are trump.
    Hearts,
    /// Spades are trump.
    Spades,
    /// No trump, aces high.
    High,
    /// No trump, nines high.
    Low,
}

impl Trump {
    /// All six selections.
    pub const ALL: [Self; 6] = [
        Self::Clubs,
        Self::Diamonds,
        Self::Hearts,
        Self::Spades,
        Self::High,
        Self::Low,
    ];

    /// Returns the trump suit, or `None` for a no-trump selection.
    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        match self {
            Self::Clubs => Some(Suit::Clubs),
            Self::Diamonds => Some(Suit::Diamonds),
            Self::Hearts => Some(Suit::Hearts),
            Self::Spades => Some(Suit::Spades),
            Self::High | Self::Low => None,
        }
    }
}

impl From<Suit> for Trump {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Clubs => Self::Clubs,
            Suit::Diamonds => Self::Diamonds,
            Suit::Hearts => Self::Hearts,
            Suit::Spades => Self::Spades,
        }
    }
}

const DESCENDING_WITHOUT_JACK: [Rank; 5] = [
    Rank::Ace,
    Rank::King,
    Rank::Queen,
    Rank::Ten,
    Rank::Nine,
];

/// Returns the cards that rank within `suit` under `trump`, strongest first.
///
/// The number of cards depends on how `suit` relates to trump:
///
/// - no-trump (`High`/`Low`): the six cards of `suit` by face rank;
/// - `suit` is trump: seven cards, right bower and left bower ahead of
///   A, K, Q, 10, 9;
/// - `suit` donates the left bower: five cards, its jack is missing;
/// - any other suit: all six cards, aces high.
///
/// ```
/// use euchre_engine::{Card, Rank, Suit, Trump, ranked_cards};
///
/// let clubs = ranked_cards(Suit::Clubs, Trump::Clubs);
/// assert_eq!(clubs.len(), 7);
/// assert_eq!(clubs[1], Card::new(Rank::Jack, Suit::Spades));
///
/// let spades = ranked_cards(Suit::Spades, Trump::Clubs);
/// assert_eq!(spades.len(), 5);
/// ```
#[must_use]
pub fn ranked_cards(suit: Suit, trump: Trump) -> Vec<Card> {
    let of_suit = |rank| Card::new(rank, suit);

    match trump.suit() {
        None => {
            let mut cards: Vec<Card> = Rank::ALL.into_iter().map(of_suit).collect();
            if trump == Trump::High {
                cards.reverse();
            }
            cards
        }
        Some(trump_suit) if trump_suit == suit => {
            let mut cards = Vec::with_capacity(7);
            cards.push(Card::new(Rank::Jack, suit));
            cards.push(Card::new(Rank::Jack, suit.same_color()));
            cards.extend(DESCENDING_WITHOUT_JACK.into_iter().map(of_suit));
            cards
        }
        Some(trump_suit) if trump_suit.same_color() == suit => {
            DESCENDING_WITHOUT_JACK.into_iter().map(of_suit).collect()
        }
        Some(_) => Rank::ALL.into_iter().rev().map(of_suit).collect(),
    }
}

/// Returns the suit `card` belongs to for following suit.
///
/// The left bower follows trump; every other card follows its printed suit.
#[must_use]
pub fn effective_suit(card: Card, trump: Trump) -> Suit {
    match trump.suit() {
        Some(trump_suit) if card.rank == Rank::Jack && card.suit == trump_suit.same_color() => {
            trump_suit
        }
        _ => card.suit,
    }
}

fn strength(card: Card, lead: Suit, trump: Trump) -> Option<(u8, Reverse<usize>)> {
    let suit = effective_suit(card, trump);
    let tier = if trump.suit() == Some(suit) {
        2
    } else if suit == lead {
        1
    } else {
        return None;
    };

    let position = ranked_cards(suit, trump).iter().position(|&c| c == card)?;
    Some((tier, Reverse(position)))
}

/// Returns whether `a` beats `b` in a trick led in `lead` under `trump`.
///
/// `lead` is the effective suit of the led card (see [`effective_suit`]).
/// Trump beats the lead suit, the lead suit beats everything else, and
/// within a suit the order of [`ranked_cards`] decides. A card that neither
/// follows the lead nor is trump never wins.
#[must_use]
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Trump) -> bool {
    match (strength(a, lead, trump), strength(b, lead, trump)) {
        (Some(sa), Some(sb)) => sa > sb,
        (Some(_), None) => true,
        (None, _) => false,
    }
}
