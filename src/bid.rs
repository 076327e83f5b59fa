//! Bid choices and their ranking.

use alloc::vec::Vec;

use crate::seat::Seat;

/// A choice a seat can make while bidding.
///
/// Variants are declared weakest first, so the derived [`Ord`] is the bid
/// hierarchy: `Pass < Three < Four < Five < Six < PartnersBestCard < GoingAlone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BidChoice {
    /// Decline to bid.
    Pass,
    /// Contract for three tricks.
    Three,
    /// Contract for four tricks.
    Four,
    /// Contract for five tricks.
    Five,
    /// Contract for all six tricks.
    Six,
    /// The bidder's partner passes over their best card before play.
    PartnersBestCard,
    /// The bidder plays the hand while their partner sits out.
    GoingAlone,
}

impl BidChoice {
    /// Every choice, strongest first.
    pub const DESCENDING: [Self; 7] = [
        Self::GoingAlone,
        Self::PartnersBestCard,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Pass,
    ];

    /// Number of tricks contracted for, if the choice is a numeric bid.
    #[must_use]
    pub const fn tricks(self) -> Option<u8> {
        match self {
            Self::Three => Some(3),
            Self::Four => Some(4),
            Self::Five => Some(5),
            Self::Six => Some(6),
            Self::Pass | Self::PartnersBestCard | Self::GoingAlone => None,
        }
    }
}

/// A bid placed by a seat. Bids are kept in the order they were made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bid {
    /// The seat that bid.
    pub seat: Seat,
    /// What they bid.
    pub choice: BidChoice,
}

impl Bid {
    /// Creates a new bid.
    #[must_use]
    pub const fn new(seat: Seat, choice: BidChoice) -> Self {
        Self { seat, choice }
    }
}

/// Returns whichever of two choices ranks higher.
#[must_use]
pub fn higher_bid(a: BidChoice, b: BidChoice) -> BidChoice {
    a.max(b)
}

/// Returns every choice that strictly outranks `bid`, strongest first.
#[must_use]
pub fn higher_bids_than(bid: BidChoice) -> Vec<BidChoice> {
    BidChoice::DESCENDING
        .into_iter()
        .take_while(|&choice| choice > bid)
        .collect()
}
