//! Game phase snapshots.

use alloc::vec::Vec;

use crate::bid::{Bid, BidChoice};
use crate::card::Card;
use crate::player::{Player, Team};
use crate::seat::Seat;
use crate::trump::Trump;

/// Fields shared by every phase: the two partnerships and the dealer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    /// The two teams.
    pub teams: [Team; 2],
    /// The dealer's seat.
    pub dealer: Seat,
}

impl Table {
    /// Iterates over all four players, team by team.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.teams.iter().flat_map(|team| team.players.iter())
    }

    /// Returns the player at `seat`.
    #[must_use]
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players().find(|p| p.seat == seat)
    }

    /// Returns the team with a player at `seat`.
    #[must_use]
    pub fn team_of(&self, seat: Seat) -> Option<&Team> {
        self.teams.iter().find(|team| team.has_seat(seat))
    }
}

/// A card played face up into a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpCard {
    /// Who played it.
    pub owner: Seat,
    /// The card.
    pub card: Card,
}

impl UpCard {
    /// Creates an up card.
    #[must_use]
    pub const fn new(owner: Seat, card: Card) -> Self {
        Self { owner, card }
    }
}

/// A completed trick of four cards, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinishedTrick(pub [UpCard; 4]);

impl FinishedTrick {
    /// The four cards in play order.
    #[must_use]
    pub const fn cards(&self) -> &[UpCard; 4] {
        &self.0
    }
}

impl TryFrom<Vec<UpCard>> for FinishedTrick {
    type Error = Vec<UpCard>;

    /// Closes a trick once it holds exactly four cards; otherwise hands the
    /// cards back.
    fn try_from(cards: Vec<UpCard>) -> Result<Self, Self::Error> {
        <[UpCard; 4]>::try_from(cards).map(Self)
    }
}

/// Seats are bidding for the right to name trump.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bidding {
    /// Teams and dealer.
    pub table: Table,
    /// The seat to bid next.
    pub bid_position: Seat,
    /// Bids made so far, in order.
    pub bids: Vec<Bid>,
}

impl Bidding {
    /// Highest choice bid so far, `Pass` if nobody has bid.
    #[must_use]
    pub fn best_choice(&self) -> BidChoice {
        self.bids
            .iter()
            .map(|bid| bid.choice)
            .fold(BidChoice::Pass, crate::bid::higher_bid)
    }
}

/// The winning bidder is naming trump.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickingTrump {
    /// Teams and dealer.
    pub table: Table,
    /// The bid that won the auction.
    pub winning_bid: Bid,
}

/// The bidder's partner is choosing a card to pass across.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickingBestCard {
    /// Teams and dealer.
    pub table: Table,
    /// Trump for the hand.
    pub trump: Trump,
    /// The bid that won the auction.
    pub winning_bid: Bid,
    /// The partner choosing the card.
    pub partner: Seat,
}

/// Cards are being played into tricks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrickTaking {
    /// Teams and dealer.
    pub table: Table,
    /// Trump for the hand.
    pub trump: Trump,
    /// The bid that won the auction.
    pub winning_bid: Bid,
    /// The seat to play next.
    pub card_position: Seat,
    /// Cards played into the trick in progress.
    pub current_trick: Vec<UpCard>,
    /// Tricks already completed this hand.
    pub finished_tricks: Vec<FinishedTrick>,
    /// The seat sitting this hand out, if someone went alone.
    pub player_sitting_out: Option<Seat>,
}

/// A mid-game snapshot.
///
/// Phases are never changed in place; every transition yields a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Bidding for trump.
    Bidding(Bidding),
    /// Naming trump.
    PickingTrump(PickingTrump),
    /// Passing the partner's best card.
    PickingBestCard(PickingBestCard),
    /// Playing tricks.
    TrickTaking(TrickTaking),
}

impl Phase {
    /// Returns the teams and dealer.
    #[must_use]
    pub const fn table(&self) -> &Table {
        match self {
            Self::Bidding(p) => &p.table,
            Self::PickingTrump(p) => &p.table,
            Self::PickingBestCard(p) => &p.table,
            Self::TrickTaking(p) => &p.table,
        }
    }

    /// Human-readable phase name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bidding(_) => "Bidding",
            Self::PickingTrump(_) => "Picking Trump",
            Self::PickingBestCard(_) => "Picking Partner's Best Card",
            Self::TrickTaking(_) => "Trick-Taking",
        }
    }

    /// The seat expected to act next.
    #[must_use]
    pub const fn acting_seat(&self) -> Seat {
        match self {
            Self::Bidding(p) => p.bid_position,
            Self::PickingTrump(p) => p.winning_bid.seat,
            Self::PickingBestCard(p) => p.partner,
            Self::TrickTaking(p) => p.card_position,
        }
    }

    /// Iterates over all four players.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.table().players()
    }
}

/// A move a seat can make. Which kind applies depends on the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Choice {
    /// A bid, during [`Phase::Bidding`].
    Bid(BidChoice),
    /// A trump selection, during [`Phase::PickingTrump`].
    Trump(Trump),
    /// A card, during [`Phase::PickingBestCard`] and [`Phase::TrickTaking`].
    Card(Card),
}

impl Choice {
    /// Short name of the option kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bid(_) => "bid",
            Self::Trump(_) => "trump",
            Self::Card(_) => "card",
        }
    }
}

impl From<BidChoice> for Choice {
    fn from(choice: BidChoice) -> Self {
        Self::Bid(choice)
    }
}

impl From<Trump> for Choice {
    fn from(trump: Trump) -> Self {
        Self::Trump(trump)
    }
}

impl From<Card> for Choice {
    fn from(card: Card) -> Self {
        Self::Card(card)
    }
}
