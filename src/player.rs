//! Players and partnerships.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::seat::Seat;

/// A player waiting in the lobby, before cards are dealt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LobbyPlayer {
    /// Display name.
    pub name: String,
    /// The seat they took.
    pub seat: Seat,
}

impl LobbyPlayer {
    /// Creates a lobby player.
    #[must_use]
    pub fn new(name: impl Into<String>, seat: Seat) -> Self {
        Self {
            name: name.into(),
            seat,
        }
    }
}

/// A seated player and the cards they hold. Hand order is not significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Where they sit.
    pub seat: Seat,
    /// Cards in hand.
    pub hand: Vec<Card>,
}

impl Player {
    /// Seats a lobby player with the given hand.
    #[must_use]
    pub fn from_lobby(lobby: LobbyPlayer, hand: Vec<Card>) -> Self {
        Self {
            name: lobby.name,
            seat: lobby.seat,
            hand,
        }
    }

    /// Returns whether the player holds `card`.
    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }
}

/// Two partners and their point tally for the game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    /// The partners.
    pub players: [Player; 2],
    /// Points scored so far.
    pub points: u32,
}

impl Team {
    /// Creates a team with no points.
    #[must_use]
    pub const fn new(first: Player, second: Player) -> Self {
        Self {
            players: [first, second],
            points: 0,
        }
    }

    /// Returns whether one of the partners sits at `seat`.
    #[must_use]
    pub fn has_seat(&self, seat: Seat) -> bool {
        self.players.iter().any(|p| p.seat == seat)
    }
}
