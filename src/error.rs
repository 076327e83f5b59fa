//! Error types for engine operations.

use thiserror::Error;

use crate::card::Card;
use crate::seat::Seat;

/// A number outside 1..=4 was given as a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("seat must be 1 through 4, got {0}")]
pub struct SeatError(pub u8);

/// The invariant a game snapshot violates.
///
/// The checks run in declaration order and stop at the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhaseError {
    /// A seat is occupied by more than one player.
    #[error("{0} is occupied by more than one player")]
    SeatTaken(Seat),
    /// A team's two players do not sit across from each other.
    #[error("partners at {0} and {1} do not sit opposite each other")]
    PartnersNotOpposite(Seat, Seat),
    /// A card appears twice across hands and tricks.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// The number of cards across hands and tricks is not the deck size.
    #[error("expected 24 cards across hands and tricks, found {0}")]
    WrongCardCount(usize),
    /// A finished trick holds two cards from one seat.
    #[error("finished trick {trick} has more than one card from {seat}")]
    FinishedTrickRepeatsSeat {
        /// Zero-based index of the trick.
        trick: usize,
        /// The seat that played twice.
        seat: Seat,
    },
    /// The current trick holds two cards from one seat.
    #[error("current trick has more than one card from {0}")]
    CurrentTrickRepeatsSeat(Seat),
    /// The current trick is full and should have been finished.
    #[error("current trick holds {0} cards; it must hold fewer than 4")]
    CurrentTrickTooLarge(usize),
    /// The seat sitting out is also the seat to act.
    #[error("{0} is sitting out but is the seat to act")]
    SittingOutSeatToAct(Seat),
    /// A player does not hold a full hand before play starts.
    #[error("{seat} holds {held} cards; expected 6 before play starts")]
    WrongHandSize {
        /// The seat with the wrong hand.
        seat: Seat,
        /// How many cards they hold.
        held: usize,
    },
}

/// Why a chosen option was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChoiceError {
    /// The phase passed in is not a legal snapshot.
    #[error("input phase is illegal: {0}")]
    IllegalPhase(PhaseError),
    /// The option is not among the options offered to the seat.
    #[error("option is not available to {0}")]
    IllegalOption(Seat),
    /// The option is the wrong kind for the phase.
    #[error("{option} option cannot be applied during {phase}")]
    KindMismatch {
        /// Kind of option that was chosen.
        option: &'static str,
        /// Name of the active phase.
        phase: &'static str,
    },
    /// Applying the option produced an illegal snapshot.
    #[error("resulting phase is illegal: {0}")]
    IllegalResult(PhaseError),
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The dealt table failed the legality check.
    #[error("initial phase is illegal: {0}")]
    Illegal(#[from] PhaseError),
}
