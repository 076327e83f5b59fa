//! The per-phase rules the engine delegates to.

use alloc::vec::Vec;

use crate::bid::BidChoice;
use crate::card::Card;
use crate::options::GameOptions;
use crate::result::Transition;
use crate::seat::Seat;
use crate::trump::Trump;

use super::state::{Bidding, PickingBestCard, PickingTrump, TrickTaking};

/// Option enumeration and application for each phase.
///
/// The engine only calls these with snapshots that passed the legality
/// check, and only calls a `choose_*`/`play_card` method with an option the
/// matching enumeration returned for the same seat. Whatever they return is
/// checked again before the caller sees it, so a faulty implementation can
/// at worst get its move rejected.
///
/// Enumerations must not contain duplicates and must be deterministic for a
/// given snapshot and seat.
pub trait PhaseRules {
    /// Bids `seat` may make.
    fn bidding_options(&self, phase: &Bidding, seat: Seat) -> Vec<BidChoice>;

    /// Trump selections `seat` may name.
    fn trump_options(&self, phase: &PickingTrump, seat: Seat) -> Vec<Trump>;

    /// Cards `seat` may pass to the bidder.
    fn best_card_options(&self, phase: &PickingBestCard, seat: Seat) -> Vec<Card>;

    /// Cards `seat` may play into the current trick.
    fn trick_options(&self, phase: &TrickTaking, seat: Seat) -> Vec<Card>;

    /// Applies a bid.
    fn choose_bid(
        &self,
        choice: BidChoice,
        phase: &Bidding,
        seat: Seat,
        options: &GameOptions,
    ) -> Transition;

    /// Applies a trump selection.
    fn choose_trump(
        &self,
        trump: Trump,
        phase: &PickingTrump,
        seat: Seat,
        options: &GameOptions,
    ) -> Transition;

    /// Applies the partner's card choice.
    fn choose_best_card(
        &self,
        card: Card,
        phase: &PickingBestCard,
        seat: Seat,
        options: &GameOptions,
    ) -> Transition;

    /// Plays a card into the current trick.
    fn play_card(
        &self,
        card: Card,
        phase: &TrickTaking,
        seat: Seat,
        options: &GameOptions,
    ) -> Transition;
}
