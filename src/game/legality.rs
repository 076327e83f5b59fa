//! Structural invariants every snapshot must satisfy.

use alloc::string::{String, ToString};
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, DECK_SIZE, HAND_SIZE};
use crate::error::PhaseError;
use crate::seat::Seat;

use super::state::{Phase, Table, UpCard};

/// Diagnostic returned by [`legality`] for a legal snapshot.
pub const NO_ISSUE: &str = "No issue detected";

/// Checks a snapshot against every structural invariant.
///
/// The checks run in a fixed order (seating, partnerships, card
/// conservation, finished tricks, current trick, sitting out, hand sizes)
/// and the first violation is returned.
///
/// # Errors
///
/// Returns the first invariant the snapshot violates.
pub fn check_phase(phase: &Phase) -> Result<(), PhaseError> {
    let table = phase.table();
    check_seating(table)?;
    check_partnerships(table)?;
    check_cards(phase)?;

    if let Phase::TrickTaking(p) = phase {
        for (index, trick) in p.finished_tricks.iter().enumerate() {
            if let Some(seat) = repeated_owner(trick.cards()) {
                return Err(PhaseError::FinishedTrickRepeatsSeat { trick: index, seat });
            }
        }

        if p.current_trick.len() >= 4 {
            return Err(PhaseError::CurrentTrickTooLarge(p.current_trick.len()));
        }
        if let Some(seat) = repeated_owner(&p.current_trick) {
            return Err(PhaseError::CurrentTrickRepeatsSeat(seat));
        }

        if p.player_sitting_out == Some(p.card_position) {
            return Err(PhaseError::SittingOutSeatToAct(p.card_position));
        }
    }

    match phase {
        Phase::Bidding(_) | Phase::PickingTrump(_) => check_full_hands(table),
        Phase::PickingBestCard(_) | Phase::TrickTaking(_) => Ok(()),
    }
}

/// Returns whether the snapshot satisfies every invariant.
#[must_use]
pub fn is_legal(phase: &Phase) -> bool {
    check_phase(phase).is_ok()
}

/// Returns the verdict with a diagnostic message.
///
/// Legal snapshots report [`NO_ISSUE`]; illegal ones describe the first
/// violated invariant.
#[must_use]
pub fn legality(phase: &Phase) -> (bool, String) {
    match check_phase(phase) {
        Ok(()) => (true, NO_ISSUE.to_string()),
        Err(err) => (false, err.to_string()),
    }
}

fn check_seating(table: &Table) -> Result<(), PhaseError> {
    let mut taken = [false; 4];
    for player in table.players() {
        let slot = &mut taken[player.seat.index()];
        if *slot {
            return Err(PhaseError::SeatTaken(player.seat));
        }
        *slot = true;
    }
    Ok(())
}

fn check_partnerships(table: &Table) -> Result<(), PhaseError> {
    for team in &table.teams {
        let [first, second] = &team.players;
        if !first.seat.is_partner_of(second.seat) {
            return Err(PhaseError::PartnersNotOpposite(first.seat, second.seat));
        }
    }
    Ok(())
}

fn check_cards(phase: &Phase) -> Result<(), PhaseError> {
    let in_hands = phase.players().flat_map(|p| p.hand.iter().copied());

    let mut seen: HashSet<Card> = HashSet::with_capacity(DECK_SIZE);
    let mut count = 0;
    let mut record = |card: Card| {
        count += 1;
        if seen.insert(card) {
            Ok(())
        } else {
            Err(PhaseError::DuplicateCard(card))
        }
    };

    for card in in_hands {
        record(card)?;
    }
    if let Phase::TrickTaking(p) = phase {
        let played = p
            .finished_tricks
            .iter()
            .flat_map(|trick| trick.cards().iter())
            .chain(p.current_trick.iter());
        for up in played {
            record(up.card)?;
        }
    }

    if count == DECK_SIZE {
        Ok(())
    } else {
        Err(PhaseError::WrongCardCount(count))
    }
}

fn repeated_owner(cards: &[UpCard]) -> Option<Seat> {
    let mut played = [false; 4];
    for up in cards {
        let slot = &mut played[up.owner.index()];
        if *slot {
            return Some(up.owner);
        }
        *slot = true;
    }
    None
}

fn check_full_hands(table: &Table) -> Result<(), PhaseError> {
    match table.players().find(|p| p.hand.len() != HAND_SIZE) {
        Some(player) => Err(PhaseError::WrongHandSize {
            seat: player.seat,
            held: player.hand.len(),
        }),
        None => Ok(()),
    }
}
