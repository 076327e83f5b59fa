use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::error::ChoiceError;
use crate::result::Transition;
use crate::seat::Seat;

use super::legality::check_phase;
use super::rules::PhaseRules;
use super::state::{Choice, Phase};
use super::Engine;

fn ensure_offered<T: PartialEq>(
    offered: &[T],
    choice: &T,
    seat: Seat,
) -> Result<(), ChoiceError> {
    if offered.contains(choice) {
        Ok(())
    } else {
        Err(ChoiceError::IllegalOption(seat))
    }
}

impl<R: PhaseRules> Engine<R> {
    /// Returns the options available to `seat`.
    ///
    /// An illegal snapshot offers nothing.
    #[must_use]
    pub fn options(&self, phase: &Phase, seat: Seat) -> Vec<Choice> {
        if check_phase(phase).is_err() {
            return Vec::new();
        }

        match phase {
            Phase::Bidding(p) => self
                .rules
                .bidding_options(p, seat)
                .into_iter()
                .map(Choice::Bid)
                .collect(),
            Phase::PickingTrump(p) => self
                .rules
                .trump_options(p, seat)
                .into_iter()
                .map(Choice::Trump)
                .collect(),
            Phase::PickingBestCard(p) => self
                .rules
                .best_card_options(p, seat)
                .into_iter()
                .map(Choice::Card)
                .collect(),
            Phase::TrickTaking(p) => self
                .rules
                .trick_options(p, seat)
                .into_iter()
                .map(Choice::Card)
                .collect(),
        }
    }

    /// Returns whether `choice` is currently available to `seat`.
    #[must_use]
    pub fn is_legal_option(&self, choice: Choice, phase: &Phase, seat: Seat) -> bool {
        self.options(phase, seat).contains(&choice)
    }

    /// Applies `choice` for `seat`, reporting why it was refused.
    ///
    /// # Errors
    ///
    /// Returns an error if the input phase is illegal, the choice is the
    /// wrong kind for the phase or not on offer, or the rules produced an
    /// illegal phase. A game-over result is returned without checking.
    pub fn try_choose_option(
        &self,
        choice: Choice,
        phase: &Phase,
        seat: Seat,
    ) -> Result<Transition, ChoiceError> {
        check_phase(phase).map_err(ChoiceError::IllegalPhase)?;

        let options = &self.options;
        let next = match (phase, choice) {
            (Phase::Bidding(p), Choice::Bid(bid)) => {
                ensure_offered(&self.rules.bidding_options(p, seat), &bid, seat)?;
                self.rules.choose_bid(bid, p, seat, options)
            }
            (Phase::PickingTrump(p), Choice::Trump(trump)) => {
                ensure_offered(&self.rules.trump_options(p, seat), &trump, seat)?;
                self.rules.choose_trump(trump, p, seat, options)
            }
            (Phase::PickingBestCard(p), Choice::Card(card)) => {
                ensure_offered(&self.rules.best_card_options(p, seat), &card, seat)?;
                self.rules.choose_best_card(card, p, seat, options)
            }
            (Phase::TrickTaking(p), Choice::Card(card)) => {
                ensure_offered(&self.rules.trick_options(p, seat), &card, seat)?;
                self.rules.play_card(card, p, seat, options)
            }
            _ => {
                return Err(ChoiceError::KindMismatch {
                    option: choice.kind(),
                    phase: phase.name(),
                });
            }
        };

        if let Transition::Phase(candidate) = &next {
            check_phase(candidate).map_err(ChoiceError::IllegalResult)?;
        }
        Ok(next)
    }

    /// Applies `choice` for `seat`.
    ///
    /// If the choice cannot be applied the input phase comes back unchanged
    /// and the reason is logged as a warning.
    #[must_use]
    pub fn choose_option(&self, choice: Choice, phase: &Phase, seat: Seat) -> Transition {
        match self.try_choose_option(choice, phase, seat) {
            Ok(next) => {
                debug!(
                    seat = seat.number(),
                    from = phase.name(),
                    to = next.name(),
                    "option applied"
                );
                next
            }
            Err(err) => {
                warn!(
                    seat = seat.number(),
                    phase = phase.name(),
                    error = %err,
                    "option rejected, phase unchanged"
                );
                Transition::Phase(phase.clone())
            }
        }
    }
}
