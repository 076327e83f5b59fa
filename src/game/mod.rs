//! Game engine and phase state machine.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::deal::deal_four_hands;
use crate::error::StartError;
use crate::options::{DealerSelection, GameOptions};
use crate::player::{LobbyPlayer, Player, Team};
use crate::seat::Seat;

mod dispatch;
pub mod legality;
pub mod rules;
pub mod state;

pub use legality::{NO_ISSUE, check_phase, is_legal, legality};
pub use rules::PhaseRules;
pub use state::{
    Bidding, Choice, FinishedTrick, Phase, PickingBestCard, PickingTrump, Table, TrickTaking,
    UpCard,
};

/// The rules engine for one ruleset.
///
/// The engine holds no game state. Callers own the current [`Phase`], pass
/// it into every call, and replace it with what comes back. Calls for the
/// same game must not overlap.
///
/// Per-phase option enumeration and application are delegated to a
/// [`PhaseRules`] implementation; the engine wraps each call in legality
/// checks before and after.
#[derive(Debug, Clone)]
pub struct Engine<R> {
    /// Per-phase rules.
    rules: R,
    /// Game options.
    options: GameOptions,
}

impl<R: PhaseRules> Engine<R> {
    /// Creates an engine over the given phase rules.
    #[must_use]
    pub const fn new(rules: R, options: GameOptions) -> Self {
        Self { rules, options }
    }

    /// Returns the phase rules.
    pub const fn rules(&self) -> &R {
        &self.rules
    }

    /// Returns the game options.
    pub const fn game_options(&self) -> &GameOptions {
        &self.options
    }

    /// Seats four lobby players, picks a dealer, and deals the first hand.
    ///
    /// Each player receives the hand dealt to their seat. Seats 1 and 3 form
    /// one team, seats 2 and 4 the other, both starting at zero points.
    /// Bidding opens with the seat after the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting table is illegal, for example when
    /// two lobby players claim the same seat.
    pub fn start_game<G: Rng>(
        &self,
        players: [LobbyPlayer; 4],
        rng: &mut G,
    ) -> Result<Phase, StartError> {
        let dealer = match self.options.dealer {
            DealerSelection::Random => Seat::ALL[rng.random_range(0..Seat::ALL.len())],
            DealerSelection::Fixed(seat) => seat,
        };
        let mut hands = deal_four_hands(rng);

        let mut players = players;
        players.sort_by_key(|p| p.seat);
        let [one, two, three, four] = players.map(|lobby| {
            let hand = core::mem::take(&mut hands[lobby.seat.index()]);
            Player::from_lobby(lobby, hand)
        });

        let phase = Phase::Bidding(Bidding {
            table: Table {
                teams: [Team::new(one, three), Team::new(two, four)],
                dealer,
            },
            bid_position: dealer.next(),
            bids: Vec::new(),
        });

        check_phase(&phase)?;
        debug!(dealer = dealer.number(), "game started");
        Ok(phase)
    }

    /// Starts a game with a dealer and deal derived from `seed`.
    ///
    /// The same seed and players always produce the same phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting table is illegal.
    pub fn start_game_seeded(
        &self,
        players: [LobbyPlayer; 4],
        seed: u64,
    ) -> Result<Phase, StartError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.start_game(players, &mut rng)
    }
}
