//! A rules engine for four-player partnership bid euchre, with optional
//! `no_std` support.
//!
//! The crate validates game snapshots, enumerates the moves open to the seat
//! to act, and applies a chosen move to produce the next snapshot. It keeps
//! no state of its own: the caller owns the current [`Phase`] and swaps in
//! whatever [`Engine::choose_option`] returns.
//!
//! Option enumeration and application within each phase are supplied by a
//! [`PhaseRules`] implementation. Every result it produces is re-checked, so
//! an illegal snapshot never reaches the caller.
//!
//! # Example
//!
//! ```no_run
//! use euchre_engine::{Engine, GameOptions, LobbyPlayer, PhaseRules, Seat};
//!
//! fn start<R: PhaseRules>(rules: R) {
//!     let engine = Engine::new(rules, GameOptions::default());
//!     let players = [
//!         LobbyPlayer::new("Ann", Seat::One),
//!         LobbyPlayer::new("Ben", Seat::Two),
//!         LobbyPlayer::new("Cat", Seat::Three),
//!         LobbyPlayer::new("Dan", Seat::Four),
//!     ];
//!     let phase = engine.start_game_seeded(players, 42).expect("fresh deal is legal");
//!     let _options = engine.options(&phase, phase.acting_seat());
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bid;
pub mod card;
pub mod deal;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod seat;
pub mod trump;

// Re-export main types
pub use bid::{Bid, BidChoice, higher_bid, higher_bids_than};
pub use card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit, full_deck};
pub use deal::deal_four_hands;
pub use error::{ChoiceError, PhaseError, SeatError, StartError};
pub use game::{
    Bidding, Choice, Engine, FinishedTrick, NO_ISSUE, Phase, PhaseRules, PickingBestCard,
    PickingTrump, Table, TrickTaking, UpCard, check_phase, is_legal, legality,
};
pub use options::{DealerSelection, GameOptions};
pub use player::{LobbyPlayer, Player, Team};
pub use result::{GameOver, Transition};
pub use seat::{Seat, next_seat, partner_seat};
pub use trump::{Trump, card_beats, effective_suit, ranked_cards};
