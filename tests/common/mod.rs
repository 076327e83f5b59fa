//! Shared fixtures: a simple scripted ruleset and snapshot builders.

#![allow(dead_code)]

use euchre_engine::{
    Bid, BidChoice, Bidding, Card, DealerSelection, Engine, FinishedTrick, GameOptions, GameOver,
    LobbyPlayer, Phase, PhaseRules, PickingBestCard, PickingTrump, Player, Rank, Seat, Suit,
    Table, Team, Transition, TrickTaking, Trump, UpCard, card_beats, deal_four_hands,
    effective_suit, higher_bids_than,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

pub fn lobby() -> [LobbyPlayer; 4] {
    [
        LobbyPlayer::new("P1", Seat::One),
        LobbyPlayer::new("P2", Seat::Two),
        LobbyPlayer::new("P3", Seat::Three),
        LobbyPlayer::new("P4", Seat::Four),
    ]
}

pub fn engine() -> Engine<ScriptedRules> {
    let options = GameOptions::default()
        .with_dealer(DealerSelection::Fixed(Seat::Four))
        .with_points_to_win(1);
    Engine::new(ScriptedRules, options)
}

/// Builds a table from four hands, hand `i` going to seat `i + 1`.
pub fn table_from_hands(hands: [Vec<Card>; 4], dealer: Seat) -> Table {
    let [h1, h2, h3, h4] = hands;
    let player = |name: &str, seat, hand| Player {
        name: name.to_string(),
        seat,
        hand,
    };
    Table {
        teams: [
            Team::new(player("P1", Seat::One, h1), player("P3", Seat::Three, h3)),
            Team::new(player("P2", Seat::Two, h2), player("P4", Seat::Four, h4)),
        ],
        dealer,
    }
}

pub fn dealt_table(seed: u64) -> Table {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    table_from_hands(deal_four_hands(&mut rng), Seat::Four)
}

pub fn bidding(table: Table) -> Phase {
    Phase::Bidding(Bidding {
        bid_position: table.dealer.next(),
        table,
        bids: Vec::new(),
    })
}

pub fn trick_taking(table: Table) -> TrickTaking {
    TrickTaking {
        table,
        trump: Trump::Hearts,
        winning_bid: Bid::new(Seat::One, BidChoice::Four),
        card_position: Seat::One,
        current_trick: Vec::new(),
        finished_tricks: Vec::new(),
        player_sitting_out: None,
    }
}

pub fn hand_mut(table: &mut Table, seat: Seat) -> &mut Vec<Card> {
    table
        .teams
        .iter_mut()
        .flat_map(|team| team.players.iter_mut())
        .find(|p| p.seat == seat)
        .map(|p| &mut p.hand)
        .expect("every seat is occupied")
}

/// Moves the first card of `seat`'s hand into the current trick.
pub fn lead_from(phase: &mut TrickTaking, seat: Seat) -> Card {
    let card = hand_mut(&mut phase.table, seat).remove(0);
    phase.current_trick.push(UpCard::new(seat, card));
    card
}

pub fn trick_winner(trick: &FinishedTrick, trump: Trump) -> Seat {
    let [first, rest @ ..] = trick.cards();
    let lead = effective_suit(first.card, trump);
    rest.iter()
        .fold(*first, |best, up| {
            if card_beats(up.card, best.card, lead, trump) {
                *up
            } else {
                best
            }
        })
        .owner
}

/// A minimal ruleset: one round of bidding, any trump, follow suit, one
/// point to the team that takes more tricks. A partner's best card is
/// swapped for the bidder's first card so every hand stays full.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedRules;

impl PhaseRules for ScriptedRules {
    fn bidding_options(&self, phase: &Bidding, seat: Seat) -> Vec<BidChoice> {
        if seat != phase.bid_position {
            return Vec::new();
        }
        let mut options = vec![BidChoice::Pass];
        options.extend(higher_bids_than(phase.best_choice()));
        options
    }

    fn trump_options(&self, phase: &PickingTrump, seat: Seat) -> Vec<Trump> {
        if seat == phase.winning_bid.seat {
            Trump::ALL.to_vec()
        } else {
            Vec::new()
        }
    }

    fn best_card_options(&self, phase: &PickingBestCard, seat: Seat) -> Vec<Card> {
        if seat != phase.partner {
            return Vec::new();
        }
        phase
            .table
            .player(seat)
            .map(|p| p.hand.clone())
            .unwrap_or_default()
    }

    fn trick_options(&self, phase: &TrickTaking, seat: Seat) -> Vec<Card> {
        if seat != phase.card_position {
            return Vec::new();
        }
        let hand = phase
            .table
            .player(seat)
            .map(|p| p.hand.clone())
            .unwrap_or_default();
        let Some(lead) = phase.current_trick.first() else {
            return hand;
        };
        let lead = effective_suit(lead.card, phase.trump);
        let following: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|&c| effective_suit(c, phase.trump) == lead)
            .collect();
        if following.is_empty() { hand } else { following }
    }

    fn choose_bid(
        &self,
        choice: BidChoice,
        phase: &Bidding,
        seat: Seat,
        _options: &GameOptions,
    ) -> Transition {
        let mut next = phase.clone();
        next.bids.push(Bid::new(seat, choice));
        if next.bids.len() < 4 {
            next.bid_position = seat.next();
            return Phase::Bidding(next).into();
        }

        let winning_bid = next
            .bids
            .iter()
            .copied()
            .reduce(|best, bid| if bid.choice > best.choice { bid } else { best })
            .expect("four bids were made");
        Phase::PickingTrump(PickingTrump {
            table: next.table,
            winning_bid,
        })
        .into()
    }

    fn choose_trump(
        &self,
        trump: Trump,
        phase: &PickingTrump,
        _seat: Seat,
        _options: &GameOptions,
    ) -> Transition {
        let bidder = phase.winning_bid.seat;
        if phase.winning_bid.choice == BidChoice::PartnersBestCard {
            return Phase::PickingBestCard(PickingBestCard {
                table: phase.table.clone(),
                trump,
                winning_bid: phase.winning_bid,
                partner: bidder.partner(),
            })
            .into();
        }
        Phase::TrickTaking(TrickTaking {
            trump,
            winning_bid: phase.winning_bid,
            card_position: bidder,
            ..trick_taking(phase.table.clone())
        })
        .into()
    }

    fn choose_best_card(
        &self,
        card: Card,
        phase: &PickingBestCard,
        seat: Seat,
        _options: &GameOptions,
    ) -> Transition {
        let mut table = phase.table.clone();
        let bidder = hand_mut(&mut table, phase.winning_bid.seat);
        let returned = bidder.remove(0);
        bidder.push(card);
        let partner = hand_mut(&mut table, seat);
        partner.retain(|&c| c != card);
        partner.push(returned);
        Phase::TrickTaking(TrickTaking {
            trump: phase.trump,
            winning_bid: phase.winning_bid,
            card_position: phase.winning_bid.seat,
            ..trick_taking(table)
        })
        .into()
    }

    fn play_card(
        &self,
        card: Card,
        phase: &TrickTaking,
        seat: Seat,
        options: &GameOptions,
    ) -> Transition {
        let mut next = phase.clone();
        hand_mut(&mut next.table, seat).retain(|&c| c != card);
        next.current_trick.push(UpCard::new(seat, card));

        match FinishedTrick::try_from(core::mem::take(&mut next.current_trick)) {
            Err(cards) => {
                next.current_trick = cards;
                next.card_position = seat.next();
            }
            Ok(trick) => {
                next.card_position = trick_winner(&trick, next.trump);
                next.finished_tricks.push(trick);
            }
        }

        if next.table.players().any(|p| !p.hand.is_empty()) {
            return Phase::TrickTaking(next).into();
        }

        let won_by_first = next
            .finished_tricks
            .iter()
            .filter(|trick| next.table.teams[0].has_seat(trick_winner(trick, next.trump)))
            .count();
        let [mut first, mut second] = next.table.teams.clone();
        let (winners, losers) = if won_by_first * 2 > next.finished_tricks.len() {
            first.points += 1;
            (first, second)
        } else {
            second.points += 1;
            (second, first)
        };
        if winners.points >= options.points_to_win {
            return GameOver { winners, losers }.into();
        }
        Phase::TrickTaking(next).into()
    }
}

/// What [`FaultyRules`] does wrong when a bid is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Loses a card from the acting seat's hand.
    DropCard,
    /// Seats two players in the same chair.
    DoubleSeat,
    /// Ends the game on the spot.
    EndGame,
}

/// Delegates to [`ScriptedRules`] but corrupts the result of every bid.
#[derive(Debug, Clone, Copy)]
pub struct FaultyRules(pub Fault);

impl PhaseRules for FaultyRules {
    fn bidding_options(&self, phase: &Bidding, seat: Seat) -> Vec<BidChoice> {
        ScriptedRules.bidding_options(phase, seat)
    }

    fn trump_options(&self, phase: &PickingTrump, seat: Seat) -> Vec<Trump> {
        ScriptedRules.trump_options(phase, seat)
    }

    fn best_card_options(&self, phase: &PickingBestCard, seat: Seat) -> Vec<Card> {
        ScriptedRules.best_card_options(phase, seat)
    }

    fn trick_options(&self, phase: &TrickTaking, seat: Seat) -> Vec<Card> {
        ScriptedRules.trick_options(phase, seat)
    }

    fn choose_bid(
        &self,
        _choice: BidChoice,
        phase: &Bidding,
        seat: Seat,
        _options: &GameOptions,
    ) -> Transition {
        let mut next = phase.clone();
        match self.0 {
            Fault::DropCard => {
                hand_mut(&mut next.table, seat).pop();
            }
            Fault::DoubleSeat => {
                next.table.teams[1].players[0].seat = next.table.teams[0].players[0].seat;
            }
            Fault::EndGame => {
                let [winners, losers] = next.table.teams;
                return GameOver { winners, losers }.into();
            }
        }
        Phase::Bidding(next).into()
    }

    fn choose_trump(
        &self,
        trump: Trump,
        phase: &PickingTrump,
        seat: Seat,
        options: &GameOptions,
    ) -> Transition {
        ScriptedRules.choose_trump(trump, phase, seat, options)
    }

    fn choose_best_card(
        &self,
        card: Card,
        phase: &PickingBestCard,
        seat: Seat,
        options: &GameOptions,
    ) -> Transition {
        ScriptedRules.choose_best_card(card, phase, seat, options)
    }

    fn play_card(
        &self,
        card: Card,
        phase: &TrickTaking,
        seat: Seat,
        options: &GameOptions,
    ) -> Transition {
        ScriptedRules.play_card(card, phase, seat, options)
    }
}
