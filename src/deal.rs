//! Shuffling and dealing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, HAND_SIZE, full_deck};

/// Shuffles a fresh 24-card deck and splits it into four 6-card hands.
///
/// Hands are cut from the deck in shuffle order. Index 0 belongs to seat 1,
/// index 3 to seat 4. Every call shuffles a new deck, so consecutive deals
/// from the same generator are independent.
///
/// # Example
///
/// ```
/// use euchre_engine::deal_four_hands;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let hands = deal_four_hands(&mut rng);
/// assert!(hands.iter().all(|hand| hand.len() == 6));
/// ```
pub fn deal_four_hands<R: Rng + ?Sized>(rng: &mut R) -> [Vec<Card>; 4] {
    let mut deck = full_deck();
    deck.shuffle(rng);

    let mut hands: [Vec<Card>; 4] = Default::default();
    for (hand, chunk) in hands.iter_mut().zip(deck.chunks_exact(HAND_SIZE)) {
        hand.extend_from_slice(chunk);
    }
    hands
}
