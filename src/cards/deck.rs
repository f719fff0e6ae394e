//! The three-deck shoe and the opening deal.
//!
//! ## Deal Layout
//!
//! From a shuffled shoe of 156 cards:
//! - the first 65 cards go to the stock (the 65th is the stock top)
//! - lane `i` (0-based) then receives `i` face-down stack cards, deepest
//!   first, followed by one face-up cascade card
//!
//! 65 + (0 + 1 + ... + 12) + 13 = 156, so the shoe is used exactly.

use crate::core::rng::DealRng;
use crate::zones::{Board, LaneIndex, STOCK_DEAL_SIZE};

use super::card::{Card, Rank, Suit};

/// Standard decks in the shoe.
pub const DECK_COUNT: usize = 3;

/// Total cards in play.
pub const DECK_SIZE: usize = DECK_COUNT * 52;

/// Build the unshuffled shoe: three copies of each card, deck by deck,
/// suits in `Suit::ALL` order, Ace to King.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for _ in 0..DECK_COUNT {
        for suit in Suit::ALL {
            for rank in Rank::all() {
                deck.push(Card::new(suit, rank));
            }
        }
    }
    deck
}

/// Build and shuffle the shoe.
#[must_use]
pub fn shuffled_deck(rng: &mut DealRng) -> Vec<Card> {
    let mut deck = full_deck();
    rng.shuffle(&mut deck);
    deck
}

/// Deal a shoe onto a fresh board.
///
/// Takes cards from the front of `deck` in order. A shoe of any other
/// size than `DECK_SIZE` is a programming error.
#[must_use]
pub fn deal(deck: &[Card]) -> Board {
    debug_assert_eq!(deck.len(), DECK_SIZE, "deal requires a full shoe");

    let mut board = Board::new();
    let mut cards = deck.iter().copied();

    board.stock.extend(cards.by_ref().take(STOCK_DEAL_SIZE));

    for lane_index in LaneIndex::all() {
        let lane = board.lane_mut(lane_index);
        lane.stack.extend(cards.by_ref().take(lane_index.index()));
        lane.cascade.extend(cards.by_ref().take(1));
    }

    debug_assert!(cards.next().is_none());
    board
}
