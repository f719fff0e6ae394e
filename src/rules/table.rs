//! Rule table: pure suit/rank adjacency predicates.
//!
//! These functions carry no state and are the single source of truth for
//! card placement. Both the drop queries and the move path in `engine`
//! go through them, so the two can never disagree.

use crate::cards::{Card, Suit};

/// Whether `candidate` may be placed on a foundation whose top is
/// `existing` (`None` for an empty foundation).
///
/// An empty foundation takes any Ace; otherwise the candidate must be the
/// next rank of the same suit.
#[must_use]
pub fn is_foundation_acceptable(existing: Option<Card>, candidate: Card) -> bool {
    match existing {
        None => candidate.is_ace(),
        Some(top) => top.next_in_suit() == Some(candidate),
    }
}

/// Suits that may be stacked on a cascade card of `suit`.
const fn compatible_suits(suit: Suit) -> [Suit; 2] {
    match suit {
        Suit::Clubs | Suit::Spades => [Suit::Diamonds, Suit::Hearts],
        Suit::Diamonds | Suit::Hearts => [Suit::Clubs, Suit::Spades],
    }
}

/// Whether `candidate` may be placed on the exposed cascade card `exposed`.
///
/// Requires rank one lower and a suit from the opposite color.
#[must_use]
pub fn is_cascade_acceptable(exposed: Card, candidate: Card) -> bool {
    candidate.rank().value() + 1 == exposed.rank().value()
        && compatible_suits(exposed.suit()).contains(&candidate.suit())
}

/// Whether `candidate` may start an empty lane. Kings only.
#[must_use]
pub fn is_empty_lane_acceptable(candidate: Card) -> bool {
    candidate.is_king()
}

/// Whether `cards` (bottom first) form a descending, alternating-color run.
///
/// Empty and single-card slices are trivially runs.
#[must_use]
pub fn is_valid_run(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| is_cascade_acceptable(pair[0], pair[1]))
}
