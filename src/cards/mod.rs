//! Cards and the three-deck shoe.
//!
//! ## Key Types
//!
//! - `Card`: immutable `{suit, rank}` value
//! - `Suit` / `Rank` / `Color`: card components
//! - `Run`: contiguous cards moved together, bottom first
//!
//! `deck` builds the 156-card shoe and deals it onto a fresh `Board`.

pub mod card;
pub mod deck;

use smallvec::SmallVec;

pub use card::{Card, Color, InvalidRank, ParseCardError, Rank, Suit};
pub use deck::{deal, full_deck, shuffled_deck, DECK_COUNT, DECK_SIZE};

/// Cards moved as a unit, bottom card first.
///
/// Most moves carry one card and stock draws carry three, so the common
/// case stays inline.
pub type Run = SmallVec<[Card; 3]>;
