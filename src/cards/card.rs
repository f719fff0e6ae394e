//! Playing card values.
//!
//! A `Card` is a plain `{suit, rank}` value. Triple Solitaire uses three
//! standard decks, so identical cards appear three times and are fully
//! interchangeable: there is no per-card identity.
//!
//! ## Text Form
//!
//! Cards have a canonical text form, the lowercase plural suit name followed
//! by the rank number (`clubs1`, `hearts13`). It exists only for the
//! serialization boundary and logs; the engine never parses it internally.
//!
//! ```
//! use triple_solitaire::cards::{Card, Rank, Suit};
//!
//! let card: Card = "hearts7".parse().unwrap();
//! assert_eq!(card, Card::new(Suit::Hearts, Rank::new(7).unwrap()));
//! assert_eq!(card.to_string(), "hearts7");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Card color of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }

    /// Lowercase plural name used in the card text form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Suit::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Red or black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, returning `None` outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw rank number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate Ace through King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }
}

/// A rank number outside 1..=13.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidRank(pub u8);

impl fmt::Display for InvalidRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid rank {}", self.0)
    }
}

impl std::error::Error for InvalidRank {}

impl TryFrom<u8> for Rank {
    type Error = InvalidRank;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidRank(value))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single playing card.
///
/// Serializes as its text form (`"spades12"`), which keeps snapshots
/// readable and independent of the in-memory layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Suit of this card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Rank of this card.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Color of this card's suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank.0 == 1
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        self.rank.0 == 13
    }

    /// The same suit one rank higher. `None` above a King.
    #[must_use]
    pub const fn next_in_suit(self) -> Option<Card> {
        match Rank::new(self.rank.0 + 1) {
            Some(rank) => Some(Card::new(self.suit, rank)),
            None => None,
        }
    }

    /// The same suit one rank lower. `None` below an Ace, which on a
    /// foundation means "empty".
    #[must_use]
    pub const fn prev_in_suit(self) -> Option<Card> {
        match Rank::new(self.rank.0 - 1) {
            Some(rank) => Some(Card::new(self.suit, rank)),
            None => None,
        }
    }

    /// Every card from the Ace of this suit up to and including this one.
    pub fn run_from_ace(self) -> impl Iterator<Item = Card> {
        let suit = self.suit;
        (1..=self.rank.0).map(move |r| Card::new(suit, Rank(r)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

/// Error returned when a card text form cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCardError {
    input: String,
}

impl ParseCardError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid card '{}'", self.input)
    }
}

impl std::error::Error for ParseCardError {}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| ParseCardError::new(s))?;
        let (name, number) = s.split_at(split);
        let suit = Suit::from_name(name).ok_or_else(|| ParseCardError::new(s))?;
        // Canonical digits only: no sign, no leading zero
        if number.starts_with('0') {
            return Err(ParseCardError::new(s));
        }
        let rank = number
            .parse::<u8>()
            .ok()
            .and_then(Rank::new)
            .ok_or_else(|| ParseCardError::new(s))?;
        Ok(Card::new(suit, rank))
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}
