//! Move representation: type + endpoints + card payload.
//!
//! Every change to a board is described by a `Move`:
//! - "Click the stock" = `Stock`, no endpoints
//! - "Turn over lane 4" = `Flip` to lane 4
//! - "Drag spades9..clubs7 from lane 2 to lane 5" = `PlayerMove` with a
//!   three-card payload
//!
//! Applied moves are kept in the undo history, and `to_undo()` produces
//! the exact inverse of any applied move.
//!
//! ## Text Form
//!
//! `TYPE:from>to:card;card` with locations written `W`, `F0`..`F11`,
//! `L0`..`L12` and `-` for none. Used for logging and diagnostics only.
//!
//! ```
//! use triple_solitaire::core::Move;
//!
//! let mv: Move = "PLAYER_MOVE:L2>F0:hearts1".parse().unwrap();
//! assert_eq!(mv.to_string(), "PLAYER_MOVE:L2>F0:hearts1");
//! assert_eq!(mv.to_undo().to_string(), "UNDO:F0>L2:hearts1");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Run};
use crate::zones::{LaneIndex, Location};

/// The kind of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveType {
    /// Clicking the stock: draw up to three, or recycle the waste.
    Stock,
    /// Turning over the top stack card of a lane.
    Flip,
    /// Player-initiated drag and drop.
    PlayerMove,
    /// Engine-initiated move to a foundation.
    AutoPlay,
    /// Inverse of a `PlayerMove` or `AutoPlay`.
    Undo,
    /// Inverse of a `Flip`.
    UndoFlip,
    /// Inverse of a `Stock`.
    UndoStock,
}

impl MoveType {
    const ALL: [MoveType; 7] = [
        MoveType::Stock,
        MoveType::Flip,
        MoveType::PlayerMove,
        MoveType::AutoPlay,
        MoveType::Undo,
        MoveType::UndoFlip,
        MoveType::UndoStock,
    ];

    /// Upper-case name used in the text form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MoveType::Stock => "STOCK",
            MoveType::Flip => "FLIP",
            MoveType::PlayerMove => "PLAYER_MOVE",
            MoveType::AutoPlay => "AUTO_PLAY",
            MoveType::Undo => "UNDO",
            MoveType::UndoFlip => "UNDO_FLIP",
            MoveType::UndoStock => "UNDO_STOCK",
        }
    }

    /// Whether this is one of the inverse kinds.
    #[must_use]
    pub const fn is_undo(self) -> bool {
        matches!(self, MoveType::Undo | MoveType::UndoFlip | MoveType::UndoStock)
    }

    /// Whether this kind moves cards between two locations.
    #[must_use]
    pub const fn is_transfer(self) -> bool {
        matches!(self, MoveType::PlayerMove | MoveType::AutoPlay | MoveType::Undo)
    }
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single move.
///
/// For transfers, `cards` is ordered bottom first: `cards[0]` is the card
/// that lands on the destination. For an applied `Stock` move it holds the
/// drawn cards in draw order; an empty payload records a waste recycle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub kind: MoveType,
    pub from: Option<Location>,
    pub to: Option<Location>,
    pub cards: Run,
}

impl Move {
    /// Click the stock.
    #[must_use]
    pub fn stock() -> Self {
        Self {
            kind: MoveType::Stock,
            from: None,
            to: None,
            cards: Run::new(),
        }
    }

    /// Turn over the top stack card of `lane`.
    #[must_use]
    pub fn flip(lane: LaneIndex) -> Self {
        Self {
            kind: MoveType::Flip,
            from: None,
            to: Some(Location::Lane(lane)),
            cards: Run::new(),
        }
    }

    /// Player move of one card or a run (bottom first).
    #[must_use]
    pub fn player(from: impl Into<Location>, to: impl Into<Location>, cards: &[Card]) -> Self {
        Self::transfer(MoveType::PlayerMove, from.into(), to.into(), cards)
    }

    /// Engine-initiated move of a single card to a foundation.
    #[must_use]
    pub fn auto_play(from: impl Into<Location>, to: impl Into<Location>, card: Card) -> Self {
        Self::transfer(MoveType::AutoPlay, from.into(), to.into(), &[card])
    }

    fn transfer(kind: MoveType, from: Location, to: Location, cards: &[Card]) -> Self {
        Self {
            kind,
            from: Some(from),
            to: Some(to),
            cards: Run::from_slice(cards),
        }
    }

    /// The single card, or the bottom card of a run.
    #[must_use]
    pub fn card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// The lane of a `Flip` / `UndoFlip`.
    #[must_use]
    pub fn flip_lane(&self) -> Option<LaneIndex> {
        match self.to {
            Some(Location::Lane(lane)) => Some(lane),
            _ => None,
        }
    }

    /// The move that exactly reverses this one.
    ///
    /// Undo kinds are returned unchanged; they are never themselves undone.
    #[must_use]
    pub fn to_undo(&self) -> Move {
        match self.kind {
            MoveType::Flip => Move {
                kind: MoveType::UndoFlip,
                ..self.clone()
            },
            MoveType::Stock => Move {
                kind: MoveType::UndoStock,
                ..self.clone()
            },
            MoveType::PlayerMove | MoveType::AutoPlay => Move {
                kind: MoveType::Undo,
                from: self.to,
                to: self.from,
                cards: self.cards.clone(),
            },
            MoveType::Undo | MoveType::UndoFlip | MoveType::UndoStock => self.clone(),
        }
    }
}

fn write_location(f: &mut fmt::Formatter<'_>, location: Option<Location>) -> fmt::Result {
    match location {
        Some(location) => write!(f, "{}", location),
        None => f.write_str("-"),
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.kind)?;
        write_location(f, self.from)?;
        f.write_str(">")?;
        write_location(f, self.to)?;
        f.write_str(":")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (Some(kind), Some(endpoints), Some(cards)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("malformed move '{}'", s));
        };

        let kind = MoveType::ALL
            .into_iter()
            .find(|k| k.name() == kind)
            .ok_or_else(|| format!("unknown move type '{}'", kind))?;

        let (from, to) = endpoints
            .split_once('>')
            .ok_or_else(|| format!("malformed endpoints '{}'", endpoints))?;
        let parse_location = |text: &str| -> Result<Option<Location>, String> {
            if text == "-" {
                Ok(None)
            } else {
                text.parse().map(Some)
            }
        };

        let cards = cards
            .split(';')
            .filter(|c| !c.is_empty())
            .map(|c| c.parse::<Card>().map_err(|e| e.to_string()))
            .collect::<Result<Run, _>>()?;

        Ok(Move {
            kind,
            from: parse_location(from)?,
            to: parse_location(to)?,
            cards,
        })
    }
}
