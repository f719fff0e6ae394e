//! Board-level move legality.
//!
//! Applies the rule table to a concrete `Board`. The engine calls
//! `check_move` before every mutation and the drop queries call
//! `destination_accepts`, so both paths share one implementation.

use std::fmt;

use crate::cards::Card;
use crate::core::moves::{Move, MoveType};
use crate::zones::{Board, LaneIndex, Location};

use super::table::{is_cascade_acceptable, is_empty_lane_acceptable, is_foundation_acceptable};

/// Why a move was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    /// The game is already won.
    GameOver,
    /// Undo kinds are only applied through `undo()`.
    UndoKind,
    /// Stock click with both stock and waste empty.
    NothingToDeal,
    /// Flip target has no face-down card or still has a cascade.
    NothingToFlip(LaneIndex),
    /// Flip without a lane target.
    NoFlipLane,
    /// Transfer missing its source or destination.
    MissingEndpoint,
    /// Source and destination are the same.
    SameLocation,
    /// Transfer with no cards.
    EmptyPayload,
    /// Waste and foundations only give up their top card.
    SingleCardSource(Location),
    /// Foundations only take one card at a time.
    SingleCardDestination(Location),
    /// Cards can never be moved onto the waste.
    WasteDestination,
    /// The payload is not the top of the source.
    PayloadMismatch(Location),
    /// The destination does not accept the bottom card.
    NotAccepted { card: Card, to: Location },
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::GameOver => write!(f, "game is already won"),
            MoveRejection::UndoKind => write!(f, "undo moves are applied through undo()"),
            MoveRejection::NothingToDeal => write!(f, "stock and waste are both empty"),
            MoveRejection::NothingToFlip(lane) => write!(f, "nothing to flip in {}", lane),
            MoveRejection::NoFlipLane => write!(f, "flip has no lane"),
            MoveRejection::MissingEndpoint => write!(f, "move needs a source and a destination"),
            MoveRejection::SameLocation => write!(f, "source and destination are the same"),
            MoveRejection::EmptyPayload => write!(f, "move carries no cards"),
            MoveRejection::SingleCardSource(from) => write!(f, "{} only gives up one card", from),
            MoveRejection::SingleCardDestination(to) => write!(f, "{} only takes one card", to),
            MoveRejection::WasteDestination => write!(f, "cards cannot be moved to the waste"),
            MoveRejection::PayloadMismatch(from) => write!(f, "cards are not the top of {}", from),
            MoveRejection::NotAccepted { card, to } => write!(f, "{} does not accept {}", to, card),
        }
    }
}

/// Whether the destination would accept `card` as the (bottom) card dropped on it.
///
/// A lane with no cards takes a King; a lane whose cascade is gone but still
/// has face-down cards takes nothing until it is flipped.
#[must_use]
pub fn destination_accepts(board: &Board, to: Location, card: Card) -> bool {
    match to {
        Location::Foundation(f) => is_foundation_acceptable(board.foundation(f), card),
        Location::Lane(l) => {
            let lane = board.lane(l);
            match lane.exposed() {
                Some(exposed) => is_cascade_acceptable(exposed, card),
                None => lane.is_empty() && is_empty_lane_acceptable(card),
            }
        }
        Location::Waste => false,
    }
}

/// Validate a card transfer between two locations.
pub fn check_transfer(board: &Board, from: Location, to: Location, cards: &[Card]) -> Result<(), MoveRejection> {
    if from == to {
        return Err(MoveRejection::SameLocation);
    }
    let Some(&bottom) = cards.first() else {
        return Err(MoveRejection::EmptyPayload);
    };
    if !from.is_lane() && cards.len() > 1 {
        return Err(MoveRejection::SingleCardSource(from));
    }
    match to {
        Location::Waste => return Err(MoveRejection::WasteDestination),
        Location::Foundation(_) if cards.len() > 1 => {
            return Err(MoveRejection::SingleCardDestination(to));
        }
        _ => {}
    }
    match board.top_cards(from, cards.len()) {
        Some(top) if top.as_slice() == cards => {}
        _ => return Err(MoveRejection::PayloadMismatch(from)),
    }
    if !destination_accepts(board, to, bottom) {
        return Err(MoveRejection::NotAccepted { card: bottom, to });
    }
    Ok(())
}

/// Validate a forward move against the board.
///
/// Undo kinds are always rejected here; they bypass validation inside the
/// engine because they reverse an already validated move.
pub fn check_move(board: &Board, mv: &Move) -> Result<(), MoveRejection> {
    match mv.kind {
        MoveType::Stock => {
            if board.stock().is_empty() && board.waste().is_empty() {
                Err(MoveRejection::NothingToDeal)
            } else {
                Ok(())
            }
        }
        MoveType::Flip => {
            let lane = mv.flip_lane().ok_or(MoveRejection::NoFlipLane)?;
            if board.lane(lane).can_flip() {
                Ok(())
            } else {
                Err(MoveRejection::NothingToFlip(lane))
            }
        }
        MoveType::PlayerMove | MoveType::AutoPlay => {
            let (Some(from), Some(to)) = (mv.from, mv.to) else {
                return Err(MoveRejection::MissingEndpoint);
            };
            check_transfer(board, from, to, &mv.cards)
        }
        MoveType::Undo | MoveType::UndoFlip | MoveType::UndoStock => Err(MoveRejection::UndoKind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::{FoundationIndex, Lane};

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn f(i: usize) -> Location {
        Location::Foundation(FoundationIndex::new(i).unwrap())
    }

    fn l(i: usize) -> Location {
        Location::Lane(LaneIndex::new(i).unwrap())
    }

    fn board() -> Board {
        let mut board = Board::new();
        board.lanes[0] = Lane::new(vec![card("clubs5")], vec![card("hearts9"), card("spades8")]);
        board.lanes[1] = Lane::new(Vec::new(), vec![card("diamonds9")]);
        board.lanes[2] = Lane::new(vec![card("clubs2")], Vec::new());
        board.waste.push_front(card("hearts1"));
        board.foundations[0] = Some(card("spades7"));
        board
    }

    #[test]
    fn test_destination_accepts() {
        let board = board();

        assert!(destination_accepts(&board, l(0), card("hearts7")));
        assert!(!destination_accepts(&board, l(0), card("clubs7")));
        assert!(destination_accepts(&board, l(3), card("clubs13")));
        assert!(!destination_accepts(&board, l(3), card("clubs12")));
        // Face-down cards remain: not an empty lane
        assert!(!destination_accepts(&board, l(2), card("clubs13")));
        assert!(destination_accepts(&board, f(0), card("spades8")));
        assert!(destination_accepts(&board, f(1), card("hearts1")));
        assert!(!destination_accepts(&board, Location::Waste, card("hearts1")));
    }

    #[test]
    fn test_transfer_checks() {
        let board = board();
        let run = [card("hearts9"), card("spades8")];

        assert_eq!(check_transfer(&board, Location::Waste, f(1), &[card("hearts1")]), Ok(()));
        assert_eq!(check_transfer(&board, l(0), f(0), &[card("spades8")]), Ok(()));
        assert_eq!(check_transfer(&board, l(0), l(0), &run), Err(MoveRejection::SameLocation));
        assert_eq!(check_transfer(&board, l(0), l(3), &[]), Err(MoveRejection::EmptyPayload));
        assert_eq!(
            check_transfer(&board, l(0), f(1), &run),
            Err(MoveRejection::SingleCardDestination(f(1)))
        );
        assert_eq!(
            check_transfer(&board, l(1), Location::Waste, &[card("diamonds9")]),
            Err(MoveRejection::WasteDestination)
        );
        assert_eq!(
            check_transfer(&board, l(0), f(0), &[card("spades9")]),
            Err(MoveRejection::PayloadMismatch(l(0)))
        );
        assert_eq!(
            check_transfer(&board, Location::Waste, f(1), &[card("hearts1"), card("clubs2")]),
            Err(MoveRejection::SingleCardSource(Location::Waste))
        );
        assert_eq!(
            check_transfer(&board, l(1), l(0), &[card("diamonds9")]),
            Err(MoveRejection::NotAccepted { card: card("diamonds9"), to: l(0) })
        );
    }

    #[test]
    fn test_check_move_stock_and_flip() {
        let mut board = board();
        let lane2 = LaneIndex::new(2).unwrap();

        assert_eq!(check_move(&board, &Move::stock()), Ok(()));
        assert_eq!(check_move(&board, &Move::flip(lane2)), Ok(()));
        assert_eq!(
            check_move(&board, &Move::flip(LaneIndex::new(0).unwrap())),
            Err(MoveRejection::NothingToFlip(LaneIndex::new(0).unwrap()))
        );

        board.waste.clear();
        assert_eq!(check_move(&board, &Move::stock()), Err(MoveRejection::NothingToDeal));
        assert_eq!(check_move(&board, &Move::stock().to_undo()), Err(MoveRejection::UndoKind));
    }

    #[test]
    fn test_rejection_display() {
        let rejection = MoveRejection::NotAccepted { card: card("clubs2"), to: f(3) };
        assert_eq!(rejection.to_string(), "F3 does not accept clubs2");
    }
}
