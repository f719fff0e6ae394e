//! Automatic moves.
//!
//! After each successful move the engine repeatedly takes one autoplay
//! step until none applies:
//! 1. with `auto_flip`, turn over the first unlocked lane whose cascade is
//!    empty and whose stack is not,
//! 2. stop under `AutoPlayMode::Never`, and under `WhenWon` unless the
//!    game is effectively won,
//! 3. move the exposed card of the first unlocked lane that can go to a
//!    foundation, else the waste top.
//!
//! A lane is locked when the player drags a card from a foundation onto
//! it, so autoplay does not immediately send the card back.

use crate::cards::Card;
use crate::core::{AutoPlayMode, Move};
use crate::rules::is_foundation_acceptable;
use crate::zones::{FoundationIndex, LaneIndex, Location};

use super::game::Game;

impl Game {
    /// Run configured autoplay until nothing more applies.
    ///
    /// Returns the number of moves made, flips included.
    pub fn run_auto_play(&mut self) -> usize {
        let applied = self.auto_play_until_stable();
        self.flush_events();
        applied
    }

    /// No face-down cards remain, the stock is empty, and at most one card
    /// is in the waste: only foundation moves are left.
    #[must_use]
    pub fn is_effectively_won(&self) -> bool {
        self.board.stack_card_count() == 0 && self.board.stock().is_empty() && self.board.waste().len() <= 1
    }

    pub(super) fn auto_play_until_stable(&mut self) -> usize {
        let mut applied = 0;
        while !self.status.is_won() && self.auto_play_step() {
            applied += 1;
        }
        applied
    }

    fn auto_play_step(&mut self) -> bool {
        if self.config.auto_flip {
            let flippable = LaneIndex::all()
                .find(|&lane| !self.autoplay_locks[lane.index()] && self.board.lane(lane).can_flip());
            if let Some(lane) = flippable {
                return self.apply_one(Move::flip(lane));
            }
        }

        match self.config.auto_play {
            AutoPlayMode::Never => return false,
            AutoPlayMode::WhenWon if !self.is_effectively_won() => return false,
            AutoPlayMode::WhenWon | AutoPlayMode::Always => {}
        }

        for lane in LaneIndex::all() {
            if !self.autoplay_locks[lane.index()] && self.auto_move_from_cascade(lane) {
                return true;
            }
        }
        self.auto_move_from_waste()
    }

    pub(super) fn auto_move_from_cascade(&mut self, lane: LaneIndex) -> bool {
        match self.board.lane(lane).exposed() {
            Some(card) => self.auto_move_to_foundation(Location::Lane(lane), card),
            None => false,
        }
    }

    pub(super) fn auto_move_from_waste(&mut self) -> bool {
        match self.board.waste_top() {
            Some(card) => self.auto_move_to_foundation(Location::Waste, card),
            None => false,
        }
    }

    /// Commit `card` to the lowest-index foundation that accepts it.
    fn auto_move_to_foundation(&mut self, from: Location, card: Card) -> bool {
        let target = FoundationIndex::all().find(|&f| is_foundation_acceptable(self.board.foundation(f), card));
        match target {
            Some(foundation) => self.apply_one(Move::auto_play(from, foundation, card)),
            None => false,
        }
    }
}
