//! Board: the contents of every zone.
//!
//! The `Board` owns the stock, waste, foundations, and lanes. It provides
//! raw card transfers between locations but performs **no rule checks**:
//! legality lives in `rules` and the `engine` decides what to apply.
//!
//! ## Orientation
//!
//! - Stock: top is the last element of the `Vec`.
//! - Waste: front of the `VecDeque` is the most recently drawn card.
//! - Foundation: only the top card is stored; Ace..top is implied.
//! - Lane: see [`Lane`].

use std::collections::VecDeque;

use crate::cards::{Card, Run, DECK_SIZE};

use super::lane::Lane;
use super::location::{FoundationIndex, LaneIndex, Location, FOUNDATION_COUNT, LANE_COUNT};

/// Cards drawn from stock to waste per click.
pub const DRAW_COUNT: usize = 3;

/// Cards dealt to the stock at the start of a game.
pub const STOCK_DEAL_SIZE: usize = 65;

/// Contents of every zone in a game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    pub(crate) stock: Vec<Card>,
    pub(crate) waste: VecDeque<Card>,
    pub(crate) foundations: [Option<Card>; FOUNDATION_COUNT],
    pub(crate) lanes: [Lane; LANE_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a board from raw zone contents.
    #[must_use]
    pub fn from_parts(
        stock: Vec<Card>,
        waste: VecDeque<Card>,
        foundations: [Option<Card>; FOUNDATION_COUNT],
        lanes: [Lane; LANE_COUNT],
    ) -> Self {
        Self {
            stock,
            waste,
            foundations,
            lanes,
        }
    }

    // === Stock & Waste ===

    /// Stock cards, top last.
    #[must_use]
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    /// Waste cards, most recent first.
    #[must_use]
    pub fn waste(&self) -> &VecDeque<Card> {
        &self.waste
    }

    /// The playable waste card.
    #[must_use]
    pub fn waste_top(&self) -> Option<Card> {
        self.waste.front().copied()
    }

    /// Move up to `DRAW_COUNT` cards from the stock top to the waste front.
    ///
    /// Returns the drawn cards in draw order.
    pub(crate) fn draw(&mut self) -> Run {
        let mut drawn = Run::new();
        while drawn.len() < DRAW_COUNT {
            let Some(card) = self.stock.pop() else {
                break;
            };
            self.waste.push_front(card);
            drawn.push(card);
        }
        drawn
    }

    /// Reverse a `draw` that produced `drawn`.
    pub(crate) fn undraw(&mut self, drawn: &[Card]) {
        for &card in drawn.iter().rev() {
            let returned = self.waste.pop_front();
            debug_assert_eq!(returned, Some(card), "waste front does not match drawn card");
            self.stock.push(card);
        }
    }

    /// Turn the whole waste back over into the stock.
    ///
    /// The most recently drawn card ends at the bottom, so the oldest
    /// drawn card is dealt first again.
    pub(crate) fn recycle(&mut self) {
        debug_assert!(self.stock.is_empty());
        self.stock.extend(self.waste.drain(..));
    }

    /// Reverse a `recycle`.
    pub(crate) fn unrecycle(&mut self) {
        debug_assert!(self.waste.is_empty());
        self.waste.extend(self.stock.drain(..));
    }

    // === Foundations ===

    /// Top card of a foundation, `None` if empty.
    #[must_use]
    pub fn foundation(&self, index: FoundationIndex) -> Option<Card> {
        self.foundations[index.index()]
    }

    /// All foundation tops.
    #[must_use]
    pub fn foundations(&self) -> &[Option<Card>; FOUNDATION_COUNT] {
        &self.foundations
    }

    // === Lanes ===

    #[must_use]
    pub fn lane(&self, index: LaneIndex) -> &Lane {
        &self.lanes[index.index()]
    }

    pub(crate) fn lane_mut(&mut self, index: LaneIndex) -> &mut Lane {
        &mut self.lanes[index.index()]
    }

    #[must_use]
    pub fn lanes(&self) -> &[Lane; LANE_COUNT] {
        &self.lanes
    }

    // === Transfers ===

    /// The top `count` cards at a location, bottom first.
    ///
    /// Waste and foundations only ever expose a single card.
    #[must_use]
    pub fn top_cards(&self, location: Location, count: usize) -> Option<Run> {
        match location {
            Location::Waste if count == 1 => self.waste_top().map(|c| Run::from_slice(&[c])),
            Location::Foundation(f) if count == 1 => self.foundation(f).map(|c| Run::from_slice(&[c])),
            Location::Lane(l) => self.lane(l).top_run(count).map(Run::from_slice),
            _ => None,
        }
    }

    /// Remove `cards` from the top of `location`.
    ///
    /// Callers must have checked that `cards` are the top cards there.
    pub(crate) fn take(&mut self, location: Location, cards: &[Card]) {
        match location {
            Location::Waste => {
                self.waste.pop_front();
            }
            Location::Foundation(f) => {
                let top = cards.first().and_then(|c| c.prev_in_suit());
                self.foundations[f.index()] = top;
            }
            Location::Lane(l) => self.lane_mut(l).truncate_cascade(cards.len()),
        }
    }

    /// Place `cards` (bottom first) onto `location`.
    pub(crate) fn put(&mut self, location: Location, cards: &[Card]) {
        match location {
            Location::Waste => {
                if let Some(&card) = cards.first() {
                    self.waste.push_front(card);
                }
            }
            Location::Foundation(f) => {
                if let Some(&card) = cards.last() {
                    self.foundations[f.index()] = Some(card);
                }
            }
            Location::Lane(l) => self.lane_mut(l).cascade.extend_from_slice(cards),
        }
    }

    // === Counting ===

    /// Cards represented by the foundations (sum of top ranks).
    #[must_use]
    pub fn foundation_card_count(&self) -> usize {
        self.foundations
            .iter()
            .flatten()
            .map(|c| c.rank().value() as usize)
            .sum()
    }

    /// Total cards across every zone. Always `DECK_SIZE` for a valid board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundation_card_count()
            + self.lanes.iter().map(Lane::len).sum::<usize>()
    }

    /// Every card is on a foundation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.foundation_card_count() == DECK_SIZE
    }

    /// Total face-down cards across all lane stacks.
    #[must_use]
    pub fn stack_card_count(&self) -> usize {
        self.lanes.iter().map(|l| l.stack.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn f(i: usize) -> FoundationIndex {
        FoundationIndex::new(i).unwrap()
    }

    fn l(i: usize) -> LaneIndex {
        LaneIndex::new(i).unwrap()
    }

    #[test]
    fn test_draw_and_undraw() {
        let mut board = Board::new();
        board.stock = vec![card("clubs1"), card("clubs2"), card("clubs3"), card("clubs4")];

        let drawn = board.draw();
        assert_eq!(drawn.as_slice(), &[card("clubs4"), card("clubs3"), card("clubs2")]);
        assert_eq!(board.waste_top(), Some(card("clubs2")));
        assert_eq!(board.stock(), &[card("clubs1")]);

        board.undraw(&drawn);
        assert!(board.waste.is_empty());
        assert_eq!(board.stock().len(), 4);
        assert_eq!(board.stock.last(), Some(&card("clubs4")));
    }

    #[test]
    fn test_draw_partial() {
        let mut board = Board::new();
        board.stock = vec![card("hearts5")];

        let drawn = board.draw();
        assert_eq!(drawn.len(), 1);
        assert!(board.stock.is_empty());
        assert!(board.draw().is_empty());
    }

    #[test]
    fn test_recycle_deals_oldest_first() {
        let mut board = Board::new();
        board.stock = vec![card("clubs1"), card("clubs2"), card("clubs3")];
        board.draw();
        let before = board.waste.clone();

        board.recycle();
        assert!(board.waste.is_empty());
        assert_eq!(board.stock.last(), Some(&card("clubs3")));

        board.unrecycle();
        assert_eq!(board.waste, before);
        assert!(board.stock.is_empty());
    }

    #[test]
    fn test_foundation_take_and_put() {
        let mut board = Board::new();
        board.put(Location::Foundation(f(0)), &[card("spades1")]);
        assert_eq!(board.foundation(f(0)), Some(card("spades1")));

        board.put(Location::Foundation(f(0)), &[card("spades2")]);
        board.take(Location::Foundation(f(0)), &[card("spades2")]);
        assert_eq!(board.foundation(f(0)), Some(card("spades1")));

        board.take(Location::Foundation(f(0)), &[card("spades1")]);
        assert_eq!(board.foundation(f(0)), None);
    }

    #[test]
    fn test_top_cards() {
        let mut board = Board::new();
        board.lanes[2].cascade = vec![card("hearts9"), card("spades8")];
        board.waste.push_front(card("clubs5"));

        assert_eq!(
            board.top_cards(Location::Lane(l(2)), 2).unwrap().as_slice(),
            &[card("hearts9"), card("spades8")]
        );
        assert_eq!(board.top_cards(Location::Waste, 1).unwrap().as_slice(), &[card("clubs5")]);
        assert!(board.top_cards(Location::Waste, 2).is_none());
        assert!(board.top_cards(Location::Foundation(f(3)), 1).is_none());
    }

    #[test]
    fn test_card_count() {
        let mut board = Board::new();
        board.stock = vec![card("clubs1")];
        board.waste.push_front(card("clubs2"));
        board.foundations[4] = Some(card("hearts3"));
        board.lanes[0] = Lane::new(vec![card("clubs4")], vec![card("clubs5")]);

        assert_eq!(board.foundation_card_count(), 3);
        assert_eq!(board.card_count(), 7);
        assert_eq!(board.stack_card_count(), 1);
        assert!(!board.is_complete());
    }
}
