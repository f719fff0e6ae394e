//! Shared helpers for building positions and enumerating moves.

#![allow(dead_code)]

use rustc_hash::FxHashMap;

use triple_solitaire::cards::full_deck;
use triple_solitaire::{
    Card, FoundationIndex, Game, GameConfig, Lane, LaneIndex, Location, Move, Rank, Snapshot, Suit,
    DECK_SIZE,
};

pub fn card(text: &str) -> Card {
    text.parse().unwrap()
}

pub fn cards(texts: &[&str]) -> Vec<Card> {
    texts.iter().map(|t| card(t)).collect()
}

pub fn f(index: usize) -> FoundationIndex {
    FoundationIndex::new(index).unwrap()
}

pub fn l(index: usize) -> LaneIndex {
    LaneIndex::new(index).unwrap()
}

/// Builds snapshots of hand-made positions.
///
/// Starts from a finished layout: foundations 0-2 clubs, 3-5 diamonds,
/// 6-8 hearts, 9-11 spades, all at King. Cards freed by lowering a
/// foundation and not placed anywhere else go under the stock.
pub struct PositionBuilder {
    snapshot: Snapshot,
}

impl PositionBuilder {
    pub fn new() -> Self {
        let mut snapshot = Snapshot::from_board(&Default::default());
        for (index, top) in snapshot.foundations.iter_mut().enumerate() {
            let suit = Suit::ALL[index / 3];
            *top = Some(Card::new(suit, Rank::KING));
        }
        Self { snapshot }
    }

    pub fn foundation(mut self, index: usize, top: Option<&str>) -> Self {
        self.snapshot.foundations[index] = top.map(card);
        self
    }

    pub fn lane(mut self, index: usize, stack: &[&str], cascade: &[&str]) -> Self {
        self.snapshot.lanes[index] = Lane::new(cards(stack), cards(cascade));
        self
    }

    /// Stock cards, top last.
    pub fn stock(mut self, texts: &[&str]) -> Self {
        self.snapshot.stock = cards(texts);
        self
    }

    /// Waste cards, most recent first.
    pub fn waste(mut self, texts: &[&str]) -> Self {
        self.snapshot.waste = cards(texts);
        self
    }

    pub fn build(mut self) -> Snapshot {
        let mut counts: FxHashMap<Card, usize> = FxHashMap::default();
        for card in full_deck() {
            *counts.entry(card).or_insert(0) += 1;
        }
        let placed = self
            .snapshot
            .stock
            .iter()
            .chain(&self.snapshot.waste)
            .chain(self.snapshot.lanes.iter().flat_map(|l| l.stack.iter().chain(&l.cascade)))
            .copied()
            .chain(self.snapshot.foundations.iter().flatten().flat_map(|top| top.run_from_ace()))
            .collect::<Vec<_>>();
        for card in placed {
            let remaining = counts.get_mut(&card).expect("unknown card");
            *remaining = remaining.checked_sub(1).expect("card placed too many times");
        }

        let mut leftovers: Vec<Card> = full_deck()
            .into_iter()
            .take(DECK_SIZE / 3)
            .flat_map(|card| std::iter::repeat(card).take(counts[&card]))
            .collect();
        leftovers.extend(self.snapshot.stock.drain(..));
        self.snapshot.stock = leftovers;
        self.snapshot
    }

    pub fn game(self, config: GameConfig) -> Game {
        Game::restore(&self.build(), config).unwrap()
    }
}

/// Every move the engine would accept right now.
pub fn legal_moves(game: &Game) -> Vec<Move> {
    let board = game.board();
    let mut moves = vec![Move::stock()];
    moves.extend(LaneIndex::all().map(Move::flip));

    let mut sources: Vec<(Location, Vec<Card>)> = Vec::new();
    if let Some(top) = board.waste_top() {
        sources.push((Location::Waste, vec![top]));
    }
    for index in FoundationIndex::all() {
        if let Some(top) = board.foundation(index) {
            sources.push((index.into(), vec![top]));
        }
    }
    for index in LaneIndex::all() {
        let cascade = &board.lane(index).cascade;
        for count in 1..=cascade.len() {
            sources.push((index.into(), cascade[cascade.len() - count..].to_vec()));
        }
    }

    let destinations: Vec<Location> = FoundationIndex::all()
        .map(Location::from)
        .chain(LaneIndex::all().map(Location::from))
        .collect();
    for (from, payload) in &sources {
        for &to in &destinations {
            moves.push(Move::player(*from, to, payload));
        }
    }

    moves.retain(|mv| game.can_move(mv));
    moves
}
