//! The move engine.
//!
//! `Game` owns one game of Triple Solitaire: the board, the undo history,
//! the move counter, the clock, and the registered listeners. Every
//! mutation goes through it.
//!
//! ## Call Shape
//!
//! Each public mutating call:
//! 1. validates (illegal input returns `false` and changes nothing),
//! 2. applies the move and records it in the history,
//! 3. runs any configured autoplay,
//! 4. checks for a win,
//! 5. delivers the queued events to listeners.
//!
//! ## Counting
//!
//! Stock, player, and autoplay moves count toward `move_count`. Flips and
//! undos do not, and undo never decrements the counter.

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info, trace};

use crate::cards::{deal, shuffled_deck, Card, Run, DECK_SIZE};
use crate::core::{DealRng, GameClock, GameConfig, GameStatus, GameSummary, Move, MoveType};
use crate::events::{GameEvent, GameListener, ListenerId, Listeners};
use crate::rules::{self, MoveRejection};
use crate::snapshot::{Snapshot, SnapshotError};
use crate::zones::{Board, FoundationIndex, LaneIndex, Location, LANE_COUNT};

use super::history::History;

/// Source of the Unix time recorded when a game's first move is made.
pub type TimeSource = fn() -> Option<u64>;

fn system_time() -> Option<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .map(|elapsed| elapsed.as_secs())
}

/// One game of Triple Solitaire.
#[derive(Debug)]
pub struct Game {
    pub(super) config: GameConfig,
    pub(super) board: Board,
    pub(super) status: GameStatus,
    /// Lanes autoplay must leave alone until the next unlocking move.
    pub(super) autoplay_locks: [bool; LANE_COUNT],
    history: History,
    clock: GameClock,
    move_count: u32,
    start_timestamp: Option<u64>,
    seed: Option<u64>,
    games_dealt: u64,
    listeners: Listeners,
    time_source: TimeSource,
}

impl Game {
    /// Create an engine and deal the first game per `config.seed_policy`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut game = Self::empty(config);
        game.new_game();
        game
    }

    /// Create an engine from a snapshot.
    ///
    /// The snapshot is validated as a whole first. The restored game has an
    /// empty undo history and a stopped clock; call `resume` to restart it.
    pub fn restore(snapshot: &Snapshot, config: GameConfig) -> Result<Self, SnapshotError> {
        let mut game = Self::empty(config);
        game.restore_snapshot(snapshot)?;
        Ok(game)
    }

    fn empty(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(),
            status: GameStatus::InProgress,
            autoplay_locks: [false; LANE_COUNT],
            history: History::new(),
            clock: GameClock::new(),
            move_count: 0,
            start_timestamp: None,
            seed: None,
            games_dealt: 0,
            listeners: Listeners::new(),
            time_source: system_time,
        }
    }

    // === Dealing & Restoring ===

    /// Abandon the current game and deal the next one.
    ///
    /// Returns the seed of the new deal.
    pub fn new_game(&mut self) -> u64 {
        let rng = match self.config.seed_policy.seed_for(self.games_dealt) {
            Some(seed) => DealRng::new(seed),
            None => DealRng::from_entropy(),
        };
        self.deal_from(rng)
    }

    /// Abandon the current game and deal the game for `seed`.
    pub fn new_game_with_seed(&mut self, seed: u64) {
        self.deal_from(DealRng::new(seed));
    }

    fn deal_from(&mut self, mut rng: DealRng) -> u64 {
        let seed = rng.seed();
        self.games_dealt += 1;
        self.replace_board(deal(&shuffled_deck(&mut rng)), Some(seed));
        self.listeners.queue(GameEvent::MoveCountChanged(0));
        self.listeners.queue(GameEvent::TimeChanged(0));
        debug!("dealt game {} with seed {}", self.games_dealt, seed);
        self.listeners.flush();
        seed
    }

    /// Replace the current game with a snapshot.
    ///
    /// On error the current game is left untouched.
    pub fn restore_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let board = snapshot.to_board()?;
        self.replace_board(board, snapshot.seed);
        self.clock = GameClock::at(snapshot.time_in_seconds);
        self.move_count = snapshot.move_count;
        self.start_timestamp = snapshot.start_timestamp;
        self.autoplay_locks = snapshot.locks();
        if self.board.is_complete() {
            self.status = GameStatus::Won;
        }
        self.listeners.queue(GameEvent::MoveCountChanged(self.move_count));
        self.listeners.queue(GameEvent::TimeChanged(self.clock.seconds()));
        debug!("restored game at move {}", self.move_count);
        self.listeners.flush();
        Ok(())
    }

    fn replace_board(&mut self, board: Board, seed: Option<u64>) {
        let had_undo = !self.history.is_empty();
        let was_running = self.clock.is_running();

        self.board = board;
        self.seed = seed;
        self.status = GameStatus::InProgress;
        self.autoplay_locks = [false; LANE_COUNT];
        self.history.clear();
        self.clock = GameClock::new();
        self.move_count = 0;
        self.start_timestamp = None;
        self.check_card_count();

        self.listeners.queue(GameEvent::BoardReset);
        if had_undo {
            self.listeners.queue(GameEvent::UndoAvailabilityChanged(false));
        }
        if was_running {
            self.listeners.queue(GameEvent::ClockChanged { running: false });
        }
    }

    /// Capture the current state. The undo history is not included.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            time_in_seconds: self.clock.seconds(),
            move_count: self.move_count,
            start_timestamp: self.start_timestamp,
            autoplay_locks: self.autoplay_locks.to_vec(),
            ..Snapshot::from_board(&self.board)
        }
    }

    // === Configuration & Listeners ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect from the next call; the
    /// seed policy applies from the next deal.
    pub fn set_config(&mut self, config: GameConfig) {
        self.config = config;
    }

    /// Replace the clock used to stamp a game's first move.
    pub fn set_time_source(&mut self, source: TimeSource) {
        self.time_source = source;
    }

    pub fn add_listener(&mut self, listener: impl GameListener + 'static) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status.is_won()
    }

    #[must_use]
    pub fn is_stock_empty(&self) -> bool {
        self.board.stock().is_empty()
    }

    #[must_use]
    pub fn is_waste_empty(&self) -> bool {
        self.board.waste().is_empty()
    }

    #[must_use]
    pub fn foundation_card(&self, index: FoundationIndex) -> Option<Card> {
        self.board.foundation(index)
    }

    /// Waste card `index`, counting from the most recently drawn.
    #[must_use]
    pub fn waste_card(&self, index: usize) -> Option<Card> {
        self.board.waste().get(index).copied()
    }

    /// The top `count` cascade cards of a lane, bottom first.
    #[must_use]
    pub fn cascade_run(&self, lane: LaneIndex, count: usize) -> Option<Run> {
        self.board.top_cards(Location::Lane(lane), count)
    }

    #[must_use]
    pub fn time_in_seconds(&self) -> u32 {
        self.clock.seconds()
    }

    #[must_use]
    pub fn is_clock_running(&self) -> bool {
        self.clock.is_running()
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.status.is_won() && !self.history.is_empty()
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        self.history.as_slice()
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn is_autoplay_locked(&self, lane: LaneIndex) -> bool {
        self.autoplay_locks[lane.index()]
    }

    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            won: self.status.is_won(),
            duration_seconds: self.clock.seconds(),
            move_count: self.move_count,
            start_timestamp: self.start_timestamp,
            seed: self.seed,
        }
    }

    // === Drop Queries ===

    /// Whether `card` may be dropped on a foundation.
    #[must_use]
    pub fn accept_foundation_drop(&self, index: FoundationIndex, card: Card) -> bool {
        rules::is_foundation_acceptable(self.board.foundation(index), card)
    }

    /// Whether `card` may be dropped on a lane's exposed cascade card.
    /// Always false for a lane without a cascade.
    #[must_use]
    pub fn accept_cascade_drop(&self, lane: LaneIndex, card: Card) -> bool {
        self.board
            .lane(lane)
            .exposed()
            .is_some_and(|exposed| rules::is_cascade_acceptable(exposed, card))
    }

    /// Whether `card` may be dropped on an empty lane.
    #[must_use]
    pub fn accept_lane_drop(&self, card: Card) -> bool {
        rules::is_empty_lane_acceptable(card)
    }

    /// Whether the destination accepts `card` as the bottom of a drop,
    /// taking the destination's current contents into account.
    #[must_use]
    pub fn accept_drop(&self, to: Location, card: Card) -> bool {
        rules::destination_accepts(&self.board, to, card)
    }

    /// Run the full validation `apply_move` performs.
    pub fn check_move(&self, mv: &Move) -> Result<(), MoveRejection> {
        if self.status.is_won() {
            return Err(MoveRejection::GameOver);
        }
        rules::check_move(&self.board, mv)
    }

    #[must_use]
    pub fn can_move(&self, mv: &Move) -> bool {
        self.check_move(mv).is_ok()
    }

    // === Mutation ===

    /// Validate and apply a move, then run configured autoplay.
    ///
    /// Returns `false`, changing nothing, if the move is illegal.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        let applied = self.apply_one(mv);
        self.finish_call(applied)
    }

    /// Move the exposed card of `lane` to the first foundation that takes it.
    pub fn attempt_auto_move_from_cascade_to_foundation(&mut self, lane: LaneIndex) -> bool {
        let applied = self.auto_move_from_cascade(lane);
        self.finish_call(applied)
    }

    /// Move the waste top to the first foundation that takes it.
    pub fn attempt_auto_move_from_waste_to_foundation(&mut self) -> bool {
        let applied = self.auto_move_from_waste();
        self.finish_call(applied)
    }

    fn finish_call(&mut self, applied: bool) -> bool {
        if applied && self.config.has_automation() {
            self.auto_play_until_stable();
        }
        self.listeners.flush();
        applied
    }

    pub(super) fn flush_events(&mut self) {
        self.listeners.flush();
    }

    /// Validate, apply, and record a single move. No autoplay, no flush.
    pub(super) fn apply_one(&mut self, mv: Move) -> bool {
        if let Err(rejection) = self.check_move(&mv) {
            trace!("rejected {}: {}", mv, rejection);
            return false;
        }

        let recorded = match mv.kind {
            MoveType::Stock => Move {
                cards: self.click_stock(),
                ..mv
            },
            MoveType::Flip => {
                if let Some(lane) = mv.flip_lane() {
                    self.board.lane_mut(lane).flip();
                    self.listeners.queue(GameEvent::LaneChanged(lane));
                }
                mv
            }
            _ => {
                if let (Some(from), Some(to)) = (mv.from, mv.to) {
                    self.transfer(from, to, &mv.cards);
                }
                mv
            }
        };
        debug!("{}", recorded);

        self.update_counters(&recorded);
        if self.history.is_empty() {
            self.listeners.queue(GameEvent::UndoAvailabilityChanged(true));
        }
        self.history.push(recorded);
        self.check_card_count();
        self.check_for_win();
        true
    }

    /// Draw from the stock, or recycle the waste if the stock is empty.
    /// Returns the drawn cards; empty for a recycle.
    fn click_stock(&mut self) -> Run {
        let drawn = if self.board.stock().is_empty() {
            self.board.recycle();
            Run::new()
        } else {
            self.board.draw()
        };
        self.listeners.queue(GameEvent::StockChanged);
        self.listeners.queue(GameEvent::WasteChanged);
        drawn
    }

    fn transfer(&mut self, from: Location, to: Location, cards: &[Card]) {
        self.board.take(from, cards);
        self.board.put(to, cards);
        self.listeners.queue(GameEvent::zone_changed(from));
        self.listeners.queue(GameEvent::zone_changed(to));
    }

    fn update_counters(&mut self, mv: &Move) {
        match (mv.kind, mv.from, mv.to) {
            (MoveType::Flip, _, _) => self.clear_locks(),
            (MoveType::PlayerMove, Some(Location::Foundation(_)), Some(Location::Lane(lane))) => {
                self.autoplay_locks[lane.index()] = true;
                self.count_move();
            }
            _ => {
                self.clear_locks();
                self.count_move();
            }
        }
    }

    fn clear_locks(&mut self) {
        self.autoplay_locks = [false; LANE_COUNT];
    }

    fn count_move(&mut self) {
        self.move_count = self.move_count.saturating_add(1);
        self.listeners.queue(GameEvent::MoveCountChanged(self.move_count));
        if self.move_count == 1 {
            self.start_timestamp = (self.time_source)();
            self.start_clock();
        }
    }

    fn check_for_win(&mut self) {
        if self.status.is_won() || !self.board.is_complete() {
            return;
        }
        self.status = GameStatus::Won;
        self.stop_clock();
        info!(
            "game won in {} moves and {} seconds",
            self.move_count,
            self.clock.seconds()
        );
        self.listeners.queue(GameEvent::Won {
            time_in_seconds: self.clock.seconds(),
            move_count: self.move_count,
        });
    }

    fn check_card_count(&self) {
        debug_assert_eq!(self.board.card_count(), DECK_SIZE, "cards were lost or duplicated");
    }

    // === Undo ===

    /// Reverse the most recent move.
    ///
    /// Returns `false` if there is nothing to undo or the game is won.
    pub fn undo(&mut self) -> bool {
        if self.status.is_won() {
            trace!("rejected undo: {}", MoveRejection::GameOver);
            return false;
        }
        let Some(last) = self.history.pop() else {
            return false;
        };

        let inverse = last.to_undo();
        match inverse.kind {
            MoveType::UndoStock => {
                if inverse.cards.is_empty() {
                    self.board.unrecycle();
                } else {
                    self.board.undraw(&inverse.cards);
                }
                self.listeners.queue(GameEvent::StockChanged);
                self.listeners.queue(GameEvent::WasteChanged);
            }
            MoveType::UndoFlip => {
                if let Some(lane) = inverse.flip_lane() {
                    self.board.lane_mut(lane).unflip();
                    self.listeners.queue(GameEvent::LaneChanged(lane));
                }
            }
            _ => {
                if let (Some(from), Some(to)) = (inverse.from, inverse.to) {
                    self.transfer(from, to, &inverse.cards);
                }
            }
        }
        debug!("{}", inverse);

        if self.history.is_empty() {
            self.listeners.queue(GameEvent::UndoAvailabilityChanged(false));
        }
        self.check_card_count();
        self.listeners.flush();
        true
    }

    // === Clock ===

    /// Stop the clock.
    pub fn pause(&mut self) {
        self.stop_clock();
        self.listeners.flush();
    }

    /// Restart the clock, if a move has been made and the game is not won.
    pub fn resume(&mut self) {
        if self.move_count > 0 && !self.status.is_won() {
            self.start_clock();
        }
        self.listeners.flush();
    }

    /// Advance the clock by `seconds` if it is running.
    pub fn tick(&mut self, seconds: u32) -> bool {
        let advanced = self.clock.tick(seconds);
        if advanced {
            self.listeners.queue(GameEvent::TimeChanged(self.clock.seconds()));
            self.listeners.flush();
        }
        advanced
    }

    fn start_clock(&mut self) {
        if !self.clock.is_running() {
            self.clock.start();
            self.listeners.queue(GameEvent::ClockChanged { running: true });
        }
    }

    fn stop_clock(&mut self) {
        if self.clock.is_running() {
            self.clock.stop();
            self.listeners.queue(GameEvent::ClockChanged { running: false });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SeedPolicy;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn lane(i: usize) -> LaneIndex {
        LaneIndex::new(i).unwrap()
    }

    fn seeded(seed: u64) -> Game {
        Game::new(GameConfig::new().with_seed(seed))
    }

    #[test]
    fn test_new_game_uses_seed_policy() {
        let mut game = Game::new(GameConfig::new().with_seed_policy(SeedPolicy::Sequential(10)));
        assert_eq!(game.seed(), Some(10));
        assert_eq!(game.new_game(), 11);
        assert_eq!(game.seed(), Some(11));

        let fixed = seeded(5);
        assert_eq!(fixed.board(), seeded(5).board());
    }

    #[test]
    fn test_fresh_game_state() {
        let game = seeded(0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.time_in_seconds(), 0);
        assert!(!game.can_undo());
        assert!(!game.is_clock_running());
        assert_eq!(game.board().card_count(), DECK_SIZE);
    }

    #[test]
    fn test_stock_counts_and_starts_clock() {
        let mut game = seeded(0);
        game.set_time_source(|| Some(1_700_000_000));

        assert!(game.apply_move(Move::stock()));
        assert_eq!(game.move_count(), 1);
        assert!(game.is_clock_running());
        assert!(game.can_undo());
        assert_eq!(game.history()[0].cards.len(), 3);
        assert_eq!(game.summary().start_timestamp, Some(1_700_000_000));
    }

    #[test]
    fn test_undo_kinds_rejected_from_outside() {
        let mut game = seeded(0);
        let mv = Move::stock().to_undo();
        assert_eq!(game.check_move(&mv), Err(MoveRejection::UndoKind));
        assert!(!game.apply_move(mv));
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_flip_requires_empty_cascade() {
        let mut game = seeded(0);
        // Every dealt lane has a cascade card
        for index in 0..LANE_COUNT {
            assert!(!game.apply_move(Move::flip(lane(index))));
        }
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_undo_does_not_decrement_count() {
        let mut game = seeded(0);
        let before = game.board().clone();

        game.apply_move(Move::stock());
        assert!(game.undo());
        assert_eq!(game.board(), &before);
        assert_eq!(game.move_count(), 1);
        assert!(!game.undo());
    }

    #[test]
    fn test_pause_and_resume() {
        let mut game = seeded(0);
        game.resume();
        assert!(!game.is_clock_running());

        game.apply_move(Move::stock());
        assert!(game.tick(3));
        game.pause();
        assert!(!game.tick(3));
        game.resume();
        assert!(game.tick(2));
        assert_eq!(game.time_in_seconds(), 5);
    }

    #[test]
    fn test_listener_receives_events_after_call() {
        let mut game = seeded(0);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let id = game.add_listener(move |event: &GameEvent| sink.borrow_mut().push(event.clone()));

        game.apply_move(Move::stock());
        assert_eq!(
            *events.borrow(),
            vec![
                GameEvent::StockChanged,
                GameEvent::WasteChanged,
                GameEvent::MoveCountChanged(1),
                GameEvent::ClockChanged { running: true },
                GameEvent::UndoAvailabilityChanged(true),
            ]
        );

        assert!(game.remove_listener(id));
        game.apply_move(Move::stock());
        assert_eq!(events.borrow().len(), 5);
    }

    #[test]
    fn test_snapshot_captures_counters() {
        let mut game = seeded(3);
        game.apply_move(Move::stock());

        let snapshot = game.snapshot();
        assert_eq!(snapshot.seed, Some(3));
        assert_eq!(snapshot.move_count, 1);
        assert_eq!(snapshot.autoplay_locks.len(), LANE_COUNT);
    }
}
