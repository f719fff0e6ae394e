//! # triple-solitaire
//!
//! Game-state engine for Triple Solitaire: Klondike played with three
//! 52-card decks, twelve foundations, thirteen tableau lanes, and a stock
//! that deals three cards at a time.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: a `Game` is a plain value. No globals, no threads;
//!    hosts drive the clock and read state back through queries.
//!
//! 2. **Validate, Then Mutate**: every move is checked against the rule
//!    table before any zone changes. Illegal moves return `false`.
//!
//! 3. **Reproducible Deals**: shuffles use a seeded ChaCha8 stream and the
//!    seed is recorded on the game and in snapshots.
//!
//! ## Modules
//!
//! - `cards`: card values and the 156-card shoe
//! - `zones`: stock, waste, foundations, lanes, and move endpoints
//! - `rules`: the rule table and board-level legality
//! - `core`: moves, configuration, RNG, status, and clock
//! - `events`: change notifications and listeners
//! - `engine`: the `Game` move engine
//! - `snapshot`: persistence and validation

pub mod cards;
pub mod core;
pub mod engine;
pub mod events;
pub mod rules;
pub mod snapshot;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{Card, Color, ParseCardError, Rank, Run, Suit, DECK_SIZE};

pub use crate::core::{
    AutoPlayMode, DealRng, GameClock, GameConfig, GameStatus, GameSummary, Move, MoveType, SeedPolicy,
};

pub use crate::zones::{Board, FoundationIndex, Lane, LaneIndex, Location, FOUNDATION_COUNT, LANE_COUNT};

pub use crate::rules::MoveRejection;

pub use crate::events::{GameEvent, GameListener, ListenerId};

pub use crate::engine::Game;

pub use crate::snapshot::{Snapshot, SnapshotError};
