//! Core engine types: moves, configuration, RNG, and game progression.
//!
//! These are the building blocks the `engine` is assembled from. None of
//! them mutate zone contents on their own.

pub mod config;
pub mod moves;
pub mod rng;
pub mod state;

pub use config::{AutoPlayMode, GameConfig, SeedPolicy};
pub use moves::{Move, MoveType};
pub use rng::DealRng;
pub use state::{GameClock, GameStatus, GameSummary};
