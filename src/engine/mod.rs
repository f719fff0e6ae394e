//! The move engine.
//!
//! ## Key Types
//!
//! - `Game`: owns a game, validates and applies moves, undoes them, runs
//!   autoplay, detects the win, and notifies listeners
//! - `History`: the undo stack
//!
//! ```
//! use triple_solitaire::core::{GameConfig, Move};
//! use triple_solitaire::engine::Game;
//!
//! let mut game = Game::new(GameConfig::new().with_seed(0));
//! assert!(game.apply_move(Move::stock()));
//! assert_eq!(game.move_count(), 1);
//! assert!(game.undo());
//! ```

mod autoplay;
pub mod game;
pub mod history;

pub use game::{Game, TimeSource};
pub use history::History;
