//! Zone system for card locations.
//!
//! Triple Solitaire has a fixed layout: one stock, one waste, twelve
//! foundations, and thirteen lanes. Zones hold cards but know nothing of
//! the rules; see `rules` for legality and `engine` for mutation.
//!
//! ## Key Types
//!
//! - `Board`: contents of every zone
//! - `Lane`: a face-down stack and face-up cascade
//! - `Location`: move endpoint (waste, foundation, or lane)
//! - `FoundationIndex` / `LaneIndex`: bounds-checked zone indices

pub mod board;
pub mod lane;
pub mod location;

pub use board::{Board, DRAW_COUNT, STOCK_DEAL_SIZE};
pub use lane::Lane;
pub use location::{FoundationIndex, IndexOutOfRange, LaneIndex, Location, FOUNDATION_COUNT, LANE_COUNT};
