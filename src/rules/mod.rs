//! Card placement rules.
//!
//! - `table`: pure predicates over cards (the rule table)
//! - `legality`: those predicates applied to a `Board` and a `Move`
//!
//! The engine never interprets suit or rank directly; every placement
//! decision goes through this module.

pub mod legality;
pub mod table;

pub use legality::{check_move, check_transfer, destination_accepts, MoveRejection};
pub use table::{is_cascade_acceptable, is_empty_lane_acceptable, is_foundation_acceptable, is_valid_run};
