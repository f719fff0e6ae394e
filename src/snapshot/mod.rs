//! Game snapshots: persistence of zone contents and counters.
//!
//! ## Key Types
//!
//! - `Snapshot`: serializable state with `bincode` and JSON encodings
//! - `SnapshotError`: why decoding or validation failed
//!
//! Restoring a game goes through `Game::restore`, which validates the
//! snapshot first and rejects it as a whole on any failure.

pub mod error;
pub mod format;

pub use error::SnapshotError;
pub use format::{Snapshot, SNAPSHOT_VERSION};
