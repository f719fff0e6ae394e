//! Snapshot failures.
//!
//! Any failure rejects the whole snapshot; there is no partial recovery.

use std::fmt;

use crate::cards::Card;

/// Why a snapshot could not be decoded or restored.
#[derive(Debug)]
pub enum SnapshotError {
    /// The binary encoding is malformed.
    Binary(bincode::Error),
    /// The JSON encoding is malformed.
    Json(serde_json::Error),
    /// Written by an incompatible format version.
    UnsupportedVersion(u32),
    /// Not exactly twelve foundations.
    FoundationCount(usize),
    /// Not exactly thirteen lanes.
    LaneCount(usize),
    /// Lock flags present but not one per lane.
    LockCount(usize),
    /// Cards across all zones do not total 156.
    CardCount { expected: usize, found: usize },
    /// A card does not appear exactly once per deck.
    CardMultiplicity { card: Card, expected: usize, found: usize },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Binary(e) => write!(f, "malformed binary snapshot: {}", e),
            SnapshotError::Json(e) => write!(f, "malformed JSON snapshot: {}", e),
            SnapshotError::UnsupportedVersion(v) => write!(f, "unsupported snapshot version {}", v),
            SnapshotError::FoundationCount(n) => write!(f, "expected 12 foundations, found {}", n),
            SnapshotError::LaneCount(n) => write!(f, "expected 13 lanes, found {}", n),
            SnapshotError::LockCount(n) => write!(f, "expected 13 autoplay locks, found {}", n),
            SnapshotError::CardCount { expected, found } => {
                write!(f, "expected {} cards, found {}", expected, found)
            }
            SnapshotError::CardMultiplicity { card, expected, found } => {
                write!(f, "expected {} copies of {}, found {}", expected, card, found)
            }
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Binary(e) => Some(e),
            SnapshotError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bincode::Error> for SnapshotError {
    fn from(e: bincode::Error) -> Self {
        SnapshotError::Binary(e)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        SnapshotError::Json(e)
    }
}
