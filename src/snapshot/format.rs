//! Snapshot format.
//!
//! A `Snapshot` is a plain, serde-friendly copy of a game's zone contents
//! and counters. The undo history is not part of it. Cards are written in
//! their text form (`clubs1`), so the JSON encoding is readable by hand.
//!
//! ## Encodings
//!
//! - `to_bytes` / `from_bytes`: compact `bincode`
//! - `to_json` / `from_json`: `serde_json`
//!
//! Decoding only checks the encoding. `validate` (and `to_board`, which
//! calls it) checks that the contents describe a possible game.

use std::collections::VecDeque;

use log::warn;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card, DECK_COUNT, DECK_SIZE};
use crate::zones::{Board, Lane, FOUNDATION_COUNT, LANE_COUNT};

use super::error::SnapshotError;

/// Current format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    /// Seed of the deal, if known.
    pub seed: Option<u64>,
    pub time_in_seconds: u32,
    pub move_count: u32,
    /// Unix time of the first counted move.
    pub start_timestamp: Option<u64>,
    /// Top last.
    pub stock: Vec<Card>,
    /// Most recent first.
    pub waste: Vec<Card>,
    /// Foundation tops, one per foundation.
    pub foundations: Vec<Option<Card>>,
    pub lanes: Vec<Lane>,
    /// One flag per lane, or empty for "no locks".
    pub autoplay_locks: Vec<bool>,
}

impl Snapshot {
    /// Capture a board with zeroed counters and no locks.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            seed: None,
            time_in_seconds: 0,
            move_count: 0,
            start_timestamp: None,
            stock: board.stock().to_vec(),
            waste: board.waste().iter().copied().collect(),
            foundations: board.foundations().to_vec(),
            lanes: board.lanes().to_vec(),
            autoplay_locks: Vec::new(),
        }
    }

    // === Encodings ===

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| {
            warn!("rejected binary snapshot: {}", e);
            SnapshotError::from(e)
        })
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| {
            warn!("rejected JSON snapshot: {}", e);
            SnapshotError::from(e)
        })
    }

    // === Validation ===

    /// Check that the snapshot describes a reachable card distribution.
    ///
    /// Checks, in order: version, zone shapes, total card count, and that
    /// every card identity occurs once per deck. Foundation tops count for
    /// every card from the Ace up to the top.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        self.check().map_err(|e| {
            warn!("rejected snapshot: {}", e);
            e
        })
    }

    fn check(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(self.version));
        }
        if self.foundations.len() != FOUNDATION_COUNT {
            return Err(SnapshotError::FoundationCount(self.foundations.len()));
        }
        if self.lanes.len() != LANE_COUNT {
            return Err(SnapshotError::LaneCount(self.lanes.len()));
        }
        if !self.autoplay_locks.is_empty() && self.autoplay_locks.len() != LANE_COUNT {
            return Err(SnapshotError::LockCount(self.autoplay_locks.len()));
        }

        let mut counts: FxHashMap<Card, usize> = FxHashMap::default();
        let zone_cards = self
            .stock
            .iter()
            .chain(&self.waste)
            .chain(self.lanes.iter().flat_map(|l| l.stack.iter().chain(&l.cascade)))
            .copied();
        let foundation_cards = self.foundations.iter().flatten().flat_map(|top| top.run_from_ace());
        for card in zone_cards.chain(foundation_cards) {
            *counts.entry(card).or_insert(0) += 1;
        }

        let found: usize = counts.values().sum();
        if found != DECK_SIZE {
            return Err(SnapshotError::CardCount {
                expected: DECK_SIZE,
                found,
            });
        }
        for card in full_deck().into_iter().take(DECK_SIZE / DECK_COUNT) {
            let found = counts.get(&card).copied().unwrap_or(0);
            if found != DECK_COUNT {
                return Err(SnapshotError::CardMultiplicity {
                    card,
                    expected: DECK_COUNT,
                    found,
                });
            }
        }
        Ok(())
    }

    /// Validate and rebuild the board.
    pub fn to_board(&self) -> Result<Board, SnapshotError> {
        self.validate()?;

        let mut foundations = [None; FOUNDATION_COUNT];
        foundations.copy_from_slice(&self.foundations);
        let mut lanes: [Lane; LANE_COUNT] = Default::default();
        for (slot, lane) in lanes.iter_mut().zip(&self.lanes) {
            slot.clone_from(lane);
        }

        Ok(Board::from_parts(
            self.stock.clone(),
            self.waste.iter().copied().collect::<VecDeque<_>>(),
            foundations,
            lanes,
        ))
    }

    /// Autoplay lock flags, one per lane.
    #[must_use]
    pub fn locks(&self) -> [bool; LANE_COUNT] {
        let mut locks = [false; LANE_COUNT];
        for (slot, &locked) in locks.iter_mut().zip(&self.autoplay_locks) {
            *slot = locked;
        }
        locks
    }
}
