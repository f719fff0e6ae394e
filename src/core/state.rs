//! Game progression: status, clock, and end-of-game summary.
//!
//! ## GameStatus
//!
//! `InProgress` → `Won` is the only transition. There is no automatic loss;
//! a game stays in progress until won or abandoned by the host.
//!
//! ## GameClock
//!
//! Accumulated play time in whole seconds. The engine never runs a timer
//! thread: the host calls `tick` from its own clock, and ticks only count
//! while the clock is running.

use serde::{Deserialize, Serialize};

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// Every card is on a foundation. Terminal.
    Won,
}

impl GameStatus {
    #[must_use]
    pub fn is_won(self) -> bool {
        self == GameStatus::Won
    }
}

/// Elapsed play time with pause/resume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    seconds: u32,
    running: bool,
}

impl GameClock {
    /// A stopped clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A stopped clock at `seconds`.
    #[must_use]
    pub fn at(seconds: u32) -> Self {
        Self {
            seconds,
            running: false,
        }
    }

    /// Accumulated seconds.
    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Add `seconds` if running. Returns whether time advanced.
    pub fn tick(&mut self, seconds: u32) -> bool {
        if !self.running || seconds == 0 {
            return false;
        }
        self.seconds = self.seconds.saturating_add(seconds);
        true
    }
}

/// Read-only summary handed to statistics collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub won: bool,
    pub duration_seconds: u32,
    pub move_count: u32,
    /// Host-supplied Unix time of the first counted move, if any.
    pub start_timestamp: Option<u64>,
    /// Seed of the deal, if known.
    pub seed: Option<u64>,
}
