//! Engine configuration.
//!
//! Hosts configure the engine at construction time:
//! - `SeedPolicy`: how each new deal is seeded
//! - `AutoPlayMode`: when the engine moves cards to foundations by itself
//! - `auto_flip`: whether uncovered face-down cards are turned over
//!
//! The defaults leave every automatic behaviour off, so each call into the
//! engine applies exactly one move.

use serde::{Deserialize, Serialize};

/// How the seed of each new game is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedPolicy {
    /// Every game uses the same seed and so the same deal.
    Fixed(u64),
    /// Game `n` (0-based, counted per engine) uses `start + n`.
    /// Reproducible, yet consecutive games differ.
    Sequential(u64),
    /// A fresh seed from system entropy for every game.
    #[default]
    Random,
}

impl SeedPolicy {
    /// The seed for the `game_number`-th game dealt by an engine,
    /// or `None` if it should come from entropy.
    #[must_use]
    pub fn seed_for(self, game_number: u64) -> Option<u64> {
        match self {
            SeedPolicy::Fixed(seed) => Some(seed),
            SeedPolicy::Sequential(start) => Some(start.wrapping_add(game_number)),
            SeedPolicy::Random => None,
        }
    }
}

/// When the engine plays cards to the foundations on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoPlayMode {
    /// Never auto play.
    #[default]
    Never,
    /// Only once the game is effectively won: no face-down cards, an empty
    /// stock, and at most one waste card.
    WhenWon,
    /// After every move.
    Always,
}

/// Complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed selection for new games.
    pub seed_policy: SeedPolicy,

    /// Foundation auto play mode.
    pub auto_play: AutoPlayMode,

    /// Turn over a lane's top stack card as soon as its cascade empties.
    pub auto_flip: bool,
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed policy.
    #[must_use]
    pub fn with_seed_policy(mut self, policy: SeedPolicy) -> Self {
        self.seed_policy = policy;
        self
    }

    /// Shorthand for `SeedPolicy::Fixed(seed)`.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_seed_policy(SeedPolicy::Fixed(seed))
    }

    /// Set the auto play mode.
    #[must_use]
    pub fn with_auto_play(mut self, mode: AutoPlayMode) -> Self {
        self.auto_play = mode;
        self
    }

    /// Enable or disable auto flip.
    #[must_use]
    pub fn with_auto_flip(mut self, enabled: bool) -> Self {
        self.auto_flip = enabled;
        self
    }

    /// Whether any automatic behaviour is enabled.
    #[must_use]
    pub fn has_automation(&self) -> bool {
        self.auto_flip || self.auto_play != AutoPlayMode::Never
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
