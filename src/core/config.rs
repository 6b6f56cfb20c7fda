//! Game configuration.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Default seconds allowed per turn.
pub const DEFAULT_TURN_DURATION: f64 = 10.0;

/// Session configuration.
///
/// Fields are private so every config passes the same checks, whether it
/// comes from the builder or from a deserialized file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    /// Seconds allowed per turn (default: 10.0).
    /// The timer resets to this value after every accepted word.
    turn_duration: f64,

    /// Seed for starting-word selection.
    /// `None` draws a seed from entropy when the controller is built.
    seed: Option<u64>,
}

/// Unchecked wire form of `GameConfig`.
#[derive(Deserialize)]
#[serde(default)]
struct RawGameConfig {
    turn_duration: f64,
    seed: Option<u64>,
}

impl Default for RawGameConfig {
    fn default() -> Self {
        Self {
            turn_duration: DEFAULT_TURN_DURATION,
            seed: None,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        if !is_valid_duration(raw.turn_duration) {
            return Err(GameError::InvalidTurnDuration(raw.turn_duration));
        }
        Ok(Self {
            turn_duration: raw.turn_duration,
            seed: raw.seed,
        })
    }
}

fn is_valid_duration(seconds: f64) -> bool {
    seconds.is_finite() && seconds > 0.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_duration: DEFAULT_TURN_DURATION,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the turn duration in seconds.
    #[must_use]
    pub fn with_turn_duration(mut self, seconds: f64) -> Self {
        assert!(
            is_valid_duration(seconds),
            "Turn duration must be a positive number of seconds"
        );
        self.turn_duration = seconds;
        self
    }

    /// Fix the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seconds allowed per turn.
    #[must_use]
    pub fn turn_duration(&self) -> f64 {
        self.turn_duration
    }

    /// Configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
