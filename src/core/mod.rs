//! Core types: words, randomness, configuration, errors.
//!
//! Everything else in the crate is built from these pieces.

pub mod word;
pub mod rng;
pub mod config;
pub mod error;

pub use word::{Word, SYLLABLE_SEPARATOR};
pub use rng::{RandomSource, SeededRng, SeededRngState};
pub use config::{GameConfig, DEFAULT_TURN_DURATION};
pub use error::{GameError, GameResult};
