//! # word-chain
//!
//! Engine for a turn-based word chain game: each new word must start with
//! the last syllable of the previous one, exist in the dictionary, and not
//! repeat within the session. A countdown ends the session on timeout.
//!
//! ## Design Principles
//!
//! 1. **No I/O**: The host supplies dictionary lines, input events and
//!    elapsed time. The engine never reads files or clocks.
//!
//! 2. **Notifications, not rendering**: Every operation returns the
//!    `Notification`s it produced; a view layer renders them.
//!
//! 3. **Deterministic**: The only randomness is the starting word, drawn
//!    from an injectable `RandomSource`. A fixed seed replays a session.
//!
//! ## Modules
//!
//! - `core`: Words, randomness, configuration, errors
//! - `dictionary`: The set of playable words
//! - `rules`: Chain rule validation
//! - `session`: Per-game state and transitions
//! - `timer`: Turn countdown
//! - `controller`: Orchestration and the notification contract

pub mod core;
pub mod dictionary;
pub mod rules;
pub mod session;
pub mod timer;
pub mod controller;

// Re-export commonly used types
pub use crate::core::{
    Word,
    RandomSource, SeededRng, SeededRngState,
    GameConfig, GameError, GameResult,
};

pub use crate::dictionary::WordDictionary;

pub use crate::rules::{ChainValidator, ValidationResult};

pub use crate::session::{SessionState, SessionStatus};

pub use crate::timer::{TimerEvent, TurnTimer};

pub use crate::controller::{
    GameController, GameInput,
    GameOverReason, Notification, Notifications,
};
