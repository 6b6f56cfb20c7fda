//! Error types.
//!
//! Only system failures live here. A rejected word is a normal game
//! outcome reported through `ValidationResult`, never a `GameError`.

use thiserror::Error;

use crate::session::SessionStatus;

/// Errors raised by the game core.
#[derive(Error, Debug)]
pub enum GameError {
    /// No usable words were found when loading, or a pick was attempted
    /// on an empty dictionary.
    #[error("dictionary contains no words")]
    DictionaryEmpty,

    /// A gated operation was invoked in the wrong session status.
    ///
    /// Indicates a caller bug: the controller must check status first.
    #[error("cannot {operation} while session is {status}")]
    InvalidStateTransition {
        /// The rejected operation.
        operation: &'static str,
        /// Session status at the time of the call.
        status: SessionStatus,
    },

    /// Text that is empty after normalization was used as a word.
    #[error("word is blank after normalization")]
    BlankWord,

    /// A turn duration that is not a positive, finite number of seconds.
    #[error("turn duration must be a positive number of seconds, got {0}")]
    InvalidTurnDuration(f64),

    /// Reading dictionary lines failed.
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    pub(crate) fn invalid_transition(operation: &'static str, status: SessionStatus) -> Self {
        tracing::warn!(operation, %status, "invalid state transition");
        Self::InvalidStateTransition { operation, status }
    }
}

/// Result alias for game operations.
pub type GameResult<T> = Result<T, GameError>;
