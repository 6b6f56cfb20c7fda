//! Outbound notifications for the view layer.
//!
//! The controller never renders anything. Each operation returns the
//! notifications it produced, in order, and the host's view layer turns
//! them into text fields, panels, sounds, and so on.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Word;
use crate::rules::ValidationResult;

/// Notifications from one controller call.
/// Inline capacity covers the common accept case (turn + score).
pub type Notifications = SmallVec<[Notification; 2]>;

/// Why a session ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// The submitted word is not in the dictionary.
    NotInDictionary {
        /// Submitted word.
        word: Word,
    },
    /// The submitted word was already played.
    AlreadyUsed {
        /// Submitted word.
        word: Word,
    },
    /// The submitted word starts with the wrong syllable.
    SyllableMismatch {
        /// Submitted word.
        word: Word,
        /// Syllable it had to start with.
        expected: String,
    },
    /// The turn timer ran out.
    Timeout,
}

impl GameOverReason {
    /// Map a rejection to a reason. Returns `None` for `Accepted`.
    #[must_use]
    pub fn from_rejection(word: &Word, result: &ValidationResult) -> Option<Self> {
        let reason = match result {
            ValidationResult::Accepted => return None,
            ValidationResult::RejectedNotInDictionary => {
                GameOverReason::NotInDictionary { word: word.clone() }
            }
            ValidationResult::RejectedAlreadyUsed => {
                GameOverReason::AlreadyUsed { word: word.clone() }
            }
            ValidationResult::RejectedSyllableMismatch { expected, .. } => {
                GameOverReason::SyllableMismatch {
                    word: word.clone(),
                    expected: expected.clone(),
                }
            }
        };
        Some(reason)
    }
}

impl std::fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOverReason::NotInDictionary { word } => {
                write!(f, "Từ '{word}' không có trong từ điển!")
            }
            GameOverReason::AlreadyUsed { word } => {
                write!(f, "Từ '{word}' đã được sử dụng!")
            }
            GameOverReason::SyllableMismatch { word, expected } => {
                write!(f, "Từ '{word}' phải bắt đầu bằng '{expected}'!")
            }
            GameOverReason::Timeout => f.write_str("Hết giờ!"),
        }
    }
}

/// A state change the view layer should reflect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// A new current word is in play.
    TurnUpdated {
        /// The word to chain from.
        word: Word,
    },
    /// The score changed.
    ScoreUpdated {
        /// New score.
        score: u32,
    },
    /// Countdown text should change.
    TimeUpdated {
        /// Whole seconds left, rounded up.
        seconds_remaining_display: u32,
    },
    /// The session ended.
    GameOver {
        /// Human-readable reason.
        reason: String,
        /// Structured cause behind `reason`.
        cause: GameOverReason,
        /// Score when the session ended.
        final_score: u32,
    },
}

impl Notification {
    /// Build a game-over notification from its cause.
    #[must_use]
    pub fn game_over(cause: GameOverReason, final_score: u32) -> Self {
        Notification::GameOver {
            reason: cause.to_string(),
            cause,
            final_score,
        }
    }

    /// Is this the end of the session?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, Notification::GameOver { .. })
    }
}
