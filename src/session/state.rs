//! Mutable state of one game session.
//!
//! ## Lifecycle
//!
//! `NotStarted` → `Running` → `Ended`. Ended is terminal; a new game
//! builds a fresh `SessionState` through `SessionState::start`.
//!
//! ## Invariants
//!
//! - While running, the last history entry is the current word
//! - History entries are distinct
//! - `score == history.len() - 1` once started
//!
//! History uses `im` persistent structures so that snapshots handed to a
//! view layer are O(1) clones.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameError, GameResult, RandomSource, Word};
use crate::dictionary::WordDictionary;

/// Session status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No game has been started.
    #[default]
    NotStarted,
    /// Words are being played.
    Running,
    /// The game is over. Terminal.
    Ended,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionStatus::NotStarted => "not started",
            SessionStatus::Running => "running",
            SessionStatus::Ended => "ended",
        };
        f.write_str(name)
    }
}

/// State of a single game session.
///
/// Serializable for view snapshots only. There is no `Deserialize`: a
/// session is only ever built by `start` and the transitions below.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SessionState {
    /// Words in play order.
    history: Vector<Word>,
    /// Same words as `history`, for membership checks.
    used: ImHashSet<Word>,
    score: u32,
    status: SessionStatus,
}

impl SessionState {
    /// Create a session that has not started.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a random word from `dictionary`.
    pub fn start<R: RandomSource + ?Sized>(
        dictionary: &WordDictionary,
        rng: &mut R,
    ) -> GameResult<Self> {
        let first = dictionary.random_word(rng)?.clone();
        info!(word = %first, "session started");

        Ok(Self {
            history: Vector::unit(first.clone()),
            used: ImHashSet::unit(first),
            score: 0,
            status: SessionStatus::Running,
        })
    }

    /// Append an accepted word and score a point.
    ///
    /// The caller validates the word first. Playing a word twice is
    /// rejected here as well so history can never hold duplicates.
    pub fn advance(&mut self, word: Word) -> GameResult<()> {
        if self.status != SessionStatus::Running {
            return Err(GameError::invalid_transition("advance the session", self.status));
        }
        if self.used.contains(&word) {
            return Err(GameError::invalid_transition("replay a used word", self.status));
        }

        debug!(word = %word, score = self.score + 1, "word accepted");
        self.used.insert(word.clone());
        self.history.push_back(word);
        self.score += 1;
        Ok(())
    }

    /// End the session. Ending an ended session is a no-op.
    ///
    /// Fails only if the session never started.
    pub fn end(&mut self) -> GameResult<()> {
        match self.status {
            SessionStatus::Running => {
                self.status = SessionStatus::Ended;
                info!(score = self.score, words = self.history.len(), "session ended");
                Ok(())
            }
            SessionStatus::Ended => Ok(()),
            SessionStatus::NotStarted => {
                Err(GameError::invalid_transition("end the session", self.status))
            }
        }
    }

    /// The word the next submission must chain from.
    #[must_use]
    pub fn current_word(&self) -> Option<&Word> {
        self.history.last()
    }

    /// Played words in order.
    #[must_use]
    pub fn history(&self) -> &Vector<Word> {
        &self.history
    }

    /// Played words as a set.
    #[must_use]
    pub fn used_words(&self) -> &ImHashSet<Word> {
        &self.used
    }

    /// Accepted submissions this session. The starting word scores nothing.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Is the session accepting words?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }
}
