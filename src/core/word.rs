//! Normalized words and syllable extraction.
//!
//! A `Word` is always lowercased and trimmed. Syllables are the tokens
//! between single spaces, so `"hà nội"` has the syllables `"hà"` and `"nội"`.
//!
//! ```
//! use word_chain::core::Word;
//!
//! let word = Word::normalize("  Hà Nội ").unwrap();
//! assert_eq!(word.as_str(), "hà nội");
//! assert_eq!(word.first_syllable(), "hà");
//! assert_eq!(word.last_syllable(), "nội");
//! ```

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Separator between syllables.
pub const SYLLABLE_SEPARATOR: char = ' ';

/// A normalized (lowercased, trimmed, non-empty) word.
///
/// Deserialization goes through `Word::normalize`, so a decoded word is
/// normalized like any other and blank text is refused.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Normalize raw text into a word.
    ///
    /// Returns `None` if nothing is left after lowercasing and trimming.
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        let lowered = raw.to_lowercase();
        let trimmed = lowered.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over syllables in order.
    pub fn syllables(&self) -> impl Iterator<Item = &str> {
        self.0.split(SYLLABLE_SEPARATOR)
    }

    /// Number of syllables.
    #[must_use]
    pub fn syllable_count(&self) -> usize {
        self.syllables().count()
    }

    /// First syllable. For a single-syllable word this is the word itself.
    #[must_use]
    pub fn first_syllable(&self) -> &str {
        self.0
            .split_once(SYLLABLE_SEPARATOR)
            .map_or(self.0.as_str(), |(first, _)| first)
    }

    /// Last syllable. For a single-syllable word this is the word itself.
    #[must_use]
    pub fn last_syllable(&self) -> &str {
        self.0
            .rsplit_once(SYLLABLE_SEPARATOR)
            .map_or(self.0.as_str(), |(_, last)| last)
    }

    /// Does this word's first syllable continue `previous`'s last syllable?
    #[must_use]
    pub fn chains_from(&self, previous: &Word) -> bool {
        previous.last_syllable() == self.first_syllable()
    }

    /// Consume the word, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Word {
    type Error = GameError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Word::normalize(&raw).ok_or(GameError::BlankWord)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
