//! The immutable set of playable words.

use std::io::BufRead;

use rustc_hash::FxHashSet;
use tracing::info;

use crate::core::{GameError, GameResult, RandomSource, Word};

/// Dictionary of valid words.
///
/// Built once from raw lines and never mutated afterwards. Words keep
/// their first-seen order so that a seeded pick is reproducible.
///
/// ## Example
///
/// ```
/// use word_chain::dictionary::WordDictionary;
///
/// let dict = WordDictionary::load(["Hà Nội", "nội thất", "", "HÀ NỘI"]).unwrap();
///
/// assert_eq!(dict.len(), 2);
/// assert!(dict.contains(" hà nội "));
/// assert!(!dict.contains("con mèo"));
/// ```
#[derive(Clone, Debug)]
pub struct WordDictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordDictionary {
    /// Build a dictionary from raw lines.
    ///
    /// Each line is lowercased and trimmed; blank results are dropped and
    /// duplicates collapse. Fails if no word survives.
    pub fn load<I, S>(lines: I) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();
        let mut blank = 0usize;
        let mut duplicates = 0usize;

        for line in lines {
            let Some(word) = Word::normalize(line.as_ref()) else {
                blank += 1;
                continue;
            };
            if index.insert(word.clone()) {
                words.push(word);
            } else {
                duplicates += 1;
            }
        }

        if words.is_empty() {
            return Err(GameError::DictionaryEmpty);
        }

        info!(words = words.len(), blank, duplicates, "loaded dictionary");
        Ok(Self { words, index })
    }

    /// Build a dictionary from a line-oriented reader, one word per line.
    pub fn from_reader<R: BufRead>(reader: R) -> GameResult<Self> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Self::load(lines)
    }

    /// Check membership after normalizing `word`.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::normalize(word).is_some_and(|w| self.index.contains(&w))
    }

    /// Check membership of an already normalized word.
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Pick a word uniformly at random.
    ///
    /// Consumes exactly one draw from `rng`.
    pub fn random_word<R: RandomSource + ?Sized>(&self, rng: &mut R) -> GameResult<&Word> {
        if self.words.is_empty() {
            return Err(GameError::DictionaryEmpty);
        }
        let idx = rng.pick_index(self.words.len());
        self.words.get(idx).ok_or(GameError::DictionaryEmpty)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a loaded dictionary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over words in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
