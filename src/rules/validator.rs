//! Chain rule validation.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. The candidate must be in the dictionary
//! 2. The candidate must not have been played this session
//! 3. The candidate's first syllable must equal the current word's last
//!
//! Validation is pure: it reads the dictionary and history and returns a
//! verdict. Acting on the verdict is the controller's job.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use crate::core::Word;
use crate::dictionary::WordDictionary;

/// Verdict for a single submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    /// The word continues the chain.
    Accepted,
    /// The word is not in the dictionary.
    RejectedNotInDictionary,
    /// The word was already played this session.
    RejectedAlreadyUsed,
    /// The word does not start with the required syllable.
    RejectedSyllableMismatch {
        /// Last syllable of the current word.
        expected: String,
        /// First syllable of the submitted word.
        got: String,
    },
}

impl ValidationResult {
    /// Was the submission accepted?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted)
    }
}

/// Validates submissions against a dictionary.
#[derive(Clone, Copy, Debug)]
pub struct ChainValidator<'a> {
    dictionary: &'a WordDictionary,
}

impl<'a> ChainValidator<'a> {
    /// Create a validator over `dictionary`.
    #[must_use]
    pub fn new(dictionary: &'a WordDictionary) -> Self {
        Self { dictionary }
    }

    /// Decide whether `candidate` may follow `current`.
    #[must_use]
    pub fn validate(
        &self,
        candidate: &Word,
        current: &Word,
        history: &ImHashSet<Word>,
    ) -> ValidationResult {
        if !self.dictionary.contains_word(candidate) {
            return ValidationResult::RejectedNotInDictionary;
        }

        if history.contains(candidate) {
            return ValidationResult::RejectedAlreadyUsed;
        }

        if !candidate.chains_from(current) {
            return ValidationResult::RejectedSyllableMismatch {
                expected: current.last_syllable().to_string(),
                got: candidate.first_syllable().to_string(),
            };
        }

        ValidationResult::Accepted
    }
}
