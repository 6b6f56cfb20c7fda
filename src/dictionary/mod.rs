//! Word dictionary.
//!
//! The host reads its word list from wherever it keeps it and hands the
//! raw lines to `WordDictionary::load`. The dictionary never touches paths.

pub mod word_dictionary;

pub use word_dictionary::WordDictionary;
