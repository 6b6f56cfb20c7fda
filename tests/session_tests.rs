//! Dictionary, validator and session integration tests.
//!
//! These exercise the building blocks together without the controller,
//! the way an alternative front end might compose them.

use word_chain::{
    ChainValidator, GameError, RandomSource, SeededRng, SessionState, SessionStatus,
    ValidationResult, Word, WordDictionary,
};
use word_chain::controller::display;

fn word(s: &str) -> Word {
    Word::normalize(s).unwrap()
}

struct FirstWord;

impl RandomSource for FirstWord {
    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}

// =============================================================================
// Dictionary Tests
// =============================================================================

/// Test that an all-blank word list cannot build a dictionary.
#[test]
fn test_all_blank_dictionary() {
    let result = WordDictionary::load(vec!["", " ", "\t", "\r"]);
    assert!(matches!(result, Err(GameError::DictionaryEmpty)));
}

/// Test that mixed input keeps only distinct normalized words.
#[test]
fn test_mixed_dictionary() {
    let lines = vec!["Hà Nội", "", "  ", "hà nội", "NỘI THẤT ", "thất bại", "Thất Bại"];
    let dict = WordDictionary::load(lines).unwrap();

    let words: Vec<_> = dict.iter().map(Word::as_str).collect();
    assert_eq!(words, vec!["hà nội", "nội thất", "thất bại"]);
}

/// Test loading from an in-memory file.
#[test]
fn test_dictionary_from_reader() {
    let file = std::io::Cursor::new("Hà Nội\n\nNội thất\n");
    let dict = WordDictionary::from_reader(file).unwrap();
    assert_eq!(dict.len(), 2);
}

// =============================================================================
// Validator Tests
// =============================================================================

/// Test the canonical chain scenario from start to every rejection kind.
#[test]
fn test_validation_scenario() {
    let dict = WordDictionary::load(["hà nội", "nội thất", "thất bại"]).unwrap();
    let validator = ChainValidator::new(&dict);

    let mut session = SessionState::start(&dict, &mut FirstWord).unwrap();
    assert_eq!(session.current_word(), Some(&word("hà nội")));

    let check = |session: &SessionState, text: &str| {
        validator.validate(
            &word(text),
            session.current_word().unwrap(),
            session.used_words(),
        )
    };

    assert_eq!(check(&session, "nội thất"), ValidationResult::Accepted);
    session.advance(word("nội thất")).unwrap();

    assert_eq!(check(&session, "nội thất"), ValidationResult::RejectedAlreadyUsed);
    assert_eq!(check(&session, "xyz"), ValidationResult::RejectedNotInDictionary);
    assert_eq!(check(&session, "thất bại"), ValidationResult::Accepted);
}

/// Test that a mismatch reports the expected and received syllables.
#[test]
fn test_mismatch_details() {
    let dict = WordDictionary::load(["hà nội", "con mèo"]).unwrap();
    let validator = ChainValidator::new(&dict);
    let session = SessionState::start(&dict, &mut FirstWord).unwrap();

    let result = validator.validate(
        &word("con mèo"),
        session.current_word().unwrap(),
        session.used_words(),
    );
    assert_eq!(
        result,
        ValidationResult::RejectedSyllableMismatch {
            expected: "nội".to_string(),
            got: "con".to_string(),
        }
    );
}

/// Test that differently-cased input validates identically.
#[test]
fn test_validation_case_insensitive() {
    let dict = WordDictionary::load(["hà nội", "nội thất"]).unwrap();
    let validator = ChainValidator::new(&dict);
    let session = SessionState::start(&dict, &mut FirstWord).unwrap();
    let current = session.current_word().unwrap();

    let a = validator.validate(&word("Nội Thất"), current, session.used_words());
    let b = validator.validate(&word("nội thất"), current, session.used_words());
    assert_eq!(a, b);
}

/// Test single-syllable words chain from themselves.
#[test]
fn test_single_syllable_chain() {
    let dict = WordDictionary::load(["mèo", "mèo con", "con"]).unwrap();
    let validator = ChainValidator::new(&dict);
    let mut session = SessionState::start(&dict, &mut FirstWord).unwrap();

    let current = session.current_word().unwrap().clone();
    assert_eq!(
        validator.validate(&word("mèo con"), &current, session.used_words()),
        ValidationResult::Accepted
    );
    session.advance(word("mèo con")).unwrap();

    let current = session.current_word().unwrap().clone();
    assert_eq!(
        validator.validate(&word("con"), &current, session.used_words()),
        ValidationResult::Accepted
    );
}

// =============================================================================
// Session Tests
// =============================================================================

/// Test score tracks history length through a session.
#[test]
fn test_score_matches_history() {
    let dict = WordDictionary::load(["a b", "b c", "c d", "d e"]).unwrap();
    let mut session = SessionState::start(&dict, &mut FirstWord).unwrap();
    assert_eq!(session.score(), 0);

    for text in ["b c", "c d", "d e"] {
        session.advance(word(text)).unwrap();
        assert_eq!(session.score() as usize, session.history().len() - 1);
    }

    assert_eq!(display::chain_text(session.history()), "A b → B c → C d → D e");
}

/// Test ending is terminal and idempotent.
#[test]
fn test_end_is_terminal() {
    let dict = WordDictionary::load(["a b", "b c"]).unwrap();
    let mut session = SessionState::start(&dict, &mut SeededRng::new(3)).unwrap();

    session.end().unwrap();
    session.end().unwrap();
    assert_eq!(session.status(), SessionStatus::Ended);

    assert!(session.advance(word("b c")).is_err());
    assert_eq!(session.history().len(), 1);
}

// =============================================================================
// Serialization Tests
// =============================================================================

/// Test decoded words are normalized before they reach the rules.
#[test]
fn test_decoded_words_normalized() {
    let dict = WordDictionary::load(["hà nội", "nội thất"]).unwrap();
    let words: Vec<Word> = serde_json::from_str(r#"["HÀ NỘI", " Nội Thất "]"#).unwrap();
    assert_eq!(words, vec![word("hà nội"), word("nội thất")]);

    let validator = ChainValidator::new(&dict);
    let used = im::HashSet::unit(words[0].clone());
    assert_eq!(validator.validate(&words[1], &words[0], &used), ValidationResult::Accepted);

    assert!(serde_json::from_str::<Vec<Word>>(r#"["hà nội", "  "]"#).is_err());
}

/// Test a session snapshot serializes for a view layer.
#[test]
fn test_session_snapshot_json() {
    let dict = WordDictionary::load(["a b", "b c"]).unwrap();
    let mut session = SessionState::start(&dict, &mut FirstWord).unwrap();
    session.advance(word("b c")).unwrap();
    session.end().unwrap();

    let json = serde_json::to_value(&session).unwrap();
    assert_eq!(json["history"], serde_json::json!(["a b", "b c"]));
    assert_eq!(json["score"], 1);
    assert_eq!(json["status"], "Ended");
}

// =============================================================================
// Module Path Tests
// =============================================================================

/// Test types are reachable through their defining modules.
#[test]
fn test_module_paths() {
    use word_chain::session::state::SessionState as StateByPath;
    use word_chain::timer::turn_timer::{TimerEvent, TurnTimer};

    let dict = word_chain::dictionary::word_dictionary::WordDictionary::load(["a b"]).unwrap();
    let session = StateByPath::start(&dict, &mut FirstWord).unwrap();
    assert_eq!(session.status(), SessionStatus::Running);

    let mut timer = TurnTimer::new(1.0);
    assert_eq!(timer.tick(1.0), TimerEvent::Expired);
}
