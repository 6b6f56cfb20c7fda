//! Session orchestration.
//!
//! `GameController` owns the dictionary, the random source, the session
//! and the turn timer. The host drives it with three inputs:
//!
//! - `request_start` when the player presses start
//! - `submit_word` when the player submits text
//! - `tick` once per frame with the elapsed seconds
//!
//! Every call returns the notifications it produced. Calls must be
//! serialized by the host; the controller does no locking.

use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use tracing::{info, instrument, warn};

use super::display::countdown_display;
use super::notification::{GameOverReason, Notification, Notifications};
use crate::core::{GameConfig, GameError, GameResult, RandomSource, SeededRng, Word};
use crate::dictionary::WordDictionary;
use crate::rules::ChainValidator;
use crate::session::{SessionState, SessionStatus};
use crate::timer::{TimerEvent, TurnTimer};

/// Input from the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameInput {
    /// Begin a new session.
    RequestStart,
    /// Raw text typed by the player.
    SubmitWord(String),
    /// Seconds elapsed since the previous tick.
    Tick(f64),
}

/// Drives a word chain game.
///
/// ## Example
///
/// ```
/// use word_chain::{GameConfig, GameController, Notification, WordDictionary};
///
/// let dict = WordDictionary::load(["hà nội", "nội thất"]).unwrap();
/// let mut game = GameController::new(dict, GameConfig::default().with_seed(7));
///
/// let out = game.request_start().unwrap();
/// assert!(matches!(out[0], Notification::TurnUpdated { .. }));
/// assert!(game.is_running());
/// ```
#[derive(Clone, Debug)]
pub struct GameController<R = SeededRng> {
    dictionary: WordDictionary,
    config: GameConfig,
    rng: R,
    session: SessionState,
    timer: TurnTimer,
}

impl GameController<SeededRng> {
    /// Create a controller seeded from `config`.
    ///
    /// Without a configured seed, one is drawn from entropy.
    #[must_use]
    pub fn new(dictionary: WordDictionary, config: GameConfig) -> Self {
        let rng = config.seed().map_or_else(SeededRng::from_entropy, SeededRng::new);
        info!(seed = rng.seed(), words = dictionary.len(), "game controller created");
        Self::with_rng(dictionary, config, rng)
    }
}

impl<R: RandomSource> GameController<R> {
    /// Create a controller with an injected random source.
    #[must_use]
    pub fn with_rng(dictionary: WordDictionary, config: GameConfig, rng: R) -> Self {
        let timer = TurnTimer::new(config.turn_duration());
        Self {
            dictionary,
            config,
            rng,
            session: SessionState::new(),
            timer,
        }
    }

    /// Dispatch a host input.
    pub fn handle(&mut self, input: GameInput) -> GameResult<Notifications> {
        match input {
            GameInput::RequestStart => self.request_start(),
            GameInput::SubmitWord(text) => self.submit_word(&text),
            GameInput::Tick(delta) => self.tick(delta),
        }
    }

    /// Start a new session.
    ///
    /// Valid before the first game and after a game ends.
    #[instrument(skip(self))]
    pub fn request_start(&mut self) -> GameResult<Notifications> {
        if self.session.is_running() {
            return Err(GameError::invalid_transition("start a session", self.session.status()));
        }

        let session = SessionState::start(&self.dictionary, &mut self.rng)?;
        let Some(word) = session.current_word().cloned() else {
            return Err(GameError::DictionaryEmpty);
        };

        self.session = session;
        self.timer.reset();

        Ok(smallvec![
            Notification::TurnUpdated { word },
            Notification::ScoreUpdated { score: 0 },
        ])
    }

    /// Submit raw text as the next word.
    ///
    /// Blank text is ignored. A rejected word ends the session with a
    /// `GameOver` notification; that is not an error.
    #[instrument(skip(self))]
    pub fn submit_word(&mut self, text: &str) -> GameResult<Notifications> {
        if !self.session.is_running() {
            return Err(GameError::invalid_transition("submit a word", self.session.status()));
        }

        let Some(candidate) = Word::normalize(text) else {
            return Ok(Notifications::new());
        };

        let Some(current) = self.session.current_word() else {
            return Err(GameError::invalid_transition("submit a word", self.session.status()));
        };
        let verdict = ChainValidator::new(&self.dictionary).validate(
            &candidate,
            current,
            self.session.used_words(),
        );

        if let Some(cause) = GameOverReason::from_rejection(&candidate, &verdict) {
            warn!(word = %candidate, ?verdict, "word rejected");
            return self.finish(cause);
        }

        self.session.advance(candidate.clone())?;
        self.timer.reset();

        Ok(smallvec![
            Notification::TurnUpdated { word: candidate },
            Notification::ScoreUpdated { score: self.session.score() },
        ])
    }

    /// Advance the turn timer by `delta_seconds`.
    ///
    /// Ends the session when the timer runs out.
    pub fn tick(&mut self, delta_seconds: f64) -> GameResult<Notifications> {
        if !self.session.is_running() {
            return Err(GameError::invalid_transition("tick the timer", self.session.status()));
        }

        match self.timer.tick(delta_seconds) {
            TimerEvent::Running => Ok(smallvec![Notification::TimeUpdated {
                seconds_remaining_display: countdown_display(self.timer.remaining()),
            }]),
            TimerEvent::Expired => self.finish(GameOverReason::Timeout),
            TimerEvent::AlreadyExpired => Ok(Notifications::new()),
        }
    }

    fn finish(&mut self, cause: GameOverReason) -> GameResult<Notifications> {
        self.session.end()?;
        info!(reason = %cause, score = self.session.score(), "game over");
        Ok(smallvec![Notification::game_over(cause, self.session.score())])
    }

    /// The current (or last) session.
    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Session status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    /// Is a session accepting words?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// The turn timer.
    #[must_use]
    pub fn timer(&self) -> &TurnTimer {
        &self.timer
    }

    /// The dictionary in use.
    #[must_use]
    pub fn dictionary(&self) -> &WordDictionary {
        &self.dictionary
    }

    /// The configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The random source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }
}
