//! Game orchestration and the notification contract.
//!
//! ## Flow
//!
//! 1. `request_start` picks a starting word and resets the timer
//! 2. `submit_word` validates input; accepted words advance the chain,
//!    rejected words end the session
//! 3. `tick` counts the turn down and ends the session on timeout
//!
//! ## Example
//!
//! ```
//! use word_chain::{GameConfig, GameController, Notification, WordDictionary};
//!
//! let dict = WordDictionary::load(["hà nội"]).unwrap();
//! let mut game = GameController::new(dict, GameConfig::default().with_seed(1));
//! game.request_start().unwrap();
//!
//! let out = game.submit_word("con mèo").unwrap();
//! match &out[0] {
//!     Notification::GameOver { reason, .. } => {
//!         assert_eq!(reason, "Từ 'con mèo' không có trong từ điển!");
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

pub mod game;
pub mod notification;
pub mod display;

pub use game::{GameController, GameInput};
pub use notification::{GameOverReason, Notification, Notifications};
