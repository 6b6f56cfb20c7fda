//! Game session state and its transitions.

pub mod state;

pub use state::{SessionState, SessionStatus};
