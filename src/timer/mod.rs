//! Turn countdown driven by an external tick source.

pub mod turn_timer;

pub use turn_timer::{TimerEvent, TurnTimer};
