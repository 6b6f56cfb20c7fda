//! Per-turn countdown.
//!
//! The timer owns no clock. The host calls `tick` with the elapsed
//! seconds once per frame and reacts to the returned `TimerEvent`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::DEFAULT_TURN_DURATION;

/// Outcome of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Time remains in the turn.
    Running,
    /// Time ran out on this tick. Returned once per turn.
    Expired,
    /// Time had already run out before this tick.
    AlreadyExpired,
}

/// Countdown for the active turn.
///
/// Only `TurnTimer::new` builds one, so `remaining` stays within
/// `0..=duration`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TurnTimer {
    duration: f64,
    remaining: f64,
    expired: bool,
}

impl Default for TurnTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_DURATION)
    }
}

impl TurnTimer {
    /// Create a timer that starts full.
    #[must_use]
    pub fn new(duration: f64) -> Self {
        assert!(
            duration.is_finite() && duration > 0.0,
            "Turn duration must be a positive number of seconds"
        );
        Self {
            duration,
            remaining: duration,
            expired: false,
        }
    }

    /// Refill the timer for a new turn.
    pub fn reset(&mut self) {
        debug!(duration = self.duration, "turn timer reset");
        self.remaining = self.duration;
        self.expired = false;
    }

    /// Advance the countdown by `delta_seconds`.
    ///
    /// Negative or NaN deltas count as no elapsed time.
    pub fn tick(&mut self, delta_seconds: f64) -> TimerEvent {
        if self.expired {
            return TimerEvent::AlreadyExpired;
        }

        let delta = delta_seconds.max(0.0);
        self.remaining = (self.remaining - delta).max(0.0);

        if self.remaining <= 0.0 {
            self.expired = true;
            TimerEvent::Expired
        } else {
            TimerEvent::Running
        }
    }

    /// Raw seconds left, never negative.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// Seconds per turn.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Has the current turn run out?
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_duration() {
        let timer = TurnTimer::default();
        assert_eq!(timer.remaining(), 10.0);
        assert_eq!(timer.duration(), 10.0);
        assert!(!timer.is_expired());
    }

    #[test]
    fn test_tick_running() {
        let mut timer = TurnTimer::new(10.0);
        assert_eq!(timer.tick(2.5), TimerEvent::Running);
        assert_eq!(timer.remaining(), 7.5);
    }

    #[test]
    fn test_expires_exactly_once() {
        let mut timer = TurnTimer::new(10.0);
        assert_eq!(timer.tick(10.0), TimerEvent::Expired);
        assert_eq!(timer.remaining(), 0.0);
        assert_eq!(timer.tick(1.0), TimerEvent::AlreadyExpired);
        assert_eq!(timer.tick(0.0), TimerEvent::AlreadyExpired);
    }

    #[test]
    fn test_remaining_floored_at_zero() {
        let mut timer = TurnTimer::new(1.0);
        assert_eq!(timer.tick(5.0), TimerEvent::Expired);
        assert_eq!(timer.remaining(), 0.0);
    }

    #[test]
    fn test_many_small_ticks() {
        let mut timer = TurnTimer::new(1.0);
        let mut expired = 0;
        for _ in 0..20 {
            if timer.tick(0.1) == TimerEvent::Expired {
                expired += 1;
            }
        }
        assert_eq!(expired, 1);
    }

    #[test]
    fn test_negative_delta_ignored() {
        let mut timer = TurnTimer::new(10.0);
        assert_eq!(timer.tick(-3.0), TimerEvent::Running);
        assert_eq!(timer.remaining(), 10.0);
        assert_eq!(timer.tick(f64::NAN), TimerEvent::Running);
        assert_eq!(timer.remaining(), 10.0);
    }

    #[test]
    fn test_reset_after_expiry() {
        let mut timer = TurnTimer::new(3.0);
        timer.tick(3.0);
        timer.reset();

        assert!(!timer.is_expired());
        assert_eq!(timer.remaining(), 3.0);
        assert_eq!(timer.tick(1.0), TimerEvent::Running);
    }

    #[test]
    #[should_panic(expected = "Turn duration must be a positive")]
    fn test_zero_duration_panics() {
        let _ = TurnTimer::new(0.0);
    }
}
