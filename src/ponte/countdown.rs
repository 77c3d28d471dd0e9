//! Success-page auto-redirect countdown.
//!
//! Deterministic state value plus an async driver; the success template's
//! inline script mirrors the same contract in the browser. The navigation
//! side effect fires exactly once, whether the countdown reaches zero or the
//! user clicks the button first.

use std::time::Duration;
use tokio::time::interval;

/// Seconds the success page waits before re-opening the app on its own.
pub const REDIRECT_COUNTDOWN_SECS: u32 = 5;

#[derive(Debug)]
pub struct Countdown {
    remaining: u32,
    fired: bool,
}

impl Countdown {
    #[must_use]
    pub const fn new(from: u32) -> Self {
        Self {
            remaining: from,
            fired: false,
        }
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.fired
    }

    /// Advance one tick. Returns true when the redirect should fire now,
    /// which happens exactly once, on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.fired {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(1);

        if self.remaining == 0 {
            self.fired = true;

            return true;
        }

        false
    }

    /// Manual trigger (the "Open App" button). Idempotent: returns true only
    /// the first time, later calls and later ticks are no-ops.
    pub fn trigger(&mut self) -> bool {
        if self.fired {
            return false;
        }

        self.fired = true;

        true
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(REDIRECT_COUNTDOWN_SECS)
    }
}

/// Drive a countdown on a repeating timer, invoking `navigate` when it
/// fires. Cancelable by dropping the future (page teardown).
pub async fn run<F>(mut countdown: Countdown, period: Duration, mut navigate: F)
where
    F: FnMut(),
{
    let mut timer = interval(period);

    // the first tick of a tokio interval completes immediately
    timer.tick().await;

    while !countdown.is_finished() {
        timer.tick().await;

        if countdown.tick() {
            navigate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_counts_down_and_fires_at_zero() {
        let mut countdown = Countdown::new(5);

        for expected in [4, 3, 2, 1] {
            assert!(!countdown.tick());
            assert_eq!(countdown.remaining(), expected);
        }

        assert!(countdown.tick());
        assert!(countdown.is_finished());
    }

    #[test]
    fn test_never_fires_twice() {
        let mut countdown = Countdown::new(1);

        assert!(countdown.tick());
        assert!(!countdown.tick());
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_manual_trigger_is_idempotent() {
        let mut countdown = Countdown::new(5);

        assert!(countdown.trigger());
        assert!(!countdown.trigger());
        // ticking after a manual trigger never navigates again
        assert!(!countdown.tick());
        assert!(countdown.is_finished());
    }

    #[test]
    fn test_default_starts_at_five() {
        assert_eq!(Countdown::default().remaining(), REDIRECT_COUNTDOWN_SECS);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_navigates_once_after_five_seconds() {
        let fired = Arc::new(AtomicUsize::new(0));
        let observed = fired.clone();

        let start = tokio::time::Instant::now();

        run(
            Countdown::new(REDIRECT_COUNTDOWN_SECS),
            Duration::from_secs(1),
            move || {
                observed.fetch_add(1, Ordering::SeqCst);
            },
        )
        .await;

        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(start.elapsed(), Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_triggered_countdown_never_navigates() {
        let fired = Arc::new(AtomicUsize::new(0));
        let observed = fired.clone();

        let mut countdown = Countdown::new(REDIRECT_COUNTDOWN_SECS);
        // the button was clicked before the timer ran out
        assert!(countdown.trigger());

        run(countdown, Duration::from_secs(1), move || {
            observed.fetch_add(1, Ordering::SeqCst);
        })
        .await;

        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
