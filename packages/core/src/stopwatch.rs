//! Single-slot stopwatch measured against the wall clock
//!
//! The stopwatch is either idle or running. While running it holds the
//! wall-clock instant it was started at; elapsed time is computed on
//! demand rather than accumulated.

use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;

/// Source of wall-clock time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-driven clock for tests and replays
///
/// Clones share the same underlying instant, so a test can keep one handle
/// and advance time seen by a stopwatch holding another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let step = chrono::Duration::from_std(by).unwrap_or(chrono::Duration::zero());
        self.now.set(self.now.get() + step);
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        self.now.set(instant);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::default())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Stopwatch with a running/idle state
///
/// `started_at` is `Some` exactly when the stopwatch is running.
#[derive(Debug, Clone)]
pub struct Stopwatch<C = SystemClock> {
    clock: C,
    started_at: Option<DateTime<Utc>>,
}

impl Stopwatch<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Stopwatch<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            started_at: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Wall-clock instant the current run began at
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Start timing. Returns `false` if already running, leaving the
    /// original reference time untouched.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        let now = self.clock.now();
        self.started_at = Some(now);
        debug!("Stopwatch started at {}", now);
        true
    }

    /// Stop timing and return the elapsed time, or `None` when idle
    pub fn stop(&mut self) -> Option<Duration> {
        let started_at = self.started_at.take()?;
        let elapsed = self.since(started_at);
        debug!("Stopwatch stopped after {:?}", elapsed);
        Some(elapsed)
    }

    /// Elapsed time of the current run, zero when idle
    pub fn elapsed_now(&self) -> Duration {
        self.started_at
            .map(|t| self.since(t))
            .unwrap_or_default()
    }

    /// Return to idle without producing an elapsed time
    pub fn reset(&mut self) {
        self.started_at = None;
    }

    fn since(&self, started_at: DateTime<Utc>) -> Duration {
        // A clock stepped backwards reads as no time passed
        (self.clock.now() - started_at).to_std().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual() -> (ManualClock, Stopwatch<ManualClock>) {
        let clock = ManualClock::default();
        let stopwatch = Stopwatch::with_clock(clock.clone());
        (clock, stopwatch)
    }

    #[test]
    fn test_idle_by_default() {
        let (_, stopwatch) = manual();
        assert!(!stopwatch.is_running());
        assert!(stopwatch.started_at().is_none());
        assert_eq!(stopwatch.elapsed_now(), Duration::ZERO);
    }

    #[test]
    fn test_start_then_elapsed_is_near_zero() {
        let mut stopwatch = Stopwatch::new();
        assert!(stopwatch.start());
        assert!(stopwatch.elapsed_now() < Duration::from_secs(1));
    }

    #[test]
    fn test_stop_returns_elapsed_and_goes_idle() {
        let (clock, mut stopwatch) = manual();
        stopwatch.start();
        clock.advance(Duration::from_secs(5));
        assert_eq!(stopwatch.elapsed_now(), Duration::from_secs(5));

        assert_eq!(stopwatch.stop(), Some(Duration::from_secs(5)));
        assert!(!stopwatch.is_running());
        assert!(stopwatch.started_at().is_none());
        assert_eq!(stopwatch.elapsed_now(), Duration::ZERO);
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let (_, mut stopwatch) = manual();
        assert_eq!(stopwatch.stop(), None);
        assert!(!stopwatch.is_running());
    }

    #[test]
    fn test_second_start_keeps_reference() {
        let (clock, mut stopwatch) = manual();
        assert!(stopwatch.start());
        let first = stopwatch.started_at();

        clock.advance(Duration::from_secs(3));
        assert!(!stopwatch.start());
        assert_eq!(stopwatch.started_at(), first);

        clock.advance(Duration::from_secs(2));
        assert_eq!(stopwatch.stop(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_clock_stepping_backwards_reads_zero() {
        let (clock, mut stopwatch) = manual();
        clock.set(DateTime::<Utc>::default() + chrono::Duration::hours(1));
        stopwatch.start();
        clock.set(DateTime::<Utc>::default());
        assert_eq!(stopwatch.elapsed_now(), Duration::ZERO);
        assert_eq!(stopwatch.stop(), Some(Duration::ZERO));
    }

    #[test]
    fn test_reset_discards_run() {
        let (clock, mut stopwatch) = manual();
        stopwatch.start();
        clock.advance(Duration::from_secs(30));
        stopwatch.reset();
        assert!(!stopwatch.is_running());
        assert_eq!(stopwatch.stop(), None);
    }
}
