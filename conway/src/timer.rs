// timer.rs - Cancellable repeating timer for generation ticks

use std::time::{Duration, Instant};

/// A single pending firing that can be cancelled or re-armed.
///
/// `poll` fires at most once per call and schedules the following firing one
/// period after the moment it fired, so a slow host never gets a burst of
/// catch-up ticks.
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    next_fire: Option<Instant>,
    period: Duration,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending firing and schedules a fresh one at `now + period`.
    pub fn arm(&mut self, now: Instant, period: Duration) {
        self.period = period;
        self.next_fire = Some(now + period);
    }

    pub fn cancel(&mut self) {
        self.next_fire = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_fire.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.next_fire
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the pending firing; zero when it is due.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next_fire.map(|at| at.saturating_duration_since(now))
    }

    /// Returns true when the pending firing is due and re-arms for the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_fire {
            Some(at) if now >= at => {
                self.next_fire = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}
