use std::time::{Duration, Instant};

/// Fixed-rate tick pacing owned by the driving loop.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    interval: Duration,
    last_tick: Instant,
}

impl TickClock {
    /// Creates a clock ticking `rate_hz` times per second, starting at `now`.
    ///
    /// A zero rate is treated as one tick per second.
    #[must_use]
    pub fn new(rate_hz: u32, now: Instant) -> Self {
        Self {
            interval: interval_for_rate(rate_hz),
            last_tick: now,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true once a full interval has passed since the last tick.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_tick) >= self.interval
    }

    /// Records that a tick ran at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.last_tick = now;
    }

    /// Time left until the next tick is due; zero when already due.
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Duration {
        (self.last_tick + self.interval).saturating_duration_since(now)
    }
}

fn interval_for_rate(rate_hz: u32) -> Duration {
    Duration::from_secs(1) / rate_hz.max(1)
}
