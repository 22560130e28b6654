//! Gravity cadence for the driver loop.
//!
//! The engine has no clock; the driver asks this clock whether a gravity tick
//! is due. Input-driven soft drops do not reset it, so gravity keeps its own
//! fixed rhythm no matter how often keys arrive.

/// Fixed-interval gravity timer over a caller-supplied millisecond clock.
#[derive(Debug, Clone)]
pub struct GravityClock {
    interval_ms: u64,
    last_tick_ms: u64,
}

impl GravityClock {
    /// Start the clock at `now_ms`; the first tick is due one interval later.
    pub fn new(interval_ms: u64, now_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            last_tick_ms: now_ms,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Decide whether a gravity tick is due.
    ///
    /// At most one tick is reported per call, and the interval restarts from
    /// `now_ms`, so a stalled loop does not replay a burst of missed ticks.
    pub fn should_tick(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_tick_ms) >= self.interval_ms {
            self.last_tick_ms = now_ms;
            return true;
        }
        false
    }

    /// Milliseconds until the next tick is due (0 when overdue).
    pub fn until_next(&self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.last_tick_ms);
        self.interval_ms.saturating_sub(elapsed)
    }
}
