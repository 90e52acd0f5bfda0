//! Fixed-period timer driven by frame deltas.

use std::time::Duration;

/// Repeating timer that fires once per elapsed `interval`.
///
/// It never runs on its own: the owner feeds it frame deltas, so cancelling
/// it (or dropping the owner) guarantees no further fires.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: Duration,
    pending: Duration,
    armed: bool,
}

impl IntervalTimer {
    /// Create a disarmed timer. A zero interval is treated as one millisecond.
    pub fn new(interval: Duration) -> Self {
        let interval = if interval.is_zero() {
            Duration::from_millis(1)
        } else {
            interval
        };
        Self {
            interval,
            pending: Duration::ZERO,
            armed: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arm the timer, discarding any partial period
    pub fn arm(&mut self) {
        self.armed = true;
        self.pending = Duration::ZERO;
    }

    /// Disarm the timer. Idempotent.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.pending = Duration::ZERO;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Feed elapsed time and return how many periods completed
    pub fn advance(&mut self, delta: Duration) -> u32 {
        if !self.armed {
            return 0;
        }
        self.pending += delta;
        let fires = (self.pending.as_nanos() / self.interval.as_nanos()).min(u32::MAX as u128) as u32;
        self.pending -= self.interval * fires;
        fires
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disarmed_timer_never_fires() {
        let mut timer = IntervalTimer::new(Duration::from_millis(10));
        assert_eq!(timer.advance(Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_partial_periods_accumulate() {
        let mut timer = IntervalTimer::new(Duration::from_millis(10));
        timer.arm();
        assert_eq!(timer.advance(Duration::from_millis(6)), 0);
        assert_eq!(timer.advance(Duration::from_millis(6)), 1);
        assert_eq!(timer.advance(Duration::from_millis(28)), 3);
    }

    #[test]
    fn test_cancel_drops_pending_time() {
        let mut timer = IntervalTimer::new(Duration::from_millis(10));
        timer.arm();
        timer.advance(Duration::from_millis(9));
        timer.cancel();
        timer.cancel();
        assert_eq!(timer.advance(Duration::from_millis(9)), 0);
        timer.arm();
        assert_eq!(timer.advance(Duration::from_millis(9)), 0);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let timer = IntervalTimer::new(Duration::ZERO);
        assert_eq!(timer.interval(), Duration::from_millis(1));
    }
}
