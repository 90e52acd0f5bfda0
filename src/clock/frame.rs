//! Start/stop frame scheduler.

use std::rc::Rc;
use std::time::Duration;

use super::time::TimeSource;

/// One discrete advance of a view, aligned to one display frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTick {
    /// Zero-based frame number since the clock was started
    pub index: u64,
    /// Time since the previous tick (zero on the first tick)
    pub delta: Duration,
    /// Time since the clock was started
    pub elapsed: Duration,
}

/// Per-view frame clock.
///
/// A stopped clock yields no ticks, which is what keeps a deactivated view
/// from ever being advanced again.
pub struct FrameClock {
    source: Rc<dyn TimeSource>,
    running: bool,
    started_at: Duration,
    last: Duration,
    next_index: u64,
}

impl FrameClock {
    pub fn new(source: Rc<dyn TimeSource>) -> Self {
        Self {
            source,
            running: false,
            started_at: Duration::ZERO,
            last: Duration::ZERO,
            next_index: 0,
        }
    }

    /// Start ticking. Starting a running clock does nothing.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        let now = self.source.now();
        self.running = true;
        self.started_at = now;
        self.last = now;
        self.next_index = 0;
    }

    /// Stop ticking. Safe to call any number of times.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of ticks produced since the last start
    pub fn frames(&self) -> u64 {
        self.next_index
    }

    /// Produce the next tick, or `None` while stopped
    pub fn tick(&mut self) -> Option<FrameTick> {
        if !self.running {
            return None;
        }
        let now = self.source.now();
        let tick = FrameTick {
            index: self.next_index,
            delta: now.saturating_sub(self.last),
            elapsed: now.saturating_sub(self.started_at),
        };
        self.last = now;
        self.next_index += 1;
        Some(tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn test_stopped_clock_yields_nothing() {
        let mut clock = FrameClock::new(Rc::new(ManualClock::new()));
        assert!(clock.tick().is_none());
        clock.start();
        assert!(clock.tick().is_some());
        clock.stop();
        clock.stop();
        assert!(clock.tick().is_none());
    }

    #[test]
    fn test_tick_deltas_follow_source() {
        let time = ManualClock::new();
        let mut clock = FrameClock::new(Rc::new(time.clone()));
        time.advance(Duration::from_secs(3));
        clock.start();

        let first = clock.tick().unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(first.delta, Duration::ZERO);

        time.advance(Duration::from_millis(16));
        let second = clock.tick().unwrap();
        assert_eq!(second.index, 1);
        assert_eq!(second.delta, Duration::from_millis(16));
        assert_eq!(second.elapsed, Duration::from_millis(16));
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn test_restart_resets_frame_index() {
        let mut clock = FrameClock::new(Rc::new(ManualClock::new()));
        clock.start();
        clock.tick();
        clock.tick();
        clock.stop();
        clock.start();
        assert_eq!(clock.tick().unwrap().index, 0);
    }
}
