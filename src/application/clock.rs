use std::time::Duration;

/// SimulationClock gates how often the automaton advances.
/// It owns the interval/elapsed/running state that the original prototype of
/// this app kept in process-wide globals.
#[derive(Clone, Copy, Debug)]
pub struct SimulationClock {
    interval: Duration,
    elapsed: Duration,
    running: bool,
}

impl SimulationClock {
    /// Create a paused clock with the given advance interval.
    /// A zero interval advances on every frame with a nonzero delta.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Flip between paused and running
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Change the advance interval. Takes effect on the next comparison;
    /// time already accumulated toward the previous interval is kept.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Account for one frame and decide whether the simulation should
    /// advance. Elapsed time only accumulates while running and resets to
    /// zero whenever an advance is granted.
    pub fn advance_due(&mut self, frame_delta: Duration) -> bool {
        if !self.running {
            return false;
        }

        self.elapsed += frame_delta;
        if self.elapsed <= self.interval {
            return false;
        }

        self.elapsed = Duration::ZERO;
        true
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}
