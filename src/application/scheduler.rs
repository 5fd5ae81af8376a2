/// Fixed-rate, pausable trigger for generation steps.
///
/// Fed with frame times; fires at most once per frame and keeps the
/// remainder of the elapsed time so the average rate stays on target even
/// when the frame rate is not a multiple of it.
#[derive(Clone, Debug)]
pub struct Scheduler {
    updates_per_second: f32,
    elapsed: f32,
    running: bool,
}

pub const MIN_RATE: f32 = 1.0;
pub const MAX_RATE: f32 = 60.0;

impl Scheduler {
    pub fn new(updates_per_second: f32) -> Self {
        Self {
            updates_per_second: updates_per_second.clamp(MIN_RATE, MAX_RATE),
            elapsed: 0.0,
            running: false,
        }
    }

    pub fn with_running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn updates_per_second(&self) -> f32 {
        self.updates_per_second
    }

    /// Seconds between two steps
    pub fn interval(&self) -> f32 {
        1.0 / self.updates_per_second
    }

    pub fn set_rate(&mut self, updates_per_second: f32) {
        self.updates_per_second = updates_per_second.clamp(MIN_RATE, MAX_RATE);
    }

    pub fn adjust_rate(&mut self, delta: f32) {
        self.set_rate(self.updates_per_second + delta);
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        if !self.running {
            self.running = true;
            self.elapsed = 0.0;
        }
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.resume();
        }
    }

    /// Advance the clock by `delta_time` seconds; `true` when a step is due
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if !self.running {
            return false;
        }

        self.elapsed += delta_time.max(0.0);
        let interval = self.interval();
        if self.elapsed >= interval {
            self.elapsed %= interval;
            true
        } else {
            false
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paused_never_fires() {
        let mut s = Scheduler::new(10.0);
        assert!(!s.is_running());
        assert!(!s.tick(5.0));
    }

    #[test]
    fn test_fires_at_interval() {
        let mut s = Scheduler::new(4.0).with_running(true);
        assert!(!s.tick(0.1));
        assert!(!s.tick(0.1));
        assert!(s.tick(0.1));
        assert!(!s.tick(0.1));
    }

    #[test]
    fn test_at_most_once_per_frame() {
        let mut s = Scheduler::new(10.0).with_running(true);
        assert!(s.tick(1.05));
        // remainder of 0.05 carries over
        assert!(!s.tick(0.04));
        assert!(s.tick(0.02));
    }

    #[test]
    fn test_rate_is_clamped() {
        let mut s = Scheduler::new(500.0);
        assert_eq!(s.updates_per_second(), MAX_RATE);
        s.adjust_rate(-1000.0);
        assert_eq!(s.updates_per_second(), MIN_RATE);
        s.set_rate(20.0);
        assert!((s.interval() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_toggle_pauses_and_resumes() {
        let mut s = Scheduler::default();
        s.toggle();
        assert!(s.is_running());
        s.toggle();
        assert!(!s.is_running());
        assert!(!s.tick(1.0));
    }
}
