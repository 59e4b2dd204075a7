//! Count-up elapsed-seconds counter

use chronodeck_types::StopwatchSnapshot;

/// A stopwatch that counts whole seconds while running.
///
/// Counting is integer per-tick, not wall-clock arithmetic: a missed tick is
/// simply a second that was never counted, with no catch-up correction.
#[derive(Debug, Default)]
pub struct Stopwatch {
    elapsed_secs: u64,
    running: bool,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the running flag. The caller starts or cancels the periodic tick
    /// to match the returned state.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// One tick while running: elapsed time grows by exactly one second.
    pub fn tick(&mut self) -> u64 {
        self.elapsed_secs += 1;
        self.elapsed_secs
    }

    /// Back to zero, not running, from any state.
    pub fn reset(&mut self) {
        self.elapsed_secs = 0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn snapshot(&self) -> StopwatchSnapshot {
        StopwatchSnapshot {
            elapsed_secs: self.elapsed_secs,
            running: self.running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_equals_ticks_observed_while_running() {
        let mut sw = Stopwatch::new();

        assert!(sw.toggle());
        sw.tick();
        sw.tick();
        assert!(!sw.toggle());
        // Paused: elapsed is retained while no ticks arrive.
        assert_eq!(sw.elapsed_secs(), 2);

        assert!(sw.toggle());
        sw.tick();
        assert_eq!(sw.elapsed_secs(), 3);
    }

    #[test]
    fn reset_zeroes_from_any_state() {
        let mut sw = Stopwatch::new();
        sw.reset();
        assert_eq!(sw.snapshot(), StopwatchSnapshot::default());

        sw.toggle();
        sw.tick();
        sw.reset();
        assert_eq!(sw.elapsed_secs(), 0);
        assert!(!sw.is_running());

        sw.toggle();
        sw.tick();
        sw.toggle();
        sw.reset();
        assert_eq!(sw.snapshot(), StopwatchSnapshot::default());
    }
}
