//! Countdown timer with a terminal completed phase

use chronodeck_types::{CompletionDisplay, TimerPhase, TimerSnapshot};

/// Outcome of a single countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    /// Still counting; the new remaining value should be rendered.
    Running(u64),
    /// The countdown crossed zero on this tick. Emitted exactly once per arm.
    /// `render_zero` reflects the configured completion-display policy.
    Completed { render_zero: bool },
    /// Tick arrived while not running (stale or post-completion).
    Ignored,
}

/// Count-down remaining-seconds counter.
///
/// Phases: `Idle` → `Running` ⇄ `Paused` → `Completed`; `acknowledge` returns
/// a completed timer to `Idle`. Like the stopwatch, counting is integer
/// per-tick with no wall-clock catch-up.
#[derive(Debug)]
pub struct CountdownTimer {
    remaining_secs: u64,
    phase: TimerPhase,
    completion_display: CompletionDisplay,
}

impl CountdownTimer {
    pub fn new(completion_display: CompletionDisplay) -> Self {
        Self {
            remaining_secs: 0,
            phase: TimerPhase::Idle,
            completion_display,
        }
    }

    pub fn set_completion_display(&mut self, policy: CompletionDisplay) {
        self.completion_display = policy;
    }

    /// Load a countdown duration and return to `Idle`.
    pub fn arm(&mut self, secs: u64) {
        self.remaining_secs = secs;
        self.phase = TimerPhase::Idle;
    }

    /// Start when idle or paused, pause when running. A completed timer must
    /// be acknowledged before it can run again.
    pub fn toggle(&mut self) -> TimerPhase {
        self.phase = match self.phase {
            TimerPhase::Idle | TimerPhase::Paused => TimerPhase::Running,
            TimerPhase::Running => TimerPhase::Paused,
            TimerPhase::Completed => {
                log::debug!("timer toggle ignored: completed timer awaits acknowledgement");
                TimerPhase::Completed
            }
        };
        self.phase
    }

    /// One tick while running. Counts down through zero; the tick that would
    /// go below zero transitions to `Completed` instead, once. Ticks in any
    /// other phase are inert.
    pub fn tick(&mut self) -> TimerTick {
        if self.phase != TimerPhase::Running {
            return TimerTick::Ignored;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            TimerTick::Running(self.remaining_secs)
        } else {
            self.phase = TimerPhase::Completed;
            TimerTick::Completed {
                render_zero: self.completion_display == CompletionDisplay::Zero,
            }
        }
    }

    /// Cancel and zero the countdown, from any state.
    pub fn reset(&mut self) {
        self.remaining_secs = 0;
        self.phase = TimerPhase::Idle;
    }

    /// Return a completed timer to `Idle` once the user has seen the effect.
    pub fn acknowledge(&mut self) {
        if self.phase == TimerPhase::Completed {
            self.phase = TimerPhase::Idle;
        }
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            remaining_secs: self.remaining_secs,
            phase: self.phase,
        }
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(CompletionDisplay::default())
    }
}
