//! Stopwatch and countdown-timer state types

use serde::{Deserialize, Serialize};

/// Countdown timer phase
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum TimerPhase {
    #[serde(rename = "idle")]
    #[default]
    Idle,
    #[serde(rename = "running")]
    Running,
    #[serde(rename = "paused")]
    Paused,
    #[serde(rename = "completed")]
    Completed,
}

/// How the countdown's completion tick is rendered.
///
/// `HoldLast` emits no display update on the completing tick, leaving the
/// surface at the last value rendered while running. `Zero` forces an
/// explicit `00:00:00` render, for surfaces that clear between frames.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum CompletionDisplay {
    #[serde(rename = "hold_last")]
    #[default]
    HoldLast,
    #[serde(rename = "zero")]
    Zero,
}

/// Point-in-time view of the stopwatch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StopwatchSnapshot {
    pub elapsed_secs: u64,
    pub running: bool,
}

/// Point-in-time view of the countdown timer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct TimerSnapshot {
    pub remaining_secs: u64,
    pub phase: TimerPhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_phase_serde_names() {
        assert_eq!(
            serde_json::to_string(&TimerPhase::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(
            serde_json::from_str::<TimerPhase>("\"paused\"").unwrap(),
            TimerPhase::Paused
        );
    }

    #[test]
    fn completion_display_defaults_to_hold_last() {
        assert_eq!(CompletionDisplay::default(), CompletionDisplay::HoldLast);
    }
}
