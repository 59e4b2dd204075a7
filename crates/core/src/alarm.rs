//! Single pending wall-clock alarm

use crate::error::ClockError;
use chronodeck_types::{AlarmTime, ClockReading};

/// Holds at most one pending alarm and decides, once per clock tick, whether
/// it fires. Setting a new alarm replaces any pending one; there is no queue.
#[derive(Debug, Default)]
pub struct AlarmManager {
    pending: Option<AlarmTime>,
}

impl AlarmManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending alarm with the given time of day (seconds are
    /// implicitly zero). Out-of-range input is rejected, not clamped.
    pub fn set(&mut self, hour: u32, minute: u32) -> Result<(), ClockError> {
        if hour > 23 || minute > 59 {
            return Err(ClockError::InvalidTimeOfDay { hour, minute });
        }
        self.pending = Some(AlarmTime::new(hour, minute));
        Ok(())
    }

    /// Push the pending alarm forward by `delta_minutes`, wrapping past
    /// midnight. Without a pending alarm this is a guarded no-op: snoozing
    /// must never conjure up a phantom alarm. Returns whether anything moved.
    pub fn snooze(&mut self, delta_minutes: u32) -> bool {
        match self.pending {
            Some(alarm) => {
                self.pending = Some(alarm.plus_minutes(delta_minutes));
                true
            }
            None => {
                log::debug!("snooze ignored: no pending alarm");
                false
            }
        }
    }

    /// Clear the pending alarm unconditionally.
    pub fn remove(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<AlarmTime> {
        self.pending
    }

    /// Called once per clock tick. Fires when the reading's hour and minute
    /// match the pending alarm; the alarm is cleared on the same call, so the
    /// remaining seconds of that minute cannot re-fire it. Returns the fired
    /// alarm for effect dispatch.
    pub fn check_and_fire(&mut self, now: ClockReading) -> Option<AlarmTime> {
        match self.pending {
            Some(alarm) if alarm.matches(now) => {
                self.pending = None;
                Some(alarm)
            }
            _ => None,
        }
    }
}
