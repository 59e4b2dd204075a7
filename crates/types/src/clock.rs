//! Clock readings, alarm times, and the time display format

use chrono::Timelike;
use serde::{Deserialize, Serialize};

/// Time display format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum TimeFormat {
    #[serde(rename = "24h")]
    #[default]
    Hour24,
    #[serde(rename = "12h")]
    Hour12,
}

/// An immutable time-of-day snapshot taken once per clock tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClockReading {
    /// Hour of day (0-23)
    pub hour: u32,
    /// Minute (0-59)
    pub minute: u32,
    /// Second (0-59)
    pub second: u32,
}

impl ClockReading {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Snapshot the time-of-day fields of any chrono time value.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
        }
    }
}

/// The single optional pending alarm: a wall-clock hour and minute.
///
/// Seconds are implicitly zero; the alarm matches every reading within its
/// minute, and the manager clears it on the first match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlarmTime {
    /// Hour of day (0-23)
    pub hour: u32,
    /// Minute (0-59)
    pub minute: u32,
}

impl AlarmTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Whether a clock reading falls inside this alarm's minute.
    pub fn matches(&self, reading: ClockReading) -> bool {
        self.hour == reading.hour && self.minute == reading.minute
    }

    /// This alarm pushed forward by `delta` minutes, wrapping past midnight.
    pub fn plus_minutes(self, delta: u32) -> Self {
        let total = (self.hour * 60 + self.minute + delta) % (24 * 60);
        Self {
            hour: total / 60,
            minute: total % 60,
        }
    }
}
