//! chronodeck-core: State machines and trait seams for the chronodeck engine.
//!
//! This crate contains the tick-driven components (alarm manager, stopwatch,
//! countdown timer), the display formatter, and the `TimeSource` seam that
//! lets the composing layer inject a real or fake wall clock.
//!
//! Everything here is synchronous: components mutate on explicit `tick()`
//! calls and know nothing about how those ticks are scheduled.

mod alarm;
mod error;
mod format;
mod stopwatch;
mod time_source;
mod timer;

pub use alarm::AlarmManager;
pub use error::ClockError;
pub use format::{format_duration, format_time_of_day};
pub use stopwatch::Stopwatch;
pub use time_source::{SystemTimeSource, TimeSource, ZoneSelection};
pub use timer::{CountdownTimer, TimerTick};

// Re-export types used in public signatures for convenience
pub use chronodeck_types::{
    AlarmTime, ClockReading, CompletionDisplay, StopwatchSnapshot, TimeFormat, TimerPhase,
    TimerSnapshot,
};
