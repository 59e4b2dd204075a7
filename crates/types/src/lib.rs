//! chronodeck-types: Shared data types for the chronodeck time-control engine.
//!
//! This crate contains pure data types (clock readings, alarm times, counter
//! snapshots, and the format/policy enums) that are shared across all
//! chronodeck crates. These types carry no scheduling, audio, or runtime
//! dependencies, making them suitable as a foundation layer.

pub mod clock;
pub mod counter;
pub mod sound;

// Re-export commonly used types at the crate root for convenience
pub use clock::{AlarmTime, ClockReading, TimeFormat};
pub use counter::{CompletionDisplay, StopwatchSnapshot, TimerPhase, TimerSnapshot};
pub use sound::AlarmSoundConfig;
