//! Engine error taxonomy

use thiserror::Error;

/// Errors surfaced by the time-control engine.
///
/// Invalid input is propagated to the caller, never clamped or sanitized.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTimeOfDay { hour: u32, minute: u32 },

    #[error("unknown time zone '{0}'")]
    UnknownTimeZone(String),
}
