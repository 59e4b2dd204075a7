//! The wall-clock seam
//!
//! The engine never reads the system clock directly; it asks a `TimeSource`.
//! Production code injects `SystemTimeSource`, tests inject a fake that the
//! test advances by hand.

use crate::error::ClockError;
use chrono::{Local, Utc};
use chrono_tz::Tz;
use chronodeck_types::ClockReading;

/// Which zone a reading is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSelection {
    /// The host's local time zone
    Local,
    /// A named IANA zone
    Named(Tz),
}

impl ZoneSelection {
    /// Parse a zone id string: `"Local"` or an IANA name like
    /// `"America/New_York"`.
    pub fn parse(zone_id: &str) -> Result<Self, ClockError> {
        if zone_id == "Local" {
            return Ok(Self::Local);
        }
        zone_id
            .parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| ClockError::UnknownTimeZone(zone_id.to_string()))
    }
}

/// Wraps "now": one wall-clock read per tick, rendered in a requested zone.
pub trait TimeSource: Send + Sync {
    /// Current time of day, rendered in the given zone.
    fn now(&self, zone: ZoneSelection) -> ClockReading;

    /// True local wall-clock reading. Alarms always compare against this,
    /// regardless of what zone the clock display is switched to.
    fn now_local(&self) -> ClockReading {
        self.now(ZoneSelection::Local)
    }
}

/// Production time source backed by the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl SystemTimeSource {
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self, zone: ZoneSelection) -> ClockReading {
        match zone {
            ZoneSelection::Local => ClockReading::from_timelike(&Local::now()),
            ZoneSelection::Named(tz) => ClockReading::from_timelike(&Utc::now().with_timezone(&tz)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_local_and_iana_zones() {
        assert_eq!(ZoneSelection::parse("Local").unwrap(), ZoneSelection::Local);
        assert!(matches!(
            ZoneSelection::parse("America/New_York").unwrap(),
            ZoneSelection::Named(_)
        ));
    }

    #[test]
    fn parse_rejects_unknown_zone() {
        assert_eq!(
            ZoneSelection::parse("Mars/Olympus_Mons"),
            Err(ClockError::UnknownTimeZone("Mars/Olympus_Mons".to_string()))
        );
    }

    #[test]
    fn system_source_returns_valid_readings() {
        let source = SystemTimeSource::new();
        let reading = source.now_local();
        assert!(reading.hour <= 23);
        assert!(reading.minute <= 59);
        assert!(reading.second <= 59);
    }
}
