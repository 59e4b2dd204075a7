//! Display formatter: fixed-width time-of-day and duration strings

use chronodeck_types::{ClockReading, TimeFormat};

/// Render a clock reading as a fixed-width display string:
/// `HH:MM:SS` in 24-hour mode, `HH:MM:SS AM`/`PM` in 12-hour mode.
pub fn format_time_of_day(reading: ClockReading, format: TimeFormat) -> String {
    match format {
        TimeFormat::Hour24 => format!(
            "{:02}:{:02}:{:02}",
            reading.hour, reading.minute, reading.second
        ),
        TimeFormat::Hour12 => {
            let (h12, meridiem) = if reading.hour == 0 {
                (12, "AM")
            } else if reading.hour < 12 {
                (reading.hour, "AM")
            } else if reading.hour == 12 {
                (12, "PM")
            } else {
                (reading.hour - 12, "PM")
            };
            format!(
                "{:02}:{:02}:{:02} {}",
                h12, reading.minute, reading.second, meridiem
            )
        }
    }
}

/// Render a second count as fixed-width `HH:MM:SS`.
///
/// Used for both the stopwatch (counting up) and the countdown timer.
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_renders_as_twelve_am() {
        assert_eq!(
            format_time_of_day(ClockReading::new(0, 0, 0), TimeFormat::Hour12),
            "12:00:00 AM"
        );
    }

    #[test]
    fn afternoon_renders_with_pm() {
        assert_eq!(
            format_time_of_day(ClockReading::new(13, 5, 9), TimeFormat::Hour12),
            "01:05:09 PM"
        );
    }

    #[test]
    fn noon_is_twelve_pm() {
        assert_eq!(
            format_time_of_day(ClockReading::new(12, 0, 30), TimeFormat::Hour12),
            "12:00:30 PM"
        );
    }

    #[test]
    fn twenty_four_hour_mode_keeps_the_hour() {
        assert_eq!(
            format_time_of_day(ClockReading::new(13, 5, 9), TimeFormat::Hour24),
            "13:05:09"
        );
        assert_eq!(
            format_time_of_day(ClockReading::new(0, 0, 0), TimeFormat::Hour24),
            "00:00:00"
        );
    }

    #[test]
    fn durations_are_fixed_width() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(59), "00:00:59");
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(100 * 3600), "100:00:00");
    }
}
