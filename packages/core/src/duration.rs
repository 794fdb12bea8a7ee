//! Elapsed-time formatting
//!
//! Durations render as zero-padded `HH:MM:SS` with sub-second precision
//! truncated. Hours never wrap at 24 and widen past two digits once a
//! session runs longer than 99 hours (`100:00:00`).

use std::time::Duration;

/// Display text for a stopwatch that is not running
pub const ZERO_DISPLAY: &str = "00:00:00";

/// Format a number of elapsed seconds as `HH:MM:SS`
///
/// Negative and NaN inputs are treated as zero.
pub fn format_elapsed(seconds: f64) -> String {
    let whole = if seconds.is_nan() || seconds <= 0.0 {
        0
    } else {
        // `as` saturates for values beyond u64::MAX
        seconds.floor() as u64
    };
    format_secs(whole)
}

/// Format a [`Duration`] as `HH:MM:SS`
pub fn format_duration(duration: Duration) -> String {
    format_secs(duration.as_secs())
}

fn format_secs(secs: u64) -> String {
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;
    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hms(s: &str) -> bool {
        let parts: Vec<&str> = s.split(':').collect();
        parts.len() == 3
            && parts[0].len() >= 2
            && parts[1].len() == 2
            && parts[2].len() == 2
            && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
    }

    #[test]
    fn test_known_values() {
        assert_eq!(format_elapsed(0.0), "00:00:00");
        assert_eq!(format_elapsed(59.0), "00:00:59");
        assert_eq!(format_elapsed(3600.0), "01:00:00");
        assert_eq!(format_elapsed(3661.0), "01:01:01");
        assert_eq!(format_elapsed(0.0), ZERO_DISPLAY);
    }

    #[test]
    fn test_fractional_seconds_truncate() {
        assert_eq!(format_elapsed(4.999), "00:00:04");
        assert_eq!(format_elapsed(59.9), format_elapsed(59.0));

        let mut e = 0.0;
        while e < 7300.0 {
            let formatted = format_elapsed(e);
            assert!(is_hms(&formatted), "{formatted}");
            assert_eq!(formatted, format_elapsed(e.floor()));
            e += 13.37;
        }
    }

    #[test]
    fn test_no_wrap_past_a_day() {
        assert_eq!(format_elapsed(25.0 * 3600.0), "25:00:00");
        assert_eq!(format_elapsed(99.0 * 3600.0 + 3599.0), "99:59:59");
        assert_eq!(format_elapsed(100.0 * 3600.0), "100:00:00");
    }

    #[test]
    fn test_out_of_range_inputs() {
        assert_eq!(format_elapsed(-3.0), ZERO_DISPLAY);
        assert_eq!(format_elapsed(f64::NAN), ZERO_DISPLAY);
        assert!(is_hms(&format_elapsed(f64::INFINITY)));
    }

    #[test]
    fn test_format_duration_ignores_nanos() {
        assert_eq!(format_duration(Duration::from_millis(5_999)), "00:00:05");
        assert_eq!(format_duration(Duration::from_secs(3661)), "01:01:01");
    }
}
