//! Daily operating-hours window.

use std::fmt;

use chrono::{Duration, NaiveTime};

/// The time-of-day window during which position reports are permitted.
///
/// Both ends are inclusive: a report at exactly `end` is still within
/// hours. The window does not wrap midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingHours {
    /// Start of the permitted window.
    pub start: NaiveTime,
    /// End of the permitted window.
    pub end: NaiveTime,
}

impl OperatingHours {
    /// Create a new operating-hours window.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Whether the time-of-day falls inside the window (inclusive).
    pub fn contains(&self, time: NaiveTime) -> bool {
        !(time < self.start || time > self.end)
    }

    /// Whether the time-of-day is strictly after `end - window`.
    ///
    /// Used for the near-limit warning as the window closes. A time at
    /// exactly `end - window` does not count as near.
    pub fn near_close(&self, time: NaiveTime, window: Duration) -> bool {
        time > self.end - window
    }
}

impl fmt::Display for OperatingHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours() -> OperatingHours {
        OperatingHours::new(
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        )
    }

    fn t(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn test_contains_midday() {
        assert!(hours().contains(t(12, 0)));
    }

    #[test]
    fn test_contains_is_inclusive_at_both_ends() {
        assert!(hours().contains(t(6, 0)));
        assert!(hours().contains(t(18, 0)));
    }

    #[test]
    fn test_rejects_outside_window() {
        assert!(!hours().contains(t(5, 59)));
        assert!(!hours().contains(t(18, 1)));
        assert!(!hours().contains(t(0, 0)));
    }

    #[test]
    fn test_near_close_is_strict() {
        let window = Duration::minutes(30);
        // Exactly end - 30min is not near.
        assert!(!hours().near_close(t(17, 30), window));
        assert!(hours().near_close(t(17, 31), window));
        assert!(hours().near_close(t(17, 45), window));
    }

    #[test]
    fn test_display() {
        assert_eq!(hours().to_string(), "06:00-18:00");
    }
}
