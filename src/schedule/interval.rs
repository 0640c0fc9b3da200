//! Interval specs.
//!
//! A task's `Interval` is a magnitude followed by a unit: `5m` runs every
//! five minutes, `6h` every six hours on the hour, and `0m`/`0h` on every
//! invocation. Anything else is invalid and never due.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Regex for `<digits><m|h>`, ASCII digits only.
static INTERVAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)([hm])$").expect("INTERVAL_REGEX must compile"));

/// Largest magnitude accepted for minute intervals.
pub const MAX_MINUTES: u32 = 60;

/// Largest magnitude accepted for hour intervals.
pub const MAX_HOURS: u32 = 24;

/// A parsed interval spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    /// Every `n` minutes, aligned to the start of the hour.
    Minutely(u32),
    /// Every `n` hours, on the full hour only.
    Hourly(u32),
    /// The spec did not match `<digits><m|h>`.
    Invalid,
}

impl Interval {
    /// Parse an interval spec. Never fails; bad input is [`Interval::Invalid`].
    pub fn parse(spec: &str) -> Self {
        let Some(caps) = INTERVAL_REGEX.captures(spec) else {
            return Self::Invalid;
        };

        // Overflowing magnitudes are far beyond either bound anyway.
        let Ok(n) = caps[1].parse::<u32>() else {
            return Self::Invalid;
        };

        match &caps[2] {
            "m" => Self::Minutely(n),
            "h" => Self::Hourly(n),
            _ => Self::Invalid,
        }
    }

    /// Check if the interval fires at `hour:minute`.
    ///
    /// A zero magnitude fires always, before any bound check.
    pub fn is_due(self, hour: u32, minute: u32) -> bool {
        match self {
            Self::Invalid => false,
            Self::Minutely(0) | Self::Hourly(0) => true,
            Self::Minutely(n) => n <= MAX_MINUTES && minute % n == 0,
            Self::Hourly(n) => n <= MAX_HOURS && minute == 0 && hour % n == 0,
        }
    }

    /// Check if the magnitude is within its unit's bound.
    pub fn is_valid(self) -> bool {
        match self {
            Self::Invalid => false,
            Self::Minutely(n) => n <= MAX_MINUTES,
            Self::Hourly(n) => n <= MAX_HOURS,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutely(n) => write!(f, "{}m", n),
            Self::Hourly(n) => write!(f, "{}h", n),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}

/// Check whether `spec` is due at `hour:minute`.
pub fn is_due(spec: &str, hour: u32, minute: u32) -> bool {
    Interval::parse(spec).is_due(hour, minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minutes() {
        assert_eq!(Interval::parse("5m"), Interval::Minutely(5));
    }

    #[test]
    fn parse_hours() {
        assert_eq!(Interval::parse("6h"), Interval::Hourly(6));
    }

    #[test]
    fn parse_leading_zeros() {
        assert_eq!(Interval::parse("05m"), Interval::Minutely(5));
        assert_eq!(Interval::parse("000h"), Interval::Hourly(0));
    }

    #[test]
    fn parse_rejects_malformed() {
        for spec in [
            "", "m", "h", "5", "5s", "5d", "5M", "5H", " 5m", "5m ", "5m\n", "-0h", "+5m", "1.5h",
            "five m", "5mm", "5hm", "٥m",
        ] {
            assert_eq!(Interval::parse(spec), Interval::Invalid, "spec {:?}", spec);
        }
    }

    #[test]
    fn parse_overflow_is_invalid() {
        assert_eq!(Interval::parse("99999999999999m"), Interval::Invalid);
    }

    #[test]
    fn zero_hours_always_due() {
        for hour in 0..24 {
            for minute in 0..60 {
                assert!(is_due("0h", hour, minute));
            }
        }
    }

    #[test]
    fn zero_minutes_always_due() {
        assert!(is_due("0m", 13, 37));
    }

    #[test]
    fn minutes_above_sixty_never_due() {
        assert!(!is_due("61m", 0, 0));
        assert!(is_due("60m", 0, 0));
    }

    #[test]
    fn twenty_four_minutes_at_midnight() {
        // 24m is a valid minute interval, and 0 % 24 == 0
        assert!(is_due("24m", 0, 0));
        assert!(!is_due("24m", 0, 12));
    }

    #[test]
    fn hours_above_twenty_four_never_due() {
        assert!(!is_due("25h", 0, 0));
        assert!(!is_due("25h", 12, 0));
        assert!(is_due("24h", 0, 0));
    }

    #[test]
    fn two_minutes() {
        assert!(is_due("2m", 7, 4));
        assert!(!is_due("2m", 7, 5));
    }

    #[test]
    fn three_minutes() {
        assert!(!is_due("3m", 10, 1));
        assert!(is_due("3m", 10, 3));
    }

    #[test]
    fn nineteen_hours() {
        assert!(is_due("19h", 0, 0));
        assert!(!is_due("19h", 5, 0));
        assert!(is_due("19h", 19, 0));
    }

    #[test]
    fn hours_only_fire_on_the_hour() {
        assert!(is_due("6h", 12, 0));
        assert!(!is_due("6h", 12, 1));
        assert!(!is_due("1h", 3, 30));
    }

    #[test]
    fn negative_zero_is_never_due() {
        assert!(!is_due("-0h", 0, 0));
        assert!(!is_due("-0h", 13, 45));
    }

    #[test]
    fn garbage_is_never_due() {
        assert!(!is_due("hourly", 0, 0));
        assert!(!is_due("", 0, 0));
    }

    #[test]
    fn is_valid_checks_bounds() {
        assert!(Interval::Minutely(60).is_valid());
        assert!(!Interval::Minutely(61).is_valid());
        assert!(Interval::Hourly(24).is_valid());
        assert!(!Interval::Hourly(25).is_valid());
        assert!(!Interval::Invalid.is_valid());
    }

    #[test]
    fn display_round_trips_spec() {
        assert_eq!(Interval::Minutely(5).to_string(), "5m");
        assert_eq!(Interval::Hourly(6).to_string(), "6h");
        assert_eq!(Interval::Invalid.to_string(), "invalid");
    }
}
