//! Interval scheduling.
//!
//! This module decides whether a task is due. [`Interval`] parses the
//! interval mini-language, [`ReferenceClock`] holds the time captured at
//! the start of a run, and [`IntervalScheduler`] combines the two.

pub mod clock;
pub mod interval;

pub use clock::ReferenceClock;
pub use interval::{is_due, Interval, MAX_HOURS, MAX_MINUTES};

/// Evaluates interval specs against a fixed reference time.
#[derive(Debug, Clone, Copy)]
pub struct IntervalScheduler {
    clock: ReferenceClock,
}

impl IntervalScheduler {
    /// Create a scheduler for the given reference time.
    pub fn new(clock: ReferenceClock) -> Self {
        Self { clock }
    }

    /// Get the reference clock.
    pub fn clock(&self) -> ReferenceClock {
        self.clock
    }

    /// Check if a task with interval `spec` is due at the reference time.
    pub fn is_due(&self, spec: &str) -> bool {
        let interval = Interval::parse(spec);
        tracing::debug!("Testing interval {} at {}", spec, self.clock);

        if !interval.is_valid() {
            tracing::debug!("Interval '{}' is invalid", spec);
            return false;
        }

        let due = interval.is_due(self.clock.hour(), self.clock.minute());
        if !due {
            tracing::debug!("Interval '{}' is not due at {}", spec, self.clock);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> IntervalScheduler {
        IntervalScheduler::new(ReferenceClock::new(hour, minute).unwrap())
    }

    #[test]
    fn scheduler_uses_reference_clock() {
        let scheduler = at(12, 30);
        assert!(scheduler.is_due("15m"));
        assert!(!scheduler.is_due("7m"));
        assert!(!scheduler.is_due("6h"));
    }

    #[test]
    fn scheduler_on_the_hour() {
        let scheduler = at(18, 0);
        assert!(scheduler.is_due("6h"));
        assert!(scheduler.is_due("1h"));
        assert!(!scheduler.is_due("5h"));
    }

    #[test]
    fn scheduler_zero_always_due() {
        assert!(at(3, 17).is_due("0h"));
        assert!(at(3, 17).is_due("0m"));
    }

    #[test]
    fn scheduler_invalid_never_due() {
        let scheduler = at(0, 0);
        assert!(!scheduler.is_due("-0h"));
        assert!(!scheduler.is_due("25h"));
        assert!(!scheduler.is_due("90m"));
        assert!(!scheduler.is_due("daily"));
    }

    #[test]
    fn scheduler_matches_free_function() {
        let scheduler = at(4, 20);
        for spec in ["1m", "2m", "3m", "20m", "1h", "4h", "0h", "bad"] {
            assert_eq!(scheduler.is_due(spec), is_due(spec, 4, 20), "spec {}", spec);
        }
    }

    #[test]
    fn clock_accessor() {
        assert_eq!(at(9, 41).clock(), ReferenceClock::new(9, 41).unwrap());
    }
}
