//! Reference clock for a run.

use chrono::{DateTime, Local, TimeZone, Timelike};
use std::fmt;
use std::str::FromStr;

use crate::error::{HarvesterError, Result};

/// The time of day every interval check in one run is evaluated against.
///
/// Captured once when a run starts so that a slow download does not push
/// later tasks past their slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceClock {
    hour: u32,
    minute: u32,
}

impl ReferenceClock {
    /// Create a clock for `hour:minute`.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 {
            return Err(HarvesterError::InvalidTime {
                message: format!("hour {} is out of range 0-23", hour),
            });
        }
        if minute > 59 {
            return Err(HarvesterError::InvalidTime {
                message: format!("minute {} is out of range 0-59", minute),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Snapshot the current local time.
    pub fn now() -> Self {
        Self::at(&Local::now())
    }

    /// Snapshot the time of day of `time`.
    pub fn at<Tz: TimeZone>(time: &DateTime<Tz>) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute of hour, 0-59.
    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl fmt::Display for ReferenceClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ReferenceClock {
    type Err = HarvesterError;

    /// Parse `HH:MM`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || HarvesterError::InvalidTime {
            message: format!("expected HH:MM, got '{}'", s),
        };

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;

        Self::new(hour, minute)
    }
}
