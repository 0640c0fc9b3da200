//! Harvester - periodic URL downloader with change detection.
//!
//! Harvester reads a list of download tasks, decides which ones are due at
//! the current minute, downloads them, and writes a new timestamped file
//! only when the content differs from the last download of the same URL.
//! It is meant to be started every minute by cron or a systemd timer.
//!
//! # Modules
//!
//! - [`cache`] - Per-URL content fingerprints for change detection
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Task file loading and validation
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - HTTP downloads
//! - [`runner`] - Task execution, output files and temp directory transfer
//! - [`schedule`] - Interval parsing and the due check
//! - [`ui`] - Terminal output, spinners and prompts
//!
//! # Example
//!
//! ```
//! use harvester::schedule::{IntervalScheduler, ReferenceClock};
//!
//! let scheduler = IntervalScheduler::new(ReferenceClock::new(18, 0).unwrap());
//! assert!(scheduler.is_due("6h"));
//! assert!(scheduler.is_due("15m"));
//! assert!(!scheduler.is_due("25h"));
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod runner;
pub mod schedule;
pub mod ui;

pub use error::{HarvesterError, Result};
