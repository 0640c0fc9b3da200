//! Task execution orchestration.
//!
//! For every configured task the [`TaskRunner`] checks the schedule,
//! downloads the URL, skips the write when the content fingerprint is
//! unchanged, and finally moves files out of the task's temp directory.

pub mod target;
pub mod task;
pub mod transfer;

pub use target::{format_filename, output_path, resolve_dir, write_output};
pub use task::{RunProgress, RunSummary, TaskOutcome, TaskReport, TaskRunner};
pub use transfer::{move_all, TransferReport};
