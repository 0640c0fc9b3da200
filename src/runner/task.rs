//! Task execution.

use chrono::Local;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::target::{output_path, resolve_dir, write_output};
use super::transfer::{move_all, TransferReport};
use crate::cache::ContentCache;
use crate::config::{validate, TaskConfig};
use crate::error::{HarvesterError, Result};
use crate::fetch::Fetcher;
use crate::schedule::IntervalScheduler;

/// What happened to a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The task is incomplete and was not attempted.
    Skipped { reason: String },
    /// The interval does not fire at the reference time (or is invalid).
    NotDue,
    /// Downloaded content matches what was last written.
    Unchanged,
    /// New content was written.
    Written { path: PathBuf },
    /// The download failed; nothing was written.
    FetchFailed { message: String },
    /// The download succeeded but the file could not be written.
    WriteFailed { message: String },
}

impl TaskOutcome {
    /// Check if this outcome counts as a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed { .. } | Self::WriteFailed { .. })
    }
}

/// Result of running one task.
#[derive(Debug, Clone)]
pub struct TaskReport {
    /// Task display name.
    pub name: String,
    /// Outcome.
    pub outcome: TaskOutcome,
    /// Temp directory transfer, if the task uses one and was due.
    pub transfer: Option<TransferReport>,
}

/// Result of running a task list.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// One report per task, in order.
    pub reports: Vec<TaskReport>,
    /// Total duration.
    pub duration: Duration,
}

impl RunSummary {
    fn count(&self, pred: impl Fn(&TaskOutcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }

    /// Number of tasks that wrote new content.
    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, TaskOutcome::Written { .. }))
    }

    /// Number of tasks whose content was unchanged.
    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, TaskOutcome::Unchanged))
    }

    /// Number of tasks that were not due.
    pub fn not_due(&self) -> usize {
        self.count(|o| matches!(o, TaskOutcome::NotDue))
    }

    /// Number of skipped (incomplete) tasks.
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, TaskOutcome::Skipped { .. }))
    }

    /// Number of failed tasks.
    pub fn failed(&self) -> usize {
        self.count(TaskOutcome::is_failure)
    }

    /// Whether every attempted task succeeded.
    pub fn success(&self) -> bool {
        self.failed() == 0
    }
}

/// Progress events emitted while running tasks.
#[derive(Debug)]
pub enum RunProgress<'a> {
    /// A task is about to start.
    TaskStarting {
        name: &'a str,
        index: usize,
        total: usize,
    },
    /// A due task's URL is being downloaded.
    Fetching { name: &'a str, url: &'a str },
    /// A task finished.
    TaskFinished { report: &'a TaskReport },
}

/// Runs tasks one after another against a shared cache.
pub struct TaskRunner<F: Fetcher> {
    cache: ContentCache,
    scheduler: IntervalScheduler,
    fetcher: F,
    base_dir: PathBuf,
}

impl<F: Fetcher> TaskRunner<F> {
    /// Create a new task runner.
    ///
    /// Relative target and temp directories are resolved against `base_dir`.
    pub fn new(
        cache: ContentCache,
        scheduler: IntervalScheduler,
        fetcher: F,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cache,
            scheduler,
            fetcher,
            base_dir: base_dir.into(),
        }
    }

    /// Get the content cache.
    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Run all tasks in order.
    pub fn run(&mut self, tasks: &[TaskConfig]) -> Result<RunSummary> {
        self.run_with_progress(tasks, |_| {})
    }

    /// Run all tasks in order with a progress callback.
    ///
    /// Stops at the first fatal error (cache I/O); per-task failures are
    /// recorded in the summary.
    pub fn run_with_progress(
        &mut self,
        tasks: &[TaskConfig],
        mut on_progress: impl FnMut(RunProgress<'_>),
    ) -> Result<RunSummary> {
        let start = Instant::now();
        let total = tasks.len();
        let mut reports = Vec::with_capacity(total);

        for (index, task) in tasks.iter().enumerate() {
            on_progress(RunProgress::TaskStarting {
                name: task.display_name(),
                index,
                total,
            });

            let report = self.execute(task, &mut on_progress)?;
            on_progress(RunProgress::TaskFinished { report: &report });
            reports.push(report);
        }

        Ok(RunSummary {
            reports,
            duration: start.elapsed(),
        })
    }

    /// Run a single task.
    pub fn run_task(&mut self, task: &TaskConfig) -> Result<TaskReport> {
        self.execute(task, &mut |_| {})
    }

    fn execute(
        &mut self,
        task: &TaskConfig,
        on_progress: &mut dyn FnMut(RunProgress<'_>),
    ) -> Result<TaskReport> {
        let name = task.display_name().to_string();
        tracing::info!("Task \"{}\"", name);

        if let Err(err) = validate(task) {
            let reason = match err {
                HarvesterError::InvalidTask { message, .. } => message,
                other => other.to_string(),
            };
            tracing::info!("{}. Not downloading {}", reason, name);
            return Ok(TaskReport {
                name,
                outcome: TaskOutcome::Skipped { reason },
                transfer: None,
            });
        }

        if !self.scheduler.is_due(&task.interval) {
            tracing::info!("Download not necessary");
            return Ok(TaskReport {
                name,
                outcome: TaskOutcome::NotDue,
                transfer: None,
            });
        }

        on_progress(RunProgress::Fetching {
            name: &name,
            url: &task.url,
        });
        let outcome = self.download(task)?;

        let transfer = task.uses_temp_dir().then(|| {
            move_all(
                &resolve_dir(&self.base_dir, task.staging_dir()),
                &resolve_dir(&self.base_dir, &task.target_dir),
            )
        });

        Ok(TaskReport {
            name,
            outcome,
            transfer,
        })
    }

    /// Fetch, compare, and write. Only cache errors are returned as `Err`.
    fn download(&mut self, task: &TaskConfig) -> Result<TaskOutcome> {
        let response = match self.fetcher.fetch(&task.url) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("{}", e);
                return Ok(TaskOutcome::FetchFailed {
                    message: e.to_string(),
                });
            }
        };

        if let Some(date) = &response.server_date {
            tracing::debug!("Server time: {}", date);
        }

        if !self.cache.has_changed(&task.url, &response.content) {
            tracing::info!("Data has not changed");
            return Ok(TaskOutcome::Unchanged);
        }

        let path = match output_path(
            &self.base_dir,
            task.staging_dir(),
            &task.target_filename,
            &Local::now(),
        ) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("{}", e);
                return Ok(TaskOutcome::WriteFailed {
                    message: e.to_string(),
                });
            }
        };

        tracing::info!("Writing data to {}", path.display());
        if let Err(e) = write_output(&path, &response.content) {
            tracing::warn!("Failed to write {}: {}", path.display(), e);
            return Ok(TaskOutcome::WriteFailed {
                message: e.to_string(),
            });
        }

        self.cache.record_content(&task.url, &response.content)?;
        Ok(TaskOutcome::Written { path })
    }
}
