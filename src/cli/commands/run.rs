//! Run command implementation.
//!
//! The `harvester run` command downloads every due task.

use std::time::Duration;

use crate::cache::ContentCache;
use crate::cli::args::RunArgs;
use crate::config::load_task_file;
use crate::error::{HarvesterError, Result};
use crate::fetch::HttpFetcher;
use crate::runner::{RunProgress, RunSummary, TaskOutcome, TaskReport, TaskRunner};
use crate::schedule::{IntervalScheduler, ReferenceClock};
use crate::ui::{OutputMode, SpinnerHandle, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    context: CommandContext,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(context: CommandContext, args: RunArgs) -> Self {
        Self { context, args }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let list = match load_task_file(self.context.tasks_path()) {
            Ok(list) => list,
            Err(HarvesterError::TaskFileNotFound { path }) => {
                ui.error(&format!("Task file not found: {}", path.display()));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let clock = self.args.at.unwrap_or_else(ReferenceClock::now);
        ui.show_header(&format!("Harvesting {} tasks at {}", list.len(), clock));

        for rejected in &list.rejected {
            ui.warning(&rejected.to_string());
        }

        let cache = ContentCache::open(self.context.cache_dir_for(&list.base_dir))?;
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(self.args.timeout))?;
        tracing::debug!("HTTP timeout {:?}", fetcher.timeout());
        let mut runner = TaskRunner::new(
            cache,
            IntervalScheduler::new(clock),
            fetcher,
            &list.base_dir,
        );

        let mode = ui.output_mode();
        let mut spinner: Option<Box<dyn SpinnerHandle>> = None;

        let summary = runner.run_with_progress(&list.tasks, |event| match event {
            RunProgress::TaskStarting { name, index, total } => {
                tracing::debug!("[{}/{}] {}", index + 1, total, name);
            }
            RunProgress::Fetching { name, url } => {
                spinner = Some(ui.start_spinner(&format!("{}: fetching {}", name, url)));
            }
            RunProgress::TaskFinished { report } => {
                show_report(&mut *ui, spinner.take(), report, mode);
            }
        })?;

        show_summary(ui, &summary, list.rejected.len());
        Ok(CommandResult::success())
    }
}

fn describe(outcome: &TaskOutcome) -> String {
    match outcome {
        TaskOutcome::Skipped { reason } => format!("skipped ({})", reason),
        TaskOutcome::NotDue => "not due".to_string(),
        TaskOutcome::Unchanged => "unchanged".to_string(),
        TaskOutcome::Written { path } => format!("wrote {}", path.display()),
        TaskOutcome::FetchFailed { message } => message.clone(),
        TaskOutcome::WriteFailed { message } => format!("write failed: {}", message),
    }
}

fn show_report(
    ui: &mut dyn UserInterface,
    spinner: Option<Box<dyn SpinnerHandle>>,
    report: &TaskReport,
    mode: OutputMode,
) {
    let line = format!("{}: {}", report.name, describe(&report.outcome));

    match spinner {
        Some(mut spinner) => match &report.outcome {
            TaskOutcome::Written { .. } => spinner.finish_success(&line),
            outcome if outcome.is_failure() => {
                spinner.finish_error(&line);
                if !mode.shows_spinners() {
                    ui.error(&line);
                }
            }
            _ => spinner.finish_skipped(&line),
        },
        None => match &report.outcome {
            TaskOutcome::Skipped { .. } => ui.warning(&line),
            _ if mode.shows_idle_tasks() => ui.skipped(&line),
            _ => {}
        },
    }

    if let Some(transfer) = &report.transfer {
        if !transfer.moved.is_empty() && mode.shows_idle_tasks() {
            ui.message(&format!("  moved {} files", transfer.moved.len()));
        }
        for (path, error) in &transfer.failed {
            ui.warning(&format!("Could not move {}: {}", path.display(), error));
        }
    }
}

fn show_summary(ui: &mut dyn UserInterface, summary: &RunSummary, rejected: usize) {
    let line = format!(
        "{} written, {} unchanged, {} not due, {} skipped, {} failed in {:.1}s",
        summary.written(),
        summary.unchanged(),
        summary.not_due(),
        summary.skipped() + rejected,
        summary.failed(),
        summary.duration.as_secs_f64()
    );

    ui.message("");
    if summary.success() {
        ui.success(&line);
    } else {
        ui.warning(&line);
    }
}
