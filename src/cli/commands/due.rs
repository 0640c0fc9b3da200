//! Due command implementation.
//!
//! The `harvester due` command shows which tasks would be downloaded at a
//! given time, without touching the network or the cache.

use serde::Serialize;

use crate::cli::args::DueArgs;
use crate::config::{load_task_file, TaskConfig};
use crate::error::{HarvesterError, Result};
use crate::schedule::{IntervalScheduler, ReferenceClock};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// Due status of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DueEntry {
    pub name: String,
    pub interval: String,
    pub valid: bool,
    pub due: bool,
}

impl DueEntry {
    fn evaluate(task: &TaskConfig, scheduler: &IntervalScheduler) -> Self {
        Self {
            name: task.display_name().to_string(),
            interval: task.interval.clone(),
            valid: task.parsed_interval().is_valid(),
            due: scheduler.is_due(&task.interval),
        }
    }
}

/// The due command implementation.
pub struct DueCommand {
    context: CommandContext,
    args: DueArgs,
}

impl DueCommand {
    /// Create a new due command.
    pub fn new(context: CommandContext, args: DueArgs) -> Self {
        Self { context, args }
    }
}

impl Command for DueCommand {
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
        let scheduler = IntervalScheduler::new(clock);
        let entries: Vec<DueEntry> = list
            .tasks
            .iter()
            .map(|task| DueEntry::evaluate(task, &scheduler))
            .collect();

        if self.args.json {
            let output = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            ui.message(&output);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("Tasks due at {}", clock));

        for rejected in &list.rejected {
            ui.warning(&rejected.to_string());
        }

        for entry in &entries {
            let line = format!("{} ({})", entry.name, entry.interval);
            if !entry.valid {
                ui.warning(&format!("{}: invalid interval, never due", line));
            } else if entry.due {
                ui.success(&line);
            } else {
                ui.skipped(&line);
            }
        }

        let due = entries.iter().filter(|e| e.due).count();
        ui.message("");
        ui.message(&format!("{} of {} tasks due", due, entries.len()));

        Ok(CommandResult::success())
    }
}
