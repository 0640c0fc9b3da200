//! Task file loading.
//!
//! The task file is parsed in two passes: first into a list of raw JSON
//! values, then each entry into a [`TaskConfig`]. A malformed entry is
//! recorded as rejected without affecting the others.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::TaskConfig;
use crate::error::{HarvesterError, Result};

/// Default task file name, looked up in the current directory.
pub const DEFAULT_TASK_FILE: &str = "tasks.json";

#[derive(Debug, Deserialize)]
struct RawTaskFile {
    #[serde(rename = "Tasks")]
    tasks: Vec<serde_json::Value>,
}

/// Tasks loaded from a task file.
#[derive(Debug)]
pub struct TaskList {
    /// Path the tasks were loaded from.
    pub path: PathBuf,

    /// Directory relative target paths are resolved against.
    pub base_dir: PathBuf,

    /// Well-formed tasks in file order.
    pub tasks: Vec<TaskConfig>,

    /// Entries that could not be parsed, as `InvalidTask` errors.
    pub rejected: Vec<HarvesterError>,
}

impl TaskList {
    /// Number of well-formed tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if there are no well-formed tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Load and parse a task file.
///
/// # Errors
///
/// Returns `TaskFileNotFound` if the file doesn't exist.
/// Returns `TaskFileParse` if the file is not a valid task file.
pub fn load_task_file(path: &Path) -> Result<TaskList> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HarvesterError::TaskFileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            HarvesterError::Io(e)
        }
    })?;

    let base_dir = fs::canonicalize(path)?
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    parse_tasks(&content, path, base_dir)
}

/// Parse task file content.
///
/// # Arguments
///
/// * `content` - The JSON content to parse
/// * `source_path` - Path for error reporting
/// * `base_dir` - Directory for resolving relative target paths
pub fn parse_tasks(content: &str, source_path: &Path, base_dir: PathBuf) -> Result<TaskList> {
    let raw: RawTaskFile =
        serde_json::from_str(content).map_err(|e| HarvesterError::TaskFileParse {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut tasks = Vec::new();
    let mut rejected = Vec::new();

    for (position, value) in raw.tasks.into_iter().enumerate() {
        let label = entry_label(&value, position);
        match serde_json::from_value::<TaskConfig>(value) {
            Ok(task) => tasks.push(task),
            Err(e) => {
                tracing::warn!("Skipping task {}: {}", label, e);
                rejected.push(HarvesterError::InvalidTask {
                    task: label,
                    message: e.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        "Loaded {} tasks from {} ({} rejected)",
        tasks.len(),
        source_path.display(),
        rejected.len()
    );

    Ok(TaskList {
        path: source_path.to_path_buf(),
        base_dir,
        tasks,
        rejected,
    })
}

/// Best-effort label for an entry that may not deserialize.
fn entry_label(value: &serde_json::Value, position: usize) -> String {
    value
        .get("Name")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .unwrap_or_else(|| format!("#{}", position + 1))
}
