//! Task validation rules.
//!
//! A task is runnable only if it has:
//! - a non-empty URL
//! - a non-empty target directory
//! - a non-empty target file name
//!
//! Intervals are not checked here. An invalid interval is never due.

use crate::config::schema::TaskConfig;
use crate::error::HarvesterError;

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Task display name
    pub task: String,
}

impl From<ValidationError> for HarvesterError {
    fn from(err: ValidationError) -> Self {
        HarvesterError::InvalidTask {
            task: err.task,
            message: err.message,
        }
    }
}

/// Validate a task and return all errors.
pub fn validate_task(task: &TaskConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let name = task.display_name().to_string();

    if task.url.is_empty() {
        errors.push(ValidationError {
            rule: "empty-url".to_string(),
            message: "URL is empty".to_string(),
            task: name.clone(),
        });
    }

    if task.target_dir.is_empty() {
        errors.push(ValidationError {
            rule: "empty-target-dir".to_string(),
            message: "Target directory is empty".to_string(),
            task: name.clone(),
        });
    }

    if task.target_filename.is_empty() {
        errors.push(ValidationError {
            rule: "empty-target-filename".to_string(),
            message: "Target filename is empty".to_string(),
            task: name,
        });
    }

    errors
}

/// Validate a task, failing on the first error.
pub fn validate(task: &TaskConfig) -> crate::error::Result<()> {
    match validate_task(task).into_iter().next() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
