//! Error types for Harvester operations.
//!
//! This module defines [`HarvesterError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Cache persistence failures are fatal and always propagate
//! - Per-task failures (bad entries, fetch errors) are reported and skipped
//! - Use `anyhow::Error` (via `HarvesterError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Harvester operations.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// Task file not found at expected location.
    #[error("Task file not found: {path}")]
    TaskFileNotFound { path: PathBuf },

    /// Failed to parse the task file.
    #[error("Failed to parse task file {path}: {message}")]
    TaskFileParse { path: PathBuf, message: String },

    /// A single task entry is malformed or incomplete.
    #[error("Invalid task '{task}': {message}")]
    InvalidTask { task: String, message: String },

    /// Reference time outside of 00:00..=23:59.
    #[error("Invalid reference time: {message}")]
    InvalidTime { message: String },

    /// Download failed (non-2xx status or transport error).
    #[error("Download failed for {url}: {message}")]
    FetchFailed {
        url: String,
        status: Option<u16>,
        message: String,
    },

    /// Cache directory or index file could not be read or written.
    #[error("Cache I/O error at {path}: {source}")]
    CacheIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cache index exists but cannot be deserialized.
    #[error("Cache index at {path} is corrupt: {message}")]
    CacheCorrupt { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HarvesterError {
    /// Create a cache I/O error for the given path.
    pub fn cache_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheIo {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for Harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_file_not_found_displays_path() {
        let err = HarvesterError::TaskFileNotFound {
            path: PathBuf::from("/foo/tasks.json"),
        };
        assert!(err.to_string().contains("/foo/tasks.json"));
    }

    #[test]
    fn task_file_parse_displays_path_and_message() {
        let err = HarvesterError::TaskFileParse {
            path: PathBuf::from("/tasks.json"),
            message: "expected value".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tasks.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn invalid_task_displays_task_and_message() {
        let err = HarvesterError::InvalidTask {
            task: "weather".into(),
            message: "missing field `URL`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("weather"));
        assert!(msg.contains("URL"));
    }

    #[test]
    fn fetch_failed_displays_url() {
        let err = HarvesterError::FetchFailed {
            url: "http://example.com/feed".into(),
            status: Some(404),
            message: "HTTP 404 Not Found".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("http://example.com/feed"));
        assert!(msg.contains("404"));
    }

    #[test]
    fn cache_io_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = HarvesterError::cache_io("/cache/index.json", io_err);
        assert!(err.to_string().contains("/cache/index.json"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: HarvesterError = io_err.into();
        assert!(matches!(err, HarvesterError::Io(_)));
    }
}
