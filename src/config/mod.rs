//! Task configuration loading and validation.
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//! - Per-task validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use harvester::config::{parse_tasks, validate};
//! use std::path::{Path, PathBuf};
//!
//! let json = r#"{ "Tasks": [ { "Name": "feed", "URL": "http://example.com/feed",
//!     "Interval": "15m", "TargetDir": "out", "TargetFilename": "feed_%H%M.xml" } ] }"#;
//!
//! let list = parse_tasks(json, Path::new("tasks.json"), PathBuf::from(".")).unwrap();
//! assert_eq!(list.tasks.len(), 1);
//! validate(&list.tasks[0]).unwrap();
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_task_file, parse_tasks, TaskList, DEFAULT_TASK_FILE};
pub use schema::TaskConfig;
pub use validator::{validate, validate_task, ValidationError};
