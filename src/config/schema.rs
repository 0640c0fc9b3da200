//! Task file schema definitions.
//!
//! This module contains the structs that map to the JSON task file:
//!
//! ```json
//! {
//!   "Tasks": [
//!     {
//!       "Name": "Weather",
//!       "URL": "https://example.com/weather.json",
//!       "Interval": "15m",
//!       "TargetDir": "data/weather",
//!       "TargetFilename": "weather_%Y%m%d_%H%M.json",
//!       "TempDir": "tmp"
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::schedule::Interval;

/// One configured download.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Display name used in output
    #[serde(rename = "Name", default)]
    pub name: String,

    /// URL to download; empty means the task is skipped
    #[serde(rename = "URL")]
    pub url: String,

    /// Interval spec such as `5m` or `6h`
    #[serde(rename = "Interval")]
    pub interval: String,

    /// Directory the finished file ends up in
    #[serde(rename = "TargetDir", default)]
    pub target_dir: String,

    /// strftime pattern for the output file name
    #[serde(rename = "TargetFilename", default)]
    pub target_filename: String,

    /// Directory the download is written to first (defaults to `TargetDir`)
    #[serde(rename = "TempDir", default, skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<String>,
}

impl TaskConfig {
    /// Name for display, falling back to the URL.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.url
        } else {
            &self.name
        }
    }

    /// Directory downloads are written to before being moved.
    ///
    /// An empty `TempDir` counts as unset.
    pub fn staging_dir(&self) -> &str {
        match self.temp_dir.as_deref() {
            Some(dir) if !dir.is_empty() => dir,
            _ => &self.target_dir,
        }
    }

    /// Check if downloads go through a separate temp directory.
    pub fn uses_temp_dir(&self) -> bool {
        self.staging_dir() != self.target_dir
    }

    /// Parsed interval spec.
    pub fn parsed_interval(&self) -> Interval {
        Interval::parse(&self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> TaskConfig {
        TaskConfig {
            name: "Weather".into(),
            url: "https://example.com/w.json".into(),
            interval: "15m".into(),
            target_dir: "out".into(),
            target_filename: "w_%H%M.json".into(),
            temp_dir: None,
        }
    }

    #[test]
    fn deserializes_pascal_case_keys() {
        let json = r#"{
            "Name": "Weather",
            "URL": "https://example.com/w.json",
            "Interval": "15m",
            "TargetDir": "out",
            "TargetFilename": "w_%H%M.json",
            "TempDir": "tmp"
        }"#;
        let parsed: TaskConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.name, "Weather");
        assert_eq!(parsed.temp_dir.as_deref(), Some("tmp"));
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{ "URL": "http://a", "Interval": "1h" }"#;
        let parsed: TaskConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.name, "");
        assert_eq!(parsed.target_dir, "");
        assert!(parsed.temp_dir.is_none());
    }

    #[test]
    fn url_is_required() {
        let json = r#"{ "Name": "x", "Interval": "1h" }"#;
        let err = serde_json::from_str::<TaskConfig>(json).unwrap_err();
        assert!(err.to_string().contains("URL"));
    }

    #[test]
    fn interval_is_required() {
        let json = r#"{ "Name": "x", "URL": "http://a" }"#;
        assert!(serde_json::from_str::<TaskConfig>(json).is_err());
    }

    #[test]
    fn display_name_falls_back_to_url() {
        let mut t = task();
        assert_eq!(t.display_name(), "Weather");
        t.name.clear();
        assert_eq!(t.display_name(), "https://example.com/w.json");
    }

    #[test]
    fn staging_dir_defaults_to_target() {
        let mut t = task();
        assert_eq!(t.staging_dir(), "out");
        assert!(!t.uses_temp_dir());

        t.temp_dir = Some(String::new());
        assert_eq!(t.staging_dir(), "out");

        t.temp_dir = Some("tmp".into());
        assert_eq!(t.staging_dir(), "tmp");
        assert!(t.uses_temp_dir());
    }

    #[test]
    fn parsed_interval() {
        assert_eq!(task().parsed_interval(), Interval::Minutely(15));
    }
}
