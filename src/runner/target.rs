//! Output paths and writing downloaded content.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Resolve a configured directory against the task file's directory.
pub fn resolve_dir(base: &Path, dir: &str) -> PathBuf {
    let dir = Path::new(dir);
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        base.join(dir)
    }
}

/// Expand strftime placeholders in a target file name.
///
/// # Errors
///
/// Returns an error if the pattern contains an unknown `%` specifier.
pub fn format_filename<Tz>(pattern: &str, now: &DateTime<Tz>) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();

    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(anyhow::anyhow!("Invalid filename pattern '{}'", pattern).into());
    }

    Ok(now.format_with_items(items.iter()).to_string())
}

/// Full path a download is written to.
pub fn output_path<Tz>(
    base: &Path,
    dir: &str,
    pattern: &str,
    now: &DateTime<Tz>,
) -> Result<PathBuf>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    Ok(resolve_dir(base, dir).join(format_filename(pattern, now)?))
}

/// Write `content` to `path`, creating parent directories.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use tempfile::TempDir;

    fn sample_time() -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(13, 5, 9)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn resolve_relative_dir() {
        let path = resolve_dir(Path::new("/srv/tasks"), "out/feed");
        assert_eq!(path, PathBuf::from("/srv/tasks/out/feed"));
    }

    #[test]
    fn resolve_absolute_dir() {
        let temp = TempDir::new().unwrap();
        let abs = temp.path().to_string_lossy().to_string();
        assert_eq!(resolve_dir(Path::new("/srv/tasks"), &abs), temp.path());
    }

    #[test]
    fn format_expands_placeholders() {
        let name = format_filename("feed_%Y%m%d_%H%M.xml", &sample_time()).unwrap();
        assert_eq!(name, "feed_20240229_1305.xml");
    }

    #[test]
    fn format_without_placeholders_is_unchanged() {
        assert_eq!(format_filename("latest.json", &sample_time()).unwrap(), "latest.json");
    }

    #[test]
    fn format_escaped_percent() {
        assert_eq!(format_filename("100%%.txt", &sample_time()).unwrap(), "100%.txt");
    }

    #[test]
    fn format_rejects_unknown_specifier() {
        assert!(format_filename("feed_%Q.xml", &sample_time()).is_err());
    }

    #[test]
    fn output_path_joins_dir_and_name() {
        let path = output_path(Path::new("/base"), "out", "f_%H.txt", &sample_time()).unwrap();
        assert_eq!(path, PathBuf::from("/base/out/f_13.txt"));
    }

    #[test]
    fn write_output_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("out.txt");

        write_output(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn write_output_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");

        write_output(&path, "one").unwrap();
        write_output(&path, "two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "two");
    }
}
