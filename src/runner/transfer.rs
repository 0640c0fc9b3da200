//! Moving finished downloads out of the temp directory.
//!
//! Transfers are best-effort: a file that cannot be moved stays where it
//! is and is picked up again by the next run.

use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of moving a temp directory's contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferReport {
    /// Destination paths of entries that were moved.
    pub moved: Vec<PathBuf>,
    /// Source paths that could not be moved, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl TransferReport {
    /// Check if nothing went wrong.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Move every entry of `from` into `to`.
///
/// Never fails; problems are logged and listed in the report.
pub fn move_all(from: &Path, to: &Path) -> TransferReport {
    let mut report = TransferReport::default();
    tracing::info!("Transferring from {} to {}", from.display(), to.display());

    let entries = match fs::read_dir(from) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Cannot read {}: {}", from.display(), e);
            report.failed.push((from.to_path_buf(), e.to_string()));
            return report;
        }
    };

    if let Err(e) = fs::create_dir_all(to) {
        tracing::warn!("Cannot create {}: {}", to.display(), e);
        report.failed.push((to.to_path_buf(), e.to_string()));
        return report;
    }

    for entry in entries.flatten() {
        let source = entry.path();
        if source == to {
            continue;
        }

        let dest = to.join(entry.file_name());
        tracing::debug!("Transferring {}", source.display());

        match move_entry(&source, &dest) {
            Ok(()) => report.moved.push(dest),
            Err(e) => {
                tracing::warn!("Failed to move {}: {}", source.display(), e);
                report.failed.push((source, e.to_string()));
            }
        }
    }

    report
}

/// Rename, falling back to copy + remove for files on another filesystem.
fn move_entry(source: &Path, dest: &Path) -> std::io::Result<()> {
    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(e) if source.is_file() => {
            tracing::debug!("Rename failed ({}), copying instead", e);
            fs::copy(source, dest)?;
            fs::remove_file(source)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn moves_all_files() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("tmp");
        let to = temp.path().join("out");
        fs::create_dir_all(&from).unwrap();
        fs::write(from.join("a.txt"), "a").unwrap();
        fs::write(from.join("b.txt"), "b").unwrap();

        let report = move_all(&from, &to);

        assert!(report.is_clean());
        assert_eq!(report.moved.len(), 2);
        assert_eq!(fs::read_to_string(to.join("a.txt")).unwrap(), "a");
        assert!(!from.join("a.txt").exists());
    }

    #[test]
    fn creates_target_dir() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("tmp");
        let to = temp.path().join("deep").join("out");
        fs::create_dir_all(&from).unwrap();
        fs::write(from.join("x"), "x").unwrap();

        let report = move_all(&from, &to);
        assert!(report.is_clean());
        assert!(to.join("x").exists());
    }

    #[test]
    fn replaces_existing_file() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("tmp");
        let to = temp.path().join("out");
        fs::create_dir_all(&from).unwrap();
        fs::create_dir_all(&to).unwrap();
        fs::write(from.join("f"), "new").unwrap();
        fs::write(to.join("f"), "old").unwrap();

        move_all(&from, &to);
        assert_eq!(fs::read_to_string(to.join("f")).unwrap(), "new");
    }

    #[test]
    fn missing_source_is_reported_not_fatal() {
        let temp = TempDir::new().unwrap();
        let report = move_all(&temp.path().join("nope"), &temp.path().join("out"));

        assert!(report.moved.is_empty());
        assert_eq!(report.failed.len(), 1);
    }

    #[test]
    fn empty_source_moves_nothing() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("tmp");
        fs::create_dir_all(&from).unwrap();

        let report = move_all(&from, &temp.path().join("out"));
        assert!(report.is_clean());
        assert!(report.moved.is_empty());
    }

    #[test]
    fn skips_target_nested_in_source() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("tmp");
        let to = from.join("out");
        fs::create_dir_all(&to).unwrap();
        fs::write(from.join("f"), "f").unwrap();

        let report = move_all(&from, &to);
        assert!(report.is_clean());
        assert_eq!(report.moved, vec![to.join("f")]);
    }
}
