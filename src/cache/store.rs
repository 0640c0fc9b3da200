//! Change-detection cache.

use std::fs;
use std::path::{Path, PathBuf};

use super::fingerprint::{digest, fingerprint_of};
use super::index::CacheIndex;
use crate::error::{HarvesterError, Result};

/// File name of the index inside the cache directory.
pub const INDEX_FILE_NAME: &str = "index.json";

/// Remembers, per URL, the fingerprint of the last content written.
///
/// The in-memory index is loaded once on [`ContentCache::open`]. Every
/// [`record_content`](ContentCache::record_content) re-reads the file
/// before writing it back so that edits made by other tools in between are
/// not thrown away. There is no locking: the last writer wins.
#[derive(Debug)]
pub struct ContentCache {
    dir: PathBuf,
    index_path: PathBuf,
    index: CacheIndex,
}

impl ContentCache {
    /// Open the cache in `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| HarvesterError::cache_io(&dir, e))?;

        let index_path = dir.join(INDEX_FILE_NAME);
        let index = CacheIndex::load(&index_path)?;

        tracing::debug!(
            "Using cache at {} ({} entries)",
            index_path.display(),
            index.len()
        );

        Ok(Self {
            dir,
            index_path,
            index,
        })
    }

    /// Get the cache directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the path of the persisted index.
    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    /// Record `content` as the latest content seen for `url` and persist.
    pub fn record_content(&mut self, url: &str, content: &str) -> Result<()> {
        let url_hash = digest(url);
        let content_hash = fingerprint_of(content);

        self.index = CacheIndex::load(&self.index_path)?;
        self.index.insert(url_hash, content_hash);
        self.index.save(&self.index_path)?;

        tracing::debug!("Recorded fingerprint for {}", url);
        Ok(())
    }

    /// Fingerprint of the last content recorded for `url`, or `""`.
    pub fn fingerprint_for_url(&self, url: &str) -> String {
        self.index
            .get(&digest(url))
            .map(String::from)
            .unwrap_or_default()
    }

    /// Fingerprint of `content`, or `""` for empty content.
    pub fn fingerprint_of(&self, content: &str) -> String {
        fingerprint_of(content)
    }

    /// Check whether `content` differs from what was last recorded for `url`.
    pub fn has_changed(&self, url: &str, content: &str) -> bool {
        self.fingerprint_for_url(url) != fingerprint_of(content)
    }

    /// Forget every recorded fingerprint and delete the index file.
    ///
    /// The file is recreated lazily by the next `record_content`.
    pub fn clear(&mut self) -> Result<()> {
        self.index.clear();

        if self.index_path.exists() {
            fs::remove_file(&self.index_path)
                .map_err(|e| HarvesterError::cache_io(&self.index_path, e))?;
        }

        tracing::debug!("Cleared cache at {}", self.dir.display());
        Ok(())
    }

    /// Number of URLs with a recorded fingerprint.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
