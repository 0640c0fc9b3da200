//! On-disk cache index.
//!
//! This module provides [`CacheIndex`], the flat `urlHash -> contentHash`
//! map persisted as `index.json`:
//!
//! ```json
//! { "entries": { "<url fingerprint>": "<content fingerprint>" } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{HarvesterError, Result};

/// Persisted fingerprint index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheIndex {
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

impl CacheIndex {
    /// Load the index from `path`.
    ///
    /// A missing file yields an empty index. A file that exists but does not
    /// deserialize is reported as [`HarvesterError::CacheCorrupt`] rather
    /// than discarded.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| HarvesterError::cache_io(path, e))?;

        serde_json::from_str(&content).map_err(|e| HarvesterError::CacheCorrupt {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Save the index using atomic write.
    ///
    /// Uses the write-to-temp-then-rename pattern to prevent corruption.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| HarvesterError::cache_io(parent, e))?;
        }

        let content = serde_json::to_string_pretty(self).map_err(anyhow::Error::from)?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content).map_err(|e| HarvesterError::cache_io(&temp_path, e))?;
        fs::rename(&temp_path, path).map_err(|e| HarvesterError::cache_io(path, e))?;

        Ok(())
    }

    /// Content fingerprint stored under a URL fingerprint.
    pub fn get(&self, url_hash: &str) -> Option<&str> {
        self.entries.get(url_hash).map(String::as_str)
    }

    /// Set the content fingerprint for a URL fingerprint, replacing any
    /// previous value.
    pub fn insert(&mut self, url_hash: String, content_hash: String) {
        self.entries.insert(url_hash, content_hash);
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of recorded URLs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
