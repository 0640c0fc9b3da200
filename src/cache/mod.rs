//! Content change detection.
//!
//! This module provides [`ContentCache`], which persists a fingerprint of
//! the most recent content downloaded for each URL so that unchanged
//! downloads can be skipped.

pub mod fingerprint;
pub mod index;
pub mod store;

pub use fingerprint::{digest, fingerprint_of};
pub use index::CacheIndex;
pub use store::{ContentCache, INDEX_FILE_NAME};

use std::path::{Path, PathBuf};

/// Name of the cache directory created next to the task file.
pub const CACHE_DIR_NAME: &str = ".harvester-cache";

/// Get the default cache directory for tasks loaded from `base`.
pub fn default_cache_dir(base: &Path) -> PathBuf {
    base.join(CACHE_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cache_dir_is_under_base() {
        let path = default_cache_dir(Path::new("/srv/feeds"));
        assert_eq!(path, PathBuf::from("/srv/feeds/.harvester-cache"));
    }
}
