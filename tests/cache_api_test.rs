//! Integration tests for the cache public API.

use harvester::cache::{ContentCache, INDEX_FILE_NAME};
use std::fs;
use tempfile::TempDir;

#[test]
fn record_update_clear_lifecycle() {
    let temp = TempDir::new().unwrap();
    let mut cache = ContentCache::open(temp.path().join("cache")).unwrap();

    let first = "http://www.test.com";
    let second = "http://www.test.de";

    assert_eq!(cache.fingerprint_for_url(first), "");

    cache.record_content(first, "123456").unwrap();
    assert_eq!(cache.fingerprint_for_url(first), cache.fingerprint_of("123456"));

    cache.record_content(second, "9876543").unwrap();
    assert_eq!(cache.fingerprint_for_url(second), cache.fingerprint_of("9876543"));

    cache.record_content(second, "165846341").unwrap();
    assert_eq!(
        cache.fingerprint_for_url(second),
        cache.fingerprint_of("165846341")
    );
    assert_eq!(cache.fingerprint_for_url(first), cache.fingerprint_of("123456"));

    cache.clear().unwrap();
    assert_eq!(cache.fingerprint_for_url(first), "");
    assert_eq!(cache.fingerprint_for_url(second), "");

    cache.record_content(first, "123456").unwrap();
    assert_eq!(cache.fingerprint_for_url(first), cache.fingerprint_of("123456"));
}

#[test]
fn empty_content_round_trips_to_empty_fingerprint() {
    let temp = TempDir::new().unwrap();
    let mut cache = ContentCache::open(temp.path().join("cache")).unwrap();
    let url = "http://www.test.com";

    cache.record_content(url, "").unwrap();

    assert_eq!(cache.fingerprint_for_url(url), cache.fingerprint_of(""));
    assert!(!cache.has_changed(url, ""));
    assert_eq!(cache.len(), 1);
}

#[test]
fn index_file_is_plain_json() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("cache");
    let mut cache = ContentCache::open(&dir).unwrap();
    cache.record_content("http://www.test.com", "abc").unwrap();

    let raw = fs::read_to_string(dir.join(INDEX_FILE_NAME)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = value["entries"].as_object().unwrap();

    assert_eq!(entries.len(), 1);
    let (url_hash, content_hash) = entries.iter().next().unwrap();
    assert_eq!(url_hash.len(), 32);
    assert_eq!(content_hash, &serde_json::json!(cache.fingerprint_of("abc")));
}

#[test]
fn separate_handles_share_the_index() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("cache");

    let mut writer = ContentCache::open(&dir).unwrap();
    writer.record_content("http://a", "one").unwrap();

    let reader = ContentCache::open(&dir).unwrap();
    assert!(!reader.has_changed("http://a", "one"));
    assert!(reader.has_changed("http://a", "two"));
}
