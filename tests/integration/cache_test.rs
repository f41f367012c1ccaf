//! Integration tests for the file cache

use cryptoquote::cache::{pairs_key, FileCache, PairCache, CACHE_FILE_NAME};
use serde_json::json;

#[test]
fn test_entries_share_one_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let cache = FileCache::new(dir.path().join("nested"));

    cache
        .write_entry(&pairs_key("Kraken"), &json!({"XXBTZUSD": {}}))
        .unwrap();
    cache.write_entry("other", &json!([1, 2])).unwrap();

    assert_eq!(cache.path(), dir.path().join("nested").join(CACHE_FILE_NAME));
    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(cache.path()).unwrap()).unwrap();
    assert_eq!(on_disk["kraken_asset_pairs"], json!({"XXBTZUSD": {}}));
    assert_eq!(on_disk["other"], json!([1, 2]));
}

#[test]
fn test_clear_then_miss() {
    let dir = tempfile::TempDir::new().unwrap();
    let cache = FileCache::new(dir.path());

    cache.write_entry("kraken_asset_pairs", &json!({})).unwrap();
    cache.clear().unwrap();
    assert!(!cache.path().exists());
    assert!(cache.read_entry("kraken_asset_pairs").unwrap_err().is_miss());

    // clearing twice is fine
    cache.clear().unwrap();
}

#[test]
fn test_non_object_file_is_corrupt() {
    let dir = tempfile::TempDir::new().unwrap();
    let cache = FileCache::new(dir.path());
    std::fs::write(cache.path(), "[1, 2, 3]").unwrap();

    let err = cache.read_entry("kraken_asset_pairs").unwrap_err();
    assert!(err.is_miss());

    cache.write_entry("kraken_asset_pairs", &json!({})).unwrap();
    assert_eq!(cache.read_entry("kraken_asset_pairs").unwrap(), json!({}));
}
