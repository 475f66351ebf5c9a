//! Value cache snapshot file tests

use std::fs;

use std::sync::Arc;

use bindery_application::cache::ValueCache;
use bindery_domain::value::Value;
use bindery_infrastructure::snapshot::{load_snapshot, save_snapshot};
use tempfile::TempDir;

fn filled_cache() -> ValueCache {
    let cache = ValueCache::new();
    cache.put("token", Value::from("secret"));
    cache.put("port", Value::Int(8080));
    cache.put("limit", Value::ptr(Value::Uint(10)));
    cache
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("cache.bin");
    let cache = filled_cache();

    save_snapshot(&cache, &path).unwrap();
    assert!(path.is_file());
    let names: Vec<_> = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec!["cache.bin"]);

    let restored = ValueCache::new();
    assert!(load_snapshot(&restored, &path).unwrap());
    assert_eq!(restored.entries(), cache.entries());
}

#[test]
fn test_load_missing_file_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let cache = ValueCache::new();

    assert!(!load_snapshot(&cache, &dir.path().join("absent.bin")).unwrap());
    assert!(cache.is_empty());
}

#[test]
fn test_load_empty_file_yields_empty_cache() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.bin");
    fs::write(&path, b"").unwrap();
    let cache = ValueCache::new();

    assert!(load_snapshot(&cache, &path).unwrap());
    assert!(cache.is_empty());
}

#[test]
fn test_save_replaces_previous_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cache.bin");
    save_snapshot(&filled_cache(), &path).unwrap();

    let smaller = ValueCache::new();
    smaller.put("only", Value::Bool(true));
    save_snapshot(&smaller, &path).unwrap();

    let restored = ValueCache::new();
    load_snapshot(&restored, &path).unwrap();
    assert_eq!(restored.len(), 1);
    assert_eq!(restored.get("only"), Some(Value::Bool(true)));
}

#[test]
fn test_load_corrupt_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corrupt.bin");
    fs::write(&path, [0xff_u8; 7]).unwrap();

    let err = load_snapshot(&ValueCache::new(), &path).unwrap_err();
    assert!(err.to_string().contains("Persistence"));
}

#[test]
fn test_failed_save_leaves_no_files_behind() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cache.bin");
    let cache = filled_cache();
    cache.put("client", Value::instance(Arc::new(5_u8)));

    let err = save_snapshot(&cache, &path).unwrap_err();
    assert!(err.to_string().contains("client"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_failed_save_keeps_previous_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cache.bin");
    save_snapshot(&filled_cache(), &path).unwrap();

    let broken = ValueCache::new();
    broken.put("client", Value::instance(Arc::new(5_u8)));
    save_snapshot(&broken, &path).unwrap_err();

    let restored = ValueCache::new();
    load_snapshot(&restored, &path).unwrap();
    assert_eq!(restored.entries(), filled_cache().entries());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
