use super::*;

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set_item("k", "v").unwrap();
    assert_eq!(b.get_item("k").unwrap().as_deref(), Some("v"));
    assert_eq!(b.len(), 1);
}

#[test]
fn memory_storage_remove_missing_key_is_ok() {
    let storage = MemoryStorage::new();
    assert!(storage.remove_item("nope").is_ok());
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_rejects_writes_when_asked() {
    let storage = MemoryStorage::new();
    storage.set_reject_writes(true);
    assert_eq!(storage.set_item("k", "v"), Err(StorageError::Io("quota exceeded".to_owned())));
    storage.set_reject_writes(false);
    assert!(storage.set_item("k", "v").is_ok());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_and_read_only_without_a_window() {
    let storage = BrowserStorage;
    assert_eq!(storage.get_item("access_token"), Ok(None));
    assert_eq!(storage.set_item("access_token", "a"), Err(StorageError::Unavailable));
    assert_eq!(storage.remove_item("access_token"), Ok(()));
}
