use super::*;
use crate::util::storage::MemoryStorage;

fn student(id: i64) -> User {
    User {
        id,
        full_name: "Asha Kumari".to_owned(),
        mobile_number: "9876543210".to_owned(),
        email: "asha@example.com".to_owned(),
        date_joined: "2024-09-01T10:00:00Z".to_owned(),
        profile: None,
    }
}

fn store() -> (TokenStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    (TokenStore::new(storage.clone()), storage)
}

// =============================================================
// Round trip
// =============================================================

#[test]
fn store_then_read_returns_last_written_pair() {
    let (store, _) = store();
    store.store_auth_data(&SessionTokens::new("a1", "r1"), &student(1)).unwrap();
    store.store_auth_data(&SessionTokens::new("a2", "r2"), &student(2)).unwrap();

    assert_eq!(store.get_tokens().unwrap(), Some(SessionTokens::new("a2", "r2")));
    assert_eq!(store.get_user().unwrap(), Some(student(2)));
    assert!(store.is_authenticated().unwrap());
}

#[test]
fn stores_under_documented_keys() {
    let (store, storage) = store();
    store.store_auth_data(&SessionTokens::new("a", "r"), &student(1)).unwrap();
    assert_eq!(storage.get_item(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("a"));
    assert_eq!(storage.get_item(REFRESH_TOKEN_KEY).unwrap().as_deref(), Some("r"));
    let raw = storage.get_item(USER_KEY).unwrap().unwrap();
    assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), student(1));
}

// =============================================================
// Partial presence
// =============================================================

#[test]
fn partial_tokens_read_as_absent() {
    let (store, storage) = store();
    storage.set_item(ACCESS_TOKEN_KEY, "a").unwrap();
    assert_eq!(store.get_tokens().unwrap(), None);
    assert!(!store.is_authenticated().unwrap());
}

#[test]
fn empty_token_values_read_as_absent() {
    let (store, storage) = store();
    storage.set_item(ACCESS_TOKEN_KEY, "").unwrap();
    storage.set_item(REFRESH_TOKEN_KEY, "r").unwrap();
    assert_eq!(store.get_tokens().unwrap(), None);
}

// =============================================================
// User decoding
// =============================================================

#[test]
fn missing_user_is_none() {
    let (store, _) = store();
    assert!(store.get_user().unwrap().is_none());
}

#[test]
fn corrupt_user_is_reported_not_swallowed() {
    let (store, storage) = store();
    storage.set_item(USER_KEY, "{not json").unwrap();
    assert!(matches!(store.get_user(), Err(TokenStoreError::CorruptUser(_))));
}

// =============================================================
// Clearing
// =============================================================

#[test]
fn clear_is_idempotent() {
    let (store, storage) = store();
    store.store_auth_data(&SessionTokens::new("a", "r"), &student(1)).unwrap();
    store.clear_auth_data().unwrap();
    store.clear_auth_data().unwrap();
    assert!(!store.is_authenticated().unwrap());
    assert!(store.get_user().unwrap().is_none());
    assert!(storage.is_empty());
}

#[test]
fn failed_write_leaves_nothing_behind() {
    let (store, storage) = store();
    store.store_auth_data(&SessionTokens::new("old", "old"), &student(1)).unwrap();
    storage.set_reject_writes(true);

    let err = store.store_auth_data(&SessionTokens::new("a", "r"), &student(2)).unwrap_err();
    assert!(matches!(err, TokenStoreError::Storage(StorageError::Io(_))));
    assert!(storage.is_empty());
}

#[test]
fn store_user_keeps_tokens() {
    let (store, _) = store();
    store.store_auth_data(&SessionTokens::new("a", "r"), &student(1)).unwrap();
    let mut renamed = student(1);
    renamed.full_name = "Asha K.".to_owned();
    store.store_user(&renamed).unwrap();
    assert_eq!(store.get_tokens().unwrap(), Some(SessionTokens::new("a", "r")));
    assert_eq!(store.get_user().unwrap(), Some(renamed));
}
