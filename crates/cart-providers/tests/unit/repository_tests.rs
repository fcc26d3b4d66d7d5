//! Key-value cart repository tests

use cart_domain::constants::CART_STORAGE_KEY;
use cart_domain::entities::{CartEntry, ItemId};
use cart_domain::error::Error;
use cart_domain::ports::KeyValueStoreProvider;
use cart_domain::repositories::CartRepository;
use cart_providers::key_value::InMemoryKeyValueStore;
use cart_providers::repository::KeyValueCartRepository;
use std::sync::Arc;

fn repository() -> (InMemoryKeyValueStore, KeyValueCartRepository) {
    let store = InMemoryKeyValueStore::new();
    let repo = KeyValueCartRepository::new(Arc::new(store.clone()));
    (store, repo)
}

#[test]
fn test_load_without_stored_value_is_empty() {
    let (_, repo) = repository();

    assert!(repo.load().unwrap().is_empty());
    assert_eq!(repo.key(), CART_STORAGE_KEY);
}

#[test]
fn test_save_writes_json_under_fixed_key() {
    let (store, repo) = repository();

    repo.save(&[CartEntry::new(ItemId(5), 2), CartEntry::new(ItemId(7), 1)])
        .unwrap();

    let raw = store.raw("shopping-cart").expect("value should be stored");
    assert_eq!(
        String::from_utf8(raw).unwrap(),
        r#"[{"id":5,"quantity":2},{"id":7,"quantity":1}]"#
    );
}

#[test]
fn test_round_trip_preserves_order() {
    let (_, repo) = repository();
    let entries = vec![
        CartEntry::new(ItemId(9), 1),
        CartEntry::new(ItemId(2), 4),
        CartEntry::new(ItemId(5), 3),
    ];

    repo.save(&entries).unwrap();

    assert_eq!(repo.load().unwrap(), entries);
}

#[test]
fn test_custom_key() {
    let store = InMemoryKeyValueStore::new();
    let repo = KeyValueCartRepository::with_key(Arc::new(store.clone()), "guest-cart");

    repo.save(&[CartEntry::new(ItemId(1), 1)]).unwrap();

    assert!(store.raw("guest-cart").is_some());
    assert!(store.raw(CART_STORAGE_KEY).is_none());
}

#[test]
fn test_malformed_json_is_an_error() {
    let (store, repo) = repository();
    store.save(CART_STORAGE_KEY, b"{not json").unwrap();

    assert!(matches!(repo.load().unwrap_err(), Error::Json { .. }));
}

#[test]
fn test_zero_quantity_is_invalid_data() {
    let (store, repo) = repository();
    store
        .save(CART_STORAGE_KEY, br#"[{"id":1,"quantity":0}]"#)
        .unwrap();

    assert!(matches!(
        repo.load().unwrap_err(),
        Error::InvalidData { .. }
    ));
}

#[test]
fn test_duplicate_id_is_invalid_data() {
    let (store, repo) = repository();
    store
        .save(
            CART_STORAGE_KEY,
            br#"[{"id":1,"quantity":1},{"id":1,"quantity":2}]"#,
        )
        .unwrap();

    assert!(matches!(
        repo.load().unwrap_err(),
        Error::InvalidData { .. }
    ));
}
