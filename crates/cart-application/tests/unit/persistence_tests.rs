//! Write-through and reload behaviour of the cart

use crate::test_utils::{FailingRepository, RecordingRepository, empty_cart};
use cart_application::ShoppingCart;
use cart_domain::constants::CART_STORAGE_KEY;
use cart_domain::entities::{CartEntry, ItemId};
use cart_domain::ports::KeyValueStoreProvider;
use cart_providers::events::NullCartEventPublisher;
use cart_providers::key_value::InMemoryKeyValueStore;
use cart_providers::repository::KeyValueCartRepository;
use std::sync::Arc;

fn cart_over(store: &InMemoryKeyValueStore) -> ShoppingCart {
    let repository = KeyValueCartRepository::new(Arc::new(store.clone()));
    ShoppingCart::new(Arc::new(repository), NullCartEventPublisher::new_shared())
}

#[test]
fn test_repository_read_once_at_creation() {
    let repository = Arc::new(RecordingRepository::with_entries(vec![CartEntry::new(
        ItemId(2),
        3,
    )]));
    let mut cart = ShoppingCart::new(repository.clone(), NullCartEventPublisher::new_shared());

    cart.increase_cart_quantity(ItemId(2));
    cart.decrease_cart_quantity(ItemId(2));
    let _ = cart.get_item_quantity(ItemId(2));

    assert_eq!(repository.load_count(), 1);
    assert_eq!(cart.get_item_quantity(ItemId(2)), 3);
}

#[test]
fn test_every_mutation_writes_full_list() {
    let (mut cart, repository) = empty_cart();

    cart.increase_cart_quantity(ItemId(5));
    cart.increase_cart_quantity(ItemId(7));
    cart.decrease_cart_quantity(ItemId(99));
    cart.remove_from_cart(ItemId(5));

    let one_five = vec![CartEntry::new(ItemId(5), 1)];
    let five_and_seven = vec![CartEntry::new(ItemId(5), 1), CartEntry::new(ItemId(7), 1)];
    assert_eq!(
        repository.saves(),
        vec![
            one_five,
            five_and_seven.clone(),
            five_and_seven,
            vec![CartEntry::new(ItemId(7), 1)],
        ]
    );
}

#[test]
fn test_visibility_is_not_persisted() {
    let (mut cart, repository) = empty_cart();

    cart.open_cart();
    cart.close_cart();

    assert!(repository.saves().is_empty());
}

#[test]
fn test_reload_restores_identical_entries() {
    let store = InMemoryKeyValueStore::new();

    let mut cart = cart_over(&store);
    cart.increase_cart_quantity(ItemId(9));
    cart.increase_cart_quantity(ItemId(2));
    cart.increase_cart_quantity(ItemId(2));
    cart.increase_cart_quantity(ItemId(4));
    cart.open_cart();
    let before = cart.cart_items().to_vec();
    drop(cart);

    let reloaded = cart_over(&store);

    assert_eq!(reloaded.cart_items(), before.as_slice());
    assert!(!reloaded.is_open(), "panel state must reset on reload");
}

#[test]
fn test_malformed_store_starts_empty() {
    let store = InMemoryKeyValueStore::new();
    store.save(CART_STORAGE_KEY, b"][").unwrap();

    let mut cart = cart_over(&store);
    assert!(cart.cart_items().is_empty());

    // The next mutation overwrites the bad value
    cart.increase_cart_quantity(ItemId(1));
    assert_eq!(
        store.raw(CART_STORAGE_KEY).unwrap(),
        br#"[{"id":1,"quantity":1}]"#.to_vec()
    );
}

#[test]
fn test_invalid_entries_start_empty() {
    let store = InMemoryKeyValueStore::new();
    store
        .save(CART_STORAGE_KEY, br#"[{"id":1,"quantity":0}]"#)
        .unwrap();

    let cart = cart_over(&store);

    assert!(cart.cart_items().is_empty());
}

#[test]
fn test_failing_store_keeps_in_memory_state() {
    let mut cart = ShoppingCart::new(
        Arc::new(FailingRepository),
        NullCartEventPublisher::new_shared(),
    );
    assert!(cart.cart_items().is_empty());

    cart.increase_cart_quantity(ItemId(3));
    cart.increase_cart_quantity(ItemId(3));

    assert_eq!(cart.get_item_quantity(ItemId(3)), 2);
    assert_eq!(cart.cart_quantity(), 2);
}

#[test]
fn test_last_saved_matches_cart_items() {
    let (mut cart, repository) = empty_cart();

    cart.increase_cart_quantity(ItemId(11));
    cart.increase_cart_quantity(ItemId(12));
    cart.decrease_cart_quantity(ItemId(11));

    assert_eq!(repository.last_saved().as_deref(), Some(cart.cart_items()));
}
