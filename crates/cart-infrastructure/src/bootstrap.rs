//! Cart bootstrap
//!
//! Turns an [`AppConfig`] into a ready [`ShoppingCart`]: selects the
//! key-value backend, wraps it in the JSON cart repository and attaches a
//! broadcast publisher that the UI layer subscribes to.

use crate::config::{AppConfig, StorageConfig, StorageProviderKind, validate_app_config};
use cart_application::ShoppingCart;
use cart_domain::error::Result;
use cart_domain::ports::KeyValueStoreProvider;
use cart_providers::events::BroadcastCartEventPublisher;
use cart_providers::key_value::{FilesystemKeyValueStore, InMemoryKeyValueStore, NullKeyValueStore};
use cart_providers::repository::KeyValueCartRepository;
use std::sync::Arc;
use tracing::info;

/// Everything a consumer needs to drive and observe the cart
pub struct CartComponents {
    /// The cart state container
    pub cart: ShoppingCart,
    /// Publisher the cart announces changes on; subscribe before mutating
    pub events: Arc<BroadcastCartEventPublisher>,
    /// Backing key-value store
    pub store: Arc<dyn KeyValueStoreProvider>,
}

impl std::fmt::Debug for CartComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartComponents")
            .field("cart", &self.cart)
            .field("events", &self.events)
            .field("store", &self.store.provider_name())
            .finish()
    }
}

/// Create the key-value store selected by `config`
pub fn create_store(config: &StorageConfig) -> Arc<dyn KeyValueStoreProvider> {
    match config.provider {
        StorageProviderKind::Memory => InMemoryKeyValueStore::new_shared(),
        StorageProviderKind::Filesystem => Arc::new(FilesystemKeyValueStore::new(&config.path)),
        StorageProviderKind::Null => NullKeyValueStore::new_shared(),
    }
}

/// Build a cart from configuration
///
/// The configuration is validated first, so values built by hand get the
/// same checks as loaded ones.
pub fn build_cart(config: &AppConfig) -> Result<CartComponents> {
    validate_app_config(config)?;

    let store = create_store(&config.storage);
    let repository = KeyValueCartRepository::with_key(store.clone(), config.storage.key.clone());
    let events = Arc::new(BroadcastCartEventPublisher::with_capacity(
        config.events.capacity,
    ));
    let cart = ShoppingCart::new(Arc::new(repository), events.clone());

    info!(
        provider = %config.storage.provider,
        key = %config.storage.key,
        items = cart.cart_items().len(),
        "Cart ready"
    );

    Ok(CartComponents {
        cart,
        events,
        store,
    })
}
