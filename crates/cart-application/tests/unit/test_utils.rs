//! Fakes shared by the cart use case tests

use cart_application::ShoppingCart;
use cart_domain::entities::CartEntry;
use cart_domain::error::{Error, Result};
use cart_domain::repositories::CartRepository;
use cart_providers::events::NullCartEventPublisher;
use std::sync::{Arc, Mutex};

/// Repository fake that records every save
#[derive(Default)]
pub struct RecordingRepository {
    initial: Vec<CartEntry>,
    saves: Mutex<Vec<Vec<CartEntry>>>,
    loads: Mutex<usize>,
}

impl RecordingRepository {
    pub fn with_entries(initial: Vec<CartEntry>) -> Self {
        Self {
            initial,
            ..Self::default()
        }
    }

    pub fn saves(&self) -> Vec<Vec<CartEntry>> {
        self.saves.lock().unwrap().clone()
    }

    pub fn last_saved(&self) -> Option<Vec<CartEntry>> {
        self.saves.lock().unwrap().last().cloned()
    }

    pub fn load_count(&self) -> usize {
        *self.loads.lock().unwrap()
    }
}

impl CartRepository for RecordingRepository {
    fn load(&self) -> Result<Vec<CartEntry>> {
        *self.loads.lock().unwrap() += 1;
        Ok(self.initial.clone())
    }

    fn save(&self, entries: &[CartEntry]) -> Result<()> {
        self.saves.lock().unwrap().push(entries.to_vec());
        Ok(())
    }
}

/// Repository fake whose reads and writes always fail
pub struct FailingRepository;

impl CartRepository for FailingRepository {
    fn load(&self) -> Result<Vec<CartEntry>> {
        Err(Error::storage("store unavailable"))
    }

    fn save(&self, _entries: &[CartEntry]) -> Result<()> {
        Err(Error::storage("store unavailable"))
    }
}

/// Empty cart over a recording repository
pub fn empty_cart() -> (ShoppingCart, Arc<RecordingRepository>) {
    let repository = Arc::new(RecordingRepository::default());
    let cart = ShoppingCart::new(repository.clone(), NullCartEventPublisher::new_shared());
    (cart, repository)
}

/// Asserts the derived total matches the entry list
pub fn assert_quantity_consistent(cart: &ShoppingCart) {
    let sum: u64 = cart
        .cart_items()
        .iter()
        .map(|entry| u64::from(entry.quantity))
        .sum();
    assert_eq!(cart.cart_quantity(), sum);
}
