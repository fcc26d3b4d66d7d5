//! Use Cases

/// Cart state container
pub mod shopping_cart;

pub use shopping_cart::ShoppingCart;
