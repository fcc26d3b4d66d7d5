//! Application Layer - Storefront Cart
//!
//! Holds the cart state container, the single source of truth for cart
//! contents and cart panel visibility.
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `cart-domain`: entities, ports and events
//! - `tracing` for structured logs
//!
//! Concrete stores and publishers are injected by the caller (see
//! `cart-providers` and `cart-infrastructure`).

pub mod use_cases;

pub use use_cases::*;
