//! Products domain module.
//!
//! This crate holds the in-memory product list and its change contract,
//! implemented purely as deterministic domain logic (no rendering, no storage).

pub mod product;
pub mod seed;
pub mod store;

pub use product::{Availability, Entity, Product, ProductId};
pub use seed::seed_products;
pub use store::{ProductList, ProductStore, StoreEvent};
