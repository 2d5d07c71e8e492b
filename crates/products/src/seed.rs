//! The fixed product set a fresh session starts with.

use crate::product::{Availability, Product, ProductId};

const SEED_RETAILER: &str = "BestBuy.com";

/// Seed products, in display order. Ids are distinct.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(ProductId::new(1), "Macbook", SEED_RETAILER, Availability::Yes),
        Product::new(ProductId::new(2), "Vizio TV", SEED_RETAILER, Availability::Yes),
        Product::new(ProductId::new(3), "RTX 3090", SEED_RETAILER, Availability::No),
    ]
}
