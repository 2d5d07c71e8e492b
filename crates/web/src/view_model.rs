//! Flat display rows for the product listing.

use prodcheck_products::{Entity, Product, ProductId};

/// One line of the listing: model, retailer, availability, plus the id the
/// delete button reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: ProductId,
    pub model: String,
    pub retailer: String,
    pub available: &'static str,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            model: product.model().to_string(),
            retailer: product.retailer().to_string(),
            available: product.available().as_str(),
        }
    }
}

pub fn rows(products: &[Product]) -> Vec<ProductRow> {
    products.iter().map(ProductRow::from).collect()
}
