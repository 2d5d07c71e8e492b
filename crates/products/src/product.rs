use core::str::FromStr;

use serde::{Deserialize, Serialize};

use prodcheck_core::{DomainError, ValueObject};

pub use prodcheck_core::{Entity, ProductId};

/// Whether a retailer currently has the product in stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Yes,
    No,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Yes => "yes",
            Availability::No => "no",
        }
    }

    pub fn is_available(&self) -> bool {
        *self == Availability::Yes
    }
}

impl ValueObject for Availability {}

impl core::fmt::Display for Availability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "yes" => Ok(Availability::Yes),
            "no" => Ok(Availability::No),
            other => Err(DomainError::invalid_id(format!("Availability: {other:?}"))),
        }
    }
}

impl From<bool> for Availability {
    fn from(in_stock: bool) -> Self {
        if in_stock { Availability::Yes } else { Availability::No }
    }
}

/// A tracked product as shown in the listing.
///
/// Fields are display strings only; nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    model: String,
    retailer: String,
    available: Availability,
}

impl Product {
    pub fn new(
        id: ProductId,
        model: impl Into<String>,
        retailer: impl Into<String>,
        available: Availability,
    ) -> Self {
        Self {
            id,
            model: model.into(),
            retailer: retailer.into(),
            available,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    pub fn available(&self) -> Availability {
        self.available
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_renders_lowercase() {
        assert_eq!(Availability::Yes.to_string(), "yes");
        assert_eq!(Availability::No.as_str(), "no");
        assert!(Availability::Yes.is_available());
        assert!(!Availability::from(false).is_available());
    }

    #[test]
    fn availability_parses_known_values_only() {
        assert_eq!("yes".parse::<Availability>().unwrap(), Availability::Yes);
        assert_eq!(" no".parse::<Availability>().unwrap(), Availability::No);

        match "maybe".parse::<Availability>().unwrap_err() {
            DomainError::InvalidId(msg) => assert!(msg.contains("maybe")),
            other => panic!("Expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn product_serializes_with_lowercase_availability() {
        let product = Product::new(ProductId::new(3), "RTX 3090", "BestBuy.com", Availability::No);
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "model": "RTX 3090",
                "retailer": "BestBuy.com",
                "available": "no"
            })
        );
    }

    #[test]
    fn id_is_read_through_entity() {
        let product = Product::new(ProductId::new(1), "Macbook", "BestBuy.com", Availability::Yes);
        assert_eq!(product.id(), ProductId::new(1));
    }
}
