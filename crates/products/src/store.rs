//! The authoritative in-memory product list.

use std::collections::HashSet;
use std::rc::Rc;

use prodcheck_core::{DomainError, DomainResult};
use prodcheck_events::{ChangeBus, Event, InMemoryChangeBus, ListenerId, Subscription};

use crate::product::{Entity, Product, ProductId};
use crate::seed::seed_products;

/// Immutable, cheaply clonable snapshot of the store's contents.
pub type ProductList = Rc<[Product]>;

/// Change notification emitted by [`ProductStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// `product` was removed; `products` is the list right after the removal.
    ProductDeleted {
        product: Product,
        products: ProductList,
    },
}

impl StoreEvent {
    /// The store contents after this change.
    pub fn products(&self) -> &ProductList {
        match self {
            StoreEvent::ProductDeleted { products, .. } => products,
        }
    }
}

impl Event for StoreEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StoreEvent::ProductDeleted { .. } => "products.product.deleted",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

/// Ordered product list with delete-by-id and change notification.
///
/// Invariants:
/// - ids are pairwise distinct
/// - display order is insertion order
/// - the list is replaced, never mutated in place, so earlier snapshots stay valid
#[derive(Debug)]
pub struct ProductStore {
    products: ProductList,
    bus: InMemoryChangeBus<StoreEvent>,
}

impl ProductStore {
    /// Store holding the fixed startup product set.
    pub fn seeded() -> Self {
        Self {
            products: seed_products().into(),
            bus: InMemoryChangeBus::new(),
        }
    }

    /// Store holding `products` in the given order.
    ///
    /// Fails if two products share an id.
    pub fn from_products(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id()) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {}",
                    product.id()
                )));
            }
        }

        Ok(Self {
            products: products.into(),
            bus: InMemoryChangeBus::new(),
        })
    }

    /// Current products in insertion order.
    pub fn list(&self) -> ProductList {
        Rc::clone(&self.products)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Remove the product with `id`, if present.
    ///
    /// Unknown ids are a no-op and notify nobody.
    pub fn delete(&mut self, id: ProductId) {
        let Some(removed) = self.get(id).cloned() else {
            tracing::trace!(product_id = %id, "delete ignored, no such product");
            return;
        };

        let remaining: ProductList = self
            .products
            .iter()
            .filter(|p| p.id() != id)
            .cloned()
            .collect();
        self.products = remaining;

        let event = StoreEvent::ProductDeleted {
            product: removed,
            products: Rc::clone(&self.products),
        };
        tracing::debug!(
            event_type = event.event_type(),
            event_version = event.version(),
            product_id = %id,
            remaining = self.products.len(),
            "product deleted"
        );

        if let Err(err) = self.bus.publish(event) {
            tracing::warn!(error = %err, product_id = %id, "store change not delivered");
        }
    }

    /// Channel subscription receiving every later change.
    pub fn subscribe(&self) -> Subscription<StoreEvent> {
        self.bus.subscribe()
    }

    /// Run `observer` synchronously after every change.
    pub fn observe(&self, observer: impl Fn(&StoreEvent) + 'static) -> ListenerId {
        self.bus.listen(Box::new(observer))
    }

    pub fn unobserve(&self, id: ListenerId) -> bool {
        self.bus.unlisten(id)
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::seeded()
    }
}
