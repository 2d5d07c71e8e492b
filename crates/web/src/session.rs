//! Home page view controller.
//!
//! The session is the single owner of the product store for one page load. The
//! view never keeps its own copy of the list; it renders snapshots and
//! re-renders when the store reports a change.

use prodcheck_events::{ListenerId, Subscription};
use prodcheck_products::{ProductId, ProductList, ProductStore, StoreEvent};

use crate::clock::{Clock, SystemClock, format_timestamp};
use crate::view_model::{self, ProductRow};

#[derive(Debug)]
pub struct HomeSession<C: Clock = SystemClock> {
    store: ProductStore,
    clock: C,
    clock_text: String,
}

impl<C: Clock> HomeSession<C> {
    /// Session over an existing store; reads the clock once.
    pub fn new(store: ProductStore, clock: C) -> Self {
        let clock_text = format_timestamp(&clock.now());
        Self {
            store,
            clock,
            clock_text,
        }
    }

    /// Session over the seeded startup product set.
    pub fn start(clock: C) -> Self {
        Self::new(ProductStore::seeded(), clock)
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    pub fn products(&self) -> ProductList {
        self.store.list()
    }

    pub fn rows(&self) -> Vec<ProductRow> {
        view_model::rows(&self.store.list())
    }

    /// Delete button handler.
    pub fn handle_delete(&mut self, id: ProductId) {
        tracing::debug!(product_id = %id, "delete clicked");
        self.store.delete(id);
    }

    /// Refresh button handler. Re-reads the clock and returns the new text.
    pub fn handle_refresh(&mut self) -> &str {
        self.clock_text = format_timestamp(&self.clock.now());
        tracing::trace!(clock = %self.clock_text, "clock refreshed");
        &self.clock_text
    }

    /// Timestamp text as of page load or the last refresh.
    pub fn clock_text(&self) -> &str {
        &self.clock_text
    }

    pub fn observe(&self, observer: impl Fn(&StoreEvent) + 'static) -> ListenerId {
        self.store.observe(observer)
    }

    pub fn unobserve(&self, id: ListenerId) -> bool {
        self.store.unobserve(id)
    }

    pub fn subscribe(&self) -> Subscription<StoreEvent> {
        self.store.subscribe()
    }
}
