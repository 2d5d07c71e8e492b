//! In-memory change bus for the UI thread.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::mpsc;

use thiserror::Error;

use crate::bus::{ChangeBus, ListenerId, Subscription};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChangeBusError {
    /// A listener tried to publish while the bus was already dispatching.
    #[error("publish called from inside a listener")]
    Reentrant,
}

type Listener<M> = Rc<dyn Fn(&M)>;

/// In-memory fan-out bus.
///
/// - No IO / no async / no locks
/// - Channel subscribers are notified before callback listeners
/// - Listeners may subscribe or detach while being dispatched, but may not publish
pub struct InMemoryChangeBus<M> {
    subscribers: RefCell<Vec<mpsc::Sender<M>>>,
    listeners: RefCell<Vec<(ListenerId, Listener<M>)>>,
    next_listener: Cell<u64>,
    dispatching: Cell<bool>,
}

impl<M> InMemoryChangeBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl<M> Default for InMemoryChangeBus<M> {
    fn default() -> Self {
        Self {
            subscribers: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
            dispatching: Cell::new(false),
        }
    }
}

impl<M> core::fmt::Debug for InMemoryChangeBus<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InMemoryChangeBus")
            .field("subscribers", &self.subscriber_count())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Clears the dispatching flag even if a listener panics.
struct DispatchGuard<'a>(&'a Cell<bool>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<M> ChangeBus<M> for InMemoryChangeBus<M>
where
    M: Clone + 'static,
{
    type Error = ChangeBusError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        if self.dispatching.replace(true) {
            return Err(ChangeBusError::Reentrant);
        }
        let _guard = DispatchGuard(&self.dispatching);

        // Drop any dead subscribers while publishing.
        self.subscribers
            .borrow_mut()
            .retain(|tx| tx.send(message.clone()).is_ok());

        // Snapshot so callbacks can listen/unlisten without a borrow conflict.
        let listeners: Vec<Listener<M>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            listener(&message);
        }

        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.borrow_mut().push(tx);
        Subscription::new(rx)
    }

    fn listen(&self, listener: Box<dyn Fn(&M)>) -> ListenerId {
        let id = ListenerId::new(self.next_listener.get());
        self.next_listener.set(id.get() + 1);
        self.listeners.borrow_mut().push((id, Rc::from(listener)));
        tracing::trace!(listener = id.get(), "change listener attached");
        id
    }

    fn unlisten(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        before != listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subscription_receives_every_message_in_order() {
        let bus = InMemoryChangeBus::<u32>::new();
        let first = bus.subscribe();
        let second = bus.subscribe();

        bus.publish(1).unwrap();
        bus.publish(2).unwrap();

        assert_eq!(first.drain(), vec![1, 2]);
        assert_eq!(second.drain(), vec![1, 2]);
        assert!(first.try_recv().is_err());
    }

    #[test]
    fn subscriptions_only_see_later_messages() {
        let bus = InMemoryChangeBus::<u32>::new();
        bus.publish(1).unwrap();
        let late = bus.subscribe();
        bus.publish(2).unwrap();

        assert_eq!(late.drain(), vec![2]);
    }

    #[test]
    fn dropped_subscriptions_are_pruned_on_publish() {
        let bus = InMemoryChangeBus::<u32>::new();
        let kept = bus.subscribe();
        drop(bus.subscribe());
        assert_eq!(bus.subscriber_count(), 2);

        bus.publish(7).unwrap();

        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.drain(), vec![7]);
    }

    #[test]
    fn listeners_run_synchronously_and_can_be_detached() {
        let bus = InMemoryChangeBus::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let id = bus.listen(Box::new(move |m: &u32| sink.borrow_mut().push(*m)));

        bus.publish(3).unwrap();
        assert_eq!(*seen.borrow(), vec![3]);

        assert!(bus.unlisten(id));
        assert!(!bus.unlisten(id));
        bus.publish(4).unwrap();
        assert_eq!(*seen.borrow(), vec![3]);
    }

    #[test]
    fn listener_ids_are_not_reused() {
        let bus = InMemoryChangeBus::<u32>::new();
        let a = bus.listen(Box::new(|_: &u32| {}));
        bus.unlisten(a);
        let b = bus.listen(Box::new(|_: &u32| {}));
        assert_ne!(a, b);
    }

    #[test]
    fn publishing_from_a_listener_is_rejected() {
        let bus = Rc::new(InMemoryChangeBus::<u32>::new());
        let outcome = Rc::new(RefCell::new(None));

        let inner_bus = Rc::clone(&bus);
        let inner_outcome = Rc::clone(&outcome);
        bus.listen(Box::new(move |m: &u32| {
            *inner_outcome.borrow_mut() = Some(inner_bus.publish(m + 1));
        }));

        bus.publish(1).unwrap();
        assert_eq!(*outcome.borrow(), Some(Err(ChangeBusError::Reentrant)));

        // The flag is cleared once dispatch finishes.
        assert!(bus.publish(2).is_ok());
    }

    #[test]
    fn listener_may_detach_itself_during_dispatch() {
        let bus = Rc::new(InMemoryChangeBus::<u32>::new());
        let calls = Rc::new(Cell::new(0));
        let own_id = Rc::new(Cell::new(None));

        let inner_bus = Rc::clone(&bus);
        let inner_calls = Rc::clone(&calls);
        let inner_id = Rc::clone(&own_id);
        let id = bus.listen(Box::new(move |_: &u32| {
            inner_calls.set(inner_calls.get() + 1);
            if let Some(id) = inner_id.get() {
                inner_bus.unlisten(id);
            }
        }));
        own_id.set(Some(id));

        bus.publish(1).unwrap();
        bus.publish(2).unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(bus.listener_count(), 0);
    }
}
