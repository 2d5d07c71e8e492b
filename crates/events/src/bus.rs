//! Change publishing/subscription abstraction (mechanics only).
//!
//! Two delivery styles share one bus:
//!
//! - **Subscriptions**: a channel receiver per consumer, drained at the
//!   consumer's own pace (tests, deferred renderers).
//! - **Listeners**: callbacks invoked synchronously during `publish`, used by
//!   reactive views that must re-render in the same event-loop turn.
//!
//! Everything here is single-threaded. A bus lives on the UI thread next to
//! the state it reports on, so no trait here requires `Send` or `Sync`.

use std::sync::mpsc::{Receiver, TryRecvError};

/// Handle returned by [`ChangeBus::listen`], used to detach the callback later.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// A subscription to a change stream.
///
/// Each subscription gets a copy of every message published after it was
/// created (broadcast semantics), in publish order.
///
/// ```ignore
/// let subscription = bus.subscribe();
/// store.delete(ProductId::new(2));
/// for change in subscription.drain() {
///     render(change);
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Take every message that is currently pending.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Observer bus for state changes.
pub trait ChangeBus<M> {
    type Error: core::fmt::Debug + 'static;

    /// Deliver `message` to every live subscription and listener.
    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;

    /// Register a callback invoked synchronously on every publish.
    fn listen(&self, listener: Box<dyn Fn(&M)>) -> ListenerId;

    /// Detach a callback. Returns `false` if the id was unknown.
    fn unlisten(&self, id: ListenerId) -> bool;
}

impl<M, B> ChangeBus<M> for std::rc::Rc<B>
where
    B: ChangeBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }

    fn listen(&self, listener: Box<dyn Fn(&M)>) -> ListenerId {
        (**self).listen(listener)
    }

    fn unlisten(&self, id: ListenerId) -> bool {
        (**self).unlisten(id)
    }
}
