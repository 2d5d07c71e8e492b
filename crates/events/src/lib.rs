//! Change notification plumbing between domain state and its observers.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{ChangeBus, ListenerId, Subscription};
pub use event::Event;
pub use in_memory_bus::{ChangeBusError, InMemoryChangeBus};
