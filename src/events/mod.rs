//! Change notifications for collaborators.
//!
//! The engine queues a `GameEvent` for every zone it touches and for
//! counters that change, then flushes the queue to all registered
//! `GameListener`s once the call completes.

pub mod event;
pub mod listener;

pub use event::GameEvent;
pub use listener::{GameListener, ListenerId, Listeners};
