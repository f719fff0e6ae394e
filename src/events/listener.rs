//! Listener registry.
//!
//! Collaborators register listeners with the engine and are called
//! synchronously, in registration order, once a state-changing call has
//! finished. Notification is fire-and-forget: listeners cannot veto or
//! delay anything.

use std::fmt;

use super::event::GameEvent;

/// Receives change notifications.
///
/// Implemented for any `FnMut(&GameEvent)`, so closures work directly.
pub trait GameListener {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameListener for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Identifier returned by `Listeners::add`, used for removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// Registered listeners plus events queued during the current call.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(ListenerId, Box<dyn GameListener>)>,
    pending: Vec<GameEvent>,
    next_id: u32,
}

impl Listeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn add(&mut self, listener: Box<dyn GameListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queue an event, dropping exact duplicates already queued.
    pub fn queue(&mut self, event: GameEvent) {
        if !self.pending.contains(&event) {
            self.pending.push(event);
        }
    }

    /// Deliver every queued event to every listener.
    pub fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending);
        for event in &pending {
            for (_, listener) in &mut self.entries {
                listener.on_event(event);
            }
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .field("pending", &self.pending)
            .finish()
    }
}
