//! Pending-event queue owned by each engine.

use super::event::GameEvent;

/// FIFO of events not yet collected by the caller.
///
/// Engines push as they apply a move; the presentation layer drains after
/// each call. Undrained events accumulate until the engine is reset, which
/// discards them and leaves only `GameEvent::Reset`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventQueue {
    pending: Vec<GameEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event.
    pub fn push(&mut self, event: GameEvent) {
        self.pending.push(event);
    }

    /// Events recorded so far, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.pending
    }

    /// Number of undrained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending event, oldest first, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }
}
