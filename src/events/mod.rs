//! State-change notification.
//!
//! Engines do not call back into the presentation layer. Each accepted move
//! pushes `GameEvent`s onto the engine's `EventQueue`, and the caller drains
//! them (see `BoardGame::drain_events`). Rejected moves push nothing.

pub mod event;
pub mod queue;

pub use event::GameEvent;
pub use queue::EventQueue;
