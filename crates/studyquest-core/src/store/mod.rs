//! Progression engine.
//!
//! [`Store`] owns the one live [`Snapshot`](crate::storage::Snapshot) and is
//! the only thing that mutates it. Each mutating operation persists the
//! whole snapshot and publishes a [`Notification`](crate::events::Notification).

mod engine;


pub use engine::Store;
