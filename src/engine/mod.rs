// src/engine/mod.rs

//! Change events and their dispatch.
//!
//! The poller produces [`ChangeEvent`]s; the [`Dispatcher`] turns each one
//! into an independent task that runs the entry's command under its
//! execution permit.

use std::sync::Arc;

use crate::registry::WatchEntry;

pub mod dispatcher;

pub use dispatcher::Dispatcher;

/// Why the poller fired for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeReason {
    /// The modification time differs from the last one observed.
    Modified,
    /// The file could not be stat'ed (deleted, permissions, ...).
    Unreadable,
}

/// A single "this entry changed" signal. Consumed exactly once.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub entry: Arc<WatchEntry>,
    pub reason: ChangeReason,
}

impl ChangeEvent {
    pub fn modified(entry: Arc<WatchEntry>) -> Self {
        Self {
            entry,
            reason: ChangeReason::Modified,
        }
    }

    pub fn unreadable(entry: Arc<WatchEntry>) -> Self {
        Self {
            entry,
            reason: ChangeReason::Unreadable,
        }
    }
}
