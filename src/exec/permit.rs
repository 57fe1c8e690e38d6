// src/exec/permit.rs

//! Per-entry execution permit.
//!
//! Each watch entry owns one [`ExecutionPermit`]. Runs are serialized through
//! a chain of oneshot channels:
//!
//! - [`ExecutionPermit::reserve`] is called synchronously by the dispatcher,
//!   in event arrival order, and hands out a [`PermitTicket`] linked to the
//!   previously reserved ticket.
//! - [`PermitTicket::acquire`] waits until that predecessor has been released
//!   and returns a [`PermitGuard`].
//! - Dropping the guard releases the permit for the next ticket. This happens
//!   on every exit path of the runner, including panics.
//!
//! Because reservation order is fixed before any task is spawned, executions
//! for one entry start in the order their events arrived, no matter how the
//! runtime schedules the spawned tasks.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use tokio::sync::oneshot;

/// Exclusive-execution permit owned by a single watch entry.
#[derive(Default)]
pub struct ExecutionPermit {
    /// Completion signal of the most recently reserved ticket.
    tail: Mutex<Option<oneshot::Receiver<()>>>,
}

impl fmt::Debug for ExecutionPermit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionPermit").finish_non_exhaustive()
    }
}

impl ExecutionPermit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next slot in this permit's queue.
    pub fn reserve(&self) -> PermitTicket {
        let (release, done) = oneshot::channel();
        let previous = self
            .tail
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(done);

        PermitTicket { previous, release: Some(release) }
    }
}

/// A reserved, not yet acquired, slot on an [`ExecutionPermit`].
///
/// A ticket dropped before it acquires (its task was aborted while waiting)
/// still has to keep its place in the queue: the next ticket must not start
/// until the predecessor's run is over.
#[derive(Debug)]
pub struct PermitTicket {
    previous: Option<oneshot::Receiver<()>>,
    release: Option<oneshot::Sender<()>>,
}

impl PermitTicket {
    /// Wait for every earlier ticket to finish, then take the permit.
    ///
    /// Cancel-safe: if this future is dropped while waiting, the ticket's
    /// drop hands the wait over to a background task.
    pub async fn acquire(mut self) -> PermitGuard {
        if let Some(previous) = self.previous.as_mut() {
            // Err means the sender was dropped, which is exactly the release.
            let _ = previous.await;
        }
        self.previous = None;

        PermitGuard {
            _release: self.release.take(),
        }
    }
}

impl Drop for PermitTicket {
    fn drop(&mut self) {
        let Some(release) = self.release.take() else {
            return;
        };
        let Some(previous) = self.previous.take() else {
            // Nothing ahead of us; dropping `release` lets the next one in.
            return;
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    let _ = previous.await;
                    drop(release);
                });
            }
            Err(_) => {
                // No runtime left to wait on; the queue is being torn down.
                drop(release);
            }
        }
    }
}

/// Held for the duration of one execution. Dropping it releases the permit.
#[derive(Debug)]
pub struct PermitGuard {
    _release: Option<oneshot::Sender<()>>,
}
