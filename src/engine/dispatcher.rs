// src/engine/dispatcher.rs

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::engine::{ChangeEvent, ChangeReason};
use crate::exec::backend::{CommandOutcome, ShellBackend};
use crate::exec::runner::run_entry;

/// Turns change events into command executions.
///
/// Every event gets its own Tokio task, so a slow command never delays the
/// poller or other entries. Runs of the *same* entry are serialized through
/// its execution permit, in the order the events were dispatched. There is no
/// coalescing and no bound on the number of pending tasks.
pub struct Dispatcher<B: ?Sized> {
    backend: Arc<B>,
}

impl<B: ?Sized> fmt::Debug for Dispatcher<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

impl<B> Dispatcher<B>
where
    B: ShellBackend + ?Sized + 'static,
{
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Start one execution for `event` and return its handle.
    ///
    /// The permit slot is reserved here, before spawning, so arrival order is
    /// what decides which run of an entry goes first.
    pub fn dispatch(&self, event: ChangeEvent) -> JoinHandle<CommandOutcome> {
        let ticket = event.entry.permit().reserve();
        let backend = Arc::clone(&self.backend);

        debug!(
            group = %event.entry.group(),
            file = %event.entry.path().display(),
            "dispatching execution"
        );

        tokio::spawn(async move { run_entry(&event.entry, ticket, backend.as_ref()).await })
    }

    /// Consume events until the channel closes.
    ///
    /// Spawned executions are detached; they keep running (or waiting on their
    /// permit) after this returns.
    pub async fn run(self, mut events_rx: mpsc::UnboundedReceiver<ChangeEvent>) {
        info!("dispatcher started");

        while let Some(event) = events_rx.recv().await {
            match event.reason {
                ChangeReason::Modified => {
                    info!(
                        group = %event.entry.group(),
                        file = %event.entry.path().display(),
                        "file modified"
                    );
                }
                ChangeReason::Unreadable => {
                    info!(
                        group = %event.entry.group(),
                        file = %event.entry.path().display(),
                        "file unreadable"
                    );
                }
            }
            let _ = self.dispatch(event);
        }

        info!("dispatcher finished (channel closed)");
    }
}
