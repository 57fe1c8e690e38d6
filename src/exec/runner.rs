// src/exec/runner.rs

//! Command runner for a single watch entry.

use tracing::{error, info, warn};

use crate::exec::backend::{CommandOutcome, ShellBackend};
use crate::exec::permit::PermitTicket;
use crate::registry::WatchEntry;

/// Run `entry`'s command once, holding its execution permit throughout.
///
/// Waits on `ticket` until every earlier run for the same entry has finished.
/// Failures are logged and folded into the returned outcome; nothing here is
/// fatal to the watch loop. The permit is released when the guard drops, on
/// every path out of this function.
pub async fn run_entry<B>(entry: &WatchEntry, ticket: PermitTicket, backend: &B) -> CommandOutcome
where
    B: ShellBackend + ?Sized,
{
    let _guard = ticket.acquire().await;

    info!(
        group = %entry.group(),
        file = %entry.path().display(),
        command = %entry.command(),
        "executing command"
    );

    match backend.run(entry.command()).await {
        Ok(CommandOutcome::Success) => {
            info!(
                group = %entry.group(),
                file = %entry.path().display(),
                "command finished"
            );
            CommandOutcome::Success
        }
        Ok(CommandOutcome::Failed(code)) => {
            warn!(
                group = %entry.group(),
                file = %entry.path().display(),
                exit_code = code,
                "command exited with failure"
            );
            CommandOutcome::Failed(code)
        }
        Err(err) => {
            error!(
                group = %entry.group(),
                file = %entry.path().display(),
                error = %err,
                "failed to run command"
            );
            CommandOutcome::Failed(-1)
        }
    }
}
