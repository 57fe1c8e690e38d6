use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use spyrun::errors::{Result, SpyrunError};
use spyrun::exec::{CommandOutcome, ShellBackend};

/// One command "run" as seen by [`FakeShell`].
#[derive(Debug, Clone)]
pub struct RecordedRun {
    pub command: String,
    pub started: Instant,
    pub finished: Instant,
}

impl RecordedRun {
    /// True if the two runs were in flight at the same time.
    pub fn overlaps(&self, other: &RecordedRun) -> bool {
        self.started < other.finished && other.started < self.finished
    }
}

/// A fake shell that:
/// - records every command it is asked to run, with start/finish instants
/// - sleeps for a fixed delay instead of spawning a process
/// - reports `Success`, or `Failed(1)` for commands listed in `failing`, or a
///   spawn error for commands listed in `unspawnable`.
#[derive(Debug, Clone, Default)]
pub struct FakeShell {
    delay: Duration,
    failing: Vec<String>,
    unspawnable: Vec<String>,
    runs: Arc<Mutex<Vec<RecordedRun>>>,
}

impl FakeShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn failing(mut self, command: &str) -> Self {
        self.failing.push(command.to_string());
        self
    }

    pub fn unspawnable(mut self, command: &str) -> Self {
        self.unspawnable.push(command.to_string());
        self
    }

    /// Snapshot of every finished run, in completion order.
    pub fn runs(&self) -> Vec<RecordedRun> {
        self.runs.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.runs().into_iter().map(|r| r.command).collect()
    }
}

impl ShellBackend for FakeShell {
    fn run<'a>(
        &'a self,
        command: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>> {
        Box::pin(async move {
            if self.unspawnable.iter().any(|c| c == command) {
                return Err(SpyrunError::Other(anyhow::anyhow!(
                    "cannot spawn `{command}`"
                )));
            }

            let started = Instant::now();
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            let finished = Instant::now();

            self.runs.lock().unwrap().push(RecordedRun {
                command: command.to_string(),
                started,
                finished,
            });

            if self.failing.iter().any(|c| c == command) {
                Ok(CommandOutcome::Failed(1))
            } else {
                Ok(CommandOutcome::Success)
            }
        })
    }
}
