// src/registry/entry.rs

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;

use crate::config::GroupName;
use crate::exec::permit::ExecutionPermit;

/// One concrete file being watched.
///
/// The path and command are fixed at startup. The last observed modification
/// time is only written by the poller; the execution permit is only taken by
/// the command runner.
#[derive(Debug)]
pub struct WatchEntry {
    group: GroupName,
    path: PathBuf,
    command: String,
    last_modified: Mutex<SystemTime>,
    permit: ExecutionPermit,
}

impl WatchEntry {
    pub fn new(
        group: impl Into<GroupName>,
        path: impl Into<PathBuf>,
        command: impl Into<String>,
        last_modified: SystemTime,
    ) -> Self {
        Self {
            group: group.into(),
            path: path.into(),
            command: command.into(),
            last_modified: Mutex::new(last_modified),
            permit: ExecutionPermit::new(),
        }
    }

    /// Name of the `[spys.<name>]` group this entry came from.
    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Command with the placeholder already substituted.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Last modification time seen by the poller.
    pub fn last_modified(&self) -> SystemTime {
        *self
            .last_modified
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `observed` if it differs from the last seen time.
    ///
    /// Returns true when the time changed. Any difference counts, including
    /// a file whose timestamp moved backwards.
    pub(crate) fn record_modified(&self, observed: SystemTime) -> bool {
        let mut last = self
            .last_modified
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *last == observed {
            return false;
        }
        *last = observed;
        true
    }

    pub fn permit(&self) -> &ExecutionPermit {
        &self.permit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn record_modified_reports_any_difference() {
        let t0 = UNIX_EPOCH + Duration::from_secs(100);
        let entry = WatchEntry::new("g", "a.txt", "echo a.txt", t0);

        assert!(!entry.record_modified(t0));
        assert!(entry.record_modified(t0 + Duration::from_secs(1)));
        assert_eq!(entry.last_modified(), t0 + Duration::from_secs(1));

        // Older than stored still counts as a change.
        assert!(entry.record_modified(t0));
        assert_eq!(entry.last_modified(), t0);
    }
}
