// src/watch/poller.rs

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::engine::ChangeEvent;
use crate::errors::{Result, SpyrunError};
use crate::fs::FileSystem;
use crate::registry::Registry;

/// Periodically re-stats every watch entry and emits change events.
///
/// - stat fails: emit [`ChangeEvent::unreadable`], keep the stored time, keep
///   polling the entry. This repeats every sweep until the file is back.
/// - stat returns a different time (exact comparison): store it and emit
///   [`ChangeEvent::modified`].
/// - otherwise nothing.
///
/// Entries are visited sequentially, so a very large registry stretches the
/// gap between checks of the later entries.
pub struct Poller {
    registry: Arc<Registry>,
    fs: Arc<dyn FileSystem>,
    interval: Duration,
    events_tx: mpsc::UnboundedSender<ChangeEvent>,
}

impl fmt::Debug for Poller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Poller")
            .field("entries", &self.registry.len())
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

impl Poller {
    pub fn new(
        registry: Arc<Registry>,
        fs: Arc<dyn FileSystem>,
        interval: Duration,
        events_tx: mpsc::UnboundedSender<ChangeEvent>,
    ) -> Self {
        Self {
            registry,
            fs,
            interval,
            events_tx,
        }
    }

    /// Check every entry once. Returns how many events were emitted.
    ///
    /// Fails only when the receiving side of the event channel is gone.
    pub fn sweep(&self) -> Result<usize> {
        let mut emitted = 0;

        for entry in self.registry.entries() {
            let event = match self.fs.modified(entry.path()) {
                Err(err) => {
                    warn!(
                        group = %entry.group(),
                        file = %entry.path().display(),
                        error = %err,
                        "failed to stat watched file"
                    );
                    ChangeEvent::unreadable(Arc::clone(entry))
                }
                Ok(observed) if entry.record_modified(observed) => {
                    debug!(
                        group = %entry.group(),
                        file = %entry.path().display(),
                        "modification time changed"
                    );
                    ChangeEvent::modified(Arc::clone(entry))
                }
                Ok(_) => continue,
            };

            self.events_tx
                .send(event)
                .map_err(|_| SpyrunError::EventChannelClosed)?;
            emitted += 1;
        }

        Ok(emitted)
    }

    /// Sweep, sleep for the interval, repeat.
    ///
    /// Never returns while the dispatcher is alive. When the event channel
    /// closes the loop stops and returns `Ok(())`.
    pub async fn run(self) -> Result<()> {
        info!(
            entries = self.registry.len(),
            interval = ?self.interval,
            "poller started"
        );

        loop {
            if self.events_tx.is_closed() {
                debug!("event channel closed; poller stopping");
                return Ok(());
            }
            match self.sweep() {
                Ok(_) => {}
                Err(SpyrunError::EventChannelClosed) => {
                    debug!("event channel closed; poller stopping");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
            sleep(self.interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigFile, GroupConfig, RawConfigFile};
    use crate::engine::ChangeReason;
    use crate::fs::mock::MockFileSystem;

    fn setup(fs: &MockFileSystem) -> (Poller, mpsc::UnboundedReceiver<ChangeEvent>) {
        let mut raw = RawConfigFile::default();
        raw.spys.insert(
            "build".to_string(),
            GroupConfig {
                file: "src/*.txt".to_string(),
                command: "echo $SPYRUN_FILE".to_string(),
            },
        );
        let cfg = ConfigFile::try_from(raw).unwrap();
        let registry = Arc::new(Registry::build(&cfg, fs).unwrap());
        let (tx, rx) = mpsc::unbounded_channel();
        let fs: Arc<dyn FileSystem> = Arc::new(fs.clone());
        (Poller::new(registry, fs, cfg.poll_interval(), tx), rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<ChangeEvent>) -> Vec<(String, ChangeReason)> {
        let mut out = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            out.push((ev.entry.path().to_string_lossy().into_owned(), ev.reason));
        }
        out
    }

    #[test]
    fn unchanged_files_produce_no_events() {
        let fs = MockFileSystem::new();
        fs.add_file("src/a.txt");
        fs.add_file("src/b.txt");
        let (poller, mut rx) = setup(&fs);

        assert_eq!(poller.sweep().unwrap(), 0);
        assert_eq!(poller.sweep().unwrap(), 0);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn one_event_per_timestamp_transition() {
        let fs = MockFileSystem::new();
        fs.add_file("src/a.txt");
        fs.add_file("src/b.txt");
        let (poller, mut rx) = setup(&fs);

        fs.touch("src/a.txt");
        assert_eq!(poller.sweep().unwrap(), 1);
        assert_eq!(poller.sweep().unwrap(), 0);

        assert_eq!(
            drain(&mut rx),
            vec![("src/a.txt".to_string(), ChangeReason::Modified)]
        );
    }

    #[test]
    fn missing_file_fires_every_sweep_until_restored() {
        let fs = MockFileSystem::new();
        fs.add_file("src/a.txt");
        let (poller, mut rx) = setup(&fs);
        let before = poller.registry.entries().next().unwrap().last_modified();

        fs.remove("src/a.txt");
        for _ in 0..3 {
            assert_eq!(poller.sweep().unwrap(), 1);
        }
        let events = drain(&mut rx);
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|(_, r)| *r == ChangeReason::Unreadable));

        // Stored time is untouched while the file is gone.
        let entry = poller.registry.entries().next().unwrap();
        assert_eq!(entry.last_modified(), before);

        // Restored with the same timestamp: quiet again.
        fs.add_file("src/a.txt");
        assert_eq!(poller.sweep().unwrap(), 0);
    }

    #[test]
    fn closed_channel_is_reported() {
        let fs = MockFileSystem::new();
        fs.add_file("src/a.txt");
        let (poller, rx) = setup(&fs);
        drop(rx);

        fs.touch("src/a.txt");
        assert!(matches!(poller.sweep(), Err(SpyrunError::EventChannelClosed)));
    }
}
