// src/registry/mod.rs

//! Target registry: the fixed set of watch entries built at startup.
//!
//! Every `[spys.<name>]` group's glob pattern is expanded once. Each matched
//! path becomes a [`WatchEntry`] carrying its initial modification time and
//! its fully substituted command. Nothing is added or removed afterwards, so
//! the registry itself needs no locking; only per-entry state does.

pub mod entry;
pub mod patterns;
pub mod substitute;

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::{ConfigFile, GroupName};
use crate::errors::{Result, SpyrunError};
use crate::fs::FileSystem;

pub use entry::WatchEntry;
pub use patterns::expand_glob;
pub use substitute::{substitute, PLACEHOLDER};

/// Entries produced by one group's pattern.
#[derive(Debug)]
pub struct WatchGroup {
    name: GroupName,
    pattern: String,
    entries: Vec<Arc<WatchEntry>>,
}

impl WatchGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn entries(&self) -> &[Arc<WatchEntry>] {
        &self.entries
    }
}

/// All watch groups, ordered by group name.
#[derive(Debug, Default)]
pub struct Registry {
    groups: Vec<WatchGroup>,
}

impl Registry {
    /// Expand every group in `cfg` against `fs`.
    ///
    /// Fails on the first malformed pattern or on a matched path that cannot
    /// be stat'ed. Both are startup-only checks.
    pub fn build(cfg: &ConfigFile, fs: &dyn FileSystem) -> Result<Self> {
        let mut groups = Vec::with_capacity(cfg.groups().len());

        for (name, group) in cfg.groups().iter() {
            let paths = expand_glob(fs, &group.file).map_err(|source| SpyrunError::InvalidGlob {
                group: name.clone(),
                pattern: group.file.clone(),
                source,
            })?;

            if paths.is_empty() {
                warn!(group = %name, pattern = %group.file, "pattern matched no files");
            }

            let mut entries = Vec::with_capacity(paths.len());
            for path in paths {
                let modified = fs.modified(&path).map_err(|source| SpyrunError::Stat {
                    path: path.clone(),
                    source,
                })?;
                let command = substitute(&group.command, &path.to_string_lossy());

                info!(
                    group = %name,
                    file = %path.display(),
                    command = %command,
                    "registered watch entry"
                );

                entries.push(Arc::new(WatchEntry::new(name.clone(), path, command, modified)));
            }

            groups.push(WatchGroup {
                name: name.clone(),
                pattern: group.file.clone(),
                entries,
            });
        }

        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[WatchGroup] {
        &self.groups
    }

    /// All entries in sweep order: by group name, then by path.
    pub fn entries(&self) -> impl Iterator<Item = &Arc<WatchEntry>> {
        self.groups.iter().flat_map(|g| g.entries.iter())
    }

    /// Look up the entry for `path` within `group`.
    pub fn entry(&self, group: &str, path: impl AsRef<Path>) -> Option<&Arc<WatchEntry>> {
        let path = path.as_ref();
        self.groups
            .iter()
            .find(|g| g.name == group)?
            .entries
            .iter()
            .find(|e| e.path() == path)
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
